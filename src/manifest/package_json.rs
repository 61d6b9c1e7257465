//! package.json model
//!
//! Handles:
//! - dependencies
//! - devDependencies
//! - workspaces (array or `{ "packages": [...] }`)
//!
//! The parsed object keeps every field and its key order, so serializing it
//! back only differs from the source where versions were rewritten.

use crate::domain::{DependencyNode, DependencySection, PolicyFlags, VersionChange};
use crate::error::ManifestError;
use crate::manifest::line_ending::normalize_line_endings;
use crate::update::reconcile;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::debug;

/// Parsed package.json
#[derive(Debug, Clone, PartialEq)]
pub struct PackageJson {
    /// Path the manifest was read from
    path: PathBuf,
    /// Top-level fields in source order
    fields: Map<String, Value>,
}

impl PackageJson {
    /// Parse package.json content
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, ManifestError> {
        let path = path.into();
        let value: Value = serde_json::from_str(content)
            .map_err(|e| ManifestError::json_parse_error(&path, e.to_string()))?;

        match value {
            Value::Object(fields) => Ok(Self { path, fields }),
            other => Err(ManifestError::json_parse_error(
                &path,
                format!("expected a JSON object, found {}", json_type(&other)),
            )),
        }
    }

    /// Package name
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    /// Returns the first section declaring `package`
    pub fn declared_section(&self, package: &str) -> Option<DependencySection> {
        DependencySection::all()
            .iter()
            .copied()
            .find(|section| self.section(*section).is_some_and(|deps| deps.contains_key(package)))
    }

    /// Version string of `package` in `section`
    pub fn dependency_version(&self, section: DependencySection, package: &str) -> Option<&str> {
        self.section(section)?.get(package)?.as_str()
    }

    /// Overwrite the version string of an already declared dependency
    ///
    /// Returns false when the section or the package is missing.
    pub fn set_dependency_version(
        &mut self,
        section: DependencySection,
        package: &str,
        version: impl Into<String>,
    ) -> bool {
        let Some(slot) = self
            .fields
            .get_mut(section.key())
            .and_then(Value::as_object_mut)
            .and_then(|deps| deps.get_mut(package))
        else {
            return false;
        };
        *slot = Value::String(version.into());
        true
    }

    /// Workspace glob patterns, empty when `workspaces` is absent
    pub fn workspace_patterns(&self) -> Result<Vec<String>, ManifestError> {
        let patterns = match self.fields.get("workspaces") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(Value::Object(obj)) => match obj.get("packages") {
                Some(Value::Array(items)) => items,
                Some(other) => {
                    return Err(ManifestError::invalid_workspaces(
                        &self.path,
                        format!("\"packages\" must be an array, found {}", json_type(other)),
                    ))
                }
                None => {
                    return Err(ManifestError::invalid_workspaces(
                        &self.path,
                        "object form requires a \"packages\" array",
                    ))
                }
            },
            Some(other) => {
                return Err(ManifestError::invalid_workspaces(
                    &self.path,
                    format!("expected an array or object, found {}", json_type(other)),
                ))
            }
        };

        patterns
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    ManifestError::invalid_workspaces(
                        &self.path,
                        format!("pattern must be a string, found {}", json_type(item)),
                    )
                })
            })
            .collect()
    }

    /// Rewrite declared versions from the resolved nodes
    ///
    /// Nodes are applied in order, so a later node for the same package
    /// wins. Each package is looked up in dependencies first, then in
    /// devDependencies. Returns the versions that differ from the source.
    pub fn apply_tree<'a>(
        &mut self,
        nodes: impl IntoIterator<Item = &'a DependencyNode>,
        policy: &PolicyFlags,
    ) -> Vec<VersionChange> {
        let before = self.section_snapshot();

        for node in nodes {
            let Some((package, resolved)) = node.split_name() else {
                debug!(node = %node.name, "skipping tree node without version");
                continue;
            };
            let Some(section) = self.declared_section(package) else {
                continue;
            };
            let Some(current) = self.dependency_version(section, package) else {
                debug!(package, %section, "skipping non-string version");
                continue;
            };

            let next = reconcile(resolved, current, policy);
            debug!(package, %section, from = current, to = %next, "reconciled");
            self.set_dependency_version(section, package, next);
        }

        self.diff_against(&before)
    }

    /// Serialize as 2-space indented JSON with a trailing newline using `eol`
    pub fn to_pretty_string(&self, eol: &str) -> Result<String, ManifestError> {
        let mut text = serde_json::to_string_pretty(&self.fields).map_err(|e| {
            ManifestError::json_parse_error(&self.path, format!("serialization failed: {}", e))
        })?;
        text.push('\n');
        Ok(normalize_line_endings(&text, eol))
    }

    fn section(&self, section: DependencySection) -> Option<&Map<String, Value>> {
        self.fields.get(section.key())?.as_object()
    }

    fn section_snapshot(&self) -> Vec<(DependencySection, Map<String, Value>)> {
        DependencySection::all()
            .iter()
            .filter_map(|s| self.section(*s).map(|deps| (*s, deps.clone())))
            .collect()
    }

    fn diff_against(&self, before: &[(DependencySection, Map<String, Value>)]) -> Vec<VersionChange> {
        let mut changes = Vec::new();
        for (section, old_deps) in before {
            let Some(new_deps) = self.section(*section) else {
                continue;
            };
            for (name, new_value) in new_deps {
                let (Some(from), Some(to)) = (
                    old_deps.get(name).and_then(Value::as_str),
                    new_value.as_str(),
                ) else {
                    continue;
                };
                if from != to {
                    changes.push(VersionChange::new(name, *section, from, to));
                }
            }
        }
        changes
    }
}

/// Children of the root node describing workspace package `name`
///
/// Returns an empty slice when no root node matches.
pub fn workspace_subtree<'a>(root: &'a [DependencyNode], name: Option<&str>) -> &'a [DependencyNode] {
    let Some(name) = name else {
        return &[];
    };
    root.iter()
        .find(|node| node.is_package(name))
        .map(|node| node.children.as_slice())
        .unwrap_or(&[])
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
