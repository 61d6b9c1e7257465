//! Resolved dependency tree node

use serde::{Deserialize, Serialize};

/// A node of the resolved dependency tree
///
/// `name` encodes `<package>@<resolved-version>`. Workspace packages carry
/// their own resolutions in `children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyNode {
    /// `<package>@<version>` as printed by yarn
    pub name: String,
    /// Nested nodes (depth 1)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DependencyNode>,
}

impl DependencyNode {
    /// Creates a leaf node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Sets the children of this node (builder pattern)
    pub fn with_children(mut self, children: Vec<DependencyNode>) -> Self {
        self.children = children;
        self
    }

    /// Splits the name on the last `@` into `(package, version)`
    ///
    /// Scoped packages such as `@babel/core@7.0.0` keep their leading `@`.
    /// Returns `None` when the name holds no version separator.
    pub fn split_name(&self) -> Option<(&str, &str)> {
        let sep = self.name.rfind('@')?;
        if sep == 0 {
            return None;
        }
        Some((&self.name[..sep], &self.name[sep + 1..]))
    }

    /// Returns true if this node describes the given package
    pub fn is_package(&self, package: &str) -> bool {
        self.name
            .strip_prefix(package)
            .is_some_and(|rest| rest.starts_with('@'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_name_plain() {
        let node = DependencyNode::new("lodash@4.17.21");
        assert_eq!(node.split_name(), Some(("lodash", "4.17.21")));
    }

    #[test]
    fn test_split_name_scoped() {
        let node = DependencyNode::new("@types/node@20.10.0");
        assert_eq!(node.split_name(), Some(("@types/node", "20.10.0")));
    }

    #[test]
    fn test_split_name_without_version() {
        assert_eq!(DependencyNode::new("lodash").split_name(), None);
        assert_eq!(DependencyNode::new("@scope/pkg").split_name(), None);
    }

    #[test]
    fn test_split_name_prerelease() {
        let node = DependencyNode::new("next@14.0.0-canary.1");
        assert_eq!(node.split_name(), Some(("next", "14.0.0-canary.1")));
    }

    #[test]
    fn test_is_package() {
        let node = DependencyNode::new("app@1.0.0");
        assert!(node.is_package("app"));
        assert!(!node.is_package("ap"));
        assert!(!node.is_package("app-core"));
    }

    #[test]
    fn test_deserialize_yarn_node() {
        let json = r#"{
            "name": "workspace-a@1.0.0",
            "children": [{"name": "lodash@4.17.20", "color": "dim", "shadow": true}],
            "hint": null,
            "color": "bold",
            "depth": 0
        }"#;
        let node: DependencyNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.name, "workspace-a@1.0.0");
        assert_eq!(node.children, vec![DependencyNode::new("lodash@4.17.20")]);
    }

    #[test]
    fn test_deserialize_without_children() {
        let node: DependencyNode = serde_json::from_str(r#"{"name": "a@1.0.0"}"#).unwrap();
        assert!(node.children.is_empty());
    }
}
