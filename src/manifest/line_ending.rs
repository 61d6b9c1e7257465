//! Line ending detection and normalization

/// Line ending used when the source text has no line break
#[cfg(windows)]
pub const HOST_LINE_ENDING: &str = "\r\n";
/// Line ending used when the source text has no line break
#[cfg(not(windows))]
pub const HOST_LINE_ENDING: &str = "\n";

/// Returns the line ending of the first line break in `text`
///
/// Falls back to the host convention when `text` has no line break.
pub fn detect_line_ending(text: &str) -> &'static str {
    match text.find('\n') {
        Some(pos) if pos > 0 && text.as_bytes()[pos - 1] == b'\r' => "\r\n",
        Some(_) => "\n",
        None => HOST_LINE_ENDING,
    }
}

/// Rewrites every `\n` or `\r\n` in `text` to `eol`
pub fn normalize_line_endings(text: &str, eol: &str) -> String {
    let unified = text.replace("\r\n", "\n");
    if eol == "\n" {
        unified
    } else {
        unified.replace('\n', eol)
    }
}
