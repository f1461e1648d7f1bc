//! Line cleanup shared by every later stage.
//!
//! Comments are cut at the first `//` without looking at string literals.

const LINE_COMMENT: &str = "//";

/// Trims every line and strips its trailing line comment.
///
/// Blank lines are kept as empty strings so line positions stay intact,
/// including the one after a trailing newline. Every returned line borrows
/// from `src`.
pub fn clean_lines(src: &str) -> Vec<&str> {
    src.split('\n').map(clean_line).collect()
}

/// Cleans a single line.
pub fn clean_line(line: &str) -> &str {
    let line = line.trim();
    match line.find(LINE_COMMENT) {
        Some(idx) => line[..idx].trim_end(),
        None => line,
    }
}

/// [`clean_lines`] joined back into one string.
pub fn clean(src: &str) -> String {
    clean_lines(src).join("\n")
}
