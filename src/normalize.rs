// src/normalize.rs

/// Marker searched for (ASCII case-insensitive) and written back in lowercase.
pub const MD_MARKER: &str = ".md";

fn is_trailing_junk(c: char) -> bool {
    matches!(
        c,
        ' ' | '\t' | '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{200b}' | '\u{feff}'
    )
}

/// Position of the last `.md` in `filename`, ignoring ASCII case.
fn last_marker(filename: &str) -> Option<usize> {
    filename
        .as_bytes()
        .windows(MD_MARKER.len())
        .rposition(|w| w.eq_ignore_ascii_case(MD_MARKER.as_bytes()))
}

/// Normalizes a Markdown file name.
///
/// Everything from the last `.md` (any case) onward is replaced with a
/// lowercase `.md`, and whitespace, zero-width spaces and BOMs directly in
/// front of it are dropped. Names without the marker come back unchanged.
/// Note that text after the marker is discarded too, so `notes.mdx` becomes
/// `notes.md`.
pub fn normalize_name(filename: &str) -> String {
    let Some(pos) = last_marker(filename) else {
        return filename.to_string();
    };
    // '.' is ASCII so `pos` is always a char boundary.
    let stem = filename[..pos].trim_end_matches(is_trailing_junk);
    format!("{}{}", stem, MD_MARKER)
}
