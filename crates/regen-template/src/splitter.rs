//! Terminator-preserving line splitting.

use memchr::memchr2;

/// Split text into lines, each keeping its original terminator.
///
/// A terminator is LF, CR, or CRLF; CR immediately followed by LF counts as
/// one two-byte terminator, never two lines. A trailing span with no
/// terminator becomes a final line. Empty input yields zero lines.
///
/// Concatenating the returned slices reproduces `text` exactly.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;

    while start < bytes.len() {
        match memchr2(b'\n', b'\r', &bytes[start..]) {
            Some(offset) => {
                // Terminators are ASCII, so these offsets are char boundaries.
                let mut end = start + offset + 1;
                if bytes[start + offset] == b'\r' && bytes.get(end) == Some(&b'\n') {
                    end += 1;
                }
                lines.push(&text[start..end]);
                start = end;
            }
            None => {
                lines.push(&text[start..]);
                break;
            }
        }
    }

    lines
}
