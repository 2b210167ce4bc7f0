//! Unified diff rendering for dry runs.

use similar::{ChangeTag, TextDiff};

/// Render a unified diff between two texts with three lines of context.
#[must_use]
pub fn unified_diff(original: &str, modified: &str) -> String {
    let diff = TextDiff::from_lines(original, modified);
    let mut out = String::new();

    for (index, group) in diff.grouped_ops(3).iter().enumerate() {
        if index > 0 {
            out.push_str("...\n");
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };
                out.push_str(sign);
                out.push_str(change.value());
                if change.missing_newline() {
                    out.push('\n');
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_shows_changed_lines() {
        let diff = unified_diff("a\nold\nc\n", "a\nnew\nc\n");
        assert!(diff.contains("-old"));
        assert!(diff.contains("+new"));
    }

    #[test]
    fn test_identical_texts_diff_empty() {
        assert!(unified_diff("same\n", "same\n").is_empty());
    }
}
