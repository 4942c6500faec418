use once_cell::sync::Lazy;
use regex::Regex;

// A line break followed by one or more lines holding nothing but spaces/tabs.
static BLANK_LINE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n(?:[ \t]*\r?\n)+").expect("valid boundary regex"));

/// Split raw multi-story input into independent text blocks.
///
/// Blocks are returned as slices of the input, untouched. Blocks that are
/// empty or whitespace-only are dropped, so empty input yields no blocks.
pub fn segment(raw_text: &str) -> Vec<&str> {
    BLANK_LINE_BOUNDARY
        .split(raw_text)
        .filter(|block| !block.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t\n  ").is_empty());
    }

    #[test]
    fn test_single_block() {
        let text = "As a user, I want to log in so that I can work.\nPriority: High";
        assert_eq!(segment(text), vec![text]);
    }

    #[test]
    fn test_splits_on_blank_lines() {
        let blocks = segment("first story\n\nsecond story\n\n\n\nthird story");
        assert_eq!(blocks, vec!["first story", "second story", "third story"]);
    }

    #[test]
    fn test_whitespace_only_line_is_a_boundary() {
        let blocks = segment("first\n   \t\nsecond");
        assert_eq!(blocks, vec!["first", "second"]);
    }

    #[test]
    fn test_crlf_input() {
        let blocks = segment("first\r\nPriority: Low\r\n\r\nsecond");
        assert_eq!(blocks, vec!["first\r\nPriority: Low", "second"]);
    }

    #[test]
    fn test_blocks_are_not_trimmed() {
        let blocks = segment("  indented story\nSP: 3  \n\nnext");
        assert_eq!(blocks[0], "  indented story\nSP: 3  ");
    }

    #[test]
    fn test_leading_and_trailing_blank_lines() {
        let blocks = segment("\n\nonly story\n\n");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].trim(), "only story");
    }
}
