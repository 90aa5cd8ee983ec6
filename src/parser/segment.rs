//! Split a raw dump into blank-line-delimited blocks.

/// Split text into blocks of consecutive non-empty lines
///
/// **Public** - first stage of parsing
///
/// Lines are returned verbatim (no trimming). Runs of empty lines act as a
/// single separator and a trailing block needs no terminating blank line.
/// Never fails: text with no non-empty lines yields no blocks.
pub fn segment_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut pending: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if !line.is_empty() {
            pending.push(line);
            continue;
        }
        if !pending.is_empty() {
            blocks.push(std::mem::take(&mut pending));
        }
    }

    if !pending.is_empty() {
        blocks.push(pending);
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(segment_blocks("").is_empty());
        assert!(segment_blocks("\n\n\n").is_empty());
    }

    #[test]
    fn test_multiple_blank_lines_between_blocks() {
        let blocks = segment_blocks("a\nb\n\n\n\nc\n");
        assert_eq!(blocks, vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn test_trailing_block_without_newline() {
        let blocks = segment_blocks("a\n\nb");
        assert_eq!(blocks, vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_lines_kept_verbatim() {
        let blocks = segment_blocks("x \n\ty:1 +0x2\r\n");
        assert_eq!(blocks, vec![vec!["x ", "\ty:1 +0x2\r"]]);
    }
}
