//! Offset to row resolution.

/// Return the 0-based row containing byte `offset` of `contents`.
///
/// Counts the newlines strictly before `offset` by searching backward from
/// it one newline at a time. Offsets past the end are clamped.
pub fn offset_row(contents: &str, offset: usize) -> usize {
    let bytes = contents.as_bytes();
    let mut end = offset.min(bytes.len());
    let mut row = 0;

    while let Some(pos) = bytes[..end].iter().rposition(|&b| b == b'\n') {
        row += 1;
        end = pos;
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_line() {
        assert_eq!(offset_row("def foo():\n    pass\n", 0), 0);
        assert_eq!(offset_row("def foo():\n    pass\n", 4), 0);
    }

    #[test]
    fn test_offset_on_newline_belongs_to_its_line() {
        // The newline itself ends row 0
        assert_eq!(offset_row("ab\ncd", 2), 0);
        assert_eq!(offset_row("ab\ncd", 3), 1);
    }

    #[test]
    fn test_later_lines() {
        let text = "a\nb\n\nc";
        assert_eq!(offset_row(text, 2), 1);
        assert_eq!(offset_row(text, 4), 2);
        assert_eq!(offset_row(text, 5), 3);
    }

    #[test]
    fn test_empty_and_out_of_range() {
        assert_eq!(offset_row("", 0), 0);
        assert_eq!(offset_row("a\nb", 100), 1);
    }

    #[test]
    fn test_multibyte_text() {
        let text = "é\nü\nx";
        let x = text.find('x').unwrap();
        assert_eq!(offset_row(text, x), 2);
    }

    proptest! {
        #[test]
        fn prop_row_equals_preceding_newlines(text in "[a-z \\n]{0,200}", pos in 0usize..200) {
            prop_assume!(pos < text.len());
            let expected = text[..pos].matches('\n').count();
            prop_assert_eq!(offset_row(&text, pos), expected);
        }
    }
}
