//! Byte offset to line/column mapping.
//!
//! [`LineOffsetTable`] stores each line start so a lookup is a binary
//! search. Lines and columns are 1-based; columns count characters.

/// Pre-computed line start table for one source text.
///
/// # Example
///
/// ```
/// use clauf_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "int main() {\n  __clauf_print 1;\n}";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 15), (2, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// offsets[i] is the byte offset where line i + 1 starts.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        offsets.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'\n')
                .map(|(i, _)| u32::try_from(i + 1).unwrap_or(u32::MAX)),
        );
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based (line, column) for `offset`.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self.line_start_offset(line).unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());
        let col = source
            .get(line_start..end)
            .map_or(0, |prefix| prefix.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }

    /// Byte offset where a 1-based line starts.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Text of a 1-based line, without its trailing newline.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        let start = self.line_start_offset(line)? as usize;
        let end = self
            .line_start_offset(line + 1)
            .map_or(source.len(), |next| next as usize);
        let text = source.get(start..end)?;
        Some(text.trim_end_matches(['\n', '\r']))
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// One-shot (line, column) lookup; use [`LineOffsetTable`] for repeated lookups.
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    LineOffsetTable::build(source).offset_to_line_col(source, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_starts() {
        let table = LineOffsetTable::build("a\nbb\n\nccc");
        assert_eq!(table.line_count(), 4);
        assert_eq!(table.line_start_offset(1), Some(0));
        assert_eq!(table.line_start_offset(2), Some(2));
        assert_eq!(table.line_start_offset(4), Some(6));
        assert_eq!(table.line_start_offset(0), None);
        assert_eq!(table.line_start_offset(5), None);
    }

    #[test]
    fn test_offset_to_line_col() {
        let source = "int main() {\n  int x;\n}";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.offset_to_line_col(source, 4), (1, 5));
        assert_eq!(table.offset_to_line_col(source, 19), (2, 7));
        assert_eq!(table.offset_to_line_col(source, 22), (3, 1));
    }

    #[test]
    fn test_column_counts_characters() {
        let source = "int größe;";
        // 'e' sits at byte 10 but column 9: 'ö' and 'ß' are two bytes each.
        assert_eq!(offset_to_line_col(source, 10), (1, 9));
    }

    #[test]
    fn test_offset_at_end_of_input() {
        let source = "int x;\n";
        assert_eq!(offset_to_line_col(source, 7), (2, 1));
    }

    #[test]
    fn test_line_text() {
        let source = "first\r\nsecond\nthird";
        let table = LineOffsetTable::build(source);
        assert_eq!(table.line_text(source, 1), Some("first"));
        assert_eq!(table.line_text(source, 2), Some("second"));
        assert_eq!(table.line_text(source, 3), Some("third"));
        assert_eq!(table.line_text(source, 4), None);
    }
}
