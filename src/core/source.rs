use crate::core::models::CardId;

pub const FRONT_COLUMN: usize = 1;
pub const BACK_COLUMN: usize = 2;

/// One tab-separated line of the word list, tagged with its sheet row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub row_number: u32,
    pub columns: Vec<String>,
}

impl RawRow {
    pub fn new(row_number: u32, columns: Vec<String>) -> Self {
        Self { row_number, columns }
    }

    pub fn id(&self) -> CardId {
        CardId(self.row_number)
    }

    /// Trimmed cell at `index`, or `None` when missing or blank.
    pub fn cell(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(|c| c.trim()).filter(|c| !c.is_empty())
    }

    pub fn front(&self) -> Option<&str> {
        self.cell(FRONT_COLUMN)
    }

    pub fn back(&self) -> Option<&str> {
        self.cell(BACK_COLUMN)
    }
}

/// Splits a TSV blob into rows. The first line is the header and is dropped;
/// every other line keeps its position so row numbers match the sheet even
/// when blank lines are present. Lines past `u32::MAX` have no row number and
/// are dropped.
pub fn parse_rows(text: &str) -> Vec<RawRow> {
    numbered_lines(text.lines().enumerate())
        .map(|(row_number, line)| {
            let columns = line.split('\t').map(str::to_string).collect();
            RawRow::new(row_number, columns)
        })
        .collect()
}

fn numbered_lines<'a>(
    lines: impl Iterator<Item = (usize, &'a str)>,
) -> impl Iterator<Item = (u32, &'a str)> {
    lines.skip(1).map_while(|(index, line)| match u32::try_from(index + 1) {
        Ok(row_number) => Some((row_number, line)),
        Err(_) => {
            log::warn!("Row {} is past the last supported row; ignoring the rest", index + 1);
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_dropped_and_rows_numbered_from_two() {
        let rows = parse_rows("no\tja\ten\n1\t犬\tdog\n2\t猫\tcat\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].row_number, 2);
        assert_eq!(rows[0].front(), Some("犬"));
        assert_eq!(rows[0].back(), Some("dog"));
        assert_eq!(rows[1].id(), CardId(3));
    }

    #[test]
    fn test_blank_lines_keep_their_row_number() {
        let rows = parse_rows("header\n\n1\t犬\tdog");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].front(), None);
        assert_eq!(rows[1].row_number, 3);
    }

    #[test]
    fn test_crlf_and_whitespace_cells() {
        let rows = parse_rows("h\r\n1\t  犬 \t dog\r\n2\t \tcat\r\n");
        assert_eq!(rows[0].front(), Some("犬"));
        assert_eq!(rows[0].back(), Some("dog"));
        assert_eq!(rows[1].front(), None);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_rows_past_u32_range_are_dropped() {
        let last = u32::MAX as usize;
        let lines = vec![(0, "h"), (1, "a"), (last - 1, "b"), (last, "c"), (last + 1, "d")];

        let numbered: Vec<(u32, &str)> = numbered_lines(lines.into_iter()).collect();

        assert_eq!(numbered, vec![(2, "a"), (u32::MAX, "b")]);
    }

    #[test]
    fn test_empty_and_header_only_input() {
        assert!(parse_rows("").is_empty());
        assert!(parse_rows("only a header").is_empty());
    }
}
