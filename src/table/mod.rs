pub mod read;
pub mod write;

/// Contents of one worksheet, as uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names, from the first row of the sheet.
    pub headers: Vec<String>,
    /// Each later row, one String per header column.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at `row` in the column named `column`, if both exist.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}
