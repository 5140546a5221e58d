//! Plain tabular output contract

/// A named table of string cells, handed to a sink as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Logical name; sinks derive sheet or file names from it
    pub name: String,

    /// Column headers
    pub headers: Vec<String>,

    /// Data rows, each as wide as `headers`
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table
    pub fn new(name: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            name: name.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row
    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len(), "row width must match headers");
        self.rows.push(row);
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
