#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    #[default]
    Empty,
}

impl CellValue {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(value) => value,
            Self::Empty => "",
        }
    }

    /// True for empty and whitespace-only cells.
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// Cell at a 1-based column position.
    pub fn cell(&self, position: usize) -> Option<&CellValue> {
        position
            .checked_sub(1)
            .and_then(|index| self.cells.get(index))
    }

    /// Text at a 1-based column position; cells past the end read as empty.
    pub fn text(&self, position: usize) -> &str {
        self.cell(position).map(CellValue::as_str).unwrap_or("")
    }

    /// Write a cell at a 1-based column position, padding short rows with
    /// empty cells. Position 0 is ignored.
    pub fn set_cell(&mut self, position: usize, value: CellValue) {
        let Some(index) = position.checked_sub(1) else {
            return;
        };
        if self.cells.len() <= index {
            self.cells.resize(index + 1, CellValue::Empty);
        }
        self.cells[index] = value;
    }
}

impl<S: Into<CellValue>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Header cells as `(name, position)` pairs with 1-based positions.
    pub fn header_cells(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.as_str(), index + 1))
    }

    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.cells.len())
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }
}
