use calamine::Data;

/// A single loosely-typed spreadsheet value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

pub type Row = Vec<Cell>;
pub type Grid = Vec<Row>;

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// The raw text of a text cell, untrimmed.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Trimmed text of a text cell, `None` when the cell is not text or is blank.
    #[must_use]
    pub fn trimmed_text(&self) -> Option<&str> {
        self.as_text().map(str::trim).filter(|s| !s.is_empty())
    }

    /// True for non-blank text and for non-zero numbers.
    ///
    /// A zero is treated as absent, the same way the requirement sheets leave
    /// `0` in columns that have nothing to report.
    #[must_use]
    pub fn is_present(&self) -> bool {
        match self {
            Cell::Text(_) => self.trimmed_text().is_some(),
            Cell::Number(n) => *n != 0.0 && !n.is_nan(),
            Cell::Empty => false,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            // Unformatted date serial, as a raw reader reports it
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::Bool(_) | Data::Error(_) | Data::Empty => Cell::Empty,
        }
    }
}
