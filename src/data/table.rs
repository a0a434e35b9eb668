use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use super::{Cell, DataError};

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Column {
            name: name.into(),
            cells,
        }
    }

    pub fn from_values(name: impl Into<String>, values: &[i64]) -> Self {
        Column::new(name, super::widen(values))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Equal-length named columns, ready for the CSV sink.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    pub fn new(columns: Vec<Column>) -> Result<Self, DataError> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for column in &columns {
                if column.len() != expected {
                    return Err(DataError::ColumnLengthMismatch {
                        name: column.name.clone(),
                        expected,
                        actual: column.len(),
                    });
                }
            }
        }
        Ok(Dataset { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Writes the dataset as CSV: one header row of column names, one record
    /// per row, no index column. Missing cells become empty fields.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut writer = Writer::from_writer(writer);

        writer.write_record(self.columns.iter().map(|c| c.name.as_str()))?;
        for row in 0..self.height() {
            let record: Vec<Cell> = self.columns.iter().map(|c| c.cells[row]).collect();
            writer.serialize(record)?;
        }

        writer.flush()?;
        Ok(())
    }

    pub fn to_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<(), csv::Error> {
        let file = File::create(path)?;
        self.write_csv(file)
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>6}", "")?;
        for column in &self.columns {
            write!(f, " {:>10}", column.name)?;
        }
        writeln!(f)?;
        for row in 0..self.height() {
            write!(f, "{row:>6}")?;
            for column in &self.columns {
                write!(f, " {:>10}", column.cells[row].to_string())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
