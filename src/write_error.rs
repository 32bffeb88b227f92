use crate::row::Row;
use derive_more::{Display, Error};
use std::io;

#[derive(Debug, Display, Error)]
pub enum WriteError {
    /// The destination could not be opened for writing. No rows were read.
    #[display("can't create destination file {path}: {source}")]
    DestinationCreate { path: String, source: io::Error },

    /// Serializing or writing `row` failed. Rows after it were never read.
    #[display("can't write row {row} to csv: {source}")]
    RowWrite { row: Row, source: csv::Error },

    #[display("can't flush csv output to {path}: {source}")]
    Flush { path: String, source: io::Error },

    #[display("writer task ended without reporting an outcome")]
    Aborted,
}

impl WriteError {
    pub fn row(&self) -> Option<&Row> {
        match self {
            WriteError::RowWrite { row, .. } => Some(row),
            _ => None,
        }
    }
}
