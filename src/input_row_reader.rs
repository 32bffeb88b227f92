use crate::row::Row;
use anyhow::Context;
use csv::{Reader, ReaderBuilder};
use std::io::Read;

/// Reads CSV records from any byte source as untyped rows.
pub struct InputRowReader<R> {
    rdr: Reader<R>,
}

impl<R: Read> InputRowReader<R> {
    pub fn new(source: R) -> InputRowReader<R> {
        let rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(source);
        Self { rdr }
    }

    pub fn rows(self) -> impl Iterator<Item = anyhow::Result<Row>> {
        self.rdr
            .into_deserialize::<Row>()
            .enumerate()
            .map(|(index, row)| row.context(format!("failed to parse input row: {}", index + 1)))
    }
}
