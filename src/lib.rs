mod destination;
mod input_row_reader;
mod line_writer;
mod row;
mod write_error;

pub use destination::{create_file, CreateDestination};
pub use input_row_reader::InputRowReader;
pub use line_writer::{CsvLineWriter, CsvWriteConfig, Outcome, WriterHandle};
pub use row::Row;
pub use write_error::WriteError;
