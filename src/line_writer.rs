use crate::{
    destination::{create_file, CreateDestination, FusedSink},
    row::Row,
    write_error::WriteError,
};
use csv::{Terminator, WriterBuilder};
use log::{debug, error};
use std::{
    io::{self, Write},
    panic,
};
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};

pub type Outcome = Result<(), WriteError>;

pub trait CsvLineWriter {
    /// Writes every row received on `rows` to the destination, then sends the
    /// outcome. Rows already written stay on disk after a failure.
    ///
    /// # Panics
    ///
    /// Panics if called from within an asynchronous execution context, since
    /// rows are received with `blocking_recv`. Use [`CsvWriteConfig::spawn`]
    /// from async code.
    fn write_lines(&self, rows: mpsc::Receiver<Row>, outcome: oneshot::Sender<Outcome>);
}

pub struct CsvWriteConfig<F = CreateDestination> {
    destination_path: String,
    create_destination: F,
}

impl CsvWriteConfig {
    pub fn new(destination_path: String) -> CsvWriteConfig {
        Self {
            destination_path,
            create_destination: create_file,
        }
    }
}

impl<F> CsvWriteConfig<F> {
    /// Replaces the strategy that opens the destination.
    pub fn with_destination<G>(self, create_destination: G) -> CsvWriteConfig<G> {
        CsvWriteConfig {
            destination_path: self.destination_path,
            create_destination,
        }
    }
}

impl<F, W> CsvWriteConfig<F>
where
    F: Fn(&str) -> io::Result<W>,
    W: Write,
{
    fn write_session(&self, rows: &mut mpsc::Receiver<Row>) -> Outcome {
        let destination = (self.create_destination)(self.destination_path.as_str())
            .map_err(|source| WriteError::DestinationCreate {
                path: self.destination_path.clone(),
                source,
            })?;
        debug!("writing rows to: {}", self.destination_path);

        // dropping the writer on any return path closes the destination; the
        // fuse keeps its drop-time flush from reaching a sink that already failed
        let mut wtr = WriterBuilder::new()
            .flexible(true)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(FusedSink::new(destination));
        let mut written = 0usize;
        while let Some(row) = rows.blocking_recv() {
            if let Err(source) = wtr.write_record(row.fields()) {
                return Err(WriteError::RowWrite { row, source });
            }
            written += 1;
        }
        wtr.flush().map_err(|source| WriteError::Flush {
            path: self.destination_path.clone(),
            source,
        })?;
        debug!("wrote {written} rows to: {}", self.destination_path);
        Ok(())
    }
}

impl<F, W> CsvLineWriter for CsvWriteConfig<F>
where
    F: Fn(&str) -> io::Result<W>,
    W: Write,
{
    fn write_lines(&self, mut rows: mpsc::Receiver<Row>, outcome: oneshot::Sender<Outcome>) {
        let result = self.write_session(&mut rows);
        // producers blocked on a full channel see it closed from here on
        drop(rows);
        if let Err(err) = &result {
            error!("{err}");
        }
        if outcome.send(result).is_err() {
            debug!("outcome receiver dropped before the session ended");
        }
    }
}

impl<F, W> CsvWriteConfig<F>
where
    F: Fn(&str) -> io::Result<W> + Send + 'static,
    W: Write,
{
    /// Runs the session on a dedicated blocking thread.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn spawn(self, rows: mpsc::Receiver<Row>) -> WriterHandle {
        let (outcome_tx, outcome_rx) = oneshot::channel();
        let task = tokio::task::spawn_blocking(move || self.write_lines(rows, outcome_tx));
        WriterHandle {
            outcome: outcome_rx,
            task,
        }
    }
}

/// Handle to a session started with [`CsvWriteConfig::spawn`].
pub struct WriterHandle {
    outcome: oneshot::Receiver<Outcome>,
    task: JoinHandle<()>,
}

impl WriterHandle {
    /// Completes once the row senders are dropped or a write fails. A panic in
    /// the writer is resumed here.
    pub async fn finish(self) -> Outcome {
        if let Err(err) = self.task.await {
            if err.is_panic() {
                panic::resume_unwind(err.into_panic());
            }
        }
        self.outcome.await.unwrap_or(Err(WriteError::Aborted))
    }
}
