use csv_line_writer::{CsvWriteConfig, InputRowReader};
use log::{debug, error, warn};
use std::{env, io, process};
use tokio::sync::mpsc;

const ROW_CHANNEL_CAPACITY: usize = 1024;

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let args_count = args.len() - 1;
    if args_count != 1 {
        error!(
            "Expected 1 argument, {args_count} were provided\n\
                Usage: {} <destination.csv> < rows.csv",
            args[0]
        );
        process::exit(1);
    }

    let destination_path = &args[1];
    let (row_tx, row_rx) = mpsc::channel(ROW_CHANNEL_CAPACITY);
    let writer = CsvWriteConfig::new(destination_path.to_string()).spawn(row_rx);

    let producer = tokio::task::spawn_blocking(move || -> anyhow::Result<usize> {
        let mut sent = 0usize;
        for row in InputRowReader::new(io::stdin().lock()).rows() {
            if row_tx.blocking_send(row?).is_err() {
                warn!("writer stopped accepting rows after {sent} rows");
                break;
            }
            sent += 1;
        }
        Ok(sent)
    });

    if let Err(err) = writer.finish().await {
        error!("failed to write rows to {destination_path}: {err}");
        process::exit(3);
    }
    match producer.await {
        Ok(Ok(sent)) => debug!("wrote {sent} rows to {destination_path}"),
        Ok(Err(err)) => {
            error!("{err:#}");
            process::exit(2);
        }
        Err(err) => {
            error!("input reader failed: {err}");
            process::exit(2);
        }
    }
}
