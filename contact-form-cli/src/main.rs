//! Drive the contact form from JSON lines.
//!
//! Each stdin line is a [`FormInput`], for example
//! `{"input": "blur", "field": "email", "value": "bob@"}`.
//! Every resulting [`FormEvent`] is written to stdout as one JSON line.
//! Logs go to `contact-form.log`.

mod error;

use std::fs::File;
use std::io::Write;

use contact_form::{FormConfig, FormEvent, FormInput, FormRuntime};
use log::{error, info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use error::CliError;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let log_file = File::create("contact-form.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let (tx, rx) = mpsc::channel(32);
    let reader = tokio::spawn(read_inputs(BufReader::new(tokio::io::stdin()), tx));

    let mut runtime = FormRuntime::new(FormConfig::default());
    let mut renderer = |event: &FormEvent| {
        if let Err(e) = write_event(event) {
            error!("Failed to write event: {}", e);
        }
    };
    runtime.run(rx, &mut renderer).await;

    match reader.await {
        Ok(result) => result,
        Err(e) => Err(CliError::Reader(e.to_string())),
    }
}

/// Read JSON input lines until EOF.
///
/// Lines are split on raw bytes, so a line that is not valid UTF-8 is
/// reported and skipped like any other malformed line.
async fn read_inputs<R: AsyncBufRead + Unpin>(
    reader: R,
    tx: mpsc::Sender<FormInput>,
) -> Result<(), CliError> {
    let mut lines = reader.split(b'\n');
    let mut line_no = 0usize;

    while let Some(line) = lines.next_segment().await? {
        line_no += 1;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        match parse_input(&line) {
            Ok(input) => {
                if tx.send(input).await.is_err() {
                    break;
                }
            }
            Err(e) => {
                warn!("Skipping line {}: {}", line_no, e);
                eprintln!("line {}: {}", line_no, e);
            }
        }
    }

    info!("Input closed after {} line(s)", line_no);
    Ok(())
}

fn parse_input(line: &[u8]) -> Result<FormInput, CliError> {
    Ok(serde_json::from_slice(line)?)
}

fn write_event(event: &FormEvent) -> Result<(), CliError> {
    let json = serde_json::to_string(event)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;
    Ok(())
}
