//! A command-line tool for searching, reading and updating columns in a database file.
//!
//! For usage, run `cargo run -- --help`.

mod cli;

use crate::cli::{Args, Backend};
use clap::Parser as _;
#[cfg(feature = "duckdb")]
use colq::backend::DuckDb;
use colq::backend::Queryable;
#[cfg(feature = "sqlite")]
use colq::backend::Sqlite;
use colq::{output, Error, QueryRequest, Store};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _res = err.print();
            // `--help` and `--version` are not errors.
            return if err.use_stderr() {
                ExitCode::from(Error::MISUSE_EXIT_CODE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "invocation failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Log to stderr so that logs never mix with query output. `RUST_LOG` overrides the default
/// level of `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Validate the arguments, then run the request on the selected backend.
///
/// The database is not opened unless the arguments are valid.
fn run(
    Args {
        backend,
        separator,
        database,
        args,
    }: Args,
) -> colq::Result<()> {
    let request = QueryRequest::from_args(&args)?;
    tracing::debug!(?backend, operation = %request.operation(), "arguments accepted");

    match backend {
        #[cfg(feature = "duckdb")]
        Backend::DuckDb => execute::<DuckDb>(database, &request, &separator),
        #[cfg(feature = "sqlite")]
        Backend::Sqlite => execute::<Sqlite>(database, &request, &separator),
    }
}

/// Run one request and write its result to stdout.
///
/// # stdout
///
/// Rows selected by `search` and `get`, one per line, fields joined by `separator`. Nothing for
/// `update`.
fn execute<B>(database: PathBuf, request: &QueryRequest, separator: &str) -> colq::Result<()>
where
    B: Queryable,
{
    let store = Store::<B>::at_path(database, request.operation().access())?;
    let result = store.execute(request)?;
    drop(store);

    output::write_result(&mut io::stdout().lock(), &result, separator)?;
    Ok(())
}
