//! Command-line interface for colq.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// The invocation forms, shown below the generated help.
const FORMS: &str = "\
Operations:
  colq <db_path> search <table> <search_column> <keyword>
  colq <db_path> update <table> <update_column> <new_value> <search_column> <keyword>
  colq <db_path> get    <table> <search_column> <keyword> <get_column>

Options must come before <db_path>.";

/// The backend to open the database with.
///
/// Note that the backend must be enabled at compile time for it to be used.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Backend {
    #[cfg(feature = "duckdb")]
    #[clap(name = "duckdb")]
    #[allow(clippy::missing_docs_in_private_items)]
    DuckDb,
    #[cfg(feature = "sqlite")]
    #[allow(clippy::missing_docs_in_private_items)]
    Sqlite,
}

impl Default for Backend {
    #[allow(unreachable_code)] // simpler than more complex cfgs
    fn default() -> Self {
        #[cfg(feature = "sqlite")]
        return Self::Sqlite;
        #[cfg(feature = "duckdb")]
        return Self::DuckDb;

        unreachable!()
    }
}

/// Search rows, read a column or update a column in a table of a database file.
///
/// Values are always bound as query parameters. Table and column names must be plain
/// identifiers that exist in the database.
#[derive(Debug, Parser)]
#[command(version, about, after_help = FORMS)]
pub(crate) struct Args {
    /// The backend to open the database with.
    #[arg(value_enum, short, long, default_value_t = Backend::default())]
    pub(crate) backend: Backend,
    /// The string written between the fields of a row.
    #[arg(short, long, default_value = colq::output::DEFAULT_SEPARATOR)]
    pub(crate) separator: String,
    /// The database file. It must already exist.
    pub(crate) database: PathBuf,
    /// The operation (`search`, `update` or `get`) followed by its fields.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "OPERATION")]
    pub(crate) args: Vec<String>,
}
