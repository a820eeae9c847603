//! The error type shared by argument parsing and query execution.

use crate::request::Operation;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// A specialized `Result` for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can stop an invocation.
///
/// Errors fall into two groups: misuse by the caller, detected before the store is touched, and
/// failures of the store itself. [`Error::exit_code`] keeps the two apart for the process exit
/// status.
#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum Error {
    /// The wrong number of arguments was given. Carries the operation when it is known so the
    /// message can show the matching invocation form.
    #[error("{}", usage_message(.0))]
    Usage(Option<Operation>),
    /// The operation keyword is not one of `search`, `update` or `get`.
    #[error("invalid command `{0}`; use one of: search, update, get")]
    InvalidCommand(String),
    /// A table or column name is not a plain identifier.
    #[error("invalid identifier `{0}`: expected ASCII letters, digits and `_`, not starting with a digit")]
    InvalidIdentifier(String),
    /// The database file does not exist. It is never created implicitly.
    #[error("database `{}` does not exist", .0.display())]
    DatabaseNotFound(PathBuf),
    /// The table is not present in the database schema.
    #[error("no such table: {0}")]
    UnknownTable(String),
    /// The column is not present in the table.
    #[error("no such column: {table}.{column}")]
    UnknownColumn {
        /// The table that was searched.
        table: String,
        /// The column that was not found.
        column: String,
    },
    /// SQLite rejected the connection or the query.
    #[cfg(feature = "sqlite")]
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// DuckDB rejected the connection or the query.
    #[cfg(feature = "duckdb")]
    #[error("duckdb: {0}")]
    DuckDb(#[from] duckdb::Error),
    /// Writing the result failed.
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Exit status for misuse: bad arguments, unknown command, invalid identifier.
    pub const MISUSE_EXIT_CODE: u8 = 1;
    /// Exit status for a failure of the underlying store.
    pub const STORE_EXIT_CODE: u8 = 2;

    /// Whether the error was caused by how the program was invoked rather than by the store.
    #[inline]
    pub const fn is_misuse(&self) -> bool {
        matches!(
            self,
            Self::Usage(_) | Self::InvalidCommand(_) | Self::InvalidIdentifier(_)
        )
    }

    /// The process exit status that reports this error.
    #[inline]
    pub const fn exit_code(&self) -> u8 {
        if self.is_misuse() {
            Self::MISUSE_EXIT_CODE
        } else {
            Self::STORE_EXIT_CODE
        }
    }
}

/// The invocation form of one operation, or of all of them when the operation is unknown.
fn usage_message(operation: &Option<Operation>) -> String {
    match operation {
        Some(operation) => format!("usage: {}", operation.usage()),
        None => {
            let mut message = String::from("usage:");
            for operation in Operation::ALL {
                message.push_str("\n  ");
                message.push_str(operation.usage());
            }
            message
        }
    }
}
