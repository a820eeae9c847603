//! Database engines a [`Store`](crate::Store) can run on.
//!
//! Each engine sits behind a Cargo feature. The traits are sealed; the set of backends is fixed
//! by this crate.

#[cfg(feature = "duckdb")]
mod duckdb;
#[cfg(feature = "sqlite")]
mod sqlite;

mod sealed {
    pub trait Sealed {}
    #[cfg(feature = "duckdb")]
    impl Sealed for super::duckdb::DuckDb {}
    #[cfg(feature = "sqlite")]
    impl Sealed for super::sqlite::Sqlite {}
}

#[cfg(feature = "duckdb")]
pub use self::duckdb::DuckDb;
#[cfg(feature = "sqlite")]
pub use self::sqlite::Sqlite;
use crate::error::{Error, Result};
use crate::field::Row;
use crate::identifier::Identifier;
use crate::location::Location;
use crate::request::Access;
use std::path::Path;

/// A database engine and the location of one database it serves.
pub trait DatabaseBackend: sealed::Sealed + Sized {
    /// An open connection. Closed when dropped.
    type Connection;

    /// Describe the database at `location`. Nothing is opened yet.
    fn at_location(location: Location) -> Result<Self>;
    /// The location of the database.
    fn location(&self) -> &Location;
    /// Open a connection with the given access.
    ///
    /// An on-disk database must already exist; it is never created.
    fn connect(&self, access: Access) -> Result<Self::Connection>;
}

/// A backend that can run parameterized statements.
///
/// `query` and `execute` receive a statement whose identifiers have already been validated and
/// quoted. Every `?` placeholder is bound, in order, to an element of `params`.
pub trait Queryable: DatabaseBackend {
    /// The names `table` accepts as columns: declared columns in declaration order, then any
    /// implicit ones such as SQLite's rowid aliases. Empty when the table does not exist.
    fn table_columns(connection: &Self::Connection, table: &Identifier) -> Result<Vec<String>>;

    /// Run a statement that returns rows.
    fn query(connection: &Self::Connection, query: &str, params: &[&str]) -> Result<Vec<Row>>;

    /// Run a statement that modifies the database and return the number of rows changed.
    fn execute(connection: &Self::Connection, query: &str, params: &[&str]) -> Result<usize>;
}

/// Refuse to go on when an on-disk database is missing. Both engines would otherwise create an
/// empty file.
fn require_existing(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::DatabaseNotFound(path.to_path_buf()))
    }
}
