//! Search, read and update table columns in an embedded database.
//!
//! Every value supplied by the caller is bound as a query parameter. Table and column names are
//! validated syntactically when a [`QueryRequest`] is built and checked against the live schema
//! before they are placed in a query, so nothing supplied on the command line can change the
//! structure of the statement that is executed.
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! # fn main() -> colq::Result<()> {
//! use colq::backend::Sqlite;
//! use colq::{Operation, QueryRequest, Store};
//!
//! let fields = ["users", "name", "alice"].map(String::from);
//! let request = QueryRequest::from_fields(Operation::Search, &fields)?;
//! let store = Store::<Sqlite>::at_path("app.sqlite", request.operation().access())?;
//! let result = store.execute(&request)?;
//! colq::output::write_result(&mut std::io::stdout().lock(), &result, "|")?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "sqlite"))]
//! # fn main() {}
//! ```

#[cfg(not(any(feature = "duckdb", feature = "sqlite")))]
compile_error!("at least one backend must be enabled (options are `duckdb` and `sqlite`)");

pub mod backend;
mod error;
mod field;
mod identifier;
mod location;
pub mod output;
mod request;
mod store;
mod tracing_shim;

pub use self::error::{Error, Result};
pub use self::field::{Field, Row};
pub use self::identifier::Identifier;
pub use self::location::Location;
pub use self::request::{Access, Operation, QueryRequest};
pub use self::store::{QueryResult, Store};
