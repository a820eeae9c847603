//! Executing a request against an open database.

use crate::backend::Queryable;
use crate::error::{Error, Result};
use crate::field::Row;
use crate::location::Location;
use crate::request::{Access, QueryRequest};
use crate::tracing_shim::debug;
use std::fmt;
use std::path::PathBuf;

/// What an operation produced.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    /// The rows selected by `search` or `get`, possibly none.
    Rows(Vec<Row>),
    /// The number of rows changed by `update`, possibly zero.
    RowsChanged(usize),
}

/// An open connection to one database.
///
/// The connection is held for the lifetime of the store and closed when it is dropped.
pub struct Store<Backend>
where
    Backend: Queryable,
{
    backend: Backend,
    connection: Backend::Connection,
}

impl<Backend> fmt::Debug for Store<Backend>
where
    Backend: Queryable,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("location", self.backend.location())
            .finish_non_exhaustive()
    }
}

impl<Backend> Store<Backend>
where
    Backend: Queryable,
{
    /// Open the database at the given location.
    #[inline]
    pub fn at_location(location: Location, access: Access) -> Result<Self> {
        let backend = Backend::at_location(location)?;
        let connection = backend.connect(access)?;
        Ok(Self {
            backend,
            connection,
        })
    }

    /// Open the database at the given path on disk. `:memory:` opens an empty in-memory
    /// database.
    #[inline]
    pub fn at_path<P>(path: P, access: Access) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        Self::at_location(Location::from(path), access)
    }

    /// The location of the database.
    #[inline]
    pub fn location(&self) -> &Location {
        self.backend.location()
    }

    /// Run one request.
    ///
    /// The table and every column the request names are first checked against the schema.
    /// Only then is the statement built, with quoted identifiers and every value bound as a
    /// parameter.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            skip_all,
            fields(operation = %request.operation(), table = %request.table())
        )
    )]
    pub fn execute(&self, request: &QueryRequest) -> Result<QueryResult> {
        self.check_schema(request)?;
        let (query, params) = statement(request);
        debug!(%query, "executing");

        match request {
            QueryRequest::Search { .. } | QueryRequest::Get { .. } => {
                let rows = Backend::query(&self.connection, &query, &params)?;
                debug!(rows = rows.len(), "rows selected");
                Ok(QueryResult::Rows(rows))
            }
            QueryRequest::Update { .. } => {
                let changed = Backend::execute(&self.connection, &query, &params)?;
                debug!(changed, "rows changed");
                Ok(QueryResult::RowsChanged(changed))
            }
        }
    }

    /// Ensure the table exists and has every column the request names.
    fn check_schema(&self, request: &QueryRequest) -> Result<()> {
        let table = request.table();
        let columns = Backend::table_columns(&self.connection, table)?;
        if columns.is_empty() {
            return Err(Error::UnknownTable(table.to_string()));
        }
        for column in request.columns() {
            if !columns.iter().any(|name| column.matches(name)) {
                return Err(Error::UnknownColumn {
                    table: table.to_string(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// The statement text for a request and the values bound to its placeholders, in order.
fn statement(request: &QueryRequest) -> (String, Vec<&str>) {
    match request {
        QueryRequest::Search {
            table,
            search_column,
            keyword,
        } => (
            format!(
                "SELECT * FROM {} WHERE {} = ?",
                table.quoted(),
                search_column.quoted()
            ),
            vec![keyword.as_str()],
        ),
        QueryRequest::Update {
            table,
            update_column,
            new_value,
            search_column,
            keyword,
        } => (
            format!(
                "UPDATE {} SET {} = ? WHERE {} = ?",
                table.quoted(),
                update_column.quoted(),
                search_column.quoted()
            ),
            vec![new_value.as_str(), keyword.as_str()],
        ),
        QueryRequest::Get {
            table,
            search_column,
            keyword,
            get_column,
        } => (
            format!(
                "SELECT {} FROM {} WHERE {} = ?",
                get_column.quoted(),
                table.quoted(),
                search_column.quoted()
            ),
            vec![keyword.as_str()],
        ),
    }
}
