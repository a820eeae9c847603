use crate::backend::{require_existing, DatabaseBackend, Queryable};
use crate::error::Result;
use crate::field::{Field, Row};
use crate::identifier::Identifier;
use crate::location::Location;
use crate::request::Access;
use crate::tracing_shim::trace;
use duckdb::types::Value;
use duckdb::{params_from_iter, AccessMode, Config, Connection};

/// A backend utilizing DuckDB.
#[derive(Debug)]
pub struct DuckDb {
    location: Location,
}

impl DatabaseBackend for DuckDb {
    type Connection = Connection;

    fn at_location(location: Location) -> Result<Self> {
        Ok(Self { location })
    }

    fn location(&self) -> &Location {
        &self.location
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(location = ?self.location)))]
    fn connect(&self, access: Access) -> Result<Self::Connection> {
        let connection = match &self.location {
            // DuckDB refuses to start an in-memory database in read-only mode.
            Location::InMemory => Connection::open_in_memory()?,
            Location::OnDisk { path } => {
                require_existing(path)?;
                let mode = match access {
                    Access::ReadOnly => AccessMode::ReadOnly,
                    Access::ReadWrite => AccessMode::ReadWrite,
                };
                Connection::open_with_flags(path, Config::default().access_mode(mode)?)?
            }
        };
        Ok(connection)
    }
}

impl Queryable for DuckDb {
    fn table_columns(connection: &Self::Connection, table: &Identifier) -> Result<Vec<String>> {
        let mut statement = connection.prepare(
            "SELECT column_name FROM information_schema.columns \
             WHERE table_schema = current_schema() AND lower(table_name) = lower(?) \
             ORDER BY ordinal_position",
        )?;
        let columns = statement
            .query_map(params_from_iter([table.as_str()]), |row| row.get(0))?
            .collect::<duckdb::Result<Vec<String>>>()?;
        Ok(columns)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(connection, params)))]
    fn query(connection: &Self::Connection, query: &str, params: &[&str]) -> Result<Vec<Row>> {
        let mut statement = connection.prepare(query)?;
        let mut rows = statement.query(params_from_iter(params))?;

        let mut results = Vec::new();
        while let Some(row) = rows.next()? {
            let column_count = row.as_ref().column_count();
            let mut fields = Vec::with_capacity(column_count);
            for i in 0..column_count {
                fields.push(Field::from(row.get::<_, Value>(i)?));
            }
            results.push(fields);
        }
        trace!(rows = results.len(), "query finished");
        Ok(results)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(connection, params)))]
    fn execute(connection: &Self::Connection, query: &str, params: &[&str]) -> Result<usize> {
        Ok(connection.execute(query, params_from_iter(params))?)
    }
}
