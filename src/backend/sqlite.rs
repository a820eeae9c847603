use crate::backend::{require_existing, DatabaseBackend, Queryable};
use crate::error::Result;
use crate::field::{Field, Row};
use crate::identifier::Identifier;
use crate::location::Location;
use crate::request::Access;
use crate::tracing_shim::trace;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OpenFlags};

/// Names SQLite resolves to the rowid of an ordinary table.
const ROWID_ALIASES: [&str; 3] = ["rowid", "oid", "_rowid_"];

/// A backend utilizing SQLite.
#[derive(Debug)]
pub struct Sqlite {
    location: Location,
}

impl DatabaseBackend for Sqlite {
    type Connection = Connection;

    fn at_location(location: Location) -> Result<Self> {
        Ok(Self { location })
    }

    fn location(&self) -> &Location {
        &self.location
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(location = ?self.location)))]
    fn connect(&self, access: Access) -> Result<Self::Connection> {
        // No SQLITE_OPEN_CREATE: a missing file is an error, not an empty database.
        let flags = OpenFlags::SQLITE_OPEN_NO_MUTEX
            | match access {
                Access::ReadOnly => OpenFlags::SQLITE_OPEN_READ_ONLY,
                Access::ReadWrite => OpenFlags::SQLITE_OPEN_READ_WRITE,
            };
        let connection = match &self.location {
            Location::InMemory => Connection::open_in_memory_with_flags(flags)?,
            Location::OnDisk { path } => {
                require_existing(path)?;
                Connection::open_with_flags(path, flags)?
            }
        };
        Ok(connection)
    }
}

impl Queryable for Sqlite {
    fn table_columns(connection: &Self::Connection, table: &Identifier) -> Result<Vec<String>> {
        // `table_xinfo` also lists generated and hidden columns.
        let mut statement =
            connection.prepare("SELECT name FROM pragma_table_xinfo(?1) ORDER BY cid")?;
        let mut columns = statement
            .query_map([table.as_str()], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        if columns.is_empty() {
            return Ok(columns);
        }

        // Rowid aliases exist unless the table is `WITHOUT ROWID` or a view, or a declared
        // column already owns the name.
        for alias in ROWID_ALIASES {
            let declared = columns.iter().any(|name| name.eq_ignore_ascii_case(alias));
            if !declared
                && connection
                    .prepare(&format!("SELECT {alias} FROM {} LIMIT 0", table.quoted()))
                    .is_ok()
            {
                columns.push(alias.to_owned());
            }
        }
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
