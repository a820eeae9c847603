#![allow(dead_code)] // not every test uses every helper

use anyhow::Result;
use colq::{Field, Operation, QueryRequest, QueryResult, Row, Store};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A SQLite database in its own temporary directory, removed on drop.
pub(crate) struct Fixture {
    dir: TempDir,
    path: PathBuf,
}

impl Fixture {
    /// A database with a populated `users` table.
    pub(crate) fn users() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("fixture.sqlite");
        let conn = Connection::open(&path)?;
        conn.execute_batch(
            "CREATE TABLE users (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT,
                score REAL
            );
            INSERT INTO users (id, name, email, score) VALUES
                (1, 'alice', 'alice@example.com', 9.5),
                (2, 'bob', NULL, 7.0),
                (42, 'carol', 'carol@example.com', NULL),
                (43, 'alice', 'alice2@example.com', 3.25);",
        )?;
        Ok(Self { dir, path })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// A path inside the fixture's directory that does not exist.
    pub(crate) fn missing_path(&self) -> PathBuf {
        self.dir.path().join("missing.sqlite")
    }

    /// Run a request given as it would be typed after the database path.
    pub(crate) fn run(&self, args: &[&str]) -> colq::Result<QueryResult> {
        let request = QueryRequest::from_args(args)?;
        let store = Store::<colq::backend::Sqlite>::at_path(
            self.path.clone(),
            request.operation().access(),
        )?;
        store.execute(&request)
    }

    /// Read rows directly, bypassing the crate.
    pub(crate) fn rows(&self, sql: &str) -> Result<Vec<Vec<rusqlite::types::Value>>> {
        let conn = Connection::open(&self.path)?;
        let mut statement = conn.prepare(sql)?;
        let column_count = statement.column_count();
        let rows = statement
            .query_map([], |row| {
                (0..column_count)
                    .map(|i| row.get::<_, rusqlite::types::Value>(i))
                    .collect()
            })?
            .collect::<rusqlite::Result<_>>()?;
        Ok(rows)
    }

    /// The number of rows in a table, read directly.
    pub(crate) fn count(&self, table: &str) -> Result<i64> {
        let conn = Connection::open(&self.path)?;
        Ok(conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })?)
    }
}

pub(crate) fn text(value: &str) -> Field {
    Field::Text(value.to_owned())
}

/// The rows of a `search` or `get` result.
pub(crate) fn rows(result: QueryResult) -> Vec<Row> {
    match result {
        QueryResult::Rows(rows) => rows,
        QueryResult::RowsChanged(n) => panic!("expected rows, got {n} rows changed"),
    }
}

/// Every field count an operation must reject.
pub(crate) fn wrong_arities(operation: Operation) -> [usize; 2] {
    [operation.field_count() - 1, operation.field_count() + 1]
}
