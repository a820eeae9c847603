#![cfg(feature = "duckdb")]

use anyhow::Result;
use colq::backend::DuckDb;
use colq::{Access, Error, Field, QueryRequest, QueryResult, Store};
use duckdb::Connection;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture() -> Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("fixture.duckdb");
    let conn = Connection::open(&path)?;
    conn.execute_batch(
        "CREATE TABLE users (id INTEGER, name VARCHAR, email VARCHAR, city VARCHAR);
         INSERT INTO users VALUES
             (1, 'alice', 'alice@example.com', 'Hanoi'),
             (42, 'bob', NULL, 'Hue');",
    )?;
    drop(conn);
    Ok((dir, path))
}

fn run(path: &Path, args: &[&str]) -> colq::Result<QueryResult> {
    let request = QueryRequest::from_args(args)?;
    Store::<DuckDb>::at_path(path, request.operation().access())?.execute(&request)
}

#[test]
fn search_get_update() -> Result<()> {
    let (_dir, path) = fixture()?;

    let found = run(&path, &["search", "users", "name", "bob"])?;
    assert_eq!(
        found,
        QueryResult::Rows(vec![vec![
            Field::Integer(42),
            Field::Text("bob".to_owned()),
            Field::Null,
            Field::Text("Hue".to_owned()),
        ]])
    );

    let changed = run(&path, &["update", "users", "email", "bob@example.com", "name", "bob"])?;
    assert_eq!(changed, QueryResult::RowsChanged(1));

    let found = run(&path, &["get", "users", "name", "bob", "email"])?;
    assert_eq!(
        found,
        QueryResult::Rows(vec![vec![Field::Text("bob@example.com".to_owned())]])
    );
    Ok(())
}

#[test]
fn text_keyword_matches_integer_column() -> Result<()> {
    let (_dir, path) = fixture()?;
    let found = run(&path, &["get", "users", "id", "42", "name"])?;
    assert_eq!(
        found,
        QueryResult::Rows(vec![vec![Field::Text("bob".to_owned())]])
    );

    let changed = run(&path, &["update", "users", "city", "Hanoi", "id", "42"])?;
    assert_eq!(changed, QueryResult::RowsChanged(1));
    let QueryResult::Rows(found) = run(&path, &["get", "users", "city", "Hanoi", "id"])? else {
        panic!("get returns rows");
    };
    assert_eq!(found.len(), 2);
    assert!(found.contains(&vec![Field::Integer(42)]));
    Ok(())
}

#[test]
fn hostile_keyword_matches_literally() -> Result<()> {
    let (_dir, path) = fixture()?;
    let found = run(&path, &["search", "users", "name", "alice' OR '1'='1"])?;
    assert_eq!(found, QueryResult::Rows(Vec::new()));
    Ok(())
}

#[test]
fn schema_is_checked() -> Result<()> {
    let (_dir, path) = fixture()?;
    assert!(matches!(
        run(&path, &["search", "accounts", "name", "bob"]),
        Err(Error::UnknownTable(_))
    ));
    assert!(matches!(
        run(&path, &["get", "users", "name", "bob", "phone"]),
        Err(Error::UnknownColumn { .. })
    ));
    Ok(())
}

#[test]
fn missing_database_is_not_created() -> Result<()> {
    let (dir, _path) = fixture()?;
    let missing = dir.path().join("missing.duckdb");
    assert!(matches!(
        Store::<DuckDb>::at_path(missing.clone(), Access::ReadWrite),
        Err(Error::DatabaseNotFound(_))
    ));
    assert!(!missing.exists());
    Ok(())
}
