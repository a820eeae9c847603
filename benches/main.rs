#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    unused_results,
    clippy::unwrap_used
)]

#[cfg(feature = "sqlite")]
mod sqlite {
    use colq::backend::Sqlite;
    use colq::{QueryRequest, Store};
    use criterion::{black_box, Criterion};
    use rusqlite::Connection;
    use std::path::Path;

    const ROWS: i64 = 10_000;

    fn populate(path: &Path) {
        let mut conn = Connection::open(path).unwrap();
        conn.execute_batch(
            "CREATE TABLE students (id INTEGER PRIMARY KEY, mshs TEXT, name TEXT, class TEXT);
             CREATE INDEX students_mshs ON students (mshs);",
        )
        .unwrap();
        let tx = conn.transaction().unwrap();
        {
            let mut insert = tx
                .prepare("INSERT INTO students (id, mshs, name, class) VALUES (?1, ?2, ?3, ?4)")
                .unwrap();
            for id in 0..ROWS {
                insert
                    .execute(rusqlite::params![
                        id,
                        format!("HS{id:06}"),
                        format!("student {id}"),
                        format!("{}A", id % 12 + 1),
                    ])
                    .unwrap();
            }
        }
        tx.commit().unwrap();
    }

    /// Each iteration pays for what one process invocation pays for: parsing the request,
    /// opening the database, checking the schema and running the statement.
    fn bench(c: &mut Criterion, name: &str, path: &Path, args: &[&str]) {
        c.bench_function(name, |b| {
            b.iter(|| {
                let request = QueryRequest::from_args(args).unwrap();
                let store =
                    Store::<Sqlite>::at_path(path, request.operation().access()).unwrap();
                black_box(store.execute(&request).unwrap())
            });
        });
    }

    pub(crate) fn benches(c: &mut Criterion) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.sqlite");
        populate(&path);

        bench(c, "sqlite_search_indexed", &path, &["search", "students", "mshs", "HS004242"]);
        bench(c, "sqlite_search_scan", &path, &["search", "students", "name", "student 4242"]);
        bench(c, "sqlite_get", &path, &["get", "students", "id", "4242", "class"]);
        bench(
            c,
            "sqlite_update",
            &path,
            &["update", "students", "class", "12B", "mshs", "HS004242"],
        );
    }
}

fn main() {
    #[allow(unused_mut)]
    let mut criterion = criterion::Criterion::default().configure_from_args();

    #[cfg(feature = "sqlite")]
    sqlite::benches(&mut criterion);

    criterion.final_summary();
}
