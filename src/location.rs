use std::path::PathBuf;

/// The path SQLite and DuckDB both recognize as a request for a private in-memory database.
const IN_MEMORY_PATH: &str = ":memory:";

/// The location of a database.
#[non_exhaustive] // future-proofing for options like network storage
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Location {
    /// An in-memory database. It starts out empty, so it is only useful for probing a backend.
    InMemory,
    /// A database stored on the disk. The file must already exist.
    OnDisk {
        /// The path to the database. This is permitted to be a path to a network file system, if
        /// desired.
        path: PathBuf,
    },
}

impl<T> From<T> for Location
where
    T: Into<PathBuf>,
{
    fn from(path: T) -> Self {
        let path = path.into();
        if path.as_os_str() == IN_MEMORY_PATH {
            Self::InMemory
        } else {
            Self::OnDisk { path }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_path_is_in_memory() {
        assert_eq!(Location::from(":memory:"), Location::InMemory);
    }

    #[test]
    fn other_paths_are_on_disk() {
        assert_eq!(
            Location::from("data/app.sqlite"),
            Location::OnDisk {
                path: PathBuf::from("data/app.sqlite")
            }
        );
        // Only the exact token is special.
        assert!(matches!(
            Location::from("./:memory:"),
            Location::OnDisk { .. }
        ));
    }
}
