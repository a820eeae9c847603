//! Turning command-line tokens into a validated request.

use crate::error::{Error, Result};
use crate::identifier::Identifier;
use std::fmt;
use std::str::FromStr;

/// The action requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Print every column of the matching rows.
    Search,
    /// Set one column on the matching rows.
    Update,
    /// Print one column of the matching rows.
    Get,
}

/// How the database must be opened for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Reads only. The backend refuses any write.
    ReadOnly,
    /// Reads and writes. The database must already exist.
    ReadWrite,
}

impl Operation {
    /// Every operation, in the order they are documented.
    pub const ALL: [Self; 3] = [Self::Search, Self::Update, Self::Get];

    /// The keyword that selects this operation.
    #[inline]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Update => "update",
            Self::Get => "get",
        }
    }

    /// The number of fields that follow the keyword.
    #[inline]
    pub const fn field_count(self) -> usize {
        match self {
            Self::Search => 3,
            Self::Update => 5,
            Self::Get => 4,
        }
    }

    /// The invocation form for this operation.
    #[inline]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Search => "colq <db_path> search <table> <search_column> <keyword>",
            Self::Update => {
                "colq <db_path> update <table> <update_column> <new_value> <search_column> \
                 <keyword>"
            }
            Self::Get => "colq <db_path> get <table> <search_column> <keyword> <get_column>",
        }
    }

    /// The access the operation needs.
    #[inline]
    pub const fn access(self) -> Access {
        match self {
            Self::Search | Self::Get => Access::ReadOnly,
            Self::Update => Access::ReadWrite,
        }
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|operation| operation.keyword() == s)
            .ok_or_else(|| Error::InvalidCommand(s.to_owned()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The validated fields of one operation, in command-line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryRequest {
    /// `search <table> <search_column> <keyword>`
    Search {
        /// The table to read.
        table: Identifier,
        /// The column compared against `keyword`.
        search_column: Identifier,
        /// The value to look for.
        keyword: String,
    },
    /// `update <table> <update_column> <new_value> <search_column> <keyword>`
    Update {
        /// The table to modify.
        table: Identifier,
        /// The column that receives `new_value`.
        update_column: Identifier,
        /// The value to store.
        new_value: String,
        /// The column compared against `keyword`.
        search_column: Identifier,
        /// The value that selects the rows to modify.
        keyword: String,
    },
    /// `get <table> <search_column> <keyword> <get_column>`
    Get {
        /// The table to read.
        table: Identifier,
        /// The column compared against `keyword`.
        search_column: Identifier,
        /// The value to look for.
        keyword: String,
        /// The column to print.
        get_column: Identifier,
    },
}

impl QueryRequest {
    /// Build a request from the fields that follow the operation keyword.
    ///
    /// The number of fields must match [`Operation::field_count`] exactly. Table and column
    /// names must be plain identifiers. Nothing here touches the store.
    pub fn from_fields<S>(operation: Operation, fields: &[S]) -> Result<Self>
    where
        S: AsRef<str>,
    {
        if fields.len() != operation.field_count() {
            return Err(Error::Usage(Some(operation)));
        }
        let field = move |index: usize| fields[index].as_ref();
        let ident = move |index: usize| Identifier::new(field(index));

        Ok(match operation {
            Operation::Search => Self::Search {
                table: ident(0)?,
                search_column: ident(1)?,
                keyword: field(2).to_owned(),
            },
            Operation::Update => Self::Update {
                table: ident(0)?,
                update_column: ident(1)?,
                new_value: field(2).to_owned(),
                search_column: ident(3)?,
                keyword: field(4).to_owned(),
            },
            Operation::Get => Self::Get {
                table: ident(0)?,
                search_column: ident(1)?,
                keyword: field(2).to_owned(),
                get_column: ident(3)?,
            },
        })
    }

    /// Build a request from everything after the database path: the operation keyword followed
    /// by its fields.
    ///
    /// An unrecognized keyword is reported as such no matter how many fields follow it.
    pub fn from_args<S>(args: &[S]) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let Some((keyword, fields)) = args.split_first() else {
            return Err(Error::Usage(None));
        };
        let operation = keyword.as_ref().parse()?;
        Self::from_fields(operation, fields)
    }

    /// The operation this request performs.
    #[inline]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::Search { .. } => Operation::Search,
            Self::Update { .. } => Operation::Update,
            Self::Get { .. } => Operation::Get,
        }
    }

    /// The table the request targets.
    #[inline]
    pub const fn table(&self) -> &Identifier {
        match self {
            Self::Search { table, .. } | Self::Update { table, .. } | Self::Get { table, .. } => {
                table
            }
        }
    }

    /// Every column named by the request.
    pub fn columns(&self) -> Vec<&Identifier> {
        match self {
            Self::Search { search_column, .. } => vec![search_column],
            Self::Update {
                update_column,
                search_column,
                ..
            } => vec![update_column, search_column],
            Self::Get {
                search_column,
                get_column,
                ..
            } => vec![search_column, get_column],
        }
    }
}
