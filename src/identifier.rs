use crate::error::{Error, Result};
use std::fmt;

/// The longest identifier accepted, in bytes.
const MAX_LEN: usize = 128;

/// A table or column name that is safe to place in a query skeleton.
///
/// Construction only accepts plain identifiers: an ASCII letter or `_`, followed by ASCII
/// letters, digits or `_`. When rendered into SQL the name is always double-quoted, so even a
/// name that collides with a keyword is treated as an identifier. Whether the name exists is
/// checked separately, against the schema of the open store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Validate a name supplied by the caller.
    #[inline]
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if is_plain(&name) {
            Ok(Self(name))
        } else {
            Err(Error::InvalidIdentifier(name))
        }
    }

    /// The name as given.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name in double-quoted form, ready to be placed in a statement.
    pub fn quoted(&self) -> String {
        // Validation already excludes `"`, but quoting must not depend on it.
        format!("\"{}\"", self.0.replace('"', "\"\""))
    }

    /// Whether `name` refers to this identifier. Both backends fold ASCII case for unquoted
    /// names, and the schema may spell a name differently from the command line.
    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ASCII letter or `_`, then ASCII letters, digits or `_`, within [`MAX_LEN`].
fn is_plain(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    name.len() <= MAX_LEN
        && (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
