//! Backend-independent cell values.

/// A single value read from a result row.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// SQL `NULL`.
    Null,
    /// A signed integer.
    Integer(i64),
    /// A floating-point number.
    Real(f64),
    /// A string.
    Text(String),
    /// Raw bytes.
    Blob(Vec<u8>),
}

/// One result row, in column order.
pub type Row = Vec<Field>;

impl Field {
    /// The bytes written for this value in list output.
    ///
    /// `NULL` is empty. Reals use the shortest representation that reads back exactly, keeping
    /// a trailing `.0` on integral values of any magnitude so they stay distinguishable from
    /// integers. Unlike the `sqlite3` shell, large reals are never written in exponent form.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Null => Vec::new(),
            Self::Integer(val) => val.to_string().into_bytes(),
            Self::Real(val) => {
                if val.is_finite() && val.fract() == 0.0 {
                    format!("{val:.1}").into_bytes()
                } else {
                    val.to_string().into_bytes()
                }
            }
            Self::Text(val) => val.clone().into_bytes(),
            Self::Blob(val) => val.clone(),
        }
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::types::Value> for Field {
    fn from(value: rusqlite::types::Value) -> Self {
        use rusqlite::types::Value;

        match value {
            Value::Null => Self::Null,
            Value::Integer(val) => Self::Integer(val),
            Value::Real(val) => Self::Real(val),
            Value::Text(val) => Self::Text(val),
            Value::Blob(val) => Self::Blob(val),
        }
    }
}

#[cfg(feature = "duckdb")]
impl From<duckdb::types::Value> for Field {
    fn from(value: duckdb::types::Value) -> Self {
        use duckdb::types::Value;

        match value {
            Value::Null => Self::Null,
            Value::Boolean(val) => Self::Integer(val.into()),
            Value::TinyInt(val) => Self::Integer(val.into()),
            Value::SmallInt(val) => Self::Integer(val.into()),
            Value::Int(val) => Self::Integer(val.into()),
            Value::BigInt(val) => Self::Integer(val),
            Value::UTinyInt(val) => Self::Integer(val.into()),
            Value::USmallInt(val) => Self::Integer(val.into()),
            Value::UInt(val) => Self::Integer(val.into()),
            Value::UBigInt(val) => match i64::try_from(val) {
                Ok(val) => Self::Integer(val),
                Err(_) => Self::Text(val.to_string()),
            },
            Value::HugeInt(val) => match i64::try_from(val) {
                Ok(val) => Self::Integer(val),
                Err(_) => Self::Text(val.to_string()),
            },
            Value::Float(val) => Self::Real(val.into()),
            Value::Double(val) => Self::Real(val),
            Value::Decimal(val) => Self::Text(val.to_string()),
            Value::Text(val) | Value::Enum(val) => Self::Text(val),
            Value::Blob(val) => Self::Blob(val),
            // Temporal and nested values have no list-mode spelling of their own.
            other => Self::Text(format!("{other:?}")),
        }
    }
}
