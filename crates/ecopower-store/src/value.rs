//! # Owned Bind Values
//!
//! Staged statements outlive the entity they were built from, so their bind
//! arguments must be owned. `SqlValue` is the small closed set of SQLite
//! storage classes an entity column can map to.

use chrono::{DateTime, Utc};
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::query::Query;

/// An owned value ready to bind to a SQLite placeholder.
///
/// Entities render themselves into a `Vec<SqlValue>` (one per column, in
/// [`Entity::COLUMNS`](crate::entity::Entity::COLUMNS) order) when a mutation
/// is staged; the flush binds them back onto the statement. The variants are
/// exactly the storage classes the schema uses; money is integer cents, so
/// REAL never appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    /// SQL NULL (absent optional column).
    Null,
    /// INTEGER storage class.
    Integer(i64),
    /// TEXT storage class.
    Text(String),
    /// UTC timestamp, stored as TEXT.
    Timestamp(DateTime<Utc>),
}

impl SqlValue {
    /// Binds this value to the next placeholder of `query`.
    pub(crate) fn bind<'q>(
        &'q self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        match self {
            SqlValue::Null => query.bind(Option::<i64>::None),
            SqlValue::Integer(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.as_str()),
            SqlValue::Timestamp(v) => query.bind(*v),
        }
    }
}

// Conversions for the field types the entities actually carry. Optional
// columns fold None into SqlValue::Null.

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<u32> for SqlValue {
    fn from(v: u32) -> Self {
        SqlValue::Integer(i64::from(v))
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(v: DateTime<Utc>) -> Self {
        SqlValue::Timestamp(v)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => SqlValue::Null,
        }
    }
}
