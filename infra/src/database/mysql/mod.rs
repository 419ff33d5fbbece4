//! MySQL implementations of the core repository traits.

mod course_repository_impl;
mod item_repository_impl;
mod subscriber_repository_impl;
mod swap_repository_impl;
mod user_repository_impl;

pub use course_repository_impl::MySqlCourseRepository;
pub use item_repository_impl::MySqlItemRepository;
pub use subscriber_repository_impl::MySqlSubscriberRepository;
pub use swap_repository_impl::MySqlSwapRepository;
pub use user_repository_impl::MySqlUserRepository;

use sqlx::mysql::MySqlRow;
use sqlx::Row;
use uuid::Uuid;

use rw_core::errors::DomainError;

/// Wrap a query failure as an internal domain error
pub(crate) fn query_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Internal {
        message: format!("{}: {}", context, e),
    }
}

/// Map an insert failure, turning a unique-index violation into a conflict on `field`
pub(crate) fn insert_error(e: sqlx::Error, field: &str, context: &str) -> DomainError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => DomainError::Conflict {
            field: field.to_string(),
        },
        _ => DomainError::Internal {
            message: format!("{}: {}", context, e),
        },
    }
}

/// Read a column, reporting decode failures as internal errors
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(name).map_err(|e| DomainError::Internal {
        message: format!("Failed to get {}: {}", name, e),
    })
}

pub(crate) fn uuid_column(row: &MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw).map_err(|e| DomainError::Internal {
        message: format!("Invalid UUID in {}: {}", name, e),
    })
}

pub(crate) fn optional_uuid_column(row: &MySqlRow, name: &str) -> Result<Option<Uuid>, DomainError> {
    let raw: Option<String> = column(row, name)?;
    raw.map(|value| {
        Uuid::parse_str(&value).map_err(|e| DomainError::Internal {
            message: format!("Invalid UUID in {}: {}", name, e),
        })
    })
    .transpose()
}

/// Parse a stored enum label via its `FromStr`
pub(crate) fn parsed_column<T>(row: &MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw: String = column(row, name)?;
    raw.parse().map_err(|e: T::Err| DomainError::Internal {
        message: format!("Invalid value in {}: {}", name, e),
    })
}
