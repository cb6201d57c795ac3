//! Translation of `sqlx` errors into [`CoreError`].

use assetline_core::error::CoreError;

/// PostgreSQL SQLSTATE for unique violations.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE for foreign key violations.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// PostgreSQL SQLSTATE for CHECK constraint violations.
const CHECK_VIOLATION: &str = "23514";

/// Map a database error onto the core error taxonomy.
///
/// - `23505` on a `uq_`-prefixed constraint becomes `Conflict`
/// - `23503` becomes `NotFound` for the referenced entity
/// - `23514` becomes `InvalidArgument`
/// - anything else becomes `Store`
pub fn classify(err: sqlx::Error) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        let code = db_err.code();
        let constraint = db_err.constraint().unwrap_or_default();

        match code.as_deref() {
            Some(UNIQUE_VIOLATION) if constraint.starts_with("uq_") => {
                return CoreError::Conflict(format!("Duplicate value violates {constraint}"));
            }
            Some(FOREIGN_KEY_VIOLATION) => {
                return CoreError::not_found(referenced_entity(constraint), constraint);
            }
            Some(CHECK_VIOLATION) => {
                return CoreError::InvalidArgument(format!("Value violates {constraint}"));
            }
            _ => {}
        }
    }
    CoreError::Store(err.to_string())
}

/// True when `err` is a unique violation of the named constraint.
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}

/// A stored enum column holds a value the domain does not know.
pub(crate) fn corrupt_column(table: &str, column: &str, value: &str) -> CoreError {
    CoreError::Store(format!("{table}.{column} holds unknown value '{value}'"))
}

/// Guess the referenced entity from a foreign key constraint name such as
/// `assets_location_id_fkey`.
fn referenced_entity(constraint: &str) -> &'static str {
    if constraint.contains("location_id") {
        "Location"
    } else if constraint.contains("company_id") {
        "Company"
    } else if constraint.contains("asset_id") {
        "Asset"
    } else {
        "Reference"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referenced_entity_from_constraint_name() {
        assert_eq!(referenced_entity("assets_location_id_fkey"), "Location");
        assert_eq!(referenced_entity("asset_transfers_to_location_id_fkey"), "Location");
        assert_eq!(referenced_entity("assets_company_id_fkey"), "Company");
        assert_eq!(referenced_entity("asset_disposals_asset_id_fkey"), "Asset");
        assert_eq!(referenced_entity("something_else"), "Reference");
    }

    #[test]
    fn test_non_database_errors_are_store_errors() {
        assert!(matches!(
            classify(sqlx::Error::RowNotFound),
            CoreError::Store(_)
        ));
        assert!(!is_unique_violation(
            &sqlx::Error::RowNotFound,
            "uq_asset_disposals_asset_id"
        ));
    }
}
