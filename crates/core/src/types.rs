use crate::error::CoreError;

/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (purchase, transfer and disposal dates) carry no time zone.
pub type Date = chrono::NaiveDate;

/// Monetary amounts are exact decimals, stored as `NUMERIC(14,2)`.
pub type Money = rust_decimal::Decimal;

/// Digits kept after the decimal point of a stored amount.
pub const MONEY_SCALE: u32 = 2;

/// Exclusive upper bound of a stored amount (12 integer digits).
pub const MONEY_UPPER_BOUND: i64 = 1_000_000_000_000;

/// Reject amounts a `NUMERIC(14,2)` column cannot hold exactly: negatives,
/// fractions of a cent, and `MONEY_UPPER_BOUND` or more.
pub fn check_money(field: &str, value: Money) -> Result<(), CoreError> {
    if value < Money::ZERO {
        return Err(CoreError::InvalidArgument(format!(
            "{field} must not be negative (got {value})"
        )));
    }
    if value.normalize().scale() > MONEY_SCALE {
        return Err(CoreError::InvalidArgument(format!(
            "{field} must have at most {MONEY_SCALE} decimal places (got {value})"
        )));
    }
    if value >= Money::from(MONEY_UPPER_BOUND) {
        return Err(CoreError::InvalidArgument(format!(
            "{field} must be less than {MONEY_UPPER_BOUND} (got {value})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_check_money_accepts_storable_amounts() {
        assert!(check_money("price", Decimal::ZERO).is_ok());
        assert!(check_money("price", Decimal::new(1005, 2)).is_ok());
        // Trailing zeros do not count against the scale.
        assert!(check_money("price", Decimal::new(10_0500, 4)).is_ok());
        assert!(check_money("price", Decimal::new(99_999_999_999_999, 2)).is_ok());
    }

    #[test]
    fn test_check_money_rejects_fractions_of_a_cent() {
        assert_matches!(
            check_money("price", Decimal::new(10_005, 3)),
            Err(CoreError::InvalidArgument(msg)) if msg.contains("decimal places")
        );
        assert_matches!(
            check_money("value_received", Decimal::new(4, 3)),
            Err(CoreError::InvalidArgument(msg)) if msg.starts_with("value_received")
        );
    }

    #[test]
    fn test_check_money_rejects_overflowing_amounts() {
        assert_matches!(
            check_money("price", Decimal::from(MONEY_UPPER_BOUND)),
            Err(CoreError::InvalidArgument(msg)) if msg.contains("less than")
        );
    }

    #[test]
    fn test_check_money_rejects_negative() {
        assert_matches!(
            check_money("price", Decimal::new(-1, 2)),
            Err(CoreError::InvalidArgument(msg)) if msg.contains("negative")
        );
    }
}
