//! Guard checks shared by the catalog services.
//!
//! Each guard either hands back the checked value or fails with
//! `AppError::Validation`, so a service validates a payload as a sequence of
//! `?` calls and stops at the first violation.

use rust_decimal::Decimal;

use crate::core::error::{AppError, Result};
use crate::shared::constants::RESERVED_CATEGORY_TITLES;

/// Require a present, non-blank string and return it trimmed
pub fn require_text(value: Option<&str>, message: &str) -> Result<String> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(AppError::Validation(message.to_string())),
    }
}

/// Require a value to be present
pub fn require_present<T>(value: Option<T>, message: &str) -> Result<T> {
    value.ok_or_else(|| AppError::Validation(message.to_string()))
}

/// Digits after the decimal point kept by `products.price_unit NUMERIC(12, 2)`
const PRICE_SCALE: u32 = 2;

/// Exclusive upper bound of `NUMERIC(12, 2)`
const PRICE_LIMIT: i64 = 10_000_000_000;

/// Require a price the store can hold without rounding: non-negative,
/// at most two decimal places and below 10^10.
pub fn require_storable_price(price: Decimal) -> Result<Decimal> {
    if price < Decimal::ZERO {
        return Err(AppError::Validation(
            "Product price must not be negative".to_string(),
        ));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(AppError::Validation(format!(
            "Product price must have at most {} decimal places",
            PRICE_SCALE
        )));
    }
    if price >= Decimal::from(PRICE_LIMIT) {
        return Err(AppError::Validation(format!(
            "Product price must be less than {}",
            PRICE_LIMIT
        )));
    }
    Ok(price)
}

pub fn require_non_negative_quantity(quantity: i32) -> Result<i32> {
    if quantity < 0 {
        return Err(AppError::Validation(
            "Product quantity must not be negative".to_string(),
        ));
    }
    Ok(quantity)
}

/// Case-insensitive title comparison used for uniqueness and sentinel checks
pub fn titles_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Whether `title` names one of the sentinel categories, ignoring case
pub fn is_reserved_title(title: &str) -> bool {
    RESERVED_CATEGORY_TITLES
        .iter()
        .any(|reserved| titles_match(title, reserved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text(Some("  Books  "), "err").unwrap(), "Books");
        assert_eq!(
            require_text(Some(" Home  Garden "), "err").unwrap(),
            "Home  Garden"
        );
    }

    #[test]
    fn test_require_text_rejects_missing_and_blank() {
        for value in [None, Some(""), Some("   "), Some("\t\n")] {
            let err = require_text(value, "Title is required").unwrap_err();
            assert!(matches!(err, AppError::Validation(msg) if msg == "Title is required"));
        }
    }

    #[test]
    fn test_require_present() {
        assert_eq!(require_present(Some(3), "err").unwrap(), 3);
        assert!(matches!(
            require_present::<i32>(None, "missing"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_non_negative_guards() {
        assert!(require_storable_price(Decimal::ZERO).is_ok());
        assert!(require_storable_price(Decimal::from_str("999.99").unwrap()).is_ok());
        assert!(require_storable_price(Decimal::from_str("-0.01").unwrap()).is_err());

        assert!(require_non_negative_quantity(0).is_ok());
        assert!(require_non_negative_quantity(-1).is_err());
    }

    #[test]
    fn test_price_must_fit_store_precision() {
        for accepted in ["9.99", "9.990", "9999999999.99"] {
            let value = Decimal::from_str(accepted).unwrap();
            assert_eq!(require_storable_price(value).unwrap(), value);
        }

        for rejected in ["9.999", "0.001", "10000000000", "12345678901.00"] {
            let result = require_storable_price(Decimal::from_str(rejected).unwrap());
            assert!(
                matches!(result, Err(AppError::Validation(_))),
                "{rejected} should be rejected"
            );
        }
    }

    #[test]
    fn test_reserved_titles_ignore_case() {
        for title in ["Deleted", "deleted", "DELETED", "No Category", "no category", " NO CATEGORY "] {
            assert!(is_reserved_title(title), "{title} should be reserved");
        }
        assert!(!is_reserved_title("Electronics"));
        assert!(!is_reserved_title("Deleted Items"));
    }
}
