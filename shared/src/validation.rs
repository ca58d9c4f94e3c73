//! Validation utilities for the Fabric Inventory Tracker
//!
//! The store itself takes drafts as given; these checks belong to the form
//! layer, which runs them before calling into the store.

use rust_decimal::Decimal;

/// Reasons offered by the stock-entry form
pub const ENTRY_REASONS: &[&str] = &[
    "NEW PURCHASE",
    "CUSTOMER RETURN",
    "INVENTORY ADJUSTMENT",
    "TRANSFER",
    "STOCK CORRECTION",
    "OTHER",
];

/// Reasons offered by the stock-exit form
pub const EXIT_REASONS: &[&str] = &[
    "CUSTOMER SALE",
    "PRODUCTION USE",
    "CUSTOMER SAMPLE",
    "DEFECT FOUND",
    "TRANSFER",
    "SUPPLIER RETURN",
    "OTHER",
];

/// Validate that a required free-text field is non-empty
pub fn validate_required_text(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Field must not be empty");
    }
    Ok(())
}

/// Validate an on-hand quantity or stock threshold (zero is allowed)
pub fn validate_stock_amount(amount: Decimal) -> Result<(), &'static str> {
    if amount < Decimal::ZERO {
        return Err("Stock amounts cannot be negative");
    }
    Ok(())
}

/// Validate a price per meter
pub fn validate_price(price: Decimal) -> Result<(), &'static str> {
    if price < Decimal::ZERO {
        return Err("Price cannot be negative");
    }
    Ok(())
}

/// Validate a movement quantity (must be strictly positive)
pub fn validate_movement_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity <= Decimal::ZERO {
        return Err("Movement quantity must be positive");
    }
    Ok(())
}

/// Check an entry reason against the catalog offered by the entry form
pub fn is_known_entry_reason(reason: &str) -> bool {
    ENTRY_REASONS.iter().any(|r| r.eq_ignore_ascii_case(reason))
}

/// Check an exit reason against the catalog offered by the exit form
pub fn is_known_exit_reason(reason: &str) -> bool {
    EXIT_REASONS.iter().any(|r| r.eq_ignore_ascii_case(reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn required_text_rejects_blank_values() {
        assert!(validate_required_text("Denim").is_ok());
        assert!(validate_required_text("").is_err());
        assert!(validate_required_text("   ").is_err());
    }

    #[test]
    fn stock_amount_allows_zero() {
        assert!(validate_stock_amount(Decimal::ZERO).is_ok());
        assert!(validate_stock_amount(Decimal::from(25)).is_ok());
        assert!(validate_stock_amount(Decimal::from(-1)).is_err());
    }

    #[test]
    fn price_cannot_be_negative() {
        assert!(validate_price(Decimal::ZERO).is_ok());
        assert!(validate_price(Decimal::from(150)).is_ok());
        assert!(validate_price(Decimal::from(-5)).is_err());
    }

    #[test]
    fn movement_quantity_must_be_positive() {
        assert!(validate_movement_quantity(Decimal::ONE).is_ok());
        assert!(validate_movement_quantity(Decimal::ZERO).is_err());
        assert!(validate_movement_quantity(Decimal::from(-3)).is_err());
    }

    #[test]
    fn entry_reasons_match_case_insensitively() {
        assert!(is_known_entry_reason("NEW PURCHASE"));
        assert!(is_known_entry_reason("new purchase"));
        assert!(!is_known_entry_reason("CUSTOMER SALE"));
    }

    #[test]
    fn exit_reasons_match_case_insensitively() {
        assert!(is_known_exit_reason("Customer Sale"));
        assert!(is_known_exit_reason("DEFECT FOUND"));
        assert!(!is_known_exit_reason("NEW PURCHASE"));
    }

    proptest! {
        /// The sign of the quantity alone decides whether it is a valid
        /// movement amount.
        #[test]
        fn movement_quantity_validation_follows_sign(n in -10000i64..=10000i64) {
            let quantity = Decimal::new(n, 1);
            if n > 0 {
                prop_assert!(validate_movement_quantity(quantity).is_ok());
            } else {
                prop_assert!(validate_movement_quantity(quantity).is_err());
            }
        }
    }
}
