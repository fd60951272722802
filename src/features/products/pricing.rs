//! Read-time price transform.
//!
//! Stored prices are never touched; the discount only shapes what read
//! endpoints return while the `PRODUCT_DISCOUNT` flag is on.

use rust_decimal::Decimal;

use crate::shared::constants::PRODUCT_DISCOUNT_RATIO;

/// Price to show for a listed unit price
pub fn display_price(price_unit: Decimal, discount_active: bool) -> Decimal {
    if discount_active {
        price_unit * PRODUCT_DISCOUNT_RATIO
    } else {
        price_unit
    }
}
