use rust_decimal::Decimal;

// =============================================================================
// SENTINEL CATEGORIES
// =============================================================================

/// Bucket that soft-deleted products are reassigned to
pub const DELETED_CATEGORY_TITLE: &str = "Deleted";

/// Bucket that products of a deleted category are reassigned to
pub const NO_CATEGORY_TITLE: &str = "No Category";

/// Titles that can never be created, renamed or deleted through the API
pub const RESERVED_CATEGORY_TITLES: [&str; 2] = [DELETED_CATEGORY_TITLE, NO_CATEGORY_TITLE];

// =============================================================================
// PRICING
// =============================================================================

/// Feature flag that turns the read-time product discount on
pub const PRODUCT_DISCOUNT_FEATURE: &str = "PRODUCT_DISCOUNT";

/// Multiplier applied to listed prices while the discount is active (0.8)
pub const PRODUCT_DISCOUNT_RATIO: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

