pub mod categories;
pub mod feature_flags;
pub mod products;
