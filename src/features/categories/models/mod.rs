mod category;

pub use category::{Category, SaveCategory};
