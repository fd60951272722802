mod feature_flag_handler;

pub use feature_flag_handler::*;
