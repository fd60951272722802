mod feature_flag;

pub use feature_flag::FeatureFlag;
