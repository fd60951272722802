mod feature_flag_service;

pub use feature_flag_service::FeatureFlagService;
