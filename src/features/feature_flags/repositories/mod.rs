mod feature_flag_repository;

pub use feature_flag_repository::{FeatureFlagGateway, PgFeatureFlagRepository};
