mod feature_flag_dto;

pub use feature_flag_dto::{FeatureFlagResponseDto, ToggleFeatureFlagDto};
