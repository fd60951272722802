mod product_dto;

pub use product_dto::{CategoryRefDto, ProductPatchDto, ProductPayloadDto, ProductResponseDto};
