use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("objective is required")]
    MissingObjective,
    #[error("brand is required")]
    MissingBrand,
    #[error("product is required")]
    MissingProduct,
    #[error("target type is required")]
    MissingTargetType,
    #[error("missing tag field: {0}")]
    MissingTagField(&'static str),
}
