pub mod error_response;
pub mod identity_dto;
pub mod validation_error_dto;

pub use error_response::ErrorResponse;
pub use identity_dto::IdentityDto;
pub use validation_error_dto::ValidationErrorDto;
