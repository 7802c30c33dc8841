/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod profiles;
pub mod quotes;
pub mod verification;

pub use error::{ApiError, ApiFieldError, Result, TransferwiseError};

pub use client::{
    ClientOption, PRODUCTION_BASE_URL, RequestOption, SANDBOX_BASE_URL, TransferwiseClient,
};
