/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs/enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod date;
pub mod enums;
pub mod models;
pub mod requests;

pub use date::{CalendarDate, ParseCalendarDateError};
pub use enums::*;
pub use models::*;
pub use requests::{
    BusinessProfileRequest, PersonalProfileRequest, ProfileRequest, QuoteAmount, QuoteRequest,
    TemporaryQuoteRequest, VerificationDocument,
};
