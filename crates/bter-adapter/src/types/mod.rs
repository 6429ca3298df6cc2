/*
[INPUT]:  Exchange parameter conventions and serde requirements
[OUTPUT]: Typed order parameters convertible to ordered form fields
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API parameters change or new request types added
*/

pub mod enums;
pub mod requests;

pub use enums::*;
pub use requests::*;
