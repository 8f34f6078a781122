//! # auth-schemas
//!
//! Request and response shapes for the auth feature.
//!
//! `UserAuth` is the deserialization target for inbound signup/signin
//! payloads; `UserResponse` is the serialization source for outbound user
//! payloads. The password hash never appears in a response.

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::UserAuth;
pub use responses::UserResponse;
