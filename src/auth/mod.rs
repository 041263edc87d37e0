//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Password signup and signin
//! - Google federated sign-in
//! - JWT session token issuance and verification
//! - AuthedUser extractor for protected routes

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;


pub use extractors::AuthedUser;
pub use models::User;
pub use routes::auth_routes;
