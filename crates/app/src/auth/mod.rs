//! Authentication

mod errors;
mod service;
mod token;

pub use errors::AuthServiceError;
pub use service::*;
pub use token::*;
