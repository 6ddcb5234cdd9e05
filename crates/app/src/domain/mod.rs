//! Catalog Domain Concerns

pub mod products;
pub mod users;
