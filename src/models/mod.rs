pub mod aggregate;
pub mod comment;
pub mod error;
pub mod filter;
pub mod store;
