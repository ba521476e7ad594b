pub mod body;
pub mod decoder;
pub mod error;
