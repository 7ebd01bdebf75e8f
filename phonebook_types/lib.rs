pub mod contacts;
pub mod errors;
pub mod events;
pub mod reports;

pub use errors::Result;
