pub mod config;
pub mod messaging;
pub mod repository;
pub mod services;
pub mod statistics;
pub mod worker;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
