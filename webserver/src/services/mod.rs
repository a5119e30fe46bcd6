//! Service implementations

pub mod word_store;

#[cfg(test)]
pub mod tests;

pub use word_store::*;
