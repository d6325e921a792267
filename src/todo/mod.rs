//! The to-do collection and its update rules

mod store;

#[cfg(test)]
mod store_tests;

pub use store::*;
