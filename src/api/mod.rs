//! Client for the mirror's JSON endpoints and the shapes they return.

mod client;
pub mod models;

pub use client::*;
pub use models::*;

#[cfg(test)]
mod tests;
