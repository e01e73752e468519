//! Platter - order composition core
//!
//! A Rust implementation of the order-composition logic behind a
//! food-delivery client's item screen: quantity selection for a food and
//! its extras, derived total pricing, and sequential order submission.

pub mod bootstrap;
pub mod clients;
pub mod config;
pub mod menu;
pub mod order;
pub mod pricing;
pub mod session;
