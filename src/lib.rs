//! Skycast Library
//!
//! This module exposes the lookup, data, and persistence layers for use in
//! integration tests and other embedders.

pub mod cli;
pub mod data;
pub mod display;
pub mod geo;
pub mod lookup;
pub mod store;
