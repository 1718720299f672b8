//! wxdash library
//!
//! Exposes the application modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod data;
pub mod ui;
