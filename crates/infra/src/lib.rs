//! Infrastructure layer: in-memory stores and configuration loading.

pub mod config;
pub mod read_model;

mod integration_tests;
