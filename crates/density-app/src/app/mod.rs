//! Application use cases

pub mod calculator_service;

pub use calculator_service::{parse_field, render_error, render_result, Calculator};
