//! Application service layer - calculator use case, config, catalog wiring

pub mod app;
pub mod config;
pub mod repository;
