//! Domain services

pub mod quantizer;
pub mod unit_converter;

pub use quantizer::{is_grade, quantize, quantize_with, DENSITY_GRADES};
pub use unit_converter::{density_from_mass, mass_from_density, volume};
