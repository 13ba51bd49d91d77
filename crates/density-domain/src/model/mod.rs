//! Domain model types

pub mod calculation;
pub mod catalog;
pub mod product;

pub use calculation::{CalculationInput, CalculationResult, ProductMatch, RawInput};
pub use catalog::Catalog;
pub use product::{ProductQuery, ProductRow};
