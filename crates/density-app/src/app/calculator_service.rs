//! Calculator Service - density/mass use case
//!
//! Orchestrates one calculation:
//! 1. Parse and validate the four raw fields
//! 2. Convert with the domain unit converter
//! 3. Quantize the density (density mode only)
//! 4. Look the product up in the catalog
//! 5. Render the result or the error as text
//!
//! The service holds no state between calls; the catalog is borrowed read-only.

use density_domain::model::{
    CalculationInput, CalculationResult, ProductQuery, RawInput,
};
use density_domain::repository::ProductCatalogRepository;
use density_domain::service::{density_from_mass, mass_from_density, quantize};
use density_types::{CalcError, CalcMode, InputField};
use tracing::debug;

/// Parse one numeric field, accepting `,` as decimal separator
pub fn parse_field(field: InputField, raw: &str) -> Result<f64, CalcError> {
    let cleaned = raw.trim().replace(',', ".");
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::NonNumeric {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Calculator bound to a product catalog
pub struct Calculator<'a> {
    catalog: &'a dyn ProductCatalogRepository,
}

impl<'a> Calculator<'a> {
    pub fn new(catalog: &'a dyn ProductCatalogRepository) -> Self {
        Self { catalog }
    }

    /// Parse all four fields, then require each to be > 0
    pub fn parse_input(&self, raw: &RawInput) -> Result<CalculationInput, CalcError> {
        let fields = [
            (InputField::Value, raw.value.as_str()),
            (InputField::Length, raw.length.as_str()),
            (InputField::Width, raw.width.as_str()),
            (InputField::Height, raw.height.as_str()),
        ];

        let mut values = [0.0; 4];
        for (slot, (field, text)) in values.iter_mut().zip(fields) {
            *slot = parse_field(field, text)?;
        }

        for (value, (field, _)) in values.iter().zip(fields) {
            if *value <= 0.0 {
                return Err(CalcError::NonPositive {
                    field,
                    value: *value,
                });
            }
        }

        let [value_1, length, width, height] = values;
        Ok(CalculationInput {
            mode: raw.mode,
            value_1,
            length,
            width,
            height,
        })
    }

    /// Run the conversion and catalog lookup for validated input
    pub fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult, CalcError> {
        let CalculationInput {
            mode,
            value_1,
            length,
            width,
            height,
        } = *input;

        let result = match mode {
            CalcMode::Density => {
                let computed_density = density_from_mass(value_1, length, width, height)?;
                let quantized_grade = quantize(computed_density);
                let products = self
                    .catalog
                    .lookup(&ProductQuery::new(quantized_grade, length, width, height));
                CalculationResult::Density {
                    computed_density,
                    quantized_grade,
                    products,
                }
            }
            CalcMode::Mass => {
                let computed_mass = mass_from_density(value_1, length, width, height);
                // Looked up by the entered density as-is, not its grade
                let products = self
                    .catalog
                    .lookup(&ProductQuery::new(value_1, length, width, height));
                CalculationResult::Mass {
                    computed_mass,
                    products,
                }
            }
        };

        debug!(?result, "Calculation complete");
        Ok(result)
    }

    /// Parse, validate and calculate in one step
    pub fn calculate_raw(&self, raw: &RawInput) -> Result<CalculationResult, CalcError> {
        let input = self.parse_input(raw)?;
        self.calculate(&input)
    }

    /// Full round trip to display text; errors become text too
    pub fn evaluate(&self, raw: &RawInput) -> String {
        match self.calculate_raw(raw) {
            Ok(result) => render_result(&result),
            Err(e) => render_error(&e),
        }
    }
}

/// Multi-line text for a successful calculation
pub fn render_result(result: &CalculationResult) -> String {
    match result {
        CalculationResult::Density {
            computed_density,
            quantized_grade,
            products,
        } => format!(
            "Density: {:.2} kg/m³\nRounded: {} kg/m³\nProduct: {}",
            computed_density, quantized_grade, products
        ),
        CalculationResult::Mass {
            computed_mass,
            products,
        } => format!("Mass: {:.2} kg\nProduct: {}", computed_mass, products),
    }
}

/// User-facing text for a halted calculation
pub fn render_error(err: &CalcError) -> String {
    match err {
        CalcError::NonNumeric { .. } => "Error: please enter valid numbers.".to_string(),
        CalcError::NonPositive { .. } => "Error: values must be positive numbers.".to_string(),
        CalcError::VolumeZero => "Error: volume cannot be zero.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use density_domain::model::{Catalog, ProductMatch, ProductRow};

    fn catalog() -> Catalog {
        Catalog::from_rows(vec![
            ProductRow::new("ППЖ-100", 100.0, 2.0, 1.0, 0.5),
            ProductRow::new("Плита 60", 60.0, 2.0, 1.0, 0.5),
            ProductRow::new("Плита 65", 65.0, 2.0, 1.0, 0.5),
            ProductRow::new("ППЖ-100 (дубль)", 100.0, 2.0, 1.0, 0.5),
        ])
    }

    fn raw(mode: CalcMode, v: &str, l: &str, w: &str, h: &str) -> RawInput {
        RawInput::new(mode, v, l, w, h)
    }

    #[test]
    fn test_density_mode_example() {
        let catalog = catalog();
        let calc = Calculator::new(&catalog);
        let result = calc
            .calculate_raw(&raw(CalcMode::Density, "100", "2", "1", "0.5"))
            .unwrap();
        match result {
            CalculationResult::Density {
                computed_density,
                quantized_grade,
                products,
            } => {
                assert!((computed_density - 100.0).abs() < 1e-9);
                assert_eq!(quantized_grade, 100.0);
                assert_eq!(
                    products,
                    ProductMatch::Found(vec![
                        "ППЖ-100".to_string(),
                        "ППЖ-100 (дубль)".to_string()
                    ])
                );
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_density_mode_quantizes_before_lookup() {
        let catalog = catalog();
        let calc = Calculator::new(&catalog);
        // 65 kg/m³ ties between 60 and 70 and resolves to 60
        let result = calc
            .calculate_raw(&raw(CalcMode::Density, "65", "2", "1", "0,5"))
            .unwrap();
        assert_eq!(
            render_result(&result),
            "Density: 65.00 kg/m³\nRounded: 60 kg/m³\nProduct: Плита 60"
        );
    }

    #[test]
    fn test_mass_mode_uses_raw_density() {
        let catalog = catalog();
        let calc = Calculator::new(&catalog);
        let result = calc
            .calculate_raw(&raw(CalcMode::Mass, "65", "2", "1", "0.5"))
            .unwrap();
        assert_eq!(render_result(&result), "Mass: 65.00 kg\nProduct: Плита 65");
    }

    #[test]
    fn test_mass_mode_no_match() {
        let catalog = catalog();
        let calc = Calculator::new(&catalog);
        let text = calc.evaluate(&raw(CalcMode::Mass, "35", "1.2", "0.6", "0.1"));
        assert_eq!(text, "Mass: 2.52 kg\nProduct: not found");
    }

    #[test]
    fn test_unavailable_catalog_still_shows_value() {
        let catalog = Catalog::unavailable();
        let calc = Calculator::new(&catalog);
        let text = calc.evaluate(&raw(CalcMode::Density, "100", "2", "1", "0.5"));
        assert_eq!(
            text,
            "Density: 100.00 kg/m³\nRounded: 100 kg/m³\nProduct: catalog unavailable"
        );
    }

    #[test]
    fn test_non_positive_in_any_field() {
        let catalog = catalog();
        let calc = Calculator::new(&catalog);
        for mode in [CalcMode::Density, CalcMode::Mass] {
            let cases = [
                raw(mode, "0", "2", "1", "0.5"),
                raw(mode, "100", "-2", "1", "0.5"),
                raw(mode, "100", "2", "0", "0.5"),
                raw(mode, "100", "2", "1", "-0,5"),
            ];
            for case in cases {
                let err = calc.calculate_raw(&case).unwrap_err();
                assert!(matches!(err, CalcError::NonPositive { .. }), "{:?}", case);
                assert_eq!(render_error(&err), "Error: values must be positive numbers.");
            }
        }
    }

    #[test]
    fn test_non_numeric_checked_before_positivity() {
        let catalog = catalog();
        let calc = Calculator::new(&catalog);
        let err = calc
            .calculate_raw(&raw(CalcMode::Density, "-1", "2", "abc", "0.5"))
            .unwrap_err();
        assert_eq!(
            err,
            CalcError::NonNumeric {
                field: InputField::Width,
                value: "abc".to_string()
            }
        );
        assert_eq!(render_error(&err), "Error: please enter valid numbers.");
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field(InputField::Value, "1,5").unwrap(), 1.5);
        assert_eq!(parse_field(InputField::Value, " 2.25 ").unwrap(), 2.25);
        assert!(parse_field(InputField::Value, "").is_err());
        assert!(parse_field(InputField::Value, "1,234.5").is_err());
        assert!(parse_field(InputField::Value, "inf").is_err());
        assert!(parse_field(InputField::Value, "NaN").is_err());
    }

    #[test]
    fn test_volume_zero_after_underflow() {
        let catalog = catalog();
        let calc = Calculator::new(&catalog);
        let input = raw(CalcMode::Density, "1", "1e-200", "1e-200", "1e-200");
        let err = calc.calculate_raw(&input).unwrap_err();
        assert_eq!(err, CalcError::VolumeZero);
        assert_eq!(calc.evaluate(&input), "Error: volume cannot be zero.");
    }

    #[test]
    fn test_overflowed_density_rounds_to_first_grade() {
        let catalog = catalog();
        let calc = Calculator::new(&catalog);
        let text = calc.evaluate(&raw(CalcMode::Density, "1e308", "1e-10", "1e-10", "1e-10"));
        assert_eq!(
            text,
            "Density: inf kg/m³\nRounded: 20 kg/m³\nProduct: not found"
        );
    }

    #[test]
    fn test_mass_mode_underflow_is_zero_mass() {
        let catalog = catalog();
        let calc = Calculator::new(&catalog);
        let text = calc.evaluate(&raw(CalcMode::Mass, "100", "1e-200", "1e-200", "1e-200"));
        assert_eq!(text, "Mass: 0.00 kg\nProduct: not found");
    }
}
