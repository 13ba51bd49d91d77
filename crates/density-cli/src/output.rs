//! Output formatting module

use std::fmt::Write as _;

use density_app::app::{render_error, render_result};
use density_domain::model::{CalculationResult, ProductMatch, ProductRow};
use density_types::{CalcError, OutputFormat, Result};
use serde_json::json;

/// Print a calculation outcome; validation errors are output, not failures
pub fn output_calculation(
    output_format: OutputFormat,
    outcome: &std::result::Result<CalculationResult, CalcError>,
) -> Result<()> {
    println!("{}", format_calculation(output_format, outcome)?);
    Ok(())
}

pub fn format_calculation(
    output_format: OutputFormat,
    outcome: &std::result::Result<CalculationResult, CalcError>,
) -> Result<String> {
    if output_format == OutputFormat::Json {
        let value = match outcome {
            Ok(result) => json!({
                "ok": true,
                "mode": result.mode(),
                "catalog_available": *result.products() != ProductMatch::CatalogUnavailable,
                "result": result,
            }),
            Err(e) => json!({
                "ok": false,
                "validation": e.is_validation(),
                "error": e.to_string(),
                "message": render_error(e),
            }),
        };
        Ok(serde_json::to_string_pretty(&value)?)
    } else {
        Ok(match outcome {
            Ok(result) => render_result(result),
            Err(e) => render_error(e),
        })
    }
}

pub fn output_grades(output_format: OutputFormat, grades: &[f64]) -> Result<()> {
    println!("{}", format_grades(output_format, grades)?);
    Ok(())
}

pub fn format_grades(output_format: OutputFormat, grades: &[f64]) -> Result<String> {
    if output_format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(grades)?);
    }

    let labels: Vec<String> = grades.iter().map(|g| g.to_string()).collect();
    Ok(format!(
        "Density grades (kg/m³)\n======================\n{}",
        labels.join(", ")
    ))
}

pub fn output_rounded(output_format: OutputFormat, value: f64, grade: f64) -> Result<()> {
    println!("{}", format_rounded(output_format, value, grade)?);
    Ok(())
}

pub fn format_rounded(output_format: OutputFormat, value: f64, grade: f64) -> Result<String> {
    if output_format == OutputFormat::Json {
        Ok(serde_json::to_string_pretty(
            &json!({ "value": value, "grade": grade }),
        )?)
    } else {
        Ok(format!("{} kg/m³ -> {} kg/m³", value, grade))
    }
}

pub fn output_catalog(output_format: OutputFormat, rows: &[ProductRow]) -> Result<()> {
    println!("{}", format_catalog(output_format, rows)?);
    Ok(())
}

pub fn format_catalog(output_format: OutputFormat, rows: &[ProductRow]) -> Result<String> {
    if output_format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(rows)?);
    }

    if rows.is_empty() {
        return Ok("Catalog is empty.".to_string());
    }

    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "{:<name_width$}  {:>10}  {:>8}  {:>8}  {:>8}",
        "Name", "Density", "Length", "Width", "Height"
    );
    let _ = writeln!(out, "{}", "-".repeat(name_width + 44));
    for row in rows {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>10}  {:>8}  {:>8}  {:>8}",
            row.name, row.density, row.length, row.width, row.height
        );
    }
    let _ = write!(out, "\n{} product(s)", rows.len());

    Ok(out)
}
