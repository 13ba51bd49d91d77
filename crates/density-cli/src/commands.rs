//! Command handlers

use crate::cli::{CatalogAction, Cli, Commands, Measurements};
use crate::output::{output_calculation, output_catalog, output_grades, output_rounded};
use density_app::app::{parse_field, Calculator};
use density_app::config::Config;
use density_app::repository::{open_catalog, resolve_catalog_path};
use density_domain::model::RawInput;
use density_domain::repository::ProductCatalogRepository;
use density_domain::service::{quantize, DENSITY_GRADES};
use density_infra::FileProductCatalog;
use density_types::{CalcMode, Error, InputField, OutputFormat, Result};
use std::path::PathBuf;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match &cli.command {
        Commands::Density { input } => {
            cmd_calculate(&cli, &config, CalcMode::Density, input, output_format)
        }

        Commands::Mass { input } => {
            cmd_calculate(&cli, &config, CalcMode::Mass, input, output_format)
        }

        Commands::Calc { mode, input } => cmd_calculate(&cli, &config, *mode, input, output_format),

        Commands::Grades { value } => cmd_grades(value.as_deref(), output_format),

        Commands::Catalog { action } => match action {
            CatalogAction::List => cmd_catalog_list(&cli, &config, output_format),
            CatalogAction::Check => cmd_catalog_check(&cli, &config),
        },

        Commands::Config {
            show,
            set_catalog,
            set_output,
            reset,
        } => cmd_config(*show, set_catalog.clone(), *set_output, *reset),
    }
}

fn cmd_calculate(
    cli: &Cli,
    config: &Config,
    mode: CalcMode,
    input: &Measurements,
    output_format: OutputFormat,
) -> Result<()> {
    let catalog = open_catalog(config, cli.catalog.as_deref());

    let raw = RawInput::new(
        mode,
        input.value.clone(),
        input.length.clone(),
        input.width.clone(),
        input.height.clone(),
    );

    let calculator = Calculator::new(&catalog);
    let outcome = calculator.calculate_raw(&raw);
    output_calculation(output_format, &outcome)
}

fn cmd_grades(value: Option<&str>, output_format: OutputFormat) -> Result<()> {
    match value {
        Some(text) => {
            let density = parse_field(InputField::Value, text)?;
            output_rounded(output_format, density, quantize(density))
        }
        None => output_grades(output_format, &DENSITY_GRADES),
    }
}

fn cmd_catalog_list(cli: &Cli, config: &Config, output_format: OutputFormat) -> Result<()> {
    let catalog = open_catalog(config, cli.catalog.as_deref());
    if !catalog.is_available() {
        return Err(unavailable_error(&catalog));
    }

    output_catalog(output_format, catalog.find_all())
}

fn cmd_catalog_check(cli: &Cli, config: &Config) -> Result<()> {
    let path = resolve_catalog_path(config, cli.catalog.as_deref());
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let catalog = FileProductCatalog::try_load(&path)
        .map_err(|e| Error::CatalogLoad(format!("{}: {}", path.display(), e)))?;

    let rows = catalog.find_all();
    let incomplete = rows
        .iter()
        .filter(|r| {
            [r.density, r.length, r.width, r.height]
                .iter()
                .any(|v| v.is_nan())
        })
        .count();

    println!("Catalog:     {}", catalog.source().display());
    println!("Products:    {}", rows.len());
    if incomplete > 0 {
        println!("Incomplete:  {} (empty numeric cells, never matched)", incomplete);
    }
    println!("Status:      OK");

    Ok(())
}

fn unavailable_error(catalog: &FileProductCatalog) -> Error {
    Error::CatalogLoad(format!(
        "{}: {}",
        catalog.source().display(),
        catalog.unavailable_reason().unwrap_or("unavailable")
    ))
}

fn cmd_config(
    show: bool,
    set_catalog: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(path) = set_catalog {
        config.catalog_path = Some(path);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
