//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --verbose, --data-file) are inherited by all
//! subcommands.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::entities::CleanTechInput;
use crate::domain::value_objects::{CompanySize, Industry, TechnologyType};
use crate::error::{CarbonError, CarbonResult};

/// carbon-ledger - estimate carbon credits and track them over time
#[derive(Parser, Debug)]
#[command(name = "carbon-ledger")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Ledger file (overrides config and CARBON_LEDGER_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate carbon credits for a project and record the result
    Calculate(CalculateArgs),

    /// List saved calculations in the order they were recorded
    History,

    /// Show count, average credits and total value of saved calculations
    Summary,

    /// Show saved calculations ordered by date
    Trend,

    /// Show the emission factors and multiplier tables in effect
    Factors,
}

/// Input fields for `calculate`; flags override values from `--input`
#[derive(Args, Debug, Default)]
pub struct CalculateArgs {
    /// Read the input record from a JSON file
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub company_size: Option<CompanySize>,

    #[arg(long, value_enum)]
    pub industry: Option<Industry>,

    #[arg(long, value_enum)]
    pub technology_type: Option<TechnologyType>,

    /// Energy savings (kWh/year)
    #[arg(long, value_name = "KWH")]
    pub energy_savings: Option<f64>,

    /// Renewable energy generated (kWh/year)
    #[arg(long, value_name = "KWH")]
    pub renewable_energy_generated: Option<f64>,

    /// Solar energy generated (kWh/year)
    #[arg(long, value_name = "KWH")]
    pub solar_energy_kwh: Option<f64>,

    /// Battery storage capacity (kWh)
    #[arg(long, value_name = "KWH")]
    pub storage_capacity_kwh: Option<f64>,

    /// Waste reduction (tons/year)
    #[arg(long, value_name = "TONS")]
    pub waste_reduction: Option<f64>,

    /// Water conservation (gallons/year)
    #[arg(long, value_name = "GALLONS")]
    pub water_conservation: Option<f64>,

    /// Project lifespan in years (1-50)
    #[arg(long, value_name = "YEARS")]
    pub project_lifespan: Option<u32>,

    /// Calculation date, YYYY-MM-DD (defaults to today)
    #[arg(long, value_name = "DATE")]
    pub calculation_date: Option<NaiveDate>,

    /// Do not record the result in the ledger
    #[arg(long)]
    pub no_save: bool,
}

impl CalculateArgs {
    /// Build the input record: defaults, then `--input`, then flags
    pub fn to_input(&self) -> CarbonResult<CleanTechInput> {
        let mut input = match &self.input {
            Some(path) => read_input_file(path)?,
            None => CleanTechInput::default(),
        };

        if let Some(v) = self.company_size {
            input.company_size = v;
        }
        if let Some(v) = self.industry {
            input.industry = v;
        }
        if let Some(v) = self.technology_type {
            input.technology_type = v;
        }
        if let Some(v) = self.energy_savings {
            input.energy_savings = v;
        }
        if let Some(v) = self.renewable_energy_generated {
            input.renewable_energy_generated = v;
        }
        if let Some(v) = self.solar_energy_kwh {
            input.solar_energy_kwh = v;
        }
        if let Some(v) = self.storage_capacity_kwh {
            input.storage_capacity_kwh = v;
        }
        if let Some(v) = self.waste_reduction {
            input.waste_reduction = v;
        }
        if let Some(v) = self.water_conservation {
            input.water_conservation = v;
        }
        if let Some(v) = self.project_lifespan {
            input.project_lifespan = v;
        }
        if let Some(v) = self.calculation_date {
            input.calculation_date = v;
        }

        Ok(input)
    }
}

fn read_input_file(path: &Path) -> CarbonResult<CleanTechInput> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| CarbonError::InvalidInputFile {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}
