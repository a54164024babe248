//! Output Rendering
//!
//! Text renderers write to any `Write` so they can be snapshot-tested;
//! JSON output goes through `write_json`.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::application::CalculateOutcome;
use crate::config::ConfigWarning;
use crate::domain::entities::{CarbonCreditResult, LedgerEntry, LedgerSummary, TrendPoint};
use crate::domain::value_objects::{CompanySize, EmissionFactors, Industry, TechnologyType};

use super::format::{format_currency, format_number};

/// Pretty-printed JSON followed by a newline
pub fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    out.write_all(b"\n")
}

/// JSON shape of `calculate`: the result fields plus `saved`
#[derive(Debug, Serialize)]
pub struct CalculateJson<'a> {
    #[serde(flatten)]
    pub result: &'a CarbonCreditResult,
    pub saved: bool,
}

impl<'a> From<&'a CalculateOutcome> for CalculateJson<'a> {
    fn from(outcome: &'a CalculateOutcome) -> Self {
        Self {
            result: &outcome.result,
            saved: outcome.saved,
        }
    }
}

/// JSON shape of `factors`
#[derive(Debug, Serialize)]
pub struct FactorsJson {
    pub factors: EmissionFactors,
    pub multipliers: MultiplierTables,
}

#[derive(Debug, Serialize)]
pub struct MultiplierTables {
    pub industry: BTreeMap<&'static str, f64>,
    pub technology: BTreeMap<&'static str, f64>,
    pub size: BTreeMap<&'static str, f64>,
}

impl FactorsJson {
    pub fn new(factors: EmissionFactors) -> Self {
        Self {
            factors,
            multipliers: MultiplierTables {
                industry: Industry::ALL
                    .iter()
                    .map(|i| (i.as_str(), i.multiplier()))
                    .collect(),
                technology: TechnologyType::ALL
                    .iter()
                    .map(|t| (t.as_str(), t.multiplier()))
                    .collect(),
                size: CompanySize::ALL
                    .iter()
                    .map(|s| (s.as_str(), s.multiplier()))
                    .collect(),
            },
        }
    }
}

/// Render a calculation; `save_requested` distinguishes `--no-save` from a failed write
pub fn render_outcome(
    out: &mut impl Write,
    outcome: &CalculateOutcome,
    save_requested: bool,
    currency: &str,
) -> io::Result<()> {
    let result = &outcome.result;
    writeln!(out, "Carbon credit estimate ({})", result.calculation_date)?;
    writeln!(out, "  Total credits:    {}", format_number(result.total_credits))?;
    writeln!(out, "  Annual credits:   {}", format_number(result.annual_credits))?;
    writeln!(
        out,
        "  Financial value:  {}",
        format_currency(result.financial_value, currency)
    )?;
    writeln!(
        out,
        "  CO2 reduction:    {} tons CO2e",
        format_number(result.co2_reduction)
    )?;

    let breakdown = &result.category_breakdown;
    writeln!(out)?;
    writeln!(out, "Impact breakdown")?;
    writeln!(out, "  Energy:  {:>3}%", breakdown.energy)?;
    writeln!(out, "  Waste:   {:>3}%", breakdown.waste)?;
    writeln!(out, "  Water:   {:>3}%", breakdown.water)?;

    if !breakdown.is_zero() {
        writeln!(out)?;
        writeln!(
            out,
            "Most of the reduction comes from {}.",
            breakdown.dominant().description()
        )?;
    }

    writeln!(out)?;
    match (save_requested, outcome.saved) {
        (true, true) => writeln!(out, "✓ Saved to ledger as {}", result.calculation_id)?,
        (true, false) => writeln!(out, "⚠ Result was not saved to the ledger")?,
        (false, _) => writeln!(out, "○ Not saved (--no-save)")?,
    }
    Ok(())
}

pub fn render_history(out: &mut impl Write, entries: &[LedgerEntry], currency: &str) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "No calculations recorded yet.");
    }

    writeln!(
        out,
        "{:<10}  {:<26}  {:<10}  {:<13}  {:<17}  {:>10}  {:>12}",
        "DATE", "ID", "SIZE", "INDUSTRY", "TECHNOLOGY", "CREDITS", "VALUE"
    )?;
    for entry in entries {
        writeln!(
            out,
            "{:<10}  {:<26}  {:<10}  {:<13}  {:<17}  {:>10}  {:>12}",
            entry.calculation_date,
            entry.calculation_id,
            entry.company_size,
            entry.industry,
            entry.technology_type,
            format_number(entry.total_credits),
            format_currency(entry.financial_value, currency)
        )?;
    }
    Ok(())
}

pub fn render_summary(out: &mut impl Write, summary: &LedgerSummary, currency: &str) -> io::Result<()> {
    writeln!(out, "Calculations:     {}", summary.count)?;
    writeln!(
        out,
        "Average credits:  {}",
        format_number(summary.average_credits)
    )?;
    writeln!(
        out,
        "Total value:      {}",
        format_currency(summary.total_financial_value, currency)
    )
}

pub fn render_trend(out: &mut impl Write, points: &[TrendPoint], currency: &str) -> io::Result<()> {
    if points.is_empty() {
        return writeln!(out, "No calculations recorded yet.");
    }

    writeln!(
        out,
        "{:<10}  {:>10}  {:>12}  {:>14}",
        "DATE", "CREDITS", "VALUE", "CO2 (TONS)"
    )?;
    for point in points {
        writeln!(
            out,
            "{:<10}  {:>10}  {:>12}  {:>14}",
            point.date,
            format_number(point.total_credits),
            format_currency(point.financial_value, currency),
            format_number(point.co2_reduction)
        )?;
    }
    Ok(())
}

pub fn render_factors(out: &mut impl Write, factors: &EmissionFactors) -> io::Result<()> {
    writeln!(out, "Emission factors")?;
    for (name, value) in factors.entries() {
        writeln!(out, "  {:<30} {}", name, value)?;
    }

    writeln!(out)?;
    writeln!(out, "Industry multipliers")?;
    for industry in Industry::ALL {
        writeln!(out, "  {:<30} {}", industry.as_str(), industry.multiplier())?;
    }

    writeln!(out)?;
    writeln!(out, "Technology multipliers")?;
    for tech in TechnologyType::ALL {
        writeln!(out, "  {:<30} {}", tech.as_str(), tech.multiplier())?;
    }

    writeln!(out)?;
    writeln!(out, "Company size multipliers")?;
    for size in CompanySize::ALL {
        writeln!(out, "  {:<30} {}", size.as_str(), size.multiplier())?;
    }
    Ok(())
}

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        let path: &Path = &w.file;
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
