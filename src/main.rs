//! carbon-ledger CLI - carbon-credit estimates with a local history
//!
//! Usage: carbon-ledger <COMMAND>
//!
//! Commands:
//!   calculate  Estimate credits for a project and record the result
//!   history    List saved calculations
//!   summary    Count, average credits and total value
//!   trend      Saved calculations ordered by date
//!   factors    Emission factors and multiplier tables

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use carbon_ledger::application::CalculateOptions;
use carbon_ledger::config::{Config, Verbosity};
use carbon_ledger::presentation::cli::{CalculateArgs, Cli, Commands};
use carbon_ledger::presentation::output::{self, CalculateJson, FactorsJson};
use carbon_ledger::presentation::{create_calculate_use_case, create_ledger, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().ok();
    let (mut config, warnings) = Config::discover(cwd.as_deref())?;
    if !cli.json {
        output::print_config_warnings(&warnings);
    }

    if let Some(path) = &cli.data_file {
        config.ledger.path = Some(path.clone());
    }
    if let Some(verbosity) = Verbosity::from_flag_count(cli.verbose) {
        config.output.verbosity = verbosity;
    }
    logging::init(config.output.verbosity);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Calculate(args) => cmd_calculate(&mut out, &config, &args, cli.json)?,
        Commands::History => {
            let entries = create_ledger(&config).list_all();
            if cli.json {
                output::write_json(&mut out, &entries)?;
            } else {
                output::render_history(&mut out, &entries, &config.output.currency_symbol)?;
            }
        }
        Commands::Summary => {
            let summary = create_ledger(&config).summarize();
            if cli.json {
                output::write_json(&mut out, &summary)?;
            } else {
                output::render_summary(&mut out, &summary, &config.output.currency_symbol)?;
            }
        }
        Commands::Trend => {
            let points = create_ledger(&config).trend();
            if cli.json {
                output::write_json(&mut out, &points)?;
            } else {
                output::render_trend(&mut out, &points, &config.output.currency_symbol)?;
            }
        }
        Commands::Factors => {
            if cli.json {
                output::write_json(&mut out, &FactorsJson::new(config.factors))?;
            } else {
                output::render_factors(&mut out, &config.factors)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn cmd_calculate(
    out: &mut impl Write,
    config: &Config,
    args: &CalculateArgs,
    json: bool,
) -> Result<()> {
    let input = args.to_input()?;
    let options = CalculateOptions::new().with_save(!args.no_save);

    let use_case = create_calculate_use_case(config);
    let outcome = use_case.execute(&input, &options)?;

    if json {
        output::write_json(out, &CalculateJson::from(&outcome))?;
    } else {
        output::render_outcome(out, &outcome, options.save, &config.output.currency_symbol)?;
    }
    Ok(())
}
