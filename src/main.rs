//! Fund Calculator CLI
//!
//! Command-line front end for SIP and lump sum projections

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use fund_calculator::config::CalculatorConfig;
use fund_calculator::format::{format_inr, format_percent};
use fund_calculator::report::{render_text, write_json, write_series_csv_path};
use fund_calculator::{
    required_monthly_contribution, CalculationReport, InvestmentMode, ReportDelivery,
    ScenarioRunner, SimulatedDelivery,
};

#[derive(Parser, Debug)]
#[command(name = "fund_calculator", version, about = "Mutual fund SIP and lump sum calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project a monthly SIP
    Sip(ProjectionArgs),
    /// Project a one-time investment
    Lumpsum(ProjectionArgs),
    /// Monthly SIP needed to reach a target amount
    Target {
        /// Target corpus
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        years: Option<u32>,
        /// Expected annual return in percent
        #[arg(long)]
        rate: Option<f64>,
    },
}

#[derive(Args, Debug)]
struct ProjectionArgs {
    /// Monthly contribution (sip) or deposit (lumpsum)
    #[arg(long)]
    amount: Option<f64>,
    /// Investment period in years
    #[arg(long)]
    years: Option<u32>,
    /// Expected annual return in percent
    #[arg(long)]
    rate: Option<f64>,
    /// Print the report and series as JSON instead of text
    #[arg(long)]
    json: bool,
    /// Write the yearly series to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Write the text report to a file
    #[arg(long)]
    report: Option<PathBuf>,
    /// Send the report to this address (simulated)
    #[arg(long)]
    email: Option<String>,
    /// Skip the form limits on years and rate
    #[arg(long)]
    no_clamp: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = CalculatorConfig::from_env();

    match cli.command {
        Command::Sip(args) => run_projection(&config, InvestmentMode::Sip, args),
        Command::Lumpsum(args) => run_projection(&config, InvestmentMode::LumpSum, args),
        Command::Target { amount, years, rate } => {
            let years = years.unwrap_or(config.years);
            let rate = rate.unwrap_or(config.expected_return);
            let monthly = required_monthly_contribution(amount, years, rate)
                .with_context(|| format!("Cannot solve for target {}", amount))?;

            println!(
                "To reach {} in {} years at {}% p.a., invest {} per month",
                format_inr(amount),
                years,
                rate,
                format_inr(monthly)
            );
            Ok(())
        }
    }
}

fn run_projection(config: &CalculatorConfig, mode: InvestmentMode, args: ProjectionArgs) -> Result<()> {
    let mut params = config.default_parameters(mode);
    if let Some(amount) = args.amount {
        params.amount = amount;
    }
    if let Some(years) = args.years {
        params.years = years;
    }
    if let Some(rate) = args.rate {
        params.annual_rate_percent = rate;
    }

    if !config.limits.amount_in_range(&params) {
        warn!("Amount {} is outside the usual range for {}", params.amount, mode.label());
    }

    let runner = if args.no_clamp {
        ScenarioRunner::new()
    } else {
        ScenarioRunner::with_limits(config.limits.clone())
    };
    let calculation = runner.run(&params);
    let report = CalculationReport::today(&calculation);

    if args.json {
        write_json(io::stdout().lock(), &report, &calculation.series)?;
    } else {
        print_summary(&report, &calculation.series);
    }

    if let Some(path) = &args.csv {
        write_series_csv_path(path, &calculation.series)
            .with_context(|| format!("Failed to write series to {}", path.display()))?;
    }

    if let Some(path) = &args.report {
        fs::write(path, render_text(&report))
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        info!("Report written to {}", path.display());
    }

    if let Some(recipient) = &args.email {
        let delivery = SimulatedDelivery::new(config.email_delay);
        let receipt = delivery.deliver(recipient, &report)?;
        println!("\nCalculation report sent to {}", receipt.recipient);
    }

    Ok(())
}

fn print_summary(report: &CalculationReport, series: &fund_calculator::ProjectionSeries) {
    println!("Fund Calculator v0.1.0");
    println!("======================\n");

    let strategy = if report.is_sip() {
        format!("Monthly SIP of {}", format_inr(report.monthly_investment))
    } else {
        format!("One-time investment of {}", format_inr(report.investment_amount))
    };
    println!("Strategy: {}", strategy);
    println!("  Period: {} years at {}% p.a.", report.years, report.expected_return);
    println!();
    println!("  Total Investment:  {}", format_inr(report.investment_amount));
    println!("  Estimated Returns: {}", format_inr(report.total_returns));
    println!("  Future Value:      {}", format_inr(report.future_value));
    if let Some(ratio) = report.returns_ratio() {
        println!("  Returns Ratio:     {}", format_percent(ratio, 2));
    }

    println!("\n{:>4} {:>16} {:>16}", "Year", "Invested", "Value");
    println!("{}", "-".repeat(38));
    for point in series {
        println!(
            "{:>4} {:>16} {:>16}",
            point.year,
            format_inr(point.contributed_to_date),
            format_inr(point.projected_value)
        );
    }
}
