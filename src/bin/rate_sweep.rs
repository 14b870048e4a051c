//! Compare projected values across a range of annual rates
//!
//! Usage: cargo run --bin rate_sweep -- --mode sip --amount 5000 --years 10 --from 6 --to 15 --step 1

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use fund_calculator::config::CalculatorConfig;
use fund_calculator::format::format_inr;
use fund_calculator::scenario::{rate_range, MAX_SWEEP_RATES};
use fund_calculator::{InvestmentMode, ScenarioRunner};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Sip,
    Lumpsum,
}

impl From<Mode> for InvestmentMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sip => InvestmentMode::Sip,
            Mode::Lumpsum => InvestmentMode::LumpSum,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "rate_sweep", about = "Future value across a range of expected returns")]
struct Cli {
    #[arg(long, value_enum, default_value = "sip")]
    mode: Mode,
    #[arg(long)]
    amount: Option<f64>,
    #[arg(long)]
    years: Option<u32>,
    /// Lowest annual rate in percent
    #[arg(long, default_value_t = 6.0)]
    from: f64,
    /// Highest annual rate in percent
    #[arg(long, default_value_t = 15.0)]
    to: f64,
    #[arg(long, default_value_t = 1.0)]
    step: f64,
    #[arg(long, default_value = "rate_sweep_output.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = CalculatorConfig::from_env();
    let start = Instant::now();

    let mut base = config.default_parameters(cli.mode.into());
    if let Some(amount) = cli.amount {
        base.amount = amount;
    }
    if let Some(years) = cli.years {
        base.years = years;
    }

    let rates = rate_range(cli.from, cli.to, cli.step);
    if rates.is_empty() {
        bail!(
            "No rates to sweep: from {} to {} step {} (bounds must be finite, step positive, at most {} rates)",
            cli.from, cli.to, cli.step, MAX_SWEEP_RATES
        );
    }

    let results = ScenarioRunner::new().run_rate_sweep(&base, &rates);

    let mut file = File::create(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    writeln!(file, "Rate,Invested,FutureValue,Returns,ReturnsRatioPct")?;
    for calc in &results {
        let s = &calc.summary;
        writeln!(
            file,
            "{},{:.0},{:.0},{:.0},{:.2}",
            calc.parameters.annual_rate_percent,
            s.total_contributed,
            s.future_value,
            s.total_returns,
            s.returns_ratio().unwrap_or(0.0),
        )?;
    }

    println!("{} of {} for {} years", base.mode.label(), format_inr(base.amount), base.years);
    println!("{:>8} {:>18}", "Rate", "Future Value");
    for calc in &results {
        println!(
            "{:>7}% {:>18}",
            calc.parameters.annual_rate_percent,
            format_inr(calc.summary.future_value)
        );
    }

    println!("\nOutput written to {} in {:?}", cli.output.display(), start.elapsed());
    Ok(())
}
