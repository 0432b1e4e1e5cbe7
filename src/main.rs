//! Car Price Visualizer - command line front end
//!
//! Lists brands, prints a brand's listings with the chart averages, or exports
//! the brand's rows to CSV.

use anyhow::{Context, Result};
use car_price_visualizer::app::{BrandView, DashboardApp};
use car_price_visualizer::data::CleaningPolicy;
use car_price_visualizer::settings::DashboardSettings;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// CLI-compatible row policy
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliPolicy {
    /// Fail on any unparseable price or missing required value
    Strict,
    /// Drop rows with a missing or unparseable required value
    DropIncomplete,
}

impl From<CliPolicy> for CleaningPolicy {
    fn from(cli: CliPolicy) -> Self {
        match cli {
            CliPolicy::Strict => CleaningPolicy::Strict,
            CliPolicy::DropIncomplete => CleaningPolicy::DropIncomplete,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "car-price-visualizer", version, about = "Car Price Analysis Dashboard")]
struct Cli {
    /// Listings CSV (Make, Model, DriveTrain, MSRP, Invoice, ...)
    #[arg(long, short)]
    data: Option<PathBuf>,

    /// JSON settings file; flags given on the command line take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// How to treat rows with missing or unparseable required fields
    #[arg(long, value_enum)]
    policy: Option<CliPolicy>,

    /// Leave out the brand-scoped category chart
    #[arg(long)]
    no_brand_chart: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the available brands
    Brands,
    /// Show the listings and chart averages for a brand
    Show {
        #[arg(long, short)]
        brand: String,
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the brand's listings to <brand>_cars.csv
    Export {
        #[arg(long, short)]
        brand: String,
        /// Output directory
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}

impl Cli {
    fn settings(&self) -> Result<DashboardSettings> {
        let mut settings = match &self.config {
            Some(path) => DashboardSettings::from_json_file(path)?,
            None => DashboardSettings::default(),
        };
        if let Some(data) = &self.data {
            settings.csv_path = data.clone();
        }
        if let Some(policy) = self.policy {
            settings.policy = policy.into();
        }
        if self.no_brand_chart {
            settings.brand_chart = false;
        }
        if let Command::Export { out: Some(out), .. } = &self.command {
            settings.export_dir = out.clone();
        }
        Ok(settings)
    }
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.settings()?;
    info!(csv = %settings.csv_path.display(), policy = ?settings.policy, "startup");

    let mut app = DashboardApp::new(settings);

    match &cli.command {
        Command::Brands => {
            let brands = app.brands().context("failed to load dataset")?;
            for brand in brands {
                println!("{}", brand);
            }
        }
        Command::Show { brand, json } => {
            let view = app.select_brand(brand).context("failed to load dataset")?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_view(&view);
            }
        }
        Command::Export { brand, .. } => {
            let path = app
                .export_brand(brand)
                .with_context(|| format!("failed to export {}", brand))?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn print_view(view: &BrandView) {
    println!("Showing data for: {} ({} rows)", view.brand, view.records.len());
    println!(
        "{:<20} {:<40} {:<10} {:>10} {:>10}  {}",
        "Make", "Model", "DriveTrain", "MSRP", "Invoice", "Category"
    );
    for r in &view.records {
        println!(
            "{:<20} {:<40} {:<10} {:>10} {:>10}  {}",
            r.make, r.model, r.drive_train, r.msrp, r.invoice, r.category
        );
    }

    for chart in &view.charts {
        println!();
        println!("{}", chart.title);
        if chart.is_empty() {
            println!("  (no data)");
        }
        for bar in &chart.bars {
            println!("  {:<20} {:>12.2}  (n={})", bar.label, bar.value, bar.count);
        }
    }
}
