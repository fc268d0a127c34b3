use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

use survey_advisor::{compute, doctor as advisor_doctor, schematic, PrecisionTier};
use survey_report::logo::DEFAULT_LOGO_PATH;
use survey_report::{doctor as report_doctor, probe_logo, render, schematic::write_png, ReportFormat};

#[derive(Debug, Parser)]
#[command(name = "survey", version, about = "SURVEYscout - drone survey flight & GCP advisor")]
struct Cli {
    /// Optional TOML config; built-in defaults apply without it.
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend altitude, speed and GCP layout for a terrain.
    Advise(AdviseArgs),
    /// Print the precision profile tables.
    Profiles,
    Doctor,
}

#[derive(Debug, Args)]
struct AdviseArgs {
    /// Terrain area in hectares (values under 0.1 are raised to 0.1).
    #[arg(long, allow_negative_numbers = true)]
    area: Option<f64>,
    /// Precision tier: High | Good (Alta | Buena accepted).
    #[arg(long)]
    tier: Option<String>,
    /// text | json
    #[arg(long)]
    format: Option<String>,
    /// Write the layout schematic PNG here.
    #[arg(long)]
    schematic: Option<PathBuf>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct Config {
    input: InputCfg,
    report: ReportCfg,
}

#[derive(Debug, serde::Deserialize)]
#[serde(default)]
struct InputCfg {
    default_area_ha: f64,
    default_tier: String,
}

impl Default for InputCfg {
    fn default() -> Self {
        Self { default_area_ha: 5.0, default_tier: "High".into() }
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(default)]
struct ReportCfg {
    format: ReportFormat,
    logo_path: PathBuf,
    schematic_px: u32,
    schematic_path: Option<PathBuf>,
}

impl Default for ReportCfg {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            logo_path: PathBuf::from(DEFAULT_LOGO_PATH),
            schematic_px: 480,
            schematic_path: None,
        }
    }
}

fn load_config(path: Option<&str>) -> Result<Config> {
    let Some(path) = path else { return Ok(Config::default()); };
    let s = std::fs::read_to_string(path).with_context(|| format!("read config {}", path))?;
    toml::from_str(&s).context("parse config toml")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = load_config(cli.config.as_deref())?;

    match cli.cmd {
        Command::Advise(args) => advise(&cfg, args)?,
        Command::Profiles => profiles(),
        Command::Doctor => doctor(&cfg)?,
    }
    Ok(())
}

/// Command line first, then config, then built-in defaults.
fn resolve_inputs(cfg: &Config, args: &AdviseArgs) -> Result<(f64, PrecisionTier, ReportFormat)> {
    let area = args.area.unwrap_or(cfg.input.default_area_ha);
    let label = args.tier.as_deref().unwrap_or(&cfg.input.default_tier);
    let tier: PrecisionTier = label.parse().context("select precision tier")?;
    let format = match args.format.as_deref() {
        Some(f) => f.parse()?,
        None => cfg.report.format,
    };
    Ok((area, tier, format))
}

fn advise(cfg: &Config, args: AdviseArgs) -> Result<()> {
    let (area, tier, format) = resolve_inputs(cfg, &args)?;

    // Reject a bad schematic setup before anything reaches stdout.
    let schematic_path = args.schematic.as_deref().or(cfg.report.schematic_path.as_deref());
    if let Some(path) = schematic_path {
        report_doctor::check_schematic(cfg.report.schematic_px, Some(path))?;
    }

    let result = compute(area, tier);
    if result.clamped {
        warn!("advise: area {} ha below minimum, using {} ha", result.requested_area_ha, result.area_ha);
    }
    info!("advise: {} ha {} -> {} GCPs ({})", result.area_ha, tier, result.gcp_count, result.layout);

    let logo = probe_logo(&cfg.report.logo_path);
    let out = render(&result, &logo, format)?;
    print!("{}", out);
    if !out.ends_with('\n') {
        println!();
    }

    if let Some(path) = schematic_path {
        write_png(&schematic(&result), cfg.report.schematic_px, path)?;
    }
    Ok(())
}

fn profiles() {
    println!("{:<6} {:>12} {:>10} {:>12} {:>10} {:>14}", "tier", "altitude m", "speed m/s", "gcp spacing", "offset m", "max perim sep");
    for tier in PrecisionTier::ALL {
        let p = tier.profile();
        println!(
            "{:<6} {:>12} {:>10} {:>12} {:>10} {:>14}",
            tier.label(),
            format!("{}-{}", p.altitude_m.min, p.altitude_m.max),
            format!("{}-{}", p.speed_mps.min, p.speed_mps.max),
            p.max_gcp_spacing_m,
            p.perimeter_offset_m,
            p.max_perimeter_separation_m,
        );
    }
}

fn doctor(cfg: &Config) -> Result<()> {
    info!("doctor: starting");

    advisor_doctor::check_profiles()?;
    advisor_doctor::check_default_area(cfg.input.default_area_ha)?;
    cfg.input.default_tier.parse::<PrecisionTier>().context("input.default_tier")?;
    report_doctor::check_schematic(cfg.report.schematic_px, cfg.report.schematic_path.as_deref())?;

    report_doctor::check_logo(&cfg.report.logo_path).or_else(|e| {
        warn!("logo unavailable, reports will show a placeholder: {:#}", e);
        Ok::<(), anyhow::Error>(())
    })?;

    info!("doctor: OK");
    Ok(())
}
