pub mod doctor;
pub mod logo;
pub mod schematic;
pub mod text;

use anyhow::{Context, Result};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use survey_advisor::{schematic as layout, AdvisoryResult, GcpMarker};

pub use logo::{probe_logo, LogoStatus};
pub use text::render_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => anyhow::bail!("unknown report format: {} (expected text or json)", other),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: String,
    pub tier: &'static str,
    pub layout_description: &'static str,
    pub result: &'a AdvisoryResult,
    pub markers: Vec<GcpMarker>,
    pub logo: Option<String>,
}

pub fn json_report<'a>(result: &'a AdvisoryResult, logo: &LogoStatus) -> Result<JsonReport<'a>> {
    let generated_at = OffsetDateTime::now_utc().format(&Rfc3339).context("format timestamp")?;
    Ok(JsonReport {
        generated_at,
        tier: result.tier.label(),
        layout_description: result.layout.description(),
        result,
        markers: layout(result),
        logo: match logo {
            LogoStatus::Loaded { path, .. } => Some(path.display().to_string()),
            LogoStatus::Missing { .. } => None,
        },
    })
}

pub fn render(result: &AdvisoryResult, logo: &LogoStatus, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => render_text(result, logo).context("render text report"),
        ReportFormat::Json => {
            let report = json_report(result, logo)?;
            serde_json::to_string_pretty(&report).context("serialize json report")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use survey_advisor::{compute, PrecisionTier};

    fn no_logo() -> LogoStatus {
        LogoStatus::Missing { path: PathBuf::from("assets/logo.png"), notice: "logo not available".into() }
    }

    #[test]
    fn json_report_shape() {
        let r = compute(50.0, PrecisionTier::High);
        let out = render(&r, &no_logo(), ReportFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(v["tier"], "High");
        assert_eq!(v["layout_description"], "perimeter network, density-based");
        assert_eq!(v["result"]["gcp_count"], 13);
        assert_eq!(v["result"]["layout"], "perimeter_network");
        assert_eq!(v["result"]["warning"]["max_perimeter_separation_m"], 15.0);
        assert_eq!(v["markers"].as_array().unwrap().len(), 13);
        assert_eq!(v["markers"][12]["role"], "Center");
        assert_eq!(v["markers"][0]["role"], "Perimeter");
        assert!(v["logo"].is_null());
        assert!(OffsetDateTime::parse(v["generated_at"].as_str().unwrap(), &Rfc3339).is_ok());
    }

    #[test]
    fn parses_format() {
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert!("yaml".parse::<ReportFormat>().is_err());
    }
}
