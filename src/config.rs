use {
  std::path::{Path, PathBuf},
  serde::{Deserialize, Serialize},
  crate::{
    chart::ChartStyle,
    error::Result,
    input::PointCountInput,
    report::ReportOptions
  }
};

/// Where the intermediate chart and the final document are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StagingPaths {
  pub chart: PathBuf,
  pub output: PathBuf,
}

impl Default for StagingPaths {
  fn default() -> Self {
    StagingPaths {
      chart: PathBuf::from("circle_chart.png"),
      output: PathBuf::from("circle_points.pdf"),
    }
  }
}

/// Everything an export needs besides the circle itself. Every field may be omitted from the
/// JSON file.
///
/// ```json
/// {
///   "point_count_input": "slider",
///   "report": { "include_date": false, "missing_image": "fail" },
///   "chart": { "width": 800, "height": 800 },
///   "staging": { "output": "out/circle.pdf" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
  /// How the point count of the form is accepted.
  pub point_count_input: PointCountInput,
  pub report: ReportOptions,
  pub chart: ChartStyle,
  pub staging: StagingPaths,
}

impl ExportConfig {
  pub fn load(path: &Path) -> Result<Self> {
    let text = std::fs::read_to_string(path)?;
    Self::from_json(&text)
  }

  pub fn from_json(text: &str) -> Result<Self> {
    Ok(serde_json::from_str(text)?)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::{
      error::Error,
      report::MissingImagePolicy
    }
  };

  #[test] fn empty_object_is_default() {
    assert_eq!(ExportConfig::from_json("{}").unwrap(), ExportConfig::default());
  }

  #[test] fn partial_override() {
    let config = ExportConfig::from_json(r#"{
      "point_count_input": "slider",
      "report": { "include_date": false, "missing_image": "fail", "footer": ["Author: someone"] },
      "chart": { "width": 800 },
      "staging": { "output": "out/circle.pdf" }
    }"#).unwrap();
    assert!(!config.report.include_date);
    assert!(config.report.include_image);
    assert_eq!(config.report.missing_image, MissingImagePolicy::Fail);
    assert_eq!(config.point_count_input, PointCountInput::Slider);
    assert_eq!(config.report.footer, vec!["Author: someone".to_string()]);
    assert_eq!((config.chart.width, config.chart.height), (800, 600));
    assert_eq!(config.staging.output, PathBuf::from("out/circle.pdf"));
    assert_eq!(config.staging.chart, PathBuf::from("circle_chart.png"));
  }

  #[test] fn unknown_policy_is_rejected() {
    let err = ExportConfig::from_json(r#"{ "report": { "missing_image": "maybe" } }"#).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
  }

  #[test] fn load_from_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("config.json");
    std::fs::write(&path, serde_json::to_string_pretty(&ExportConfig::default())?)?;
    assert_eq!(ExportConfig::load(&path)?, ExportConfig::default());
    assert!(matches!(ExportConfig::load(&dir.path().join("missing.json")), Err(Error::Io(_))));
    Ok(())
  }
}
