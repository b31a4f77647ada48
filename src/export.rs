//! One request: generate, stage the chart, assemble, write.

use {
  std::path::PathBuf,
  tracing::debug,
  crate::{
    chart,
    circle::{CircleSpec, PointSet},
    config::ExportConfig,
    error::Result,
    report::{ImageStatus, ReportAssembler}
  }
};

#[derive(Debug, Clone)]
pub struct ExportOutcome {
  pub points: PointSet,
  pub chart: Option<PathBuf>,
  pub output: PathBuf,
  pub image: ImageStatus,
  pub pages: usize,
  pub size: u64,
}

/// Generate the points and stage the chart at `config.staging.chart`.
pub fn render(spec: &CircleSpec, config: &ExportConfig) -> Result<(PointSet, PathBuf)> {
  let points = spec.points();
  debug!(count = points.len(), radius = spec.radius(), "generated points");
  let chart = chart::stage_chart(spec, &points, &config.chart, &config.staging.chart)?;
  Ok((points, chart))
}

/// Full export. The output file is written only once the whole document has been assembled.
pub fn export(spec: &CircleSpec, config: &ExportConfig) -> Result<ExportOutcome> {
  export_with(spec, config, ReportAssembler::new(config.report.clone()))
}

/// [`export`] with a caller-provided assembler, e.g. one with a pinned date.
pub fn export_with(
  spec: &CircleSpec,
  config: &ExportConfig,
  assembler: ReportAssembler
) -> Result<ExportOutcome> {
  let (points, chart) = if assembler.options().include_image {
    let (points, chart) = render(spec, config)?;
    (points, Some(chart))
  } else {
    (spec.points(), None)
  };

  let report = assembler.assemble(spec, &points, chart.as_deref())?;
  let size = report.write_to(&config.staging.output)?;
  Ok(ExportOutcome {
    points,
    chart,
    output: config.staging.output.clone(),
    image: report.image,
    pages: report.pages,
    size,
  })
}
