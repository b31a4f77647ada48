//! circle-points CLI
//!
//! - `render`: print the points and stage the chart image
//! - `export`: render, then assemble the PDF report

use {
  std::{path::PathBuf, process::ExitCode},
  anyhow::{Context, Result},
  clap::{Args, Parser, Subcommand},
  tracing_subscriber::{fmt, EnvFilter},
  circle_points::{
    config::ExportConfig,
    error::Error,
    export,
    input::{CircleForm, PointCountInput, DEFAULT_COLOR, DEFAULT_UNIT},
    report::{format_coordinate, ImageStatus, MissingImagePolicy}
  }
};

/// Evenly spaced points on a circle, plotted and exported as a PDF report
#[derive(Parser)]
#[command(name = "circle-points", version, propagate_version = true)]
struct Cli {
  /// Verbosity level (-v, -vv, -vvv)
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  verbose: u8,

  /// JSON file with an export configuration
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Print the coordinates and stage the chart image
  Render(CircleArgs),
  /// Render and write the PDF report
  Export {
    #[command(flatten)]
    circle: CircleArgs,
    /// Output document, overrides the config
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Leave out the date stamp
    #[arg(long)]
    no_date: bool,
    /// Leave out the chart image
    #[arg(long)]
    no_image: bool,
    /// Fail instead of omitting a chart image that cannot be embedded
    #[arg(long)]
    strict_image: bool,
  },
}

#[derive(Args)]
struct CircleArgs {
  #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
  center_x: f64,
  #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
  center_y: f64,
  #[arg(short, long, default_value_t = 5.0)]
  radius: f64,
  /// Number of points, 3 to 500
  #[arg(short = 'n', long, default_value_t = 8, allow_negative_numbers = true)]
  points: i64,
  /// Point color, #RRGGBB
  #[arg(long, default_value = DEFAULT_COLOR)]
  color: String,
  /// Unit label of the coordinates
  #[arg(short, long, default_value = DEFAULT_UNIT)]
  unit: String,
  /// Clamp the point count into range instead of rejecting it
  #[arg(long)]
  slider: bool,
  /// Staged chart image, overrides the config
  #[arg(long)]
  chart: Option<PathBuf>,
}

impl CircleArgs {
  fn form(&self) -> CircleForm {
    CircleForm {
      center_x: self.center_x,
      center_y: self.center_y,
      radius: self.radius,
      point_count: self.points,
      color: self.color.clone(),
      unit: self.unit.clone(),
    }
  }

  fn apply(&self, config: &mut ExportConfig) {
    if self.slider {
      config.point_count_input = PointCountInput::Slider;
    }
    if let Some(chart) = &self.chart {
      config.staging.chart = chart.clone();
    }
  }
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let filter = match cli.verbose {
    0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    1 => EnvFilter::new("info"),
    2 => EnvFilter::new("debug"),
    _ => EnvFilter::new("trace"),
  };
  fmt()
    .with_env_filter(filter)
    .with_target(false)
    .with_writer(std::io::stderr)
    .init();

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("{}", circle_points::error::display(&*e));
      ExitCode::from(exit_status(&e))
    }
  }
}

/// 2 for invalid input, which is the user's to fix, 1 for anything else.
fn exit_status(e: &anyhow::Error) -> u8 {
  match e.downcast_ref::<Error>() {
    Some(e) if e.is_validation() => 2,
    _ => 1,
  }
}

fn run(cli: Cli) -> Result<()> {
  let mut config = match &cli.config {
    Some(path) => ExportConfig::load(path)
      .with_context(|| format!("failed to load config {}", path.display()))?,
    None => ExportConfig::default(),
  };

  match cli.command {
    Commands::Render(circle) => {
      circle.apply(&mut config);
      let spec = circle.form().validate(config.point_count_input).map_err(Error::from)?;
      let (points, chart) = export::render(&spec, &config)?;
      points.iter().enumerate().for_each(|(i, p)| println!(
        "Point {}: ({}, {})", i + 1, format_coordinate(p.x), format_coordinate(p.y)
      ));
      println!("chart: {}", chart.display());
    }
    Commands::Export { circle, output, no_date, no_image, strict_image } => {
      circle.apply(&mut config);
      if let Some(output) = output {
        config.staging.output = output;
      }
      config.report.include_date &= !no_date;
      config.report.include_image &= !no_image;
      if strict_image {
        config.report.missing_image = MissingImagePolicy::Fail;
      }
      let spec = circle.form().validate(config.point_count_input).map_err(Error::from)?;
      let outcome = export::export(&spec, &config)
        .with_context(|| format!("failed to export {}", config.staging.output.display()))?;
      if let ImageStatus::Omitted { path, reason } = &outcome.image {
        eprintln!("warning: chart {} not embedded: {}", path.display(), reason);
      }
      println!("{}", outcome.output.display());
    }
  }
  Ok(())
}
