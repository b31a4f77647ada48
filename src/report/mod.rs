//! Report assembly.
//!
//! A report is a title, an optional date stamp, the echoed [`CircleSpec`], the coordinate
//! listing and an optional chart image, laid out into a PDF held in memory. Writing it to disk
//! is up to the caller.
//!
//! What happens when the chart cannot be embedded is a configuration choice, see
//! [`MissingImagePolicy`]. Either way the outcome is reported through [`ImageStatus`] or an
//! error; a document is never returned with a silently dropped image.

use {
  std::path::{Path, PathBuf},
  chrono::{Local, NaiveDate},
  image::DynamicImage,
  serde::{Deserialize, Serialize},
  tracing::{info, warn},
  crate::{
    circle::{CircleSpec, PointSet},
    error::{Error, Result},
    util
  }
};

mod pdf;
#[cfg(test)] mod tests;

pub const DEFAULT_TITLE: &str = "Output - Points on a circle";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingImagePolicy {
  /// Produce the report without the image and flag it in [`ImageStatus::Omitted`].
  #[default]
  Omit,
  /// Refuse to produce the report.
  Fail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
  pub title: String,
  pub include_date: bool,
  pub include_image: bool,
  pub missing_image: MissingImagePolicy,
  /// Printed after the coordinate listing, one entry per line (author, contact, ...).
  pub footer: Vec<String>,
}

impl Default for ReportOptions {
  fn default() -> Self {
    ReportOptions {
      title: DEFAULT_TITLE.to_string(),
      include_date: true,
      include_image: true,
      missing_image: MissingImagePolicy::default(),
      footer: vec![],
    }
  }
}

/// One line of the text block.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
  Title(String),
  Text(String),
  Gap,
}

impl Line {
  pub fn text(&self) -> Option<&str> {
    match self {
      Line::Title(s) | Line::Text(s) => Some(s.as_str()),
      Line::Gap => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImageStatus {
  Embedded { path: PathBuf },
  /// Disabled in [`ReportOptions`], or no image was supplied.
  NotRequested,
  Omitted { path: PathBuf, reason: String },
}

#[derive(Debug, Clone)]
pub struct AssembledReport {
  pub bytes: Vec<u8>,
  pub image: ImageStatus,
  pub pages: usize,
}

impl AssembledReport {
  /// Write the document, returns its size in bytes.
  pub fn write_to(&self, path: &Path) -> Result<u64> {
    util::ensure_parent(path)?;
    std::fs::write(path, &self.bytes)?;
    let size = self.bytes.len() as u64;
    info!(path = %path.display(), size = %util::human_size(size), "wrote report");
    Ok(size)
  }
}

/// Two decimals, without a negative zero.
pub fn format_coordinate(value: f64) -> String {
  let s = format!("{:.2}", value);
  match s.strip_prefix('-') {
    Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
    _ => s
  }
}

#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
  options: ReportOptions,
  date: Option<NaiveDate>,
}

impl ReportAssembler {
  pub fn new(options: ReportOptions) -> Self {
    ReportAssembler { options, date: None }
  }

  /// Stamp this date instead of today's.
  pub fn with_date(mut self, date: NaiveDate) -> Self {
    self.date = Some(date);
    self
  }

  pub fn options(&self) -> &ReportOptions { &self.options }

  fn date(&self) -> NaiveDate {
    self.date.unwrap_or_else(|| Local::now().date_naive())
  }

  pub fn lines(&self, spec: &CircleSpec, points: &PointSet) -> Vec<Line> {
    let center = spec.center();
    let mut lines = vec![Line::Title(self.options.title.clone())];
    if self.options.include_date {
      lines.push(Line::Text(format!("Date: {}", self.date().format("%Y-%m-%d"))));
    }
    lines.extend([
      // `{:?}` keeps the `.0` of whole numbers
      format!("Center: ({:?}, {:?})", center.x, center.y),
      format!("Radius: {:?} {}", spec.radius(), spec.unit()),
      format!("Point count: {}", spec.point_count()),
      format!("Color: {}", spec.color()),
      format!("Unit: {}", spec.unit()),
    ].into_iter().map(Line::Text));
    lines.push(Line::Gap);
    lines.push(Line::Text("Point coordinates:".to_string()));
    lines.extend(points.iter().enumerate().map(|(i, point)| Line::Text(format!(
      "Point {}: ({}, {})", i + 1, format_coordinate(point.x), format_coordinate(point.y)
    ))));
    if !self.options.footer.is_empty() {
      lines.push(Line::Gap);
      lines.extend(self.options.footer.iter().cloned().map(Line::Text));
    }
    lines
  }

  /// Lay out the report. `chart` is the staged chart image, embedded when
  /// [`ReportOptions::include_image`] is set.
  pub fn assemble(
    &self,
    spec: &CircleSpec,
    points: &PointSet,
    chart: Option<&Path>
  ) -> Result<AssembledReport> {
    let (image, status) = match chart {
      Some(path) if self.options.include_image => self.resolve_image(path)?,
      _ => (None, ImageStatus::NotRequested),
    };

    let mut writer = pdf::PdfWriter::new(&self.options.title)?;
    crate::profile!("report", {
      self.lines(spec, points).iter().for_each(|line| writer.line(line));
      if let Some(image) = &image {
        writer.image(image);
      }
    });
    let pages = writer.pages();
    let bytes = writer.finish()?;

    info!(pages, size = %util::human_size(bytes.len() as u64), image = ?status, "assembled report");
    Ok(AssembledReport { bytes, image: status, pages })
  }

  fn resolve_image(&self, path: &Path) -> Result<(Option<DynamicImage>, ImageStatus)> {
    let omit = |reason: String| -> Result<(Option<DynamicImage>, ImageStatus)> {
      warn!(path = %path.display(), %reason, "chart image omitted from report");
      Ok((None, ImageStatus::Omitted { path: path.to_path_buf(), reason }))
    };
    if !path.is_file() {
      return match self.options.missing_image {
        MissingImagePolicy::Omit => omit("file not found".to_string()),
        MissingImagePolicy::Fail => Err(Error::ResourceMissing { path: path.to_path_buf() }),
      };
    }
    match image::open(path) {
      Ok(image) => Ok((Some(image), ImageStatus::Embedded { path: path.to_path_buf() })),
      Err(e) => match self.options.missing_image {
        MissingImagePolicy::Omit => omit(e.to_string()),
        MissingImagePolicy::Fail => Err(e.into()),
      }
    }
  }
}
