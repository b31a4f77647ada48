//! .
//!
//! Crate-wide error type. Input validation failures are raised by [`crate::input`], never by
//! the point generator; everything else wraps a collaborator: the filesystem, the image codec, the
//! plotting backend, the PDF writer or the config parser.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("invalid input: {0}")]
  Validation(#[from] ValidationError),

  #[error("staged chart image is missing: {}", path.display())]
  ResourceMissing { path: PathBuf },

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error(transparent)]
  Image(#[from] image::ImageError),

  #[error("chart: {0}")]
  Chart(String),

  #[error("pdf writer: {0}")]
  Pdf(String),

  #[error("config: {0}")]
  Config(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
  #[error("radius must be a finite number >= {min}, got {radius}")]
  Radius { radius: f64, min: f64 },

  #[error("center must be finite, got ({x}, {y})")]
  Center { x: f64, y: f64 },

  #[error("point count must be within {min}..={max}, got {count}")]
  PointCount { count: i64, min: usize, max: usize },

  #[error("color must be in #RRGGBB form, got {0:?}")]
  Color(String),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;

/// Renders the error together with its chain of sources.
pub fn display(error: &(dyn std::error::Error + 'static)) -> String {
  let mut msg = "Error:\n".to_string();
  std::iter::successors(Some(error), |e| e.source())
    .enumerate()
    .for_each(|(index, error)| msg.push_str(&format!("└> {} - {}\n", index, error)));
  msg
}

impl Error {
  /// `true` for failures caused by the caller's input rather than the environment.
  pub fn is_validation(&self) -> bool {
    matches!(self, Error::Validation(_))
  }

  pub(crate) fn chart(e: impl std::fmt::Display) -> Self {
    Error::Chart(e.to_string())
  }

  pub(crate) fn pdf(e: impl std::fmt::Debug) -> Self {
    Error::Pdf(format!("{:?}", e))
  }
}
