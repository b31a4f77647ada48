//! Caller-side input constraints.
//!
//! The point generator trusts its arguments; this is the layer that rejects a radius below
//! [`MIN_RADIUS`], a point count out of [`POINT_COUNT_RANGE`] or a malformed color before a
//! [`CircleSpec`] can exist.

use {
  std::{fmt, ops::RangeInclusive, str::FromStr},
  euclid::Point2D,
  image::Rgba,
  serde::{Deserialize, Serialize},
  crate::{
    circle::CircleSpec,
    error::ValidationError
  }
};

pub const MIN_RADIUS: f64 = 0.1;
pub const POINT_COUNT_RANGE: RangeInclusive<usize> = 3..=500;
pub const DEFAULT_COLOR: &str = "#0000FF";
pub const DEFAULT_UNIT: &str = "m";

/// How the point count is entered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointCountInput {
  /// Snaps out-of-range values to the nearest end of the track.
  Slider,
  /// Rejects out-of-range values.
  #[default]
  Stepper,
}

impl PointCountInput {
  pub fn accept(self, count: i64) -> Result<usize, ValidationError> {
    let (min, max) = (*POINT_COUNT_RANGE.start(), *POINT_COUNT_RANGE.end());
    match self {
      PointCountInput::Slider => Ok(count.clamp(min as i64, max as i64) as usize),
      PointCountInput::Stepper if (min as i64..=max as i64).contains(&count) => Ok(count as usize),
      PointCountInput::Stepper => Err(ValidationError::PointCount { count, min, max }),
    }
  }
}

/// `#RRGGBB` color, kept both as entered and as a pixel value.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
  hex: String,
  rgba: Rgba<u8>,
}

impl Color {
  pub fn parse(hex: &str) -> Result<Self, ValidationError> {
    let invalid = || ValidationError::Color(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
      return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Color {
      hex: format!("#{}", digits.to_ascii_uppercase()),
      rgba: Rgba([channel(0)?, channel(2)?, channel(4)?, 255]),
    })
  }

  pub fn hex(&self) -> &str { &self.hex }
  pub fn rgba(&self) -> Rgba<u8> { self.rgba }
}

impl FromStr for Color {
  type Err = ValidationError;
  fn from_str(s: &str) -> Result<Self, Self::Err> { Color::parse(s) }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.hex)
  }
}

/// Raw values as they arrive from the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleForm {
  pub center_x: f64,
  pub center_y: f64,
  pub radius: f64,
  pub point_count: i64,
  pub color: String,
  pub unit: String,
}

impl Default for CircleForm {
  fn default() -> Self {
    CircleForm {
      center_x: 0.0,
      center_y: 0.0,
      radius: 5.0,
      point_count: 8,
      color: DEFAULT_COLOR.to_string(),
      unit: DEFAULT_UNIT.to_string(),
    }
  }
}

impl CircleForm {
  pub fn validate(&self, point_count_input: PointCountInput) -> Result<CircleSpec, ValidationError> {
    if !self.radius.is_finite() || self.radius < MIN_RADIUS {
      return Err(ValidationError::Radius { radius: self.radius, min: MIN_RADIUS });
    }
    if !self.center_x.is_finite() || !self.center_y.is_finite() {
      return Err(ValidationError::Center { x: self.center_x, y: self.center_y });
    }
    let point_count = point_count_input.accept(self.point_count)?;
    let color = Color::parse(self.color.trim())?;
    let unit = match self.unit.trim() {
      "" => DEFAULT_UNIT,
      unit => unit,
    };
    Ok(CircleSpec::new(
      Point2D::new(self.center_x, self.center_y),
      self.radius,
      point_count,
      color,
      unit,
    ))
  }
}
