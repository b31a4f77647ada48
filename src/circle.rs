//! Evenly spaced points on a circle.
//!
//! The generator is a closed-form map, `θ_i = start + 2π·i/n`, and performs no validation:
//! a [`CircleSpec`] obtained through [`crate::input::CircleForm::validate`] is guaranteed to
//! have `radius > 0` and `point_count >= 3`.

use {
  std::{f64::consts::TAU, ops::Index, slice},
  euclid::{Angle, Point2D, Vector2D as V2},
  crate::input::Color
};

/// Coordinates as entered by the user, y up.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DataSpace;

pub type DataPoint = Point2D<f64, DataSpace>;

/// Geometric and display parameters of one circle.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleSpec {
  center: DataPoint,
  radius: f64,
  point_count: usize,
  color: Color,
  unit: String,
}

impl CircleSpec {
  /// Inputs are taken as-is; use [`crate::input::CircleForm`] for checked construction.
  pub fn new(center: DataPoint, radius: f64, point_count: usize, color: Color, unit: impl Into<String>) -> Self {
    CircleSpec { center, radius, point_count, color, unit: unit.into() }
  }

  pub fn center(&self) -> DataPoint { self.center }
  pub fn radius(&self) -> f64 { self.radius }
  pub fn point_count(&self) -> usize { self.point_count }
  pub fn color(&self) -> &Color { &self.color }
  pub fn unit(&self) -> &str { &self.unit }

  pub fn points(&self) -> PointSet {
    points_on_circle(self.center, self.radius, self.point_count)
  }
}

/// Ordered by increasing angle, counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
  points: Vec<DataPoint>,
}

impl PointSet {
  pub fn len(&self) -> usize { self.points.len() }
  pub fn is_empty(&self) -> bool { self.points.is_empty() }
  pub fn iter(&self) -> slice::Iter<'_, DataPoint> { self.points.iter() }
  pub fn as_slice(&self) -> &[DataPoint] { &self.points }
  pub fn get(&self, index: usize) -> Option<DataPoint> { self.points.get(index).copied() }

  /// Angle between two consecutive points.
  pub fn angular_step(&self) -> Angle<f64> {
    Angle::radians(TAU / self.points.len() as f64)
  }
}

impl Index<usize> for PointSet {
  type Output = DataPoint;
  fn index(&self, index: usize) -> &DataPoint { &self.points[index] }
}

impl<'a> IntoIterator for &'a PointSet {
  type Item = &'a DataPoint;
  type IntoIter = slice::Iter<'a, DataPoint>;
  fn into_iter(self) -> Self::IntoIter { self.points.iter() }
}

/// `point_count` points at distance `radius` from `center`, the first one at angle 0.
pub fn points_on_circle(center: DataPoint, radius: f64, point_count: usize) -> PointSet {
  points_on_circle_from(center, radius, point_count, Angle::zero())
}

/// Same as [`points_on_circle`], with the first point at angle `start`.
pub fn points_on_circle_from(
  center: DataPoint,
  radius: f64,
  point_count: usize,
  start: Angle<f64>
) -> PointSet {
  let points = (0..point_count)
    .map(|i| start.radians + TAU * i as f64 / point_count as f64)
    .map(|θ| {
      let (sin, cos) = θ.sin_cos();
      // polar to cartesian
      center + V2::new(cos, sin) * radius
    })
    .collect();
  PointSet { points }
}
