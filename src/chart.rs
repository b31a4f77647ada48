//! Raster chart of a [`PointSet`]: grid, labelled axes, points in the circle's color, a red `+`
//! on the center and a legend. Both axes share one scale, so the circle stays round.

use {
  std::{ops::Range, path::{Path, PathBuf}},
  euclid::Vector2D as V2,
  image::{ImageFormat, Rgba, RgbImage},
  plotters::prelude::*,
  serde::{Deserialize, Serialize},
  tracing::info,
  crate::{
    circle::{CircleSpec, DataPoint, PointSet},
    error::{Error, Result},
    util
  }
};

/// Smallest accepted side of the chart, in pixels; the label areas need room.
pub const MIN_SIDE: u32 = 160;
const OUTER_MARGIN: u32 = 10;
const X_LABEL_AREA: u32 = 40;
const Y_LABEL_AREA: u32 = 55;
const CENTER_MARKER: RGBColor = RED;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
  pub width: u32,
  pub height: u32,
  /// Radius of a plotted point, in pixels.
  pub point_radius: u32,
  pub grid: bool,
  pub legend: bool,
  /// Empty space around the circle, relative to the radius.
  pub margin: f64,
}

impl Default for ChartStyle {
  fn default() -> Self {
    ChartStyle { width: 600, height: 600, point_radius: 5, grid: true, legend: true, margin: 0.15 }
  }
}

impl ChartStyle {
  pub fn resolution(&self) -> (u32, u32) {
    (self.width.max(MIN_SIDE), self.height.max(MIN_SIDE))
  }

  /// Size of the plotting area, inside the margins and label areas.
  fn plot_size(&self) -> (u32, u32) {
    let (width, height) = self.resolution();
    (
      width.saturating_sub(2 * OUTER_MARGIN + Y_LABEL_AREA).max(1),
      height.saturating_sub(2 * OUTER_MARGIN + X_LABEL_AREA).max(1),
    )
  }
}

/// Data window of the chart: centered on the circle, holding it plus a margin, and stretched
/// along one axis to the aspect ratio of the plotting area.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChartViewport {
  pub min: DataPoint,
  pub max: DataPoint,
}

impl ChartViewport {
  pub fn fit(spec: &CircleSpec, margin: f64, (width, height): (u32, u32)) -> Self {
    let half = spec.radius() * (1.0 + margin.max(0.0));
    let (w, h) = (width.max(1) as f64, height.max(1) as f64);
    let half = V2::new(half * (w / h).max(1.0), half * (h / w).max(1.0));
    ChartViewport { min: spec.center() - half, max: spec.center() + half }
  }

  pub fn x_range(&self) -> Range<f64> { self.min.x..self.max.x }
  pub fn y_range(&self) -> Range<f64> { self.min.y..self.max.y }

  /// Data units per pixel along each axis.
  pub fn scale(&self, (width, height): (u32, u32)) -> (f64, f64) {
    (
      (self.max.x - self.min.x) / width.max(1) as f64,
      (self.max.y - self.min.y) / height.max(1) as f64,
    )
  }
}

fn plot_color(color: Rgba<u8>) -> RGBColor {
  let Rgba([r, g, b, _]) = color;
  RGBColor(r, g, b)
}

/// Draw the chart in memory.
pub fn render_chart(spec: &CircleSpec, points: &PointSet, style: &ChartStyle) -> Result<RgbImage> {
  let (width, height) = style.resolution();
  let viewport = ChartViewport::fit(spec, style.margin, style.plot_size());
  let mut buffer = vec![0u8; width as usize * height as usize * 3];

  crate::profile!("chart", {
    let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(Error::chart)?;

    let mut chart = ChartBuilder::on(&root)
      .margin(OUTER_MARGIN)
      .x_label_area_size(X_LABEL_AREA)
      .y_label_area_size(Y_LABEL_AREA)
      .build_cartesian_2d(viewport.x_range(), viewport.y_range())
      .map_err(Error::chart)?;

    let mut mesh = chart.configure_mesh();
    mesh
      .x_desc(format!("X [{}]", spec.unit()))
      .y_desc(format!("Y [{}]", spec.unit()));
    if !style.grid {
      mesh.disable_mesh();
    }
    mesh.draw().map_err(Error::chart)?;

    let color = plot_color(spec.color().rgba());
    let radius = style.point_radius;
    chart
      .draw_series(points.iter().map(|p| Circle::new((p.x, p.y), radius, color.filled())))
      .map_err(Error::chart)?
      .label(format!("{} points", points.len()))
      .legend(move |(x, y)| Circle::new((x, y), radius, color.filled()));

    let arm = 2 * radius as i32 + 1;
    let stroke = CENTER_MARKER.stroke_width(2);
    let center = spec.center();
    chart
      .draw_series(std::iter::once(
        EmptyElement::at((center.x, center.y))
          + PathElement::new(vec![(-arm, 0), (arm, 0)], stroke)
          + PathElement::new(vec![(0, -arm), (0, arm)], stroke)
      ))
      .map_err(Error::chart)?
      .label("Center")
      .legend(move |(x, y)| PathElement::new(vec![(x - 6, y), (x + 6, y)], stroke));

    if style.legend {
      chart.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(Error::chart)?;
    }
    root.present().map_err(Error::chart)?;
  });

  RgbImage::from_raw(width, height, buffer)
    .ok_or_else(|| Error::Chart(format!("pixel buffer does not fit {}x{}", width, height)))
}

/// Render the chart and save it as PNG at `path`.
pub fn stage_chart(
  spec: &CircleSpec,
  points: &PointSet,
  style: &ChartStyle,
  path: &Path
) -> Result<PathBuf> {
  let image = render_chart(spec, points, style)?;
  util::ensure_parent(path)?;
  image.save_with_format(path, ImageFormat::Png)?;
  let size = std::fs::metadata(path)?.len();
  info!(path = %path.display(), size = %util::human_size(size), "staged chart");
  Ok(path.to_path_buf())
}
