//! Evenly spaced points on a circle, plotted and exported as a PDF report.
//!
//! The crate is split into the point generator ([`circle`]), the report assembler
//! ([`report`]), and the collaborators around them: input validation ([`input`]), the chart
//! renderer ([`chart`], on `plotters`), configuration ([`config`]) and the request pipeline ([`export`]).
//!
//! # Basic usage
//! ```no_run
//! # use circle_points::{
//! #   error::Result,
//! #   config::ExportConfig,
//! #   input::{CircleForm, PointCountInput},
//! #   export
//! # };
//! # fn main() -> Result<()> {
//! let form = CircleForm { center_x: 2.0, center_y: 3.0, radius: 1.0, point_count: 3, ..Default::default() };
//! // the generator trusts its input, validation happens here
//! let spec = form.validate(PointCountInput::Stepper)?;
//!
//! let config = ExportConfig::default();
//! let outcome = export::export(&spec, &config)?;
//! println!("{} ({} pages)", outcome.output.display(), outcome.pages);
//! #   Ok(())
//! # }
//! ```
//!
//! The generator alone:
//! ```
//! # use circle_points::circle::points_on_circle;
//! # use euclid::Point2D;
//! let points = points_on_circle(Point2D::new(0.0, 0.0), 5.0, 4);
//! assert_eq!(points.len(), 4);
//! assert!((points[1].y - 5.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod util;
pub mod circle;
pub mod input;
pub mod chart;
pub mod report;
pub mod config;
pub mod export;
