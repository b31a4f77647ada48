//! Sequential top-to-bottom layout on A4 pages.

use {
  image::{DynamicImage, GenericImageView},
  printpdf::{
    BuiltinFont, Image, ImageTransform, IndirectFontRef, Mm,
    PdfDocument, PdfDocumentReference, PdfLayerReference
  },
  super::Line,
  crate::error::{Error, Result}
};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const TITLE_SIZE: f32 = 16.0;
const TEXT_SIZE: f32 = 12.0;
const TITLE_HEIGHT: f32 = 12.0;
const LINE_HEIGHT: f32 = 7.0;
const GAP_HEIGHT: f32 = 5.0;
const LAYER: &str = "Layer 1";

pub(super) struct PdfWriter {
  doc: PdfDocumentReference,
  regular: IndirectFontRef,
  bold: IndirectFontRef,
  layer: PdfLayerReference,
  /// Distance of the next line's top from the bottom edge, in mm.
  cursor: f32,
  pages: usize,
}

impl PdfWriter {
  pub fn new(title: &str) -> Result<Self> {
    let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(Error::pdf)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(Error::pdf)?;
    let layer = doc.get_page(page).get_layer(layer);
    Ok(PdfWriter { doc, regular, bold, layer, cursor: PAGE_HEIGHT - MARGIN, pages: 1 })
  }

  pub fn pages(&self) -> usize { self.pages }

  fn new_page(&mut self) {
    let (page, layer) = self.doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), LAYER);
    self.layer = self.doc.get_page(page).get_layer(layer);
    self.cursor = PAGE_HEIGHT - MARGIN;
    self.pages += 1;
  }

  /// Reserve `height` mm, breaking the page when it does not fit.
  fn reserve(&mut self, height: f32) -> f32 {
    if self.cursor - height < MARGIN {
      self.new_page();
    }
    self.cursor -= height;
    self.cursor
  }

  pub fn line(&mut self, line: &Line) {
    match line {
      Line::Title(text) => {
        let y = self.reserve(TITLE_HEIGHT);
        self.layer.use_text(text.as_str(), TITLE_SIZE, Mm(MARGIN), Mm(y), &self.bold);
      }
      Line::Text(text) => {
        let y = self.reserve(LINE_HEIGHT);
        self.layer.use_text(text.as_str(), TEXT_SIZE, Mm(MARGIN), Mm(y), &self.regular);
      }
      // a gap never opens a new page on its own
      Line::Gap => self.cursor = (self.cursor - GAP_HEIGHT).max(MARGIN),
    }
  }

  /// Scaled to the printable width, or height when the image is tall.
  pub fn image(&mut self, image: &DynamicImage) {
    let (width_px, height_px) = image.dimensions();
    let (max_w, max_h) = (PAGE_WIDTH - 2.0 * MARGIN, PAGE_HEIGHT - 2.0 * MARGIN);
    let aspect = height_px as f32 / width_px.max(1) as f32;
    let width = max_w.min(max_h / aspect);
    let height = width * aspect;
    // mm = px / dpi * 25.4
    let dpi = width_px as f32 * 25.4 / width;

    self.cursor = (self.cursor - GAP_HEIGHT).max(MARGIN);
    let y = self.reserve(height);
    // no alpha channel, printpdf would otherwise need a soft mask
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
    Image::from_dynamic_image(&rgb).add_to_layer(self.layer.clone(), ImageTransform {
      translate_x: Some(Mm(MARGIN + (max_w - width) / 2.0)),
      translate_y: Some(Mm(y)),
      dpi: Some(dpi),
      ..Default::default()
    });
  }

  pub fn finish(self) -> Result<Vec<u8>> {
    self.doc.save_to_bytes().map_err(Error::pdf)
  }
}
