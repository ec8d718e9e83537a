/// Page-layout sink over printpdf
///
/// The layout engines speak a small top-down, millimeter-based dialect
/// (cursor, `cell`, `ln`, `set_x`, automatic page breaks) while this module
/// owns the translation to printpdf's bottom-up coordinates, the builtin
/// fonts, and the logo stamped on every page. `finish()` serializes the
/// drawn pages to bytes and does no other I/O.
use std::fmt;
use std::io::BufWriter;
use std::path::Path;

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, IndirectFontRef,
    Mm, PdfDocumentReference, PdfLayerReference, Px, Rect, Rgb,
};
use time::OffsetDateTime;

use crate::error::RenderError;
use crate::palette::{BLACK, Rgb8};

/// A4 in millimeters
pub const A4_PORTRAIT: (f32, f32) = (210.0, 297.0);
pub const A4_LANDSCAPE: (f32, f32) = (297.0, 210.0);

const LEFT_MARGIN: f32 = 10.0;
const TOP_MARGIN: f32 = 10.0;
const RIGHT_MARGIN: f32 = 10.0;

const PT_TO_MM: f32 = 0.352_778;

/// Approximate glyph advance as a fraction of the font size, per style.
/// Builtin fonts carry no metrics we can query, and centered table cells
/// only need a stable estimate.
fn char_width_factor(style: FontStyle) -> f32 {
    match style {
        FontStyle::Bold => 0.54,
        _ => 0.50,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
    Oblique,
}

/// Decoded logo pixels, alpha pre-composited against white
#[derive(Clone)]
pub struct Logo {
    width_px: u32,
    height_px: u32,
    rgb: Vec<u8>,
}

impl fmt::Debug for Logo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logo({}x{})", self.width_px, self.height_px)
    }
}

impl Logo {
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let bytes = std::fs::read(path)
            .map_err(|e| RenderError::Logo(format!("{}: {}", path.display(), e)))?;
        let img = image::load_from_memory(&bytes)
            .map_err(|e| RenderError::Logo(format!("{}: {}", path.display(), e)))?;

        // Composite transparency against a white page background
        let rgba = img.to_rgba8();
        let (width_px, height_px) = rgba.dimensions();
        let mut rgb_img = image::RgbImage::new(width_px, height_px);
        for (x, y, pixel) in rgba.enumerate_pixels() {
            let image::Rgba([r, g, b, a]) = *pixel;
            let alpha = a as f32 / 255.0;
            let blend = |c: u8| (c as f32 * alpha + 255.0 * (1.0 - alpha)) as u8;
            rgb_img.put_pixel(x, y, image::Rgb([blend(r), blend(g), blend(b)]));
        }

        Ok(Self { width_px, height_px, rgb: rgb_img.into_raw() })
    }

    fn aspect(&self) -> f32 {
        self.height_px as f32 / self.width_px as f32
    }

    fn xobject(&self) -> ImageXObject {
        ImageXObject {
            width: Px(self.width_px as usize),
            height: Px(self.height_px as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: self.rgb.clone(),
            image_filter: None,
            clipping_bbox: None,
            smask: None,
        }
    }
}

/// Fixed logo position: x/y are top-down page coordinates, width in mm
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoSpot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

pub struct Canvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font_regular: IndirectFontRef,
    font_bold: IndirectFontRef,
    font_oblique: IndirectFontRef,
    page_w: f32,
    page_h: f32,
    x: f32,
    y: f32,
    fill: Rgb8,
    style: FontStyle,
    size: f32,
    /// Bottom margin that triggers an automatic page break, or None
    auto_break: Option<f32>,
    logo: Option<(Logo, Vec<LogoSpot>)>,
}

impl Canvas {
    pub fn new(
        title: &str,
        (page_w, page_h): (f32, f32),
        auto_break: Option<f32>,
        logo: Option<(Logo, Vec<LogoSpot>)>,
    ) -> Result<Self, RenderError> {
        let (doc, page, layer_ix) =
            printpdf::PdfDocument::new(title, Mm(page_w), Mm(page_h), "Layer 1");
        // pin the document dates so repeated renders of the same input only
        // differ in the random trailer ID
        let doc = doc
            .with_creation_date(OffsetDateTime::UNIX_EPOCH)
            .with_mod_date(OffsetDateTime::UNIX_EPOCH);
        let layer = doc.get_page(page).get_layer(layer_ix);

        let font_regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let font_oblique = doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(|e| RenderError::Pdf(e.to_string()))?;

        let canvas = Self {
            doc,
            layer,
            font_regular,
            font_bold,
            font_oblique,
            page_w,
            page_h,
            x: LEFT_MARGIN,
            y: TOP_MARGIN,
            fill: (255, 255, 255),
            style: FontStyle::Regular,
            size: 10.0,
            auto_break,
            logo,
        };
        canvas.stamp_logo();
        Ok(canvas)
    }

    pub fn set_font(&mut self, style: FontStyle, size: f32) {
        self.style = style;
        self.size = size;
    }

    pub fn set_fill_color(&mut self, rgb: Rgb8) {
        self.fill = rgb;
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    /// Advance the vertical cursor and return to the left margin
    pub fn ln(&mut self, h: f32) {
        self.y += h;
        self.x = LEFT_MARGIN;
    }

    /// Draw one bordered/filled cell with centered text and advance the
    /// horizontal cursor by its width. A width of zero extends the cell to
    /// the right margin. Triggers an automatic page break when the cell
    /// would cross the bottom margin, preserving the horizontal cursor.
    pub fn cell(&mut self, w: f32, h: f32, text: &str, border: bool, fill: bool) {
        if let Some(bottom) = self.auto_break {
            if self.y + h > self.page_h - bottom {
                let x = self.x;
                self.add_page();
                self.x = x;
            }
        }

        let w = if w == 0.0 { self.page_w - RIGHT_MARGIN - self.x } else { w };
        let (llx, lly) = (self.x, self.page_h - self.y - h);
        let (urx, ury) = (self.x + w, self.page_h - self.y);

        if fill || border {
            let mode = match (fill, border) {
                (true, true) => PaintMode::FillStroke,
                (true, false) => PaintMode::Fill,
                _ => PaintMode::Stroke,
            };
            self.layer.set_fill_color(to_color(self.fill));
            self.layer.set_outline_color(to_color(BLACK));
            self.layer.set_outline_thickness(0.2);
            self.layer
                .add_rect(Rect::new(Mm(llx), Mm(lly), Mm(urx), Mm(ury)).with_mode(mode));
        }

        if !text.is_empty() {
            let text_w = text.chars().count() as f32 * self.size * PT_TO_MM * char_width_factor(self.style);
            let tx = self.x + (w - text_w) / 2.0;
            // optical vertical centering against an approximate cap height
            let cap_h = self.size * PT_TO_MM * 0.7;
            let ty = self.page_h - self.y - h + (h - cap_h) / 2.0;
            self.layer.set_fill_color(to_color(BLACK));
            self.layer.use_text(text, self.size, Mm(tx), Mm(ty), self.font());
        }

        self.x += w;
    }

    /// Full-width centered cell with a line break, for titles and subheaders
    pub fn title_cell(&mut self, h: f32, text: &str) {
        self.cell(0.0, h, text, false, false);
        self.ln(h);
    }

    /// Start a new page, restore the cursor to the top-left margin, and
    /// stamp the logo spots
    pub fn add_page(&mut self) {
        let (page, layer_ix) = self.doc.add_page(Mm(self.page_w), Mm(self.page_h), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer_ix);
        self.x = LEFT_MARGIN;
        self.y = TOP_MARGIN;
        self.stamp_logo();
    }

    fn stamp_logo(&self) {
        let Some((logo, spots)) = &self.logo else { return };
        for spot in spots {
            let h_mm = spot.width * logo.aspect();
            let dpi = logo.width_px as f32 / (spot.width / 25.4);
            let image = Image::from(logo.xobject());
            image.add_to_layer(
                self.layer.clone(),
                ImageTransform {
                    translate_x: Some(Mm(spot.x)),
                    translate_y: Some(Mm(self.page_h - spot.y - h_mm)),
                    dpi: Some(dpi),
                    ..Default::default()
                },
            );
        }
    }

    fn font(&self) -> &IndirectFontRef {
        match self.style {
            FontStyle::Regular => &self.font_regular,
            FontStyle::Bold => &self.font_bold,
            FontStyle::Oblique => &self.font_oblique,
        }
    }

    /// Serialize the drawn pages to a finished document
    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        let Canvas { doc, .. } = self;
        let mut bytes: Vec<u8> = Vec::new();
        {
            let mut writer = BufWriter::new(&mut bytes);
            doc.save(&mut writer).map_err(|e| RenderError::Pdf(e.to_string()))?;
        }
        Ok(bytes)
    }
}

fn to_color((r, g, b): Rgb8) -> Color {
    Color::Rgb(Rgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, None))
}

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;
