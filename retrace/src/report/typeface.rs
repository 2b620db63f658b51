use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

/// advance per character, as a fraction of the font size, used to measure
/// text when no font is loaded
pub const FALLBACK_ADVANCE: f32 = 0.5;

/// the report font. without a font file, text is measured with a fixed
/// advance and not drawn.
pub struct Typeface {
    font: Option<FontVec>,
}

impl std::fmt::Debug for Typeface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Typeface")
            .field("available", &self.is_available())
            .finish()
    }
}

impl Typeface {
    pub fn new(font: FontVec) -> Typeface {
        Self { font: Some(font) }
    }

    pub fn unavailable() -> Typeface {
        Self { font: None }
    }

    pub fn is_available(&self) -> bool {
        self.font.is_some()
    }

    /// rendered (width, height) of `text` at `size` pixels
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        match &self.font {
            Some(font) => {
                let (w, h) = text_size(PxScale::from(size), font, text);
                (w as f32, h as f32)
            }
            None => (text.chars().count() as f32 * size * FALLBACK_ADVANCE, size),
        }
    }

    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        self.measure(text, size).0
    }

    pub fn draw(
        &self,
        canvas: &mut RgbaImage,
        colour: Rgba<u8>,
        position: (i32, i32),
        size: f32,
        text: &str,
    ) {
        if let Some(font) = &self.font {
            let (x, y) = position;
            draw_text_mut(canvas, colour, x, y, PxScale::from(size), font, text);
        }
    }

    /// draws `text` centred on `centre`
    pub fn draw_centred(
        &self,
        canvas: &mut RgbaImage,
        colour: Rgba<u8>,
        centre: (i32, i32),
        size: f32,
        text: &str,
    ) {
        let (w, h) = self.measure(text, size);
        let x = centre.0 - (w / 2.0).round() as i32;
        let y = centre.1 - (h / 2.0).round() as i32;
        self.draw(canvas, colour, (x, y), size, text);
    }
}

#[cfg(test)]
mod test {
    use super::Typeface;

    #[test]
    fn test_fallback_measure() {
        let typeface = Typeface::unavailable();
        assert!(!typeface.is_available());
        assert_eq!(typeface.text_width("Burrard Stn", 40.0), 220.0);
        assert_eq!(typeface.measure("", 60.0), (0.0, 60.0));
    }
}
