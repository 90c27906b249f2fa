//! crates/campaign_core/src/render/fonts.rs
//!
//! Typeface selection for the fallback renderer. A scalable font is preferred;
//! when none can be loaded the built-in 8x8 bitmap font is used instead, so
//! loading never fails.

use ab_glyph::{FontArc, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const TITLE_SIZE: f32 = 56.0;
pub const SUBTITLE_SIZE: f32 = 36.0;
pub const SMALL_SIZE: f32 = 24.0;

const GLYPH_CELL: u32 = 8;

/// Well-known locations of a sans-serif font on common systems.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[derive(Clone)]
enum Typeface {
    Scalable(FontArc),
    Bitmap,
}

/// The typeface used for titles, subtitles and small print.
#[derive(Clone)]
pub struct FontSet {
    face: Typeface,
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let face = match self.face {
            Typeface::Scalable(_) => "scalable",
            Typeface::Bitmap => "bitmap",
        };
        f.debug_struct("FontSet").field("face", &face).finish()
    }
}

impl FontSet {
    /// Loads `preferred` if given, then the well-known system fonts, and finally
    /// settles for the bitmap font.
    pub fn load(preferred: Option<&Path>) -> Self {
        let candidates = preferred
            .map(Path::to_path_buf)
            .into_iter()
            .chain(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from));
        Self::from_candidates(candidates)
    }

    /// Uses the first candidate that reads and parses as a font.
    pub fn from_candidates<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        for path in candidates {
            let bytes = match std::fs::read(&path) {
                Ok(bytes) => bytes,
                Err(_) => continue,
            };
            match FontArc::try_from_vec(bytes) {
                Ok(font) => {
                    debug!("Loaded fallback font from {}", path.display());
                    return Self {
                        face: Typeface::Scalable(font),
                    };
                }
                Err(e) => warn!("Ignoring unreadable font {}: {}", path.display(), e),
            }
        }
        warn!("No scalable font available; fallback images will use the bitmap font.");
        Self::bitmap()
    }

    /// The built-in bitmap font only.
    pub fn bitmap() -> Self {
        Self {
            face: Typeface::Bitmap,
        }
    }

    pub fn is_scalable(&self) -> bool {
        matches!(self.face, Typeface::Scalable(_))
    }

    /// Rendered width of `text` in pixels at `size`.
    pub fn text_width(&self, size: f32, text: &str) -> u32 {
        match &self.face {
            Typeface::Scalable(font) => text_size(PxScale::from(size), font, text).0,
            Typeface::Bitmap => text.chars().count() as u32 * GLYPH_CELL * bitmap_scale(size),
        }
    }

    /// Draws `text` with its top-left corner at (`x`, `y`). Pixels outside the
    /// canvas are clipped.
    pub fn draw(&self, canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, size: f32, text: &str) {
        match &self.face {
            Typeface::Scalable(font) => {
                draw_text_mut(canvas, color, x, y, PxScale::from(size), font, text)
            }
            Typeface::Bitmap => draw_bitmap_text(canvas, color, x, y, bitmap_scale(size), text),
        }
    }
}

fn bitmap_scale(size: f32) -> u32 {
    ((size / 16.0) as u32).max(1)
}

fn draw_bitmap_text(canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, scale: u32, text: &str) {
    let advance = (GLYPH_CELL * scale) as i32;
    let dot = scale as i32;
    for (index, ch) in text.chars().enumerate() {
        let glyph = BASIC_FONTS
            .get(ch)
            .or_else(|| BASIC_FONTS.get('?'))
            .unwrap_or([0; 8]);
        let origin_x = x + index as i32 * advance;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_CELL as i32 {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let rect = Rect::at(origin_x + col * dot, y + row as i32 * dot).of_size(scale, scale);
                draw_filled_rect_mut(canvas, rect, color);
            }
        }
    }
}
