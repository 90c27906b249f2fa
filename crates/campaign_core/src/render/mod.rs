//! crates/campaign_core/src/render/mod.rs
//!
//! Offline, procedural rendering of a branded placeholder banner. This is the
//! path that keeps image generation available when the remote service is not.

pub mod fonts;

pub use fonts::FontSet;

use crate::specialty::{display_name, SpecialtyProfile};
use fonts::{SMALL_SIZE, SUBTITLE_SIZE, TITLE_SIZE};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

pub const WIDTH: u32 = 1280;
pub const HEIGHT: u32 = 720;
pub const TITLE_WRAP_COLUMNS: usize = 35;
pub const TAGLINE: &str = "Healthcare Professional Research Initiative";

const CENTER_X: i32 = (WIDTH / 2) as i32;
const TITLE_LINE_HEIGHT: i32 = 70;
const TAGLINE_Y: i32 = 580;

/// Splits the survey name into the lines drawn as the title.
pub fn wrap_title(survey_name: &str) -> Vec<String> {
    let lines: Vec<String> = textwrap::wrap(survey_name, TITLE_WRAP_COLUMNS)
        .into_iter()
        .map(|line| line.into_owned())
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Top of the first title line; a single line sits a little lower.
pub fn title_start_y(line_count: usize) -> i32 {
    if line_count <= 1 {
        250
    } else {
        220
    }
}

/// Renders the 1280x720 fallback banner for a survey.
///
/// Colours come from the specialty profile table, so unknown specialties get
/// the "general" palette. Never fails: with no scalable font available the
/// text is drawn with the bitmap font.
pub fn render_fallback_image(survey_name: &str, medical_specialty: &str, fonts: &FontSet) -> RgbImage {
    let palette = SpecialtyProfile::lookup(medical_specialty).palette;
    let mut canvas = RgbImage::from_pixel(WIDTH, HEIGHT, palette.background);

    draw_border(&mut canvas, (40, 40), (1240, 680), 4, palette.accent);
    draw_border(&mut canvas, (60, 60), (1220, 660), 2, palette.text);
    draw_filled_rect_mut(&mut canvas, inclusive_rect((80, 150), (1200, 160)), palette.accent);

    let title_lines = wrap_title(survey_name);
    let title_start = title_start_y(title_lines.len());
    for (i, line) in title_lines.iter().enumerate() {
        let y = title_start + i as i32 * TITLE_LINE_HEIGHT;
        draw_centered(&mut canvas, fonts, TITLE_SIZE, y, line, palette.text);
    }

    let subtitle = format!("{} Research Survey", display_name(medical_specialty));
    let subtitle_y = title_start + title_lines.len() as i32 * TITLE_LINE_HEIGHT + 40;
    draw_centered(&mut canvas, fonts, SUBTITLE_SIZE, subtitle_y, &subtitle, palette.accent);

    draw_centered(&mut canvas, fonts, SMALL_SIZE, TAGLINE_Y, TAGLINE, palette.text);

    draw_corner_triangles(&mut canvas, palette.accent);

    canvas
}

fn inclusive_rect(top_left: (i32, i32), bottom_right: (i32, i32)) -> Rect {
    let width = (bottom_right.0 - top_left.0 + 1) as u32;
    let height = (bottom_right.1 - top_left.1 + 1) as u32;
    Rect::at(top_left.0, top_left.1).of_size(width, height)
}

/// Outline `thickness` pixels wide, growing inwards from the given corners.
fn draw_border(
    canvas: &mut RgbImage,
    top_left: (i32, i32),
    bottom_right: (i32, i32),
    thickness: i32,
    color: Rgb<u8>,
) {
    for inset in 0..thickness {
        let rect = inclusive_rect(
            (top_left.0 + inset, top_left.1 + inset),
            (bottom_right.0 - inset, bottom_right.1 - inset),
        );
        draw_hollow_rect_mut(canvas, rect, color);
    }
}

fn draw_centered(canvas: &mut RgbImage, fonts: &FontSet, size: f32, y: i32, text: &str, color: Rgb<u8>) {
    if text.is_empty() {
        return;
    }
    let width = fonts.text_width(size, text) as i32;
    fonts.draw(canvas, color, CENTER_X - width / 2, y, size, text);
}

fn draw_corner_triangles(canvas: &mut RgbImage, color: Rgb<u8>) {
    let triangles = [
        [Point::new(80, 80), Point::new(120, 80), Point::new(100, 100)],
        [Point::new(1160, 80), Point::new(1200, 80), Point::new(1200, 120)],
        [Point::new(80, 640), Point::new(80, 680), Point::new(120, 680)],
        [Point::new(1200, 600), Point::new(1200, 640), Point::new(1160, 640)],
    ];
    for triangle in &triangles {
        draw_polygon_mut(canvas, triangle, color);
    }
}
