//! Painting animated elements into a buffer.
//!
//! An element is drawn at its natural rect into a scratch buffer, then copied
//! into the target with its [`VisualProps`] applied:
//! - offsets move it by whole cells (16 px per row, 8 px per column),
//! - scale resizes the rect around its centre,
//! - opacity blends every colour toward the band background, and nothing is
//!   drawn below [`MIN_OPACITY`],
//! - clip keeps only the top fraction of rows.
//!
//! Rotation has no cell equivalent; icons show a spinner frame while turned.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use ratatui::{buffer::Buffer, layout::Rect, style::Color};

use super::theme::rgb_of;
use crate::animation::{PX_PER_COL, PX_PER_ROW};
use crate::models::VisualProps;

/// Elements fainter than this are skipped.
pub const MIN_OPACITY: f32 = 0.05;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Placement of a transformed element, in signed coordinates of the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Left column (may be negative)
    pub x: i32,
    /// Top row (may be negative)
    pub y: i32,
    /// Width in cells
    pub width: u16,
    /// Height in cells
    pub height: u16,
    /// Rows kept after clipping
    pub visible_rows: u16,
}

/// Where `natural` lands once `props` are applied, or `None` when the
/// element collapses to nothing.
#[must_use]
pub fn place(natural: Rect, props: &VisualProps) -> Option<Placement> {
    let scale = props.scale.max(0.0);
    let width = (f32::from(natural.width) * scale).round() as i32;
    let height = (f32::from(natural.height) * scale).round() as i32;
    if width <= 0 || height <= 0 {
        return None;
    }
    let width = u16::try_from(width).ok()?;
    let height = u16::try_from(height).ok()?;

    let dx = (props.offset_x / PX_PER_COL).round() as i32;
    let dy = (props.offset_y / PX_PER_ROW).round() as i32;
    let x = i32::from(natural.x) + (i32::from(natural.width) - i32::from(width)) / 2 + dx;
    let y = i32::from(natural.y) + (i32::from(natural.height) - i32::from(height)) / 2 + dy;

    let visible_rows = (f32::from(height) * props.clip.clamp(0.0, 1.0)).ceil() as u16;
    if visible_rows == 0 {
        return None;
    }
    Some(Placement {
        x,
        y,
        width,
        height,
        visible_rows,
    })
}

/// `color` faded toward `bg`; `opacity` 1.0 keeps it unchanged.
#[must_use]
pub fn fade(color: Color, bg: Color, opacity: f32) -> Color {
    if opacity >= 1.0 {
        return color;
    }
    match (rgb_of(color), rgb_of(bg)) {
        (Some(fg), Some(bg)) => fg.blend(bg, 1.0 - opacity).to_ratatui_color(),
        // Named colours cannot be mixed; hide them once mostly transparent
        _ if opacity < 0.5 => bg,
        _ => color,
    }
}

/// Glyph to show for an icon turned by `rotation` degrees.
#[must_use]
pub fn rotated_glyph(glyph: &str, rotation: f32) -> &str {
    let turned = rotation.rem_euclid(360.0);
    if turned < 1.0 || turned > 359.0 {
        return glyph;
    }
    let frame = (turned.rem_euclid(180.0) / 45.0) as usize % SPINNER.len();
    SPINNER[frame]
}

/// Draw an element with `props` applied.
///
/// `draw` renders the element into the rect it is given, which starts at the
/// origin of a scratch buffer. Returns the area actually covered in `buf`.
pub fn paint(
    buf: &mut Buffer,
    natural: Rect,
    props: &VisualProps,
    bg: Color,
    draw: impl FnOnce(Rect, &mut Buffer),
) -> Option<Rect> {
    if props.opacity < MIN_OPACITY {
        return None;
    }
    let placement = place(natural, props)?;
    let local = Rect::new(0, 0, placement.width, placement.height);
    let mut scratch = Buffer::empty(local);
    draw(local, &mut scratch);

    let target = buf.area;
    let mut covered: Option<Rect> = None;
    for row in 0..placement.visible_rows {
        let Ok(y) = u16::try_from(placement.y + i32::from(row)) else {
            continue;
        };
        if y < target.y || y >= target.bottom() {
            continue;
        }
        for col in 0..placement.width {
            let Ok(x) = u16::try_from(placement.x + i32::from(col)) else {
                continue;
            };
            if x < target.x || x >= target.right() {
                continue;
            }
            let Some(src) = scratch.cell((col, row)) else {
                continue;
            };
            let src = src.clone();
            let Some(dst) = buf.cell_mut((x, y)) else {
                continue;
            };
            let under = if dst.bg == Color::Reset { bg } else { dst.bg };
            dst.set_symbol(src.symbol());
            dst.fg = fade(src.fg, under, props.opacity);
            if src.bg != Color::Reset {
                dst.bg = fade(src.bg, under, props.opacity);
            }
            dst.modifier = src.modifier;
            let cell = Rect::new(x, y, 1, 1);
            covered = Some(covered.map_or(cell, |c| c.union(cell)));
        }
    }
    covered
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::{Paragraph, Widget};

    fn text(area: Rect, buf: &mut Buffer, s: &str) {
        Paragraph::new(s.to_string()).render(area, buf);
    }

    #[test]
    fn test_identity_placement() {
        let natural = Rect::new(4, 2, 10, 3);
        let p = place(natural, &VisualProps::IDENTITY).unwrap();
        assert_eq!((p.x, p.y, p.width, p.height, p.visible_rows), (4, 2, 10, 3, 3));
    }

    #[test]
    fn test_offset_converts_pixels_to_cells() {
        let natural = Rect::new(10, 10, 4, 2);
        let props = VisualProps::IDENTITY.with_offset(-16.0, 48.0);
        let p = place(natural, &props).unwrap();
        assert_eq!((p.x, p.y), (8, 13));
    }

    #[test]
    fn test_scale_shrinks_around_centre() {
        let natural = Rect::new(0, 0, 20, 10);
        let p = place(natural, &VisualProps::scaled(0.5)).unwrap();
        assert_eq!((p.x, p.y, p.width, p.height), (5, 2, 10, 5));
        assert!(place(natural, &VisualProps::scaled(0.0)).is_none());
    }

    #[test]
    fn test_clip_keeps_top_rows() {
        let natural = Rect::new(0, 0, 5, 4);
        let p = place(natural, &VisualProps::IDENTITY.with_clip(0.5)).unwrap();
        assert_eq!(p.visible_rows, 2);
        assert!(place(natural, &VisualProps::IDENTITY.with_clip(0.0)).is_none());
    }

    #[test]
    fn test_fade() {
        let bg = Color::Rgb(0, 0, 0);
        let fg = Color::Rgb(200, 100, 50);
        assert_eq!(fade(fg, bg, 1.0), fg);
        assert_eq!(fade(fg, bg, 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(fade(Color::Yellow, bg, 0.2), bg);
    }

    #[test]
    fn test_invisible_element_not_drawn() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        let covered = paint(
            &mut buf,
            Rect::new(0, 0, 5, 1),
            &VisualProps::IDENTITY.with_opacity(0.0),
            Color::Black,
            |area, b| text(area, b, "HELLO"),
        );
        assert!(covered.is_none());
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), " ");
    }

    #[test]
    fn test_paint_with_offset_crops_at_edge() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 2));
        let props = VisualProps::IDENTITY.with_offset(-16.0, 0.0);
        let covered = paint(&mut buf, Rect::new(0, 0, 5, 1), &props, Color::Black, |area, b| {
            text(area, b, "HELLO");
        })
        .unwrap();
        assert_eq!(covered, Rect::new(0, 0, 3, 1));
        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "L");
    }

    #[test]
    fn test_rotated_glyph() {
        assert_eq!(rotated_glyph("ϟ", 0.0), "ϟ");
        assert_eq!(rotated_glyph("ϟ", 360.0), "ϟ");
        assert_eq!(rotated_glyph("ϟ", 50.0), "/");
        assert_eq!(rotated_glyph("ϟ", -90.0), "-");
    }
}
