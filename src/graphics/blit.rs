//! # Blitter
//!
//! Copies a (clipped) region of one surface onto another.

use super::{Rect, Surface};

/// Copies `clip` (or all) of `source` onto `destination` with its top-left
/// corner at (`x`, `y`).
///
/// The source region is clipped to the source bounds and the destination
/// area to the destination bounds; nothing outside that area is written.
/// Pixels matching the source color key are skipped. Returns the destination
/// rectangle that was covered, which is empty when nothing overlapped.
///
/// # Examples
///
/// ```
/// use clipblit::{blit, PixelFormat, Rect, Rgb, Surface};
///
/// let mut sheet = Surface::new(150, 150, PixelFormat::DISPLAY).unwrap();
/// sheet.fill_rect(Some(Rect::new(75, 0, 75, 75)), Rgb::new(255, 0, 0));
/// let mut screen = Surface::new(640, 480, PixelFormat::DISPLAY).unwrap();
///
/// let covered = blit(540, 0, &sheet, &mut screen, Some(Rect::new(75, 0, 75, 75)));
/// assert_eq!(covered, Rect::new(540, 0, 75, 75));
/// assert_eq!(screen.pixel(540, 0), Some(Rgb::new(255, 0, 0)));
/// ```
pub fn blit(
    x: i32,
    y: i32,
    source: &Surface,
    destination: &mut Surface,
    clip: Option<Rect>,
) -> Rect {
    let src_area = clip.map_or(source.bounds(), |c| source.bounds().intersection(c));
    if src_area.is_empty() {
        return Rect::new(x, y, 0, 0);
    }

    // A clip that starts outside the source shifts the destination the same way.
    let (x, y) = match clip {
        Some(c) => (
            x as i64 + (src_area.x as i64 - c.x as i64),
            y as i64 + (src_area.y as i64 - c.y as i64),
        ),
        None => (x as i64, y as i64),
    };

    let left = x.max(0);
    let top = y.max(0);
    let right = (x + src_area.w as i64).min(destination.width() as i64);
    let bottom = (y + src_area.h as i64).min(destination.height() as i64);
    if right <= left || bottom <= top {
        return Rect::new(clamp_i32(x), clamp_i32(y), 0, 0);
    }

    let dst_area = Rect::new(
        left as i32,
        top as i32,
        (right - left) as u32,
        (bottom - top) as u32,
    );
    let src_x = (src_area.x as i64 + (left - x)) as u32;
    let src_y = (src_area.y as i64 + (top - y)) as u32;

    if source.color_key().is_none() && source.format() == destination.format() {
        copy_rows(source, destination, src_x, src_y, dst_area);
    } else {
        copy_pixels(source, destination, src_x, src_y, dst_area);
    }

    log::trace!(
        "Blitted {}x{} from ({}, {}) to ({}, {})",
        dst_area.w,
        dst_area.h,
        src_x,
        src_y,
        dst_area.x,
        dst_area.y
    );
    dst_area
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Fast path: identical formats and no color key.
fn copy_rows(source: &Surface, destination: &mut Surface, src_x: u32, src_y: u32, area: Rect) {
    let bpp = source.format().bytes_per_pixel();
    let len = area.w as usize * bpp;
    let src_start = src_x as usize * bpp;
    let dst_start = area.x as usize * bpp;

    for row in 0..area.h {
        let src = &source.row(src_y + row)[src_start..src_start + len];
        let dst = destination.row_mut(area.y as u32 + row);
        dst[dst_start..dst_start + len].copy_from_slice(src);
    }
}

fn copy_pixels(source: &Surface, destination: &mut Surface, src_x: u32, src_y: u32, area: Rect) {
    let key = source.color_key();
    let src_bpp = source.format().bytes_per_pixel();
    let dst_bpp = destination.format().bytes_per_pixel();
    let dst_format = destination.format();

    for row in 0..area.h {
        let src_row = source.row(src_y + row);
        let dst_row = destination.row_mut(area.y as u32 + row);

        for col in 0..area.w as usize {
            let s = (src_x as usize + col) * src_bpp;
            let color = source.format().decode(&src_row[s..s + src_bpp]);
            if key == Some(color) {
                continue;
            }
            let d = (area.x as usize + col) * dst_bpp;
            dst_format.encode(color, &mut dst_row[d..d + dst_bpp]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PixelFormat, Rgb};

    const RED: Rgb = Rgb::new(255, 0, 0);

    fn screen() -> Surface {
        let mut s = Surface::new(20, 20, PixelFormat::DISPLAY).unwrap();
        s.fill_rect(None, Rgb::WHITE);
        s
    }

    #[test]
    fn test_whole_source_blit() {
        let mut src = Surface::new(4, 3, PixelFormat::DISPLAY).unwrap();
        src.fill_rect(None, RED);
        let mut dst = screen();

        let covered = blit(2, 5, &src, &mut dst, None);

        assert_eq!(covered, Rect::new(2, 5, 4, 3));
        assert_eq!(dst.pixel(2, 5), Some(RED));
        assert_eq!(dst.pixel(5, 7), Some(RED));
        assert_eq!(dst.pixel(6, 7), Some(Rgb::WHITE));
        assert_eq!(dst.pixel(2, 8), Some(Rgb::WHITE));
    }

    #[test]
    fn test_color_key_is_skipped() {
        let mut src = Surface::new(2, 1, PixelFormat::DISPLAY).unwrap();
        src.put_pixel(0, 0, Rgb::MAGENTA_KEY);
        src.put_pixel(1, 0, RED);
        src.set_color_key(Some(Rgb::MAGENTA_KEY));
        let mut dst = screen();

        blit(0, 0, &src, &mut dst, None);

        assert_eq!(dst.pixel(0, 0), Some(Rgb::WHITE));
        assert_eq!(dst.pixel(1, 0), Some(RED));
    }

    #[test]
    fn test_negative_offset_clips_source() {
        let mut src = Surface::new(4, 4, PixelFormat::DISPLAY).unwrap();
        src.put_pixel(2, 3, RED);
        let mut dst = screen();

        let covered = blit(-2, -1, &src, &mut dst, None);

        assert_eq!(covered, Rect::new(0, 0, 2, 3));
        assert_eq!(dst.pixel(0, 2), Some(RED));
    }

    #[test]
    fn test_fully_outside_touches_nothing() {
        let src = Surface::new(4, 4, PixelFormat::DISPLAY).unwrap();
        let mut dst = screen();
        let before = dst.clone();

        let covered = blit(100, 100, &src, &mut dst, None);

        assert!(covered.is_empty());
        assert_eq!(dst, before);
    }

    #[test]
    fn test_clip_past_source_edge() {
        let mut src = Surface::new(4, 4, PixelFormat::DISPLAY).unwrap();
        src.fill_rect(None, RED);
        let mut dst = screen();

        let covered = blit(0, 0, &src, &mut dst, Some(Rect::new(2, 2, 5, 5)));

        assert_eq!(covered, Rect::new(0, 0, 2, 2));
        assert_eq!(dst.pixel(2, 2), Some(Rgb::WHITE));
    }

    #[test]
    fn test_extreme_clip_and_offset_are_clipped_away() {
        let mut sheet = Surface::new(150, 150, PixelFormat::DISPLAY).unwrap();
        sheet.fill_rect(None, RED);
        let mut dst = screen();
        let before = dst.clone();

        let far_left = blit(0, 0, &sheet, &mut dst, Some(Rect::new(i32::MIN, 0, u32::MAX, 10)));
        assert!(far_left.is_empty());

        let far_right = blit(i32::MAX - 5, 0, &sheet, &mut dst, Some(Rect::new(-10, 0, 75, 75)));
        assert!(far_right.is_empty());
        assert_eq!(far_right.x, i32::MAX);

        assert_eq!(dst, before);
    }

    #[test]
    fn test_clip_before_sheet_shifts_destination() {
        let mut src = Surface::new(4, 4, PixelFormat::DISPLAY).unwrap();
        src.put_pixel(0, 0, RED);
        let mut dst = screen();

        let covered = blit(0, 0, &src, &mut dst, Some(Rect::new(-2, -1, 4, 4)));

        assert_eq!(covered, Rect::new(2, 1, 2, 3));
        assert_eq!(dst.pixel(2, 1), Some(RED));
        assert_eq!(dst.pixel(1, 1), Some(Rgb::WHITE));
    }

    #[test]
    fn test_cross_format_blit() {
        let mut src = Surface::new(3, 3, PixelFormat::Rgb888).unwrap();
        src.fill_rect(None, RED);
        let mut dst = screen();

        blit(1, 1, &src, &mut dst, None);

        assert_eq!(dst.pixel(3, 3), Some(RED));
        let offset = dst.offset_of(3, 3);
        assert_eq!(dst.as_bytes()[offset + 3], 0xFF);
    }
}
