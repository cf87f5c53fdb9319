//! # Rectangles
//!
//! Plain value rectangles used for clip regions and blit results.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with a signed origin and unsigned extent.
///
/// # Examples
///
/// ```
/// use clipblit::Rect;
///
/// let sheet = Rect::new(0, 0, 150, 150);
/// let sprite = Rect::new(75, 75, 75, 75);
/// assert!(sheet.contains_rect(sprite));
/// assert_eq!(sheet.intersection(Rect::new(100, 100, 100, 100)), Rect::new(100, 100, 50, 50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    /// Creates a rectangle.
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle at the origin covering `w` x `h`.
    pub const fn sized(w: u32, h: u32) -> Self {
        Self::new(0, 0, w, h)
    }

    /// Whether the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }

    /// Number of pixels covered.
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Returns the overlap of two rectangles. Disjoint rectangles yield an
    /// empty rectangle positioned at the clamped origin.
    pub fn intersection(&self, other: Rect) -> Rect {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        let w = (right - left as i64).max(0) as u32;
        let h = (bottom - top as i64).max(0) as u32;
        Rect::new(left, top, w, h)
    }

    /// Whether `other` lies completely inside this rectangle.
    pub fn contains_rect(&self, other: Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether the pixel at (`x`, `y`) lies inside this rectangle.
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && (x as i64) < self.right() && (y as i64) < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_intersection_is_empty() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(20, 20, 5, 5);
        assert!(a.intersection(b).is_empty());
    }

    #[test]
    fn test_negative_origin_intersection() {
        let screen = Rect::sized(640, 480);
        let sprite = Rect::new(-25, -10, 75, 75);
        assert_eq!(screen.intersection(sprite), Rect::new(0, 0, 50, 65));
    }

    #[test]
    fn test_contains_point_edges() {
        let r = Rect::new(75, 0, 75, 75);
        assert!(r.contains_point(75, 0));
        assert!(r.contains_point(149, 74));
        assert!(!r.contains_point(150, 74));
        assert!(!r.contains_point(74, 0));
    }
}
