//! # Sprite Sheet Clipping
//!
//! Named quadrants of a square sprite sheet and where each one is drawn.

use crate::config::SPRITE_SIZE;
use crate::graphics::Rect;

/// One quadrant of a 2x2 sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants in drawing order.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Column and row of the quadrant within the sheet.
    fn cell(self) -> (u32, u32) {
        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (1, 0),
            Quadrant::BottomLeft => (0, 1),
            Quadrant::BottomRight => (1, 1),
        }
    }

    /// Where the quadrant's sprite is drawn on the 640x480 screen.
    pub fn screen_offset(self) -> (i32, i32) {
        match self {
            Quadrant::TopLeft => (0, 0),
            Quadrant::TopRight => (540, 0),
            Quadrant::BottomLeft => (0, 380),
            Quadrant::BottomRight => (540, 380),
        }
    }
}

/// Maps quadrants to clip regions of a sprite sheet.
///
/// Regions are not checked against the sheet size; anything past the sheet
/// edge is clipped away when blitting.
///
/// # Examples
///
/// ```
/// use clipblit::{ClipTable, Quadrant, Rect};
///
/// let clips = ClipTable::default();
/// assert_eq!(clips.rect(Quadrant::BottomRight), Rect::new(75, 75, 75, 75));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipTable {
    sprite_size: u32,
}

impl Default for ClipTable {
    fn default() -> Self {
        Self::new(SPRITE_SIZE)
    }
}

impl ClipTable {
    /// Creates a table for square sprites of `sprite_size` pixels.
    pub fn new(sprite_size: u32) -> Self {
        Self { sprite_size }
    }

    pub fn sprite_size(&self) -> u32 {
        self.sprite_size
    }

    /// Source rectangle of `quadrant` on the sheet.
    pub fn rect(&self, quadrant: Quadrant) -> Rect {
        let (col, row) = quadrant.cell();
        let size = self.sprite_size;
        Rect::new((col * size) as i32, (row * size) as i32, size, size)
    }

    /// Every quadrant with its clip region, in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = (Quadrant, Rect)> + '_ {
        Quadrant::ALL.iter().map(move |&q| (q, self.rect(q)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_clip_regions() {
        let clips = ClipTable::default();
        assert_eq!(clips.rect(Quadrant::TopLeft), Rect::new(0, 0, 75, 75));
        assert_eq!(clips.rect(Quadrant::TopRight), Rect::new(75, 0, 75, 75));
        assert_eq!(clips.rect(Quadrant::BottomLeft), Rect::new(0, 75, 75, 75));
        assert_eq!(clips.rect(Quadrant::BottomRight), Rect::new(75, 75, 75, 75));
    }

    #[test]
    fn test_regions_partition_the_sheet() {
        let clips = ClipTable::default();
        let sheet = Rect::sized(150, 150);
        let total: u64 = clips.iter().map(|(_, r)| r.area()).sum();
        assert_eq!(total, sheet.area());
        for (_, r) in clips.iter() {
            assert!(sheet.contains_rect(r));
        }
    }

    #[test]
    fn test_screen_offsets_fit_the_screen() {
        let screen = Rect::sized(crate::config::SCREEN_WIDTH, crate::config::SCREEN_HEIGHT);
        for q in Quadrant::ALL {
            let (x, y) = q.screen_offset();
            assert!(screen.contains_rect(Rect::new(x, y, SPRITE_SIZE, SPRITE_SIZE)));
        }
    }
}
