//! Axis-aligned rectangles and the overlap test every collision uses

use glam::Vec2;

/// An axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Non-collidable rects never take part in collision tests
    pub collidable: bool,
}

impl Rect {
    /// Collidable rect
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            collidable: true,
        }
    }

    /// Zero-sized collidable rect at the origin
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    pub fn non_collidable(mut self) -> Self {
        self.collidable = false;
        self
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Move and resize, keeping the collidable flag
    pub fn set(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.x = x;
        self.y = y;
        self.w = w;
        self.h = h;
    }

    /// Geometric overlap on both axes, edges excluded
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Collision test: both collidable and strictly overlapping
    #[inline]
    pub fn collides(&self, other: &Rect) -> bool {
        collides(self, other)
    }
}

/// True iff both rects are collidable and overlap strictly
#[inline]
pub fn collides(a: &Rect, b: &Rect) -> bool {
    a.collidable && b.collidable && a.overlaps(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_rects_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(collides(&a, &b));
        assert!(collides(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!collides(&a, &right));
        assert!(!collides(&a, &below));
    }

    #[test]
    fn test_non_collidable_never_collides() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(2.0, 2.0, 4.0, 4.0).non_collidable();
        assert!(a.overlaps(&b));
        assert!(!collides(&a, &b));
        assert!(!collides(&b, &a));
    }

    #[test]
    fn test_set_keeps_collidable_flag() {
        let mut r = Rect::zero().non_collidable();
        r.set(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.right(), 4.0);
        assert_eq!(r.bottom(), 6.0);
        assert!(!r.collidable);
    }

    #[test]
    fn test_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }
}
