use std::ops::{Add, AddAssign};

use crate::{DPoint, Rect};

/// Axis-aligned rectangle with `f64` bounds.
///
/// The origin is the upper left corner and y grows downward, so the region
/// spans from `(left, top)` to `(right, bottom)`. Nothing is enforced on
/// construction: a rectangle with `left > right` or `top > bottom` is simply
/// empty.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for DRect {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            right: -1.0,
            bottom: -1.0,
        }
    }
}

impl DRect {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Degenerate rectangle covering exactly `p`.
    pub const fn from_point(p: DPoint) -> Self {
        Self::new(p.x, p.y, p.x, p.y)
    }

    /// Smallest rectangle containing both points.
    pub fn from_points(p1: DPoint, p2: DPoint) -> Self {
        Self::from_point(p1).union(Self::from_point(p2))
    }

    /// Rectangle centered on `p`. A zero `width` or `height` collapses the
    /// result to the point itself.
    pub fn centered(p: DPoint, width: f64, height: f64) -> Self {
        if width == 0.0 || height == 0.0 {
            return Self::from_point(p);
        }
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Self::new(p.x - half_w, p.y - half_h, p.x + half_w, p.y + half_h)
    }

    /// Rounds every bound to the nearest integer (halves away from zero).
    /// Values outside the `i32` range saturate.
    pub fn to_rect(self) -> Rect {
        Rect {
            left: self.left.round() as i32,
            top: self.top.round() as i32,
            right: self.right.round() as i32,
            bottom: self.bottom.round() as i32,
        }
    }

    pub fn tl_corner(&self) -> DPoint {
        DPoint::new(self.left, self.top)
    }

    pub fn tr_corner(&self) -> DPoint {
        DPoint::new(self.right, self.top)
    }

    pub fn bl_corner(&self) -> DPoint {
        DPoint::new(self.left, self.bottom)
    }

    pub fn br_corner(&self) -> DPoint {
        DPoint::new(self.right, self.bottom)
    }

    pub fn is_empty(&self) -> bool {
        self.top > self.bottom || self.left > self.right
    }

    /// `right - left`, or 0 for an empty rectangle.
    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.right - self.left
        }
    }

    /// `bottom - top`, or 0 for an empty rectangle.
    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.bottom - self.top
        }
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn center(&self) -> DPoint {
        DPoint::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Smallest rectangle containing both operands. Empty operands do not
    /// contribute; if `other` is empty `self` comes back unchanged.
    pub fn union(self, other: DRect) -> DRect {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other;
        }
        DRect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    pub fn union_point(self, p: DPoint) -> DRect {
        self.union(DRect::from_point(p))
    }

    /// Overlapping region, or the canonical empty rectangle when there is none.
    pub fn intersect(&self, other: &DRect) -> DRect {
        let rect = DRect {
            left: self.left.max(other.left),
            top: self.top.max(other.top),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        };
        if rect.is_empty() {
            DRect::default()
        } else {
            rect
        }
    }

    /// Inclusive on every edge.
    pub fn contains_point(&self, p: DPoint) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// True when adding `rect` to `self` leaves `self` unchanged. Every
    /// rectangle contains itself and every empty rectangle.
    pub fn contains(&self, rect: &DRect) -> bool {
        rect.union(*self) == *self
    }

    /// Shifts both corners by `offset`.
    pub fn translated_by(self, offset: DPoint) -> DRect {
        DRect {
            left: self.left + offset.x,
            top: self.top + offset.y,
            right: self.right + offset.x,
            bottom: self.bottom + offset.y,
        }
    }

    /// True when every bound is within `epsilon` of the matching bound of `other`.
    pub fn approx_eq(&self, other: &DRect, epsilon: f64) -> bool {
        (self.left - other.left).abs() <= epsilon
            && (self.top - other.top).abs() <= epsilon
            && (self.right - other.right).abs() <= epsilon
            && (self.bottom - other.bottom).abs() <= epsilon
    }
}

impl From<Rect> for DRect {
    fn from(rect: Rect) -> Self {
        Self {
            left: f64::from(rect.left),
            top: f64::from(rect.top),
            right: f64::from(rect.right),
            bottom: f64::from(rect.bottom),
        }
    }
}

impl Add for DRect {
    type Output = DRect;

    fn add(self, rhs: DRect) -> DRect {
        self.union(rhs)
    }
}

impl Add<DPoint> for DRect {
    type Output = DRect;

    fn add(self, rhs: DPoint) -> DRect {
        self.union_point(rhs)
    }
}

impl Add<DRect> for DPoint {
    type Output = DRect;

    fn add(self, rhs: DRect) -> DRect {
        rhs.union_point(self)
    }
}

impl AddAssign for DRect {
    fn add_assign(&mut self, rhs: DRect) {
        *self = self.union(rhs);
    }
}

impl AddAssign<DPoint> for DRect {
    fn add_assign(&mut self, rhs: DPoint) {
        *self = self.union_point(rhs);
    }
}

pub fn center(rect: &DRect) -> DPoint {
    rect.center()
}

/// Same as [`center`].
pub fn dcenter(rect: &DRect) -> DPoint {
    rect.center()
}

pub fn translate_rect(rect: &DRect, offset: DPoint) -> DRect {
    rect.translated_by(offset)
}

pub fn intersect(a: &DRect, b: &DRect) -> DRect {
    a.intersect(b)
}

pub fn area(rect: &DRect) -> f64 {
    rect.area()
}

pub fn centered_drect(p: DPoint, width: f64, height: f64) -> DRect {
    DRect::centered(p, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<DRect> {
        vec![
            DRect::new(0.0, 0.0, 10.0, 10.0),
            DRect::new(-3.5, 2.25, 1.75, 8.0),
            DRect::new(5.0, 5.0, 5.0, 5.0),
            DRect::new(-100.0, -50.0, -20.0, -10.0),
            DRect::new(0.1, 0.2, 0.3, 0.7),
            DRect::default(),
            DRect::new(4.0, 0.0, 2.0, 6.0),
        ]
    }

    #[test]
    fn default_is_canonical_empty() {
        let rect = DRect::default();
        assert_eq!(rect, DRect::new(0.0, 0.0, -1.0, -1.0));
        assert!(rect.is_empty());
        assert_eq!(rect.area(), 0.0);
        assert_eq!(rect.width(), 0.0);
        assert_eq!(rect.height(), 0.0);
    }

    #[test]
    fn point_rectangle_is_not_empty() {
        let rect = DRect::from_point(DPoint::new(1.0, 1.0));
        assert_eq!(rect, DRect::new(1.0, 1.0, 1.0, 1.0));
        assert!(!rect.is_empty());
        assert_eq!(rect.area(), 0.0);
    }

    #[test]
    fn from_points_orders_bounds() {
        let rect = DRect::from_points(DPoint::new(4.0, -1.0), DPoint::new(-2.0, 3.0));
        assert_eq!(rect, DRect::new(-2.0, -1.0, 4.0, 3.0));
    }

    #[test]
    fn corners() {
        let rect = DRect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.tl_corner(), DPoint::new(1.0, 2.0));
        assert_eq!(rect.tr_corner(), DPoint::new(3.0, 2.0));
        assert_eq!(rect.bl_corner(), DPoint::new(1.0, 4.0));
        assert_eq!(rect.br_corner(), DPoint::new(3.0, 4.0));
    }

    #[test]
    fn bounds_are_mutable_in_place() {
        let mut rect = DRect::new(0.0, 0.0, 1.0, 1.0);
        rect.right = 5.0;
        rect.bottom += 2.0;
        assert_eq!(rect.width(), 5.0);
        assert_eq!(rect.height(), 3.0);
    }

    #[test]
    fn area_is_width_times_height() {
        for rect in samples() {
            assert_eq!(rect.area(), rect.width() * rect.height());
            if rect.is_empty() {
                assert_eq!(rect.width(), 0.0);
                assert_eq!(rect.height(), 0.0);
            }
        }
    }

    #[test]
    fn width_of_inverted_rectangle_is_zero() {
        let rect = DRect::new(4.0, 0.0, 2.0, 6.0);
        assert!(rect.is_empty());
        assert_eq!(rect.width(), 0.0);
        assert_eq!(rect.height(), 0.0);
    }

    #[test]
    fn union_of_non_empty() {
        let a = DRect::new(0.0, 0.0, 2.0, 2.0);
        let b = DRect::new(1.0, -1.0, 5.0, 1.5);
        assert_eq!(a + b, DRect::new(0.0, -1.0, 5.0, 2.0));
        assert_eq!(b + a, a + b);
    }

    #[test]
    fn union_with_empty_is_identity() {
        let empty = DRect::default();
        for rect in samples() {
            assert_eq!(rect + empty, rect);
            if !rect.is_empty() {
                assert_eq!(empty + rect, rect);
            }
        }
        let inverted = DRect::new(4.0, 0.0, 2.0, 6.0);
        assert!((inverted + empty).is_empty());
        assert!((empty + inverted).is_empty());
    }

    #[test]
    fn union_with_point_is_symmetric() {
        let rect = DRect::new(0.0, 0.0, 1.0, 1.0);
        let p = DPoint::new(3.0, -2.0);
        assert_eq!(rect + p, DRect::new(0.0, -2.0, 3.0, 1.0));
        assert_eq!(p + rect, rect + p);
        assert_eq!(DRect::default() + p, DRect::from_point(p));
    }

    #[test]
    fn add_assign_variants() {
        let mut rect = DRect::new(0.0, 0.0, 1.0, 1.0);
        rect += DRect::new(2.0, 2.0, 3.0, 3.0);
        assert_eq!(rect, DRect::new(0.0, 0.0, 3.0, 3.0));
        rect += DPoint::new(-1.0, 4.0);
        assert_eq!(rect, DRect::new(-1.0, 0.0, 3.0, 4.0));
    }

    #[test]
    fn intersect_overlapping() {
        let a = DRect::new(0.0, 0.0, 10.0, 10.0);
        let b = DRect::new(5.0, -5.0, 15.0, 5.0);
        assert_eq!(a.intersect(&b), DRect::new(5.0, 0.0, 10.0, 5.0));
        assert_eq!(intersect(&b, &a), a.intersect(&b));
    }

    #[test]
    fn intersect_disjoint_is_canonical_empty() {
        let a = DRect::new(0.0, 0.0, 1.0, 1.0);
        let b = DRect::new(2.0, 2.0, 3.0, 3.0);
        let result = a.intersect(&b);
        assert!(result.is_empty());
        assert_eq!(result, DRect::default());
    }

    #[test]
    fn intersect_touching_edge_is_degenerate() {
        let a = DRect::new(0.0, 0.0, 1.0, 1.0);
        let b = DRect::new(1.0, 0.0, 2.0, 1.0);
        let result = a.intersect(&b);
        assert!(!result.is_empty());
        assert_eq!(result, DRect::new(1.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn contains_point_is_inclusive() {
        let rect = DRect::new(0.0, 0.0, 2.0, 3.0);
        assert!(rect.contains_point(DPoint::new(0.0, 0.0)));
        assert!(rect.contains_point(DPoint::new(2.0, 3.0)));
        assert!(rect.contains_point(DPoint::new(1.0, 1.5)));
        assert!(!rect.contains_point(DPoint::new(2.5, 1.0)));
        assert!(!rect.contains_point(DPoint::new(1.0, -0.1)));
        assert!(!DRect::default().contains_point(DPoint::new(0.0, 0.0)));
    }

    #[test]
    fn contains_matches_union_rule() {
        for a in samples() {
            for b in samples() {
                assert_eq!(a.contains(&b), (b + a) == a, "{a:?} / {b:?}");
            }
        }
    }

    #[test]
    fn contains_rectangles() {
        let outer = DRect::new(0.0, 0.0, 20.0, 20.0);
        let inner = DRect::new(5.0, 5.0, 10.0, 10.0);
        let partial = DRect::new(15.0, 15.0, 25.0, 25.0);
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(!outer.contains(&partial));
        assert!(outer.contains(&outer));
        assert!(outer.contains(&DRect::default()));
    }

    #[test]
    fn translate_keeps_size() {
        let rect = DRect::new(1.0, 2.0, 4.0, 8.0);
        let moved = translate_rect(&rect, DPoint::new(-1.5, 3.0));
        assert_eq!(moved, DRect::new(-0.5, 5.0, 2.5, 11.0));
        assert_eq!(moved.width(), rect.width());
        assert_eq!(moved.height(), rect.height());
    }

    #[test]
    fn center_is_midpoint() {
        let rect = DRect::new(1.0, 2.0, 4.0, 7.0);
        assert_eq!(center(&rect), DPoint::new(2.5, 4.5));
        assert_eq!(dcenter(&rect), center(&rect));
    }

    #[test]
    fn centered_example() {
        let rect = centered_drect(DPoint::new(0.0, 0.0), 4.0, 2.0);
        assert_eq!(rect, DRect::new(-2.0, -1.0, 2.0, 1.0));
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 2.0);
        assert_eq!(rect.center(), DPoint::new(0.0, 0.0));
    }

    #[test]
    fn centered_with_zero_side_collapses_to_point() {
        let p = DPoint::new(3.0, -1.0);
        for rect in [
            DRect::centered(p, 0.0, 5.0),
            DRect::centered(p, 5.0, 0.0),
        ] {
            assert_eq!(rect, DRect::from_point(p));
            assert_eq!(rect.width(), 0.0);
            assert_eq!(rect.height(), 0.0);
        }
    }

    #[test]
    fn integer_conversions() {
        let rect = Rect::new(-3, 1, 7, 9);
        let drect = DRect::from(rect);
        assert_eq!(drect, DRect::new(-3.0, 1.0, 7.0, 9.0));
        assert_eq!(drect.to_rect(), rect);

        let fractional = DRect::new(0.4, 0.5, -1.5, 2.6);
        assert_eq!(fractional.to_rect(), Rect::new(0, 1, -2, 3));
        assert_eq!(DRect::default().to_rect(), Rect::default());
        assert_eq!(area(&DRect::from(Rect::default())), 0.0);
    }

    #[test]
    fn to_rect_saturates_out_of_range() {
        let rect = DRect::new(3e9, -3e9, f64::NAN, 0.5);
        assert_eq!(rect.to_rect(), Rect::new(i32::MAX, i32::MIN, 0, 1));
    }

    #[test]
    fn approx_eq_tolerance() {
        let a = DRect::new(0.0, 0.0, 1.0, 1.0);
        let b = DRect::new(1e-12, 0.0, 1.0, 1.0 - 1e-12);
        assert!(a.approx_eq(&b, 1e-9));
        assert!(!a.approx_eq(&DRect::new(0.1, 0.0, 1.0, 1.0), 1e-9));
    }

    #[test]
    fn bytes_view_matches_bounds() {
        let rects = [DRect::new(1.0, 2.0, 3.0, 4.0)];
        let floats: &[f64] = bytemuck::cast_slice(&rects[..]);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }
}
