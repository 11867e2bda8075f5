use std::ops::{Add, Mul, Neg, Sub};

/// A point (or offset) with `f64` coordinates. Y grows downward.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DPoint {
    pub x: f64,
    pub y: f64,
}

impl DPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for DPoint {
    type Output = DPoint;

    fn add(self, rhs: DPoint) -> DPoint {
        DPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for DPoint {
    type Output = DPoint;

    fn sub(self, rhs: DPoint) -> DPoint {
        DPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for DPoint {
    type Output = DPoint;

    fn mul(self, rhs: f64) -> DPoint {
        DPoint::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for DPoint {
    type Output = DPoint;

    fn neg(self) -> DPoint {
        DPoint::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for DPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
