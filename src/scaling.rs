use std::ops::{Div, DivAssign, Mul, MulAssign};

use crate::{DRect, Error, Result};

impl DRect {
    /// Returns a rectangle with the same center whose width and height are
    /// multiplied by `scale`. Empty rectangles are returned unchanged.
    pub fn scaled_by(self, scale: f64) -> DRect {
        if self.is_empty() {
            return self;
        }
        let width = (self.right - self.left) * scale;
        let height = (self.bottom - self.top) * scale;
        let c = self.center();
        DRect {
            left: c.x - width / 2.0,
            top: c.y - height / 2.0,
            right: c.x + width / 2.0,
            bottom: c.y + height / 2.0,
        }
    }

    /// Checked form of `self / scale`.
    pub fn try_scaled_down(self, scale: f64) -> Result<DRect> {
        if scale == 0.0 {
            log::debug!("rejecting zero scale factor for {:?}", self);
            return Err(Error::ZeroScale);
        }
        Ok(self.scaled_by(1.0 / scale))
    }
}

impl Mul<f64> for DRect {
    type Output = DRect;

    fn mul(self, scale: f64) -> DRect {
        self.scaled_by(scale)
    }
}

impl Mul<DRect> for f64 {
    type Output = DRect;

    fn mul(self, rect: DRect) -> DRect {
        rect.scaled_by(self)
    }
}

impl Div<f64> for DRect {
    type Output = DRect;

    /// `scale` must be non-zero.
    fn div(self, scale: f64) -> DRect {
        debug_assert!(scale != 0.0, "DRect divided by a zero scale factor");
        self.scaled_by(1.0 / scale)
    }
}

impl MulAssign<f64> for DRect {
    fn mul_assign(&mut self, scale: f64) {
        *self = self.scaled_by(scale);
    }
}

impl DivAssign<f64> for DRect {
    fn div_assign(&mut self, scale: f64) {
        *self = *self / scale;
    }
}
