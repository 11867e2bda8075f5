/// Integer-coordinate rectangle with inclusive bounds.
///
/// `left > right` or `top > bottom` marks an empty rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Default for Rect {
    fn default() -> Self {
        Self {
            left: 0,
            top: 0,
            right: -1,
            bottom: -1,
        }
    }
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn is_empty(self) -> bool {
        self.top > self.bottom || self.left > self.right
    }
}
