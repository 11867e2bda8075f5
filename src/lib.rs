mod codec;
mod drect;
mod error;
mod options;
mod point;
mod rect;
mod scaling;
mod text;

pub use codec::{read_binary, write_binary, ENCODED_LEN};
pub use drect::{area, center, centered_drect, dcenter, intersect, translate_rect, DRect};
pub use error::{Error, Result};
pub use options::FormatOptions;
pub use point::DPoint;
pub use rect::Rect;
pub use text::DisplayWith;
