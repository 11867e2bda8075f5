//! Binary form: the four bounds in `left, top, right, bottom` order, each as
//! the little-endian bit pattern of its `f64`.

use std::io::{Read, Write};

use crate::{DRect, Error, Result};

pub const ENCODED_LEN: usize = 32;

impl DRect {
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        let words = [
            self.left.to_bits().to_le(),
            self.top.to_bits().to_le(),
            self.right.to_bits().to_le(),
            self.bottom.to_bits().to_le(),
        ];
        bytemuck::cast(words)
    }

    /// Decodes exactly [`ENCODED_LEN`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<DRect> {
        if bytes.len() < ENCODED_LEN {
            log::debug!("rectangle encoding truncated at {} bytes", bytes.len());
            return Err(Error::Truncated {
                expected: ENCODED_LEN,
                actual: bytes.len(),
            });
        }
        if bytes.len() > ENCODED_LEN {
            log::debug!("rectangle encoding has {} extra bytes", bytes.len() - ENCODED_LEN);
            return Err(Error::TrailingBytes(bytes.len() - ENCODED_LEN));
        }
        let words: [u64; 4] = bytemuck::pod_read_unaligned(bytes);
        let [left, top, right, bottom] = words.map(|w| f64::from_bits(u64::from_le(w)));
        Ok(DRect::new(left, top, right, bottom))
    }
}

pub fn write_binary<W: Write>(rect: &DRect, out: &mut W) -> Result<()> {
    out.write_all(&rect.to_bytes())?;
    Ok(())
}

/// Reads one rectangle, consuming exactly [`ENCODED_LEN`] bytes on success.
pub fn read_binary<R: Read>(input: &mut R) -> Result<DRect> {
    let mut buf = Vec::with_capacity(ENCODED_LEN);
    input.by_ref().take(ENCODED_LEN as u64).read_to_end(&mut buf)?;
    let rect = DRect::from_bytes(&buf)?;
    log::trace!("read rectangle {rect}");
    Ok(rect)
}
