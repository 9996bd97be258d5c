//! Read/write cursor over a caller-owned WKB buffer.

use geowkb_types::WkbType;

use crate::error::{Result, WkbError};
use crate::scalar::WkbScalar;

/// Bounds-checked cursor that reads and writes values in native byte order.
///
/// The cursor borrows the buffer and never resizes it: the caller allocates the exact number of bytes before
/// encoding. Every operation checks that it fits into the buffer before touching it, and a failed operation leaves
/// the cursor position unchanged.
///
/// ```
/// use geowkb::WkbPtr;
///
/// let mut buf = [0u8; 21];
/// let mut ptr = WkbPtr::new(&mut buf);
/// ptr.write(1u8)?;
/// ptr.write(1u32)?;
/// ptr.write(10.0f64)?;
/// ptr.write(20.0f64)?;
/// assert_eq!(ptr.written_size(), 21);
/// assert!(ptr.write(0u8).is_err());
/// # Ok::<(), geowkb::WkbError>(())
/// ```
#[derive(Debug)]
pub struct WkbPtr<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> WkbPtr<'a> {
    /// Creates a cursor at the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn verify_bound(&self, size: usize) -> Result<()> {
        let remaining = self.remaining();
        if size > remaining {
            return Err(WkbError::Bounds {
                requested: size,
                remaining,
            });
        }

        Ok(())
    }

    /// Reads a value and advances past it.
    pub fn read<T: WkbScalar>(&mut self) -> Result<T> {
        self.verify_bound(T::WIRE_SIZE)?;
        let value = T::from_wire(&self.buf[self.pos..self.pos + T::WIRE_SIZE]);
        self.pos += T::WIRE_SIZE;
        Ok(value)
    }

    /// Writes a value and advances past it.
    pub fn write<T: WkbScalar>(&mut self, value: T) -> Result<()> {
        self.verify_bound(T::WIRE_SIZE)?;
        value.to_wire(&mut self.buf[self.pos..self.pos + T::WIRE_SIZE]);
        self.pos += T::WIRE_SIZE;
        Ok(())
    }

    /// Copies a block of bytes, e.g. a fully encoded sub-geometry, into the buffer.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.verify_bound(data.len())?;
        self.buf[self.pos..self.pos + data.len()].copy_from_slice(data);
        self.pos += data.len();
        Ok(())
    }

    /// Reads a geometry type code.
    ///
    /// The position is only advanced when the code is valid.
    pub fn read_wkb_type(&mut self) -> Result<WkbType> {
        let start = self.pos;
        let code = self.read::<u32>()?;
        WkbType::from_code(code).map_err(|err| {
            self.pos = start;
            err.into()
        })
    }

    /// Writes the ISO code of a geometry type.
    pub fn write_wkb_type(&mut self, wkb_type: WkbType) -> Result<()> {
        self.write(wkb_type.code())
    }

    /// Skips `n` bytes.
    pub fn advance(&mut self, n: usize) -> Result<()> {
        self.verify_bound(n)?;
        self.pos += n;
        Ok(())
    }

    /// Moves the cursor `n` bytes back, e.g. to patch a count written before its value was known.
    pub fn rewind(&mut self, n: usize) -> Result<()> {
        if n > self.pos {
            return Err(WkbError::Bounds {
                requested: n,
                remaining: self.pos,
            });
        }

        self.pos -= n;
        Ok(())
    }

    /// Total size of the buffer.
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// Number of bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Number of bytes between the start of the buffer and the cursor.
    pub fn written_size(&self) -> usize {
        self.pos
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes from the cursor to the end of the buffer.
    pub fn remaining_bytes(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    /// Mutable view of the bytes from the cursor to the end of the buffer.
    pub fn remaining_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buf[self.pos..]
    }
}
