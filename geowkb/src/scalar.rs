//! Fixed-width values that can be read from and written to a WKB buffer.

/// Largest wire size of a scalar.
pub(crate) const MAX_WIRE_SIZE: usize = 8;

/// Value stored in a WKB buffer as a fixed number of bytes.
///
/// Conversions always use the native byte order of the running machine. Byte-order correction is done by the
/// cursors on the raw bytes before [`WkbScalar::from_wire`] is called.
pub trait WkbScalar: Copy {
    /// Number of bytes the value takes in the buffer. Never larger than 8.
    const WIRE_SIZE: usize;

    /// Decodes the value from exactly `WIRE_SIZE` bytes.
    fn from_wire(bytes: &[u8]) -> Self;

    /// Encodes the value into exactly `WIRE_SIZE` bytes.
    fn to_wire(self, out: &mut [u8]);
}

macro_rules! impl_scalar {
    ($($t:ty),*) => {
        $(
            impl WkbScalar for $t {
                const WIRE_SIZE: usize = std::mem::size_of::<$t>();

                fn from_wire(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_ne_bytes(buf)
                }

                fn to_wire(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_ne_bytes());
                }
            }
        )*
    };
}

impl_scalar!(i8, u8, i16, u16, i32, u32, i64, u64, f64);

/// Single precision values are stored as doubles.
impl WkbScalar for f32 {
    const WIRE_SIZE: usize = f64::WIRE_SIZE;

    fn from_wire(bytes: &[u8]) -> Self {
        f64::from_wire(bytes) as f32
    }

    fn to_wire(self, out: &mut [u8]) {
        f64::from(self).to_wire(out)
    }
}

/// Copies `WIRE_SIZE` bytes from `src`, reversing them if `swap` is set, and decodes the value.
pub(crate) fn decode<T: WkbScalar>(src: &[u8], swap: bool) -> T {
    let mut buf = [0u8; MAX_WIRE_SIZE];
    let raw = &mut buf[..T::WIRE_SIZE];
    raw.copy_from_slice(&src[..T::WIRE_SIZE]);
    if swap {
        raw.reverse();
    }

    T::from_wire(raw)
}
