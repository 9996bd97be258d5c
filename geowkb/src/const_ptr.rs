//! Read-only cursor for WKB produced by anyone, on any machine.

use geowkb_types::{Dimensions, Point2d, Projection, WkbType};

use crate::byte_order::ByteOrder;
use crate::error::{Result, WkbError};
use crate::options::WkbReadOptions;
use crate::scalar::{self, WkbScalar};

/// Size of the byte-order marker plus the geometry type code.
pub const HEADER_SIZE: usize = 5;

const COUNT_SIZE: usize = 4;

/// Bounds-checked read-only cursor that corrects the byte order of the values it reads.
///
/// The byte order is taken from the marker read by [`ConstWkbPtr::read_header`]. Until the first header is read the
/// cursor assumes native byte order. Every header read (including the headers of sub-geometries) sets the byte
/// order for the values that follow it.
///
/// ```
/// use geowkb::ConstWkbPtr;
/// use geowkb_types::{GeometryKind, Point2d};
///
/// let mut wkb = vec![0u8];
/// wkb.extend_from_slice(&1u32.to_be_bytes());
/// wkb.extend_from_slice(&1.5f64.to_be_bytes());
/// wkb.extend_from_slice(&(-2.25f64).to_be_bytes());
///
/// let mut ptr = ConstWkbPtr::new(&wkb);
/// assert_eq!(ptr.read_header()?.kind, GeometryKind::Point);
/// assert_eq!(ptr.read_point()?, Point2d::new(1.5, -2.25));
/// assert_eq!(ptr.remaining(), 0);
/// # Ok::<(), geowkb::WkbError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConstWkbPtr<'a> {
    buf: &'a [u8],
    pos: usize,
    byte_order: ByteOrder,
    options: WkbReadOptions,
}

impl<'a> ConstWkbPtr<'a> {
    /// Creates a cursor at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            byte_order: ByteOrder::native(),
            options: WkbReadOptions::default(),
        }
    }

    /// Creates a cursor over the first `len` bytes of `buf`.
    pub fn with_len(buf: &'a [u8], len: usize) -> Result<Self> {
        let bounded = buf.get(..len).ok_or(WkbError::Bounds {
            requested: len,
            remaining: buf.len(),
        })?;
        Ok(Self::new(bounded))
    }

    /// Replaces reader options.
    pub fn with_options(mut self, options: WkbReadOptions) -> Self {
        self.options = options;
        self
    }

    /// Reader options.
    pub fn options(&self) -> &WkbReadOptions {
        &self.options
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

    /// Reads the byte-order marker and the geometry type.
    ///
    /// Must be called before any values of the geometry are read, since it sets the byte order for them. Fails
    /// without moving the cursor if fewer than 5 bytes remain.
    pub fn read_header(&mut self) -> Result<WkbType> {
        self.verify_bound(HEADER_SIZE)?;

        let byte_order = ByteOrder::from_marker(self.buf[self.pos])?;
        let code: u32 = scalar::decode(&self.buf[self.pos + 1..], byte_order.needs_swap());
        let wkb_type = WkbType::from_code(code)?;

        self.byte_order = byte_order;
        self.pos += HEADER_SIZE;

        log::trace!(
            "Read WKB header at {}: {wkb_type}, {byte_order:?}",
            self.pos - HEADER_SIZE
        );

        Ok(wkb_type)
    }

    /// Reads a value, swapping its bytes if the buffer byte order differs from the native one.
    pub fn read<T: WkbScalar>(&mut self) -> Result<T> {
        self.verify_bound(T::WIRE_SIZE)?;
        let value = scalar::decode(&self.buf[self.pos..], self.needs_swap());
        self.pos += T::WIRE_SIZE;
        Ok(value)
    }

    /// Reads `x` and `y` of a 2d point. Nothing is consumed if the buffer holds less than a whole point.
    pub fn read_point(&mut self) -> Result<Point2d> {
        self.read_point_of(Dimensions::Xy)
    }

    /// Reads a point with the given dimensions. Ordinates beyond `x` and `y` are skipped.
    ///
    /// The whole point is bounds checked before the first ordinate is read, so a failed read leaves
    /// the cursor in place.
    pub fn read_point_of(&mut self, dimensions: Dimensions) -> Result<Point2d> {
        self.verify_bound(dimensions.ordinates() * f64::WIRE_SIZE)?;

        let x = self.read::<f64>()?;
        let y = self.read::<f64>()?;
        self.advance((dimensions.ordinates() - 2) * f64::WIRE_SIZE)?;
        Ok(Point2d::new(x, y))
    }

    /// Reads a count field for items taking at least `min_item_size` bytes each.
    ///
    /// With [`WkbReadOptions::reject_oversized_counts`] enabled, a count that cannot fit into the rest of the buffer
    /// fails right away.
    pub fn read_count(&mut self, min_item_size: usize) -> Result<usize> {
        let count = self.read::<u32>()? as usize;

        if self.options.reject_oversized_counts {
            let requested = count.saturating_mul(min_item_size);
            let remaining = self.remaining();
            if requested > remaining {
                log::debug!(
                    "Rejecting WKB count {count} at {}: {requested} > {remaining} bytes",
                    self.pos - COUNT_SIZE
                );
                return Err(WkbError::Bounds {
                    requested,
                    remaining,
                });
            }
        }

        Ok(count)
    }

    /// Reads a point count followed by that many 2d points.
    pub fn read_points(&mut self) -> Result<Vec<Point2d>> {
        self.read_point_sequence(Dimensions::Xy, Ok)
    }

    /// Reads a point count followed by that many 2d points, converting every point with `transform`.
    pub fn read_points_with<P, F>(&mut self, mut transform: F) -> Result<Vec<P>>
    where
        F: FnMut(Point2d) -> P,
    {
        self.read_point_sequence(Dimensions::Xy, |p| Ok(transform(p)))
    }

    /// Reads a point count followed by that many 2d points, projecting every point.
    pub fn read_points_projected<Proj>(&mut self, projection: &Proj) -> Result<Vec<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = Point2d> + ?Sized,
    {
        self.read_point_sequence(Dimensions::Xy, |p| {
            projection
                .project(&p)
                .ok_or_else(|| WkbError::Projection { x: p.x(), y: p.y() })
        })
    }

    /// Reads a point count followed by that many points with the given dimensions, passing every point through
    /// `sink`.
    ///
    /// The result is never allocated larger than the rest of the buffer can fill, so a corrupt count cannot cause an
    /// unbounded allocation: reading stops with a bounds error at the first point that does not fit.
    pub fn read_point_sequence<P, F>(
        &mut self,
        dimensions: Dimensions,
        mut sink: F,
    ) -> Result<Vec<P>>
    where
        F: FnMut(Point2d) -> Result<P>,
    {
        let point_size = dimensions.ordinates() * f64::WIRE_SIZE;
        let count = self.read_count(point_size)?;

        let mut points = Vec::with_capacity(count.min(self.remaining() / point_size));
        for _ in 0..count {
            let point = self.read_point_of(dimensions)?;
            points.push(sink(point)?);
        }

        Ok(points)
    }

    /// Skips `n` bytes.
    pub fn advance(&mut self, n: usize) -> Result<()> {
        self.verify_bound(n)?;
        self.pos += n;
        Ok(())
    }

    /// Moves the cursor `n` bytes back, e.g. to read a header again.
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

    /// Number of bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes from the cursor to the end of the buffer.
    pub fn remaining_bytes(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Byte order of the last header read.
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Whether values are byte-swapped on read.
    pub fn needs_swap(&self) -> bool {
        self.byte_order.needs_swap()
    }
}
