//! Byte encoding of the count-prefixed GPU lists.
//!
//! Layouts (native endianness, as uploaded with `queue.write_buffer`):
//! - window list: `i32` count, 12 bytes padding, then 64-byte [`WindowRecord`]s
//! - order list: `i32` count, then tightly packed `i32` indices
//! - per-draw: one [`PerDrawConstants`] every [`PER_DRAW_STRIDE`] bytes, addressed
//!   with dynamic uniform offsets
//!
//! The shader indexes these arrays by integer offset with no bounds metadata beyond
//! the count, so decoding is strict about counts matching payloads.

use std::mem::size_of;

use crate::error::{BufferKind, CompositeError, Result};
use crate::scene::{OrderList, WindowList};

use super::constants::{PerDrawConstants, WindowRecord};

/// Bytes before the first window record. The array is aligned to 16.
pub const WINDOW_LIST_HEADER_SIZE: usize = 16;

/// Bytes before the first ordered index.
pub const ORDER_LIST_HEADER_SIZE: usize = 4;

/// Distance between per-draw records. Matches wgpu's default
/// `min_uniform_buffer_offset_alignment`.
pub const PER_DRAW_STRIDE: usize = 256;

fn read_count(bytes: &[u8], buffer: BufferKind) -> Result<i32> {
    let Some(head) = bytes.get(..size_of::<i32>()) else {
        return Err(CompositeError::TruncatedBuffer {
            buffer,
            needed: size_of::<i32>(),
            got: bytes.len(),
        });
    };
    let count: i32 = bytemuck::pod_read_unaligned(head);
    if count < 0 {
        return Err(CompositeError::NegativeCount { buffer, count });
    }
    Ok(count)
}

/// Splits `payload` into `count` records of `stride` bytes.
///
/// A payload holding a different whole number of records is a count mismatch; a
/// payload cut mid-record is truncated.
fn check_payload(
    payload: &[u8],
    count: i32,
    stride: usize,
    header: usize,
    buffer: BufferKind,
) -> Result<()> {
    let needed = count as usize * stride;
    if payload.len() == needed {
        return Ok(());
    }
    if payload.len() % stride == 0 {
        return Err(CompositeError::CountMismatch {
            buffer,
            declared: count as i64,
            actual: payload.len() / stride,
        });
    }
    Err(CompositeError::TruncatedBuffer {
        buffer,
        needed: header + needed,
        got: header + payload.len(),
    })
}

// ── window list ───────────────────────────────────────────────────────────

pub fn encode_window_list(list: &WindowList) -> Vec<u8> {
    let mut out = Vec::with_capacity(
        WINDOW_LIST_HEADER_SIZE + list.windows().len() * size_of::<WindowRecord>(),
    );

    let header: [i32; 4] = [list.total_window_count() as i32, 0, 0, 0];
    out.extend_from_slice(bytemuck::bytes_of(&header));
    for w in list.windows() {
        out.extend_from_slice(bytemuck::bytes_of(&WindowRecord::from(w)));
    }
    out
}

pub fn decode_window_list(bytes: &[u8]) -> Result<WindowList> {
    let count = read_count(bytes, BufferKind::WindowList)?;
    if bytes.len() < WINDOW_LIST_HEADER_SIZE {
        return Err(CompositeError::TruncatedBuffer {
            buffer: BufferKind::WindowList,
            needed: WINDOW_LIST_HEADER_SIZE,
            got: bytes.len(),
        });
    }

    let payload = &bytes[WINDOW_LIST_HEADER_SIZE..];
    let stride = size_of::<WindowRecord>();
    check_payload(
        payload,
        count,
        stride,
        WINDOW_LIST_HEADER_SIZE,
        BufferKind::WindowList,
    )?;

    payload
        .chunks_exact(stride)
        .map(|chunk| bytemuck::pod_read_unaligned::<WindowRecord>(chunk).to_window())
        .collect()
}

// ── order list ────────────────────────────────────────────────────────────

pub fn encode_order_list(order: &OrderList) -> Vec<u8> {
    let mut out =
        Vec::with_capacity(ORDER_LIST_HEADER_SIZE + order.ordered_windows().len() * 4);
    out.extend_from_slice(&(order.window_count() as i32).to_ne_bytes());
    for &i in order.ordered_windows() {
        out.extend_from_slice(&(i as i32).to_ne_bytes());
    }
    out
}

pub fn decode_order_list(bytes: &[u8]) -> Result<OrderList> {
    let count = read_count(bytes, BufferKind::OrderList)?;
    let payload = &bytes[ORDER_LIST_HEADER_SIZE..];
    check_payload(
        payload,
        count,
        size_of::<i32>(),
        ORDER_LIST_HEADER_SIZE,
        BufferKind::OrderList,
    )?;

    let indices: Vec<i32> = payload
        .chunks_exact(size_of::<i32>())
        .map(bytemuck::pod_read_unaligned::<i32>)
        .collect();
    OrderList::from_parts(count, &indices)
}

// ── per-draw ──────────────────────────────────────────────────────────────

/// Dynamic uniform offset of the `draw`-th per-draw record.
#[inline]
pub fn per_draw_offset(draw: usize) -> u32 {
    (draw * PER_DRAW_STRIDE) as u32
}

/// Packs per-draw records at [`PER_DRAW_STRIDE`], zero-filling the gaps.
pub fn encode_per_draw(draws: &[PerDrawConstants]) -> Vec<u8> {
    let mut out = vec![0u8; draws.len() * PER_DRAW_STRIDE];
    for (i, d) in draws.iter().enumerate() {
        let at = i * PER_DRAW_STRIDE;
        out[at..at + size_of::<PerDrawConstants>()].copy_from_slice(bytemuck::bytes_of(d));
    }
    out
}

/// Reads the `draw`-th record back out of a buffer built by [`encode_per_draw`].
pub fn read_per_draw(bytes: &[u8], draw: usize) -> Result<PerDrawConstants> {
    let at = draw * PER_DRAW_STRIDE;
    let end = at + size_of::<PerDrawConstants>();
    bytes
        .get(at..end)
        .map(bytemuck::pod_read_unaligned)
        .ok_or(CompositeError::TruncatedBuffer {
            buffer: BufferKind::PerDraw,
            needed: end,
            got: bytes.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ColorRgba, Rect, Viewport};
    use crate::render::Depth;
    use crate::scene::{ImageId, Window};

    fn sample_list() -> WindowList {
        [
            Window::image(ImageId(4), Rect::new(0, 0, 640, 480)),
            Window::color(ColorRgba::black(), Rect::new(10, 10, 20, 20))
                .with_opaque(Rect::new(10, 10, 20, 20)),
        ]
        .into_iter()
        .collect()
    }

    fn i32_at(bytes: &[u8], at: usize) -> i32 {
        bytemuck::pod_read_unaligned(&bytes[at..at + 4])
    }

    // ── window list ───────────────────────────────────────────────────────

    #[test]
    fn window_list_is_count_prefixed() {
        let bytes = encode_window_list(&sample_list());
        assert_eq!(bytes.len(), WINDOW_LIST_HEADER_SIZE + 2 * 64);
        assert_eq!(i32_at(&bytes, 0), 2);
        // First record's id, then the second record's dims.x.
        assert_eq!(i32_at(&bytes, 16), 4);
        assert_eq!(i32_at(&bytes, 16 + 64 + 32), 10);
        assert_eq!(decode_window_list(&bytes).unwrap(), sample_list());
    }

    #[test]
    fn window_list_count_mismatch() {
        let mut bytes = encode_window_list(&sample_list());
        bytes[..4].copy_from_slice(&3i32.to_ne_bytes());
        assert_eq!(
            decode_window_list(&bytes),
            Err(CompositeError::CountMismatch {
                buffer: BufferKind::WindowList,
                declared: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn window_list_truncated() {
        let bytes = encode_window_list(&sample_list());
        assert!(matches!(
            decode_window_list(&bytes[..bytes.len() - 8]),
            Err(CompositeError::TruncatedBuffer { .. })
        ));
        assert!(matches!(
            decode_window_list(&bytes[..2]),
            Err(CompositeError::TruncatedBuffer { needed: 4, got: 2, .. })
        ));
    }

    // ── order list ────────────────────────────────────────────────────────

    #[test]
    fn order_list_is_count_prefixed() {
        let mut order = OrderList::new();
        order.push(1);
        order.push(0);

        let bytes = encode_order_list(&order);
        assert_eq!(bytes.len(), 12);
        assert_eq!(i32_at(&bytes, 0), 2);
        assert_eq!(i32_at(&bytes, 4), 1);
        assert_eq!(decode_order_list(&bytes).unwrap(), order);
    }

    #[test]
    fn order_list_negative_count() {
        let bytes = (-2i32).to_ne_bytes();
        assert!(matches!(
            decode_order_list(&bytes),
            Err(CompositeError::NegativeCount { count: -2, .. })
        ));
    }

    // ── per-draw ──────────────────────────────────────────────────────────

    #[test]
    fn per_draw_records_sit_on_stride() {
        let vp = Viewport::new(0, 0, 800, 600);
        let draws: Vec<PerDrawConstants> = sample_list()
            .windows()
            .iter()
            .enumerate()
            .map(|(i, w)| PerDrawConstants::new(w, &vp, Depth::from_slot(i as u32)))
            .collect();

        let bytes = encode_per_draw(&draws);
        assert_eq!(bytes.len(), 2 * PER_DRAW_STRIDE);
        assert_eq!(per_draw_offset(1), 256);
        assert_eq!(read_per_draw(&bytes, 1).unwrap(), draws[1]);
        assert!(read_per_draw(&bytes, 2).is_err());
    }
}
