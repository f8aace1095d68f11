use core::cmp::Ordering;
use core::ops::Range;

use crate::error::{CompositeError, Result};

/// Depth step between two consecutive windows.
///
/// Must match `DEPTH_EPSILON` in `shaders/surface.wgsl`.
pub const DEPTH_EPSILON: f32 = 1e-7;

/// Number of distinguishable depth slots before depths leave the `[0, 1]` range.
///
/// This is a hard numeric ceiling of the depth scheme. Past it, depths keep
/// increasing but the depth test clips them. Widen `DEPTH_EPSILON` spacing or move
/// to a wider depth format if a frame needs more windows.
pub const DEPTH_SLOT_CAPACITY: u32 = 10_000_000;

/// Clip-space depth of one quad. Lower values are drawn further back.
///
/// Ordered with `f32::total_cmp`, so it can be used as a sort key.
#[derive(Debug, Copy, Clone, Default)]
pub struct Depth(pub f32);

impl Depth {
    /// Depth of the `slot`-th window.
    ///
    /// Computed from the integer slot, never accumulated, so repeated draws cannot
    /// drift or collide.
    #[inline]
    pub fn from_slot(slot: u32) -> Self {
        Self(slot as f32 * DEPTH_EPSILON)
    }

    #[inline]
    pub const fn get(self) -> f32 {
        self.0
    }
}

impl PartialEq for Depth {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Depth {}

impl Ord for Depth {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Depth {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Bulk-path depth: `window_index * DEPTH_EPSILON`.
#[inline]
pub fn bulk_depth(window_index: u32) -> Depth {
    Depth::from_slot(window_index)
}

/// Frame-scoped running depth counter for single-window draws.
///
/// Lifecycle: `reset()` at frame start, `next_depth()` / `reserve()` while recording,
/// dropped or reset at frame end. A list submitted after another always starts
/// past every slot the earlier list used.
#[derive(Debug, Clone)]
pub struct DepthCounter {
    baseline: u32,
    next: u32,
    limit: u32,
    warned: bool,
}

impl DepthCounter {
    pub fn new(baseline: u32, limit: u32) -> Self {
        Self {
            baseline,
            next: baseline,
            limit,
            warned: false,
        }
    }

    /// Returns to the baseline slot. Call at the start of every frame.
    pub fn reset(&mut self) {
        self.next = self.baseline;
        self.warned = false;
    }

    /// Slot the next window will receive.
    #[inline]
    pub fn current_slot(&self) -> u32 {
        self.next
    }

    /// Depth the next window will receive.
    #[inline]
    pub fn current(&self) -> Depth {
        Depth::from_slot(self.next)
    }

    #[inline]
    pub fn baseline(&self) -> u32 {
        self.baseline
    }

    /// Hands out one slot and returns its depth.
    pub fn next_depth(&mut self) -> Result<Depth> {
        let slots = self.reserve(1)?;
        Ok(Depth::from_slot(slots.start))
    }

    /// Hands out `count` contiguous slots, e.g. for one draw list.
    ///
    /// Fails without handing anything out if the range would wrap the slot space.
    pub fn reserve(&mut self, count: u32) -> Result<Range<u32>> {
        let start = self.next;
        let end = start
            .checked_add(count)
            .ok_or(CompositeError::DepthRangeOverflow {
                requested: u64::from(count),
                next: start,
            })?;
        self.next = end;
        self.check_limit();
        Ok(start..end)
    }

    /// Moves the counter past `slot` if it is not already there.
    ///
    /// Used when a bulk submission has claimed `[0, slot)` implicitly.
    pub fn advance_to(&mut self, slot: u32) {
        self.next = self.next.max(slot);
        self.check_limit();
    }

    /// True once more slots were handed out than the configured limit.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.next > self.limit
    }

    fn check_limit(&mut self) {
        if self.is_exhausted() && !self.warned {
            log::warn!(
                "depth slots exhausted: {} issued, limit {}; later windows may z-fight or clip",
                self.next,
                self.limit
            );
            self.warned = true;
        }
    }
}

impl Default for DepthCounter {
    fn default() -> Self {
        Self::new(0, DEPTH_SLOT_CAPACITY)
    }
}
