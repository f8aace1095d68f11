use crate::error::{CompositeError, Result};

use super::Window;

/// Frame-scoped list of every window the bulk path may reference.
///
/// Packed on the GPU as a count-prefixed array, so `total_window_count` is always
/// the length of the list. Order lists index into it.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - `clear()` keeps allocated capacity, so steady-state frames do not allocate
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WindowList {
    windows: Vec<Window>,
}

impl WindowList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            windows: Vec::with_capacity(capacity),
        }
    }

    /// Clears recorded windows. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.windows.clear();
    }

    /// Appends a window and returns its index for use in an [`OrderList`](super::OrderList).
    #[inline]
    pub fn push(&mut self, window: Window) -> u32 {
        let index = self.windows.len() as u32;
        debug_assert!(index <= i32::MAX as u32, "window list exceeds i32 indexing");
        self.windows.push(window);
        index
    }

    #[inline]
    pub fn total_window_count(&self) -> u32 {
        self.windows.len() as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    #[inline]
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Bounds-checked lookup by window index.
    pub fn get(&self, index: u32) -> Result<&Window> {
        self.windows
            .get(index as usize)
            .ok_or(CompositeError::WindowIndexOutOfRange {
                index: index as i32,
                total_window_count: self.total_window_count(),
            })
    }
}

impl FromIterator<Window> for WindowList {
    fn from_iter<I: IntoIterator<Item = Window>>(iter: I) -> Self {
        Self {
            windows: iter.into_iter().collect(),
        }
    }
}
