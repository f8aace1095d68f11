use crate::error::{BufferKind, CompositeError, Result};

use super::WindowList;

/// Maps a bulk-draw instance number onto a position in the ordered index array.
///
/// The driver appends windows front-to-back, while instances are numbered in draw
/// order. Reading the list in reverse paints back-to-front:
///
/// ```text
/// resolved_array_index = (window_count - 1) - instance
/// ```
///
/// Out-of-range instances are rejected, never clamped.
#[inline]
pub fn resolve_array_index(window_count: u32, instance: u32) -> Result<usize> {
    if instance >= window_count {
        return Err(CompositeError::InstanceOutOfRange {
            instance,
            window_count,
        });
    }
    Ok((window_count - 1 - instance) as usize)
}

/// Frame-scoped paint order: indices into a [`WindowList`], front-to-back.
///
/// The front-most window is pushed first. Bulk instance `0` resolves to the last
/// pushed (back-most) window.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrderList {
    ordered_windows: Vec<u32>,
}

impl OrderList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an order list from a raw count and index array, as stored in the
    /// GPU buffer.
    pub fn from_parts(window_count: i32, ordered_windows: &[i32]) -> Result<Self> {
        if window_count < 0 {
            return Err(CompositeError::NegativeCount {
                buffer: BufferKind::OrderList,
                count: window_count,
            });
        }
        if window_count as usize != ordered_windows.len() {
            return Err(CompositeError::CountMismatch {
                buffer: BufferKind::OrderList,
                declared: window_count as i64,
                actual: ordered_windows.len(),
            });
        }

        let mut list = Self::new();
        for &index in ordered_windows {
            let Ok(index) = u32::try_from(index) else {
                return Err(CompositeError::WindowIndexOutOfRange {
                    index,
                    total_window_count: 0,
                });
            };
            list.push(index);
        }
        Ok(list)
    }

    /// Clears the order. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.ordered_windows.clear();
    }

    /// Appends the next window behind everything pushed so far.
    #[inline]
    pub fn push(&mut self, window_index: u32) {
        debug_assert!(window_index <= i32::MAX as u32, "window index exceeds i32 range");
        self.ordered_windows.push(window_index);
    }

    #[inline]
    pub fn window_count(&self) -> u32 {
        self.ordered_windows.len() as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ordered_windows.is_empty()
    }

    /// Indices in front-to-back (insertion) order.
    #[inline]
    pub fn ordered_windows(&self) -> &[u32] {
        &self.ordered_windows
    }

    /// Resolves the window index drawn by bulk instance `instance`.
    pub fn resolve(&self, instance: u32) -> Result<u32> {
        let slot = resolve_array_index(self.window_count(), instance)?;
        Ok(self.ordered_windows[slot])
    }

    /// Checks every entry against the window list it will be paired with.
    pub fn validate_against(&self, windows: &WindowList) -> Result<()> {
        let total = windows.total_window_count();
        match self.ordered_windows.iter().find(|&&i| i >= total) {
            Some(&index) => Err(CompositeError::WindowIndexOutOfRange {
                index: index as i32,
                total_window_count: total,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{ColorRgba, Rect};
    use crate::scene::Window;

    // ── resolve_array_index ───────────────────────────────────────────────

    #[test]
    fn resolve_reverses_instances() {
        assert_eq!(resolve_array_index(3, 0).unwrap(), 2);
        assert_eq!(resolve_array_index(3, 1).unwrap(), 1);
        assert_eq!(resolve_array_index(3, 2).unwrap(), 0);
    }

    #[test]
    fn resolve_is_bijection() {
        for n in 1..=64u32 {
            let mut seen = vec![false; n as usize];
            for instance in 0..n {
                let slot = resolve_array_index(n, instance).unwrap();
                assert!(!seen[slot], "slot {slot} hit twice for n={n}");
                seen[slot] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn resolve_rejects_out_of_range() {
        assert_eq!(
            resolve_array_index(4, 4),
            Err(CompositeError::InstanceOutOfRange {
                instance: 4,
                window_count: 4,
            })
        );
        assert!(resolve_array_index(0, 0).is_err());
    }

    // ── OrderList ─────────────────────────────────────────────────────────

    #[test]
    fn first_instance_is_back_most_window() {
        let mut order = OrderList::new();
        order.push(7); // front
        order.push(2);
        order.push(5); // back

        assert_eq!(order.resolve(0).unwrap(), 5);
        assert_eq!(order.resolve(2).unwrap(), 7);
        let painted: Vec<u32> = (0..3).map(|i| order.resolve(i).unwrap()).collect();
        assert_eq!(painted, vec![5, 2, 7]);
    }

    #[test]
    fn from_parts_checks_count() {
        assert!(OrderList::from_parts(2, &[0, 1]).is_ok());
        assert_eq!(
            OrderList::from_parts(3, &[0, 1]),
            Err(CompositeError::CountMismatch {
                buffer: BufferKind::OrderList,
                declared: 3,
                actual: 2,
            })
        );
        assert!(matches!(
            OrderList::from_parts(-1, &[]),
            Err(CompositeError::NegativeCount { .. })
        ));
        assert!(matches!(
            OrderList::from_parts(1, &[-4]),
            Err(CompositeError::WindowIndexOutOfRange { index: -4, .. })
        ));
    }

    #[test]
    fn validate_against_window_list() {
        let windows: WindowList = (0..2)
            .map(|i| Window::color(ColorRgba::black(), Rect::new(i, 0, 1, 1)))
            .collect();

        let mut order = OrderList::new();
        order.push(1);
        order.push(0);
        assert!(order.validate_against(&windows).is_ok());

        order.push(2);
        assert_eq!(
            order.validate_against(&windows),
            Err(CompositeError::WindowIndexOutOfRange {
                index: 2,
                total_window_count: 2,
            })
        );
    }
}
