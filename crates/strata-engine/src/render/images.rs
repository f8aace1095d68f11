//! Image indirection table.
//!
//! Windows name their texture by [`ImageId`]; the fragment stage indexes an
//! unbounded texture array with the same id. This module owns the CPU side of that
//! contract: a bounds-checked table from id to texture handle.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::coords::ColorRgba;
use crate::error::{CompositeError, Result};
use crate::scene::{ImageId, SurfaceContent, Window};

/// Capability interface over any id → texture handle table.
pub trait ImageTable {
    type Handle;

    /// Looks up the handle stored at `id`.
    fn resolve(&self, id: ImageId) -> Result<&Self::Handle>;

    fn is_valid(&self, id: ImageId) -> bool {
        self.resolve(id).is_ok()
    }
}

/// A plain growable array is a table keyed by position.
impl<H> ImageTable for Vec<H> {
    type Handle = H;

    fn resolve(&self, id: ImageId) -> Result<&H> {
        self.get(id.index())
            .ok_or(CompositeError::ImageOutOfRange { id: id.0 })
    }
}

/// Slot table with stable ids.
///
/// Removing an image frees its slot; the next insert reuses the lowest freed slot,
/// which keeps the GPU texture array dense.
#[derive(Debug, Clone)]
pub struct ImageSlots<H> {
    slots: Vec<Option<H>>,
    free: BinaryHeap<Reverse<u32>>,
    len: usize,
}

impl<H> Default for ImageSlots<H> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: BinaryHeap::new(),
            len: 0,
        }
    }
}

impl<H> ImageSlots<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, handle: H) -> ImageId {
        self.len += 1;
        if let Some(Reverse(slot)) = self.free.pop() {
            self.slots[slot as usize] = Some(handle);
            return ImageId(slot);
        }
        self.slots.push(Some(handle));
        ImageId(self.slots.len() as u32 - 1)
    }

    /// Swaps the handle at `id`, returning the previous one.
    pub fn replace(&mut self, id: ImageId, handle: H) -> Result<H> {
        match self.slots.get_mut(id.index()) {
            Some(Some(current)) => Ok(std::mem::replace(current, handle)),
            _ => Err(CompositeError::ImageOutOfRange { id: id.0 }),
        }
    }

    pub fn remove(&mut self, id: ImageId) -> Option<H> {
        let handle = self.slots.get_mut(id.index())?.take()?;
        self.free.push(Reverse(id.0));
        self.len -= 1;
        Some(handle)
    }

    /// Number of live images.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Size the GPU texture array must have to cover every id handed out.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl<H> ImageTable for ImageSlots<H> {
    type Handle = H;

    fn resolve(&self, id: ImageId) -> Result<&H> {
        self.slots
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(CompositeError::ImageOutOfRange { id: id.0 })
    }
}

/// Where a window's pixels come from.
#[derive(Debug, PartialEq)]
pub enum SurfaceSource<'a, H> {
    Texture { id: ImageId, handle: &'a H },
    Color(ColorRgba),
}

/// Selects the texture or flat color for `window`.
pub fn resolve_source<'a, T>(
    window: &Window,
    table: &'a T,
) -> Result<SurfaceSource<'a, T::Handle>>
where
    T: ImageTable + ?Sized,
{
    match window.content {
        SurfaceContent::Color(c) => Ok(SurfaceSource::Color(c)),
        SurfaceContent::Image(id) => Ok(SurfaceSource::Texture {
            id,
            handle: table.resolve(id)?,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;

    #[test]
    fn insert_reuses_lowest_freed_slot() {
        let mut slots = ImageSlots::new();
        let a = slots.insert("a");
        let b = slots.insert("b");
        let c = slots.insert("c");
        assert_eq!((a, b, c), (ImageId(0), ImageId(1), ImageId(2)));

        slots.remove(c);
        slots.remove(a);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots.insert("d"), ImageId(0));
        assert_eq!(slots.insert("e"), ImageId(2));
        assert_eq!(slots.slot_count(), 3);
    }

    #[test]
    fn removed_ids_stop_resolving() {
        let mut slots = ImageSlots::new();
        let id = slots.insert(7u64);
        assert!(slots.is_valid(id));
        assert_eq!(slots.remove(id), Some(7));
        assert!(!slots.is_valid(id));
        assert_eq!(slots.remove(id), None);
        assert_eq!(
            slots.resolve(id),
            Err(CompositeError::ImageOutOfRange { id: 0 })
        );
    }

    #[test]
    fn replace_requires_live_slot() {
        let mut slots = ImageSlots::new();
        let id = slots.insert(1);
        assert_eq!(slots.replace(id, 2), Ok(1));
        assert_eq!(slots.resolve(id), Ok(&2));
        assert!(slots.replace(ImageId(5), 3).is_err());
    }

    #[test]
    fn vec_is_a_table() {
        let table = vec!["tex0", "tex1"];
        assert_eq!(table.resolve(ImageId(1)), Ok(&"tex1"));
        assert!(!table.is_valid(ImageId(2)));
    }

    #[test]
    fn source_selects_texture_or_color() {
        let mut slots = ImageSlots::new();
        let id = slots.insert("wallpaper");
        let dims = Rect::new(0, 0, 10, 10);

        let tex = resolve_source(&Window::image(id, dims), &slots).unwrap();
        assert_eq!(
            tex,
            SurfaceSource::Texture {
                id,
                handle: &"wallpaper"
            }
        );

        let flat_window = Window::color(ColorRgba::black(), dims);
        let flat = resolve_source(&flat_window, &slots).unwrap();
        assert_eq!(flat, SurfaceSource::Color(ColorRgba::black()));

        assert!(resolve_source(&Window::image(ImageId(4), dims), &slots).is_err());
    }
}
