use core::ops::Range;

use glam::IVec2;

use crate::config::CompositorConfig;
use crate::coords::Viewport;
use crate::error::{CompositeError, Result};
use crate::scene::{OrderList, Window, WindowList};

use super::constants::{PerDrawConstants, ShaderConstants};
use super::depth::{Depth, DepthCounter};

/// Everything needed to issue one instanced bulk draw.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkSubmission {
    pub constants: ShaderConstants,
    /// Instance count of the draw: the order list's window count.
    pub instance_count: u32,
    /// Depth slots the bulk path occupies, `[0, total_window_count)`.
    pub depth_slots: Range<u32>,
}

/// What a finished frame recorded.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct FrameSummary {
    pub frame_index: u64,
    pub single_draws: u32,
    pub draw_lists: u32,
    /// Windows covered by the bulk submission, if one was made.
    pub bulk_windows: Option<u32>,
    /// Depth slots handed out past the configured baseline.
    pub depth_slots_used: u32,
    pub depth_exhausted: bool,
}

#[derive(Debug, Clone)]
struct FrameState {
    constants: ShaderConstants,
    single_draws: u32,
    draw_lists: u32,
    bulk_windows: Option<u32>,
}

/// Frame context for compositing.
///
/// Owns the running depth counter. Lifecycle per frame:
///
/// ```text
/// begin_frame -> [submit_bulk] -> (draw_window | draw_list)* -> end_frame
/// ```
///
/// The bulk path derives depth from the window index, so it owns slots
/// `[0, total_window_count)` and has to come first. Single-window draws continue
/// from there.
#[derive(Debug)]
pub struct FrameRecorder {
    config: CompositorConfig,
    depth: DepthCounter,
    viewport: Option<Viewport>,
    frame: Option<FrameState>,
    frame_index: u64,
}

impl FrameRecorder {
    pub fn new(config: CompositorConfig) -> Self {
        let depth = DepthCounter::new(config.depth_baseline, config.depth_slot_limit);
        Self {
            config,
            depth,
            viewport: None,
            frame: None,
            frame_index: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &CompositorConfig {
        &self.config
    }

    #[inline]
    pub fn is_recording(&self) -> bool {
        self.frame.is_some()
    }

    #[inline]
    pub fn depth(&self) -> &DepthCounter {
        &self.depth
    }

    #[inline]
    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// Starts a frame rendered at `resolution` and returns its shader constants.
    pub fn begin_frame(&mut self, resolution: IVec2) -> Result<ShaderConstants> {
        if self.frame.is_some() {
            return Err(CompositeError::RecordingAlreadyInProgress);
        }
        if resolution.x <= 0 || resolution.y <= 0 {
            return Err(CompositeError::InvalidViewport {
                width: resolution.x,
                height: resolution.y,
            });
        }

        self.depth.reset();
        let constants = ShaderConstants::new(
            self.config.model,
            resolution.x as f32,
            resolution.y as f32,
        );
        self.frame = Some(FrameState {
            constants,
            single_draws: 0,
            draw_lists: 0,
            bulk_windows: None,
        });

        log::debug!(
            "frame {} begin: {}x{}, depth baseline slot {}",
            self.frame_index,
            resolution.x,
            resolution.y,
            self.depth.baseline()
        );
        Ok(constants)
    }

    /// Sets the viewport used by subsequent single-window draws.
    ///
    /// Unlike the other recording calls this is allowed outside a frame: the
    /// viewport outlives the frame and stays in effect until replaced, so it can be
    /// set once before the first `begin_frame`.
    pub fn set_viewport(&mut self, viewport: &Viewport) -> Result<()> {
        if !viewport.is_valid() {
            return Err(CompositeError::InvalidViewport {
                width: viewport.size.x,
                height: viewport.size.y,
            });
        }
        self.viewport = Some(*viewport);
        Ok(())
    }

    /// Validates both lists and claims the bulk depth range.
    pub fn submit_bulk(
        &mut self,
        windows: &WindowList,
        order: &OrderList,
    ) -> Result<BulkSubmission> {
        let frame = self.frame.as_mut().ok_or(CompositeError::RecordingNotInProgress)?;
        if frame.bulk_windows.is_some() {
            return Err(CompositeError::BulkAlreadySubmitted);
        }
        if frame.single_draws > 0 || frame.draw_lists > 0 {
            return Err(CompositeError::BulkAfterSingleDraw);
        }

        order.validate_against(windows)?;

        let total = windows.total_window_count();
        self.depth.advance_to(total);
        frame.bulk_windows = Some(total);

        log::trace!(
            "bulk: {} instances over {} windows",
            order.window_count(),
            total
        );
        Ok(BulkSubmission {
            constants: frame.constants,
            instance_count: order.window_count(),
            depth_slots: 0..total,
        })
    }

    /// Records one single-window draw at the next depth slot.
    pub fn draw_window(&mut self, window: &Window) -> Result<PerDrawConstants> {
        let (frame, counter, viewport) = self.recording()?;
        let depth = counter.next_depth()?;
        frame.single_draws += 1;

        log::trace!("single draw at {:?}: {:?}", depth, window.dims);
        Ok(PerDrawConstants::new(window, &viewport, depth))
    }

    /// Records a list of single-window draws over one contiguous depth range.
    ///
    /// Entries are painted in list order; later entries sit in front. Either every
    /// window gets a slot or the call fails and nothing is recorded.
    pub fn draw_list(&mut self, windows: &[Window]) -> Result<Vec<PerDrawConstants>> {
        let (frame, counter, viewport) = self.recording()?;

        let count =
            u32::try_from(windows.len()).map_err(|_| CompositeError::DepthRangeOverflow {
                requested: windows.len() as u64,
                next: counter.current_slot(),
            })?;
        let slots = counter.reserve(count)?;
        frame.draw_lists += 1;
        log::trace!("draw list: {} windows in slots {:?}", windows.len(), slots);

        Ok(windows
            .iter()
            .zip(slots)
            .map(|(w, slot)| PerDrawConstants::new(w, &viewport, Depth::from_slot(slot)))
            .collect())
    }

    /// Finishes the frame and leaves the recorder idle.
    pub fn end_frame(&mut self) -> Result<FrameSummary> {
        let frame = self.frame.take().ok_or(CompositeError::RecordingNotInProgress)?;

        let summary = FrameSummary {
            frame_index: self.frame_index,
            single_draws: frame.single_draws,
            draw_lists: frame.draw_lists,
            bulk_windows: frame.bulk_windows,
            depth_slots_used: self
                .depth
                .current_slot()
                .saturating_sub(self.depth.baseline()),
            depth_exhausted: self.depth.is_exhausted(),
        };
        self.frame_index += 1;

        log::debug!(
            "frame {} end: {} single, {} lists, {} depth slots",
            summary.frame_index,
            summary.single_draws,
            summary.draw_lists,
            summary.depth_slots_used
        );
        Ok(summary)
    }

    fn recording(&mut self) -> Result<(&mut FrameState, &mut DepthCounter, Viewport)> {
        let frame = self.frame.as_mut().ok_or(CompositeError::RecordingNotInProgress)?;
        let viewport = self.viewport.ok_or(CompositeError::NoViewport)?;
        Ok((frame, &mut self.depth, viewport))
    }
}

impl Default for FrameRecorder {
    fn default() -> Self {
        Self::new(CompositorConfig::default())
    }
}
