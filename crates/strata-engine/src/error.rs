use thiserror::Error;

/// Which count-prefixed buffer a validation error refers to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferKind {
    WindowList,
    OrderList,
    PerDraw,
}

impl std::fmt::Display for BufferKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            BufferKind::WindowList => "window list",
            BufferKind::OrderList => "order list",
            BufferKind::PerDraw => "per-draw constants",
        })
    }
}

/// Errors surfaced by the compositing core.
///
/// Everything here is a caller contract violation: nothing is retried and nothing
/// is clamped into range. Running past the depth precision limit is not an error,
/// see [`crate::render::DepthCounter::is_exhausted`]; wrapping the `u32` slot space
/// is ([`CompositeError::DepthRangeOverflow`]).
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum CompositeError {
    #[error("instance {instance} is out of range for {window_count} ordered windows")]
    InstanceOutOfRange { instance: u32, window_count: u32 },

    #[error("window index {index} is out of range for {total_window_count} windows")]
    WindowIndexOutOfRange { index: i32, total_window_count: u32 },

    #[error("image id {id} is not present in the image table")]
    ImageOutOfRange { id: u32 },

    #[error("surface uses image content but carries no valid image id")]
    MissingImage,

    #[error("{buffer} declares {declared} entries but holds {actual}")]
    CountMismatch {
        buffer: BufferKind,
        declared: i64,
        actual: usize,
    },

    #[error("{buffer} has a negative count ({count})")]
    NegativeCount { buffer: BufferKind, count: i32 },

    #[error("{buffer} is truncated: need {needed} bytes, got {got}")]
    TruncatedBuffer {
        buffer: BufferKind,
        needed: usize,
        got: usize,
    },

    #[error("depth range of {requested} slots starting at slot {next} overflows the slot space")]
    DepthRangeOverflow { requested: u64, next: u32 },

    #[error("usage bug: frame recording already in progress")]
    RecordingAlreadyInProgress,

    #[error("usage bug: frame recording has not been started")]
    RecordingNotInProgress,

    #[error("usage bug: no viewport set for single-window draws")]
    NoViewport,

    #[error("usage bug: viewport {width}x{height} has no area")]
    InvalidViewport { width: i32, height: i32 },

    #[error("bulk submission must precede single-window draws within a frame")]
    BulkAfterSingleDraw,

    #[error("only one bulk submission fits the frame's bulk depth range")]
    BulkAlreadySubmitted,
}

pub type Result<T> = std::result::Result<T, CompositeError>;
