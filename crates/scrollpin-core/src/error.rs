use thiserror::Error;

/// Authoring and registration failures.
///
/// None of these surface to visitors: callers log them and fall back to an
/// unanimated, freely scrollable page.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChoreoError {
    #[error("invalid pinned range: start={start} end={end}")]
    InvalidRange { start: f32, end: f32 },
    #[error("keyframes for `{element}` are out of order at index {index}")]
    KeyframesOutOfOrder { element: String, index: usize },
    #[error("keyframe for `{element}` at {at} is outside [0, 1]")]
    KeyframeOutOfRange { element: String, at: f32 },
    #[error("keyframe for `{element}` at {at} falls outside its {phase} phase")]
    KeyframeOutsidePhase {
        element: String,
        at: f32,
        phase: &'static str,
    },
    #[error("unknown pin handle {0}")]
    UnknownHandle(u64),
}

pub type Result<T> = std::result::Result<T, ChoreoError>;
