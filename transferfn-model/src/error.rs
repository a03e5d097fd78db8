//! Model error types.

use thiserror::Error;

/// Failures the model can report. None of them leave the model in a
/// partially mutated state.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("A color map needs at least 2 points, got {found}")]
    InsufficientPoints { found: usize },

    #[error("Preset index {index} out of range ({len} presets)")]
    SelectionOutOfRange { index: usize, len: usize },

    #[error("Preset \"{name}\" is read-only")]
    PresetNotEditable { name: String },
}
