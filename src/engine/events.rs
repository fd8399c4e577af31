//! Input events
//!
//! Interaction callbacks from the shell (slider input, scroll-step
//! activation, brush moves, pointer hovers) arrive as explicit event
//! objects. The engine consumes them synchronously; no handler yields
//! before its cascade completes.

use serde::{Deserialize, Serialize};

use crate::view::BrushRect;

/// One interaction reported by the shell's collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum InputEvent {
    /// The time slider moved to a new progress value in `[0, 100]`
    SliderChanged { progress: f64 },

    /// The scroll observer activated the narrative step at this index
    StepEntered { index: usize },

    /// The brush rectangle changed; `None` clears the selection
    BrushChanged { rect: Option<BrushRect> },

    /// The pointer entered the scatter point of a commit
    PointerEntered { commit_id: String },

    /// The pointer moved while hovering. Tooltip placement follows the
    /// pointer inside the renderer; the model does not track it.
    PointerMoved,

    /// The pointer left a scatter point
    PointerLeft,
}
