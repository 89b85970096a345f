//! Per-frame render decision.
//!
//! The whole of the template's "rendering logic": pick one of two fixed
//! background colors from the current input snapshot. Kept as a pure function
//! so it can be exercised without a window or GPU.

use crate::color::{Rgba8, PURPLE, SKY_BLUE};
use crate::input::{InputState, Key};

/// Background for the current frame: purple while the space bar is held,
/// sky blue otherwise. Exactly one color per frame.
pub fn clear_color(input: &InputState) -> Rgba8 {
    if input.is_held(Key::Space) {
        PURPLE
    } else {
        SKY_BLUE
    }
}
