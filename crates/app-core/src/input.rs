//! Pointer helpers shared by the frontend and the tests.

use crate::state::PointerSample;

/// Map viewport pixel coordinates to a sample in \[-0.5, 0.5\] per axis.
///
/// The top-left corner maps to (-0.5, -0.5) and the viewport center to
/// (0, 0). A degenerate viewport yields the center sample.
#[inline]
pub fn normalize_pointer(px: f32, py: f32, width: f32, height: f32) -> PointerSample {
    if width <= 0.0 || height <= 0.0 {
        return PointerSample::default();
    }
    PointerSample {
        x: (px / width) - 0.5,
        y: (py / height) - 0.5,
    }
}
