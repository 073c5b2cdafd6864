//! Interactions

use crate::geometry::*;

/// The surface point record used for texture lookups. Scattering is computed
/// in the local shading frame so only the parametric coordinates are needed.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SurfaceInteraction {
    /// Surface parametric coordinates.
    pub uv: Point2f,
}

impl SurfaceInteraction {
    /// Create a new `SurfaceInteraction`.
    ///
    /// * `uv` - Surface parametric coordinates.
    pub fn new(uv: Point2f) -> Self {
        Self { uv }
    }
}
