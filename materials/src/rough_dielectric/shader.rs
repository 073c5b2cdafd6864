//! Rough Dielectric Preview Shader

use super::*;
use crate::preview::*;

/// Preview approximation of a rough dielectric. The interface cannot be shown
/// meaningfully by a preview renderer, so it is drawn as a faint transparent
/// boundary.
#[derive(Copy, Clone, Debug, Default)]
pub struct RoughDielectricShader;

impl PreviewShader for RoughDielectricShader {
    fn generate_code(&self, eval_name: &str) -> String {
        format!(
            "vec3 {name}(vec2 uv, vec3 wi, vec3 wo) {{\n    \
            return vec3(0.08);\n\
            }}\n\
            \n\
            vec3 {name}_diffuse(vec2 uv, vec3 wi, vec3 wo) {{\n    \
            return {name}(uv, wi, wo);\n\
            }}\n",
            name = eval_name
        )
    }

    fn is_transparent(&self) -> bool {
        true
    }
}

impl RoughDielectric {
    /// Returns the preview shader for this material.
    pub fn create_shader(&self) -> RoughDielectricShader {
        RoughDielectricShader
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
