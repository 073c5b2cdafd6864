//! Preview Shaders

/// Generates GLSL used by interactive previews to approximate a material.
pub trait PreviewShader {
    /// Returns GLSL source defining `vec3 <eval_name>(vec2 uv, vec3 wi, vec3 wo)`
    /// and its `<eval_name>_diffuse` counterpart.
    ///
    /// * `eval_name` - Name of the generated evaluation function.
    fn generate_code(&self, eval_name: &str) -> String;

    /// Returns true if the preview should treat the surface as see-through.
    fn is_transparent(&self) -> bool {
        false
    }
}
