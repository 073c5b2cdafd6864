//! Energy Conservation

use microglass_core::pbrt::*;
use microglass_core::spectrum::*;
use microglass_core::texture::*;
use microglass_textures::*;
use std::sync::Arc;

/// Returns a modulation texture whose maximum does not exceed `max`. Textures
/// that would scatter more energy than they receive are scaled down so their
/// largest component becomes `0.99 * max`.
///
/// * `texture`    - The modulation texture.
/// * `param_name` - Name of the parameter, used in the warning.
/// * `owner`      - Name of the material, used in the warning.
/// * `max`        - Largest admissible value.
pub fn ensure_energy_conservation(
    texture: ArcTexture<Spectrum>,
    param_name: &str,
    owner: &str,
    max: Float,
) -> ArcTexture<Spectrum> {
    let actual_max = texture.maximum().max_component_value();
    if actual_max <= max {
        return texture;
    }

    let scale = 0.99 * (max / actual_max);
    warn!(
        "The reflectance parameter \"{}\" of \"{}\" violates energy conservation! The largest value is {}, \
        which will lead to a surface that reflects more energy than it receives. Scaling by {}.",
        param_name, owner, actual_max, scale
    );
    Arc::new(ScaleTexture::new(texture, Arc::new(ConstantTexture::new(Spectrum::new(scale)))))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
