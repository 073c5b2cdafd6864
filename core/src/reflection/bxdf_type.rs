//! BxDF Type

use bitflags::bitflags;

bitflags! {
    /// Stores combination of flags describing scattering components and
    /// their capabilities.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct BxDFType: u32 {
        /// Ideal diffuse reflection.
        const DIFFUSE_REFLECTION = 0x00001;

        /// Ideal diffuse transmission.
        const DIFFUSE_TRANSMISSION = 0x00002;

        /// Glossy reflection.
        const GLOSSY_REFLECTION = 0x00004;

        /// Glossy transmission.
        const GLOSSY_TRANSMISSION = 0x00008;

        /// Reflection into a discrete set of directions.
        const DELTA_REFLECTION = 0x00010;

        /// Transmission into a discrete set of directions.
        const DELTA_TRANSMISSION = 0x00020;

        /// The component depends on the azimuth of the incident direction.
        const ANISOTROPIC = 0x01000;

        /// The component is driven by non-constant textures.
        const SPATIALLY_VARYING = 0x02000;

        /// The component scatters light arriving from the front side.
        const FRONT_SIDE = 0x04000;

        /// The component scatters light arriving from the back side.
        const BACK_SIDE = 0x08000;

        /// The component draws extra values from the query sampler.
        const CAN_USE_SAMPLER = 0x10000;

        /// Any reflection.
        const REFLECTION = Self::DIFFUSE_REFLECTION.bits()
            | Self::GLOSSY_REFLECTION.bits()
            | Self::DELTA_REFLECTION.bits();

        /// Any transmission.
        const TRANSMISSION = Self::DIFFUSE_TRANSMISSION.bits()
            | Self::GLOSSY_TRANSMISSION.bits()
            | Self::DELTA_TRANSMISSION.bits();

        /// Any glossy component.
        const GLOSSY = Self::GLOSSY_REFLECTION.bits() | Self::GLOSSY_TRANSMISSION.bits();

        /// Every scattering type.
        const ALL = Self::REFLECTION.bits() | Self::TRANSMISSION.bits();
    }
}

impl BxDFType {
    /// Tests a single type flag and returns whether it is set or not.
    ///
    /// * `other` - BxDF type flag to match.
    pub fn matches(&self, other: Self) -> bool {
        self.intersects(other)
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_glossy() {
        assert!(BxDFType::ALL.matches(BxDFType::GLOSSY_REFLECTION));
        assert!(BxDFType::ALL.matches(BxDFType::GLOSSY_TRANSMISSION));
        assert!(!BxDFType::REFLECTION.matches(BxDFType::GLOSSY_TRANSMISSION));
        assert!(!BxDFType::ALL.matches(BxDFType::FRONT_SIDE));
    }

    #[test]
    fn default_is_empty() {
        assert!(BxDFType::default().is_empty());
    }
}
