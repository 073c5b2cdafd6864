//! Rough Dielectric Serialization

use super::*;
use microglass_core::serialization::*;
use std::io::{Read, Write};

impl RoughDielectric {
    /// Writes the material to a stream: the distribution tag, the roughness
    /// and modulation textures through the instance manager, then the
    /// interior and exterior indices of refraction.
    ///
    /// * `stream`  - The output stream.
    /// * `manager` - Tracks texture instances already written.
    pub fn serialize(&self, stream: &mut dyn Write, manager: &mut InstanceManager<Spectrum>) -> Result<(), String> {
        write_u32(stream, u32::from(self.distribution))?;
        manager.serialize(stream, &self.alpha_u)?;
        manager.serialize(stream, &self.alpha_v)?;
        manager.serialize(stream, &self.specular_reflectance)?;
        manager.serialize(stream, &self.specular_transmittance)?;
        write_f32(stream, self.int_ior)?;
        write_f32(stream, self.ext_ior)
    }
}

impl RoughDielectricBuilder {
    /// Reads a material written by `RoughDielectric::serialize()` and
    /// configures it. The stored modulation textures are already the
    /// configured ones, so they are not rescaled again.
    ///
    /// * `stream`  - The input stream.
    /// * `manager` - Tracks texture instances already read.
    pub fn deserialize(stream: &mut dyn Read, manager: &mut InstanceManager<Spectrum>) -> Result<RoughDielectric, String> {
        let distribution = MicrofacetDistribution::try_from(read_u32(stream)?)?;
        let alpha_u = manager.get_instance(stream, decode_texture::<Spectrum>)?;
        let alpha_v = manager.get_instance(stream, decode_texture::<Spectrum>)?;
        let specular_reflectance = manager.get_instance(stream, decode_texture::<Spectrum>)?;
        let specular_transmittance = manager.get_instance(stream, decode_texture::<Spectrum>)?;
        let int_ior = read_f32(stream)?;
        let ext_ior = read_f32(stream)?;

        Self {
            distribution,
            alpha_u,
            alpha_v,
            specular_reflectance,
            specular_transmittance,
            int_ior,
            ext_ior,
            ensure_energy_conservation: false,
            ..Self::default()
        }
        .configure()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn round_trip(material: &RoughDielectric) -> RoughDielectric {
        let mut buf: Vec<u8> = vec![];
        material.serialize(&mut buf, &mut InstanceManager::new()).unwrap();
        RoughDielectricBuilder::deserialize(&mut Cursor::new(buf), &mut InstanceManager::new()).unwrap()
    }

    #[test]
    fn layout_of_isotropic_material() {
        let material = RoughDielectricBuilder::new().ior(1.5, 1.0).configure().unwrap();
        let mut buf: Vec<u8> = vec![];
        material.serialize(&mut buf, &mut InstanceManager::new()).unwrap();

        // tag, alphaU (id, class, rgb), alphaV (id), two modulation textures, two floats
        assert_eq!(buf.len(), 4 + 20 + 4 + 20 + 20 + 8);
        assert_eq!(&buf[0..4], &[0, 0, 0, 0]);
        assert_eq!(&buf[buf.len() - 8..buf.len() - 4], &1.5f32.to_le_bytes());
    }

    #[test]
    fn shared_roughness_stays_shared() {
        let material = RoughDielectricBuilder::new()
            .distribution(MicrofacetDistribution::GGX)
            .roughness(0.25, 0.25)
            .ior(1.33, 1.0)
            .configure()
            .unwrap();
        let restored = round_trip(&material);

        assert_eq!(restored.distribution(), MicrofacetDistribution::GGX);
        assert_eq!(restored.int_ior(), 1.33);
        assert_eq!(restored.ext_ior(), 1.0);
        let (alpha_u, alpha_v) = restored.alpha();
        assert!(same_instance(alpha_u, alpha_v));
        assert_eq!(alpha_u.maximum(), Spectrum::new(0.25));
        for c in 0..2 {
            assert_eq!(restored.get_type(c), material.get_type(c));
        }
    }

    #[test]
    fn anisotropic_and_varying_textures_survive() {
        let checker: ArcTexture<Spectrum> = Arc::new(CheckerboardTexture2D::new(
            constant(0.3),
            constant(0.9),
            2.0,
            2.0,
            0.0,
            0.0,
        ));
        let mut builder = RoughDielectricBuilder::new()
            .distribution(MicrofacetDistribution::AshikhminShirley)
            .roughness(0.05, 0.4);
        builder.add_child("specularTransmittance", checker).unwrap();
        builder.add_child("specularReflectance", constant(3.0)).unwrap();
        let material = builder.configure().unwrap();
        let restored = round_trip(&material);

        let (alpha_u, alpha_v) = restored.alpha();
        assert!(!same_instance(alpha_u, alpha_v));
        for c in 0..2 {
            assert_eq!(restored.get_type(c), material.get_type(c));
        }
        assert!(restored.get_type(1).contains(BxDFType::SPATIALLY_VARYING));
        assert_eq!(
            restored.specular_reflectance().maximum(),
            material.specular_reflectance().maximum()
        );
    }

    #[test]
    fn malformed_streams_are_errors() {
        let mut manager = InstanceManager::new();
        assert!(RoughDielectricBuilder::deserialize(&mut Cursor::new(vec![9, 0, 0, 0]), &mut manager).is_err());

        let material = RoughDielectricBuilder::new().configure().unwrap();
        let mut buf: Vec<u8> = vec![];
        material.serialize(&mut buf, &mut InstanceManager::new()).unwrap();
        buf.truncate(buf.len() - 2);
        assert!(RoughDielectricBuilder::deserialize(&mut Cursor::new(buf), &mut InstanceManager::new()).is_err());
    }
}
