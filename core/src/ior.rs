//! Index of Refraction Data

use crate::paramset::ParamSet;
use crate::pbrt::*;

/// Refractive indices of common materials at visible wavelengths.
#[rustfmt::skip]
pub const IOR_DATA: [(&str, Float); 23] = [
    ("vacuum",               1.0),
    ("helium",               1.00004),
    ("hydrogen",             1.00013),
    ("air",                  1.000277),
    ("carbon dioxide",       1.00045),
    ("water",                1.3330),
    ("acetone",              1.36),
    ("ethanol",              1.361),
    ("carbon tetrachloride", 1.461),
    ("glycerol",             1.4729),
    ("benzene",              1.501),
    ("silicone oil",         1.52045),
    ("bromine",              1.661),
    ("water ice",            1.31),
    ("fused quartz",         1.458),
    ("pyrex",                1.470),
    ("acrylic glass",        1.49),
    ("polypropylene",        1.49),
    ("bk7",                  1.5046),
    ("sodium chloride",      1.544),
    ("amber",                1.55),
    ("pet",                  1.5750),
    ("diamond",              2.419),
];

/// Returns the refractive index of a named material. The name is matched
/// case-insensitively.
///
/// * `name` - Material name.
pub fn lookup_ior_by_name(name: &str) -> Result<Float, String> {
    let lower = name.to_lowercase();
    IOR_DATA
        .iter()
        .find(|(n, _)| *n == lower)
        .map(|(_, ior)| *ior)
        .ok_or_else(|| {
            let names: Vec<&str> = IOR_DATA.iter().map(|(n, _)| *n).collect();
            format!(
                "Unable to find an IOR value for '{}'. Choose one of: {}.",
                name,
                names.join(", ")
            )
        })
}

/// Returns a refractive index given either as a float or as a material name.
///
/// * `params`       - Parameter set.
/// * `name`         - Parameter name.
/// * `default_name` - Material used when the parameter is missing.
pub fn lookup_ior(params: &ParamSet, name: &str, default_name: &str) -> Result<Float, String> {
    let values = params.find_float(name);
    if values.len() == 1 {
        return Ok(values[0]);
    }
    let material = params.find_one_string(name, String::from(default_name));
    lookup_ior_by_name(&material)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
