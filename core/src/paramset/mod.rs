//! Parameter Sets

use crate::pbrt::*;
use crate::spectrum::*;
use std::collections::HashMap;
use std::fmt;

mod texture_params;

// Re-export
pub use texture_params::*;

/// Stores a list of values for a named parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamSetItem<T> {
    /// The values.
    pub values: Vec<T>,
}

impl<T> ParamSetItem<T> {
    /// Returns a new `ParamSetItem`.
    ///
    /// * `values` - The values.
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }
}

/// A hashmap of parameter sets stored by name.
pub type ParamSetMap<T> = HashMap<String, ParamSetItem<T>>;

/// Stores parameter set items of different types in hashmaps.
#[derive(Clone, Default)]
pub struct ParamSet {
    pub bools: ParamSetMap<bool>,
    pub floats: ParamSetMap<Float>,
    pub spectra: ParamSetMap<Spectrum>,
    pub strings: ParamSetMap<String>,
    pub textures: ParamSetMap<String>,
}

/// Define a macro that can be used to generate a function for adding/replacing
/// parameter set item.
macro_rules! paramset_add {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&mut self, name: &str, values: &[$t]) {
            let n = String::from(name);
            self.$paramset.insert(n, ParamSetItem::new(values.to_vec()));
        }
    };
}

/// Define a macro that can be used to generate a function for removing
/// parameter set item.
macro_rules! paramset_erase {
    ($func: ident, $paramset: ident) => {
        pub fn $func(&mut self, name: &str) -> bool {
            self.$paramset.remove(name).is_some()
        }
    };
}

/// Define a macro that can be used to generate a function for finding
/// parameter set item that is stored as a single item.
macro_rules! paramset_find_one {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&self, name: &str, default: $t) -> $t {
            match self.$paramset.get(name) {
                Some(param) if param.values.len() == 1 => param.values[0].clone(),
                _ => default,
            }
        }
    };
}

/// Define a macro that can be used to generate a function for finding
/// parameter set item that is stored as a list.
macro_rules! paramset_find {
    ($func: ident, $t: ty, $paramset: ident) => {
        pub fn $func(&self, name: &str) -> Vec<$t> {
            match self.$paramset.get(name) {
                Some(param) => param.values.clone(),
                None => vec![],
            }
        }
    };
}

/// Define a macro that can be used to print parameter set items.
macro_rules! display_param {
    ($params: expr, $param_type: literal, $formatter: expr) => {
        let mut names: Vec<&String> = $params.keys().collect();
        names.sort();
        for name in names {
            let param = &$params[name];
            write!($formatter, "\"{} {}\" [", $param_type, name)?;
            for (i, v) in param.values.iter().enumerate() {
                if i > 0 {
                    write!($formatter, " ")?;
                }
                write!($formatter, "{}", v)?;
            }
            writeln!($formatter, "]")?;
        }
    };
}

impl ParamSet {
    /// Returns a new `ParamSet`.
    pub fn new() -> Self {
        Self::default()
    }

    paramset_erase!(erase_bool, bools);
    paramset_find_one!(find_one_bool, bool, bools);
    paramset_find!(find_bool, bool, bools);
    paramset_add!(add_bool, bool, bools);

    paramset_erase!(erase_float, floats);
    paramset_find_one!(find_one_float, Float, floats);
    paramset_find!(find_float, Float, floats);
    paramset_add!(add_float, Float, floats);

    paramset_erase!(erase_string, strings);
    paramset_find_one!(find_one_string, String, strings);
    paramset_find!(find_string, String, strings);
    paramset_add!(add_string, String, strings);

    paramset_erase!(erase_texture, textures);
    paramset_find_one!(find_one_texture, String, textures);
    paramset_find!(find_texture, String, textures);
    paramset_add!(add_texture, String, textures);

    paramset_erase!(erase_spectrum, spectra);
    paramset_find_one!(find_one_spectrum, Spectrum, spectra);
    paramset_find!(find_spectrum, Spectrum, spectra);
    paramset_add!(add_spectrum, Spectrum, spectra);

    /// Add/replace an RGB spectrum.
    ///
    /// * `name`   - Parameter name.
    /// * `values` - RGB values in a linear slice.
    pub fn add_rgb_spectrum(&mut self, name: &str, values: &[Float]) -> Result<(), String> {
        if values.len() % 3 != 0 {
            return Err(format!("RGB spectrum '{}' values % 3 != 0", name));
        }

        self.spectra.insert(
            String::from(name),
            ParamSetItem::new(
                values
                    .chunks_exact(3)
                    .map(|c| Spectrum::from_rgb(&[c[0], c[1], c[2]]))
                    .collect(),
            ),
        );
        Ok(())
    }

    /// Returns true if a parameter of any type exists with the given name.
    ///
    /// * `name` - Parameter name.
    pub fn contains(&self, name: &str) -> bool {
        self.bools.contains_key(name)
            || self.floats.contains_key(name)
            || self.spectra.contains_key(name)
            || self.strings.contains_key(name)
            || self.textures.contains_key(name)
    }

    /// Clear all parameter set items.
    pub fn clear(&mut self) {
        self.bools.clear();
        self.floats.clear();
        self.spectra.clear();
        self.strings.clear();
        self.textures.clear();
    }
}

impl fmt::Display for ParamSet {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_param!(self.bools, "bool", f);
        display_param!(self.floats, "float", f);
        display_param!(self.spectra, "color", f);
        display_param!(self.strings, "string", f);
        display_param!(self.textures, "texture", f);
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_one_falls_back_to_default() {
        let mut params = ParamSet::new();
        params.add_float("alpha", &[0.3]);
        params.add_float("list", &[0.1, 0.2]);

        assert_eq!(params.find_one_float("alpha", 0.1), 0.3);
        assert_eq!(params.find_one_float("missing", 0.1), 0.1);
        assert_eq!(params.find_one_float("list", 0.5), 0.5);
        assert_eq!(params.find_float("list"), vec![0.1, 0.2]);
    }

    #[test]
    fn erase_removes_only_named_type() {
        let mut params = ParamSet::new();
        params.add_string("intIOR", &[String::from("water")]);
        params.add_float("intIOR", &[1.33]);

        assert!(params.erase_string("intIOR"));
        assert!(!params.erase_string("intIOR"));
        assert!(params.contains("intIOR"));
        assert_eq!(params.find_one_float("intIOR", 1.0), 1.33);
    }

    #[test]
    fn rgb_spectrum_needs_triplets() {
        let mut params = ParamSet::new();
        assert!(params.add_rgb_spectrum("specularReflectance", &[0.5, 0.5]).is_err());
        assert!(params
            .add_rgb_spectrum("specularReflectance", &[0.1, 0.2, 0.3])
            .is_ok());
        assert_eq!(
            params.find_one_spectrum("specularReflectance", Spectrum::ONE),
            Spectrum::from_rgb(&[0.1, 0.2, 0.3])
        );
    }

    #[test]
    fn display_lists_parameters() {
        let mut params = ParamSet::new();
        params.add_float("alpha", &[0.25]);
        params.add_string("distribution", &[String::from("ggx")]);
        let s = format!("{}", params);
        assert!(s.contains("\"float alpha\" [0.25]"));
        assert!(s.contains("\"string distribution\" [ggx]"));
    }
}
