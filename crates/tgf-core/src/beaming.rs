//! Angular emission-distribution model of the TGF source.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// How source particles are distributed in emission angle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BeamingType {
    /// Isotropic within the opening-angle cone.
    Uniform,
    /// Gaussian in angle, with the opening angle as the standard deviation.
    Gaussian,
}

impl BeamingType {
    /// Resolve a configured beaming string, case-insensitively.
    ///
    /// `"normal"` is accepted as an alias for `Gaussian`.  Returns `None`
    /// for anything unrecognized — an unresolved mode is not an error at
    /// this level; config loaders that want one use [`FromStr`] instead.
    pub fn from_config(s: &str) -> Option<BeamingType> {
        match s.to_ascii_lowercase().as_str() {
            "uniform" => Some(BeamingType::Uniform),
            "gaussian" | "normal" => Some(BeamingType::Gaussian),
            _ => None,
        }
    }
}

impl FromStr for BeamingType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<BeamingType, CoreError> {
        BeamingType::from_config(s)
            .ok_or_else(|| CoreError::Parse(format!("unknown beaming type {s:?}")))
    }
}

impl fmt::Display for BeamingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeamingType::Uniform => write!(f, "Uniform"),
            BeamingType::Gaussian => write!(f, "Gaussian"),
        }
    }
}
