//! Source and output configuration for one simulation run.
//!
//! Typically loaded from a TOML/JSON file by the application crate (enable
//! the `serde` feature) and passed by reference to everything that needs it.

use std::path::PathBuf;

use crate::beaming::BeamingType;
use crate::error::{CoreError, CoreResult};

/// Run parameters consumed by the detection-output pipeline.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceSettings {
    /// Altitude of the virtual detection layer, metres.
    pub record_altitude_m: f64,

    /// TGF source altitude, kilometres.
    pub source_altitude_km: f64,

    /// Beam half opening angle, degrees.  180 means the full sphere.
    pub opening_angle_deg: f64,

    /// Beaming-distribution name as configured (`"Uniform"`, `"Gaussian"`,
    /// `"normal"`, ...).  Kept verbatim because it is embedded in output
    /// file names; resolve it with [`Self::beaming_type`].
    pub beaming: String,

    /// Gaussian time spread of the source, microseconds.
    pub time_sigma_us: f64,

    /// Master toggle for the ASCII detection file.
    pub ascii_output: bool,

    /// Buffered-line count above which the writer flushes to disk.
    pub flush_threshold: usize,

    /// Directory receiving the output files.
    pub output_dir: PathBuf,
}

impl SourceSettings {
    /// Resolve the configured beaming string; `None` if unrecognized.
    pub fn beaming_type(&self) -> Option<BeamingType> {
        BeamingType::from_config(&self.beaming)
    }

    /// Check numeric sanity before a run starts.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.record_altitude_m.is_finite() || self.record_altitude_m <= 0.0 {
            return Err(CoreError::Config(format!(
                "record altitude must be positive, got {}",
                self.record_altitude_m
            )));
        }
        if !(0.0..=180.0).contains(&self.opening_angle_deg) {
            return Err(CoreError::Config(format!(
                "opening angle must be within [0, 180] degrees, got {}",
                self.opening_angle_deg
            )));
        }
        if !self.time_sigma_us.is_finite() || self.time_sigma_us < 0.0 {
            return Err(CoreError::Config(format!(
                "time sigma must be non-negative, got {}",
                self.time_sigma_us
            )));
        }
        Ok(())
    }
}

impl Default for SourceSettings {
    /// The reference scenario: an isotropic source at 20 km recorded at an
    /// 80 km detection layer, with no time spread.
    fn default() -> Self {
        Self {
            record_altitude_m:  80_000.0,
            source_altitude_km: 20.0,
            opening_angle_deg:  180.0,
            beaming:            "Uniform".to_owned(),
            time_sigma_us:      0.0,
            ascii_output:       true,
            flush_threshold:    1_000,
            output_dir:         PathBuf::from("./output_ascii"),
        }
    }
}
