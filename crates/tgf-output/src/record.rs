//! Plain data for one detected-particle event.

/// Attributes of one particle crossing the detection layer, as handed over
/// by the stepping code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionRecord {
    /// PDG particle code (22 photon, 11 electron, -11 positron).
    pub pdg_code: i32,
    /// Track identifier within the event.
    pub track_id: i32,
    /// Event number within the run.
    pub event_nb: i32,
    /// Detection time, seconds.
    pub time_s: f64,
    /// Kinetic energy, keV.
    pub energy_kev: f64,
    /// Radial distance from the source axis, kilometres.
    pub radial_dist_km: f64,
    /// ECEF position, metres.
    pub ecef_x_m: f64,
    pub ecef_y_m: f64,
    pub ecef_z_m: f64,
    /// Momentum direction components (unit vector).
    pub mom_x: f64,
    pub mom_y: f64,
    pub mom_z: f64,
    /// Geodetic latitude / longitude, degrees.
    pub lat_deg: f64,
    pub lon_deg: f64,
    /// Altitude above the ellipsoid, metres.
    pub alt_m: f64,
}

impl DetectionRecord {
    /// Altitude converted to kilometres (stepping code hands over metres).
    #[inline]
    pub fn altitude_km(&self) -> f64 {
        self.alt_m / 1000.0
    }
}
