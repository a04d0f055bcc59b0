//! Run-unique identifier generation.
//!
//! Every simulation execution draws one `RunId` at startup; it namespaces
//! the run's output files so parallel batch jobs writing into the same
//! directory never clobber each other.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A positive integer unique to one simulation execution.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunId(pub i64);

impl RunId {
    /// Generate a fresh id from wall-clock microseconds mixed with 20 bits
    /// of OS entropy.  Colliding requires two runs to start within the same
    /// microsecond and draw the same salt.
    pub fn generate() -> RunId {
        let micros = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as u64)
            .unwrap_or(0);
        let salt = SmallRng::from_entropy().r#gen::<u64>() & 0xF_FFFF;
        RunId((((micros << 20) | salt) & i64::MAX as u64) as i64)
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
