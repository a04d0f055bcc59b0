//! `tgf-output` — detected-particle output recording for the TGF
//! propagation simulation.
//!
//! One backend: a whitespace-delimited ASCII file, one detected particle per
//! line, every float in fixed scientific notation.  Lines are accumulated in
//! an in-memory buffer and appended to the per-run file in bounded batches;
//! [`AsciiWriter::finish`] drains the remainder at end of run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tgf_core::{RunId, SourceSettings};
//! use tgf_output::AsciiWriter;
//!
//! let settings = SourceSettings::default();
//! let mut writer = AsciiWriter::new(RunId::generate(), &settings)?;
//! for hit in detections {
//!     writer.record(&hit)?;
//! }
//! writer.finish()?;
//! println!("recorded {} particles", writer.recorded_count());
//! ```

pub mod error;
pub mod format;
pub mod record;
pub mod writer;


pub use error::{OutputError, OutputResult};
pub use record::DetectionRecord;
pub use writer::AsciiWriter;
