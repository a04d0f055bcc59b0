//! The buffered ASCII detection-file writer.
//!
//! Lines are formatted eagerly on [`AsciiWriter::record`] and held in an
//! in-memory buffer; once the buffer grows past the configured threshold,
//! every line is appended to the output file in one scoped open-write-close
//! and the buffer is cleared.  [`AsciiWriter::finish`] drains whatever
//! remains at end of run.
//!
//! A failed append never loses lines: the buffer is left untouched and the
//! error is returned, so the next `record` (or `finish`) retries the write.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tgf_core::{RunId, SourceSettings};

use crate::format::sci5;
use crate::record::DetectionRecord;
use crate::OutputResult;

/// Buffered writer for the per-run `detParticles_*.out` file.
///
/// One instance per run, owned by the run controller — constructed at run
/// start, finished at run end.  Callers invoke [`record`][Self::record]
/// sequentially from one thread.
pub struct AsciiWriter {
    run_id:             RunId,
    path:               PathBuf,
    source_altitude_km: f64,
    opening_angle_deg:  f64,
    record_altitude_m:  f64,
    ascii_output:       bool,
    flush_threshold:    usize,
    buffer:             Vec<String>,
    recorded:           u64,
}

impl AsciiWriter {
    /// Create the output directory and the (empty) output file for this run.
    ///
    /// The file name concatenates the run parameters, floats truncated to
    /// integers:
    /// `detParticles_<runId>_<recordAlt>_<sourceAlt>_<openingAngle>_<beaming>_<timeSigma>.out`.
    ///
    /// Fails if the settings are invalid or the file cannot be created.
    pub fn new(run_id: RunId, settings: &SourceSettings) -> OutputResult<Self> {
        settings.validate()?;

        std::fs::create_dir_all(&settings.output_dir)?;

        let file_name = format!(
            "detParticles_{}_{}_{}_{}_{}_{}.out",
            run_id,
            settings.record_altitude_m as i64,
            settings.source_altitude_km as i64,
            settings.opening_angle_deg as i64,
            settings.beaming,
            settings.time_sigma_us as i64,
        );
        let path = settings.output_dir.join(file_name);

        // Truncate any leftover file from a previous run with the same id.
        File::create(&path)?;

        Ok(Self {
            run_id,
            path,
            source_altitude_km: settings.source_altitude_km,
            opening_angle_deg:  settings.opening_angle_deg,
            record_altitude_m:  settings.record_altitude_m,
            ascii_output:       settings.ascii_output,
            flush_threshold:    settings.flush_threshold,
            buffer:             Vec::new(),
            recorded:           0,
        })
    }

    /// Format and buffer one detection, flushing once the buffer has grown
    /// past the threshold.  A no-op when ASCII output is disabled.
    ///
    /// On a flush failure the line is still buffered and counted — only the
    /// disk write is deferred to the next `record` or to [`finish`][Self::finish].
    pub fn record(&mut self, rec: &DetectionRecord) -> OutputResult<()> {
        if !self.ascii_output {
            return Ok(());
        }

        self.buffer.push(self.format_line(rec));
        self.recorded += 1;

        self.flush_if_full()
    }

    /// Drain any remaining buffered lines, regardless of the threshold.
    ///
    /// Call once at end of run.  Idempotent — an empty buffer is a no-op.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        self.flush_buffer()
    }

    /// Cumulative number of records accepted, independent of flush state.
    pub fn recorded_count(&self) -> u64 {
        self.recorded
    }

    /// Lines currently waiting for the next flush.
    pub fn buffered_lines(&self) -> usize {
        self.buffer.len()
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Path of this run's output file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // Field order is fixed by downstream readers: run id, source altitude,
    // opening angle, event number, time, energy, latitude, longitude,
    // record altitude, momentum x/y/z.
    fn format_line(&self, rec: &DetectionRecord) -> String {
        format!(
            "{} {} {} {} {} {} {} {} {} {} {} {}\n",
            self.run_id,
            sci5(self.source_altitude_km),
            sci5(self.opening_angle_deg),
            rec.event_nb,
            sci5(rec.time_s),
            sci5(rec.energy_kev),
            sci5(rec.lat_deg),
            sci5(rec.lon_deg),
            sci5(self.record_altitude_m),
            sci5(rec.mom_x),
            sci5(rec.mom_y),
            sci5(rec.mom_z),
        )
    }

    fn flush_if_full(&mut self) -> OutputResult<()> {
        if self.buffer.len() <= self.flush_threshold {
            return Ok(());
        }
        self.flush_buffer()
    }

    // One scoped open-write-close; the buffer is cleared only after every
    // line reached the file.
    fn flush_buffer(&mut self) -> OutputResult<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        for line in &self.buffer {
            file.write_all(line.as_bytes())?;
        }
        file.flush()?;

        self.buffer.clear();
        Ok(())
    }
}
