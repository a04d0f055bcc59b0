//! `tgf-core` — foundational types for the TGF propagation output pipeline.
//!
//! This crate is a dependency of every other `tgf-*` crate.  It intentionally
//! has no `tgf-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                       |
//! |--------------|------------------------------------------------|
//! | [`beaming`]  | `BeamingType` (uniform vs. Gaussian source)    |
//! | [`ids`]      | `RunId` and its generator                      |
//! | [`settings`] | `SourceSettings`                               |
//! | [`error`]    | `CoreError`, `CoreResult`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod beaming;
pub mod error;
pub mod ids;
pub mod settings;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use beaming::BeamingType;
pub use error::{CoreError, CoreResult};
pub use ids::RunId;
pub use settings::SourceSettings;
