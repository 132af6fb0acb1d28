//! `rn-core` — foundational value types for the `railnet` track-network engine.
//!
//! This crate is a dependency of every other `rn-*` crate.  It intentionally
//! has no `rn-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`ids`]     | `TrackId`, `ConnectorId`, `SensorId`, `SignalId`, `OwnerId` |
//! | [`units`]   | `Length`, `Angle`, `Interval`, `FormatConfig`               |
//! | [`geo`]     | `Vec3`, `Frame`                                             |
//! | [`ends`]    | `EndType`, `TrackEnd`, `Orientation`, `TrackLocation`       |
//! | [`config`]  | `NetworkConfig`                                             |
//! | [`error`]   | `ErrorKind`                                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod ends;
pub mod error;
pub mod geo;
pub mod ids;
pub mod units;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::NetworkConfig;
pub use ends::{EndType, Orientation, TrackEnd, TrackLocation};
pub use error::{ErrorKind, ParseEnumError};
pub use geo::{Frame, Vec3};
pub use ids::{ConnectorId, OwnerId, SensorId, SignalId, TrackId};
pub use units::{Angle, FormatConfig, Interval, Length, LengthUnit};
