//! `rn-network` — the track coupling graph, switch routing, and reservation
//! ledger.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`network`]   | `TrackNetwork` arena: couple, decouple, `transition_end`   |
//! | [`track`]     | `Track`, `EndState`, sensor and signal placements          |
//! | [`connector`] | `Connector`, `ConnectorKind`, per-variant status enums     |
//! | [`curve`]     | `Curve` trait, `Line`, `Arc`                               |
//! | [`ledger`]    | `Ledger` (per-track owner → intervals), `Overlap`          |
//! | [`observer`]  | `SwitchObserver` completion callbacks                      |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                         |
//!
//! # Topology model
//!
//! Tracks and connectors live in arenas indexed by [`TrackId`] and
//! [`ConnectorId`]; couplings are stored as [`TrackEnd`] values on both sides,
//! so there are no ownership cycles.  A connector never answers "what lies
//! beyond" itself: whenever its status changes it couples the selected slot
//! pair directly, and [`TrackNetwork::transition_end`] only ever reads the
//! direct coupling of a track end.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |
//!
//! [`TrackId`]: rn_core::TrackId
//! [`ConnectorId`]: rn_core::ConnectorId
//! [`TrackEnd`]: rn_core::TrackEnd

pub mod connector;
pub mod curve;
pub mod error;
pub mod ledger;
pub mod network;
pub mod observer;
pub mod track;

#[cfg(test)]
mod tests;

pub use connector::{
    Connector, ConnectorKind, DoubleSlipStatus, SingleSlipStatus, Status, SwitchStatus,
    ThreeWayStatus,
};
pub use curve::{Arc, Curve, Line};
pub use error::{NetworkError, NetworkResult};
pub use ledger::{Ledger, Overlap};
pub use network::TrackNetwork;
pub use observer::{NoopSwitchObserver, SwitchObserver};
pub use track::{EndState, SensorPlacement, SignalPlacement, Track};
