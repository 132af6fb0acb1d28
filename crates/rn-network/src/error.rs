//! Network error type.

use thiserror::Error;

use rn_core::{
    ConnectorId, ErrorKind, Interval, Length, SensorId, SignalId, TrackEnd, TrackId,
};

use crate::Status;

/// Errors produced by `rn-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("track {0} not found")]
    TrackNotFound(TrackId),

    #[error("connector {0} not found")]
    ConnectorNotFound(ConnectorId),

    #[error("sensor {0} not found")]
    SensorNotFound(SensorId),

    #[error("signal {0} not found")]
    SignalNotFound(SignalId),

    #[error("track {0} has no geometry attached")]
    NoGeometry(TrackId),

    #[error("parameter {parameter} out of range [0, {length}] on {track}")]
    ParameterOutOfRange { track: TrackId, parameter: Length, length: Length },

    #[error("interval {interval} out of range on {track}")]
    IntervalOutOfRange { track: TrackId, interval: Interval },

    #[error("track length {length} must be finite and longer than {epsilon}")]
    InvalidLength { length: Length, epsilon: Length },

    #[error("cannot couple {0} to itself")]
    SelfCoupling(TrackEnd),

    #[error("slot {slot} does not exist on {connector} ({slots} slots)")]
    NoSuchSlot { connector: ConnectorId, slot: usize, slots: usize },

    #[error("{status:?} is not a valid status for {connector}")]
    StatusMismatch { connector: ConnectorId, status: Status },

    #[error("a narrow switch needs at least 2 wide slots, got {0}")]
    TooFewSlots(usize),

    #[error("{0} is already coupled to {1}")]
    AlreadyCoupled(TrackEnd, TrackEnd),

    #[error("slot {slot} of {connector} already holds {occupant}")]
    SlotOccupied { connector: ConnectorId, slot: usize, occupant: TrackEnd },

    #[error("{end} already sits in slot {slot} of {connector}")]
    EndInConnector { end: TrackEnd, connector: ConnectorId, slot: usize },

    #[error("geometry already attached to {0}")]
    GeometryAttached(TrackId),
}

impl NetworkError {
    /// Classify into the shared taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            NetworkError::TrackNotFound(_)
            | NetworkError::ConnectorNotFound(_)
            | NetworkError::SensorNotFound(_)
            | NetworkError::SignalNotFound(_)
            | NetworkError::NoGeometry(_) => ErrorKind::NotFound,

            NetworkError::ParameterOutOfRange { .. }
            | NetworkError::IntervalOutOfRange { .. } => ErrorKind::OutOfRange,

            NetworkError::InvalidLength { .. }
            | NetworkError::SelfCoupling(_)
            | NetworkError::NoSuchSlot { .. }
            | NetworkError::StatusMismatch { .. }
            | NetworkError::TooFewSlots(_) => ErrorKind::InvalidArgument,

            NetworkError::AlreadyCoupled(..)
            | NetworkError::SlotOccupied { .. }
            | NetworkError::EndInConnector { .. }
            | NetworkError::GeometryAttached(_) => ErrorKind::LogicConflict,
        }
    }
}

pub type NetworkResult<T> = Result<T, NetworkError>;
