use rn_core::{ErrorKind, Interval, Length, TrackEnd};
use rn_network::NetworkError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location is not bound to a track")]
    Unbound,

    #[error("value {0} is not finite")]
    NonFinite(Length),

    #[error("reservation owner must be a valid id")]
    InvalidOwner,

    #[error("dead end at {end}")]
    DeadEnd { end: TrackEnd },

    #[error("range {range} does not cover any reachable track")]
    ReservationOutOfRange { range: Interval },

    #[error(transparent)]
    Network(#[from] NetworkError),
}

impl LocationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LocationError::Unbound
            | LocationError::NonFinite(_)
            | LocationError::InvalidOwner => ErrorKind::InvalidArgument,
            LocationError::DeadEnd { .. } => ErrorKind::NotFound,
            LocationError::ReservationOutOfRange { .. } => ErrorKind::OutOfRange,
            LocationError::Network(e) => e.kind(),
        }
    }
}

pub type LocationResult<T> = Result<T, LocationError>;
