//! Network-wide configuration.

use crate::Length;

/// Tunables shared by every operation on one network.
///
/// Typically built once by the application and handed to
/// `TrackNetwork::with_config`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkConfig {
    /// Tolerance for every boundary and equality comparison between arc
    /// lengths.  A reservation bound must exceed a track end by more than
    /// this before it spills onto the neighbouring track, and tracks must be
    /// strictly longer than it.  Default: 1 µm.
    pub epsilon_length: Length,
}

impl NetworkConfig {
    pub fn with_epsilon(epsilon_length: Length) -> Self {
        Self { epsilon_length }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { epsilon_length: Length::EPSILON }
    }
}
