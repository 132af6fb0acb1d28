//! Completion callbacks for connector status changes.

use rn_core::ConnectorId;

use crate::Status;

/// Callbacks invoked by
/// [`TrackNetwork::set_status_observed`][crate::TrackNetwork::set_status_observed]
/// after the new routing has been applied.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct Log(Vec<(ConnectorId, Status)>);
///
/// impl SwitchObserver for Log {
///     fn on_status_changed(&mut self, c: ConnectorId, _prev: Status, now: Status) {
///         self.0.push((c, now));
///     }
/// }
/// ```
pub trait SwitchObserver {
    /// Called once the couplings for `now` are in place.  `previous` equals
    /// `now` when the status was re-applied unchanged.
    fn on_status_changed(&mut self, _connector: ConnectorId, _previous: Status, _now: Status) {}
}

/// A [`SwitchObserver`] that does nothing.
pub struct NoopSwitchObserver;

impl SwitchObserver for NoopSwitchObserver {}
