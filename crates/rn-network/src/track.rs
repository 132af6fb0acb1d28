//! A single track segment: length, two ends, optional geometry, and the
//! things placed along it.

use rn_core::{
    ConnectorId, EndType, Frame, Interval, Length, SensorId, SignalId, TrackEnd, TrackId,
    TrackLocation,
};

use crate::{Curve, Ledger};

/// Coupling state of one track end.
///
/// `coupled` is the only thing movement looks at.  `slot` records connector
/// membership; while the end sits in a routed slot the connector keeps
/// `coupled` pointing at the routed partner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EndState {
    pub coupled: Option<TrackEnd>,
    pub slot: Option<(ConnectorId, usize)>,
}

impl EndState {
    /// Neither coupled nor in a connector.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.coupled.is_none() && self.slot.is_none()
    }
}

/// A sensor covering an interval of its host track.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SensorPlacement {
    pub id: SensorId,
    pub interval: Interval,
}

/// A signal at a point of its host track, governing travel in the direction
/// of `location.orientation`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SignalPlacement {
    pub id: SignalId,
    pub location: TrackLocation,
}

/// One segment of the network.  Created and mutated only through
/// [`TrackNetwork`](crate::TrackNetwork).
#[derive(Debug)]
pub struct Track {
    pub(crate) id: TrackId,
    pub(crate) length: Length,
    pub(crate) curve: Option<Box<dyn Curve>>,
    pub(crate) front: EndState,
    pub(crate) end: EndState,
    pub(crate) sensors: Vec<SensorPlacement>,
    pub(crate) signals: Vec<SignalPlacement>,
    pub(crate) ledger: Ledger,
}

impl Track {
    pub(crate) fn new(id: TrackId, length: Length) -> Self {
        Self {
            id,
            length,
            curve: None,
            front: EndState::default(),
            end: EndState::default(),
            sensors: Vec::new(),
            signals: Vec::new(),
            ledger: Ledger::default(),
        }
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    pub fn length(&self) -> Length {
        self.length
    }

    pub fn has_geometry(&self) -> bool {
        self.curve.is_some()
    }

    /// Frame at `parameter`, if geometry is attached.
    pub fn frame(&self, parameter: Length) -> Option<Frame> {
        let s = parameter.max(Length::ZERO).min(self.length);
        self.curve.as_ref().map(|c| c.frame(s))
    }

    pub fn end_state(&self, end: EndType) -> &EndState {
        match end {
            EndType::Front => &self.front,
            EndType::End => &self.end,
        }
    }

    pub(crate) fn end_state_mut(&mut self, end: EndType) -> &mut EndState {
        match end {
            EndType::Front => &mut self.front,
            EndType::End => &mut self.end,
        }
    }

    /// Parameter value of `end`.
    #[inline]
    pub fn end_parameter(&self, end: EndType) -> Length {
        match end {
            EndType::Front => Length::ZERO,
            EndType::End => self.length,
        }
    }

    /// `true` if `parameter` lies in `[0, length]`.
    #[inline]
    pub fn in_range(&self, parameter: Length) -> bool {
        Length::ZERO <= parameter && parameter <= self.length
    }

    pub fn sensors(&self) -> &[SensorPlacement] {
        &self.sensors
    }

    pub fn signals(&self) -> &[SignalPlacement] {
        &self.signals
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}
