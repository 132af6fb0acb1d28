//! Connectors: slot-indexed routing nodes with a settable status.
//!
//! Every connector variant has a fixed number of slots, each optionally
//! holding a track end, and differs only in which slot pair each status
//! through-routes.  The variants are therefore a tag
//! ([`ConnectorKind`]) plus a tagged status ([`Status`]) rather than a type
//! hierarchy.
//!
//! # Slot layout
//!
//! | Kind               | Slots | Statuses (toggle order) → routed pair          |
//! |--------------------|-------|------------------------------------------------|
//! | `Switch`           | 3     | Go 0–1, Branch 0–2                             |
//! | `ThreeWaySwitch`   | 4     | Go 0–1, BranchLeft 0–2, BranchRight 0–3        |
//! | `SingleSlipSwitch` | 4     | Go1 0–2, Go2 1–3, Branch 0–3                   |
//! | `DoubleSlipSwitch` | 4     | Go1 0–2, Go2 1–3, Branch1 0–3, Branch2 1–2     |
//! | `NarrowSwitch{w}`  | 1 + w | Narrow(i) 0–i for i in 1..=w                   |
//!
//! Slot 0 is the narrow slot of every switch-like kind.

use rn_core::{ConnectorId, TrackEnd};

/// Narrow slot of `Switch`, `ThreeWaySwitch` and `NarrowSwitch`.
pub const NARROW: usize = 0;
/// Straight-through slot of `Switch` and `ThreeWaySwitch`.
pub const STRAIGHT: usize = 1;
/// Diverging slot of a two-way `Switch`.
pub const DIVERGE: usize = 2;
/// Left branch of a `ThreeWaySwitch`.
pub const LEFT: usize = 2;
/// Right branch of a `ThreeWaySwitch`.
pub const RIGHT: usize = 3;

// ── Per-variant statuses ──────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SwitchStatus {
    Go,
    Branch,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThreeWayStatus {
    Go,
    BranchLeft,
    BranchRight,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SingleSlipStatus {
    Go1,
    Go2,
    Branch,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DoubleSlipStatus {
    Go1,
    Go2,
    Branch1,
    Branch2,
}

/// The status of any connector, tagged by variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    Switch(SwitchStatus),
    ThreeWay(ThreeWayStatus),
    SingleSlip(SingleSlipStatus),
    DoubleSlip(DoubleSlipStatus),
    /// Selected wide slot, `1..=wide`.
    Narrow(usize),
}

impl Status {
    /// The slot pair this status through-routes.
    pub fn route(self) -> (usize, usize) {
        match self {
            Status::Switch(SwitchStatus::Go) => (NARROW, STRAIGHT),
            Status::Switch(SwitchStatus::Branch) => (NARROW, DIVERGE),
            Status::ThreeWay(ThreeWayStatus::Go) => (NARROW, STRAIGHT),
            Status::ThreeWay(ThreeWayStatus::BranchLeft) => (NARROW, LEFT),
            Status::ThreeWay(ThreeWayStatus::BranchRight) => (NARROW, RIGHT),
            Status::SingleSlip(SingleSlipStatus::Go1) => (0, 2),
            Status::SingleSlip(SingleSlipStatus::Go2) => (1, 3),
            Status::SingleSlip(SingleSlipStatus::Branch) => (0, 3),
            Status::DoubleSlip(DoubleSlipStatus::Go1) => (0, 2),
            Status::DoubleSlip(DoubleSlipStatus::Go2) => (1, 3),
            Status::DoubleSlip(DoubleSlipStatus::Branch1) => (0, 3),
            Status::DoubleSlip(DoubleSlipStatus::Branch2) => (1, 2),
            Status::Narrow(i) => (NARROW, i),
        }
    }

    /// `true` if `slot` is one of the two routed slots.
    #[inline]
    pub fn routes(self, slot: usize) -> bool {
        let (a, b) = self.route();
        slot == a || slot == b
    }

    /// The routed partner of `slot`, if `slot` is routed.
    pub fn partner(self, slot: usize) -> Option<usize> {
        let (a, b) = self.route();
        if slot == a {
            Some(b)
        } else if slot == b {
            Some(a)
        } else {
            None
        }
    }
}

impl From<SwitchStatus> for Status {
    fn from(s: SwitchStatus) -> Self {
        Status::Switch(s)
    }
}

impl From<ThreeWayStatus> for Status {
    fn from(s: ThreeWayStatus) -> Self {
        Status::ThreeWay(s)
    }
}

impl From<SingleSlipStatus> for Status {
    fn from(s: SingleSlipStatus) -> Self {
        Status::SingleSlip(s)
    }
}

impl From<DoubleSlipStatus> for Status {
    fn from(s: DoubleSlipStatus) -> Self {
        Status::DoubleSlip(s)
    }
}

// ── ConnectorKind ─────────────────────────────────────────────────────────────

/// Which routing variant a connector is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConnectorKind {
    Switch,
    ThreeWaySwitch,
    SingleSlipSwitch,
    DoubleSlipSwitch,
    /// Generic fan: one narrow slot and `wide` branch slots.
    NarrowSwitch { wide: usize },
}

impl ConnectorKind {
    pub fn slot_count(self) -> usize {
        match self {
            ConnectorKind::Switch => 3,
            ConnectorKind::ThreeWaySwitch
            | ConnectorKind::SingleSlipSwitch
            | ConnectorKind::DoubleSlipSwitch => 4,
            ConnectorKind::NarrowSwitch { wide } => 1 + wide,
        }
    }

    /// The fixed narrow slot, for kinds that have one.
    pub fn narrow_slot(self) -> Option<usize> {
        match self {
            ConnectorKind::Switch
            | ConnectorKind::ThreeWaySwitch
            | ConnectorKind::NarrowSwitch { .. } => Some(NARROW),
            ConnectorKind::SingleSlipSwitch | ConnectorKind::DoubleSlipSwitch => None,
        }
    }

    /// Every valid status, in toggle order.  The first entry is the status a
    /// freshly created connector starts in.
    pub fn statuses(self) -> Vec<Status> {
        match self {
            ConnectorKind::Switch => {
                vec![SwitchStatus::Go.into(), SwitchStatus::Branch.into()]
            }
            ConnectorKind::ThreeWaySwitch => vec![
                ThreeWayStatus::Go.into(),
                ThreeWayStatus::BranchLeft.into(),
                ThreeWayStatus::BranchRight.into(),
            ],
            ConnectorKind::SingleSlipSwitch => vec![
                SingleSlipStatus::Go1.into(),
                SingleSlipStatus::Go2.into(),
                SingleSlipStatus::Branch.into(),
            ],
            ConnectorKind::DoubleSlipSwitch => vec![
                DoubleSlipStatus::Go1.into(),
                DoubleSlipStatus::Go2.into(),
                DoubleSlipStatus::Branch1.into(),
                DoubleSlipStatus::Branch2.into(),
            ],
            ConnectorKind::NarrowSwitch { wide } => (1..=wide).map(Status::Narrow).collect(),
        }
    }

    /// The status a new connector of this kind starts in.
    pub fn default_status(self) -> Status {
        match self {
            ConnectorKind::Switch => SwitchStatus::Go.into(),
            ConnectorKind::ThreeWaySwitch => ThreeWayStatus::Go.into(),
            ConnectorKind::SingleSlipSwitch => SingleSlipStatus::Go1.into(),
            ConnectorKind::DoubleSlipSwitch => DoubleSlipStatus::Go1.into(),
            ConnectorKind::NarrowSwitch { .. } => Status::Narrow(1),
        }
    }

    /// `true` if `status` belongs to this kind.
    pub fn accepts(self, status: Status) -> bool {
        match (self, status) {
            (ConnectorKind::Switch, Status::Switch(_))
            | (ConnectorKind::ThreeWaySwitch, Status::ThreeWay(_))
            | (ConnectorKind::SingleSlipSwitch, Status::SingleSlip(_))
            | (ConnectorKind::DoubleSlipSwitch, Status::DoubleSlip(_)) => true,
            (ConnectorKind::NarrowSwitch { wide }, Status::Narrow(i)) => (1..=wide).contains(&i),
            _ => false,
        }
    }

    /// The status following `status` in toggle order (wrapping).
    pub fn next_status(self, status: Status) -> Status {
        let all = self.statuses();
        let pos = all.iter().position(|s| *s == status).unwrap_or(0);
        all[(pos + 1) % all.len()]
    }
}

// ── Connector ─────────────────────────────────────────────────────────────────

/// A routing node in the network arena.
///
/// Mutation goes through [`TrackNetwork`](crate::TrackNetwork) so the
/// couplings implied by the current status stay consistent.
#[derive(Clone, Debug)]
pub struct Connector {
    pub(crate) id: ConnectorId,
    pub(crate) kind: ConnectorKind,
    pub(crate) status: Status,
    pub(crate) slots: Vec<Option<TrackEnd>>,
}

impl Connector {
    pub(crate) fn new(id: ConnectorId, kind: ConnectorKind) -> Self {
        Self {
            id,
            kind,
            status: kind.default_status(),
            slots: vec![None; kind.slot_count()],
        }
    }

    pub fn id(&self) -> ConnectorId {
        self.id
    }

    pub fn kind(&self) -> ConnectorKind {
        self.kind
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Contents of slot `i`; `None` for an empty or non-existent slot.
    pub fn slot(&self, i: usize) -> Option<TrackEnd> {
        self.slots.get(i).copied().flatten()
    }

    /// Slot index holding `end`, if any.
    pub fn slot_of(&self, end: TrackEnd) -> Option<usize> {
        self.slots.iter().position(|s| *s == Some(end))
    }

    /// The pair of track ends currently through-routed, if both slots are
    /// filled.
    pub fn routed_ends(&self) -> Option<(TrackEnd, TrackEnd)> {
        let (a, b) = self.status.route();
        Some((self.slot(a)?, self.slot(b)?))
    }
}
