//! `rn-location` — the cursor that moves over a track network and claims
//! stretches of it.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                       |
//! |-----------------|----------------------------------------------------------------|
//! | [`location`]    | `Location`: bind, resolve, query, frame, distance              |
//! | [`motion`]      | `move_by`, `move_with`, `move_to_end`, `move_transit`          |
//! | [`hooks`]       | `Event`, `SignalTarget`, `MoveContext`, `MoveHooks`, `MoveOutcome` |
//! | [`reservation`] | `reserve`, `is_reserved`, `delete_reservation`, `overlaps`     |
//! | [`error`]       | `LocationError`, `LocationResult<T>`                           |
//!
//! # Crossing a track end
//!
//! A cursor that runs off end `X` of its track with `r` metres left enters
//! the coupled track at end `Y`:
//!
//! ```text
//! Y == Front  ->  parameter = r
//! Y == End    ->  parameter = length - r
//! orientation flips iff X == Y
//! ```
//!
//! The same rule carries a reservation's overhang onto the neighbour.
//!
//! # Re-entrancy
//!
//! Sensor and signal callbacks receive a [`MoveContext`].  A callback that
//! calls [`MoveContext::relocate`] wins: the move in flight stops at once
//! and the location ends up where the callback put it.

pub mod error;
pub mod hooks;
pub mod location;
pub mod motion;
pub mod reservation;


pub use error::{LocationError, LocationResult};
pub use hooks::{Event, MoveContext, MoveHooks, MoveOutcome, SignalTarget};
pub use location::Location;
