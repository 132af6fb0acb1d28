//! Per-track reservation ledger and overlap detection.
//!
//! Each track keeps a [`Ledger`]: owner → sorted, pairwise-disjoint closed
//! intervals in the track's own parameter coordinates.  A reservation that
//! spans several tracks is simply one piece per track; the pieces are tied
//! together only by touching the shared track ends.
//!
//! Walking a reservation across tracks (reserve, query, delete) lives in
//! `rn-location`, because it starts from a cursor.  This module holds the
//! storage plus the network-wide views: [`TrackNetwork::overlaps`],
//! [`TrackNetwork::overlaps_from`] and [`TrackNetwork::clear_reservations`].

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use rn_core::{EndType, Interval, Length, OwnerId, TrackEnd, TrackId};

use crate::{NetworkResult, Track, TrackNetwork};

// ── Ledger ────────────────────────────────────────────────────────────────────

/// Owner → committed intervals on one track.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    entries: BTreeMap<OwnerId, Vec<Interval>>,
}

impl Ledger {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn owners(&self) -> impl Iterator<Item = OwnerId> + '_ {
        self.entries.keys().copied()
    }

    /// Committed intervals of `owner`, sorted by `near`.
    pub fn intervals(&self, owner: OwnerId) -> &[Interval] {
        self.entries.get(&owner).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (OwnerId, &[Interval])> + '_ {
        self.entries.iter().map(|(o, v)| (*o, v.as_slice()))
    }

    /// Add `iv` for `owner`, merging with any of the owner's intervals it
    /// touches so the list stays disjoint.
    pub fn commit(&mut self, owner: OwnerId, iv: Interval, eps: Length) {
        let list = self.entries.entry(owner).or_default();
        let mut merged = iv.normalized();
        list.retain(|existing| {
            if existing.touches(merged, eps) {
                merged = merged.hull(*existing);
                false
            } else {
                true
            }
        });
        let at = list.partition_point(|e| e.near < merged.near);
        list.insert(at, merged);
    }

    /// `true` if any interval of `owner` (any owner for `None`) intersects
    /// `iv`.
    pub fn is_reserved(&self, owner: Option<OwnerId>, iv: Interval) -> bool {
        let iv = iv.normalized();
        match owner {
            Some(o) => self.intervals(o).iter().any(|e| e.intersects(iv)),
            None => self.entries.values().flatten().any(|e| e.intersects(iv)),
        }
    }

    /// `true` if an interval of `owner` reaches within `eps` of `at`.
    pub fn has_touching(&self, owner: OwnerId, at: Length, eps: Length) -> bool {
        self.intervals(owner).iter().any(|e| e.touches(Interval::point(at), eps))
    }

    /// Remove and return every interval of `owner` intersecting `iv`.
    pub fn remove_intersecting(&mut self, owner: OwnerId, iv: Interval) -> Vec<Interval> {
        let iv = iv.normalized();
        self.remove_where(owner, |e| e.intersects(iv))
    }

    /// Remove and return every interval of `owner` reaching within `eps` of
    /// `at`.
    pub fn remove_touching(&mut self, owner: OwnerId, at: Length, eps: Length) -> Vec<Interval> {
        self.remove_where(owner, |e| e.touches(Interval::point(at), eps))
    }

    /// Drop everything `owner` holds here; returns the number of intervals.
    pub fn clear_owner(&mut self, owner: OwnerId) -> usize {
        self.entries.remove(&owner).map_or(0, |v| v.len())
    }

    fn remove_where(&mut self, owner: OwnerId, pred: impl Fn(&Interval) -> bool) -> Vec<Interval> {
        let Some(list) = self.entries.get_mut(&owner) else {
            return Vec::new();
        };
        let (removed, kept): (Vec<Interval>, Vec<Interval>) =
            list.iter().copied().partition(|e| pred(e));
        if kept.is_empty() {
            self.entries.remove(&owner);
        } else {
            *list = kept;
        }
        removed
    }
}

// ── Overlap ───────────────────────────────────────────────────────────────────

/// A collision between the reservation of `for_id` and that of `with_id`.
///
/// `for_near` / `for_far` say whether the low-parameter / high-parameter end
/// of `for_id`'s reservation lies inside `with_id`'s; `with_near` /
/// `with_far` are the same from the other side.  Ends that merely sit at a
/// track boundary where the reservation continues onto the neighbour are not
/// ends and never set a flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Overlap {
    pub for_id: OwnerId,
    pub with_id: OwnerId,
    pub for_near: bool,
    pub for_far: bool,
    pub with_near: bool,
    pub with_far: bool,
}

impl Overlap {
    fn empty(for_id: OwnerId, with_id: OwnerId) -> Self {
        Self { for_id, with_id, for_near: false, for_far: false, with_near: false, with_far: false }
    }

    /// The same collision seen from `with_id`'s side.
    pub fn mirrored(&self) -> Overlap {
        Overlap {
            for_id: self.with_id,
            with_id: self.for_id,
            for_near: self.with_near,
            for_far: self.with_far,
            with_near: self.for_near,
            with_far: self.for_far,
        }
    }

    fn absorb(&mut self, other: &Overlap) {
        self.for_near |= other.for_near;
        self.for_far |= other.for_far;
        self.with_near |= other.with_near;
        self.with_far |= other.with_far;
    }
}

// ── Network-wide views ────────────────────────────────────────────────────────

impl TrackNetwork {
    /// Every collision between `owner`'s reservations and anybody else's,
    /// across the whole network, one entry per colliding owner.
    pub fn overlaps(&self, owner: OwnerId) -> Vec<Overlap> {
        let tracks: Vec<TrackId> = self.track_ids().collect();
        self.collect_overlaps(owner, &tracks)
    }

    /// Collisions of the contiguous reservation `owner` holds on `track`,
    /// following it across every track end it continues over.
    pub fn overlaps_from(&self, track: TrackId, owner: OwnerId) -> NetworkResult<Vec<Overlap>> {
        let tracks = self.reservation_tracks(track, owner)?;
        Ok(self.collect_overlaps(owner, &tracks))
    }

    /// Tracks covered by the contiguous reservation `owner` holds on `start`
    /// (empty if it holds none there).
    pub fn reservation_tracks(
        &self,
        start: TrackId,
        owner: OwnerId,
    ) -> NetworkResult<Vec<TrackId>> {
        let eps = self.epsilon();
        let first = self.track(start)?;
        if first.ledger.intervals(owner).is_empty() {
            return Ok(Vec::new());
        }

        let mut seen = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(id) = queue.pop_front() {
            let track = self.track(id)?;
            for end in [EndType::Front, EndType::End] {
                if !touches_end(track, owner, end, eps) {
                    continue;
                }
                if let Some(next) = self.continuation(track, end, owner)? {
                    if seen.insert(next.track) {
                        queue.push_back(next.track);
                    }
                }
            }
        }
        Ok(seen.into_iter().collect())
    }

    /// Remove every reservation of `owner` on every track.  Returns the
    /// number of intervals dropped.
    pub fn clear_reservations(&mut self, owner: OwnerId) -> usize {
        let n = self
            .tracks
            .iter_mut()
            .flatten()
            .map(|t| t.ledger.clear_owner(owner))
            .sum();
        log::debug!("cleared {n} reservation pieces of {owner}");
        n
    }

    /// The neighbour end across `end` if `owner`'s reservation continues
    /// there.
    fn continuation(
        &self,
        track: &Track,
        end: EndType,
        owner: OwnerId,
    ) -> NetworkResult<Option<TrackEnd>> {
        let Some(next) = track.end_state(end).coupled else {
            return Ok(None);
        };
        let neighbour = self.track(next.track)?;
        let at = neighbour.end_parameter(next.end);
        Ok(neighbour.ledger.has_touching(owner, at, self.epsilon()).then_some(next))
    }

    /// `true` if the piece end at `x` is a real end of the reservation, not a
    /// seam where it carries on over a track boundary.
    fn is_true_end(&self, track: &Track, owner: OwnerId, x: Length) -> bool {
        let eps = self.epsilon();
        for end in [EndType::Front, EndType::End] {
            if x.approx_eq(track.end_parameter(end), eps)
                && matches!(self.continuation(track, end, owner), Ok(Some(_)))
            {
                return false;
            }
        }
        true
    }

    fn collect_overlaps(&self, owner: OwnerId, tracks: &[TrackId]) -> Vec<Overlap> {
        let eps = self.epsilon();
        let mut found: BTreeMap<OwnerId, Overlap> = BTreeMap::new();

        for track in tracks.iter().filter_map(|id| self.track(*id).ok()) {
            for f in track.ledger.intervals(owner) {
                let f_near = self.is_true_end(track, owner, f.near);
                let f_far = self.is_true_end(track, owner, f.far);
                let f_wide = Interval::new(f.near - eps, f.far + eps);

                for (other, pieces) in track.ledger.iter().filter(|(o, _)| *o != owner) {
                    for w in pieces.iter().filter(|w| w.intersects(*f)) {
                        let w_wide = Interval::new(w.near - eps, w.far + eps);
                        let hit = Overlap {
                            for_id: owner,
                            with_id: other,
                            for_near: f_near && w_wide.contains(f.near),
                            for_far: f_far && w_wide.contains(f.far),
                            with_near: self.is_true_end(track, other, w.near)
                                && f_wide.contains(w.near),
                            with_far: self.is_true_end(track, other, w.far)
                                && f_wide.contains(w.far),
                        };
                        found
                            .entry(other)
                            .or_insert_with(|| Overlap::empty(owner, other))
                            .absorb(&hit);
                    }
                }
            }
        }
        found.into_values().collect()
    }
}

/// `true` if one of `owner`'s pieces on `track` reaches `end`.
fn touches_end(track: &Track, owner: OwnerId, end: EndType, eps: Length) -> bool {
    track.ledger.has_touching(owner, track.end_parameter(end), eps)
}
