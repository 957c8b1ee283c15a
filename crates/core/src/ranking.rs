// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Proximity ranking of eligible candidates.

use crate::candidate::{Candidate, RankedCandidate};
use angkut_domain::{Coordinate, distance_km};

/// Two distances within this tolerance (kilometers) are treated as equal
/// and the tie is broken by the numerically smaller officer id.
pub const DISTANCE_TIE_TOLERANCE_KM: f64 = 1e-6;

/// Orders candidates by distance from the request location, nearest first.
///
/// Ties within [`DISTANCE_TIE_TOLERANCE_KM`] prefer the candidate with the
/// numerically smaller officer id, keeping assignment deterministic. No
/// maximum-radius cutoff is applied: any eligible candidate, however far,
/// is considered. The full ranking is returned so callers can layer a
/// radius policy later without touching the filter.
#[must_use]
pub fn rank(location: Coordinate, candidates: Vec<Candidate>) -> Vec<RankedCandidate> {
    let mut ranked: Vec<RankedCandidate> = candidates
        .into_iter()
        .map(|candidate| {
            let distance: f64 = distance_km(location, candidate.anchor);
            RankedCandidate {
                candidate,
                distance_km: distance,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        if (a.distance_km - b.distance_km).abs() < DISTANCE_TIE_TOLERANCE_KM {
            a.candidate.officer.id.cmp(&b.candidate.officer.id)
        } else {
            a.distance_km.total_cmp(&b.distance_km)
        }
    });

    ranked
}
