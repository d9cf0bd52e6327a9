//! Unique random selection across section buckets.
//!
//! Callers share one exclusion set between calls so that an entry picked for
//! one bucket is never picked again for another.

use rand::Rng;
use std::collections::HashSet;

use crate::catalog::EntryId;

/// Pick up to `n` entries of `source` not in `excluded`, adding each pick to `excluded`.
///
/// When `n` covers everything available, all available entries are returned in
/// source order. Otherwise indices are drawn uniformly until `n` distinct ones
/// are collected, and picks are returned in draw order.
pub fn sample<R: Rng + ?Sized>(
    rng: &mut R,
    source: &[EntryId],
    n: usize,
    excluded: &mut HashSet<EntryId>,
) -> Vec<EntryId> {
    let available: Vec<EntryId> = source
        .iter()
        .copied()
        .filter(|id| !excluded.contains(id))
        .collect();
    if available.is_empty() || n == 0 {
        return Vec::new();
    }

    if n >= available.len() {
        excluded.extend(available.iter().copied());
        return available;
    }

    let mut taken: HashSet<usize> = HashSet::with_capacity(n);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let idx = rng.gen_range(0..available.len());
        if taken.insert(idx) {
            let id = available[idx];
            out.push(id);
            excluded.insert(id);
        }
    }
    out
}

/// The first `n` entries of `source` not in `excluded`, in source order, added to `excluded`.
pub fn take_unused(source: &[EntryId], n: usize, excluded: &mut HashSet<EntryId>) -> Vec<EntryId> {
    let out: Vec<EntryId> = source
        .iter()
        .copied()
        .filter(|id| !excluded.contains(id))
        .take(n)
        .collect();
    excluded.extend(out.iter().copied());
    out
}
