// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


use std::collections::HashSet;
use std::hash::Hash;

use crate::insertion::IndexMultisets;
use crate::schedule::Schedule;
use crate::swap::Swap;

/// C3: every candidate swap for `schedule`, each emitted exactly once.
///
/// The outer fan-out (distinct items, in first-seen scan order) is computed eagerly — a
/// single linear scan is unavoidable to implement the dedup rule from `spec.md` §4.3.
/// The inner fan-out (insertion positions per candidate `to_row`) stays a genuinely lazy
/// chain over [`IndexMultisets`], since that is where the swap space actually gets large.
pub fn swaps_of<T: Clone + Eq + Hash + 'static>(
    schedule: &Schedule<T>,
) -> Box<dyn Iterator<Item = Swap<T>> + '_> {
    let sources = distinct_items_with_occurrences(schedule);
    let row_count = schedule.row_count();

    Box::new(sources.into_iter().flat_map(move |(item, from_row, occs)| {
        let occ_count = occs.len();
        let to_rows: Vec<usize> = if occ_count == 1 {
            vec![from_row]
        } else {
            (0..row_count).collect()
        };
        // rule 5's identity list is `occs` translated into the row-with-the-item-removed
        // indexing: removing the occurrences before position `occs[i]` shifts it left by
        // `i`. Comparing against raw `occs` instead (full-row positions) misses every case
        // where the frozen prefix holds an earlier occurrence, letting a genuine no-op
        // through.
        let identity_indices: Vec<usize> =
            occs.iter().enumerate().map(|(i, &p)| p - i).collect();

        to_rows.into_iter().flat_map(move |to_row| {
            let row_size = if to_row == from_row {
                schedule.row(to_row).len() - occ_count
            } else {
                schedule.row(to_row).len()
            };
            let start = schedule.start_index(to_row);
            let item = item.clone();
            let identity_indices = identity_indices.clone();

            IndexMultisets::new(occ_count, row_size, start).filter_map(move |indices| {
                if to_row == from_row && indices == identity_indices {
                    None // rule 5: identity swap suppressed
                } else {
                    Some(Swap::new(item.clone(), from_row, to_row, indices))
                }
            })
        })
    }))
}

/// Rule 1-2: scan rows in order, from the start index onward, and record for every
/// distinct item (first seen) its source row and the full list of occurrences of that
/// item *within the source row*, including any occurrence in the frozen prefix.
fn distinct_items_with_occurrences<T: Clone + Eq + Hash>(
    schedule: &Schedule<T>,
) -> Vec<(T, usize, Vec<usize>)> {
    let mut seen: HashSet<T> = HashSet::new();
    let mut sources = Vec::new();

    for r in 0..schedule.row_count() {
        let row = schedule.row(r);
        let start = schedule.start_index(r);
        for j in start..row.len() {
            let item = row[j].clone();
            if !seen.insert(item.clone()) {
                continue;
            }
            let occurrences: Vec<usize> = row
                .iter()
                .enumerate()
                .filter(|(_, x)| **x == item)
                .map(|(i, _)| i)
                .collect();
            sources.push((item, r, occurrences));
        }
    }
    sources
}
