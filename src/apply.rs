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

#[cfg(test)]
mod tests;

use std::hash::Hash;

use crate::cost_cache::CostCache;
use crate::cost_fn::CostFunction;
use crate::insertion;
use crate::schedule::{Row, Schedule};
use crate::swap::Swap;

/// Outcome of attempting [`apply_swap`].
pub enum SwapOutcome<T> {
    Accepted { schedule: Schedule<T>, delta: f64 },
    Rejected,
}

impl<T> SwapOutcome<T> {
    pub fn accepted(self) -> Option<Schedule<T>> {
        match self {
            SwapOutcome::Accepted { schedule, .. } => Some(schedule),
            SwapOutcome::Rejected => None,
        }
    }
}

/// C5: builds the candidate schedule for `swap` and accepts it only if the resulting
/// change in objective is strictly below `threshold`.
///
/// Panics if `swap` violates a C3-guaranteed precondition (missing item on an inter-row
/// removal, or an occurrence count that disagrees with `insertion_indices`) — per
/// `spec.md` §7, these are programmer errors, not recoverable outcomes.
pub fn apply_swap<T, C, F>(
    schedule: &Schedule<T>,
    swap: &Swap<T>,
    threshold: f64,
    context: &C,
    cache: &mut CostCache<T, C, F>,
) -> SwapOutcome<T>
where
    T: Clone + Eq + Hash,
    F: CostFunction<T, C>,
{
    if swap.is_intra_row() {
        apply_intra_row(schedule, swap, threshold, context, cache)
    } else {
        apply_inter_row(schedule, swap, threshold, context, cache)
    }
}

fn apply_intra_row<T, C, F>(
    schedule: &Schedule<T>,
    swap: &Swap<T>,
    threshold: f64,
    context: &C,
    cache: &mut CostCache<T, C, F>,
) -> SwapOutcome<T>
where
    T: Clone + Eq + Hash,
    F: CostFunction<T, C>,
{
    let row = schedule.row(swap.from_row);
    let without_item: Vec<T> = row.iter().filter(|x| **x != swap.item).cloned().collect();
    let candidate: Vec<T> = insertion::insert(&without_item, &swap.insertion_indices, &swap.item)
        .expect("swap produced by the C3 enumerator must satisfy the C2 preconditions");
    let candidate_row: Row<T> = Row::from(candidate);

    if candidate_row == *row {
        // invariant 4: no-op swaps are filtered even if one slipped through C3.
        return SwapOutcome::Rejected;
    }

    let new_cost = cache.cost(context, swap.from_row, &candidate_row);
    let delta = new_cost - schedule.row_cost(swap.from_row);

    if delta < threshold {
        SwapOutcome::Accepted {
            schedule: schedule.with_row(swap.from_row, candidate_row, new_cost, delta),
            delta,
        }
    } else {
        SwapOutcome::Rejected
    }
}

fn apply_inter_row<T, C, F>(
    schedule: &Schedule<T>,
    swap: &Swap<T>,
    threshold: f64,
    context: &C,
    cache: &mut CostCache<T, C, F>,
) -> SwapOutcome<T>
where
    T: Clone + Eq + Hash,
    F: CostFunction<T, C>,
{
    let from_row = schedule.row(swap.from_row);
    let occurrence_count = from_row.iter().filter(|x| **x == swap.item).count();
    assert!(
        occurrence_count > 0,
        "inter-row swap names row {} as the source but the item does not occur there",
        swap.from_row
    );
    assert_eq!(
        occurrence_count,
        swap.insertion_indices.len(),
        "inter-row swap occurrence count ({occurrence_count}) disagrees with the number of insertion indices ({})",
        swap.insertion_indices.len()
    );

    let r_from: Row<T> = from_row.iter().filter(|x| **x != swap.item).cloned().collect();

    let to_row = schedule.row(swap.to_row);
    let to_row_vec: Vec<T> = to_row.iter().cloned().collect();
    let r_to_vec = insertion::insert(&to_row_vec, &swap.insertion_indices, &swap.item)
        .expect("swap produced by the C3 enumerator must satisfy the C2 preconditions");
    let r_to: Row<T> = Row::from(r_to_vec);

    let cost_from = cache.cost(context, swap.from_row, &r_from);
    let cost_to = cache.cost(context, swap.to_row, &r_to);

    let delta_a = cost_from - schedule.row_cost(swap.from_row);
    let delta_b = cost_to - schedule.row_cost(swap.to_row);
    let delta = delta_a + delta_b;

    if delta < threshold {
        SwapOutcome::Accepted {
            schedule: schedule.with_two_rows(
                swap.from_row,
                r_from,
                cost_from,
                swap.to_row,
                r_to,
                cost_to,
                delta,
            ),
            delta,
        }
    } else {
        SwapOutcome::Rejected
    }
}
