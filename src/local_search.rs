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


use std::fmt;
use std::hash::Hash;

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::apply::{apply_swap, SwapOutcome};
use crate::cost_cache::CostCache;
use crate::cost_fn::CostFunction;
use crate::neighborhood::swaps_of;
use crate::schedule::Schedule;
use crate::swap::Swap;

/// Checked once per candidate swap, never mid-evaluation. A closure `Fn() -> bool`
/// works out of the box via the blanket impl below.
pub trait Cancellation {
    fn is_cancelled(&self) -> bool;
}

impl<F: Fn() -> bool> Cancellation for F {
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// Notified once per accepted swap, with the schedule it produced and its objective.
/// Must not mutate anything it is handed; it only observes the search.
pub trait SearchListener<T> {
    fn notify(&mut self, schedule: &Schedule<T>, objective: f64);
}

impl<T, F: FnMut(&Schedule<T>, f64)> SearchListener<T> for F {
    fn notify(&mut self, schedule: &Schedule<T>, objective: f64) {
        self(schedule, objective)
    }
}

/// Returned when a [`Cancellation`] check trips. No partial schedule is ever attached —
/// the caller gets back only the fact that the search was aborted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "local search was cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// A BFS pass enumerates candidates once against the pass-start schedule and keeps
/// applying accepted swaps to the schedule as it evolves (`spec.md` §4.6 point 3); once an
/// item has been relocated by an earlier swap in the same pass, any later candidate for
/// that same item is no longer valid against the current row contents. Rather than let
/// that reach C5's preconditions (which panic on a genuinely malformed `Swap`), the pass
/// skips swaps it can tell are stale by this point.
fn swap_is_stale<T: Clone + Eq + Hash>(schedule: &Schedule<T>, swap: &Swap<T>) -> bool {
    let occurrence_count = schedule
        .row(swap.from_row)
        .iter()
        .filter(|x| **x == swap.item)
        .count();
    if occurrence_count != swap.insertion_indices.len() {
        return true;
    }
    let to_row_len = schedule.row(swap.to_row).len();
    let available = if swap.is_intra_row() {
        to_row_len - occurrence_count
    } else {
        to_row_len
    };
    matches!(swap.insertion_indices.last(), Some(&last) if last > available)
}

/// Best-improvement local search: within one pass every improving swap encountered is
/// committed immediately (not only the single best one of the pass — see the module-level
/// note in `DESIGN.md` on why this is *not* a bug). Passes repeat until one accepts nothing.
pub fn bfs_opt2<T, C, F>(
    schedule: Schedule<T>,
    context: &C,
    evaluator: F,
    cancellation: &impl Cancellation,
    mut listener: Option<&mut dyn SearchListener<T>>,
) -> Result<Schedule<T>, Cancelled>
where
    T: Clone + Eq + Hash + 'static,
    F: CostFunction<T, C>,
{
    let mut cache = CostCache::new(evaluator);
    let mut best = schedule;

    loop {
        let mut improved_this_pass = false;
        let candidate_swaps: Vec<_> = swaps_of(&best).collect();

        for swap in &candidate_swaps {
            if cancellation.is_cancelled() {
                return Err(Cancelled);
            }
            if swap_is_stale(&best, swap) {
                continue;
            }
            if let SwapOutcome::Accepted { schedule: next, .. } =
                apply_swap(&best, swap, 0.0, context, &mut cache)
            {
                best = next;
                improved_this_pass = true;
                if let Some(listener) = listener.as_deref_mut() {
                    listener.notify(&best, best.objective());
                }
            }
        }

        if !improved_this_pass {
            return Ok(best);
        }
    }
}

/// First-improvement local search: each pass shuffles the candidate swaps with `rng` and
/// restarts the pass as soon as one is accepted, so the search keeps acting on the most
/// recently improved schedule rather than finishing a stale enumeration.
pub fn dfs_opt2<T, C, F, R>(
    schedule: Schedule<T>,
    context: &C,
    evaluator: F,
    rng: &mut R,
    cancellation: &impl Cancellation,
    mut listener: Option<&mut dyn SearchListener<T>>,
) -> Result<Schedule<T>, Cancelled>
where
    T: Clone + Eq + Hash + 'static,
    F: CostFunction<T, C>,
    R: RngCore,
{
    let mut cache = CostCache::new(evaluator);
    let mut best = schedule;

    'pass: loop {
        let mut candidate_swaps: Vec<_> = swaps_of(&best).collect();
        candidate_swaps.shuffle(rng);

        for swap in &candidate_swaps {
            if cancellation.is_cancelled() {
                return Err(Cancelled);
            }
            if let SwapOutcome::Accepted { schedule: next, .. } =
                apply_swap(&best, swap, 0.0, context, &mut cache)
            {
                best = next;
                if let Some(listener) = listener.as_deref_mut() {
                    listener.notify(&best, best.objective());
                }
                continue 'pass;
            }
        }

        return Ok(best);
    }
}
