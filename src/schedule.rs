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


use crate::cost_fn::CostFunction;
use im::Vector;

/// A single row of the schedule: an ordered, possibly-duplicated list of items.
/// Persistent so unchanged rows can be shared between snapshots.
pub type Row<T> = Vector<T>;

/// A schedule: an ordered collection of rows, paired one-to-one with a frozen-prefix
/// start index and a cached per-row cost. The objective is the sum of per-row costs.
///
/// Schedules are immutable snapshots. Every accepted swap produces a new snapshot that
/// shares every row it did not touch with its parent (see [`Schedule::with_rows`]).
#[derive(Clone)]
pub struct Schedule<T> {
    rows: Vec<Row<T>>,
    start_indices: Vec<usize>,
    row_costs: Vec<f64>,
    objective: f64,
}

impl<T: Clone> Schedule<T> {
    /// Builds a schedule from plain rows and start indices, evaluating every row once
    /// to populate the per-row costs and the objective.
    ///
    /// Fails if the row count and start-index count disagree, or if any start index is
    /// out of bounds for its row — both are caller contract violations (`spec.md` §3
    /// invariants 1-2).
    pub fn new<C>(
        rows: Vec<Vec<T>>,
        start_indices: Vec<usize>,
        context: &C,
        evaluator: &impl CostFunction<T, C>,
    ) -> Result<Schedule<T>, String> {
        if rows.len() != start_indices.len() {
            return Err(format!(
                "row count ({}) does not match start-index count ({})",
                rows.len(),
                start_indices.len()
            ));
        }
        for (r, (row, &start)) in rows.iter().zip(start_indices.iter()).enumerate() {
            if start > row.len() {
                return Err(format!(
                    "start index {} for row {} exceeds row length {}",
                    start,
                    r,
                    row.len()
                ));
            }
        }

        let row_costs: Vec<f64> = rows
            .iter()
            .enumerate()
            .map(|(r, row)| evaluator.evaluate(context, r, row))
            .collect();
        let objective = row_costs.iter().sum();
        let rows: Vec<Row<T>> = rows.into_iter().map(Row::from).collect();

        Ok(Schedule {
            rows,
            start_indices,
            row_costs,
            objective,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, r: usize) -> &Row<T> {
        &self.rows[r]
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &Row<T>> {
        self.rows.iter()
    }

    pub fn start_index(&self, r: usize) -> usize {
        self.start_indices[r]
    }

    pub fn start_indices(&self) -> &[usize] {
        &self.start_indices
    }

    pub fn row_cost(&self, r: usize) -> f64 {
        self.row_costs[r]
    }

    pub fn objective(&self) -> f64 {
        self.objective
    }

    /// Returns a new schedule with a single row replaced by `new_row`, whose cost is
    /// `new_cost`. The objective is updated incrementally by `delta` rather than
    /// re-summed, so it stays bit-exact with what the caller already computed.
    pub fn with_row(&self, r: usize, new_row: Row<T>, new_cost: f64, delta: f64) -> Schedule<T> {
        let mut rows = self.rows.clone();
        let mut row_costs = self.row_costs.clone();
        rows[r] = new_row;
        row_costs[r] = new_cost;
        Schedule {
            rows,
            start_indices: self.start_indices.clone(),
            row_costs,
            objective: self.objective + delta,
        }
    }

    /// Returns a new schedule with two rows replaced at once (the inter-row swap case).
    pub fn with_two_rows(
        &self,
        r1: usize,
        row1: Row<T>,
        cost1: f64,
        r2: usize,
        row2: Row<T>,
        cost2: f64,
        delta: f64,
    ) -> Schedule<T> {
        let mut rows = self.rows.clone();
        let mut row_costs = self.row_costs.clone();
        rows[r1] = row1;
        rows[r2] = row2;
        row_costs[r1] = cost1;
        row_costs[r2] = cost2;
        Schedule {
            rows,
            start_indices: self.start_indices.clone(),
            row_costs,
            objective: self.objective + delta,
        }
    }
}
