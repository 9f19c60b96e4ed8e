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


use std::hash::Hash;
use std::marker::PhantomData;
use std::num::NonZeroUsize;

use lru::LruCache;

use crate::cost_fn::CostFunction;
use crate::schedule::Row;

/// C4: memoizes `evaluator(context, row, sequence) -> cost` over an LRU of bounded size.
///
/// Keyed by the sequence alone, *not* `(row, sequence)` — `spec.md` §9 Design Notes: "Cache
/// keyed by full sequence... sharing identical sequences across rows hits the cache." The
/// engine's evaluators are expected to be row-order-insensitive in the sense the spec
/// requires determinism for; this cache reproduces the source's keying exactly.
pub struct CostCache<T, C, F> {
    cache: LruCache<Row<T>, f64>,
    evaluator: F,
    _context: PhantomData<C>,
}

/// Capacity fixed by `spec.md` §4.4.
pub const CAPACITY: usize = 1000;

impl<T, C, F> CostCache<T, C, F>
where
    T: Eq + Hash + Clone,
    F: CostFunction<T, C>,
{
    pub fn new(evaluator: F) -> CostCache<T, C, F> {
        CostCache {
            cache: LruCache::new(NonZeroUsize::new(CAPACITY).expect("capacity must be nonzero")),
            evaluator,
            _context: PhantomData,
        }
    }

    /// Looks up `sequence` in the cache, marking it MRU on a hit, or evaluates it via the
    /// evaluator and stores it as MRU on a miss, evicting the LRU entry if at capacity.
    pub fn cost(&mut self, context: &C, row: usize, sequence: &Row<T>) -> f64 {
        if let Some(&cost) = self.cache.get(sequence) {
            return cost;
        }
        let as_vec: Vec<T> = sequence.iter().cloned().collect();
        let cost = self.evaluator.evaluate(context, row, &as_vec);
        self.cache.put(sequence.clone(), cost);
        cost
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
