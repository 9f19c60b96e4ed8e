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

//! A 2-opt local search engine for multi-route schedules: repeatedly relocates single
//! items between (or within) ordered rows, accepting only swaps that strictly lower a
//! caller-supplied cost, until no accepting swap remains.
//!
//! The engine is generic over the item type and an opaque evaluation context; it knows
//! nothing about what a "route" or "item" represents in the caller's domain.

mod apply;
mod cost_cache;
mod cost_fn;
mod insertion;
mod local_search;
mod neighborhood;
mod rng;
mod schedule;
mod swap;

pub use apply::SwapOutcome;
pub use cost_fn::CostFunction;
pub use local_search::{bfs_opt2, dfs_opt2, Cancellation, Cancelled, SearchListener};
pub use rng::RandomAdaptor;
pub use schedule::{Row, Schedule};
pub use swap::Swap;

pub use insertion::{insert, multichoose, IndexMultisets};
pub use neighborhood::swaps_of;
