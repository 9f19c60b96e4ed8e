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

/// Count of k-multisubsets of an (n - start + 1)-element set, i.e. `C(n+k-start, k)`.
pub fn multichoose(k: usize, n: usize, start: usize) -> u64 {
    debug_assert!(start <= n, "start ({start}) must not exceed n ({n})");
    binomial((n - start) as u64 + k as u64, k as u64)
}

fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}

/// C1: enumerates, in canonical lexicographically-ascending order, every list of `k`
/// non-decreasing indices drawn from `[start, n]`.
///
/// `k == 0` emits a single empty list. `start == n` emits a single list of `k` copies
/// of `n`. See `spec.md` §4.1 for the incremental advance algorithm this implements.
pub struct IndexMultisets {
    current: Vec<usize>,
    n: usize,
    started: bool,
    remaining: u64,
}

impl IndexMultisets {
    pub fn new(k: usize, n: usize, start: usize) -> IndexMultisets {
        assert!(start <= n, "start ({start}) must not exceed n ({n})");
        let remaining = multichoose(k, n, start);
        IndexMultisets {
            current: vec![start; k],
            n,
            started: false,
            remaining,
        }
    }
}

impl Iterator for IndexMultisets {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.remaining == 0 {
            return None;
        }
        if self.started {
            advance(&mut self.current, self.n);
        }
        self.started = true;
        self.remaining -= 1;
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

/// Scan left-to-right for the first entry equal to `n`; increment the preceding entry
/// and reset it and everything after it to the new value. If no entry equals `n`,
/// increment the last entry.
fn advance(p: &mut [usize], n: usize) {
    match p.iter().position(|&x| x == n) {
        Some(0) => unreachable!("advance called past the last emission"),
        Some(i) => {
            let new_value = p[i - 1] + 1;
            for slot in &mut p[i - 1..] {
                *slot = new_value;
            }
        }
        None => {
            if let Some(last) = p.last_mut() {
                *last += 1;
            }
        }
    }
}

/// C2: inserts `len(indices)` copies of `item` into `list`, interleaved at the given
/// ascending positions.
///
/// `indices` must be non-empty, ascending (duplicates allowed, so several copies can
/// land at the same position), and every entry must lie in `[0, list.len()]`.
pub fn insert<T: Clone>(list: &[T], indices: &[usize], item: &T) -> Result<Vec<T>, String> {
    if indices.is_empty() {
        return Err("insertion indices must not be empty".to_string());
    }
    if indices.windows(2).any(|w| w[0] > w[1]) {
        return Err(format!("insertion indices must be ascending, got {indices:?}"));
    }
    if let Some(&last) = indices.last() {
        if last > list.len() {
            return Err(format!(
                "insertion index {} is out of range for a list of length {}",
                last,
                list.len()
            ));
        }
    }

    let mut result = Vec::with_capacity(list.len() + indices.len());
    let mut next = 0;
    for (i, x) in list.iter().enumerate() {
        while next < indices.len() && indices[next] == i {
            result.push(item.clone());
            next += 1;
        }
        result.push(x.clone());
    }
    while next < indices.len() {
        result.push(item.clone());
        next += 1;
    }
    Ok(result)
}
