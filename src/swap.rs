use std::fmt;

/// A candidate 2-opt move: relocate every occurrence of `item` out of `from_row` and
/// reinsert it into `to_row` at `insertion_indices` (ascending, against `to_row` with
/// the item already removed when `from_row == to_row`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Swap<T> {
    pub item: T,
    pub from_row: usize,
    pub to_row: usize,
    pub insertion_indices: Vec<usize>,
}

impl<T> Swap<T> {
    pub fn new(item: T, from_row: usize, to_row: usize, insertion_indices: Vec<usize>) -> Swap<T> {
        Swap {
            item,
            from_row,
            to_row,
            insertion_indices,
        }
    }

    pub fn is_intra_row(&self) -> bool {
        self.from_row == self.to_row
    }
}

impl<T: fmt::Display> fmt::Display for Swap<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_intra_row() {
            write!(
                f,
                "move {} within row {} to {:?}",
                self.item, self.from_row, self.insertion_indices
            )
        } else {
            write!(
                f,
                "move {} from row {} to row {} at {:?}",
                self.item, self.from_row, self.to_row, self.insertion_indices
            )
        }
    }
}
