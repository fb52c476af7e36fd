use std::ops::Range;

use crate::StaticRmq;
use crate::naive::NaiveTable;
use crate::sparse_table::IndexSparseTable;
use crate::util::better_index;
use crate::util::check_query_range;
use crate::util::floor_log2_nonzero;

const NO_SHAPE: usize = usize::MAX;

/// Block decomposition of a ±1 sequence.
///
/// The input is cut into blocks of `max(1, lg(n) / 2)` elements. Two blocks
/// whose consecutive steps agree share one [`NaiveTable`], keyed by the
/// packed step bits, so the aggregate of all shape tables stays sublinear.
/// Block minima go into a super array searched by an [`IndexSparseTable`].
///
/// Stores no values; queries take the value slice as a parameter.
#[derive(Clone, Debug)]
pub(crate) struct PmTable {
    n: usize,
    block_size: usize,
    super_vals: Vec<i64>,
    super_idxs: Vec<usize>,
    super_table: IndexSparseTable,
    block_shapes: Vec<usize>,
    shape_tables: Vec<NaiveTable>,
}

impl PmTable {
    pub(crate) fn new(values: &[i64]) -> Self {
        let n = values.len();
        debug_assert!(n > 0);
        debug_assert!(
            values.windows(2).all(|w| (w[1] - w[0]).abs() == 1),
            "input does not have the ±1 property"
        );

        let block_size = if n == 1 {
            1
        } else {
            ((floor_log2_nonzero(n) as usize) / 2).max(1)
        };
        let blocks_len = n.div_ceil(block_size);

        let mut super_vals = Vec::with_capacity(blocks_len);
        let mut super_idxs = Vec::with_capacity(blocks_len);
        let mut block_shapes = Vec::with_capacity(blocks_len);
        let mut shape_tables = Vec::new();
        let mut shape_memo = vec![NO_SHAPE; 1_usize << (block_size - 1)];
        let mut normalized = Vec::with_capacity(block_size);

        for start in (0..n).step_by(block_size) {
            let end = (start + block_size).min(n);
            let block = &values[start..end];

            let mut best = 0_usize;
            for (i, &v) in block.iter().enumerate().skip(1) {
                if v < block[best] {
                    best = i;
                }
            }
            super_vals.push(block[best]);
            super_idxs.push(start + best);

            // Bit i of the key is set when the block steps up between local
            // positions i and i+1. Only the final block can be short; its key
            // may coincide with a full block's, and the full block's table
            // answers its queries too since the shapes agree on the prefix.
            let mut key = 0_usize;
            for (i, w) in block.windows(2).enumerate() {
                if w[1] > w[0] {
                    key |= 1_usize << i;
                }
            }
            if shape_memo[key] == NO_SHAPE {
                shape_memo[key] = shape_tables.len();
                normalized.clear();
                normalized.extend(block.iter().map(|&v| v - block[0]));
                shape_tables.push(NaiveTable::new(&normalized));
            }
            block_shapes.push(shape_memo[key]);
        }

        let super_table = IndexSparseTable::new(&super_vals);

        Self {
            n,
            block_size,
            super_vals,
            super_idxs,
            super_table,
            block_shapes,
            shape_tables,
        }
    }

    pub(crate) fn argmin_assume_valid(&self, values: &[i64], start: usize, end: usize) -> usize {
        debug_assert!(start < end);
        debug_assert!(end <= self.n);

        let size = self.block_size;
        let last = end - 1;
        let start_block = start / size;
        let start_offset = start % size;
        let last_block = last / size;
        let last_offset = last % size;

        let start_table = &self.shape_tables[self.block_shapes[start_block]];
        if start_block == last_block {
            return start_block * size + start_table.argmin_assume_valid(start_offset, last_offset + 1);
        }

        // Blocks before the last one are always full.
        let left = start_block * size + start_table.argmin_assume_valid(start_offset, size);
        let last_table = &self.shape_tables[self.block_shapes[last_block]];
        let right = last_block * size + last_table.argmin_assume_valid(0, last_offset + 1);
        let mut ans = better_index(values, left, right);

        if start_block + 2 <= last_block {
            let q = self
                .super_table
                .argmin_assume_valid(&self.super_vals, start_block + 1, last_block);
            ans = better_index(values, ans, self.super_idxs[q]);
        }

        ans
    }
}

#[derive(Clone, Debug)]
pub struct PlusMinusOneRmq<'a> {
    values: &'a [i64],
    table: PmTable,
}

impl PlusMinusOneRmq<'_> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<'a> StaticRmq<'a> for PlusMinusOneRmq<'a> {
    fn new(values: &'a [i64]) -> Self {
        assert!(!values.is_empty(), "cannot build an RMQ over an empty input");
        Self {
            values,
            table: PmTable::new(values),
        }
    }

    fn argmin(&self, range: Range<usize>) -> usize {
        check_query_range(self.values.len(), &range);
        self.table
            .argmin_assume_valid(self.values, range.start, range.end)
    }
}
