use crate::{
    error::{Err, Result},
    types::VId,
};
use rayon::slice::ParallelSliceMut;

/// Row-offset and column-index arrays.
///
/// Row `r` occupies `ids[offsets[r]..offsets[r + 1]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Csr {
    offsets: Vec<usize>,
    ids: Vec<VId>,
}

impl Csr {
    /// Builds the rows from `(row, id)` pairs.
    ///
    /// Every `row` must be less than `num_rows`.
    pub fn from_pairs(num_rows: usize, pairs: &mut Vec<(VId, VId)>) -> Result<Self> {
        pairs.par_sort_unstable();
        Self::from_sorted_pairs(num_rows, pairs)
    }

    /// Fails with [`Err::TooManyVertices`] when the offsets cannot be allocated.
    pub fn from_sorted_pairs(num_rows: usize, pairs: &[(VId, VId)]) -> Result<Self> {
        Ok(Self::count_rows(zeroed_offsets(num_rows)?, pairs))
    }

    pub fn from_rows(rows: Vec<Vec<VId>>) -> Self {
        let mut offsets = Vec::with_capacity(rows.len() + 1);
        offsets.push(0);
        let mut ids = Vec::with_capacity(rows.iter().map(Vec::len).sum());
        for row in rows {
            ids.extend(row);
            offsets.push(ids.len());
        }
        Self { offsets, ids }
    }

    /// Adopts externally built arrays after checking that the offsets are consistent.
    pub fn from_parts(offsets: Vec<usize>, ids: Vec<VId>) -> Result<Self> {
        match offsets.first() {
            None => return Err(Err::MalformedOffsets(String::from("offsets are empty"))),
            Some(&first) if first != 0 => {
                return Err(Err::MalformedOffsets(format!(
                    "offsets start at {} instead of 0",
                    first
                )))
            }
            _ => (),
        }
        if let Some(row) = offsets.windows(2).position(|w| w[0] > w[1]) {
            return Err(Err::MalformedOffsets(format!(
                "offsets decrease at row {}",
                row
            )));
        }
        let last = offsets[offsets.len() - 1];
        if last != ids.len() {
            return Err(Err::MalformedOffsets(format!(
                "offsets end at {} but there are {} ids",
                last,
                ids.len()
            )));
        }
        Ok(Self { offsets, ids })
    }

    pub fn num_rows(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn num_entries(&self) -> usize {
        self.ids.len()
    }

    pub fn row(&self, row: VId) -> &[VId] {
        &self.ids[self.offsets[row]..self.offsets[row + 1]]
    }

    pub fn rows(&self) -> impl Iterator<Item = (VId, &[VId])> + '_ {
        (0..self.num_rows()).map(move |row| (row, self.row(row)))
    }

    /// Returns the reversed rows: `r` lists `id` iff `id` lists `r` here.
    pub fn transpose(&self) -> Self {
        let mut pairs: Vec<(VId, VId)> = self
            .rows()
            .flat_map(|(row, ids)| ids.iter().map(move |&id| (id, row)))
            .collect();
        pairs.par_sort_unstable();
        Self::count_rows(vec![0; self.offsets.len()], &pairs)
    }
}

// Private methods.
impl Csr {
    /// Turns zeroed `offsets` into prefix sums over sorted `pairs`.
    fn count_rows(mut offsets: Vec<usize>, pairs: &[(VId, VId)]) -> Self {
        let num_rows = offsets.len() - 1;
        for &(row, _) in pairs {
            offsets[row + 1] += 1;
        }
        for row in 0..num_rows {
            offsets[row + 1] += offsets[row];
        }
        Self {
            offsets,
            ids: pairs.iter().map(|&(_, id)| id).collect(),
        }
    }
}

fn zeroed_offsets(num_rows: usize) -> Result<Vec<usize>> {
    let too_many = || Err::TooManyVertices(format!("cannot allocate {} rows", num_rows));
    let len = num_rows.checked_add(1).ok_or_else(too_many)?;
    let mut offsets = Vec::new();
    offsets.try_reserve_exact(len).map_err(|_| too_many())?;
    offsets.resize(len, 0);
    Ok(offsets)
}
