use std::collections::{BTreeMap, HashMap};
use std::iter::FusedIterator;

use crate::dense::{DenseVector, DenseVectorMut};
use crate::errors::{Result, SparseVectorError};

/// An immutable sparse vector.
///
/// Stored as two parallel buffers: strictly increasing indices and the values
/// at those indices. Both are allocated once, sized to the number of stored
/// entries. Explicit zeros given at construction are kept, so [`len`](Self::len)
/// and [`l0`](Self::l0) can differ.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    indices: Box<[u32]>,
    values: Box<[f64]>,
}

impl SparseVector {
    /// Create an empty sparse vector.
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Build a sparse vector from indices and values that are already in
    /// canonical form.
    ///
    /// # Arguments
    /// * `indices` - strictly increasing coordinates
    /// * `values` - one value per coordinate
    ///
    /// # Errors
    /// [`SparseVectorError::LengthMismatch`] if the two vectors differ in length,
    /// [`SparseVectorError::UnsortedIndices`] if an index is not greater than the
    /// one before it.
    ///
    pub fn from_parts(indices: Vec<u32>, values: Vec<f64>) -> Result<Self> {
        if indices.len() != values.len() {
            log::debug!(
                "rejecting sparse vector parts: {} indices, {} values",
                indices.len(),
                values.len()
            );
            return Err(SparseVectorError::LengthMismatch {
                indices: indices.len(),
                values: values.len(),
            });
        }

        if let Some(position) = indices.windows(2).position(|w| w[0] >= w[1]) {
            log::debug!("rejecting sparse vector parts: index order broken at {}", position + 1);
            return Err(SparseVectorError::UnsortedIndices {
                position: position + 1,
            });
        }

        Ok(SparseVector {
            indices: indices.into_boxed_slice(),
            values: values.into_boxed_slice(),
        })
    }

    /// Split entries with unique, ascending indices into the two buffers.
    fn from_sorted_entries<I>(entries: I) -> Self
    where
        I: Iterator<Item = (u32, f64)>,
    {
        let (indices, values): (Vec<u32>, Vec<f64>) = entries.unzip();

        SparseVector {
            indices: indices.into_boxed_slice(),
            values: values.into_boxed_slice(),
        }
    }

    /// Number of stored entries, explicit zeros included.
    ///
    /// To count the non-zero entries use [`l0`](Self::l0).
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if the vector stores no entries.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The stored indices, strictly increasing.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// The stored values, aligned with [`indices`](Self::indices).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// A fresh cursor over `(index, value)` pairs in ascending index order.
    ///
    /// Every call starts over at the first entry; cursors never share position.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            indices: &self.indices,
            values: &self.values,
            pos: 0,
        }
    }

    /// Dot product with a dense vector.
    ///
    /// Entries whose index falls outside `dense` contribute nothing. Since the
    /// indices are ascending, the scan stops at the first one out of range.
    pub fn dot<D>(&self, dense: &D) -> f64
    where
        D: DenseVector + ?Sized,
    {
        let dim = dense.dim();
        let mut sum = 0.0;

        for (&index, &value) in self.indices.iter().zip(self.values.iter()) {
            let index = index as usize;
            if index >= dim {
                break;
            }
            sum += value * dense.at(index);
        }

        sum
    }

    /// Dot product with another sparse vector.
    ///
    /// A single merge pass over both index lists, linear in the total number
    /// of stored entries. The cursor into `self` is never rewound.
    pub fn sdot(&self, other: &SparseVector) -> f64 {
        let mut sum = 0.0;
        let mut i1 = 0;

        for (&index2, &value2) in other.indices.iter().zip(other.values.iter()) {
            while i1 < self.indices.len() {
                let index1 = self.indices[i1];
                if index1 == index2 {
                    sum += self.values[i1] * value2;
                } else if index1 > index2 {
                    break;
                }
                i1 += 1;
            }
        }

        sum
    }

    /// `dense := dense + self`. See [`add_scaled_to`](Self::add_scaled_to).
    pub fn add_to<'a, D>(&self, dense: &'a mut D) -> &'a mut D
    where
        D: DenseVectorMut + ?Sized,
    {
        self.add_scaled_to(dense, 1.0)
    }

    /// `dense := dense + alpha * self`, returning `dense` for chaining.
    ///
    /// Entries whose index falls outside `dense` are ignored; the scan stops
    /// at the first one.
    pub fn add_scaled_to<'a, D>(&self, dense: &'a mut D, alpha: f64) -> &'a mut D
    where
        D: DenseVectorMut + ?Sized,
    {
        let dim = dense.dim();

        for (&index, &value) in self.indices.iter().zip(self.values.iter()) {
            let index = index as usize;
            if index >= dim {
                break;
            }
            dense.add_at(index, alpha * value);
        }

        dense
    }

    /// L0 norm: the number of stored values that are not zero.
    pub fn l0(&self) -> usize {
        self.values.iter().filter(|v| **v != 0.0).count()
    }

    /// L1 norm.
    pub fn l1(&self) -> f64 {
        self.values.iter().map(|v| v.abs()).sum()
    }

    /// L2 norm.
    pub fn l2(&self) -> f64 {
        self.l2sq().sqrt()
    }

    /// Square of the L2 norm.
    pub fn l2sq(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum()
    }

    /// L-infinity ("maximum") norm. Zero for an empty vector.
    pub fn linf(&self) -> f64 {
        self.values.iter().fold(0.0_f64, |max, v| max.max(v.abs()))
    }

    ///
    /// General Lp norm, `(sum |v|^p)^(1/p)`.
    ///
    /// For p = 0, 1, 2 and infinity use [`l0`](Self::l0), [`l1`](Self::l1),
    /// [`l2`](Self::l2) and [`linf`](Self::linf).
    ///
    /// # Errors
    /// [`SparseVectorError::InvalidExponent`] unless `p > 0`; NaN is rejected.
    ///
    pub fn lp(&self, p: f64) -> Result<f64> {
        if p.is_nan() || p <= 0.0 {
            return Err(SparseVectorError::InvalidExponent(p));
        }

        let sum: f64 = self.values.iter().map(|v| v.abs().powf(p)).sum();

        Ok(sum.powf(p.recip()))
    }

    /// The stored entries as an ordered map, explicit zeros included.
    pub fn to_map(&self) -> BTreeMap<u32, f64> {
        self.iter().collect()
    }
}

impl From<BTreeMap<u32, f64>> for SparseVector {
    fn from(map: BTreeMap<u32, f64>) -> Self {
        // BTreeMap iterates in ascending key order already
        SparseVector::from_sorted_entries(map.into_iter())
    }
}

impl From<HashMap<u32, f64>> for SparseVector {
    fn from(map: HashMap<u32, f64>) -> Self {
        let mut entries: Vec<(u32, f64)> = map.into_iter().collect();
        entries.sort_unstable_by_key(|(index, _)| *index);

        SparseVector::from_sorted_entries(entries.into_iter())
    }
}

impl FromIterator<(u32, f64)> for SparseVector {
    /// Later pairs win when an index repeats.
    fn from_iter<T: IntoIterator<Item = (u32, f64)>>(iter: T) -> Self {
        iter.into_iter().collect::<BTreeMap<u32, f64>>().into()
    }
}

impl<'a> IntoIterator for &'a SparseVector {
    type Item = (u32, f64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward cursor over the entries of a [`SparseVector`].
///
/// Returned by [`SparseVector::iter`]. Keeps returning `None` once exhausted.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    indices: &'a [u32],
    values: &'a [f64],
    pos: usize,
}

impl Iterator for Iter<'_> {
    type Item = (u32, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos < self.indices.len() {
            let item = (self.indices[self.pos], self.values[self.pos]);
            self.pos += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.indices.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

#[cfg(feature = "serde")]
mod serde_impls {
    use std::collections::BTreeMap;

    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::SparseVector;

    impl Serialize for SparseVector {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (index, value) in self.iter() {
                map.serialize_entry(&index, &value)?;
            }
            map.end()
        }
    }

    impl<'de> Deserialize<'de> for SparseVector {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let map = BTreeMap::<u32, f64>::deserialize(deserializer)?;
            Ok(SparseVector::from(map))
        }
    }
}
