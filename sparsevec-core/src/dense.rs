//! Capability traits for the dense operands of [`SparseVector`](crate::SparseVector).
//!
//! Anything that can report its length and hand back an element as `f64` can be
//! dotted against a sparse vector. Plain `f64` slices, `Vec`s, fixed-size arrays
//! and fixed-width buffers of other primitive types (`f32`, `u8`, `i32`, ...)
//! all qualify without being converted first.

use num_traits::{AsPrimitive, Float};

/// A read-only dense vector of known length.
pub trait DenseVector {
    /// Number of coordinates.
    fn dim(&self) -> usize;

    /// Value at `index`, widened to `f64`.
    ///
    /// Callers guarantee `index < self.dim()`.
    fn at(&self, index: usize) -> f64;
}

/// A dense vector whose coordinates can be accumulated into.
pub trait DenseVectorMut: DenseVector {
    /// `self[index] += delta`, computed in `f64` and narrowed back to the element type.
    fn add_at(&mut self, index: usize, delta: f64);
}

impl<T> DenseVector for [T]
where
    T: AsPrimitive<f64>,
{
    #[inline]
    fn dim(&self) -> usize {
        self.len()
    }

    #[inline]
    fn at(&self, index: usize) -> f64 {
        self[index].as_()
    }
}

impl<T> DenseVectorMut for [T]
where
    T: Float + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    #[inline]
    fn add_at(&mut self, index: usize, delta: f64) {
        let slot = &mut self[index];
        *slot = AsPrimitive::<T>::as_(slot.as_() + delta);
    }
}

impl<T> DenseVector for Vec<T>
where
    T: AsPrimitive<f64>,
{
    #[inline]
    fn dim(&self) -> usize {
        self.as_slice().dim()
    }

    #[inline]
    fn at(&self, index: usize) -> f64 {
        self.as_slice().at(index)
    }
}

impl<T> DenseVectorMut for Vec<T>
where
    T: Float + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    #[inline]
    fn add_at(&mut self, index: usize, delta: f64) {
        self.as_mut_slice().add_at(index, delta)
    }
}

impl<T, const N: usize> DenseVector for [T; N]
where
    T: AsPrimitive<f64>,
{
    #[inline]
    fn dim(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> f64 {
        self.as_slice().at(index)
    }
}

impl<T, const N: usize> DenseVectorMut for [T; N]
where
    T: Float + AsPrimitive<f64>,
    f64: AsPrimitive<T>,
{
    #[inline]
    fn add_at(&mut self, index: usize, delta: f64) {
        self.as_mut_slice().add_at(index, delta)
    }
}

#[cfg(feature = "ndarray")]
mod ndarray_impls {
    use ndarray::{ArrayBase, Data, DataMut, Ix1};
    use num_traits::{AsPrimitive, Float};

    use super::{DenseVector, DenseVectorMut};

    impl<A, S> DenseVector for ArrayBase<S, Ix1>
    where
        S: Data<Elem = A>,
        A: AsPrimitive<f64>,
    {
        #[inline]
        fn dim(&self) -> usize {
            self.len()
        }

        #[inline]
        fn at(&self, index: usize) -> f64 {
            self[index].as_()
        }
    }

    impl<A, S> DenseVectorMut for ArrayBase<S, Ix1>
    where
        S: DataMut<Elem = A>,
        A: Float + AsPrimitive<f64>,
        f64: AsPrimitive<A>,
    {
        #[inline]
        fn add_at(&mut self, index: usize, delta: f64) {
            let slot = &mut self[index];
            *slot = AsPrimitive::<A>::as_(slot.as_() + delta);
        }
    }
}
