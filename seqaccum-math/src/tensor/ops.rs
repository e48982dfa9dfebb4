use std::ops::{Add, Mul};

use crate::Error;

use super::Vector;

/// Length of the result of broadcasting two 1-d operands together
pub fn broadcast_len(lhs: usize, rhs: usize) -> Result<usize, Error> {
    match (lhs, rhs) {
        (a, b) if a == b => Ok(a),
        (1, b) => Ok(b),
        (a, 1) => Ok(a),
        (lhs, rhs) => Err(Error::ShapeMismatch { lhs, rhs }),
    }
}

impl<T: Copy> Vector<T> {
    /// Applies `f` pairwise after broadcasting `self` and `rhs` to a common length.
    pub fn broadcast_with<U: Copy, R>(
        &self,
        rhs: &Vector<U>,
        mut f: impl FnMut(T, U) -> R,
    ) -> Result<Vector<R>, Error> {
        let n = broadcast_len(self.len(), rhs.len())?;
        let x = |i: usize| if self.len() == 1 { self[0] } else { self[i] };
        let y = |i: usize| if rhs.len() == 1 { rhs[0] } else { rhs[i] };
        Ok((0..n).map(|i| f(x(i), y(i))).collect())
    }

    /// Element-wise product with broadcasting
    pub fn broadcast_mul(&self, rhs: &Self) -> Result<Self, Error>
    where
        T: Mul<Output = T>,
    {
        self.broadcast_with(rhs, |a, b| a * b)
    }

    /// Element-wise sum with broadcasting
    pub fn broadcast_add(&self, rhs: &Self) -> Result<Self, Error>
    where
        T: Add<Output = T>,
    {
        self.broadcast_with(rhs, |a, b| a + b)
    }
}

/// # Panics
/// If the lengths cannot be broadcast together
impl<'a, T: Copy + Mul<Output = T>> Mul<&'a Vector<T>> for &'a Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: &'a Vector<T>) -> Vector<T> {
        match self.broadcast_mul(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

/// # Panics
/// If the lengths cannot be broadcast together
impl<'a, T: Copy + Add<Output = T>> Add<&'a Vector<T>> for &'a Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: &'a Vector<T>) -> Vector<T> {
        match self.broadcast_add(rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        self.into_iter().map(|x| x * rhs).collect()
    }
}
