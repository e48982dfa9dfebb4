use std::ops::{AddAssign, MulAssign};

use num_traits::One;

use crate::blas::{BLASContext, Cpu, DefaultBLASContext, BLAS1};

use super::Vector;

type DefaultContext = <Cpu as DefaultBLASContext>::Context;

impl<T: Copy> Vector<T> {
    /// In place `self = alpha * x + self`, using the specified [`BLASContext`]
    ///
    /// # Panics
    /// If the vectors do not have the same length
    pub fn axpy_using<C: BLASContext>(&mut self, alpha: T, x: &Vector<T>, ctx: C)
    where
        T: BLAS1<C>,
    {
        axpy_ctx(ctx, alpha, x.as_slice(), self.as_mut_slice());
    }

    /// Vector scaling, using the specified [`BLASContext`]
    pub fn scale_using<C: BLASContext>(&mut self, alpha: T, ctx: C)
    where
        T: BLAS1<C>,
    {
        scal_ctx(ctx, alpha, self.as_mut_slice());
    }
}

impl<'a, T> AddAssign<&'a Vector<T>> for Vector<T>
where
    T: Copy + One + BLAS1<DefaultContext>,
{
    fn add_assign(&mut self, rhs: &'a Vector<T>) {
        axpy_ctx(Cpu::default_ctx(), T::one(), rhs.as_slice(), self.as_mut_slice());
    }
}

impl<T> MulAssign<T> for Vector<T>
where
    T: Copy + BLAS1<DefaultContext>,
{
    fn mul_assign(&mut self, rhs: T) {
        self.scale_using(rhs, Cpu::default_ctx());
    }
}

/// Performs the vector scale and add operation.
/// > y = alpha * x + y.
///
/// # Panics
/// If the vectors do not have the same length, or are longer than `i32::MAX`
#[allow(clippy::needless_pass_by_value)]
pub fn axpy_ctx<F: BLAS1<C>, C: BLASContext>(ctx: C, alpha: F, x: &[F], y: &mut [F]) {
    assert_eq!(x.len(), y.len(), "vectors should have the same length");
    let n = blas_len(x.len());

    unsafe {
        F::axpy(ctx, n, alpha, x.as_ptr(), 1, y.as_mut_ptr(), 1);
    }
}

/// Performs the vector scale operation.
/// > x = alpha * x.
///
/// # Panics
/// If the vector is longer than `i32::MAX`
#[allow(clippy::needless_pass_by_value)]
pub fn scal_ctx<F: BLAS1<C>, C: BLASContext>(ctx: C, alpha: F, x: &mut [F]) {
    let n = blas_len(x.len());

    unsafe {
        F::scal(ctx, n, alpha, x.as_mut_ptr(), 1);
    }
}

fn blas_len(n: usize) -> i32 {
    match i32::try_from(n) {
        Ok(n) => n,
        Err(_) => panic!("vector of length {n} exceeds the BLAS index range"),
    }
}
