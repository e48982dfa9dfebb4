use std::fmt::Debug;

pub mod cpu;

pub use cpu::{Cpu, CpuContext};

/// A context needed for running BLAS operations
pub trait BLASContext: Clone + Debug {
    /// Name of the library that serves this context, for diagnostics
    fn provider(&self) -> &'static str;
}

/// The context a device uses when none is specified
pub trait DefaultBLASContext {
    type Context: BLASContext + Default;

    fn default_ctx() -> Self::Context {
        Self::Context::default()
    }
}

/// Level 1 BLAS routines: vector-vector operations
pub trait BLAS1<C: BLASContext>: Sized + Copy {
    /// Computes `y = alpha * x + y`
    ///
    /// # Safety
    /// `x` and `y` must be valid for `n` strided reads (and writes for `y`).
    /// This is often a call across an FFI barrier into a BLAS library
    unsafe fn axpy(
        ctx: C,
        n: i32,
        alpha: Self,
        x: *const Self,
        incx: i32,
        y: *mut Self,
        incy: i32,
    );

    /// Computes `x = alpha * x`
    ///
    /// # Safety
    /// `x` must be valid for `n` strided reads and writes.
    unsafe fn scal(ctx: C, n: i32, alpha: Self, x: *mut Self, incx: i32);
}
