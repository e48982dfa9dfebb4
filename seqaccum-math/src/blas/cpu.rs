use super::{BLASContext, DefaultBLASContext, BLAS1};

#[cfg(feature = "blas-sys")]
#[allow(clippy::module_inception)]
mod blas_sys;

/// The host processor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cpu;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuContext;

impl BLASContext for CpuContext {
    fn provider(&self) -> &'static str {
        if cfg!(feature = "openblas") {
            "openblas"
        } else if cfg!(feature = "netlib") {
            "netlib"
        } else if cfg!(feature = "blis") {
            "blis"
        } else if cfg!(feature = "intel-mkl") {
            "intel-mkl"
        } else if cfg!(feature = "accelerate") {
            "accelerate"
        } else {
            "native"
        }
    }
}

impl DefaultBLASContext for Cpu {
    type Context = CpuContext;
}

/// Portable strided `y = madd(alpha, x, y)`
///
/// # Safety
/// See [`BLAS1::axpy`]
#[allow(clippy::cast_sign_loss)]
unsafe fn axpy_loop<T: Copy>(
    n: i32,
    alpha: T,
    x: *const T,
    incx: i32,
    y: *mut T,
    incy: i32,
    madd: impl Fn(T, T, T) -> T,
) {
    for i in 0..n.max(0) as isize {
        let x = x.offset(i * incx as isize);
        let y = y.offset(i * incy as isize);
        *y = madd(alpha, *x, *y);
    }
}

/// Portable strided `x = mul(alpha, x)`
///
/// # Safety
/// See [`BLAS1::scal`]
#[allow(clippy::cast_sign_loss)]
unsafe fn scal_loop<T: Copy>(n: i32, alpha: T, x: *mut T, incx: i32, mul: impl Fn(T, T) -> T) {
    for i in 0..n.max(0) as isize {
        let x = x.offset(i * incx as isize);
        *x = mul(alpha, *x);
    }
}

macro_rules! impl_native_blas1 {
    ($($t:ident),* =>
        madd: |$a:ident, $x:ident, $y:ident| $madd:expr,
        mul: |$ma:ident, $mx:ident| $mul:expr,
    ) => {$(
        impl BLAS1<CpuContext> for $t {
            unsafe fn axpy(
                _ctx: CpuContext,
                n: i32,
                alpha: Self,
                x: *const Self,
                incx: i32,
                y: *mut Self,
                incy: i32,
            ) {
                axpy_loop(n, alpha, x, incx, y, incy, |$a: $t, $x: $t, $y: $t| $madd);
            }

            unsafe fn scal(_ctx: CpuContext, n: i32, alpha: Self, x: *mut Self, incx: i32) {
                scal_loop(n, alpha, x, incx, |$ma: $t, $mx: $t| $mul);
            }
        }
    )*};
}

// integers wrap on overflow, two's complement like the array libraries they mirror
impl_native_blas1!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize =>
    madd: |a, x, y| a.wrapping_mul(x).wrapping_add(y),
    mul: |a, x| a.wrapping_mul(x),
);

#[cfg(not(feature = "blas-sys"))]
impl_native_blas1!(f32, f64 =>
    madd: |a, x, y| a * x + y,
    mul: |a, x| a * x,
);
