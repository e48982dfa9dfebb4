extern crate blas_src;
extern crate blas_sys;

use crate::blas::BLAS1;

use super::CpuContext;

macro_rules! impl_blas1 {
    ($float:ident =>
        axpy: $axpy:path,
        scal: $scal:path,
    ) => {
        impl BLAS1<CpuContext> for $float {
            unsafe fn axpy(
                _ctx: CpuContext,
                n: i32,
                alpha: Self,
                x: *const Self,
                incx: i32,
                y: *mut Self,
                incy: i32,
            ) {
                $axpy(&n, &alpha, x.cast_mut(), &incx, y, &incy);
            }

            unsafe fn scal(_ctx: CpuContext, n: i32, alpha: Self, x: *mut Self, incx: i32) {
                $scal(&n, &alpha, x, &incx);
            }
        }
    };
}

impl_blas1!(f32 =>
    axpy: blas_sys::saxpy_,
    scal: blas_sys::sscal_,
);

impl_blas1!(f64 =>
    axpy: blas_sys::daxpy_,
    scal: blas_sys::dscal_,
);
