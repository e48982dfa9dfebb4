//! The affine recurrence
//!
//! ```text
//! result_0     = base
//! result_{k+1} = k * base + result_k
//! ```
//!
//! run for a fixed number of iterations. Since the multipliers are
//! `0, 1, .., n - 1`, the closed form is `(1 + n(n-1)/2) * base`.

use log::debug;
use num_traits::{CheckedAdd, CheckedMul, FromPrimitive, WrappingAdd, WrappingMul};

use crate::{
    blas::{BLASContext, BLAS1},
    tensor::Vector,
    Error,
};

fn multiplier<T: FromPrimitive>(index: usize) -> Result<T, Error> {
    T::from_usize(index).ok_or(Error::IndexOutOfRange { index })
}

/// Each iteration broadcasts the index as a length-1 vector against `base`
/// and adds the product to the previous result, producing a new vector.
/// Arithmetic wraps on overflow in every build profile.
pub fn accumulate<T>(base: &Vector<T>, iterations: usize) -> Result<Vector<T>, Error>
where
    T: Copy + FromPrimitive + WrappingAdd + WrappingMul,
{
    if base.is_empty() {
        return Err(Error::Empty);
    }
    debug!(
        "accumulating {iterations} iterations over {} elements",
        base.len()
    );

    let mut result = base.clone();
    for i in 0..iterations {
        let i = Vector::scalar(multiplier::<T>(i)?);
        result = i
            .broadcast_with(base, |k, b| k.wrapping_mul(&b))?
            .broadcast_with(&result, |p, r| p.wrapping_add(&r))?;
    }
    Ok(result)
}

/// Same recurrence as [`accumulate`], updating a single buffer in place with
/// one `axpy` call per iteration through the given [`BLASContext`]. The
/// native integer kernels wrap on overflow like [`accumulate`] does.
pub fn accumulate_using<T, C>(
    base: &Vector<T>,
    iterations: usize,
    ctx: C,
) -> Result<Vector<T>, Error>
where
    T: FromPrimitive + BLAS1<C>,
    C: BLASContext,
{
    if base.is_empty() {
        return Err(Error::Empty);
    }
    debug!(
        "accumulating {iterations} iterations over {} elements with {}",
        base.len(),
        ctx.provider()
    );

    let mut result = base.clone();
    for i in 0..iterations {
        result.axpy_using(multiplier(i)?, base, ctx.clone());
    }
    Ok(result)
}

/// Same recurrence as [`accumulate`], failing with [`Error::Overflow`]
/// instead of wrapping or panicking when an element leaves the range of `T`.
pub fn accumulate_checked<T>(base: &Vector<T>, iterations: usize) -> Result<Vector<T>, Error>
where
    T: Copy + FromPrimitive + CheckedAdd + CheckedMul,
{
    if base.is_empty() {
        return Err(Error::Empty);
    }
    debug!(
        "accumulating {iterations} checked iterations over {} elements",
        base.len()
    );

    let mut result = base.clone();
    for iteration in 0..iterations {
        let k: T = multiplier(iteration)?;
        result = base
            .iter()
            .zip(result.iter())
            .enumerate()
            .map(|(position, (b, r))| {
                k.checked_mul(b)
                    .and_then(|p| p.checked_add(r))
                    .ok_or(Error::Overflow {
                        iteration,
                        position,
                    })
            })
            .collect::<Result<_, _>>()?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{blas::CpuContext, tensor::Vector, Error};

    use super::{accumulate, accumulate_checked, accumulate_using};

    fn base_a() -> Vector<i32> {
        Vector::from([1, 2, 3, 4, 5, 6, 7, 8, 9])
    }

    fn base_b() -> Vector<i32> {
        Vector::from([10, 20, 30, 40, 50, 60, 70, 80, 90])
    }

    /// Direct simulation of the recurrence on plain integers
    fn simulate(base: &[i64], iterations: i64) -> Vec<i64> {
        let mut result = base.to_vec();
        for k in 0..iterations {
            result = base.iter().zip(&result).map(|(b, r)| k * b + r).collect();
        }
        result
    }

    #[test]
    fn scenario_a() {
        let result = accumulate(&base_a(), 100).unwrap();
        assert_eq!(
            result,
            Vector::from([4951, 9902, 14853, 19804, 24755, 29706, 34657, 39608, 44559])
        );

        let expected = simulate(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 100);
        let result: Vec<i64> = result.into_iter().map(i64::from).collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn scenario_b_is_ten_times_a() {
        let a = accumulate(&base_a(), 100).unwrap();
        let b = accumulate(&base_b(), 100).unwrap();
        assert_eq!(b, a * 10);
        assert_eq!(
            b.to_string(),
            "[ 49510  99020 148530 198040 247550 297060 346570 396080 445590]"
        );
    }

    #[test]
    fn zero_and_one_iterations_are_identity() {
        let base = base_a();
        assert_eq!(accumulate(&base, 0).unwrap(), base);
        // the first multiplier is 0
        assert_eq!(accumulate(&base, 1).unwrap(), base);
        assert_eq!(accumulate(&base, 2).unwrap(), &base * &Vector::scalar(2));
    }

    #[test]
    fn length_is_preserved() {
        let base = Vector::from([3_i64, -1, 4, 1, -5]);
        for n in [0, 1, 2, 17, 100] {
            assert_eq!(accumulate(&base, n).unwrap().len(), base.len());
        }
    }

    #[test]
    fn deterministic() {
        let base = base_b();
        assert_eq!(
            accumulate(&base, 100).unwrap(),
            accumulate(&base, 100).unwrap()
        );
    }

    #[test]
    fn variants_agree() {
        for base in [base_a(), base_b(), Vector::from([-7, 0, 12])] {
            let expected = accumulate(&base, 100).unwrap();
            assert_eq!(accumulate_using(&base, 100, CpuContext).unwrap(), expected);
            assert_eq!(accumulate_checked(&base, 100).unwrap(), expected);
        }
    }

    #[test]
    fn unchecked_overflow_wraps() {
        let base = Vector::from([1_073_741_823_i32]);
        // 4951 * base, reduced modulo 2^32
        let expected = Vector::from([-1_073_746_775]);
        assert_eq!(accumulate(&base, 100).unwrap(), expected);
        assert_eq!(accumulate_using(&base, 100, CpuContext).unwrap(), expected);
        assert_eq!(
            accumulate(&Vector::from([i32::MAX]), 100).unwrap(),
            Vector::from([2_147_478_697])
        );
    }

    #[test]
    fn fused_float() {
        let base = Vector::from([0.5_f64, 1.0, 2.0]);
        let result = accumulate_using(&base, 100, CpuContext).unwrap();
        assert_relative_eq!(result[0], 2475.5);
        assert_relative_eq!(result[1], 4951.0);
        assert_relative_eq!(result[2], 9902.0);
    }

    #[test]
    fn empty_base() {
        let empty = Vector::<i32>::from_vec(vec![]);
        assert_eq!(accumulate(&empty, 100), Err(Error::Empty));
        assert_eq!(accumulate_using(&empty, 100, CpuContext), Err(Error::Empty));
        assert_eq!(accumulate_checked(&empty, 100), Err(Error::Empty));
    }

    #[test]
    fn checked_overflow() {
        let base = Vector::from([1, i32::MAX / 2]);
        // iteration 0 adds nothing, iteration 1 doubles the second element
        assert_eq!(
            accumulate_checked(&base, 100),
            Err(Error::Overflow {
                iteration: 2,
                position: 1,
            })
        );
    }

    #[test]
    fn checked_overflow_small_type() {
        // 1 + 22 * 23 / 2 = 254, the next step leaves u8
        assert_eq!(
            accumulate_checked(&Vector::from([1_u8]), 300),
            Err(Error::Overflow {
                iteration: 23,
                position: 0,
            })
        );
    }

    #[test]
    fn index_not_representable() {
        assert_eq!(
            accumulate(&Vector::from([0_u8]), 300),
            Err(Error::IndexOutOfRange { index: 256 })
        );
    }
}
