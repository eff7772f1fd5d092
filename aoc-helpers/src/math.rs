//! Integer math over any signed primitive.

use num_traits::{PrimInt, Signed};

/// Euclidean-style remainder: never negative when `b` is positive.
///
/// # Panics
/// When `b` is zero, like `%`.
pub fn modulo<T: PrimInt + Signed>(a: T, b: T) -> T {
    let r = a % b;
    if r < T::zero() { r + b } else { r }
}

/// `base` raised to `exp` by square-and-multiply. A negative `exp` yields zero.
pub fn pow<T: PrimInt + Signed>(base: T, exp: T) -> T {
    if exp < T::zero() {
        return T::zero();
    }

    let two = T::one() + T::one();
    let (mut base, mut exp, mut acc) = (base, exp, T::one());
    while exp > T::zero() {
        if exp % two == T::one() {
            acc = acc * base;
        }
        exp = exp / two;
        if exp > T::zero() {
            base = base * base;
        }
    }
    acc
}

pub fn abs<T: PrimInt + Signed>(x: T) -> T {
    x.abs()
}

/// Smallest value, or `None` for an empty slice
pub fn min_n<T: PrimInt + Signed>(values: &[T]) -> Option<T> {
    values.iter().copied().min()
}

/// Largest value, or `None` for an empty slice
pub fn max_n<T: PrimInt + Signed>(values: &[T]) -> Option<T> {
    values.iter().copied().max()
}
