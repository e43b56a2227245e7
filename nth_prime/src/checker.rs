use num_traits::PrimInt;

/// Trial division primality test.
///
/// Returns `false` for everything below 2, negatives included. Divisors are
/// tried from 2 while `d * d <= n`; the bound is written as `d <= n / d` so
/// it holds for `n` up to `T::max_value()`.
pub fn is_prime<T: PrimInt>(n: T) -> bool {
    let two = T::one() + T::one();
    if n < two {
        return false;
    }
    let mut d = two;
    while d <= n / d {
        if n % d == T::zero() {
            return false;
        }
        d = d + T::one();
    }
    true
}
