use log::trace;
use num_bigint::BigUint;
use num_traits::Zero;

/// Number of decimal digits in `value`. Zero has one digit.
pub fn decimal_digit_count(value: &BigUint) -> u32 {
    if value.is_zero() {
        return 1;
    }

    value.to_str_radix(10).len() as u32
}

/// Writes the digits of `right` directly after the digits of `left`.
///
/// `12` and `34` give `1234`; `5` and `0` give `50`.
pub fn concatenate(left: &BigUint, right: &BigUint) -> BigUint {
    let shift = BigUint::from(10u32).pow(decimal_digit_count(right));
    let result = left * shift + right;
    trace!("Concatenated {} || {} = {}", left, right, result);
    result
}
