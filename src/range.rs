use crate::error::{Error, Result};

/// Maps `value` from `input` onto `output` linearly.
///
/// Values outside `input` extrapolate; nothing is clamped. With `as_integer`
/// the result is rounded to the nearest integer, ties to even.
///
/// `shift(0.5, [0.0, 1.0], [0.5, 1.0], false)` is `0.75`.
pub fn shift(value: f64, input: [f64; 2], output: [f64; 2], as_integer: bool) -> Result<f64> {
    let len_in = input[1] - input[0];
    let len_out = output[1] - output[0];

    if len_in == 0.0 || !len_in.is_finite() {
        return Err(Error::Domain(format!(
            "input range [{}, {}] has no usable span",
            input[0], input[1]
        )));
    }

    let position = (value - input[0]) / len_in;
    let shifted = len_out * position + output[0];

    Ok(if as_integer { shifted.round_ties_even() } else { shifted })
}
