use num_traits::Float;

/// `n` evenly spaced values over `[start, end]`, endpoints included.
///
/// Follows `numpy.linspace`: `start + i * step`, with the last sample pinned
/// to `end` so it doesn't drift by accumulated rounding.
pub fn linspace<F: Float>(start: F, end: F, n: usize) -> Vec<F> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / F::from(n - 1).unwrap_or_else(F::one);
            let mut values: Vec<F> = (0..n)
                .map(|i| start + F::from(i).unwrap_or_else(F::zero) * step)
                .collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Raise every position to `exponent`.
///
/// On `[0, 1]` with a positive exponent the warp keeps both endpoints and the
/// ordering of the input.
pub fn power_warp<F: Float>(positions: &[F], exponent: F) -> Vec<F> {
    positions.iter().map(|x| x.powf(exponent)).collect()
}

/// Map `value` from `[min, max]` onto `[0, 1]` without clamping.
///
/// A degenerate range (`max <= min`) places every value at 0, like
/// matplotlib's `Normalize` does for `vmin == vmax`.
pub fn normalize<F: Float>(value: F, min: F, max: F) -> F {
    if max > min {
        (value - min) / (max - min)
    } else {
        F::zero()
    }
}
