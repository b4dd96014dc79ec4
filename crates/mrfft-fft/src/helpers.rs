use crate::transforms::FftError;

/// Sample frequencies for the bins of a length-`n` [`crate::fft`].
///
/// Bin `k < ⌈n/2⌉` is `k / (n·d)`; the rest are negative, `-(n-k) / (n·d)`.
/// Pass `1.0 / sample_rate` as `sample_spacing` to get hertz.
pub fn fftfreq(n: usize, sample_spacing: f64) -> Result<Vec<f64>, FftError> {
    if n == 0 {
        return Err(FftError::InvalidShape {
            detail: "n must be greater than zero",
        });
    }
    if !(sample_spacing.is_finite() && sample_spacing > 0.0) {
        return Err(FftError::NonPositiveSampleSpacing);
    }
    let scale = 1.0 / (n as f64 * sample_spacing);
    let split = n.div_ceil(2);
    Ok((0..n)
        .map(|idx| {
            if idx < split {
                idx as f64 * scale
            } else {
                -((n - idx) as f64) * scale
            }
        })
        .collect())
}

/// Keep index 0 and reverse indices `1..n`.
///
/// Maps values at `ω^k` onto values at `ω^{-k}`, which is how the
/// roots-of-unity evaluation order is turned into canonical DFT bins.
/// Applying it twice is the identity.
#[must_use]
pub fn reverse_tail<T: Clone>(input: &[T]) -> Vec<T> {
    let Some((first, rest)) = input.split_first() else {
        return Vec::new();
    };
    std::iter::once(first)
        .chain(rest.iter().rev())
        .cloned()
        .collect()
}

/// Move the zero-frequency bin to the center.
#[must_use]
pub fn fftshift_1d<T: Clone>(input: &[T]) -> Vec<T> {
    rotate_left_owned(input, input.len() / 2)
}

/// Inverse of [`fftshift_1d`].
#[must_use]
pub fn ifftshift_1d<T: Clone>(input: &[T]) -> Vec<T> {
    rotate_left_owned(input, input.len().div_ceil(2))
}

fn rotate_left_owned<T: Clone>(input: &[T], shift: usize) -> Vec<T> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut out = input.to_vec();
    out.rotate_left(shift % input.len());
    out
}
