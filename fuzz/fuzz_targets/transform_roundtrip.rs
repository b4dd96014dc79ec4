#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mrfft_fft::{
    Complex64, FftError, FftOptions, evaluate_poly, fft, ifft, l2, take_transform_traces,
    values_to_poly,
};
use mrfft_runtime::RuntimeMode;

#[derive(Debug, Arbitrary)]
struct RoundtripInput {
    hardened: bool,
    samples: Vec<(f64, f64)>,
}

fn bounded(samples: &[Complex64]) -> bool {
    samples
        .iter()
        .all(|&(re, im)| re.is_finite() && im.is_finite() && re.abs() < 1e6 && im.abs() < 1e6)
}

fuzz_target!(|input: RoundtripInput| {
    let samples = input.samples.into_iter().take(96).collect::<Vec<Complex64>>();
    let mode = if input.hardened {
        RuntimeMode::Hardened
    } else {
        RuntimeMode::Strict
    };
    let opts = FftOptions::default().with_mode(mode);
    let bounded = bounded(&samples);
    let scale = 1.0 + samples.iter().map(|&(re, im)| re.hypot(im)).sum::<f64>();

    match fft(&samples, &opts) {
        Ok(spectrum) => {
            assert_eq!(spectrum.len(), samples.len());
            if bounded {
                let recovered = ifft(&spectrum, &opts).expect("bounded spectrum is finite");
                assert!(l2(&recovered, &samples) <= 1e-9 * scale);
            }
        }
        Err(err) => {
            assert!(input.hardened);
            assert_eq!(err, FftError::NonFiniteInput);
        }
    }
    let _ = take_transform_traces();

    if bounded {
        let recovered = values_to_poly(&evaluate_poly(&samples));
        assert!(l2(&recovered, &samples) <= 1e-9 * scale);
    }
});
