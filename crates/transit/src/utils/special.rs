use std::f64::consts::PI;

/// Lanczos coefficients for g = 7, n = 9.
const LANCZOS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

const LN_SQRT_TWO_PI: f64 = 0.918_938_533_204_672_7;

/// Natural log of the gamma function, valid for all positive arguments.
///
/// Arguments below 0.5 go through the reflection formula so the Lanczos sum
/// is only ever evaluated on its stable range.
pub fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Gamma(x) Gamma(1 - x) = pi / sin(pi x)
        return (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut acc = LANCZOS[0];
    for (i, c) in LANCZOS.iter().enumerate().skip(1) {
        acc += c / (x + i as f64);
    }
    let t = x + 7.5;

    LN_SQRT_TWO_PI + (x + 0.5) * t.ln() - t + acc.ln()
}

/// Natural log of the beta function B(a, b).
pub fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}
