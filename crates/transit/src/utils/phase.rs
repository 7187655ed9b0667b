/// Fold a timestamp onto orbital phase in `[-0.5, 0.5)`, measured in units
/// of the period and centered on the reference epoch `t0`.
pub fn fold(t: f64, period: f64, t0: f64) -> f64 {
    let cycles = (t - t0) / period;
    cycles - (cycles + 0.5).floor()
}
