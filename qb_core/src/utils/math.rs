/// Rounds half away from zero to `decimals` places.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[inline]
pub fn mean(values: &[f64]) -> Option<f64> {
    match values.len() {
        0 => None,
        len => Some(values.iter().sum::<f64>() / len as f64),
    }
}
