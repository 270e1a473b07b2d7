/// Scatter symbol size, optionally scaled down by a size rate.
///
/// A rate of `None` or zero leaves the size untouched.
pub fn symbol_size(size_rate: Option<f64>, size: f64) -> f64 {
    match size_rate {
        Some(rate) if rate != 0.0 => (size / rate).ceil(),
        _ => size,
    }
}
