/// Code length in nats of `count` points under a uniform density on a region
///
/// Each point costs `ln(volume) - ln(count)`, the negative log of the
/// per-record density.
pub fn uniform_code_length(count: usize, log_volume: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let count = count as f64;
    count * (log_volume - count.ln())
}

/// Log-volume of the part of the database region outside a hyperinterval
///
/// Evaluates `ln(exp(log_total) - exp(log_inner))` without leaving log space.
/// Returns `None` when the complement has no volume left.
pub fn log_complement(log_total: f64, log_inner: f64) -> Option<f64> {
    if log_inner == f64::NEG_INFINITY {
        return Some(log_total);
    }
    let ratio = log_inner - log_total;
    if ratio >= 0.0 {
        return None;
    }
    let remainder = (-ratio.exp()).ln_1p();
    remainder.is_finite().then_some(log_total + remainder)
}
