/// `x ln x` with the limit convention `0 ln 0 = 0`
pub fn x_ln_x(x: f64) -> f64 {
    if x <= 0.0 { 0.0 } else { x * x.ln() }
}

/// Empirical entropy in bits of a binary column with `ones` set out of `total`
///
/// Computed as `log2 N - (n log2 n + (N - n) log2 (N - n)) / N`. A constant
/// column carries no information and yields zero.
pub fn binary_column_entropy(ones: usize, total: usize) -> f64 {
    if total == 0 || ones == 0 || ones >= total {
        return 0.0;
    }
    let n = total as f64;
    let k = ones as f64;
    let nats = n.ln() - (x_ln_x(k) + x_ln_x(n - k)) / n;
    nats / std::f64::consts::LN_2
}
