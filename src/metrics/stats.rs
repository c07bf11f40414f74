/// Arithmetic mean of `values`, or `None` if empty.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() { return None }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median of `values`, or `None` if empty.
/// For an even count this is the mean of the two middle values.
pub(crate) fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() { return None }

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}
