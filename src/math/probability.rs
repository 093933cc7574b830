/// Map a uniform draw `r` in `[0, 1)` onto a slot in `0..total`
///
/// Equivalent to finding where a running sum of `count / total` first exceeds
/// `r`, but computed on integers so accumulated rounding can never leave the
/// final slot unreachable. Returns `None` when `total` is zero.
pub fn roulette_threshold(r: f64, total: u64) -> Option<u64> {
    if total == 0 {
        return None;
    }
    let scaled = (r.clamp(0.0, 1.0) * total as f64).floor() as u64;
    Some(scaled.min(total - 1))
}

/// Inverse-CDF selection over `(item, count)` pairs
///
/// Scans the pairs in the order given and returns the first item whose
/// cumulative count exceeds the slot chosen by `r`. `total` must be the sum
/// of all counts; `None` means the counts did not reach `total`.
pub fn roulette_select<T, I>(weighted: I, total: u64, r: f64) -> Option<T>
where
    I: IntoIterator<Item = (T, u64)>,
{
    let threshold = roulette_threshold(r, total)?;
    let mut cumulative = 0u64;
    for (item, count) in weighted {
        cumulative += count;
        if cumulative > threshold {
            return Some(item);
        }
    }
    None
}

/// Normalize counts into probabilities summing to 1
pub fn normalize_counts(counts: &[u64]) -> Vec<f64> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return vec![0.0; counts.len()];
    }
    counts
        .iter()
        .map(|&count| count as f64 / total as f64)
        .collect()
}
