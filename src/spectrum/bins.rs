//! Partitioning of a magnitude buffer into contiguous bins.

use std::ops::Range;

/// Sample range covered by each of `bin_count` bins.
///
/// Bin `i` spans `round(r·i)..round(r·(i+1))` with `r = sample_count / bin_count`
/// and rounding half away from zero. Neighbouring bins share the same rounded
/// boundary, so the ranges are contiguous and cover `0..sample_count` with no
/// gaps or overlaps, even for fractional `r`. When `r < 1` some ranges are empty.
pub fn bin_ranges(sample_count: usize, bin_count: usize) -> impl Iterator<Item = Range<usize>> {
    let range = sample_count as f32 / bin_count as f32;
    let boundary = move |i: usize| ((range * i as f32).round() as usize).min(sample_count);
    (0..bin_count).map(move |i| boundary(i)..boundary(i + 1))
}

/// Arithmetic mean of `samples[range]`, or 0 for an empty range
pub fn bin_mean(samples: &[f32], range: Range<usize>) -> f32 {
    match samples.get(range) {
        Some(slice) if !slice.is_empty() => slice.iter().sum::<f32>() / slice.len() as f32,
        _ => 0.0,
    }
}
