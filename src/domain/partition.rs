use std::ops::Range;

/// Split `len` items into `parts` contiguous index ranges.
///
/// Every range has `len / parts` items except the last, which absorbs the
/// remainder. `parts` of zero is treated as one. Ranges may be empty when
/// `parts > len`.
pub fn partition_ranges(len: usize, parts: usize) -> Vec<Range<usize>> {
    let parts = parts.max(1);
    let chunk_size = len / parts;

    (0..parts)
        .map(|i| {
            let start = i * chunk_size;
            let end = if i == parts - 1 { len } else { start + chunk_size };
            start..end
        })
        .collect()
}
