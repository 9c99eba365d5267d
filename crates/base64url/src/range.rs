use std::ops::Range;

fn clamp_bound(bound: isize, length: usize) -> usize {
    if bound < 0 {
        length.saturating_sub(bound.unsigned_abs())
    } else {
        bound.unsigned_abs().min(length)
    }
}

/// Resolves optional `[start, end)` bounds against an input of `length` units.
///
/// Negative bounds count from the end, both ends are clamped into `[0, length]`,
/// and `end < start` collapses to an empty range at `start`.
pub(crate) fn resolve_range(length: usize, start: Option<isize>, end: Option<isize>) -> Range<usize> {
    let start = start.map_or(0, |bound| clamp_bound(bound, length));
    let end = end.map_or(length, |bound| clamp_bound(bound, length));
    start..end.max(start)
}
