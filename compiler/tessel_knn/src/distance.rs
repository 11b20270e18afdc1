//! Context distance.

/// Fraction of categorical positions at which `a` and `b` differ.
///
/// Positions where `categorical[i]` is false are skipped entirely. The result
/// lies in `[0, 1]` and is symmetric; a mask with no categorical position
/// yields `0.0`. Callers guarantee all three slices share one width.
pub fn context_distance(categorical: &[bool], a: &[i32], b: &[i32]) -> f64 {
    let mut total = 0u32;
    let mut differing = 0u32;
    for ((&is_categorical, x), y) in categorical.iter().zip(a).zip(b) {
        if is_categorical {
            total += 1;
            if x != y {
                differing += 1;
            }
        }
    }
    if total == 0 {
        return 0.0;
    }
    f64::from(differing) / f64::from(total)
}
