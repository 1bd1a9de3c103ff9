//! Random demo input: distinct integer keys drawn from a range

use std::ops::Range;

use rand::seq::index;
use rand::Rng;

use crate::SylvanError;

/// Draw `count` distinct integers from `range` in random order.
pub fn unique_keys<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    range: Range<i64>,
) -> Result<Vec<i64>, SylvanError> {
    if range.start >= range.end {
        return Err(SylvanError::InvalidRange {
            low: range.start,
            high: range.end,
        });
    }
    let available = usize::try_from(range.end.abs_diff(range.start)).map_err(|_| {
        SylvanError::InvalidRange {
            low: range.start,
            high: range.end,
        }
    })?;
    if count > available {
        return Err(SylvanError::SampleTooLarge {
            requested: count,
            available,
        });
    }

    Ok(index::sample(rng, available, count)
        .into_iter()
        .map(|offset| range.start + offset as i64)
        .collect())
}
