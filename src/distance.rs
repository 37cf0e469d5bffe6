//! Distance metrics and nearest-prototype search.
//!
//! Only the relative ordering of distances matters for LVQ, so the winner is
//! chosen by squared Euclidean distance and the square root is never taken
//! on the hot path.

/// Distance computation for feature vectors.
pub struct Distance;

impl Distance {
    /// Squared Euclidean distance: `sum((a[j] - b[j])^2)`.
    ///
    /// Non-negative, and zero only when the vectors are identical.
    pub fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
        assert_eq!(a.len(), b.len(), "Dimension mismatch in squared_euclidean");

        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| {
                let diff = x - y;
                diff * diff
            })
            .sum()
    }

    /// Raw Euclidean distance.
    pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
        Self::squared_euclidean(a, b).sqrt()
    }

    /// Index and squared distance of the candidate nearest to `x`.
    ///
    /// The first candidate is the initial winner; a later one only replaces
    /// it with a strictly smaller distance, so among equidistant candidates
    /// the first one wins. Every non-empty candidate set has a winner, even
    /// when all distances overflow to `+inf`. Returns `None` only when there
    /// are no candidates.
    pub fn nearest<'a, I>(candidates: I, x: &[f64]) -> Option<(usize, f64)>
    where
        I: IntoIterator<Item = &'a [f64]>,
    {
        let mut candidates = candidates.into_iter();
        let first = candidates.next()?;
        let mut best = 0;
        let mut min_dist = Self::squared_euclidean(first, x);

        for (i, candidate) in candidates.enumerate() {
            let dist = Self::squared_euclidean(candidate, x);
            if dist < min_dist {
                min_dist = dist;
                best = i + 1;
            }
        }

        Some((best, min_dist))
    }
}
