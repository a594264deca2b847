//! Sub-score normalizers.
//!
//! Each function maps one raw signal onto a comparable `[0, 1]` scale.

/// Decay rate of relevance across the result list.
pub const RELEVANCE_DECAY: f64 = 2.0;

/// Recency score for papers with no year, or older than the window.
pub const MIN_RECENCY_SCORE: f64 = 0.1;

/// Length of the recency window in years.
pub const RECENCY_WINDOW_YEARS: i32 = 20;

/// The recency window never starts before this year.
pub const RECENCY_EPOCH: i32 = 2000;

/// Relevance of the result at `position` (0-indexed) among `total` results.
///
/// `exp(-2 * position / max(total - 1, 1))`: 1.0 for the top hit, about
/// 0.135 for the last one. An empty result set scores 0.0.
#[must_use]
pub fn normalize_relevance(position: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let span = total.saturating_sub(1).max(1) as f64;
    let normalized_position = (position as f64 / span).min(1.0);

    (-RELEVANCE_DECAY * normalized_position).exp()
}

/// Log-scaled citation score relative to the most cited paper of the run.
///
/// `ln(1 + count) / ln(1 + max_count)`; absent or zero counts, and runs where
/// nothing is cited, score 0.0.
#[must_use]
pub fn normalize_citations(citation_count: Option<i32>, max_citations: i32) -> f64 {
    let count = match citation_count {
        Some(count) if count > 0 => count,
        _ => return 0.0,
    };

    if max_citations <= 0 {
        return 0.0;
    }

    (f64::from(count).ln_1p() / f64::from(max_citations).ln_1p()).min(1.0)
}

/// Recency score of a publication year.
///
/// Unknown years score [`MIN_RECENCY_SCORE`]. Years before `min_year` score
/// 0.0 even if the query-level filter should have excluded them. Otherwise
/// the year is placed linearly on a window of [`RECENCY_WINDOW_YEARS`] ending
/// at `current_year` (starting no earlier than [`RECENCY_EPOCH`]), floored at
/// [`MIN_RECENCY_SCORE`].
#[must_use]
pub fn normalize_recency(year: Option<i32>, min_year: Option<i32>, current_year: i32) -> f64 {
    let Some(year) = year else {
        return MIN_RECENCY_SCORE;
    };

    if let Some(min_year) = min_year {
        if year < min_year {
            return 0.0;
        }
    }

    let oldest_year = (current_year - RECENCY_WINDOW_YEARS).max(RECENCY_EPOCH);
    if year < oldest_year {
        return MIN_RECENCY_SCORE;
    }

    // Window collapses when current_year is at or before the epoch.
    let span = current_year - oldest_year;
    if span <= 0 {
        return 1.0;
    }

    (f64::from(year - oldest_year) / f64::from(span)).clamp(MIN_RECENCY_SCORE, 1.0)
}
