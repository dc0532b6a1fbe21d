use insight_model::{QualityConfig, QualityRating, QualityScore, percentage};

/// Score completeness and sample size for a dataset.
///
/// `missing_per_column` holds one missing-cell count per dataset column,
/// unsupported columns included.
pub fn score_quality(
    row_count: usize,
    missing_per_column: &[usize],
    config: &QualityConfig,
) -> QualityScore {
    let column_count = missing_per_column.len();
    let total_missing_cells: usize = missing_per_column.iter().sum();
    let columns_with_missing = missing_per_column.iter().filter(|count| **count > 0).count();
    let missing_percentage = percentage(total_missing_cells, row_count * column_count);

    let (score, sample_penalty) = if row_count == 0 || column_count == 0 {
        (0.0, config.small_sample_penalty)
    } else {
        let penalty = sample_penalty(row_count, config);
        let raw = 100.0 - config.missing_weight * missing_percentage - penalty;
        (raw.clamp(0.0, 100.0), penalty)
    };

    QualityScore {
        score,
        missing_percentage,
        columns_with_missing,
        total_missing_cells,
        sample_penalty,
        rating: QualityRating::from_score(score),
    }
}

fn sample_penalty(row_count: usize, config: &QualityConfig) -> f64 {
    if config.min_sample_size == 0 || row_count >= config.min_sample_size {
        return 0.0;
    }
    let shortfall = (config.min_sample_size - row_count) as f64;
    config.small_sample_penalty * shortfall / config.min_sample_size as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_large_dataset_scores_full_marks() {
        let score = score_quality(500, &[0, 0, 0], &QualityConfig::default());
        assert_eq!(score.score, 100.0);
        assert_eq!(score.sample_penalty, 0.0);
        assert_eq!(score.rating, QualityRating::Excellent);
    }

    #[test]
    fn missing_cells_cost_one_point_per_percent() {
        // 20 missing of 400 cells = 5%.
        let score = score_quality(200, &[10, 0, 10, 0], &QualityConfig::default());
        assert_eq!(score.missing_percentage, 5.0);
        assert_eq!(score.columns_with_missing, 2);
        assert_eq!(score.total_missing_cells, 20);
        assert_eq!(score.score, 95.0);
    }

    #[test]
    fn small_samples_are_penalized_linearly() {
        let score = score_quality(50, &[0, 0], &QualityConfig::default());
        assert_eq!(score.sample_penalty, 15.0);
        assert_eq!(score.score, 85.0);

        let at_floor = score_quality(100, &[0], &QualityConfig::default());
        assert_eq!(at_floor.sample_penalty, 0.0);
    }

    #[test]
    fn score_is_clamped_at_zero() {
        let score = score_quality(10, &[10, 10], &QualityConfig::default());
        assert_eq!(score.missing_percentage, 100.0);
        assert_eq!(score.score, 0.0);
        assert_eq!(score.rating, QualityRating::Poor);
    }

    #[test]
    fn empty_dataset_scores_zero() {
        let score = score_quality(0, &[0, 0], &QualityConfig::default());
        assert_eq!(score.score, 0.0);
        assert_eq!(score.missing_percentage, 0.0);
    }

    #[test]
    fn more_missing_never_scores_higher() {
        let config = QualityConfig::default();
        let mut previous = f64::INFINITY;
        for missing in 0..=40 {
            let score = score_quality(40, &[missing, 0], &config).score;
            assert!(score <= previous);
            previous = score;
        }
    }
}
