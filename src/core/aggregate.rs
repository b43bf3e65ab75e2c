use std::collections::HashSet;

use crate::core::codec::to_severity;
use crate::domain::model::{Neurotransmitter, Row, SummaryStats};
use crate::utils::error::{AtlasError, Result};

/// Summarize one disorder's row into increased/decreased/neutral totals and
/// per-severity bucket counts.
///
/// Precondition: the row holds exactly the 10 known neurotransmitters, each
/// once. A violated precondition fails with `MalformedRow`; there are no
/// partial results.
pub fn summarize(row: &Row) -> Result<SummaryStats> {
    validate_row(row)?;

    let mut stats = SummaryStats {
        increased: 0,
        decreased: 0,
        neutral: 0,
        buckets: [0; 5],
    };

    for (_, direction) in row.iter() {
        let severity = to_severity(*direction);
        match severity.cmp(&0) {
            std::cmp::Ordering::Greater => stats.increased += 1,
            std::cmp::Ordering::Less => stats.decreased += 1,
            std::cmp::Ordering::Equal => stats.neutral += 1,
        }
        stats.buckets[(severity + 2) as usize] += 1;
    }

    Ok(stats)
}

fn validate_row(row: &Row) -> Result<()> {
    if row.len() != Neurotransmitter::ALL.len() {
        return Err(AtlasError::MalformedRow {
            reason: format!("expected 10 entries, found {}", row.len()),
        });
    }

    let mut seen = HashSet::new();
    for (nt, _) in row.iter() {
        if !seen.insert(*nt) {
            return Err(AtlasError::MalformedRow {
                reason: format!("duplicate entry for {}", nt),
            });
        }
    }
    // 10 distinct keys of a 10-variant enum: full coverage is implied.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset;
    use crate::domain::model::Direction;
    use crate::domain::ports::DatasetProvider;

    #[test]
    fn test_major_depression_summary_matches_table() {
        let row = dataset::builtin().get_row("Major Depression").unwrap();
        let stats = summarize(row).unwrap();
        // Glutamate and Substance P up; Dopamine, Serotonin, Norepinephrine,
        // GABA and Endorphins down.
        assert_eq!(stats.increased, 2);
        assert_eq!(stats.decreased, 5);
        assert_eq!(stats.neutral, 3);
        assert_eq!(stats.bucket_count(-1), Some(5));
        assert_eq!(stats.bucket_count(-2), Some(0));
    }

    #[test]
    fn test_counts_always_cover_the_row() {
        let provider = dataset::builtin();
        for name in provider.list_disorders() {
            let stats = summarize(provider.get_row(name).unwrap()).unwrap();
            assert_eq!(stats.total(), 10, "{name}");
            assert_eq!(stats.buckets.iter().sum::<usize>(), 10, "{name}");
        }
    }

    #[test]
    fn test_short_row_rejected() {
        let entries: Vec<_> = Neurotransmitter::ALL[..9]
            .iter()
            .map(|nt| (*nt, Direction::Neutral))
            .collect();
        let err = summarize(&Row::new(entries)).unwrap_err();
        assert!(matches!(err, AtlasError::MalformedRow { .. }));
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut entries: Vec<_> = Neurotransmitter::ALL[..9]
            .iter()
            .map(|nt| (*nt, Direction::Neutral))
            .collect();
        entries.push((Neurotransmitter::Dopamine, Direction::Increased));
        let err = summarize(&Row::new(entries)).unwrap_err();
        assert!(matches!(err, AtlasError::MalformedRow { .. }));
    }

    #[test]
    fn test_out_of_range_bucket_lookup() {
        let stats = summarize(dataset::builtin().get_row("ADHD").unwrap()).unwrap();
        assert_eq!(stats.bucket_count(3), None);
    }
}
