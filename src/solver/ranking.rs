//! Candidate pair ranking.

use serde::Serialize;

use crate::constraints::Constraints;
use crate::error::Result;

/// A scored `(R_high, R_low)` candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ratio {
    pub high: f64,
    pub low: f64,
    /// Distance of the typical output from the target typical, in volts
    pub loss: f64,
}

/// Score every pairing of `highs` with `lows` at `precision` percent.
///
/// Non-compliant pairs are dropped. The result is sorted by ascending loss;
/// ties keep cross-product order (high-major), so ranking is deterministic.
pub fn rank_candidates(
    constraints: &Constraints,
    highs: &[f64],
    lows: &[f64],
    precision: f64,
) -> Result<Vec<Ratio>> {
    let mut ranked = Vec::with_capacity(highs.len() * lows.len());
    for &high in highs {
        for &low in lows {
            if let Some(loss) = constraints.compute_loss(high, low, precision)? {
                ranked.push(Ratio { high, low, loss });
            }
        }
    }
    ranked.sort_by(|a, b| a.loss.total_cmp(&b.loss));
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::SolverConfig;
    use crate::interval::from_symmetric_percent;

    fn constraints() -> Constraints {
        Constraints::forward(
            from_symmetric_percent(10.0, 1.0).unwrap(),
            from_symmetric_percent(2.5, 5.0).unwrap(),
            50e-6,
            SolverConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_sorted_by_loss() {
        let c = constraints();
        let ranked =
            rank_candidates(&c, &[140e3, 150e3, 160e3], &[45e3, 50e3, 55e3], 1.0).unwrap();
        assert!(!ranked.is_empty());
        assert!(ranked.windows(2).all(|w| w[0].loss <= w[1].loss));
        assert_eq!((ranked[0].high, ranked[0].low), (150e3, 50e3));
    }

    #[test]
    fn test_drops_non_compliant() {
        let c = constraints();
        let ranked = rank_candidates(&c, &[150e3], &[10e3, 50e3, 150e3], 1.0).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].low, 50e3);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let c = constraints();
        // 300k/100k and 150k/50k give the same ratio and the same loss
        let ranked = rank_candidates(&c, &[150e3, 300e3], &[50e3, 100e3], 1.0).unwrap();
        let exact: Vec<_> = ranked.iter().filter(|r| r.loss < 1e-12).collect();
        assert_eq!(exact.len(), 2);
        assert_eq!(exact[0].high, 150e3);
        assert_eq!(exact[1].high, 300e3);
        assert_eq!(ranked[0].high, 150e3);
    }

    #[test]
    fn test_empty_inputs() {
        let c = constraints();
        assert!(rank_candidates(&c, &[], &[50e3], 1.0).unwrap().is_empty());
    }
}
