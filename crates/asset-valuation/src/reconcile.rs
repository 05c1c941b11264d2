//! Combine several source readings into one ledger balance.

use crate::types::ExtractedValue;
use crate::validity::is_valid;

/// Round the mean of the valid readings to the nearest whole unit.
///
/// Returns `None` when no reading is valid; no balance should be sent then.
pub fn reconcile(values: &[ExtractedValue]) -> Option<f64> {
    let valid: Vec<f64> = values
        .iter()
        .filter(|v| is_valid(*v))
        .flatten()
        .copied()
        .collect();

    if valid.is_empty() {
        return None;
    }

    let mean = valid.iter().sum::<f64>() / valid.len() as f64;
    Some(mean.round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sources_are_averaged() {
        assert_eq!(
            reconcile(&[Some(300_000.0), Some(310_000.0)]),
            Some(305_000.0)
        );
    }

    #[test]
    fn test_failed_source_is_ignored() {
        assert_eq!(reconcile(&[Some(300_000.0), None]), Some(300_000.0));
        assert_eq!(reconcile(&[Some(f64::NAN), Some(410_000.0)]), Some(410_000.0));
    }

    #[test]
    fn test_no_valid_readings() {
        assert_eq!(reconcile(&[None, None]), None);
        assert_eq!(reconcile(&[]), None);
        assert_eq!(reconcile(&[Some(f64::NAN)]), None);
        assert_eq!(reconcile(&[Some(f64::INFINITY)]), None);
    }

    #[test]
    fn test_mean_is_rounded() {
        assert_eq!(reconcile(&[Some(100.0), Some(101.0)]), Some(101.0));
        assert_eq!(reconcile(&[Some(100.2), Some(100.4)]), Some(100.0));
    }
}
