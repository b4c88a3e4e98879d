//! Consistency of colexification coding with the forms

use crate::error::{BuildError, Result};

const FULL: &str = "full colexification";
const PARTIAL: &str = "partial colexification";

/// Check the coded colexification status of a language against its forms
///
/// - identical forms must be coded as full colexification
/// - if one form contains the other, the coding must be full or partial
///   colexification, unless ‘five’ starts with `lim` and ‘hand’ with `im`
///   (reflexes of *lima next to a reduced *qalima)
pub fn check_colexification(
    language: &str,
    hand: Option<&str>,
    five: Option<&str>,
    colex: Option<&str>,
) -> Result<()> {
    let (Some(hand), Some(five)) = (hand, five) else {
        return Ok(());
    };
    let fail = |reason: String| {
        Err(BuildError::Colexification {
            language: language.to_string(),
            reason,
        })
    };

    if hand == five {
        if colex != Some(FULL) {
            return fail(format!(
                "identical forms {:?} coded as {:?}",
                hand,
                colex.unwrap_or("")
            ));
        }
    } else if five.contains(hand) || hand.contains(five) {
        let colexified = matches!(colex, Some(FULL) | Some(PARTIAL));
        if !colexified && !(five.starts_with("lim") && hand.starts_with("im")) {
            return fail(format!(
                "overlapping forms {:?} and {:?} coded as {:?}",
                hand,
                five,
                colex.unwrap_or("")
            ));
        }
    }
    Ok(())
}
