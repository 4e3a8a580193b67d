//! Checkout rules for an x01 countdown leg.
//!
//! A player counts down from the format's starting score (301/501). Each
//! throw subtracts its points. A throw that would go below zero is a bust; a
//! throw that lands exactly on zero only counts if it hit a double segment.

/// Three darts at treble 20.
pub const MAX_POINTS_PER_TURN: i32 = 180;

/// Darts per round; the engine opens a new round after the third throw.
pub const THROWS_PER_ROUND: i32 = 3;

/// Decision for a candidate throw against the current remaining score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrowOutcome {
    /// Throw accepted, leg continues.
    Scored { remaining: i32 },
    /// Throw accepted and it finished the leg (remaining is zero).
    Checkout,
}

impl ThrowOutcome {
    pub fn remaining(&self) -> i32 {
        match self {
            ThrowOutcome::Scored { remaining } => *remaining,
            ThrowOutcome::Checkout => 0,
        }
    }

    pub fn is_checkout(&self) -> bool {
        matches!(self, ThrowOutcome::Checkout)
    }
}

/// Why a candidate throw was rejected. Rejections never mutate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreViolation {
    /// Points outside [0, 180].
    PointsOutOfRange,
    /// Would take the remaining score below zero.
    Bust,
    /// Lands on zero without a double segment.
    NoDoubleOnCheckout,
}

/// Apply a candidate throw to the current remaining score.
///
/// This is the single policy point for bust handling: a bust is rejected
/// outright, not recorded as a zero-effect throw. Changing that policy means
/// changing this function's `Bust` arm and the service's persistence of it.
pub fn apply_throw(
    current_remaining: i32,
    points: i32,
    is_double: bool,
) -> Result<ThrowOutcome, ScoreViolation> {
    if !(0..=MAX_POINTS_PER_TURN).contains(&points) {
        return Err(ScoreViolation::PointsOutOfRange);
    }

    let remaining = current_remaining - points;
    if remaining < 0 {
        return Err(ScoreViolation::Bust);
    }
    if remaining == 0 {
        if !is_double {
            return Err(ScoreViolation::NoDoubleOnCheckout);
        }
        return Ok(ThrowOutcome::Checkout);
    }

    Ok(ThrowOutcome::Scored { remaining })
}

/// Position of the next throw within a player's round sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundPosition {
    /// 1-based round number.
    pub round_number: i32,
    /// 1-based index within the round, 1-3.
    pub throw_number: i32,
}

/// Derive the next throw's round/index from the player's prior throw count.
///
/// Rounds are dense and sequential: exactly three throws fill a round, the
/// fourth throw opens the next one at index 1. Undo removes the newest throw,
/// so the derivation stays consistent after retraction.
pub fn round_position(prior_throws: u64) -> RoundPosition {
    let prior = prior_throws as i32;
    RoundPosition {
        round_number: prior / THROWS_PER_ROUND + 1,
        throw_number: prior % THROWS_PER_ROUND + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_a_plain_throw() {
        assert_eq!(
            apply_throw(501, 100, false),
            Ok(ThrowOutcome::Scored { remaining: 401 })
        );
    }

    #[test]
    fn rejects_points_out_of_range() {
        assert_eq!(apply_throw(501, 181, false), Err(ScoreViolation::PointsOutOfRange));
        assert_eq!(apply_throw(501, -1, false), Err(ScoreViolation::PointsOutOfRange));
        // Boundary values are fine
        assert!(apply_throw(501, 180, false).is_ok());
        assert!(apply_throw(501, 0, false).is_ok());
    }

    #[test]
    fn rejects_bust() {
        assert_eq!(apply_throw(40, 41, false), Err(ScoreViolation::Bust));
        // A double doesn't rescue a bust
        assert_eq!(apply_throw(40, 41, true), Err(ScoreViolation::Bust));
    }

    #[test]
    fn checkout_requires_a_double() {
        assert_eq!(
            apply_throw(40, 40, false),
            Err(ScoreViolation::NoDoubleOnCheckout)
        );
        assert_eq!(apply_throw(40, 40, true), Ok(ThrowOutcome::Checkout));
        assert!(apply_throw(40, 40, true).unwrap().is_checkout());
    }

    #[test]
    fn double_flag_is_irrelevant_mid_leg() {
        // Hitting a double without finishing is an ordinary score
        assert_eq!(
            apply_throw(100, 40, true),
            Ok(ThrowOutcome::Scored { remaining: 60 })
        );
    }

    #[test]
    fn walks_the_501_example_leg() {
        // 501 -> 401 -> 261 -> 201 -> 21 -> 2 -> checkout
        let mut remaining = 501;
        for (points, is_double) in [(100, false), (140, false), (60, true), (180, false), (19, false)]
        {
            let outcome = apply_throw(remaining, points, is_double).unwrap();
            remaining = outcome.remaining();
        }
        assert_eq!(remaining, 2);
        assert_eq!(apply_throw(remaining, 2, true), Ok(ThrowOutcome::Checkout));
    }

    #[test]
    fn round_positions_are_dense() {
        let positions: Vec<(i32, i32)> = (0..7)
            .map(|n| {
                let p = round_position(n);
                (p.round_number, p.throw_number)
            })
            .collect();
        assert_eq!(
            positions,
            vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3), (3, 1)]
        );
    }
}
