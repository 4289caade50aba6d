//! Engagement lift goal tracking

/// Fixed engagement lift goal, in percent
pub const LIFT_TARGET_PERCENT: f64 = 30.0;

/// Progress toward the lift goal in percent, clamped to `0..=100`.
///
/// A lift past the goal fills the bar; the raw lift is shown in the label.
pub fn lift_progress(engagement_lift: f64) -> f64 {
    if !engagement_lift.is_finite() {
        return 0.0;
    }
    (engagement_lift / LIFT_TARGET_PERCENT * 100.0).clamp(0.0, 100.0)
}

pub fn target_reached(engagement_lift: f64) -> bool {
    engagement_lift >= LIFT_TARGET_PERCENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(15.0, 50.0)]
    #[case(30.0, 100.0)]
    #[case(32.0, 100.0)]
    #[case(-5.0, 0.0)]
    #[case(f64::NAN, 0.0)]
    fn progress_is_clamped(#[case] lift: f64, #[case] expected: f64) {
        assert!((lift_progress(lift) - expected).abs() < 1e-9);
    }

    #[test]
    fn partial_progress_matches_ratio() {
        assert!((lift_progress(12.0) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn target_reached_at_goal() {
        assert!(target_reached(30.0));
        assert!(target_reached(32.0));
        assert!(!target_reached(29.9));
    }
}
