//! Scalar helpers shared by the motors, the camera and the facing update.

/// Advance `current` toward `target` by at most `max_delta`, never past it.
///
/// A negative `max_delta` moves away from `target`, matching how the motors
/// treat a remap curve that dips below zero.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let diff = target - current;
    if diff.abs() <= max_delta {
        return target;
    }
    current + diff.signum() * max_delta
}

pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// `numerator / denominator` clamped to [0, 1]. A non-positive denominator
/// means the window is already over, so the ratio is 1.0 rather than NaN.
pub fn ratio(numerator: f32, denominator: f32) -> f32 {
    if denominator <= 0.0 {
        return 1.0;
    }
    clamp01(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_towards_stops_at_target() {
        assert_eq!(move_towards(0.0, 1.0, 0.4), 0.4);
        assert_eq!(move_towards(0.9, 1.0, 0.4), 1.0);
        assert_eq!(move_towards(0.0, -1.0, 5.0), -1.0);
    }

    #[test]
    fn move_towards_negative_step_backs_off() {
        assert_eq!(move_towards(2.0, 5.0, -1.0), 1.0);
    }

    #[test]
    fn ratio_handles_empty_window() {
        assert_eq!(ratio(0.3, 0.0), 1.0);
        assert_eq!(ratio(0.1, 0.2), 0.5);
        assert_eq!(ratio(0.5, 0.2), 1.0);
        assert_eq!(ratio(-0.5, 0.2), 0.0);
    }
}
