//! Per-frame motion of a single falling object.
//!
//! Descent is linear and delta-scaled, so the real-time fall rate is the same
//! at any frame rate. Rotation accumulates forever; only its value modulo a
//! full turn is visible.

use super::object::FallingObject;

/// Outcome of advancing one object by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Falling,
    /// Dropped below the exit threshold and should be replaced
    Exited,
}

/// Move `object` down and spin it by `delta` seconds.
///
/// `delta` is expected to be non-negative; it comes from the frame clock.
pub fn advance(object: &mut FallingObject, delta: f32, exit_threshold: f32) -> Advance {
    object.position.y -= object.vertical_speed * delta;
    object.rotation += object.rotation_rate * delta;

    if object.position.y < exit_threshold {
        Advance::Exited
    } else {
        Advance::Falling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rain::object::IdAllocator;
    use bevy::prelude::*;

    const EXIT: f32 = -25.0;

    fn object_at(y: f32, speed: f32) -> FallingObject {
        let mut ids = IdAllocator::default();
        FallingObject::new(
            ids.allocate(),
            Vec3::new(0.0, y, 0.0),
            speed,
            Vec3::new(0.1, 0.2, 0.3),
        )
    }

    #[test]
    fn test_descends_by_speed_times_delta() {
        let mut object = object_at(10.0, 4.0);
        assert_eq!(advance(&mut object, 0.5, EXIT), Advance::Falling);
        assert!((object.position.y - 8.0).abs() < 1e-6);
        assert!((object.rotation - Vec3::new(0.05, 0.1, 0.15)).length() < 1e-6);
    }

    #[test]
    fn test_descent_is_strictly_monotonic() {
        let mut object = object_at(25.0, 1.0);
        let mut last = object.position.y;
        for _ in 0..200 {
            advance(&mut object, 0.016, EXIT);
            assert!(object.position.y < last);
            last = object.position.y;
        }
    }

    #[test]
    fn test_frame_rate_independence() {
        let mut once = object_at(20.0, 3.7);
        let mut twice = once.clone();

        advance(&mut once, 0.1, EXIT);
        advance(&mut twice, 0.05, EXIT);
        advance(&mut twice, 0.05, EXIT);

        assert!((once.position.y - twice.position.y).abs() < 1e-5);
        assert!((once.rotation - twice.rotation).length() < 1e-5);
    }

    #[test]
    fn test_exit_is_strictly_below_threshold() {
        let mut object = object_at(EXIT + 1.0, 1.0);
        // Lands exactly on the threshold: still visible
        assert_eq!(advance(&mut object, 1.0, EXIT), Advance::Falling);
        assert_eq!(advance(&mut object, 0.01, EXIT), Advance::Exited);
    }

    #[test]
    fn test_already_below_threshold_exits() {
        let mut object = object_at(EXIT - 0.001, 2.0);
        assert_eq!(advance(&mut object, 0.016, EXIT), Advance::Exited);
    }

    #[test]
    fn test_zero_delta_keeps_state() {
        let mut object = object_at(3.0, 2.0);
        let before = object.clone();
        assert_eq!(advance(&mut object, 0.0, EXIT), Advance::Falling);
        assert_eq!(object, before);
    }
}
