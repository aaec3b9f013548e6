/// Per-axis spin toggles and time-based angle advancement
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};
use std::time::Instant;

use crate::config::AnimationConfig;
use crate::rotation::{Axis, RotationAngles};

/// Radians per second, half a revolution every second.
pub const DEFAULT_SPIN_RATE: f32 = PI;

/// Whether an axis is currently animating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spin {
    #[default]
    Stopped,
    Spinning,
}

impl Spin {
    pub fn toggled(self) -> Self {
        match self {
            Spin::Stopped => Spin::Spinning,
            Spin::Spinning => Spin::Stopped,
        }
    }

    pub fn is_spinning(self) -> bool {
        self == Spin::Spinning
    }
}

/// How an angle that has passed a full turn is brought back into range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapPolicy {
    /// Subtract one full turn when the angle exceeds it. A single large step
    /// can leave the angle above `2π`.
    Subtract,
    /// Reduce modulo a full turn, always landing in `[0, 2π)`.
    #[default]
    Modulo,
}

impl WrapPolicy {
    pub fn wrap(self, angle: f32) -> f32 {
        match self {
            WrapPolicy::Subtract => {
                if angle > TAU {
                    angle - TAU
                } else {
                    angle
                }
            }
            WrapPolicy::Modulo => {
                // rem_euclid rounds up to TAU for tiny negative inputs
                let reduced = angle.rem_euclid(TAU);
                if reduced >= TAU {
                    0.0
                } else {
                    reduced
                }
            }
        }
    }
}

/// Map a key press to the axis it toggles, if any.
pub fn axis_for_key(key: char) -> Option<Axis> {
    match key {
        'x' => Some(Axis::X),
        'y' => Some(Axis::Y),
        'z' => Some(Axis::Z),
        _ => None,
    }
}

/// Rotation angles, spin toggles, and the timestamp of the previous tick.
///
/// Owned by the host loop and handed to the keyboard and idle handlers.
#[derive(Debug, Clone)]
pub struct AnimationState {
    angles: RotationAngles,
    spins: [Spin; 3],
    last_frame: Instant,
    spin_rate: f32,
    wrap: WrapPolicy,
}

impl AnimationState {
    /// Start with every axis stopped at zero; the first tick measures from `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            angles: RotationAngles::zero(),
            spins: [Spin::Stopped; 3],
            last_frame: now,
            spin_rate: DEFAULT_SPIN_RATE,
            wrap: WrapPolicy::default(),
        }
    }

    pub fn with_config(config: &AnimationConfig, now: Instant) -> Self {
        Self {
            spin_rate: config.spin_rate,
            wrap: config.wrap,
            ..Self::new(now)
        }
    }

    pub fn angles(&self) -> RotationAngles {
        self.angles
    }

    pub fn spin(&self, axis: Axis) -> Spin {
        self.spins[axis.index()]
    }

    pub fn is_animating(&self) -> bool {
        self.spins.iter().any(|s| s.is_spinning())
    }

    pub fn toggle(&mut self, axis: Axis) {
        let spin = &mut self.spins[axis.index()];
        *spin = spin.toggled();
        let state = *spin;
        tracing::debug!(?axis, ?state, "axis toggled");
    }

    /// Keyboard handler. Returns `true` if the key toggled an axis.
    pub fn handle_key(&mut self, key: char) -> bool {
        match axis_for_key(key) {
            Some(axis) => {
                self.toggle(axis);
                true
            }
            None => false,
        }
    }

    /// Advance every spinning axis by `elapsed` seconds.
    ///
    /// Returns `true` when at least one axis is spinning, meaning the frame
    /// needs to be redrawn.
    pub fn advance(&mut self, elapsed: f32) -> bool {
        let step = elapsed * self.spin_rate;
        for axis in Axis::ALL {
            if self.spin(axis).is_spinning() {
                let angle = self.angles.get_mut(axis);
                *angle = self.wrap.wrap(*angle + step);
            }
        }
        self.is_animating()
    }

    /// Idle handler: advance by the wall time since the previous tick.
    pub fn tick(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.advance(elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_toggle_twice_restores() {
        let mut state = AnimationState::new(Instant::now());
        assert_eq!(state.spin(Axis::X), Spin::Stopped);

        assert!(state.handle_key('x'));
        assert_eq!(state.spin(Axis::X), Spin::Spinning);
        assert!(state.handle_key('x'));
        assert_eq!(state.spin(Axis::X), Spin::Stopped);
    }

    #[test]
    fn test_each_key_toggles_its_axis() {
        let mut state = AnimationState::new(Instant::now());
        state.handle_key('y');
        assert_eq!(state.spin(Axis::X), Spin::Stopped);
        assert_eq!(state.spin(Axis::Y), Spin::Spinning);
        assert_eq!(state.spin(Axis::Z), Spin::Stopped);

        state.handle_key('z');
        assert_eq!(state.spin(Axis::Z), Spin::Spinning);
    }

    #[test]
    fn test_other_keys_change_nothing() {
        let mut state = AnimationState::new(Instant::now());
        state.handle_key('y');
        let before_angles = state.angles();

        for key in ['X', 'a', 'q', ' ', '1', 'w'] {
            assert!(!state.handle_key(key));
        }
        assert_eq!(state.angles(), before_angles);
        assert_eq!(state.spin(Axis::X), Spin::Stopped);
        assert_eq!(state.spin(Axis::Y), Spin::Spinning);
        assert_eq!(state.spin(Axis::Z), Spin::Stopped);
    }

    #[test]
    fn test_advance_only_spinning_axes() {
        let mut state = AnimationState::new(Instant::now());
        assert!(!state.advance(1.0));
        assert_eq!(state.angles(), RotationAngles::zero());

        state.toggle(Axis::Z);
        assert!(state.advance(0.25));
        let angles = state.angles();
        assert_eq!(angles.x, 0.0);
        assert_eq!(angles.y, 0.0);
        assert!((angles.z - PI / 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_past_full_turn() {
        for policy in [WrapPolicy::Subtract, WrapPolicy::Modulo] {
            let config = AnimationConfig {
                wrap: policy,
                ..AnimationConfig::default()
            };
            let mut state = AnimationState::with_config(&config, Instant::now());
            state.toggle(Axis::X);

            // 1.5 turns then another 0.75: lands a quarter turn past 2π.
            state.advance(3.0);
            let a = state.angles().x;
            assert!((a - PI).abs() < 1e-5);
            state.advance(1.5);
            let expected = (a + 1.5 * PI) - TAU;
            let got = state.angles().x;
            assert!((got - expected).abs() < 1e-5, "{policy:?}: {got} vs {expected}");
            assert!((0.0..TAU).contains(&got));
        }
    }

    #[test]
    fn test_subtract_policy_can_overshoot() {
        assert!((WrapPolicy::Subtract.wrap(5.0 * PI) - 3.0 * PI).abs() < 1e-5);
        assert!((WrapPolicy::Modulo.wrap(5.0 * PI) - PI).abs() < 1e-5);
        assert_eq!(WrapPolicy::Modulo.wrap(TAU), 0.0);
        assert_eq!(WrapPolicy::Subtract.wrap(TAU), TAU);
    }

    #[test]
    fn test_modulo_stays_below_full_turn_for_small_negatives() {
        for angle in [-1e-8, -f32::EPSILON, -1e-30, -TAU - 1e-7] {
            let wrapped = WrapPolicy::Modulo.wrap(angle);
            assert!((0.0..TAU).contains(&wrapped), "{angle} -> {wrapped}");
        }
    }

    #[test]
    fn test_tick_uses_elapsed_wall_time() {
        let start = Instant::now();
        let mut state = AnimationState::new(start);
        state.toggle(Axis::Y);

        assert!(state.tick(start + Duration::from_millis(500)));
        assert!((state.angles().y - PI / 2.0).abs() < 1e-4);

        assert!(state.tick(start + Duration::from_millis(750)));
        assert!((state.angles().y - 3.0 * PI / 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_tick_without_spin_requests_no_redraw() {
        let start = Instant::now();
        let mut state = AnimationState::new(start);
        assert!(!state.tick(start + Duration::from_secs(2)));
        assert_eq!(state.angles(), RotationAngles::zero());
    }

    #[test]
    fn test_custom_spin_rate() {
        let config = AnimationConfig {
            spin_rate: 1.0,
            ..AnimationConfig::default()
        };
        let mut state = AnimationState::with_config(&config, Instant::now());
        state.toggle(Axis::X);
        state.advance(0.5);
        assert!((state.angles().x - 0.5).abs() < 1e-6);
    }
}
