//! Ambient wind state

use rand::Rng;

/// Strongest wind target in either direction
pub const WIND_MAX: f32 = 0.8;

// Per-frame weight kept from the previous wind value
const SMOOTHING: f32 = 0.99;
// Frames between wind retargets
const RETARGET_MIN: f32 = 60.0;
const RETARGET_MAX: f32 = 180.0;

/// Horizontal wind applied to every flake
///
/// The applied strength is a first-order low-pass of a target that is
/// re-rolled every 60-180 frames, so gusts build and die down gradually
/// instead of jumping.
#[derive(Clone, Copy, Debug, Default)]
pub struct Wind {
    current: f32,
    target: f32,
    countdown: f32,
}

impl Wind {
    /// Create a calm wind (zero strength, retarget due immediately)
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame and return the smoothed wind strength
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> f32 {
        self.countdown -= 1.0;
        if self.countdown <= 0.0 {
            self.target = rng.gen_range(-WIND_MAX..WIND_MAX);
            self.countdown = rng.gen_range(RETARGET_MIN..RETARGET_MAX);
        }

        self.current = self.current * SMOOTHING + self.target * (1.0 - SMOOTHING);
        self.current
    }

    /// Smoothed wind strength currently applied
    pub fn current(&self) -> f32 {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_starts_calm() {
        assert_eq!(Wind::new().current(), 0.0);
    }

    #[test]
    fn test_step_moves_off_zero() {
        let mut wind = Wind::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..500 {
            wind.step(&mut rng);
        }
        assert!(wind.current() != 0.0);
    }

    #[test]
    fn test_never_exceeds_target_range() {
        let mut wind = Wind::new();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..20_000 {
            let strength = wind.step(&mut rng);
            assert!(strength.abs() <= WIND_MAX, "wind {strength} out of range");
        }
    }
}
