use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DEFAULT_SEED: u64 = 0x5741_5253;
pub const DEFAULT_STAR_COUNT: usize = 150;

/// One background star. Positions are viewport percentages so the field
/// scales with the window.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub twinkle_delay: f64,
    pub twinkle_duration: f64,
}

impl Star {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; opacity: {:.2}; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.x,
            self.y,
            self.size,
            self.size,
            self.opacity,
            self.twinkle_delay,
            self.twinkle_duration
        )
    }
}

/// Generates the star field. A fixed seed gives identical markup on the
/// server and in the hydrating client.
pub fn generate(seed: u64, count: usize) -> Vec<Star> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Star {
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(1.0..3.0),
            opacity: rng.gen_range(0.2..1.0),
            twinkle_delay: rng.gen_range(0.0..5.0),
            twinkle_duration: rng.gen_range(2.0..6.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(generate(7, 20), generate(7, 20));
        assert_ne!(generate(7, 20), generate(8, 20));
    }

    #[test]
    fn test_bounds() {
        let stars = generate(DEFAULT_SEED, DEFAULT_STAR_COUNT);
        assert_eq!(stars.len(), DEFAULT_STAR_COUNT);
        for star in stars {
            assert!((0.0..100.0).contains(&star.x));
            assert!((0.0..100.0).contains(&star.y));
            assert!((1.0..3.0).contains(&star.size));
            assert!((0.2..1.0).contains(&star.opacity));
        }
    }

    #[test]
    fn test_style() {
        let star = Star {
            x: 10.0,
            y: 20.5,
            size: 2.0,
            opacity: 0.5,
            twinkle_delay: 1.0,
            twinkle_duration: 3.0,
        };
        assert_eq!(
            star.style(),
            "left: 10.00%; top: 20.50%; width: 2.00px; height: 2.00px; opacity: 0.50; animation-delay: 1.00s; animation-duration: 3.00s;"
        );
    }
}
