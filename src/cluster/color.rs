use rand::Rng;
use rand::distributions::{Distribution, Standard};

/// Categorical display color, fixed for the lifetime of a cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Green,
    White,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Blue, Color::Green, Color::White];

    /// RGB components in `[0, 1]`.
    pub fn rgb(self) -> [f32; 3] {
        match self {
            Color::Blue => [0.0, 0.0, 1.0],
            Color::Green => [0.0, 1.0, 0.0],
            Color::White => [1.0, 1.0, 1.0],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::White => "white",
        }
    }
}

impl Distribution<Color> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        Color::ALL[rng.gen_range(0..Color::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_sampling_covers_palette() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let seen: HashSet<Color> = (0..200).map(|_| rng.r#gen::<Color>()).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_rgb_values() {
        assert_eq!(Color::Blue.rgb(), [0.0, 0.0, 1.0]);
        assert_eq!(Color::Green.rgb(), [0.0, 1.0, 0.0]);
        assert_eq!(Color::White.rgb(), [1.0, 1.0, 1.0]);
    }
}
