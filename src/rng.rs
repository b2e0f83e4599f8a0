use rand::Rng;

/// Uniform integer rolls over an inclusive range.
///
/// Scene generation only ever needs small inclusive ranges, so the seam is a
/// single method. Callers must uphold `min <= max`; the production impl
/// panics on an empty range exactly like `rand` does, and tests that care
/// substitute a scripted double instead.
pub trait Dice {
    /// Returns an integer uniformly distributed in `[min, max]` inclusive.
    fn roll(&mut self, min: i32, max: i32) -> i32;
}

/// Production dice backed by the thread-local RNG. No seed control — every
/// run produces a fresh scene.
pub struct ThreadDice {
    rng: rand::rngs::ThreadRng,
}

impl ThreadDice {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for ThreadDice {
    fn default() -> Self {
        Self::new()
    }
}

impl Dice for ThreadDice {
    fn roll(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }
}

/// Dice that always lands on the low bound. Lets tests force the degenerate
/// scene (minimum count, all cubes, minimum size).
pub struct MinDice;

impl Dice for MinDice {
    fn roll(&mut self, min: i32, _max: i32) -> i32 {
        min
    }
}

/// Dice that replays a fixed script, then falls back to the low bound.
pub struct ScriptedDice {
    rolls: Vec<i32>,
    next: usize,
}

impl ScriptedDice {
    pub fn new(rolls: Vec<i32>) -> Self {
        Self { rolls, next: 0 }
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, min: i32, _max: i32) -> i32 {
        let value = self.rolls.get(self.next).copied().unwrap_or(min);
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_dice_stays_in_range() {
        let mut dice = ThreadDice::new();
        for _ in 0..10_000 {
            let v = dice.roll(-10, 10);
            assert!((-10..=10).contains(&v), "roll out of range: {}", v);
        }
    }

    #[test]
    fn thread_dice_covers_full_range() {
        let mut dice = ThreadDice::new();
        let mut seen = [false; 6];
        for _ in 0..10_000 {
            seen[dice.roll(0, 5) as usize] = true;
        }
        assert!(
            seen.iter().all(|&s| s),
            "10k rolls over [0,5] should hit every value, got {:?}",
            seen
        );
    }

    #[test]
    fn thread_dice_degenerate_range() {
        let mut dice = ThreadDice::new();
        for _ in 0..100 {
            assert_eq!(dice.roll(3, 3), 3);
        }
    }

    #[test]
    fn scripted_dice_replays_then_bottoms_out() {
        let mut dice = ScriptedDice::new(vec![7, 2]);
        assert_eq!(dice.roll(0, 10), 7);
        assert_eq!(dice.roll(0, 10), 2);
        assert_eq!(dice.roll(4, 10), 4, "exhausted script falls back to min");
    }
}
