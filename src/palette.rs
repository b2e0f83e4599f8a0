use crate::rng::Dice;

/// The six face colors every generated shape draws from.
pub const PALETTE: [[f32; 3]; 6] = [
    [1.0, 1.0, 0.0], // yellow
    [0.0, 1.0, 0.0], // green
    [0.0, 0.0, 1.0], // blue
    [1.0, 0.0, 1.0], // magenta
    [0.0, 1.0, 1.0], // cyan
    [1.0, 0.0, 0.0], // red
];

/// Picks one palette color uniformly at random.
pub fn pick_color(dice: &mut dyn Dice) -> [f32; 3] {
    PALETTE[dice.roll(0, PALETTE.len() as i32 - 1) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedDice;

    #[test]
    fn pick_color_indexes_palette() {
        let mut dice = ScriptedDice::new(vec![0, 5]);
        assert_eq!(pick_color(&mut dice), PALETTE[0]);
        assert_eq!(pick_color(&mut dice), PALETTE[5]);
    }

    #[test]
    fn palette_colors_are_saturated_primaries() {
        for color in PALETTE {
            for channel in color {
                assert!(channel == 0.0 || channel == 1.0);
            }
        }
    }
}
