use serde::Serialize;

/// Own speed relative to the opponent's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpeedOrder {
    Faster,
    Slower,
    Tie,
}

impl SpeedOrder {
    pub fn compare(own_speed: u32, opponent_speed: u32) -> Self {
        match own_speed.cmp(&opponent_speed) {
            std::cmp::Ordering::Greater => SpeedOrder::Faster,
            std::cmp::Ordering::Less => SpeedOrder::Slower,
            std::cmp::Ordering::Equal => SpeedOrder::Tie,
        }
    }
}

/// Inputs of one survival estimate, all from the own side's point of view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurvivalInput {
    pub own_speed: u32,
    pub opponent_speed: u32,
    /// Own best expected damage against the opponent
    pub outgoing: f64,
    pub opponent_hp: u32,
    /// Opponent's best expected damage against us
    pub incoming: f64,
    pub own_hp: u32,
}

impl SurvivalInput {
    fn takes_hit(&self) -> f64 {
        let hp = f64::from(self.own_hp.max(1));
        1.0 - (self.incoming / hp).min(1.0)
    }

    fn moves_first(&self) -> f64 {
        if self.outgoing >= f64::from(self.opponent_hp) {
            1.0
        } else {
            self.takes_hit()
        }
    }

    fn moves_second(&self, assume_first_strike: bool) -> f64 {
        if assume_first_strike {
            self.moves_first()
        } else {
            self.takes_hit()
        }
    }
}

/// Chance-like estimate in `[0, 1]` that the own side comes out on top
pub fn survival_estimate(input: &SurvivalInput, assume_first_strike: bool) -> f64 {
    match SpeedOrder::compare(input.own_speed, input.opponent_speed) {
        SpeedOrder::Faster => input.moves_first(),
        SpeedOrder::Slower => input.moves_second(assume_first_strike),
        SpeedOrder::Tie => 0.5 * input.moves_first() + 0.5 * input.moves_second(assume_first_strike),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(own_speed: u32, opponent_speed: u32, outgoing: f64, incoming: f64) -> SurvivalInput {
        SurvivalInput {
            own_speed,
            opponent_speed,
            outgoing,
            opponent_hp: 100,
            incoming,
            own_hp: 100,
        }
    }

    #[test]
    fn test_faster_with_ko() {
        assert_eq!(survival_estimate(&input(120, 80, 150.0, 500.0), true), 1.0);
        assert_eq!(survival_estimate(&input(120, 80, 100.0, 500.0), false), 1.0);
    }

    #[test]
    fn test_faster_without_ko() {
        let estimate = survival_estimate(&input(120, 80, 50.0, 30.0), true);
        assert!((estimate - 0.7).abs() < 1e-9);
        assert_eq!(survival_estimate(&input(120, 80, 50.0, 250.0), true), 0.0);
    }

    #[test]
    fn test_slower_takes_80_percent() {
        let estimate = survival_estimate(&input(60, 90, 40.0, 80.0), true);
        assert!((estimate - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_slower_first_strike_policy() {
        // Slower but able to KO: only counts when our hit is assumed to land first
        assert_eq!(survival_estimate(&input(60, 90, 200.0, 80.0), true), 1.0);
        let estimate = survival_estimate(&input(60, 90, 200.0, 80.0), false);
        assert!((estimate - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_speed_tie_both_ko() {
        assert_eq!(survival_estimate(&input(100, 100, 300.0, 300.0), true), 1.0);
        assert_eq!(survival_estimate(&input(100, 100, 300.0, 300.0), false), 0.5);
    }

    #[test]
    fn test_zero_hp_is_floored() {
        let mut i = input(50, 60, 0.0, 0.5);
        i.own_hp = 0;
        let estimate = survival_estimate(&i, false);
        assert!((estimate - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_speed_order() {
        assert_eq!(SpeedOrder::compare(10, 5), SpeedOrder::Faster);
        assert_eq!(SpeedOrder::compare(5, 10), SpeedOrder::Slower);
        assert_eq!(SpeedOrder::compare(7, 7), SpeedOrder::Tie);
    }
}
