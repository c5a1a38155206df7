//! Level module - speed-up schedule applied on every level advance
//!
//! The game steps once every `next_game_tick` main loop ticks. Each level
//! advance shortens that interval according to an ordered rule table: the
//! first rule whose range contains the current interval decides how much is
//! taken off. The interval never drops below [`MIN_GAME_TICK`].

use std::ops::RangeInclusive;

use crate::types::ROWS_PER_LEVEL;

/// Shortest possible game step interval; a step every tick.
pub const MIN_GAME_TICK: u32 = 1;

/// One row of the speed-up schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedUpRule {
    /// Intervals this rule applies to.
    pub range: RangeInclusive<u32>,
    /// Ticks taken off the interval.
    pub decrement: u32,
}

/// Speed-up rules, evaluated in order.
pub const SPEED_UP_RULES: [SpeedUpRule; 4] = [
    SpeedUpRule {
        range: 1..=1,
        decrement: 0,
    },
    SpeedUpRule {
        range: 2..=10,
        decrement: 1,
    },
    SpeedUpRule {
        range: 11..=20,
        decrement: 2,
    },
    SpeedUpRule {
        range: 21..=u32::MAX,
        decrement: 10,
    },
];

/// Game step interval after one level advance from `current`.
pub fn next_game_tick_after_level_up(current: u32) -> u32 {
    let decrement = SPEED_UP_RULES
        .iter()
        .find(|rule| rule.range.contains(&current))
        .map_or(0, |rule| rule.decrement);

    current.saturating_sub(decrement).max(MIN_GAME_TICK)
}

/// Whether reaching `rows` cleared rows advances the level.
pub fn is_level_up(rows: u32) -> bool {
    rows > 0 && rows % ROWS_PER_LEVEL == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::INIT_NEXT_GAME_TICK;

    #[test]
    fn decrement_depends_on_current_interval() {
        assert_eq!(next_game_tick_after_level_up(50), 40);
        assert_eq!(next_game_tick_after_level_up(21), 11);
        assert_eq!(next_game_tick_after_level_up(20), 18);
        assert_eq!(next_game_tick_after_level_up(11), 9);
        assert_eq!(next_game_tick_after_level_up(10), 9);
        assert_eq!(next_game_tick_after_level_up(2), 1);
    }

    #[test]
    fn interval_floors_at_one() {
        assert_eq!(next_game_tick_after_level_up(1), 1);
        assert_eq!(next_game_tick_after_level_up(0), MIN_GAME_TICK);
    }

    #[test]
    fn schedule_from_initial_interval() {
        let mut tick = INIT_NEXT_GAME_TICK;
        let mut seen = vec![tick];
        for _ in 0..20 {
            let next = next_game_tick_after_level_up(tick);
            assert!(next <= tick);
            assert!(next >= MIN_GAME_TICK);
            tick = next;
            seen.push(tick);
        }
        assert_eq!(
            &seen[..12],
            &[50, 40, 30, 20, 18, 16, 14, 12, 10, 9, 8, 7]
        );
        assert_eq!(tick, 1);
    }

    #[test]
    fn rules_cover_every_positive_interval_once() {
        for value in [1, 2, 10, 11, 20, 21, 1000, u32::MAX] {
            let hits = SPEED_UP_RULES
                .iter()
                .filter(|r| r.range.contains(&value))
                .count();
            assert_eq!(hits, 1, "interval {value}");
        }
    }

    #[test]
    fn level_up_every_two_rows() {
        assert!(!is_level_up(0));
        assert!(!is_level_up(1));
        assert!(is_level_up(2));
        assert!(!is_level_up(3));
        assert!(is_level_up(4));
    }
}
