//! Scoring module - line clear points, level progression, gravity speed
//!
//! Levels start at 1 and rise every 10 cleared lines. Points for a landing
//! are the base value for the number of rows cleared times the level in
//! effect before the clear; the level is recomputed afterwards.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `lines` rows (1-4) in one landing at `level`
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Level reached after `total_lines` cumulative cleared lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level (milliseconds per row), floored at 100ms
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Counter update produced by one landing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub points: u32,
    pub total_lines: u32,
    pub level: u32,
    pub level_up: bool,
}

/// Apply `cleared` rows to the running `lines` total at `level`.
pub fn score_landing(cleared: usize, lines: u32, level: u32) -> ScoreResult {
    if cleared == 0 {
        return ScoreResult {
            points: 0,
            total_lines: lines,
            level,
            level_up: false,
        };
    }

    let total_lines = lines.saturating_add(cleared as u32);
    let new_level = level_for_lines(total_lines).max(level);

    ScoreResult {
        points: line_clear_score(cleared, level),
        total_lines,
        level: new_level,
        level_up: new_level > level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores() {
        assert_eq!(line_clear_score(0, 1), 0);
        assert_eq!(line_clear_score(1, 1), 100);
        assert_eq!(line_clear_score(2, 1), 300);
        assert_eq!(line_clear_score(3, 1), 500);
        assert_eq!(line_clear_score(4, 1), 800);
        assert_eq!(line_clear_score(4, 3), 2400);
        assert_eq!(line_clear_score(5, 1), 0);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(29), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 950);
        assert_eq!(drop_interval_ms(10), 550);
        assert_eq!(drop_interval_ms(19), 100);
        assert_eq!(drop_interval_ms(40), 100);
        assert_eq!(drop_interval_ms(0), 1000);
    }

    #[test]
    fn test_score_landing_without_clear_keeps_counters() {
        let r = score_landing(0, 7, 1);
        assert_eq!(
            r,
            ScoreResult {
                points: 0,
                total_lines: 7,
                level: 1,
                level_up: false
            }
        );
    }

    #[test]
    fn test_score_landing_crossing_level() {
        let r = score_landing(2, 9, 1);
        assert_eq!(r.total_lines, 11);
        assert_eq!(r.level, 2);
        assert!(r.level_up);
        assert_eq!(r.points, 300);

        let r = score_landing(2, 0, 1);
        assert_eq!(r.points, 300);
        assert!(!r.level_up);
    }

    #[test]
    fn test_points_use_level_before_clear() {
        let r = score_landing(4, 18, 2);
        assert_eq!(r.level, 3);
        assert_eq!(r.points, 800 * 2);
    }
}
