//! Scoring module - line clear points and level progression
//!
//! Points for a lock are `LINE_SCORES[min(rows, 4)] * level`, using the level in
//! effect before the clear. Cleared rows count down a per-level quota; once the
//! quota is used up the level increases and the quota refills.

use crate::types::{ClearKind, LINES_PER_LEVEL, LINE_SCORES, START_LEVEL};

/// Score calculation result for one lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreAward {
    pub rows: u32,
    pub points: u32,
    /// `None` when no rows cleared
    pub kind: Option<ClearKind>,
}

/// Calculate line clear points for `rows` cleared at `level`
pub fn calculate_line_score(rows: usize, level: u32) -> u32 {
    LINE_SCORES[rows.min(LINE_SCORES.len() - 1)].saturating_mul(level)
}

/// Build the award for a lock event
pub fn score_lines(rows: usize, level: u32) -> ScoreAward {
    ScoreAward {
        rows: rows as u32,
        points: calculate_line_score(rows, level),
        kind: ClearKind::for_rows(rows),
    }
}

/// Score, level and line quota for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    score: u32,
    high_score: u32,
    level: u32,
    lines_remaining: i64,
    lines_per_level: u32,
    total_lines: u32,
}

impl Progress {
    pub fn new(lines_per_level: u32) -> Self {
        let lines_per_level = lines_per_level.max(1);
        Self {
            score: 0,
            high_score: 0,
            level: START_LEVEL,
            lines_remaining: lines_per_level as i64,
            lines_per_level,
            total_lines: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Best score seen by this value, kept across [`Progress::reset`]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Rows left to clear before the next level
    pub fn lines_remaining(&self) -> u32 {
        self.lines_remaining.max(0) as u32
    }

    pub fn total_lines(&self) -> u32 {
        self.total_lines
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        self.high_score = self.high_score.max(self.score);
    }

    /// Score a lock that cleared `rows` and advance the line quota.
    ///
    /// Returns the award, computed at the level before any level-up.
    pub fn apply_clear(&mut self, rows: usize) -> ScoreAward {
        let award = score_lines(rows, self.level);
        self.add_score(award.points);
        self.subtract_lines(rows as u32);
        award
    }

    fn subtract_lines(&mut self, rows: u32) {
        self.total_lines = self.total_lines.saturating_add(rows);
        self.lines_remaining -= rows as i64;
        if self.lines_remaining <= 0 {
            self.lines_remaining = self.lines_per_level as i64;
            self.level += 1;
        }
    }

    /// Start a new game, keeping the high score
    pub fn reset(&mut self) {
        let high_score = self.high_score;
        *self = Self::new(self.lines_per_level);
        self.high_score = high_score;
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new(LINES_PER_LEVEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_by_level() {
        assert_eq!(calculate_line_score(0, 3), 0);
        assert_eq!(calculate_line_score(1, 1), 10);
        assert_eq!(calculate_line_score(2, 2), 50);
        assert_eq!(calculate_line_score(3, 1), 50);
        assert_eq!(calculate_line_score(4, 2), 200);
        assert_eq!(calculate_line_score(6, 1), 100);
    }

    #[test]
    fn test_award_kind() {
        assert_eq!(score_lines(0, 1).kind, None);
        assert_eq!(score_lines(2, 1).kind, Some(ClearKind::Line));
        assert_eq!(score_lines(4, 1).kind, Some(ClearKind::Bonus));
    }

    #[test]
    fn test_level_up_after_quota() {
        let mut p = Progress::new(8);
        assert_eq!(p.level(), 1);

        p.apply_clear(4);
        assert_eq!(p.level(), 1);
        assert_eq!(p.lines_remaining(), 4);

        p.apply_clear(3);
        assert_eq!(p.lines_remaining(), 1);

        // Overshooting the quota refills it rather than carrying over.
        let award = p.apply_clear(2);
        assert_eq!(award.points, 25);
        assert_eq!(p.level(), 2);
        assert_eq!(p.lines_remaining(), 8);
        assert_eq!(p.total_lines(), 9);
    }

    #[test]
    fn test_award_uses_level_before_clear() {
        let mut p = Progress::new(1);
        let award = p.apply_clear(1);
        assert_eq!(award.points, 10);
        assert_eq!(p.level(), 2);
        let award = p.apply_clear(1);
        assert_eq!(award.points, 20);
    }

    #[test]
    fn test_reset_keeps_high_score() {
        let mut p = Progress::default();
        p.apply_clear(4);
        assert_eq!(p.high_score(), 100);
        p.reset();
        assert_eq!(p.score(), 0);
        assert_eq!(p.level(), 1);
        assert_eq!(p.high_score(), 100);
    }

    #[test]
    fn test_no_clear_keeps_quota() {
        let mut p = Progress::default();
        let award = p.apply_clear(0);
        assert_eq!(award, ScoreAward::default());
        assert_eq!(p.lines_remaining(), 8);
    }
}
