//! Fire-and-forget notifications for UI and audio layers.
//!
//! Every method has an empty default so listeners only implement what they
//! care about.

use crate::scoring::ScoreAward;

pub trait GameEvents {
    /// A piece locked; `rows` may be zero
    fn on_lines_cleared(&mut self, _rows: usize) {}

    /// At least one row cleared; `award.kind` separates line and bonus clears
    fn on_clear(&mut self, _award: &ScoreAward) {}

    /// A soft drop finished resting on an obstruction or the floor
    fn on_soft_drop_land(&mut self) {}

    /// Gravity moved the piece down one row
    fn on_block_descend(&mut self) {}

    /// Gravity brought the piece to rest; the lock delay started
    fn on_land(&mut self) {}

    fn on_level_up(&mut self, _level: u32) {}

    fn on_game_over(&mut self) {}
}

/// Listener that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEvents;

impl GameEvents for NoopEvents {}

impl<E: GameEvents + ?Sized> GameEvents for &mut E {
    fn on_lines_cleared(&mut self, rows: usize) {
        (**self).on_lines_cleared(rows)
    }

    fn on_clear(&mut self, award: &ScoreAward) {
        (**self).on_clear(award)
    }

    fn on_soft_drop_land(&mut self) {
        (**self).on_soft_drop_land()
    }

    fn on_block_descend(&mut self) {
        (**self).on_block_descend()
    }

    fn on_land(&mut self) {
        (**self).on_land()
    }

    fn on_level_up(&mut self, level: u32) {
        (**self).on_level_up(level)
    }

    fn on_game_over(&mut self) {
        (**self).on_game_over()
    }
}
