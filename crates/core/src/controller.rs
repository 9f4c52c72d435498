//! Piece controller - owns the falling piece and drives the game forward
//!
//! The controller ties together the board, the shape queue and scoring. Each
//! call to [`PieceController::tick`] advances three countdown timers and
//! performs at most one action per timer:
//!
//! - **Debounce timer**: rotate or soft drop (edge-triggered input)
//! - **Repeat timer**: one-cell horizontal move (level-triggered input)
//! - **Gravity timer**: one-row descent, or a lock once the piece is resting
//!
//! Every move is tested against the board before it is committed, so illegal
//! moves are silent no-ops and a rotation never partially applies.

use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::events::{GameEvents, NoopEvents};
use crate::piece::{Piece, PieceCells};
use crate::rng::ShapeQueue;
use crate::scoring::Progress;
use crate::template::ShapeTemplate;
use crate::types::{Coord, InputState, LockEvent, PieceId, START_LEVEL};

/// Timer value meaning "expired, ready to act"
const READY: f32 = -1.0;

/// Controller lifecycle
///
/// `Idle → Active → (lock → Active)* → GameOver`. GameOver is terminal until
/// [`PieceController::restart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Active,
    GameOver,
}

/// Complete falling-piece state
#[derive(Debug, Clone)]
pub struct PieceController<E: GameEvents = NoopEvents> {
    config: GameConfig,
    board: Board,
    queue: ShapeQueue,
    progress: Progress,
    events: E,
    active: Option<Piece>,
    phase: Phase,
    next_piece_id: PieceId,
    /// Horizontal repeat countdown
    input_timer: f32,
    /// Rotate/drop debounce countdown
    rotate_timer: f32,
    /// Gravity / lock delay countdown
    fall_timer: f32,
    /// Gravity interval of the active piece, fixed at spawn
    fall_delay: f32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl PieceController<NoopEvents> {
    /// Create a controller with no event listener
    pub fn new(config: GameConfig, queue: ShapeQueue) -> Self {
        Self::with_events(config, queue, NoopEvents)
    }

    /// Create a controller drawing from `templates`, seeded by `config.seed`.
    ///
    /// Returns `None` if `templates` is empty.
    pub fn from_templates(config: GameConfig, templates: Vec<ShapeTemplate>) -> Option<Self> {
        let queue = ShapeQueue::new(templates, config.seed)?;
        Some(Self::new(config, queue))
    }
}

impl<E: GameEvents> PieceController<E> {
    /// Create a controller that reports to `events`
    pub fn with_events(config: GameConfig, queue: ShapeQueue, events: E) -> Self {
        let config = config.sanitized();
        let board = Board::with_size(config.board_width, config.board_height);
        let progress = Progress::new(config.lines_per_level);
        let fall_delay = config.fall_delay_for(START_LEVEL);

        Self {
            config,
            board,
            queue,
            progress,
            events,
            active: None,
            phase: Phase::Idle,
            next_piece_id: 1,
            input_timer: READY,
            rotate_timer: READY,
            fall_timer: fall_delay,
            fall_delay,
            last_event: None,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        let first = self.queue.draw_random();
        self.spawn(&first);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for setting up scenarios
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// Absolute cells of the active piece (empty when there is none)
    pub fn active_cells(&self) -> PieceCells {
        self.active.map(|p| p.cells()).unwrap_or_default()
    }

    /// Template that spawns after the current piece locks
    pub fn next_template(&self) -> &ShapeTemplate {
        self.queue.peek()
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn score(&self) -> u32 {
        self.progress.score()
    }

    pub fn level(&self) -> u32 {
        self.progress.level()
    }

    /// Gravity interval of the active piece, in seconds
    pub fn fall_delay(&self) -> f32 {
        self.fall_delay
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Spawn a piece from `template` with its top edge at the spawn ceiling.
    ///
    /// If the piece would overlap settled cells the game ends instead and the
    /// piece is not placed. Returns true if the piece became active.
    pub fn spawn(&mut self, template: &ShapeTemplate) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }

        let mask = *template.mask();
        let top = mask.top().unwrap_or(0);
        let anchor = Coord::new(
            self.config.spawn_column,
            self.config.board_height as i32 - top,
        );

        let id = self.next_piece_id;
        self.next_piece_id = self.next_piece_id.wrapping_add(1);
        let piece = Piece::new(id, mask, template.color(), anchor);

        if self.board.collides(piece.cells(), piece.id) {
            self.active = None;
            self.phase = Phase::GameOver;
            info!(
                "game over: '{}' blocked at spawn (score {}, level {})",
                template.name(),
                self.progress.score(),
                self.progress.level()
            );
            self.events.on_game_over();
            return false;
        }

        self.active = Some(piece);
        self.phase = Phase::Active;
        self.input_timer = READY;
        self.rotate_timer = READY;
        self.fall_delay = self.config.fall_delay_for(self.progress.level());
        self.fall_timer = self.fall_delay;
        debug!("spawned piece {} from '{}' at {:?}", id, template.name(), anchor);

        true
    }

    /// Board query for the active piece displaced by `(dx, dy)`.
    ///
    /// False when there is no active piece.
    pub fn collides(&self, dx: i32, dy: i32) -> bool {
        self.active
            .is_some_and(|p| self.board.collides(p.cells_offset(dx, dy), p.id))
    }

    /// Check if piece can move in given direction
    pub fn can_move(&self, dx: i32, dy: i32) -> bool {
        self.active.is_some() && !self.collides(dx, dy)
    }

    /// Check if the active piece is resting on something
    pub fn is_grounded(&self) -> bool {
        self.collides(0, -1)
    }

    /// Try to move the active piece; blocked moves leave it untouched
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let Some(piece) = self.active else {
            return false;
        };

        if self.board.collides(piece.cells_offset(dx, dy), piece.id) {
            return false;
        }

        self.active = Some(piece.shifted(dx, dy));
        true
    }

    /// Rotate clockwise keeping the bottom edge row.
    ///
    /// The rotated copy is tested first and only replaces the live piece if it
    /// fits, so a failed rotation leaves mask and position as they were.
    pub fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active else {
            return false;
        };

        let rotated = piece.rotated_cw();
        if self.board.collides(rotated.cells(), rotated.id) {
            debug!("rotation of piece {} rejected", piece.id);
            return false;
        }

        self.active = Some(rotated);
        true
    }

    /// Drop the active piece until it rests on an obstruction or the floor.
    /// Returns the number of rows dropped.
    pub fn soft_drop(&mut self) -> u32 {
        let mut rows = 0;
        while self.try_move(0, -1) {
            rows += 1;
        }
        rows
    }

    /// Pull the active piece back inside the side walls
    fn clamp_horizontal(&mut self) {
        let width = self.board.width() as i32;
        if let Some(piece) = self.active.as_mut() {
            *piece = piece.clamped(width);
        }
    }

    /// Main game tick - advance timers, apply input and gravity.
    ///
    /// `delta` is in seconds. Returns true if a piece locked this tick.
    pub fn tick(&mut self, delta: f32, input: InputState) -> bool {
        if self.phase != Phase::Active || self.active.is_none() {
            return false;
        }
        // A NaN would poison every timer for good.
        if !delta.is_finite() {
            debug!("ignoring non-finite tick delta {}", delta);
            return false;
        }
        let delta = delta.max(0.0);

        self.input_timer -= delta;
        self.rotate_timer -= delta;
        self.fall_timer -= delta;

        if self.rotate_timer < 0.0 {
            self.rotate_timer = READY;

            if input.rotate {
                self.try_rotate();
                self.rotate_timer = self.config.input_delay;
            } else if input.drop {
                self.soft_drop();
                self.events.on_soft_drop_land();
                self.fall_timer = self.config.lock_delay;
                self.rotate_timer = self.config.input_delay;
            }
        }

        if self.input_timer < 0.0 {
            self.input_timer = READY;

            if input.left {
                self.try_move(-1, 0);
                self.input_timer = self.config.input_delay;
            } else if input.right {
                self.try_move(1, 0);
                self.input_timer = self.config.input_delay;
            }
        }

        self.clamp_horizontal();

        if self.fall_timer < 0.0 {
            self.fall_timer = self.fall_delay;

            if self.is_grounded() {
                self.lock_piece();
                return true;
            }

            self.try_move(0, -1);
            self.events.on_block_descend();

            if self.is_grounded() {
                self.fall_timer = self.config.lock_delay;
                self.events.on_land();
            }
        }

        false
    }

    /// Lock the active piece onto the board, clear rows, score, and spawn the
    /// queued template
    pub fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        let cells = piece.cells();
        if !self.board.lock_cells(&cells, piece.color, piece.id) {
            debug!("piece {} overlapped settled cells while locking", piece.id);
        }

        let rows = self.board.clear_full_rows();
        self.events.on_lines_cleared(rows);

        let level_before = self.progress.level();
        let award = self.progress.apply_clear(rows);
        if let Some(kind) = award.kind {
            debug!(
                "{} clear: {} rows for {} points",
                kind.as_str(),
                award.rows,
                award.points
            );
            self.events.on_clear(&award);
        }
        if self.progress.level() > level_before {
            info!("level up: {}", self.progress.level());
            self.events.on_level_up(self.progress.level());
        }

        self.last_event = Some(LockEvent {
            piece: piece.id,
            lines_cleared: rows as u32,
            points: award.points,
            clear: award.kind,
            level: self.progress.level(),
        });
        debug!(
            "piece {} locked at {:?}, {} rows cleared, score {}",
            piece.id,
            piece.anchor,
            rows,
            self.progress.score()
        );

        let next = self.queue.take_next();
        self.spawn(&next);
    }

    /// Reset board and score and start a fresh game
    pub fn restart(&mut self) {
        self.board.clear();
        self.progress.reset();
        self.active = None;
        self.last_event = None;
        self.phase = Phase::Idle;
        self.start();
    }
}
