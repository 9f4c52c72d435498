use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use fallblocks::core::{
    classic_templates, GameConfig, Mask, PieceController, SettledCell, ShapeQueue, ShapeTemplate,
};
use fallblocks::input::InputSampler;
use fallblocks::types::{Coord, InputState, Rgba};

use crossterm::event::KeyCode;

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

const FRAME: f32 = 1.0 / 60.0;

#[test]
fn core_hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let queue = ShapeQueue::new(classic_templates(), 1).unwrap();
    let mut game = PieceController::new(GameConfig::default(), queue);
    game.start();

    let left = InputState {
        left: true,
        ..InputState::IDLE
    };
    let right = InputState {
        right: true,
        ..InputState::IDLE
    };
    let rotate = InputState {
        rotate: true,
        ..InputState::IDLE
    };
    let drop = InputState {
        drop: true,
        ..InputState::IDLE
    };

    // Warm-up.
    let _ = game.tick(FRAME, InputState::IDLE);

    let allocs = with_alloc_counting(|| {
        // Tick with every kind of input.
        for i in 0..400 {
            let input = match i % 4 {
                0 => left,
                1 => right,
                2 => rotate,
                _ => InputState::IDLE,
            };
            let _ = game.tick(FRAME, input);
        }

        // Direct moves and rotations.
        for _ in 0..50 {
            let _ = game.try_move(-1, 0);
            let _ = game.try_move(1, 0);
            let _ = game.try_rotate();
            let _ = game.collides(0, -1);
        }

        // Stacking in columns 3-6 drives lock, spawn and game over.
        for _ in 0..60 {
            let _ = game.tick(FRAME, drop);
            let _ = game.tick(1.0, InputState::IDLE);
            if game.is_game_over() {
                game.restart();
            }
        }
    });

    assert_eq!(allocs, 0);
}

#[test]
fn line_clearing_lock_does_not_allocate() {
    let mask = Mask::from_rows(["....", "....", "....", "#..."]);
    let dot = ShapeTemplate::new("dot", mask, Rgba::RED).unwrap();
    let queue = ShapeQueue::new(vec![dot], 1).unwrap();
    let mut game = PieceController::new(GameConfig::default(), queue);
    game.start();

    let drop = InputState {
        drop: true,
        ..InputState::IDLE
    };

    let allocs = with_alloc_counting(|| {
        for _ in 0..20 {
            // Row 0 full except column 3, where the dot falls.
            for x in (0..10).filter(|&x| x != 3) {
                game.board_mut()
                    .set(SettledCell::new(Coord::new(x, 0), Rgba::GREEN, 9000));
            }
            let _ = game.tick(FRAME, drop);
            let _ = game.tick(1.0, InputState::IDLE);
        }
    });

    assert_eq!(allocs, 0);
    assert_eq!(game.progress().total_lines(), 20);
    assert!(game.board().is_empty());
}

#[test]
fn input_sampling_does_not_allocate() {
    let mut sampler = InputSampler::new();

    let allocs = with_alloc_counting(|| {
        for i in 0..500u32 {
            match i % 5 {
                0 => sampler.handle_key_press(KeyCode::Left),
                1 => sampler.handle_key_press(KeyCode::Up),
                2 => sampler.handle_key_release(KeyCode::Up),
                3 => sampler.handle_key_press(KeyCode::Char('s')),
                _ => sampler.handle_key_release(KeyCode::Left),
            }
            let _ = sampler.sample(16);
        }
    });

    assert_eq!(allocs, 0);
}
