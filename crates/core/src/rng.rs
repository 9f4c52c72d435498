//! RNG module - uniform random shape selection
//!
//! Every piece is drawn uniformly from the loaded templates. One template is
//! always queued as "next" so it can be previewed before it spawns.
//!
//! Also provides a simple LCG so games are reproducible from a seed.

use crate::template::ShapeTemplate;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // Low LCG bits cycle with short periods; take the high half.
        (self.next_u32() >> 16) % max
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Random shape source with a one-deep preview
#[derive(Debug, Clone)]
pub struct ShapeQueue {
    templates: Vec<ShapeTemplate>,
    /// Index of the queued template
    next: usize,
    rng: SimpleRng,
}

impl ShapeQueue {
    /// Create a queue over `templates`. Returns `None` if the list is empty.
    pub fn new(templates: Vec<ShapeTemplate>, seed: u32) -> Option<Self> {
        if templates.is_empty() {
            return None;
        }
        let mut queue = Self {
            templates,
            next: 0,
            rng: SimpleRng::new(seed),
        };
        queue.next = queue.random_index();
        Some(queue)
    }

    fn random_index(&mut self) -> usize {
        self.rng.next_range(self.templates.len() as u32) as usize
    }

    /// Draw a template without touching the queued one
    pub fn draw_random(&mut self) -> ShapeTemplate {
        let idx = self.random_index();
        self.templates[idx].clone()
    }

    /// Peek at the queued template
    pub fn peek(&self) -> &ShapeTemplate {
        &self.templates[self.next]
    }

    /// Take the queued template and queue a new random one
    pub fn take_next(&mut self) -> ShapeTemplate {
        let taken = self.templates[self.next].clone();
        self.next = self.random_index();
        taken
    }

    /// All templates this queue draws from
    pub fn templates(&self) -> &[ShapeTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Get the current RNG state (for restarting game with same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}
