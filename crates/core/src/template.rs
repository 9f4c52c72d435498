//! Shape templates - named masks with a default color
//!
//! Templates are immutable once built; every spawned piece copies the mask and
//! color out of one.

use std::sync::Arc;

use crate::mask::Mask;
use crate::types::Rgba;

/// A named, player-designed shape
///
/// Cloning shares the name, so drawing from a queue never allocates.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeTemplate {
    name: Arc<str>,
    mask: Mask,
    color: Rgba,
}

impl ShapeTemplate {
    /// Build a template. Returns `None` if the mask has no filled cell.
    pub fn new(name: impl Into<Arc<str>>, mask: Mask, color: Rgba) -> Option<Self> {
        if mask.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            mask,
            color,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn color(&self) -> Rgba {
        self.color
    }
}

/// The seven standard tetrominoes, in the designer's color palette
pub fn classic_templates() -> Vec<ShapeTemplate> {
    let defs: [(&str, [&str; 4], Rgba); 7] = [
        ("i", ["....", "####", "....", "...."], Rgba::BLUE),
        ("o", ["....", ".##.", ".##.", "...."], Rgba::YELLOW),
        ("t", ["....", "###.", ".#..", "...."], Rgba::PURPLE),
        ("s", ["....", ".##.", "##..", "...."], Rgba::GREEN),
        ("z", ["....", "##..", ".##.", "...."], Rgba::RED),
        ("j", ["....", "#...", "###.", "...."], Rgba::PINK),
        ("l", ["....", "..#.", "###.", "...."], Rgba::ORANGE),
    ];

    defs.into_iter()
        .filter_map(|(name, rows, color)| ShapeTemplate::new(name, Mask::from_rows(rows), color))
        .collect()
}
