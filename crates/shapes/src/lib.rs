//! Shape records - player-designed shapes stored as JSON
//!
//! A record holds a 4x4 grid and a color:
//!
//! ```json
//! {"grid": [[false, true, false, false], ...], "color": {"r": 1.0, "g": 0.0, "b": 0.0, "a": 1.0}}
//! ```
//!
//! `grid[x][y]` is column-major with `y = 0` the top row, the same layout as
//! [`fallblocks_core::Mask`]. An optional `"name"` field names the shape;
//! otherwise the file stem is used.
//!
//! - [`record`]: the serde record and conversion to templates
//! - [`loader`]: directory, file and line-delimited loading
//! - [`config`]: JSON game configuration files

pub mod config;
pub mod loader;
pub mod record;

pub use config::{load_config, parse_config, ConfigFile};
pub use loader::{load_dir, load_file, load_queue, parse_lines};
pub use record::{ColorRecord, ShapeRecord};
