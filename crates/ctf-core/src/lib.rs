//! `ctf-core` — foundational types for the capture-the-flag decision engine.
//!
//! This crate is a dependency of every other `ctf-*` crate.  It has no
//! `ctf-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde` and `toml`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`geo`]      | `Cell`, `Direction`, `Bounds`                              |
//! | [`terrain`]  | `Terrain`, `Tile`, `TeamColor`, `TileSymbols`              |
//! | [`vision`]   | `VisionWindow` — the square view handed in every tick      |
//! | [`config`]   | `EngineConfig` and its tuning sections                     |
//! | [`error`]    | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//! | `toml`  | Adds `EngineConfig::from_toml_str` (implies `serde`).      |

pub mod config;
pub mod error;
pub mod geo;
pub mod terrain;
pub mod vision;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    AntiLoop, CostModel, EngineConfig, ExpansionCaps, ExploreTuning, NavTuning,
    SurvivalThresholds,
};
pub use error::{CoreError, CoreResult};
pub use geo::{Bounds, Cell, Direction};
pub use terrain::{TeamColor, Terrain, Tile, TileSymbols};
pub use vision::VisionWindow;
