//! `ctf-team` — the session a host talks to.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`builder`]  | `TeamBuilder` — validated construction                       |
//! | [`team`]     | `Team<P>` — shared knowledge, agents, `decide`, `terminate`  |
//! | [`observer`] | `TeamObserver` trait, `NoopObserver`                         |
//! | [`error`]    | `TeamError`, `TeamResult<T>`                                 |
//!
//! # Lifecycle
//!
//! ```text
//! TeamBuilder::new(color, n).config(c).build()?
//!   └─► every tick, for each agent i:  team.decide(i, &observation)?
//!   └─► match over:                    team.terminate(reason)?
//! ```
//!
//! # Cargo features
//!
//! | Feature | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on config, windows and decisions |
//! | `toml`  | `EngineConfig::from_toml_str`                               |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ctf_agent::Observation;
//! use ctf_core::{Cell, TeamColor};
//! use ctf_team::TeamBuilder;
//!
//! let mut team = TeamBuilder::new(TeamColor::Blue, 3).build()?;
//! let window = team.parse_window(&rows)?;
//! let obs = Observation::new(&window, Cell::new(2, 7), hp, ammo).shooting(can_shoot);
//! let decision = team.decide(0, &obs)?;
//! println!("{}", decision.action);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod team;


pub use builder::TeamBuilder;
pub use error::{TeamError, TeamResult};
pub use observer::{NoopObserver, TeamObserver};
pub use team::Team;
