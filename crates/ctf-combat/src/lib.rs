//! `ctf-combat` — deciding whether to shoot instead of moving.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`engagement`] | `EngagementEvaluator`, `FireDecision`, `Hostile`          |
//!
//! Everything here reads the vision window only.  Hostiles are never stored
//! in the belief map, so a unit that walked out of sight is simply gone.

pub mod engagement;


pub use engagement::{EngagementEvaluator, FireDecision, Hostile};
