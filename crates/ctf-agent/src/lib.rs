//! `ctf-agent` — one agent's per-tick decision.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`role`]        | `Role`, `RoleAssignment`                                      |
//! | [`observation`] | `Observation<'a>` — everything the host hands in each tick     |
//! | [`action`]      | `Action`, `Decision`, `DecisionReason`, `TerminationReason`   |
//! | [`dispatcher`]  | `Agent<P>` — the role dispatcher                              |
//!
//! # Tick pipeline
//!
//! ```text
//! Observation ──► BumpLearner ──► SharedKnowledge::observe ──► survival?
//!                                                              │ no
//!                                          ┌───────────────────┴──────────┐
//!                                      Objective                       Support
//!                                   goal ► path ► greedy          engage ► chase
//!                                   ► any open ► no-op            ► assist ► explore
//! ```
//!
//! Every branch ends in a concrete [`Decision`]; nothing in the pipeline
//! returns an error.  When every direction is closed the agent idles with
//! [`DecisionReason::Immobilized`].

pub mod action;
pub mod dispatcher;
pub mod observation;
pub mod role;

#[cfg(test)]
mod tests;

pub use action::{Action, Decision, DecisionReason, TerminationReason};
pub use dispatcher::Agent;
pub use observation::Observation;
pub use role::{Role, RoleAssignment};
