//! Team observer trait for logging, replays and test instrumentation.

use ctf_agent::{Decision, Role, TerminationReason};
use ctf_core::Cell;

/// Callbacks invoked by [`Team`][crate::Team] as agents decide.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — decision tally
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Tally { shots: usize }
///
/// impl TeamObserver for Tally {
///     fn on_decision(&mut self, _index: usize, _role: Role, _position: Cell, decision: &Decision) {
///         if matches!(decision.action, Action::Shoot(_)) {
///             self.shots += 1;
///         }
///     }
/// }
/// ```
pub trait TeamObserver {
    /// Called after every successful decision.
    fn on_decision(&mut self, _index: usize, _role: Role, _position: Cell, _decision: &Decision) {}

    /// Called when an agent's observation moves the remembered enemy flag
    /// (first sighting or relocation).
    fn on_enemy_flag(&mut self, _index: usize, _cell: Cell) {}

    /// Same as [`on_enemy_flag`][Self::on_enemy_flag] for the team's own flag.
    fn on_home_flag(&mut self, _index: usize, _cell: Cell) {}

    /// Called once when the team is terminated.
    fn on_terminate(&mut self, _reason: TerminationReason) {}
}

/// A [`TeamObserver`] that does nothing.
pub struct NoopObserver;

impl TeamObserver for NoopObserver {}
