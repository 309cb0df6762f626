//! Fluent builder for constructing a [`Team`].

use ctf_agent::{Agent, Role, RoleAssignment};
use ctf_belief::SharedKnowledge;
use ctf_core::{EngineConfig, TeamColor};
use ctf_nav::{AStarPathFinder, PathFinder};

use crate::{Team, TeamError, TeamResult};

/// Fluent builder for [`Team<P>`].
///
/// # Required inputs
///
/// - [`TeamColor`] — which side the team plays
/// - agent count — how many agents the host will call
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                              |
/// |------------------|------------------------------------------------------|
/// | `.config(c)`     | `EngineConfig::default()`                            |
/// | `.roles(v)`      | agent `config.objective_index` objective, rest support |
/// | `.finder(p)`     | `AStarPathFinder`                                    |
///
/// # Example
///
/// ```rust,ignore
/// let mut team = TeamBuilder::new(TeamColor::Blue, 3)
///     .config(config)
///     .finder(DijkstraPathFinder)
///     .build()?;
/// let decision = team.decide(0, &observation)?;
/// ```
pub struct TeamBuilder<P: PathFinder + Clone = AStarPathFinder> {
    color:       TeamColor,
    agent_count: usize,
    config:      Option<EngineConfig>,
    roles:       Option<Vec<Role>>,
    finder:      P,
}

impl TeamBuilder<AStarPathFinder> {
    pub fn new(color: TeamColor, agent_count: usize) -> Self {
        Self {
            color,
            agent_count,
            config: None,
            roles:  None,
            finder: AStarPathFinder,
        }
    }
}

impl<P: PathFinder + Clone> TeamBuilder<P> {
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the index-based role assignment.  Must be length
    /// `agent_count` with exactly one [`Role::Objective`].
    pub fn roles(mut self, roles: Vec<Role>) -> Self {
        self.roles = Some(roles);
        self
    }

    /// Swap the path search every agent plans with.
    pub fn finder<Q: PathFinder + Clone>(self, finder: Q) -> TeamBuilder<Q> {
        TeamBuilder {
            color:       self.color,
            agent_count: self.agent_count,
            config:      self.config,
            roles:       self.roles,
            finder,
        }
    }

    /// Validate inputs and return a team with empty shared knowledge.
    pub fn build(self) -> TeamResult<Team<P>> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        if self.agent_count == 0 {
            return Err(TeamError::Config("a team needs at least one agent".to_owned()));
        }

        let roles = match self.roles {
            Some(r) => {
                if r.len() != self.agent_count {
                    return Err(TeamError::AgentCountMismatch {
                        expected: self.agent_count,
                        got:      r.len(),
                        what:     "roles",
                    });
                }
                let objectives = r.iter().filter(|&&role| role == Role::Objective).count();
                if objectives != 1 {
                    return Err(TeamError::Config(format!(
                        "exactly one objective agent required, got {objectives}"
                    )));
                }
                r
            }
            None => {
                if config.objective_index >= self.agent_count {
                    return Err(TeamError::Config(format!(
                        "objective_index {} out of range for {} agents",
                        config.objective_index, self.agent_count
                    )));
                }
                let assignment = RoleAssignment::new(config.objective_index);
                (0..self.agent_count).map(|i| assignment.role_of(i)).collect()
            }
        };

        let agents = roles
            .into_iter()
            .enumerate()
            .map(|(i, role)| Agent::with_finder(i, self.color, role, &config, self.finder.clone()))
            .collect();

        Ok(Team {
            color:      self.color,
            config,
            knowledge:  SharedKnowledge::new(),
            agents,
            terminated: None,
        })
    }
}
