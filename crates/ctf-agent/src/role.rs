//! Behavior profiles and who plays which.

use std::fmt;

/// The two behavior profiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Role {
    /// Goes for the enemy flag and brings it home.
    Objective,
    /// Shoots and chases hostiles, then converges on the enemy flag.
    Support,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Objective => "objective",
            Role::Support   => "support",
        })
    }
}

/// Static role assignment by agent index: exactly one objective agent, the
/// rest support.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleAssignment {
    pub objective_index: usize,
}

impl RoleAssignment {
    pub const fn new(objective_index: usize) -> Self {
        Self { objective_index }
    }

    pub const fn role_of(&self, index: usize) -> Role {
        if index == self.objective_index { Role::Objective } else { Role::Support }
    }
}
