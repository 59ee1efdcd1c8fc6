//! Detect the CI build agent from environment variables

use std::collections::HashMap;

/// Source of environment variables
pub trait Environment {
    fn var(&self, name: &str) -> Option<String>;
}

/// The current process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Known build agents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildAgent {
    SpaceAutomation,
}

impl BuildAgent {
    /// Human readable name
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildAgent::SpaceAutomation => "JetBrains Space Automation",
        }
    }

    /// Get all known build agents, in detection order
    fn all() -> &'static [BuildAgent] {
        &[BuildAgent::SpaceAutomation]
    }

    /// Variable whose presence marks this agent
    pub fn marker(&self) -> &'static str {
        match self {
            BuildAgent::SpaceAutomation => "JB_SPACE_PROJECT_KEY",
        }
    }

    /// Whether the agent is running the current process
    pub fn can_apply(&self, env: &impl Environment) -> bool {
        non_empty(env.var(self.marker())).is_some()
    }

    /// Branch reported by the agent, passed through unchanged
    pub fn current_branch(&self, env: &impl Environment) -> Option<String> {
        match self {
            BuildAgent::SpaceAutomation => non_empty(env.var("JB_SPACE_GIT_BRANCH")),
        }
    }

    /// Output that makes the agent pick up a new build number
    pub fn set_build_number(&self, _full_sem_ver: &str) -> String {
        match self {
            // Space has no service message for this
            BuildAgent::SpaceAutomation => String::new(),
        }
    }
}

/// Detect the build agent running the current process, if any
pub fn detect_build_agent(env: &impl Environment) -> Option<BuildAgent> {
    BuildAgent::all().iter().copied().find(|agent| agent.can_apply(env))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_agent_as_str() {
        assert_eq!(BuildAgent::SpaceAutomation.as_str(), "JetBrains Space Automation");
    }

    #[test]
    fn test_blank_marker_does_not_apply() {
        let env: HashMap<String, String> =
            [("JB_SPACE_PROJECT_KEY".to_string(), " ".to_string())].into();
        assert!(!BuildAgent::SpaceAutomation.can_apply(&env));
    }
}
