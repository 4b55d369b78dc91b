//! Configuration for graph derivations and the action layer.

use std::fmt;

/// Default number of generations shown in pedigree and radial views
pub const DEFAULT_ANCESTOR_DEPTH: usize = 5;

/// Configuration for the family graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    /// Maximum depth of ancestor trees, counting the focus person as one level
    pub ancestor_depth: usize,
    /// Skip children already on the current path when building descendant trees
    pub descendant_cycle_guard: bool,
    /// Prefix of temporary ids assigned to optimistic local records
    pub temp_id_prefix: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            ancestor_depth: DEFAULT_ANCESTOR_DEPTH,
            descendant_cycle_guard: true,
            temp_id_prefix: "temp-".to_string(),
        }
    }
}

impl GraphConfig {
    /// Set the ancestor tree depth
    #[must_use]
    pub fn with_ancestor_depth(mut self, depth: usize) -> Self {
        self.ancestor_depth = depth;
        self
    }

    /// Enable or disable the descendant cycle guard
    #[must_use]
    pub fn with_descendant_cycle_guard(mut self, enabled: bool) -> Self {
        self.descendant_cycle_guard = enabled;
        self
    }

    /// Set the temporary id prefix
    #[must_use]
    pub fn with_temp_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.temp_id_prefix = prefix.into();
        self
    }
}

impl fmt::Display for GraphConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph Configuration:")?;
        writeln!(f, "  Ancestor Depth: {}", self.ancestor_depth)?;
        writeln!(f, "  Descendant Cycle Guard: {}", self.descendant_cycle_guard)?;
        writeln!(f, "  Temporary Id Prefix: {}", self.temp_id_prefix)?;
        Ok(())
    }
}
