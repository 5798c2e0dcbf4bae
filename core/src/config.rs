use crate::rule::Rule;

/// Options for building a `Grid`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// Whether to log construction and every generation at info level. This
    /// never affects the simulation itself.
    pub debug: bool,
    /// Transition rule; Conway's Life unless otherwise specified.
    pub rule: Rule,
    /// Whether to evaluate and commit cells on the rayon thread pool.
    pub parallel: bool,
}

impl GridConfig {
    /// Returns the config with diagnostic logging turned on or off.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
    /// Returns the config with a different rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }
    /// Returns the config with parallel stepping turned on or off.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
