use super::*;
use std::collections::BTreeMap;
use std::hash::BuildHasher;

impl LogicValuation {
    /// Create a new valuation without any variables.
    pub fn new() -> LogicValuation {
        LogicValuation(HashMap::default())
    }

    /// Assign `value` to the variable `name`, replacing any previous value.
    pub fn set(&mut self, name: &str, value: bool) {
        self.0.insert(name.to_string(), value);
    }

    /// Same as `set`, but consumes and returns the valuation, so that assignments can be chained.
    pub fn with(mut self, name: &str, value: bool) -> LogicValuation {
        self.set(name, value);
        self
    }

    /// Value of the variable `name`, or `None` if the variable is not assigned.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.get(name).cloned()
    }

    /// Remove the variable `name` from this valuation, returning its previous value.
    pub fn unset(&mut self, name: &str) -> Option<bool> {
        self.0.remove(name)
    }

    /// Number of assigned variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for LogicValuation {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        LogicValuation(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }
}

impl VariableContext for LogicValuation {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name)
    }
}

impl<S: BuildHasher> VariableContext for HashMap<String, bool, S> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).cloned()
    }
}

impl<S: BuildHasher> VariableContext for HashMap<&str, bool, S> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).cloned()
    }
}

impl VariableContext for BTreeMap<String, bool> {
    fn value_of(&self, name: &str) -> Option<bool> {
        self.get(name).cloned()
    }
}
