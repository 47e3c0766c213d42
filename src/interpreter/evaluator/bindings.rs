use std::collections::HashMap;

/// Maps variable names to their integer values.
///
/// Once a name is bound it keeps its value for the rest of the evaluation
/// that owns the map; `set` is only called for names that are still unbound.
///
/// # Example
/// ```
/// use infixer::interpreter::evaluator::Bindings;
///
/// let mut bindings = Bindings::new();
/// bindings.set("x", 4);
/// assert_eq!(bindings.get("x"), Some(4));
/// assert_eq!(bindings.get("y"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: HashMap<String, i64>,
}

impl Bindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Binds `name` to `value`, overwriting any earlier value in place.
    pub fn set(&mut self, name: &str, value: i64) {
        match self.values.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.values.insert(name.to_string(), value);
            },
        }
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self { values: iter.into_iter().map(|(name, value)| (name.into(), value)).collect() }
    }
}
