//! Variables selected for the environment by the loader.

/// Ordered `KEY=VALUE` pairs the loader decided to set.
///
/// Keys are unique. The pairs can be written to the current process with
/// [`apply`](Self::apply) or handed to a child, e.g.
/// `std::process::Command::envs(loaded.iter())`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedEnv {
    vars: Vec<(String, String)>,
}

impl LoadedEnv {
    pub(crate) fn from_pairs(vars: Vec<(String, String)>) -> Self {
        Self { vars }
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Write every pair to the process environment.
    ///
    /// # Safety
    ///
    /// Must be called while no other thread reads or writes the environment,
    /// typically during startup before any thread is spawned.
    pub unsafe fn apply(&self) {
        for (key, value) in &self.vars {
            // SAFETY: upheld by the caller.
            unsafe { std::env::set_var(key, value) };
        }
    }
}

impl IntoIterator for LoadedEnv {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}
