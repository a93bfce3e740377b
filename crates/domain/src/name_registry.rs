use crate::host_name::HostName;
use std::collections::HashSet;

/// The immutable set of names this responder answers for.
///
/// Built once at startup and read-only afterwards. Lookup is an exact,
/// case-sensitive match against the dot-terminated question name.
#[derive(Debug, Clone)]
pub struct NameRegistry {
    names: HashSet<HostName>,
}

impl NameRegistry {
    pub fn new(names: Vec<HostName>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HostName> {
        self.names.iter()
    }
}
