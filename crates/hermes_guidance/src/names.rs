use fxhash::FxHashMap;
use tracing::trace;

pub type NameId = u32;

pub const EMPTY_NAME: &str = "";

/// Read-only lookup of street names.
///
/// Resolution is total: unknown ids resolve to [`EMPTY_NAME`].
pub trait NameResolver {
    fn resolve(&self, name_id: NameId) -> &str;
}

/// Name table populated once when the graph is loaded.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: FxHashMap<NameId, String>,
}

impl NameTable {
    pub fn new() -> Self {
        NameTable::default()
    }

    pub fn insert(&mut self, name_id: NameId, name: impl Into<String>) {
        self.names.insert(name_id, name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameResolver for NameTable {
    fn resolve(&self, name_id: NameId) -> &str {
        match self.names.get(&name_id) {
            Some(name) => name.as_str(),
            None => {
                trace!(name_id, "Unknown name id");
                EMPTY_NAME
            }
        }
    }
}

impl<S: Into<String>> FromIterator<(NameId, S)> for NameTable {
    fn from_iter<I: IntoIterator<Item = (NameId, S)>>(iter: I) -> Self {
        NameTable {
            names: iter
                .into_iter()
                .map(|(name_id, name)| (name_id, name.into()))
                .collect(),
        }
    }
}

impl<R: NameResolver + ?Sized> NameResolver for &R {
    fn resolve(&self, name_id: NameId) -> &str {
        (**self).resolve(name_id)
    }
}
