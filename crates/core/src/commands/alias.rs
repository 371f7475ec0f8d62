use indexmap::IndexSet;
use rustc_hash::FxHashMap;

/// Bidirectional mapping between canonical argument names and their aliases.
///
/// Every alias resolves to exactly one canonical name. A canonical name
/// keeps all of its aliases in the order they were added.
#[derive(Debug, Default, Clone)]
pub struct AliasTable {
    parents: FxHashMap<String, String>,
    aliases: FxHashMap<String, IndexSet<String>>,
}

impl AliasTable {
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds `alias` for `canonical`. Returns false if the alias is already
    /// taken. Checking `alias` against canonical names is the caller's job.
    pub fn insert(&mut self, canonical: &str, alias: &str) -> bool {
        if self.parents.contains_key(alias) {
            return false;
        }
        self.parents.insert(alias.to_owned(), canonical.to_owned());
        self.aliases
            .entry(canonical.to_owned())
            .or_default()
            .insert(alias.to_owned());
        true
    }

    /// Removes `alias`, returning the canonical name it pointed to.
    pub fn remove(&mut self, alias: &str) -> Option<String> {
        let canonical = self.parents.remove(alias)?;
        if let Some(aliases) = self.aliases.get_mut(&canonical) {
            aliases.shift_remove(alias);
            if aliases.is_empty() {
                self.aliases.remove(&canonical);
            }
        }
        Some(canonical)
    }

    pub fn is_alias(&self, token: &str) -> bool {
        self.parents.contains_key(token)
    }

    pub fn parent(&self, alias: &str) -> Option<&str> {
        self.parents.get(alias).map(String::as_str)
    }

    /// Resolves `token` to its canonical name. Tokens which aren't aliases
    /// come back unchanged.
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.parent(token).unwrap_or(token)
    }

    pub fn aliases_of(&self, canonical: &str) -> impl Iterator<Item = &str> {
        self.aliases
            .get(canonical)
            .into_iter()
            .flat_map(|aliases| aliases.iter().map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
