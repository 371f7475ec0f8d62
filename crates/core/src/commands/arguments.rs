use super::alias::AliasTable;
use super::error::RegistrationError;
use super::handler::ArgumentHandler;
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::warn;

/// The arguments of a single command: handlers keyed by canonical name in
/// registration order, plus their aliases.
#[derive(Default, Clone)]
pub struct ArgumentTable {
    handlers: IndexMap<String, Arc<dyn ArgumentHandler>>,
    aliases: AliasTable,
}

impl ArgumentTable {
    pub fn new() -> Self {
        Default::default()
    }

    /// Registers `handler` under `names[0]`; the remaining names become its
    /// aliases. Aliases that collide are skipped.
    pub fn register(
        &mut self,
        names: &[&str],
        handler: Arc<dyn ArgumentHandler>,
    ) -> Result<(), RegistrationError> {
        let (&canonical, aliases) = names.split_first().ok_or(RegistrationError::EmptyNames)?;
        if self.handlers.contains_key(canonical) {
            return Err(RegistrationError::AlreadyRegistered {
                name: canonical.to_string(),
            });
        }
        if self.aliases.is_alias(canonical) {
            return Err(RegistrationError::NameTaken {
                name: canonical.to_string(),
            });
        }

        self.handlers.insert(canonical.to_string(), handler);
        for alias in aliases {
            if let Err(err) = self.add_alias(canonical, alias) {
                warn!("Skipping alias while registering '{}': {}", canonical, err);
            }
        }
        Ok(())
    }

    pub fn replace(
        &mut self,
        canonical: &str,
        handler: Arc<dyn ArgumentHandler>,
    ) -> Result<(), RegistrationError> {
        match self.handlers.get_mut(canonical) {
            Some(slot) => {
                *slot = handler;
                Ok(())
            }
            None => Err(RegistrationError::UnknownArgument {
                name: canonical.to_string(),
            }),
        }
    }

    pub fn add_alias(&mut self, canonical: &str, alias: &str) -> Result<(), RegistrationError> {
        if !self.handlers.contains_key(canonical) {
            return Err(RegistrationError::UnknownArgument {
                name: canonical.to_string(),
            });
        }
        if self.handlers.contains_key(alias) || !self.aliases.insert(canonical, alias) {
            return Err(RegistrationError::AliasTaken {
                alias: alias.to_string(),
            });
        }
        Ok(())
    }

    /// Adds each alias that doesn't collide. Returns how many were added.
    pub fn add_aliases(
        &mut self,
        canonical: &str,
        aliases: &[&str],
    ) -> Result<usize, RegistrationError> {
        if !self.handlers.contains_key(canonical) {
            return Err(RegistrationError::UnknownArgument {
                name: canonical.to_string(),
            });
        }
        let mut added = 0;
        for alias in aliases {
            match self.add_alias(canonical, alias) {
                Ok(()) => added += 1,
                Err(err) => warn!("{}", err),
            }
        }
        Ok(added)
    }

    /// Removes the given aliases. Handlers are never removed. Returns how
    /// many aliases were removed.
    pub fn remove_aliases(&mut self, aliases: &[&str]) -> usize {
        aliases
            .iter()
            .filter(|alias| self.aliases.remove(alias).is_some())
            .count()
    }

    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.aliases.resolve(token)
    }

    pub fn is_alias(&self, token: &str) -> bool {
        self.aliases.is_alias(token)
    }

    /// Looks up the handler for `token`, which may be an alias.
    pub fn get(&self, token: &str) -> Option<&Arc<dyn ArgumentHandler>> {
        self.handlers.get(self.resolve(token))
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.handlers.contains_key(canonical)
    }

    pub fn aliases_of(&self, canonical: &str) -> impl Iterator<Item = &str> {
        self.aliases.aliases_of(canonical)
    }

    /// Canonical names and handlers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn ArgumentHandler>)> {
        self.handlers
            .iter()
            .map(|(name, handler)| (name.as_str(), handler))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
