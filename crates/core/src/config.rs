use crate::locale;
use crate::player::PlayerId;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use toml_edit::{value, Array, DocumentMut, Item, Table};

trait ConfigSerializeDefault {
    fn fix_config(self, name: &str, doc: &mut DocumentMut);
}

macro_rules! impl_simple_default {
    ( $( $type:ty ),* ) => {
        $(
            impl ConfigSerializeDefault for $type {
                fn fix_config(self, name: &str, doc: &mut DocumentMut) {
                    doc.entry(name).or_insert_with(|| value(self));
                }
            }
        )*
    }
}

impl_simple_default!(String, i64, bool);

impl<T> ConfigSerializeDefault for Vec<T> {
    fn fix_config(self, _: &str, _: &mut DocumentMut) {
        assert!(self.is_empty(), "non-empty list as default is unimplemented");
    }
}

fn table_entry<'a>(name: &str, doc: &'a mut DocumentMut) -> Option<&'a mut Table> {
    doc.entry(name)
        .or_insert_with(|| Item::Table(Table::new()))
        .as_table_mut()
}

impl ConfigSerializeDefault for IndexMap<String, String> {
    fn fix_config(self, name: &str, doc: &mut DocumentMut) {
        if let Some(table) = table_entry(name, doc) {
            for (key, default) in self {
                table.entry(&key).or_insert_with(|| value(default));
            }
        }
    }
}

impl ConfigSerializeDefault for IndexMap<String, Vec<String>> {
    fn fix_config(self, name: &str, doc: &mut DocumentMut) {
        if let Some(table) = table_entry(name, doc) {
            for (key, default) in self {
                table
                    .entry(&key)
                    .or_insert_with(|| value(default.into_iter().collect::<Array>()));
            }
        }
    }
}

macro_rules! gen_config {
    (
        $( $name:ident: $type:ty = $default:expr),*
    ) => {
        #[derive(Serialize, Deserialize)]
        pub struct ServerConfig {
            $(
                #[serde(default)]
                pub $name: $type,
            )*
        }

        impl ServerConfig {
            /// Loads the config at `config_file`, writing back any keys that
            /// were missing so the file documents every option.
            pub fn load(config_file: impl AsRef<Path>) -> Result<ServerConfig> {
                let config_file = config_file.as_ref();
                let str = fs::read_to_string(config_file).unwrap_or_default();
                let mut doc = str
                    .parse::<DocumentMut>()
                    .with_context(|| format!("Failed to parse {}", config_file.display()))?;

                $(
                    <$type as ConfigSerializeDefault>::fix_config($default, stringify!($name), &mut doc);
                )*

                let patched = doc.to_string();
                if str != patched {
                    fs::write(config_file, &patched)
                        .with_context(|| format!("Failed to write {}", config_file.display()))?;
                }

                Self::from_toml(&patched)
            }

            /// Parses a config without touching the filesystem.
            pub fn from_toml(source: &str) -> Result<ServerConfig> {
                let mut doc = source.parse::<DocumentMut>()?;
                $(
                    <$type as ConfigSerializeDefault>::fix_config($default, stringify!($name), &mut doc);
                )*
                Ok(toml::from_str(&doc.to_string())?)
            }
        }
    };
}

gen_config! {
    help_enabled: bool = true,
    command_aliases: IndexMap<String, String> = IndexMap::new(),
    argument_aliases: IndexMap<String, Vec<String>> = IndexMap::new(),
    messages: IndexMap<String, String> = locale::default_messages(),
    players: Vec<PlayerConfig> = Vec::new(),
    teams: Vec<TeamConfig> = Vec::new()
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlayerConfig {
    pub name: String,
    pub uuid: PlayerId,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamConfig {
    pub leader: PlayerId,
    #[serde(default)]
    pub members: Vec<PlayerId>,
}
