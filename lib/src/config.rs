//! Simple, general-purpose, hierarchical configuration.
//!
//! Configuration *value*s are referred to using a *path* of *name*s (slice of
//! strings), each of which walks a level down the hierarchy of *section*s.
//! For example, `&["db", "sqlite", "db-path"]`.
//!
//! Configuration paths are case-insensitive.  All configuration values are
//! strings; use [`parse`] to convert them to richer types.

pub mod parse;

/// Everything needed to read a configuration value.
#[derive(Clone, Copy, Debug)]
pub struct ValueRef<'a> {
    /// Path to read the value from.
    pub names: &'a [&'a str],
    /// Default to use when there is no value at the path.
    pub def: &'a str,
}

/// Read configuration values.
pub trait Config {
    /// Get the value at the path given by `names`, or the default `def`.
    fn get<'s>(&'s self, names: &[&str], def: &'s str) -> &'s str;

    /// Get a value using a [reference](ValueRef).
    fn get_ref<'s>(&'s self, vref: &ValueRef<'s>) -> &'s str {
        self.get(vref.names, vref.def)
    }
}

/// Implementation of [`Config`] using an in-memory map.
///
/// A value and a section may not exist at the same path.
pub mod map {
    use std::collections::HashMap;

    /// A value or a section.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub enum Entry {
        Value(String),
        Section(HashMap<String, Entry>),
    }

    impl Entry {
        fn get<'s>(&'s self, names: &[&str], def: &'s str) -> &'s str {
            match names.split_first() {
                Some((first_name, other_names)) => match self {
                    Entry::Value(_) => def,
                    Entry::Section(section) => section
                        .get(&first_name.to_ascii_lowercase())
                        .map_or(def, |entry| entry.get(other_names, def)),
                },
                None => match self {
                    Entry::Value(value) => value,
                    Entry::Section(_) => def,
                },
            }
        }
    }

    /// Implementation of [`Config`](super::Config) using an in-memory map.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct Config {
        cfg: Entry,
    }

    impl super::Config for Config {
        fn get<'s>(&'s self, names: &[&str], def: &'s str) -> &'s str {
            self.cfg.get(names, def)
        }
    }

    /// Copy an entry and lowercase its keys.
    fn normalise(entry: Entry) -> Entry {
        match entry {
            Entry::Value(v) => Entry::Value(v),
            Entry::Section(m) => Entry::Section(
                m.into_iter()
                    .map(|(k, v)| (k.to_lowercase(), normalise(v)))
                    .collect()),
        }
    }

    /// Construct a config from a hierarchical map.
    pub fn new(cfg: HashMap<String, Entry>) -> Config {
        Config { cfg: normalise(Entry::Section(cfg)) }
    }
}

/// Implementation of [`Config`] using the process's environment variables.
///
/// - The configuration values become fixed at the time of construction.
/// - Path names are separated using `_` characters.
/// - When reading a value, `-` characters in path names will match `_`
///   characters in environment variable names.
pub mod env {
    use std::collections::HashMap;

    /// Implementation of [`Config`](super::Config) using the process's
    /// environment variables.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct Config {
        prefix: String,
        env: HashMap<String, String>,
    }

    impl super::Config for Config {
        fn get<'s>(&'s self, names: &[&str], def: &'s str) -> &'s str {
            let mapped_names: Vec<String> = names.iter()
                .map(|name| name.to_ascii_uppercase().replace('-', "_"))
                .collect();
            let env_name = self.prefix.clone() + &mapped_names.join("_");

            match self.env.get(&env_name) {
                Some(v) => v,
                None => def,
            }
        }
    }

    /// Construct a config from an explicit variable map.
    pub fn new_from(prefix: String, env: HashMap<String, String>) -> Config {
        Config { prefix, env }
    }

    /// Construct a config from the current process environment.
    ///
    /// Only environment variables starting with `prefix` are relevant, and
    /// `prefix` is not part of the path when reading values.
    pub fn new(prefix: String) -> Config {
        let mut env = HashMap::new();
        for (name_os, val_os) in std::env::vars_os() {
            if let (Ok(name), Ok(val)) =
                (name_os.into_string(), val_os.into_string())
            {
                env.insert(name, val);
            }
        }
        new_from(prefix, env)
    }
}

/// Implementation of [`Config`] using a YAML file.
///
/// When multiple values have equivalent paths (because paths are
/// case-insensitive), there is no defined scheme for which is returned.
pub mod file {
    use std::{fs::File, path::Path};
    use serde_yaml::Value;
    use super::map::{self, Entry};

    fn parse(value: &Value) -> Entry {
        match value {
            Value::Null => Entry::Value("".to_owned()),
            Value::Bool(b) => Entry::Value(b.to_string()),
            Value::Number(n) => Entry::Value(n.to_string()),
            Value::String(s) => Entry::Value(s.to_owned()),
            Value::Sequence(s) => {
                Entry::Section(s.iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), parse(v)))
                    .collect())
            }
            Value::Mapping(m) => {
                Entry::Section(m.iter()
                    .flat_map(|(k, v)| {
                        k.as_str().map(|k_str| (k_str.to_owned(), parse(v)))
                    })
                    .collect())
            }
            Value::Tagged(_) => Entry::Value("".to_owned()),
        }
    }

    /// Construct a config from a YAML file.
    pub fn new<P>(path: P) -> Result<map::Config, String>
    where
        P: AsRef<Path> + core::fmt::Debug,
    {
        let file = File::open(path.as_ref())
            .map_err(|e| format!("error opening file ({path:?}): {e}"))?;
        let value: Value = serde_yaml::from_reader(file)
            .map_err(|e| format!(
                "error loading config from file ({path:?}): {e}"))?;
        match parse(&value) {
            Entry::Section(e) => Ok(map::new(e)),
            Entry::Value(_) => Err(format!(
                "error loading config from file ({path:?}): \
                 top level is not a mapping")),
        }
    }
}
