//! The `config` module loads a configuration file, creating it on first use
//! from defaults and answers given interactively.

pub mod defaults;
pub mod format;
pub mod prompter;
pub mod question;
pub mod resolver;

use std::collections::BTreeMap;

pub use defaults::DefaultsProvider;
pub use format::ConfigFormat;
pub use prompter::{stdio, Prompter, ReaderPrompter, ScriptedPrompter, StdioPrompter};
pub use question::Question;
pub use resolver::ConfigResolver;

/// A resolved configuration: top level keys of the config file.
pub type ConfigObject = serde_json::Map<String, serde_json::Value>;

/// Answers collected during one interactive session, by property key.
pub type AnswerMap = BTreeMap<String, String>;
