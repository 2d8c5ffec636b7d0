use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rfs::error::FilesError;

/// One question of an interactive config session.
///
/// Question lists can be kept in JSON or YAML:
///
/// ```yaml
/// - prop: editor
///   question: "Command to open your text editor:"
///   def: vim
/// - prop: path
///   question: "Full path to database file:"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Key the answer is stored under.
    pub prop: String,

    /// Text shown to the user.
    pub question: String,

    /// Stored instead of an empty answer. Without it an empty answer leaves
    /// the key to the defaults.
    #[serde(default, alias = "def", skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl Question {
    pub fn new(prop: impl Into<String>, question: impl Into<String>) -> Self {
        Question {
            prop: prop.into(),
            question: question.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// `prop=question text`
impl FromStr for Question {
    type Err = FilesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prop, question) = s.split_once('=').unwrap_or((s, ""));
        let prop = prop.trim();
        if prop.is_empty() {
            return Err(FilesError::MissingArgument("prop"));
        }
        let question = question.trim();
        let question = if question.is_empty() { prop } else { question };

        Ok(Question::new(prop, question))
    }
}
