use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::rfs::error::{FilesError, Result};
use crate::rfs::generator::Generator;
use crate::rfs::read_or_create::{read_or_create_with_origin, Origin};
use crate::rfs::settings::Settings;

use super::prompter::{self, Prompter};
use super::{AnswerMap, ConfigFormat, ConfigObject, DefaultsProvider, Question};

/// Loads a config file, or creates it from defaults and answers to
/// questions when it does not exist yet.
///
/// A config file that exists but cannot be parsed is reported as
/// [`FilesError::Parse`] and left untouched; it is never regenerated.
///
/// # Example
///
/// ```rust,no_run
/// # async fn example() -> rfs_files::Result<()> {
/// use rfs_files::config::{ConfigResolver, Question};
/// use rfs_files::Settings;
///
/// let resolver = ConfigResolver::new(Settings::from_env()?);
/// let questions = [
///     Question::new("editor", "Command to open your text editor:"),
///     Question::new("path", "Full path to database file:"),
/// ];
/// let config = resolver
///     .resolve_interactive("~/.notes.json", r#"{"path": "/base.txt"}"#.into(), &questions)
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    settings: Settings,
}

impl ConfigResolver {
    pub fn new(settings: Settings) -> Self {
        ConfigResolver { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the config stored at `path`.
    ///
    /// When the file is missing, every question is asked in order through
    /// `prompter`, the answers are laid over `defaults` and the result is
    /// written to `path` before it is returned. The prompter is not used when
    /// the file exists or when there are no questions.
    pub async fn resolve<P>(
        &self,
        path: impl AsRef<Path>,
        defaults: DefaultsProvider<'_>,
        questions: &[Question],
        prompter: &mut P,
    ) -> Result<ConfigObject>
    where
        P: Prompter + ?Sized,
    {
        let path = self.settings.resolve_path(path)?;
        let format = ConfigFormat::from_path(&path);

        let mut created = None;
        let slot = &mut created;
        let create_new = Generator::compute(move || {
            create_config(format, defaults, questions, prompter, slot)
        });
        let (content, origin) = read_or_create_with_origin(&path, create_new).await?;

        match origin {
            Origin::Existing => {
                debug!(path = %path.display(), %format, "parsing existing config");
                format.parse(&path, &content)
            }
            Origin::Created => {
                info!(path = %path.display(), %format, "new config created");
                created.ok_or_else(|| FilesError::workflow("new config was written but not kept"))
            }
        }
    }

    /// [`ConfigResolver::resolve`] deserialized into `T`.
    pub async fn resolve_as<T, P>(
        &self,
        path: impl AsRef<Path>,
        defaults: DefaultsProvider<'_>,
        questions: &[Question],
        prompter: &mut P,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        P: Prompter + ?Sized,
    {
        let path = self.settings.resolve_path(path)?;
        let config = self.resolve(&path, defaults, questions, prompter).await?;

        serde_json::from_value(Value::Object(config))
            .map_err(|error| FilesError::parse(&path, ConfigFormat::from_path(&path), error))
    }

    /// [`ConfigResolver::resolve`] asking on the process standard input and
    /// output.
    pub async fn resolve_interactive(
        &self,
        path: impl AsRef<Path>,
        defaults: DefaultsProvider<'_>,
        questions: &[Question],
    ) -> Result<ConfigObject> {
        let mut console = prompter::stdio();
        self.resolve(path, defaults, questions, &mut console).await
    }
}

async fn create_config<P>(
    format: ConfigFormat,
    defaults: DefaultsProvider<'_>,
    questions: &[Question],
    prompter: &mut P,
    created: &mut Option<ConfigObject>,
) -> Result<String>
where
    P: Prompter + ?Sized,
{
    let answers = if questions.is_empty() {
        AnswerMap::new()
    } else {
        ask_all(questions, prompter).await?
    };
    let config = merge(defaults.resolve().await?, answers);
    let text = format.render(&config)?;

    *created = Some(config);
    Ok(text)
}

/// Asks every question once, in order. An empty answer stores the question's
/// default when it has one and nothing otherwise.
pub async fn ask_all<P>(questions: &[Question], prompter: &mut P) -> Result<AnswerMap>
where
    P: Prompter + ?Sized,
{
    let mut answers = AnswerMap::new();

    for question in questions {
        let Some(line) = prompter.ask(&question.question).await? else {
            return Err(FilesError::workflow(format!(
                "input ended before `{}` was answered",
                question.prop
            )));
        };

        let answer = line.trim();
        if !answer.is_empty() {
            answers.insert(question.prop.clone(), answer.to_string());
        } else if let Some(default) = &question.default {
            answers.insert(question.prop.clone(), default.clone());
        }
    }

    Ok(answers)
}

/// Shallow merge, answers win over defaults.
pub fn merge(defaults: ConfigObject, answers: AnswerMap) -> ConfigObject {
    let mut config = defaults;
    for (prop, answer) in answers {
        config.insert(prop, Value::String(answer));
    }
    config
}
