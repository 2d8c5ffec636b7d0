use std::fmt;
use std::future::Future;
use std::path::PathBuf;

use futures::future::BoxFuture;
use futures::FutureExt;

use super::error::Result;
use super::files;

type ComputeFn<'a> = Box<dyn FnOnce() -> BoxFuture<'a, Result<String>> + Send + 'a>;

/// Content for a file that does not exist yet can be produced in four ways:
#[derive(Default)]
pub enum Generator<'a> {
    /// Empty - an empty file
    ///
    /// ```rust
    /// # use rfs_files::Generator;
    /// let generator = Generator::default();
    /// # assert!(matches!(generator, Generator::Empty));
    /// ```
    #[default]
    Empty,
    /// Fixed - the given text, written verbatim
    ///
    /// ```rust
    /// # use rfs_files::Generator;
    /// let generator = Generator::from("first line\n");
    /// # assert!(matches!(generator, Generator::Fixed(_)));
    /// ```
    Fixed(String),
    /// CopyFrom - the content of another existing file
    ///
    /// ```rust
    /// # use rfs_files::Generator;
    /// let generator = Generator::CopyFrom("Cargo.toml".into());
    /// ```
    CopyFrom(PathBuf),
    /// Compute - the result of a one-shot asynchronous closure. It runs only
    /// when the content is really needed; its error aborts the write.
    ///
    /// ```rust
    /// # use rfs_files::Generator;
    /// let generator = Generator::compute(|| async { Ok(String::from("generated")) });
    /// ```
    Compute(ComputeFn<'a>),
}

impl<'a> Generator<'a> {
    pub fn compute<F, Fut>(f: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = Result<String>> + Send + 'a,
    {
        Generator::Compute(Box::new(move || f().boxed()))
    }

    /// Produces the content. Consumes the generator, so a `Compute` closure
    /// is never called twice.
    pub async fn generate(self) -> Result<String> {
        match self {
            Generator::Empty => Ok(String::new()),
            Generator::Fixed(text) => Ok(text),
            Generator::CopyFrom(source) => files::read(&source).await,
            Generator::Compute(f) => f().await,
        }
    }
}

impl From<String> for Generator<'_> {
    fn from(text: String) -> Self {
        Generator::Fixed(text)
    }
}

impl From<&str> for Generator<'_> {
    fn from(text: &str) -> Self {
        Generator::Fixed(text.to_string())
    }
}

impl fmt::Debug for Generator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::Empty => write!(f, "Empty"),
            Generator::Fixed(text) => f.debug_tuple("Fixed").field(text).finish(),
            Generator::CopyFrom(source) => f.debug_tuple("CopyFrom").field(source).finish(),
            Generator::Compute(_) => write!(f, "Compute(..)"),
        }
    }
}
