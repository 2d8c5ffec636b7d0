use std::collections::VecDeque;

use futures::future::{self, BoxFuture};
use futures::FutureExt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

use crate::rfs::error::{FilesError, Result};

const CONSOLE: &str = "<console>";

/// Line oriented question and answer channel.
pub trait Prompter: Send {
    /// Shows `prompt` on its own line and waits for one line of input.
    /// `None` means the input has ended.
    fn ask<'a>(&'a mut self, prompt: &'a str) -> BoxFuture<'a, Result<Option<String>>>;
}

/// Prompter over any buffered reader and writer.
#[derive(Debug)]
pub struct ReaderPrompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> ReaderPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        ReaderPrompter { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R, W> Prompter for ReaderPrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    fn ask<'a>(&'a mut self, prompt: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
        async move {
            self.output
                .write_all(format!("{prompt}\n").as_bytes())
                .await
                .map_err(|error| FilesError::io(CONSOLE, error))?;
            self.output
                .flush()
                .await
                .map_err(|error| FilesError::io(CONSOLE, error))?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .await
                .map_err(|error| FilesError::io(CONSOLE, error))?;
            if read == 0 {
                return Ok(None);
            }

            Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
        }
        .boxed()
    }
}

/// Prompter on the process standard input and output.
pub type StdioPrompter = ReaderPrompter<BufReader<Stdin>, Stdout>;

pub fn stdio() -> StdioPrompter {
    ReaderPrompter::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
}

/// Prompter answering from a prepared list, remembering what was asked.
/// When the list runs out the input counts as ended.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompter {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn ask<'a>(&'a mut self, prompt: &'a str) -> BoxFuture<'a, Result<Option<String>>> {
        self.asked.push(prompt.to_string());
        future::ready(Ok(self.answers.pop_front())).boxed()
    }
}
