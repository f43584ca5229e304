//! Line-input providers. The session only ever asks for "one line of text
//! after this prompt"; where that line comes from is up to the provider.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Blocking prompt-and-read. `Ok(None)` means the input stream is closed.
pub trait LineInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Reads answers from stdin, writing each prompt to stdout first.
#[derive(Debug, Default)]
pub struct StdinInput;

impl StdinInput {
    pub fn new() -> Self {
        StdinInput
    }
}

impl LineInput for StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;
        let mut buf = String::new();
        if io::stdin().lock().read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let line = buf.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(line))
    }
}

/// Replays a fixed list of answers, then reports a closed stream. Prompts are
/// recorded so callers can check what was asked.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl LineInput for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

impl<T: LineInput + ?Sized> LineInput for &mut T {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        (**self).read_line(prompt)
    }
}
