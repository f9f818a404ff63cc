//! Question and answer plumbing for the template wizard.

use std::io::{self, BufRead, Write};

/// Which responses a question takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accepted {
    /// Any string passes through unchanged
    Any,
    /// `y`, `yes`, `n` or `no`, case-insensitive
    YesNo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub default: String,
    pub accepted: Accepted,
}

impl Question {
    pub fn free(text: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            default: default.into(),
            accepted: Accepted::Any,
        }
    }

    pub fn yes_no(text: impl Into<String>, default: bool) -> Self {
        Self {
            text: text.into(),
            default: if default { "y" } else { "n" }.to_string(),
            accepted: Accepted::YesNo,
        }
    }

    /// Interpret a raw response, `None` if it is not acceptable.
    ///
    /// Blank input selects the default.
    pub fn parse(&self, raw: &str) -> Option<Answer> {
        let raw = raw.trim();
        let value = if raw.is_empty() { self.default.as_str() } else { raw };
        match self.accepted {
            Accepted::Any => Some(Answer::Text(value.to_string())),
            Accepted::YesNo => parse_yes_no(value).map(Answer::Flag),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Flag(bool),
}

impl Answer {
    pub fn into_text(self) -> String {
        match self {
            Answer::Text(text) => text,
            Answer::Flag(flag) => if flag { "y" } else { "n" }.to_string(),
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            Answer::Flag(flag) => *flag,
            Answer::Text(text) => parse_yes_no(text).unwrap_or(false),
        }
    }
}

pub fn parse_yes_no(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// A source of answers.
pub trait PromptIo {
    /// Show `question` and return the raw response. `default` is for display.
    fn ask(&mut self, question: &str, default: &str) -> io::Result<String>;

    /// Show an informational line, e.g. why a question is asked again.
    fn note(&mut self, _message: &str) -> io::Result<()> {
        Ok(())
    }
}

/// Line-oriented prompts over any reader and writer.
pub struct LineIo<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineIo<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> PromptIo for LineIo<R, W> {
    fn ask(&mut self, question: &str, default: &str) -> io::Result<String> {
        if default.is_empty() {
            write!(self.output, "{question}: ")?;
        } else {
            write!(self.output, "{question} [{default}]: ")?;
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn note(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn blank_takes_default() {
        let question = Question::yes_no("Include shelf? (y/n)", true);
        assert_eq!(question.parse("  "), Some(Answer::Flag(true)));
        assert_eq!(question.parse("NO"), Some(Answer::Flag(false)));
        assert_eq!(question.parse("maybe"), None);
    }

    #[test]
    fn free_text_passes_through() {
        let question = Question::free("Author Name", "");
        assert_eq!(question.parse("Starlord"), Some(Answer::Text("Starlord".into())));
        assert_eq!(question.parse(""), Some(Answer::Text(String::new())));
    }

    #[test]
    fn line_io_shows_default_and_reads_line() {
        let mut io = LineIo::new(Cursor::new("answer\n"), Vec::new());
        let raw = io.ask("Tool Name", "my_tool").unwrap();
        assert_eq!(raw, "answer");
        assert_eq!(String::from_utf8(io.into_output()).unwrap(), "Tool Name [my_tool]: ");
    }

    #[test]
    fn line_io_reports_eof() {
        let mut io = LineIo::new(Cursor::new(""), Vec::new());
        let err = io.ask("Tool Name", "my_tool").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
