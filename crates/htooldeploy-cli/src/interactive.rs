//! Terminal prompts for the template wizard and overwrite confirmation.
//!
//! Uses dialoguer for terminal UI prompts.

use std::io::{self, Write};
use std::path::Path;

use console::style;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use htooldeploy_core::install::OverwritePrompt;
use htooldeploy_core::wizard::PromptIo;

/// Wizard prompts backed by dialoguer.
pub struct DialoguerPrompt<W: Write = io::Stdout> {
    /// Output writer (for testing)
    writer: W,
    /// Theme for dialoguer prompts
    theme: ColorfulTheme,
    header_shown: bool,
}

impl DialoguerPrompt<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> DialoguerPrompt<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            theme: ColorfulTheme::default(),
            header_shown: false,
        }
    }

    fn print_header(&mut self) -> io::Result<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{}",
            style("  htooldeploy Template Wizard").bold().cyan()
        )?;
        writeln!(
            self.writer,
            "{}",
            style("  Press enter to use the default value in brackets").dim()
        )?;
        writeln!(self.writer)?;
        self.header_shown = true;
        Ok(())
    }
}

impl<W: Write> PromptIo for DialoguerPrompt<W> {
    fn ask(&mut self, question: &str, default: &str) -> io::Result<String> {
        if !self.header_shown {
            self.print_header()?;
        }

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true);
        if !default.is_empty() {
            input = input.default(default.to_string()).show_default(true);
        }
        input.interact_text().map_err(into_io)
    }

    fn note(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "  {}", style(message).yellow())
    }
}

/// Asks before replacing an existing package file.
pub struct DialoguerConfirm {
    theme: ColorfulTheme,
}

impl DialoguerConfirm {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl OverwritePrompt for DialoguerConfirm {
    fn confirm_overwrite(&mut self, manifest: &Path) -> io::Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(format!("Overwrite {}?", manifest.display()))
            .default(false)
            .interact()
            .map_err(into_io)
    }
}

fn into_io(err: dialoguer::Error) -> io::Error {
    match err {
        dialoguer::Error::IO(err) => err,
    }
}
