use std::io;
use std::path::Path;

use tracing::{info, warn};

use crate::naming::sanitize;
use crate::template::{DEFAULT_TOOL_NAME, DEFAULT_VERSION, TemplateSpec};

use super::prompt::{Answer, PromptIo, Question};

/// Walks the user through the template questions.
pub struct TemplateWizard<P> {
    io: P,
}

impl<P: PromptIo> TemplateWizard<P> {
    pub fn new(io: P) -> Self {
        Self { io }
    }

    pub fn into_inner(self) -> P {
        self.io
    }

    /// Ask every question in order and build the resulting spec.
    pub fn run(&mut self, parent_dir: &Path) -> io::Result<TemplateSpec> {
        let name_question = Question::free(
            "Tool Name (snake_case or PascalCase preferred)",
            DEFAULT_TOOL_NAME,
        );
        let (raw_name, name) = loop {
            let raw_name = self.ask(&name_question)?.into_text();
            let name = sanitize(&raw_name);
            if !name.is_empty() {
                break (raw_name, name);
            }
            self.io.note("The tool name needs at least one letter or digit")?;
        };
        if name != raw_name {
            info!("Using {name:?} as the tool name");
        }

        let author = self.ask(&Question::free("Author Name", ""))?.into_text();

        let version = self
            .ask(&Question::free(
                "Version Number (Semantic versioning preferred)",
                DEFAULT_VERSION,
            ))?
            .into_text();
        if semver::Version::parse(&version).is_err() {
            warn!("{version} is not a semantic version");
        }

        let python_lib = self
            .ask(&Question::yes_no(
                format!("Will {name} use its own Python library? (y/n)"),
                true,
            ))?
            .as_flag();
        let shelf = self
            .ask(&Question::yes_no("Include shelf? (y/n)", true))?
            .as_flag();
        let help = self
            .ask(&Question::yes_no("Include help card directories? (y/n)", false))?
            .as_flag();
        let vcs = self
            .ask(&Question::yes_no("Set up version control? (y/n)", true))?
            .as_flag();

        Ok(TemplateSpec::new(parent_dir, &raw_name)
            .with_author(Some(author))
            .with_version(version)
            .with_python_lib(python_lib)
            .with_shelf(shelf)
            .with_help(help)
            .with_vcs(vcs))
    }

    /// Ask until the response is acceptable.
    fn ask(&mut self, question: &Question) -> io::Result<Answer> {
        loop {
            let raw = self.io.ask(&question.text, &question.default)?;
            if let Some(answer) = question.parse(&raw) {
                return Ok(answer);
            }
            self.io.note("Please answer y or n")?;
        }
    }
}
