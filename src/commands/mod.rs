//! Command implementations for the `corkboard` binary

mod config;
mod replay;
mod show;

pub use config::cmd_config;
pub use replay::cmd_replay;
pub use show::cmd_show;

use crate::cli::OutputOptions;
use crate::error::Result;

/// Output of a command: a JSON value, plus optional text for humans
pub struct CommandOutput {
    json: serde_json::Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: serde_json::Value) -> Self {
        CommandOutput { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Render as JSON or text depending on the output flags
    pub fn render(&self, output: OutputOptions) -> Result<String> {
        if output.json {
            return Ok(serde_json::to_string_pretty(&self.json)?);
        }
        match &self.text {
            Some(text) => Ok(text.trim_end().to_string()),
            None => Ok(serde_json::to_string_pretty(&self.json)?),
        }
    }

    pub fn print(self, output: OutputOptions) -> Result<()> {
        println!("{}", self.render(output)?);
        Ok(())
    }
}
