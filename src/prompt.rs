use color_eyre::eyre::{eyre, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

/// Asks the user to pick one of several labeled options.
pub trait Prompter {
    /// Returns the zero-based index of the chosen option.
    fn select(&self, message: &str, options: &[String]) -> Result<usize>;
}

pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&self, message: &str, options: &[String]) -> Result<usize> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(options)
            .default(0)
            .interact_opt()
            .map_err(|e| eyre!("prompt failed: {e}"))?
            .ok_or_else(|| eyre!("no run selected"))
    }
}
