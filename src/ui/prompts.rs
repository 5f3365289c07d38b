use dialoguer::{Input, Password};
use is_terminal::IsTerminal;

use crate::config::ConfigField;
use crate::error::Result;

/// Source of answers for configuration fields that were not given as flags.
pub trait FieldPrompter {
    /// Whether answers can be collected at all (a TTY is attached).
    fn is_interactive(&self) -> bool;

    /// Ask for `field` until the answer passes `ConfigField::validate`.
    fn prompt(&mut self, field: ConfigField) -> Result<String>;
}

/// Terminal prompts; secrets are read with masked input.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl FieldPrompter for DialoguerPrompter {
    fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn prompt(&mut self, field: ConfigField) -> Result<String> {
        if field.is_secret() {
            prompt_secret(field)
        } else {
            prompt_text(field)
        }
    }
}

fn prompt_text(field: ConfigField) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(field.prompt())
        .validate_with(move |input: &String| field.validate(input))
        .interact_text()?;
    Ok(field.normalize(&value))
}

fn prompt_secret(field: ConfigField) -> Result<String> {
    loop {
        let value = Password::new().with_prompt(field.prompt()).interact()?;
        match field.validate(&value) {
            Ok(()) => return Ok(field.normalize(&value)),
            Err(e) => eprintln!("{}", e),
        }
    }
}
