//! The interactive prompts which collect the generation settings.

use anyhow::Context;

use passgen::GenerationConfig;

pub(crate) fn read_config() -> anyhow::Result<GenerationConfig> {
    let defaults = GenerationConfig::default();
    let length = dialoguer::Input::new()
        .with_prompt("Password length")
        .default(defaults.length)
        .interact_text()
        .context("failed to read the password length")?;
    let include_upper = confirm("Include uppercase letters?", defaults.include_upper)?;
    let include_digits = confirm("Include digits?", defaults.include_digits)?;
    let include_special = confirm("Include special characters?", defaults.include_special)?;
    Ok(GenerationConfig {
        length,
        include_upper,
        include_digits,
        include_special,
    })
}

pub(crate) fn confirm_save() -> anyhow::Result<bool> {
    // Unlike the class toggles, saving is opt-in.
    confirm("Save this password?", false)
}

fn confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .context("failed to prompt you, somehow")
}
