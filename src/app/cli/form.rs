use std::io::{ErrorKind, IsTerminal};

use clap::Args;
use dialoguer::{Error as DialoguerError, Input};

use super::results::print_prompts;
use crate::app::FormEdit;
use crate::app::api;
use crate::domain::{
    AppError, Mode, PromptRequest, ReturnFormat, Tone, persona_label, resolve_persona,
};

/// Form fields accepted by `set` and `generate`.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Your idea or request
    #[arg(short, long)]
    input: Option<String>,
    /// Generation mode: basic, quick, deep, few-shot, cot
    #[arg(short, long, value_parser = Mode::parse)]
    mode: Option<Mode>,
    /// Tone: default, formal, friendly, professional, casual
    #[arg(short, long, value_parser = Tone::parse)]
    tone: Option<Tone>,
    /// Persona preset (see `options`), a free-form clause, or "none"
    #[arg(short, long)]
    persona: Option<String>,
    /// Output format: plain, markdown, json
    #[arg(short, long, value_parser = ReturnFormat::parse)]
    format: Option<ReturnFormat>,
}

impl FieldArgs {
    fn into_edit(self) -> FormEdit {
        FormEdit {
            raw_input: self.input,
            mode: self.mode,
            tone: self.tone,
            persona: self.persona.as_deref().map(resolve_persona),
            return_format: self.format,
        }
    }
}

pub fn run_set(fields: FieldArgs) -> Result<(), AppError> {
    let edit = fields.into_edit();
    if edit.is_empty() {
        return api::form().map(|state| print_form(&state));
    }
    let state = api::edit_form(edit)?;
    println!("✅ Saved form");
    print_form(&state);
    Ok(())
}

pub fn run_generate(fields: FieldArgs) -> Result<(), AppError> {
    let mut edit = fields.into_edit();

    if edit.raw_input.is_none() && std::io::stdin().is_terminal() {
        let saved = api::form()?;
        if saved.raw_input.trim().is_empty() {
            match prompt_raw_input()? {
                Some(value) => edit.raw_input = Some(value),
                None => return Ok(()),
            }
        }
    }

    let prompts = api::generate(edit)?;
    println!("✅ Generated {} prompt(s)", prompts.len());
    print_prompts(&prompts, false);
    Ok(())
}

pub fn print_form(state: &PromptRequest) {
    let input =
        if state.raw_input.trim().is_empty() { "(empty)" } else { state.raw_input.as_str() };
    let persona = if state.persona.is_empty() { "None" } else { persona_label(&state.persona) };
    println!("Input:   {}", input);
    println!("Mode:    {}", state.mode.label());
    println!("Tone:    {}", state.tone.label());
    println!("Persona: {}", persona);
    println!("Format:  {}", state.return_format.label());
}

fn prompt_raw_input() -> Result<Option<String>, AppError> {
    match Input::new().with_prompt("Your idea or request").interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read input: {}", err))),
    }
}
