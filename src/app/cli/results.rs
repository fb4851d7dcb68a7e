use crate::app::{ResultsView, api};
use crate::domain::{AppError, DisplayPrompt};

pub fn run_results(explanations: bool) -> Result<(), AppError> {
    let view = api::results(explanations)?;
    if view.is_empty() {
        println!("No prompts yet. Run `prompteng generate` to create some.");
        return Ok(());
    }
    print!("{}", view.render());
    Ok(())
}

pub fn run_copy(id: &str) -> Result<(), AppError> {
    api::copy(id)?;
    println!("✅ Prompt {} copied to clipboard", id);
    Ok(())
}

pub fn run_copy_all() -> Result<(), AppError> {
    match api::copy_all()? {
        0 => println!("No prompts to copy"),
        count => println!("✅ All {} prompts copied to clipboard", count),
    }
    Ok(())
}

pub fn run_explain(id: &str) -> Result<(), AppError> {
    let prompt = api::explain(id)?;
    print_prompts(&[prompt], true);
    Ok(())
}

pub(super) fn print_prompts(prompts: &[DisplayPrompt], show_explanations: bool) {
    let mut view = ResultsView::new(prompts.to_vec());
    view.set_show_explanations(show_explanations);
    print!("{}", view.render());
}
