pub mod create;
pub mod delete;
pub mod logs;
pub mod start;
pub mod stop;

use console::Style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use strato_core::Engine;
use strato_journal::EventJournal;

const MENU_ITEMS: [&str; 6] = [
    "Create resource",
    "Start resource",
    "Stop resource",
    "Delete resource",
    "View logs",
    "Exit",
];

/// Run the interactive menu until the user exits. Operation errors are
/// reported and the loop continues; only prompt I/O failures abort.
pub fn menu_loop(engine: &mut Engine, journal: &EventJournal) -> Result<(), String> {
    println!(
        "{}",
        Style::new().bold().apply_to("Strato — cloud resource manager")
    );

    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Main menu")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()
            .map_err(|e| e.to_string())?;
        tracing::debug!("menu choice: {}", MENU_ITEMS[choice]);

        let outcome = match choice {
            0 => create::run(engine),
            1 => start::run(engine),
            2 => stop::run(engine),
            3 => delete::run(engine),
            4 => logs::run(journal),
            _ => break,
        };

        if let Err(e) = outcome {
            println!("{} {e}", Style::new().red().apply_to("✗"));
        }
    }

    println!("bye");
    Ok(())
}

pub fn success(msg: &str) {
    println!("{} {msg}", Style::new().green().apply_to("✓"));
}

pub fn colorize_state(state: &str) -> String {
    match state {
        "created" => Style::new().yellow().apply_to(state).to_string(),
        "started" => Style::new().cyan().bold().apply_to(state).to_string(),
        "stopped" => Style::new().blue().apply_to(state).to_string(),
        "deleted" => Style::new().dim().apply_to(state).to_string(),
        other => other.to_owned(),
    }
}

pub fn prompt_name() -> Result<String, String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Resource name")
        .interact_text()
        .map_err(|e| e.to_string())
}

/// Present `items` and return the index chosen.
pub fn prompt_select(prompt: &str, items: &[String]) -> Result<usize, String> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(|e| e.to_string())
}

pub fn prompt_u32(prompt: &str) -> Result<u32, String> {
    Input::<u32>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| e.to_string())
}
