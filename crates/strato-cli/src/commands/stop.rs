use super::{prompt_name, success};
use strato_core::Engine;

pub fn run(engine: &mut Engine) -> Result<(), String> {
    let name = prompt_name()?;
    engine.stop_resource(&name).map_err(|e| e.to_string())?;
    success(&format!("stopped resource '{name}'"));
    Ok(())
}
