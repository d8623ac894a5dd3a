use anyhow::Result;

use crate::config::{self, ALLOWED_KEYS};
use crate::output;

pub fn set(key: &str, value: &str) -> Result<()> {
    if !ALLOWED_KEYS.contains(&key) {
        return Err(output::fail_with_hint(
            &format!("unknown config key: {key}"),
            &format!("allowed keys: {}", ALLOWED_KEYS.join(", ")),
        ));
    }

    let mut settings = config::load()?;
    settings.set(key, value)?;
    config::save(&settings)?;

    if output::is_json() {
        output::json_output(&serde_json::json!({ "key": key, "value": value }))?;
    } else {
        output::success(&format!("{key} updated"));
    }
    Ok(())
}

pub fn show() -> Result<()> {
    let path = config::config_path()?;
    let settings = config::load()?;

    if output::is_json() {
        output::json_output(&serde_json::json!({
            "path": path.display().to_string(),
            "curve": settings.curve,
            "circuit_field": settings.circuit_field,
            "fixed_vk": settings.fixed_vk,
        }))?;
    } else {
        output::label("path", &path.display().to_string());
        output::label("curve", settings.curve.as_str());
        output::label("circuit_field", settings.circuit_field.as_str());
        output::label("fixed_vk", &settings.fixed_vk.to_string());
    }
    Ok(())
}
