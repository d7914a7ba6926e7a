//! Catalog command handlers.
//!
//! Implements the `views` and `tools` subcommands, which list what the
//! dashboard offers as a plain table or as JSON.

use crate::model::fixtures::TOOLS;
use crate::tui::{ViewKind, tool_view};
use anyhow::{Context, Result};
use serde_json::{Value, json};

/// Print every view key with its title.
pub fn run_views(json: bool) -> Result<()> {
    print!("{}", render_views(json)?);
    Ok(())
}

/// Print every tool with the view that hosts its sessions.
pub fn run_tools(json: bool) -> Result<()> {
    print!("{}", render_tools(json)?);
    Ok(())
}

/// Render the view listing.
pub fn render_views(json: bool) -> Result<String> {
    if json {
        let entries: Vec<Value> = ViewKind::ALL
            .iter()
            .map(|v| {
                json!({
                    "key": v.key(),
                    "title": v.title(),
                    "tool": v.tool_name(),
                    "chat": v.is_chat(),
                })
            })
            .collect();
        return to_json(&Value::Array(entries));
    }

    let width = key_width(ViewKind::ALL.iter().map(|v| v.key()));
    let mut out = String::new();
    for view in ViewKind::ALL {
        out.push_str(&format!("{:<width$}  {}\n", view.key(), view.title()));
    }
    Ok(out)
}

/// Render the tool listing.
pub fn render_tools(json: bool) -> Result<String> {
    if json {
        let entries: Vec<Value> = TOOLS
            .iter()
            .map(|(name, description)| {
                json!({
                    "name": name,
                    "description": description,
                    "view": tool_view(name).key(),
                })
            })
            .collect();
        return to_json(&Value::Array(entries));
    }

    let width = key_width(TOOLS.iter().map(|(name, _)| *name));
    let mut out = String::new();
    for (name, description) in TOOLS {
        out.push_str(&format!(
            "{name:<width$}  {:<18}  {description}\n",
            tool_view(name).key()
        ));
    }
    Ok(out)
}

fn key_width<'a>(keys: impl Iterator<Item = &'a str>) -> usize {
    keys.map(str::len).max().unwrap_or(0)
}

fn to_json(value: &Value) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).context("failed to serialize listing")?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_table_lists_every_key() {
        let table = render_views(false).unwrap();
        assert_eq!(table.lines().count(), ViewKind::ALL.len());
        assert!(table.contains("precedent-radar"));
        assert!(table.contains("Precedent Radar"));
    }

    #[test]
    fn test_views_json_is_array() {
        let out = render_views(true).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        let entries = parsed.as_array().unwrap();
        assert_eq!(entries.len(), ViewKind::ALL.len());
        assert_eq!(entries[0]["key"], "home");
        assert_eq!(entries[0]["tool"], Value::Null);
    }

    #[test]
    fn test_tools_json_maps_views() {
        let out = render_tools(true).unwrap();
        let parsed: Value = serde_json::from_str(&out).unwrap();
        let drafting = parsed
            .as_array()
            .unwrap()
            .iter()
            .find(|t| t["name"] == "Drafting")
            .unwrap();
        assert_eq!(drafting["view"], "drafting");
    }

    #[test]
    fn test_tools_table_has_one_row_per_tool() {
        let table = render_tools(false).unwrap();
        assert_eq!(table.lines().count(), TOOLS.len());
    }
}
