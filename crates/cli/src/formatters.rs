//! Output formatters for loaded variables.
//!
//! Provides two output formats: dotenv-style `KEY=VALUE` lines and JSON.

use anyhow::Result;
use clap::ValueEnum;
use envflag_config::LoadedEnv;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `KEY=VALUE` lines that can be loaded again as an env file
    Env,
    /// A JSON object of keys to values
    Json,
}

/// Render the loaded variables in the requested format.
pub fn format_vars(format: OutputFormat, loaded: &LoadedEnv) -> Result<String> {
    match format {
        OutputFormat::Env => Ok(format_env(loaded)),
        OutputFormat::Json => format_json(loaded),
    }
}

fn format_env(loaded: &LoadedEnv) -> String {
    let mut output = String::new();
    for (key, value) in loaded.iter() {
        output.push_str(key);
        output.push('=');
        output.push_str(&quote_value(value));
        output.push('\n');
    }
    output
}

fn format_json(loaded: &LoadedEnv) -> Result<String> {
    let object: serde_json::Map<String, serde_json::Value> = loaded
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect();
    Ok(serde_json::to_string_pretty(&object)?)
}

/// Double-quote values that would not survive a round trip unquoted.
fn quote_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '#' | '$' | '\\'));
    if !needs_quotes {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '$' => quoted.push_str("\\$"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
