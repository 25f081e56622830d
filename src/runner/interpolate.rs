//! Variable interpolation for commit messages
//!
//! Replaces `${var}` placeholders with values from named invocation
//! arguments, falling back to environment variables. Placeholders with no
//! value in either source are left unchanged.

use regex::Regex;
use std::collections::HashMap;
use std::env;

/// Interpolate `${var}` placeholders in a string
pub fn interpolate(s: &str, vars: &HashMap<String, String>) -> String {
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(s, |caps: &regex::Captures| {
        let var_name = &caps[1];

        if let Some(value) = vars.get(var_name) {
            return value.clone();
        }
        if let Ok(value) = env::var(var_name) {
            return value;
        }

        // No value anywhere; keep the placeholder text
        caps[0].to_string()
    })
    .into_owned()
}
