//! Variable interpolation for configuration text
//!
//! Replaces `${name}` placeholders using the ${var} syntax.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;

lazy_static! {
    static ref PLACEHOLDER_RE: Regex = Regex::new(r"\$\{([^}]+)\}").unwrap();
}

/// Interpolate variables in a string
///
/// Only names present in `vars` are replaced. Anything else, including
/// shell parameters such as `${HOME}`, is left as it is. Substituted values
/// are not scanned again.
pub fn interpolate(s: &str, vars: &HashMap<String, String>) -> String {
    PLACEHOLDER_RE
        .replace_all(s, |caps: &Captures| {
            let var_name = &caps[1];

            match vars.get(var_name) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Names of every placeholder in a string, in order of appearance
pub fn placeholders(s: &str) -> Vec<String> {
    PLACEHOLDER_RE
        .captures_iter(s)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_interpolation() {
        let mut vars = HashMap::new();
        vars.insert("name".to_string(), "world".to_string());

        assert_eq!(interpolate("Hello, ${name}!", &vars), "Hello, world!");
    }

    #[test]
    fn test_multiple_variables() {
        let mut vars = HashMap::new();
        vars.insert("first".to_string(), "John".to_string());
        vars.insert("last".to_string(), "Doe".to_string());

        assert_eq!(interpolate("${first} ${last}", &vars), "John Doe");
    }

    #[test]
    fn test_process_environment_not_consulted() {
        std::env::set_var("TEST_VAR_ORBIT_INTERPOLATE", "test_value");

        let vars = HashMap::new();
        let result = interpolate("echo '${TEST_VAR_ORBIT_INTERPOLATE}'", &vars);
        assert_eq!(result, "echo '${TEST_VAR_ORBIT_INTERPOLATE}'");

        std::env::remove_var("TEST_VAR_ORBIT_INTERPOLATE");
    }

    #[test]
    fn test_undefined_variable_left_alone() {
        let vars = HashMap::new();
        let result = interpolate("Hello, ${orbit_undefined_xyz}!", &vars);
        assert_eq!(result, "Hello, ${orbit_undefined_xyz}!");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let mut vars = HashMap::new();
        vars.insert("outer".to_string(), "${inner}".to_string());
        vars.insert("inner".to_string(), "value".to_string());

        assert_eq!(interpolate("${outer}", &vars), "${inner}");
    }

    #[test]
    fn test_empty_variable_name() {
        let vars = HashMap::new();
        assert_eq!(interpolate("Value: ${}", &vars), "Value: ${}");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            placeholders("${a} and ${b} and ${a}"),
            vec!["a", "b", "a"]
        );
        assert!(placeholders("run@build").is_empty());
    }
}
