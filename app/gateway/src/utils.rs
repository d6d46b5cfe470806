//! Gateway utility functions.

/// Expand `${VAR}` and `${VAR:-fallback}` patterns from the environment.
///
/// Unset variables without a fallback expand to an empty string, which
/// [`Config::validate`](crate::Config::validate) reports for required keys.
/// An unterminated `${` is kept verbatim.
pub fn expand_env_vars(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            result.push_str(&rest[start..]);
            return result;
        };

        let pattern = &after[..end];
        let (name, fallback) = match pattern.split_once(":-") {
            Some((name, fallback)) => (name, Some(fallback)),
            None => (pattern, None),
        };
        match std::env::var(name) {
            Ok(value) if !value.is_empty() => result.push_str(&value),
            _ => result.push_str(fallback.unwrap_or_default()),
        }
        rest = &after[end + 1..];
    }

    result.push_str(rest);
    result
}
