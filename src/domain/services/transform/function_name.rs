//! Top-level function name handling
//!
//! hackmud scripts are a single anonymous function. Locally the function
//! carries a name; the name does not survive the trip to the remote side, so
//! importing puts back a fixed placeholder instead.

use std::sync::LazyLock;

use regex::Regex;

use super::TransformStage;

/// Name given to functions recovered from the remote dialect
pub const PLACEHOLDER_NAME: &str = "wrapper";

static NAMED_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function.+?\(").expect("declaration pattern is valid"));

static DECLARATION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)function(.+)$").expect("declaration pattern is valid"));

/// `function name (` to `function (` on the first match only.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripFunctionName;

impl TransformStage for StripFunctionName {
    fn name(&self) -> &'static str {
        "strip-function-name"
    }

    fn apply(&self, content: &str) -> String {
        NAMED_DECLARATION
            .replacen(content, 1, "function (")
            .into_owned()
    }
}

/// `function<rest>` to `function wrapper<rest>` on the first matching line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameFunction;

impl TransformStage for NameFunction {
    fn name(&self) -> &'static str {
        "name-function"
    }

    fn apply(&self, content: &str) -> String {
        let replacement = format!("function {}${{1}}", PLACEHOLDER_NAME);
        DECLARATION_LINE
            .replacen(content, 1, replacement.as_str())
            .into_owned()
    }
}
