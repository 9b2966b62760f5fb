//! Internal call markers
//!
//! hackmud spells its internal calls `#fs.`, `#db.`, `#D(` and so on. Locally
//! they are written with `$` so the file stays valid JavaScript.

use std::sync::LazyLock;

use regex::Regex;

use super::TransformStage;

/// `$` followed by a dotted identifier (`$Namespace.`) or an uppercase
/// letter (`$CONST`, `$D`).
static LOCAL_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z]+\.|[A-Z])").expect("marker pattern is valid"));

/// `$marker` to `#marker`, restricted to the marker shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkersToRemote;

impl TransformStage for MarkersToRemote {
    fn name(&self) -> &'static str {
        "markers-to-remote"
    }

    fn apply(&self, content: &str) -> String {
        LOCAL_MARKER.replace_all(content, "#${1}").into_owned()
    }
}

/// Every `#` becomes `$`.
///
/// Broader than [`MarkersToRemote`]: a `#` that never was a marker is
/// rewritten too.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestoreMarkers;

impl TransformStage for RestoreMarkers {
    fn name(&self) -> &'static str {
        "restore-markers"
    }

    fn apply(&self, content: &str) -> String {
        content.replace('#', "$")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_dotted_markers() {
        assert_eq!(
            MarkersToRemote.apply("let r = $fs.scripts.lib(); $db.f({})"),
            "let r = #fs.scripts.lib(); #db.f({})"
        );
    }

    #[test]
    fn rewrites_uppercase_markers() {
        assert_eq!(MarkersToRemote.apply("$D(x); $FMCL; $G.x"), "#D(x); #FMCL; #G.x");
    }

    #[test]
    fn leaves_other_dollars_alone() {
        let input = "let $x = 1; const cost = '$5'; $ ; $lower";
        assert_eq!(MarkersToRemote.apply(input), input);
    }

    #[test]
    fn restore_rewrites_every_hash() {
        assert_eq!(
            RestoreMarkers.apply("#fs.x(); let s = '#not a marker'"),
            "$fs.x(); let s = '$not a marker'"
        );
    }
}
