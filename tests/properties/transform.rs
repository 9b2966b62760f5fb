//! Property tests for the transform stages.

use proptest::prelude::*;

use mudsync::domain::services::transform::StripComments;
use mudsync::domain::services::TransformStage;
use mudsync::{forward, reverse};

fn script_like() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        Just("function ".to_string()),
        Just("name".to_string()),
        Just("(c, a)".to_string()),
        Just(" { ".to_string()),
        Just("}".to_string()),
        Just("$fs.".to_string()),
        Just("$D".to_string()),
        Just("#".to_string()),
        Just("// note".to_string()),
        Just("/* block */".to_string()),
        Just("/*".to_string()),
        Just("*/".to_string()),
        Just("\"str // not\"".to_string()),
        Just("(/https?:\\/\\//g)".to_string()),
        Just("= /[/*]\\//".to_string()),
        Just(" / ".to_string()),
        Just("'".to_string()),
        Just("`".to_string()),
        Just("\n".to_string()),
        Just("\r\n".to_string()),
        Just("  ".to_string()),
        "[a-z0-9;.=]{1,6}",
    ];
    proptest::collection::vec(token, 0..40).prop_map(|tokens| tokens.concat())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: forward and reverse never panic on arbitrary input.
    #[test]
    fn property_transforms_never_panic(s in "(?s).{0,256}", enabled in any::<bool>()) {
        let _ = forward(&s, enabled);
        let _ = reverse(&s);
    }

    /// PROPERTY: stripping comments twice equals stripping once.
    #[test]
    fn property_strip_comments_idempotent(s in script_like()) {
        let once = StripComments.apply(&s);
        let twice = StripComments.apply(&once);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: slashes inside a regex literal never start a comment.
    #[test]
    fn property_regex_literals_survive(body in "[a-z?:.]{0,8}", flags in "[gim]{0,2}") {
        let literal = format!("/{body}\\/\\/[/]/{flags}");
        let script = format!("let re = {literal}; // trailing\nreturn {literal}.test(s);\n");
        let out = forward(&script, false);
        prop_assert_eq!(out, format!("let re = {literal};\nreturn {literal}.test(s);\n"));
    }

    /// PROPERTY: reverse leaves no `#` behind.
    #[test]
    fn property_reverse_removes_every_hash(s in script_like()) {
        prop_assert!(!reverse(&s).contains('#'));
    }

    /// PROPERTY: with the transform off, `$` markers and names survive
    /// whenever they sit outside comments.
    #[test]
    fn property_disabled_transform_keeps_markers(name in "[a-z]{1,8}", ns in "[a-z]{1,8}") {
        let script = format!("function {name}(c, a) {{ return ${ns}.x(); }}");
        let out = forward(&script, false);
        prop_assert_eq!(out, script);
    }

    /// PROPERTY: a dotted marker always ends up `#`-prefixed.
    #[test]
    fn property_dotted_marker_rewritten(ns in "[A-Za-z]{1,8}", call in "[a-z]{1,8}") {
        let script = format!("${ns}.{call}()");
        let expected = format!("#{ns}.{call}(");
        prop_assert!(forward(&script, true).contains(&expected));
    }
}
