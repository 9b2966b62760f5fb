//! Reusable script content

#![allow(dead_code)]

pub const SHARED_SCRIPT: &str = "// @autocomplete target:\"\"\n/* shared helper */\nfunction shared(context, args) {\n  return $fs.scripts.lib(); // call\n}\n";

pub const SHARED_SCRIPT_REMOTE: &str =
    "// @autocomplete target:\"\"\nfunction (context, args) {\n  return #fs.scripts.lib();\n}\n";

pub const OWNED_SCRIPT: &str = "function only(context, args) {\n  $D(args);\n}\n";

pub const OWNED_SCRIPT_REMOTE: &str = "function (context, args) {\n  #D(args);\n}\n";
