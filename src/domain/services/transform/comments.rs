//! Comment stripping
//!
//! Removes `//` and `/* */` comments while leaving comment-like text inside
//! string, template and regex literals alone. The hackmud autocomplete comment on the first line
//! (`// @autocomplete ...` followed by a line break) is kept verbatim.

use super::TransformStage;

#[derive(Debug, Clone, Copy, Default)]
pub struct StripComments;

impl TransformStage for StripComments {
    fn name(&self) -> &'static str {
        "strip-comments"
    }

    fn apply(&self, content: &str) -> String {
        let (header, body) = split_autocomplete_header(content);
        let mut out = String::with_capacity(content.len());
        out.push_str(header);
        out.push_str(&strip(body));
        out
    }
}

/// Split off a first line of the form `//<at least one char><line break>`.
fn split_autocomplete_header(content: &str) -> (&str, &str) {
    if let Some(end) = content.find('\n') {
        let line = &content[..end];
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.starts_with("//") && line.len() > 2 {
            return content.split_at(end + 1);
        }
    }
    ("", content)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    Quoted(char),
    Regex { in_class: bool },
}

/// Characters after which a `/` opens a regex literal rather than dividing
const REGEX_PRECEDERS: &[char] = &['(', ',', '=', ':', '[', '!', '&', '|', '?', '{', '}', ';'];

/// Keywords after which a `/` opens a regex literal
const REGEX_KEYWORDS: &[&str] = &[
    "return", "typeof", "instanceof", "in", "of", "new", "delete", "void", "throw", "case",
    "do", "else", "yield", "await",
];

/// Whether a `/` following `line` (the code emitted so far on this line)
/// starts a regex literal.
fn regex_allowed(line: &str) -> bool {
    let before = line.trim_end();
    let Some(last) = before.chars().last() else {
        return true;
    };
    if REGEX_PRECEDERS.contains(&last) {
        return true;
    }
    if is_word_char(last) {
        let word_start = before
            .char_indices()
            .rev()
            .take_while(|&(_, c)| is_word_char(c))
            .last()
            .map_or(0, |(i, _)| i);
        return REGEX_KEYWORDS.contains(&&before[word_start..]);
    }
    false
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

struct LineWriter {
    out: String,
    line: String,
    had_comment: bool,
}

impl LineWriter {
    /// Emit the buffered line. Lines that held a comment lose trailing
    /// whitespace, and are dropped entirely when nothing else is left.
    fn flush(&mut self, newline: bool) {
        let had_cr = self.line.ends_with('\r');
        let text = self.line.strip_suffix('\r').unwrap_or(&self.line);

        if self.had_comment {
            let trimmed = text.trim_end();
            if !trimmed.trim_start().is_empty() {
                self.out.push_str(trimmed);
                if had_cr && newline {
                    self.out.push('\r');
                }
                if newline {
                    self.out.push('\n');
                }
            }
        } else {
            self.out.push_str(&self.line);
            if newline {
                self.out.push('\n');
            }
        }

        self.line.clear();
        self.had_comment = false;
    }
}

fn strip(body: &str) -> String {
    let mut writer = LineWriter {
        out: String::with_capacity(body.len()),
        line: String::new(),
        had_comment: false,
    };
    let mut state = State::Code;
    let mut chars = body.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match c {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    writer.had_comment = true;
                    state = State::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    writer.had_comment = true;
                    state = State::BlockComment;
                }
                '"' | '\'' | '`' => {
                    writer.line.push(c);
                    state = State::Quoted(c);
                }
                '/' if regex_allowed(&writer.line) => {
                    writer.line.push(c);
                    state = State::Regex { in_class: false };
                }
                '\n' => writer.flush(true),
                _ => writer.line.push(c),
            },
            State::LineComment => match c {
                '\n' => {
                    writer.flush(true);
                    state = State::Code;
                }
                '\r' if chars.peek() == Some(&'\n') => writer.line.push(c),
                _ => {}
            },
            State::BlockComment => match c {
                '*' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = State::Code;
                }
                '\n' => {
                    writer.flush(true);
                    writer.had_comment = true;
                }
                '\r' if chars.peek() == Some(&'\n') => writer.line.push(c),
                _ => {}
            },
            State::Quoted(quote) => match c {
                '\\' => {
                    writer.line.push(c);
                    if let Some(escaped) = chars.next() {
                        writer.line.push(escaped);
                    }
                }
                '\n' if quote != '`' => {
                    // Unterminated literal; resume in code on the next line
                    writer.flush(true);
                    state = State::Code;
                }
                _ => {
                    writer.line.push(c);
                    if c == quote {
                        state = State::Code;
                    }
                }
            },
            State::Regex { in_class } => match c {
                '\\' => {
                    writer.line.push(c);
                    if let Some(escaped) = chars.peek().copied().filter(|&e| e != '\n') {
                        chars.next();
                        writer.line.push(escaped);
                    }
                }
                '\n' => {
                    // Not a regex after all; resume in code on the next line
                    writer.flush(true);
                    state = State::Code;
                }
                '[' => {
                    writer.line.push(c);
                    state = State::Regex { in_class: true };
                }
                ']' if in_class => {
                    writer.line.push(c);
                    state = State::Regex { in_class: false };
                }
                '/' if !in_class => {
                    writer.line.push(c);
                    state = State::Code;
                }
                _ => writer.line.push(c),
            },
        }
    }

    if !writer.line.is_empty() || writer.had_comment {
        writer.flush(false);
    }
    writer.out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> String {
        StripComments.apply(input)
    }

    #[test]
    fn removes_line_comments_and_trailing_whitespace() {
        assert_eq!(run("let a = 1; // one\nlet b = 2;\n"), "let a = 1;\nlet b = 2;\n");
    }

    #[test]
    fn drops_comment_only_lines() {
        assert_eq!(run("a();\n  // note\nb();\n"), "a();\nb();\n");
    }

    #[test]
    fn removes_multiline_block_comments() {
        let input = "/**\n * Docs\n */\nfunction f() {}\n";
        assert_eq!(run(input), "function f() {}\n");
    }

    #[test]
    fn block_comment_mid_line_keeps_code_on_both_sides() {
        assert_eq!(run("a /* x */ + b\n"), "a  + b\n");
    }

    #[test]
    fn keeps_autocomplete_header() {
        let input = "// @autocomplete target:\"\"\nfunction(c, a) { // body\n}\n";
        assert_eq!(
            run(input),
            "// @autocomplete target:\"\"\nfunction(c, a) {\n}\n"
        );
    }

    #[test]
    fn header_needs_content_and_line_break() {
        assert_eq!(run("//\nx\n"), "x\n");
        assert_eq!(run("// only line"), "");
    }

    #[test]
    fn second_line_comment_is_not_a_header() {
        assert_eq!(run("x\n// two\n"), "x\n");
    }

    #[test]
    fn ignores_comment_markers_inside_strings() {
        let input = "let url = \"http://example.com\"; let s = '/* no */';\n";
        assert_eq!(run(input), input);
    }

    #[test]
    fn handles_escaped_quotes() {
        let input = "let s = \"a \\\" // still string\"; // gone\n";
        assert_eq!(run(input), "let s = \"a \\\" // still string\";\n");
    }

    #[test]
    fn template_literals_span_lines() {
        let input = "let t = `line\n// kept`;\n";
        assert_eq!(run(input), input);
    }

    #[test]
    fn preserves_crlf_line_endings() {
        assert_eq!(run("a(); // c\r\nb();\r\n"), "a();\r\nb();\r\n");
    }

    #[test]
    fn no_trailing_newline_is_kept_as_is() {
        assert_eq!(run("a(); // c"), "a();");
        assert_eq!(run("a()"), "a()");
    }

    #[test]
    fn keeps_slashes_inside_regex_literals() {
        let input = "return a.url.replace(/https?:\\/\\//, \"\"); // strip scheme\n";
        assert_eq!(run(input), "return a.url.replace(/https?:\\/\\//, \"\");\n");
    }

    #[test]
    fn regex_after_keyword_and_at_line_start() {
        assert_eq!(run("return /\\/\\/x/.test(s);\n"), "return /\\/\\/x/.test(s);\n");
        assert_eq!(run("  /a\\//g.exec(s) // c\n"), "  /a\\//g.exec(s)\n");
    }

    #[test]
    fn slash_inside_character_class_does_not_close_regex() {
        let input = "let re = /[/]\\/*/; // path\n";
        assert_eq!(run(input), "let re = /[/]\\/*/;\n");
    }

    #[test]
    fn division_is_not_a_regex() {
        assert_eq!(run("let x = a / b; // half\n"), "let x = a / b;\n");
        assert_eq!(run("let y = (a) / 2 /* two */;\n"), "let y = (a) / 2 ;\n");
        assert_eq!(run("let z = total / n // avg\n"), "let z = total / n\n");
    }

    #[test]
    fn keyword_check_handles_non_ascii_text() {
        assert_eq!(run("let é = x→return /a\\/b/ // c\n"), "let é = x→return /a\\/b/\n");
        assert_eq!(run("é / 2 // c\n"), "é / 2\n");
    }

    #[test]
    fn unterminated_regex_ends_at_line_break() {
        assert_eq!(run("f(/abc\nb(); // c\n"), "f(/abc\nb();\n");
    }

    #[test]
    fn idempotent_on_sample() {
        let input = "// @autocomplete\n/* a */ x // b\n'//' /* c\n d */ y\n";
        let once = run(input);
        assert_eq!(run(&once), once);
    }
}
