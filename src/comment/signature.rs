//! Function declaration detection
//!
//! Recognizes the single-line JavaScript declaration shapes worth a tagged
//! comment and pulls out the declared name and parameter names. This is plain
//! text matching; anything it cannot read falls back to a generic comment.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// A function declaration read from one line of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    /// Declared or assigned name, absent for anonymous functions
    pub name: Option<String>,
    /// Parameter names in declaration order
    pub params: Vec<String>,
}

/// What must follow the closing parenthesis for a rule to hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tail {
    /// Anything, including nothing
    Any,
    /// An arrow (`=>`), optionally after a return type annotation
    Arrow,
    /// A function body (`{`), optionally after a return type annotation
    Body,
}

struct FunctionRule {
    /// Matches up to and including the opening parenthesis
    pattern: Regex,
    tail: Tail,
}

const IDENT: &str = r"[A-Za-z_$][\w$]*";

static FUNCTION_RULES: Lazy<Vec<FunctionRule>> = Lazy::new(|| {
    vec![
        // function name(...), export default async function* name(...)
        FunctionRule {
            pattern: Regex::new(&format!(
                r"^(?:export\s+)?(?:default\s+)?(?:async\s+)?function\b\s*\*?\s*(?P<name>{IDENT})?\s*\("
            ))
            .unwrap(),
            tail: Tail::Any,
        },
        // name = function (...), obj.name = function (...), name: function (...)
        FunctionRule {
            pattern: Regex::new(&format!(
                r"^(?:export\s+)?(?:(?:var|let|const)\s+)?(?P<name>{IDENT}(?:\.{IDENT})*)\s*[=:]\s*(?:async\s+)?function\b\s*\*?\s*(?:{IDENT})?\s*\("
            ))
            .unwrap(),
            tail: Tail::Any,
        },
        // const name = (...) => ..., name: async (...) => ...
        FunctionRule {
            pattern: Regex::new(&format!(
                r"^(?:export\s+)?(?:(?:var|let|const)\s+)?(?P<name>{IDENT}(?:\.{IDENT})*)\s*[=:]\s*(?:async\s*)?\("
            ))
            .unwrap(),
            tail: Tail::Arrow,
        },
        // class and object method shorthand: static async name(...) {
        FunctionRule {
            pattern: Regex::new(&format!(
                r"^(?:(?:static|async|get|set|public|private|protected|override)\s+)*\*?\s*(?P<name>{IDENT})\s*\("
            ))
            .unwrap(),
            tail: Tail::Body,
        },
    ]
});

/// Words that look like `name(` but open statements, not functions
const STATEMENT_KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "with", "return", "function", "typeof", "new", "do",
    "else", "await", "yield", "super", "delete", "void", "throw", "case",
];

/// Read a function declaration from `line`, if it is one
pub fn parse_function_signature(line: &str) -> Option<FunctionSignature> {
    let line = line.trim();
    FUNCTION_RULES.iter().find_map(|rule| {
        let captures = rule.pattern.captures(line)?;
        let name = captures.name("name").map(|m| m.as_str().to_string());
        if let Some(name) = &name {
            if STATEMENT_KEYWORDS.contains(&name.as_str()) {
                return None;
            }
        }
        let open_paren_end = captures.get(0)?.end();
        let (params, rest) = split_parenthesized(&line[open_paren_end..])?;
        if !tail_matches(rule.tail, rest) {
            return None;
        }
        Some(FunctionSignature {
            name,
            params: parameter_names(params),
        })
    })
}

fn tail_matches(tail: Tail, rest: &str) -> bool {
    let rest = rest.trim_start();
    match tail {
        Tail::Any => true,
        Tail::Arrow => rest.starts_with("=>") || (rest.starts_with(':') && rest.contains("=>")),
        Tail::Body => {
            rest.starts_with('{') || (rest.starts_with(':') && rest.trim_end().ends_with('{'))
        }
    }
}

/// Split text following an opening parenthesis into the enclosed list and
/// whatever follows the matching close. `None` when the list is not closed on
/// this line.
fn split_parenthesized(text: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (index, c) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' if depth == 0 => return Some((&text[..index], &text[index + 1..])),
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    None
}

/// Split a parameter list on top-level commas.
///
/// Angle brackets nest only inside a type annotation (after `:`, before any
/// `=` default), so comparisons in default values do not hide commas.
fn split_top_level(params: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut in_type = false;
    let mut in_default = false;
    let mut start = 0;

    for (index, c) in params.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            '<' if in_type => depth += 1,
            '>' if in_type => depth = depth.saturating_sub(1),
            ':' if depth == 0 && !in_default => in_type = true,
            '=' if depth == 0 => {
                in_type = false;
                in_default = true;
            }
            ',' if depth == 0 => {
                parts.push(&params[start..index]);
                start = index + 1;
                in_type = false;
                in_default = false;
            }
            _ => {}
        }
    }
    parts.push(&params[start..]);
    parts
}

/// Names of the parameters in a comma-separated list.
///
/// Each name is the leading identifier of its entry; default values and type
/// annotations are dropped, a rest marker is stripped. Destructured entries
/// have no single name and become `param<N>` (1-based position).
fn parameter_names(params: &str) -> Vec<String> {
    split_top_level(params)
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .enumerate()
        .map(|(position, entry)| {
            let entry = entry.trim_start_matches("...").trim_start();
            let ident_len = leading_identifier_len(entry);
            if ident_len == 0 {
                format!("param{}", position + 1)
            } else {
                entry[..ident_len].to_string()
            }
        })
        .collect()
}

fn leading_identifier_len(text: &str) -> usize {
    let mut chars = text.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return 0,
    }
    chars
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_' || *c == '$'))
        .map(|(index, _)| index)
        .unwrap_or(text.len())
}
