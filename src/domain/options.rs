//! Declarative flag schema and the generic parser that consumes it.
//!
//! The parser never rejects input: recognized flags land in typed fields of
//! [`ParsedOptions`], everything else is preserved verbatim so the runner can
//! interpret it with its own grammar.

use std::collections::BTreeMap;
use std::iter::Peekable;

use serde::Serialize;

/// How a flag's value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Boolean,
    String,
}

/// One entry of the flag schema.
#[derive(Debug, Clone, Copy)]
pub struct FlagSpec {
    /// Canonical long name, used as `--name`.
    pub name: &'static str,
    /// Single-letter alias, used as `-X`.
    pub alias: Option<char>,
    pub kind: FlagKind,
    /// One-line description shown in the usage text.
    pub help: &'static str,
}

pub const HELP: &str = "help";
pub const VERSION: &str = "version";
pub const FORCE: &str = "force";
pub const TARGET: &str = "target";
pub const BROWSER: &str = "browser";
pub const STEPS: &str = "steps";
pub const HOOKS: &str = "hooks";
pub const REQUIRE: &str = "require";
pub const EXECUTE: &str = "execute";
pub const LANGUAGE: &str = "language";
pub const STANDALONE: &str = "standalone";

/// Every flag nahual understands. Anything else is forwarded untouched.
pub const FLAGS: &[FlagSpec] = &[
    FlagSpec { name: HELP, alias: Some('h'), kind: FlagKind::Boolean, help: "Print this help" },
    FlagSpec { name: VERSION, alias: None, kind: FlagKind::Boolean, help: "Print the version" },
    FlagSpec {
        name: FORCE,
        alias: Some('F'),
        kind: FlagKind::Boolean,
        help: "Always download the selenium-server",
    },
    FlagSpec {
        name: TARGET,
        alias: Some('T'),
        kind: FlagKind::String,
        help: "Nightwatch's target to execute (e.g. -T integration)",
    },
    FlagSpec {
        name: BROWSER,
        alias: Some('B'),
        kind: FlagKind::String,
        help: "Use a different browser for tests (e.g. -B safari)",
    },
    FlagSpec {
        name: STEPS,
        alias: Some('D'),
        kind: FlagKind::String,
        help: "Path for scanning additional steps (e.g. -D ./custom/steps)",
    },
    FlagSpec {
        name: HOOKS,
        alias: Some('X'),
        kind: FlagKind::String,
        help: "Load modules as external hooks (e.g. -X dayguard)",
    },
    FlagSpec {
        name: REQUIRE,
        alias: Some('R'),
        kind: FlagKind::String,
        help: "Require the given script before all steps (e.g. -R ./runtime.js)",
    },
    FlagSpec {
        name: EXECUTE,
        alias: Some('E'),
        kind: FlagKind::String,
        help: "Execute an arbitrary command before any test (e.g. -E 'python -m http.server')",
    },
    FlagSpec {
        name: LANGUAGE,
        alias: Some('L'),
        kind: FlagKind::String,
        help: "Use a different language for all sources (e.g. -L Spanish)",
    },
    FlagSpec {
        name: STANDALONE,
        alias: Some('S'),
        kind: FlagKind::Boolean,
        help: "Spawn a local selenium-server",
    },
];

/// Look up a flag by its long name.
pub fn lookup_long(name: &str) -> Option<&'static FlagSpec> {
    FLAGS.iter().find(|spec| spec.name == name)
}

/// Look up a flag by its single-letter alias.
pub fn lookup_short(alias: char) -> Option<&'static FlagSpec> {
    FLAGS.iter().find(|spec| spec.alias == Some(alias))
}

/// A string flag's value: one occurrence or several.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Single(String),
    Many(Vec<String>),
}

impl FlagValue {
    fn push(self, value: String) -> Self {
        match self {
            FlagValue::Single(first) => FlagValue::Many(vec![first, value]),
            FlagValue::Many(mut values) => {
                values.push(value);
                FlagValue::Many(values)
            }
        }
    }

    /// Normalize into an ordered sequence.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            FlagValue::Single(value) => vec![value],
            FlagValue::Many(values) => values,
        }
    }
}

/// Typed result of parsing a command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedOptions {
    pub help: bool,
    pub version: bool,
    pub force: bool,
    pub standalone: bool,
    pub target: Option<String>,
    pub browser: Option<String>,
    pub steps: Option<String>,
    pub hooks: Option<String>,
    pub execute: Option<String>,
    pub language: Option<String>,
    /// Modules loaded by the prelude, in command-line order.
    pub require: Vec<String>,
    /// Non-flag arguments: source, destination, then anything extra.
    pub positionals: Vec<String>,
    /// Unrecognized flags (and their values), verbatim.
    pub unknown: Vec<String>,
    /// Everything after a literal `--`, verbatim.
    pub trailing: Vec<String>,
}

impl ParsedOptions {
    /// Parse arguments (without the program name) against [`FLAGS`].
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut raw = RawArgs::default();
        let mut tokens = args.into_iter().map(Into::<String>::into).peekable();

        while let Some(token) = tokens.next() {
            if token == "--" {
                raw.trailing.extend(tokens.by_ref());
                break;
            }
            if let Some(body) = token.strip_prefix("--") {
                raw.long(body, &token, &mut tokens);
            } else if looks_like_flag(&token) {
                raw.short(&token[1..], &token, &mut tokens);
            } else {
                raw.positionals.push(token);
            }
        }

        raw.into_options()
    }

    /// First positional argument, if any.
    pub fn source_arg(&self) -> Option<&str> {
        self.positionals.first().map(String::as_str)
    }

    /// Second positional argument, if any.
    pub fn destination_arg(&self) -> Option<&str> {
        self.positionals.get(1).map(String::as_str)
    }
}

fn looks_like_flag(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}

fn coerce_bool(value: &str) -> bool {
    !matches!(value, "" | "false" | "0")
}

#[derive(Debug, Default)]
struct RawArgs {
    booleans: BTreeMap<&'static str, bool>,
    strings: BTreeMap<&'static str, FlagValue>,
    positionals: Vec<String>,
    unknown: Vec<String>,
    trailing: Vec<String>,
}

impl RawArgs {
    fn long<I>(&mut self, body: &str, token: &str, tokens: &mut Peekable<I>)
    where
        I: Iterator<Item = String>,
    {
        let (name, attached) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        if let Some(spec) = lookup_long(name) {
            match spec.kind {
                FlagKind::Boolean => {
                    let value = match attached {
                        Some(value) => coerce_bool(value),
                        None => take_bool_literal(tokens),
                    };
                    self.booleans.insert(spec.name, value);
                }
                FlagKind::String => {
                    let value = match attached {
                        Some(value) => value.to_string(),
                        None => take_value(tokens),
                    };
                    self.push_string(spec.name, value);
                }
            }
            return;
        }

        if attached.is_none() {
            let negated = name
                .strip_prefix("no-")
                .and_then(lookup_long)
                .filter(|spec| spec.kind == FlagKind::Boolean);
            if let Some(spec) = negated {
                self.booleans.insert(spec.name, false);
                return;
            }
        }

        self.push_unknown(token, attached.is_none(), tokens);
    }

    fn short<I>(&mut self, cluster: &str, token: &str, tokens: &mut Peekable<I>)
    where
        I: Iterator<Item = String>,
    {
        if !cluster_is_known(cluster) {
            self.push_unknown(token, !cluster.contains('='), tokens);
            return;
        }

        for (idx, alias) in cluster.char_indices() {
            let Some(spec) = lookup_short(alias) else {
                break;
            };
            let rest = &cluster[idx + alias.len_utf8()..];

            match spec.kind {
                FlagKind::Boolean => {
                    if let Some(value) = rest.strip_prefix('=') {
                        self.booleans.insert(spec.name, coerce_bool(value));
                        break;
                    }
                    let value = if rest.is_empty() { take_bool_literal(tokens) } else { true };
                    self.booleans.insert(spec.name, value);
                }
                FlagKind::String => {
                    let value = if let Some(value) = rest.strip_prefix('=') {
                        value.to_string()
                    } else if !rest.is_empty() {
                        rest.to_string()
                    } else {
                        take_value(tokens)
                    };
                    self.push_string(spec.name, value);
                    break;
                }
            }
        }
    }

    fn push_string(&mut self, name: &'static str, value: String) {
        let entry = match self.strings.remove(name) {
            Some(existing) => existing.push(value),
            None => FlagValue::Single(value),
        };
        self.strings.insert(name, entry);
    }

    fn push_unknown<I>(&mut self, token: &str, may_take_value: bool, tokens: &mut Peekable<I>)
    where
        I: Iterator<Item = String>,
    {
        self.unknown.push(token.to_string());
        if may_take_value {
            if let Some(value) = tokens.next_if(|next| !looks_like_flag(next)) {
                self.unknown.push(value);
            }
        }
    }

    fn boolean(&self, name: &str) -> bool {
        self.booleans.get(name).copied().unwrap_or(false)
    }

    fn last_string(&mut self, name: &str) -> Option<String> {
        self.strings.remove(name).and_then(|value| value.into_vec().pop())
    }

    fn into_options(mut self) -> ParsedOptions {
        let require = self
            .strings
            .remove(REQUIRE)
            .map(FlagValue::into_vec)
            .unwrap_or_default()
            .into_iter()
            .filter(|value| !value.is_empty())
            .collect();

        ParsedOptions {
            help: self.boolean(HELP),
            version: self.boolean(VERSION),
            force: self.boolean(FORCE),
            standalone: self.boolean(STANDALONE),
            target: self.last_string(TARGET),
            browser: self.last_string(BROWSER),
            steps: self.last_string(STEPS),
            hooks: self.last_string(HOOKS),
            execute: self.last_string(EXECUTE),
            language: self.last_string(LANGUAGE),
            require,
            positionals: self.positionals,
            unknown: self.unknown,
            trailing: self.trailing,
        }
    }
}

/// A short cluster is handled by the schema only when every letter up to the
/// first value-taking flag (or `=`) is a known alias.
fn cluster_is_known(cluster: &str) -> bool {
    for (idx, alias) in cluster.char_indices() {
        if alias == '=' {
            return idx > 0;
        }
        match lookup_short(alias) {
            None => return false,
            Some(spec) if spec.kind == FlagKind::String => return true,
            Some(_) => {}
        }
    }
    true
}

fn take_value<I>(tokens: &mut Peekable<I>) -> String
where
    I: Iterator<Item = String>,
{
    tokens.next_if(|next| !looks_like_flag(next)).unwrap_or_default()
}

fn take_bool_literal<I>(tokens: &mut Peekable<I>) -> bool
where
    I: Iterator<Item = String>,
{
    tokens.next_if(|next| next == "true" || next == "false").map_or(true, |value| value == "true")
}
