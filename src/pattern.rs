//! # Glob Pattern Matching
//!
//! This module compiles glob-style filter patterns into a reusable matching
//! predicate, used wherever a collection of named entities (repositories,
//! groups, branches, tags) is listed with an optional filter.
//!
//! ## Pattern language
//!
//! - `*` matches any run of characters, including the empty run.
//! - `**` matches any run of characters; when immediately followed by `/`
//!   it also consumes that separator, so `**/x` matches `x` at the root as
//!   well as `a/b/x`.
//! - `.` and `/` are literal. Path separators are never special except
//!   through the explicit `**/` rule.
//! - A leading `!` turns the pattern into an exclusion.
//!
//! ## Combination semantics
//!
//! A name matches a compiled pattern list iff it matches at least one
//! positive pattern (or the list contains none) and matches no exclusion
//! pattern. An empty or absent pattern list accepts everything.
//!
//! Compilation is the only fallible step: malformed syntax is rejected with
//! [`Error::InvalidPattern`] up front so a compiled [`Matcher`] can be
//! reused and shared without per-match error handling. A `Matcher` is an
//! immutable value, safe to use from any number of threads.

use crate::error::{Error, Result};
use regex::RegexBuilder;

/// A compiled, immutable matching predicate for a list of glob patterns.
#[derive(Debug, Clone)]
pub struct Matcher {
    /// Alternation of all positive patterns; `None` accepts everything.
    positive: Option<regex::Regex>,
    /// Alternation of all exclusion patterns; `None` excludes nothing.
    negative: Option<regex::Regex>,
}

impl Matcher {
    /// A matcher that accepts every name (the identity filter).
    pub fn match_all() -> Self {
        Self {
            positive: None,
            negative: None,
        }
    }

    /// Compiles a list of glob patterns into a single predicate.
    ///
    /// An empty pattern list compiles to the identity filter. Matching is
    /// case-sensitive unless `case_sensitive` is false.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] for malformed syntax, such as a
    /// bare `!` with no sub-pattern after it.
    pub fn compile<I, S>(patterns: I, case_sensitive: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positives = Vec::new();
        let mut negatives = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            if let Some(stripped) = pattern.strip_prefix('!') {
                if stripped.is_empty() {
                    return Err(Error::InvalidPattern {
                        pattern: pattern.to_string(),
                        message: "exclusion pattern is empty".to_string(),
                    });
                }
                negatives.push(translate(stripped));
            } else {
                positives.push(translate(pattern));
            }
        }

        Ok(Self {
            positive: build_alternation(positives, case_sensitive)?,
            negative: build_alternation(negatives, case_sensitive)?,
        })
    }

    /// Compiles an optional pattern list; `None` yields the identity filter.
    pub fn compile_optional<S: AsRef<str>>(
        patterns: Option<&[S]>,
        case_sensitive: bool,
    ) -> Result<Self> {
        match patterns {
            Some(patterns) => Self::compile(patterns, case_sensitive),
            None => Ok(Self::match_all()),
        }
    }

    /// Tests a single name against the compiled predicate. Never fails.
    pub fn is_match(&self, name: &str) -> bool {
        let accepted = match &self.positive {
            Some(re) => re.is_match(name),
            None => true,
        };
        let excluded = match &self.negative {
            Some(re) => re.is_match(name),
            None => false,
        };
        accepted && !excluded
    }
}

/// Joins translated fragments into one anchored alternation.
fn build_alternation(fragments: Vec<String>, case_sensitive: bool) -> Result<Option<regex::Regex>> {
    if fragments.is_empty() {
        return Ok(None);
    }
    let expression = format!("^(?:{})$", fragments.join("|"));
    let regex = RegexBuilder::new(&expression)
        .case_insensitive(!case_sensitive)
        .build()?;
    Ok(Some(regex))
}

/// Translates one glob pattern (without any leading `!`) into a regex
/// fragment.
fn translate(pattern: &str) -> String {
    let mut out = String::new();
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '*' {
            if chars.peek() == Some(&'*') {
                chars.next();
                if chars.peek() == Some(&'/') {
                    // `**/` also swallows the separator so the pattern
                    // matches at the root.
                    chars.next();
                    out.push_str("(?:.*/)?");
                } else {
                    out.push_str(".*");
                }
            } else {
                out.push_str(".*");
            }
        } else {
            out.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4])));
        }
    }
    out
}

/// Lazily filters `entries`, yielding the items whose name satisfies the
/// matcher. The name is extracted per item through `name_of`, so callers can
/// filter arbitrary entity types by display name, qualified name, or any
/// other key. Each call produces a fresh iterator; the result is finite iff
/// the input is.
pub fn match_names<'a, T, I, F>(
    entries: I,
    matcher: &'a Matcher,
    name_of: F,
) -> impl Iterator<Item = T> + 'a
where
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
    F: Fn(&T) -> String + 'a,
{
    entries
        .into_iter()
        .filter(move |entry| matcher.is_match(&name_of(entry)))
}
