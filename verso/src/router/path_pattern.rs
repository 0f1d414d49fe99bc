use regex::{Regex, RegexBuilder};

/// A route path pattern compiled to a reusable matcher.
///
/// Patterns are plain paths with two special forms: `:name` matches exactly
/// one path segment, and `*` matches any run of characters (including
/// separators). Literal `.` and `?` match only themselves. A trailing slash
/// on either the pattern or the candidate path is not significant, and
/// matching is case-insensitive.
///
/// The compiled matcher is not anchored at the start, so a pattern can also
/// match the tail of a longer path. That looseness is part of the matching
/// contract and is pinned by tests; callers relying on exact-prefix behavior
/// must encode it in the pattern itself.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: String,
    regex: Regex,
    param_names: Vec<String>,
}

impl PathPattern {
    /// Compile `pattern` into a matcher.
    ///
    /// Fails only when the pattern text produces an uncompilable expression
    /// (unbalanced groups, malformed parameter names, duplicate parameter
    /// names).
    pub fn compile(pattern: &str) -> Result<Self, regex::Error> {
        let mut source = String::with_capacity(pattern.len() + 8);
        for ch in pattern.chars() {
            match ch {
                '.' => source.push_str("\\."),
                '?' => source.push_str("\\?"),
                ch => source.push(ch),
            }
        }

        // Trailing slashes are insignificant; the suffix below re-admits one.
        source.truncate(source.trim_end_matches('/').len());

        let source = collapse_wildcards(&source);
        let (source, param_names) = replace_params(&source);
        let source = format!("{source}(/|$)");

        let regex = RegexBuilder::new(&source).case_insensitive(true).build()?;

        Ok(Self {
            raw: pattern.to_string(),
            regex,
            param_names,
        })
    }

    /// Test a candidate path against the compiled pattern.
    ///
    /// Stateless: any number of calls against the same compiled pattern see
    /// identical results.
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// The pattern text this matcher was compiled from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the `:name` segments, in pattern order.
    ///
    /// Capture values are not surfaced to handlers; only the names are
    /// exposed.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }
}

/// Collapse every maximal run of `*` into a single any-sequence token.
fn collapse_wildcards(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + 4);
    let mut in_run = false;
    for ch in source.chars() {
        if ch == '*' {
            if !in_run {
                out.push_str(".*");
                in_run = true;
            }
        } else {
            out.push(ch);
            in_run = false;
        }
    }
    out
}

/// Replace `:name` segments with named single-segment captures.
fn replace_params(source: &str) -> (String, Vec<String>) {
    let mut out = String::with_capacity(source.len() + 16);
    let mut names = Vec::new();
    let mut rest = source;

    while let Some(pos) = rest.find(':') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        match param_name(after) {
            Some(name) => {
                out.push_str("(?<");
                out.push_str(name);
                out.push_str(">[^/]+?)");
                names.push(name.to_string());
                rest = &after[name.len()..];
            }
            None => {
                out.push(':');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    (out, names)
}

/// A parameter name starts with a non-digit, non-separator character and
/// continues with word characters. The run only counts as a parameter when
/// it ends at a segment boundary, an escaped literal, or the end of the
/// pattern; otherwise the text stays literal.
fn param_name(input: &str) -> Option<&str> {
    let mut chars = input.char_indices();
    let (_, first) = chars.next()?;
    if first.is_ascii_digit() || matches!(first, '/' | '|' | '^') {
        return None;
    }

    let mut end = first.len_utf8();
    for (idx, ch) in chars {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            end = idx + ch.len_utf8();
        } else {
            break;
        }
    }

    let tail = &input[end..];
    if tail.is_empty() || tail.starts_with('/') || tail.starts_with('\\') {
        Some(&input[..end])
    } else {
        None
    }
}
