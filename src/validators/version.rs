//! Version extraction and range matching.
//!
//! Probe output is free-form (`v16.2.0`, `Python 3.11.4`,
//! `go version go1.21.5 linux/amd64`), so the first dotted number is taken
//! as the installed version. Constraints use npm `engines` syntax and are
//! translated into [`semver::VersionReq`] alternatives.

use regex::Regex;
use semver::{Version, VersionReq};
use std::sync::LazyLock;

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").unwrap());

static HYPHEN_RANGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\S+)\s+-\s+(\S+)\s*$").unwrap());

/// Extract the installed version from raw probe output.
///
/// With a custom `pattern`, capture group 1 (or the whole match) is used as
/// the text to read the version from. Missing minor/patch components are
/// treated as zero.
pub fn extract_version(raw: &str, pattern: Option<&Regex>) -> Option<Version> {
    let text = match pattern {
        Some(re) => {
            let caps = re.captures(raw)?;
            caps.get(1).or_else(|| caps.get(0))?.as_str()
        }
        None => raw,
    };

    let caps = VERSION_REGEX.captures(text)?;
    let part = |i: usize| -> Option<u64> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    Some(Version::new(part(1)?, part(2)?, part(3)?))
}

/// An npm-style version range: one or more `||` alternatives.
#[derive(Debug, Clone)]
pub struct VersionRange {
    alternatives: Vec<VersionReq>,
}

impl VersionRange {
    /// Parse an `engines` constraint such as `>=14`, `^6.0.0`, `14.x || 16.x`,
    /// `>= 1.2 < 2` or `1.2.3 - 2.0.0`.
    ///
    /// Returns `None` when any alternative cannot be parsed.
    pub fn parse(constraint: &str) -> Option<Self> {
        let alternatives = constraint
            .split("||")
            .map(parse_alternative)
            .collect::<Option<Vec<_>>>()?;
        Some(Self { alternatives })
    }

    /// Whether `version` satisfies any alternative.
    pub fn matches(&self, version: &Version) -> bool {
        self.alternatives.iter().any(|req| req.matches(version))
    }
}

fn parse_alternative(alt: &str) -> Option<VersionReq> {
    let alt = alt.trim();
    if alt.is_empty() || matches!(alt, "*" | "x" | "X" | "latest") {
        return Some(VersionReq::STAR);
    }

    if let Some(caps) = HYPHEN_RANGE_REGEX.captures(alt) {
        let low = caps[1].trim_start_matches('v');
        let high = caps[2].trim_start_matches('v');
        return VersionReq::parse(&format!(">={}, <={}", low, high)).ok();
    }

    // npm separates comparators with whitespace and allows `>= 14`.
    let mut comparators: Vec<String> = Vec::new();
    let mut pending_op = String::new();
    for token in alt.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        if token.chars().all(is_operator_char) {
            pending_op.push_str(token);
            continue;
        }
        let op_len = token
            .char_indices()
            .find(|(_, c)| !is_operator_char(*c))
            .map(|(i, _)| i)
            .unwrap_or(token.len());
        let (op, version) = token.split_at(op_len);
        let mut op = format!("{}{}", pending_op, op);
        pending_op.clear();
        let version = strip_wildcards(version.trim_start_matches(['v', 'V']));
        if version.is_empty() {
            if op.is_empty() {
                continue;
            }
            return None;
        }

        // A bare npm version is exact (`1.2.3`) or a wildcard (`14`), never caret.
        if op.is_empty() {
            op.push('=');
        }
        comparators.push(format!("{}{}", op, version));
    }

    if !pending_op.is_empty() {
        return None;
    }
    if comparators.is_empty() {
        return Some(VersionReq::STAR);
    }

    VersionReq::parse(&comparators.join(", ")).ok()
}

/// Drop `x`/`*` components: `14.x` becomes `14`, which the comparator
/// already treats as a partial version.
fn strip_wildcards(version: &str) -> String {
    version
        .split('.')
        .take_while(|part| !matches!(*part, "x" | "X" | "*"))
        .collect::<Vec<_>>()
        .join(".")
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '>' | '<' | '=' | '^' | '~')
}

/// Check raw probe output against an `engines` constraint.
///
/// Unparsable output or constraints are treated as a mismatch.
pub fn satisfies(raw: &str, constraint: &str) -> bool {
    satisfies_with(raw, constraint, None)
}

/// Like [`satisfies`], reading the version with a custom pattern.
pub fn satisfies_with(raw: &str, constraint: &str, pattern: Option<&Regex>) -> bool {
    let Some(version) = extract_version(raw, pattern) else {
        tracing::debug!("No version found in probe output {:?}", raw.trim());
        return false;
    };
    let Some(range) = VersionRange::parse(constraint) else {
        tracing::debug!("Unparsable version constraint {:?}", constraint);
        return false;
    };
    range.matches(&version)
}
