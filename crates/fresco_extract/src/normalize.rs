//! Quote-defect normalization for JSON candidates.
//!
//! Generative models produce JSON with a recurring set of syntax defects.
//! This module repairs them as a pure text transformation, kept separate
//! from parsing so new defect patterns can be added without touching the
//! grammar code. The enumerated defects, in application order:
//!
//! 1. smart double quotes (`“` `”` `„`) become straight double quotes;
//! 2. smart single quotes (`’` `‘`) become straight apostrophes;
//! 3. internal newlines, carriage returns and tabs collapse to spaces;
//! 4. single-quoted string values become double-quoted;
//! 5. runs of whitespace collapse to one space;
//! 6. unquoted object keys gain double quotes (`{scene: 1}` → `{"scene": 1}`).

use regex::Regex;
use std::sync::LazyLock;

static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^']+)'").expect("single-quote pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern"));

static UNQUOTED_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([{,]\s*)(\w+)\s*:"#).expect("unquoted-key pattern"));

/// Repair the enumerated quoting defects in a JSON candidate span.
///
/// The result is not guaranteed to be valid JSON, so the caller still
/// parses strictly, but each listed defect is corrected.
///
/// # Examples
///
/// ```
/// use fresco_extract::normalize_json_candidate;
///
/// let repaired = normalize_json_candidate("{scene: 1, description: ‘fine’}");
/// assert_eq!(repaired, r#"{"scene": 1, "description": "fine"}"#);
/// ```
pub fn normalize_json_candidate(candidate: &str) -> String {
    let text = candidate
        .replace(['\u{201C}', '\u{201D}', '\u{201E}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'");

    let text = text.replace(['\n', '\r', '\t'], " ");

    let text = SINGLE_QUOTED.replace_all(&text, "\"$1\"");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    let text = UNQUOTED_KEY.replace_all(&text, "$1\"$2\":");

    text.trim().to_string()
}
