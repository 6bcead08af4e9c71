//! Version tag composition.
//!
//! A tag is built from the application version stored in a record, the digits of the
//! version folder name, and the root folder name:
//! `{major}.{minor}.{digits}x{root_id}`.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

fn leading_major_minor_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d+)\.(\d+)").unwrap())
}

fn digit_run_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\d+").unwrap())
}

/// Major and minor components taken verbatim from an application version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppVersion {
    pub major: String,
    pub minor: String,
}

impl AppVersion {
    /// Extract `major`/`minor` from a version such as `2019.4.15f1`.
    ///
    /// A leading `digits.digits` prefix wins. Otherwise the first two digit runs found
    /// anywhere in the string are used, with an empty minor when only one exists.
    /// Returns `None` when the string holds no digit at all.
    pub fn parse(version: &str) -> Option<Self> {
        if let Some(captures) = leading_major_minor_regex().captures(version) {
            return Some(AppVersion {
                major: captures[1].to_string(),
                minor: captures[2].to_string(),
            });
        }

        let mut runs = digit_run_regex().find_iter(version);
        let major = runs.next()?.as_str().to_string();
        let minor = runs
            .next()
            .map(|run| run.as_str().to_string())
            .unwrap_or_default();

        Some(AppVersion { major, minor })
    }
}

/// Concatenate every digit of a folder name, left to right.
///
/// Digits are Unicode decimal digits (`\d`), the same class the version string is
/// matched with. Superscripts such as `²` are not digits here.
pub fn folder_digits(folder_name: &str) -> String {
    digit_run_regex()
        .find_iter(folder_name)
        .map(|run| run.as_str())
        .collect()
}

/// Composite version identifier written back into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    pub app: AppVersion,
    pub digits: String,
    pub root_id: String,
}

impl VersionTag {
    pub fn new(app: AppVersion, ver_folder: &str, root_id: &str) -> Self {
        VersionTag {
            app,
            digits: folder_digits(ver_folder),
            root_id: root_id.to_string(),
        }
    }

    /// Output file name for this tag.
    pub fn file_name(&self) -> String {
        format!("{}.json", self)
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}x{}",
            self.app.major, self.app.minor, self.digits, self.root_id
        )
    }
}
