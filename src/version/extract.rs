//! Version heuristics.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::shell::RunResult;

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(RE_THREE_PART, r"\d+\.\d+\.\d+");
lazy_regex!(RE_TWO_PART, r"\d+\.\d+");

/// Literal produced when no version token could be found.
pub const NOT_AVAILABLE: &str = "n/a";

/// Outcome of version extraction for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Version {
    /// A version string, e.g. `v1.2.3` or a man page footer.
    Detected(String),
    /// The command ran but no version could be found (`n/a`).
    Unknown,
    /// The command exited nonzero.
    NotInstalled,
}

impl Version {
    /// Determine the version for a finished command run.
    pub fn from_run(cmd: &str, result: &RunResult) -> Self {
        if result.success() {
            extract_version(cmd, &result.output_lines)
        } else {
            Version::NotInstalled
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Detected(v) => write!(f, "{}", v),
            Version::Unknown => write!(f, "{}", NOT_AVAILABLE),
            Version::NotInstalled => write!(f, "not installed"),
        }
    }
}

/// Extract a version from the output of `cmd`, picking the heuristic by command.
pub fn extract_version(cmd: &str, lines: &[String]) -> Version {
    let version = if is_man_page_command(cmd) {
        from_man_page(lines)
    } else {
        from_output(lines)
    };

    tracing::debug!("Version for `{}`: {:?}", cmd, version);
    version
}

/// Whether `cmd` reads a man page, which switches to the man page heuristic.
pub fn is_man_page_command(cmd: &str) -> bool {
    cmd.contains("man ")
}

/// Man page heuristic: last non-empty line with runs of spaces collapsed.
pub fn from_man_page(lines: &[String]) -> Version {
    let Some(last) = lines.iter().rev().find(|l| !l.is_empty()) else {
        return Version::Unknown;
    };

    let collapsed = last
        .split(' ')
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if collapsed.is_empty() {
        Version::Unknown
    } else {
        Version::Detected(collapsed)
    }
}

/// Generic heuristic: first `x.y.z` on any line, else first `x.y`, prefixed with `v`.
pub fn from_output(lines: &[String]) -> Version {
    [&*RE_THREE_PART, &*RE_TWO_PART]
        .iter()
        .find_map(|re| lines.iter().find_map(|line| re.find(line)))
        .map(|m| Version::Detected(format!("v{}", m.as_str())))
        .unwrap_or(Version::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn three_part_version() {
        assert_eq!(
            from_output(&lines(&["foo 1.2.3 bar"])),
            Version::Detected("v1.2.3".into())
        );
    }

    #[test]
    fn two_part_version() {
        assert_eq!(
            from_output(&lines(&["foo 1.2 bar"])),
            Version::Detected("v1.2".into())
        );
    }

    #[test]
    fn no_digits_is_unknown() {
        let version = from_output(&lines(&["no version here", "none at all"]));
        assert_eq!(version, Version::Unknown);
        assert_eq!(version.to_string(), "n/a");
    }

    #[test]
    fn empty_output_is_unknown() {
        assert_eq!(from_output(&[]), Version::Unknown);
        assert_eq!(from_man_page(&[]), Version::Unknown);
    }

    #[test]
    fn three_part_on_later_line_beats_two_part_on_earlier_line() {
        let output = lines(&["Python 3.12 launcher", "python 3.12.1 (main)"]);
        assert_eq!(from_output(&output), Version::Detected("v3.12.1".into()));
    }

    #[test]
    fn first_matching_line_wins() {
        let output = lines(&["tool 1.0.0", "library 2.0.0"]);
        assert_eq!(from_output(&output), Version::Detected("v1.0.0".into()));
    }

    #[test]
    fn takes_leading_three_components_of_longer_version() {
        let output = lines(&["bash 5.2.21.1-release"]);
        assert_eq!(from_output(&output), Version::Detected("v5.2.21".into()));
    }

    #[test]
    fn ruby_style_output() {
        let output = lines(&["ruby 3.2.1 (2023-02-08 revision 31819e82c8) [arm64-darwin22]"]);
        assert_eq!(from_output(&output), Version::Detected("v3.2.1".into()));
    }

    #[test]
    fn man_page_collapses_spaces() {
        let output = lines(&["NAME", "     ls - list", "macOS 14.2      March 25,   2024  "]);
        assert_eq!(
            from_man_page(&output),
            Version::Detected("macOS 14.2 March 25, 2024".into())
        );
    }

    #[test]
    fn man_page_skips_trailing_empty_lines() {
        let output = lines(&["BSD   June 9, 1993", ""]);
        assert_eq!(
            from_man_page(&output),
            Version::Detected("BSD June 9, 1993".into())
        );
    }

    #[test]
    fn detects_man_page_commands() {
        assert!(is_man_page_command("man ls | tail -n 1"));
        assert!(!is_man_page_command("git --version"));
        // no trailing space, not a man invocation
        assert!(!is_man_page_command("mandoc -V"));
    }

    #[test]
    fn extract_version_picks_strategy_by_command() {
        let output = lines(&["GNU coreutils 9.4   2023-08-29   LS(1)"]);

        assert_eq!(
            extract_version("man ls | tail -1", &output),
            Version::Detected("GNU coreutils 9.4 2023-08-29 LS(1)".into())
        );
        assert_eq!(
            extract_version("ls --version", &output),
            Version::Detected("v9.4".into())
        );
    }

    #[test]
    fn from_run_nonzero_exit_is_not_installed() {
        let result = RunResult::from_output("zsh: command not found: deno 1.2.3", Some(127));
        assert_eq!(Version::from_run("deno -V", &result), Version::NotInstalled);
    }

    #[test]
    fn from_run_success_extracts() {
        let result = RunResult::from_output("deno 1.40.2", Some(0));
        assert_eq!(
            Version::from_run("deno -V", &result),
            Version::Detected("v1.40.2".into())
        );
    }
}
