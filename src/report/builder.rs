//! Report accumulation.

use crate::config::CommandEntry;
use crate::shell::RunResult;
use crate::version::Version;

use super::locale::Labels;
use super::markdown::{code_block, horizontal_rule};
use super::ReportOptions;

/// Builds the Markdown report one entry at a time.
///
/// Entries must be added in sorted order. The builder tracks the current
/// index letter and opens a new `## X` section whenever it changes.
#[derive(Debug)]
pub struct ReportBuilder {
    options: ReportOptions,
    current_index: Option<String>,
    out: String,
    entries: usize,
}

impl ReportBuilder {
    /// Start a report with the alphabetical-order note.
    pub fn new(options: ReportOptions) -> Self {
        let out = format!("{}\n\n", options.locale.labels().order_note);
        Self {
            options,
            current_index: None,
            out,
            entries: 0,
        }
    }

    /// Add a checked entry: section header if needed, title, and code block.
    ///
    /// Returns the version shown in the title.
    pub fn add_entry(&mut self, entry: &CommandEntry, result: &RunResult) -> Version {
        self.open_section(entry);

        let version = Version::from_run(&entry.cmd, result);
        self.out
            .push_str(&title_line(&entry.title, &version, self.labels()));
        self.out.push('\n');
        self.out.push_str(&code_block(
            &entry.cmd,
            &result.output_lines,
            self.options.width,
            self.options.details_after,
        ));
        self.out.push('\n');
        self.entries += 1;

        version
    }

    /// Record an entry with nothing to run.
    ///
    /// Its title still opens a section, but no title or block is emitted.
    pub fn add_skipped(&mut self, entry: &CommandEntry) {
        self.open_section(entry);
    }

    /// Number of entries rendered so far.
    pub fn entry_count(&self) -> usize {
        self.entries
    }

    /// Finish and return the Markdown document.
    pub fn finish(self) -> String {
        self.out
    }

    fn labels(&self) -> &'static Labels {
        self.options.locale.labels()
    }

    fn open_section(&mut self, entry: &CommandEntry) {
        let Some(index) = entry.index_key() else {
            return;
        };
        if self.current_index.as_deref() == Some(index.as_str()) {
            return;
        }

        self.out
            .push_str(&horizontal_rule(&index, self.options.width));
        self.out.push_str("\n\n");
        self.out.push_str(&format!("## {}\n\n", index));
        self.current_index = Some(index);
    }
}

/// Render `### <title> (<version>)`.
///
/// An unknown version is replaced by the list marker, and a failed command
/// shows the "not installed" label.
pub fn title_line(title: &str, version: &Version, labels: &Labels) -> String {
    let suffix = match version {
        Version::Detected(v) => format!("({})", v),
        Version::Unknown => labels.list_marker.to_string(),
        Version::NotInstalled => format!("({})", labels.not_installed),
    };
    format!("### {} {}\n", title, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Locale;

    fn english() -> ReportOptions {
        ReportOptions {
            locale: Locale::En,
            ..Default::default()
        }
    }

    fn ok(output: &str) -> RunResult {
        RunResult::from_output(output, Some(0))
    }

    #[test]
    fn starts_with_order_note() {
        let report = ReportBuilder::new(english()).finish();
        assert_eq!(report, "(alphabetical order)\n\n");
    }

    #[test]
    fn japanese_order_note_by_default() {
        let report = ReportBuilder::new(ReportOptions::default()).finish();
        assert!(report.starts_with("（ABC順）\n\n"));
    }

    #[test]
    fn renders_full_entry() {
        let mut builder = ReportBuilder::new(english());
        let version = builder.add_entry(
            &CommandEntry::new("git", "git --version"),
            &ok("git version 2.43.0"),
        );

        assert_eq!(version, Version::Detected("v2.43.0".into()));
        let expected = format!(
            "(alphabetical order)\n\n{}\n\n## G\n\n### git (v2.43.0)\n\n```bash\n$ git --version\ngit version 2.43.0\n```\n\n",
            horizontal_rule("G", 90)
        );
        assert_eq!(builder.finish(), expected);
    }

    #[test]
    fn one_section_per_letter() {
        let mut builder = ReportBuilder::new(english());
        builder.add_entry(&CommandEntry::new("awk", "awk -V"), &ok("awk 1.3.4"));
        builder.add_entry(&CommandEntry::new("Apt", "apt -v"), &ok("apt 2.6.1"));
        builder.add_entry(&CommandEntry::new("bash", "bash --version"), &ok("5.2.21"));

        let report = builder.finish();
        assert_eq!(report.matches("## A\n").count(), 1);
        assert_eq!(report.matches("## B\n").count(), 1);
        assert_eq!(report.matches("<!-- ").count(), 2);
        assert!(report.find("## A").unwrap() < report.find("### Apt").unwrap());
    }

    #[test]
    fn index_is_case_insensitive() {
        let mut builder = ReportBuilder::new(english());
        builder.add_entry(&CommandEntry::new("node", "node -v"), &ok("v20.11.0"));
        builder.add_entry(&CommandEntry::new("Npm", "npm -v"), &ok("10.2.4"));

        let report = builder.finish();
        assert_eq!(report.matches("## N\n").count(), 1);
        assert!(!report.contains("## n"));
    }

    #[test]
    fn unknown_version_uses_list_marker() {
        let mut builder = ReportBuilder::new(english());
        builder.add_entry(&CommandEntry::new("cal", "cal"), &ok("no digits here"));

        let report = builder.finish();
        assert!(report.contains("### cal (list)\n"));
        assert!(!report.contains("n/a"));
    }

    #[test]
    fn japanese_list_marker() {
        let mut builder = ReportBuilder::new(ReportOptions::default());
        builder.add_entry(&CommandEntry::new("cal", "cal"), &ok("no digits here"));

        assert!(builder.finish().contains("### cal （一覧）\n"));
    }

    #[test]
    fn failed_command_is_not_installed_but_shows_output() {
        let mut builder = ReportBuilder::new(english());
        let version = builder.add_entry(
            &CommandEntry::new("deno", "deno -V"),
            &RunResult::from_output("sh: deno: command not found", Some(127)),
        );

        assert_eq!(version, Version::NotInstalled);
        let report = builder.finish();
        assert!(report.contains("### deno (not installed)\n"));
        assert!(report.contains("sh: deno: command not found"));
    }

    #[test]
    fn skipped_entry_opens_section_only() {
        let mut builder = ReportBuilder::new(english());
        builder.add_skipped(&CommandEntry::new("Zed", ""));
        builder.add_entry(&CommandEntry::new("zsh", "zsh --version"), &ok("zsh 5.9"));

        assert_eq!(builder.entry_count(), 1);
        let report = builder.finish();
        assert_eq!(report.matches("## Z\n").count(), 1);
        assert!(!report.contains("### Zed"));
        assert!(report.contains("### zsh (v5.9)"));
    }

    #[test]
    fn empty_title_opens_no_section() {
        let mut builder = ReportBuilder::new(english());
        builder.add_entry(&CommandEntry::new("", "true"), &ok("1.0"));

        let report = builder.finish();
        assert!(!report.contains("<!-- "));
        assert!(report.contains("###  (v1.0)"));
    }

    #[test]
    fn long_output_is_collapsed() {
        let mut builder = ReportBuilder::new(english());
        builder.add_entry(
            &CommandEntry::new("python", "python -VV"),
            &ok("Python 3.12.1\nline 2\nline 3\nline 4\nline 5\nline 6"),
        );

        let report = builder.finish();
        assert!(report.contains("### python (v3.12.1)\n\n<details><summary>$ python -VV</summary>"));
    }

    #[test]
    fn man_page_version_is_literal() {
        let mut builder = ReportBuilder::new(english());
        builder.add_entry(
            &CommandEntry::new("ls", "man ls | tail -n 1"),
            &ok("macOS 14.2     March 25, 2024     macOS 14.2"),
        );

        assert!(builder
            .finish()
            .contains("### ls (macOS 14.2 March 25, 2024 macOS 14.2)\n"));
    }

    #[test]
    fn title_line_variants() {
        let labels = Locale::En.labels();
        assert_eq!(
            title_line("Go", &Version::Detected("v1.22.0".into()), labels),
            "### Go (v1.22.0)\n"
        );
        assert_eq!(title_line("Go", &Version::Unknown, labels), "### Go (list)\n");
        assert_eq!(
            title_line("Go", &Version::NotInstalled, labels),
            "### Go (not installed)\n"
        );
    }
}
