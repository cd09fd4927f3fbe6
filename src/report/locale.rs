//! Localized report labels.

/// Language of the fixed labels in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Locale {
    /// Japanese labels, the tool's historical output.
    #[default]
    Ja,
    /// English labels.
    En,
}

/// Fixed strings used by the report formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    /// Note at the top of the report saying entries are alphabetical.
    pub order_note: &'static str,
    /// Replaces the version in the title when none was found.
    pub list_marker: &'static str,
    /// Shown in parentheses when the command exited nonzero.
    pub not_installed: &'static str,
}

const JA: Labels = Labels {
    order_note: "（ABC順）",
    list_marker: "（一覧）",
    not_installed: "未インストール",
};

const EN: Labels = Labels {
    order_note: "(alphabetical order)",
    list_marker: "(list)",
    not_installed: "not installed",
};

impl Locale {
    /// Labels for this locale.
    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::Ja => &JA,
            Locale::En => &EN,
        }
    }
}
