use std::fmt;

/// The three top-level views. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    /// Marketing landing page; the default for unknown locations.
    #[default]
    Landing,
    /// Survey introduction with the start button.
    Intro,
    /// The multi-step form itself.
    SurveyForm,
}

impl PageId {
    /// All pages, in navigation order.
    pub const ALL: [PageId; 3] = [PageId::Landing, PageId::Intro, PageId::SurveyForm];
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Landing => "landing",
            Self::Intro => "intro",
            Self::SurveyForm => "survey",
        };
        f.write_str(name)
    }
}
