use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CommonError;

/// One self-contained block of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Achievements,
    Contact,
}

impl Section {
    /// Fixed vertical order of the page.
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Achievements,
        Section::Contact,
    ];

    /// DOM id, also used as the anchor target and the fragment route.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Achievements => "achievements",
            Section::Contact => "contact",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About Me",
            Section::Skills => "Technical Skills",
            Section::Projects => "Projects",
            Section::Achievements => "Hackathon Achievements",
            Section::Contact => "Get in Touch",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| CommonError::UnknownSection(s.to_string()))
    }
}
