use std::fmt;

use serde::{Deserialize, Serialize};

/// A named, vertically stacked block of the page, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    Hero,
    Services,
    Process,
    Work,
    Testimonials,
    Contact,
}

impl SectionKey {
    /// Every section in page order
    pub const ALL: [SectionKey; 6] = [
        SectionKey::Hero,
        SectionKey::Services,
        SectionKey::Process,
        SectionKey::Work,
        SectionKey::Testimonials,
        SectionKey::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Hero => "hero",
            SectionKey::Services => "services",
            SectionKey::Process => "process",
            SectionKey::Work => "work",
            SectionKey::Testimonials => "testimonials",
            SectionKey::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
