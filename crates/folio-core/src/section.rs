//! Page sections, in display order.

use serde::{Deserialize, Serialize};

use crate::field::FieldConfig;

/// One presentational section of the portfolio page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    About,
    Projects,
    Skills,
    Education,
    Certifications,
    Contact,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Education,
        Section::Certifications,
        Section::Contact,
    ];

    /// Position of this section on the page.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Section heading.
    pub fn title(self) -> &'static str {
        match self {
            Section::Hero => "Hi, I'm",
            Section::About => "About Me",
            Section::Projects => "Featured Projects",
            Section::Skills => "Technical Skills",
            Section::Education => "Education",
            Section::Certifications => "Professional Certifications",
            Section::Contact => "Let's Connect",
        }
    }

    /// Short navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Education => "education",
            Section::Certifications => "certifications",
            Section::Contact => "contact",
        }
    }

    /// Particle field preset for this section.
    pub fn field_config(self) -> FieldConfig {
        match self {
            Section::Hero => FieldConfig::HERO,
            Section::About => FieldConfig::ABOUT,
            Section::Projects => FieldConfig::PROJECTS,
            Section::Skills => FieldConfig::SKILLS,
            Section::Education => FieldConfig::EDUCATION,
            Section::Certifications => FieldConfig::CERTIFICATIONS,
            Section::Contact => FieldConfig::CONTACT,
        }
    }

    /// Only the hero carries the scrolling code layer.
    pub fn has_code_rain(self) -> bool {
        self == Section::Hero
    }

    /// Next section, saturating at the last one.
    pub fn next(self) -> Self {
        Self::ALL
            .get(self.index() + 1)
            .copied()
            .unwrap_or(Section::Contact)
    }

    /// Previous section, saturating at the first one.
    pub fn prev(self) -> Self {
        self.index()
            .checked_sub(1)
            .map(|i| Self::ALL[i])
            .unwrap_or(Section::Hero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn test_navigation_saturates() {
        assert_eq!(Section::Hero.prev(), Section::Hero);
        assert_eq!(Section::Hero.next(), Section::About);
        assert_eq!(Section::Contact.next(), Section::Contact);
        assert_eq!(Section::Contact.prev(), Section::Certifications);
    }

    #[test]
    fn test_only_hero_has_code_rain() {
        let with_rain: Vec<_> = Section::ALL
            .into_iter()
            .filter(|s| s.has_code_rain())
            .collect();
        assert_eq!(with_rain, vec![Section::Hero]);
    }
}
