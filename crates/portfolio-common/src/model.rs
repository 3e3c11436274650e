use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Media {
    Image { src: &'static str },
    Video { src: &'static str },
}

impl Media {
    pub fn src(&self) -> &'static str {
        match self {
            Media::Image { src } | Media::Video { src } => src,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Media::Video { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: &'static str,
    pub media: Media,
    pub source_url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub organization: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub certificate: Option<&'static str>,
    pub preview: Option<&'static str>,
}

/// How an achievement's preview is presented on its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    /// Clickable image that opens the card's modal.
    Image(&'static str),
    /// Non-interactive document placeholder.
    Document(&'static str),
}

impl Achievement {
    pub fn preview(&self) -> Option<Preview> {
        let path = self.preview?;
        if path.to_ascii_lowercase().ends_with(".pdf") {
            Some(Preview::Document(path))
        } else {
            Some(Preview::Image(path))
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub specialization: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    /// Phrases cycled by the hero typewriter.
    pub roles: &'static [&'static str],
    pub summary: &'static str,
    pub education: Education,
    pub background: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub socials: &'static [SocialLink],
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn social(&self, label: &str) -> Option<&SocialLink> {
        self.socials.iter().find(|s| s.label == label)
    }
}
