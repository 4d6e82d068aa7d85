use serde::Serialize;

// Every record here is built from `'static` literals in `data.rs` and is never
// mutated, so borrowed string slices are enough.

#[derive(Debug, Clone, Copy, Serialize)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub period: &'static str,
    pub description: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VolunteerEntry {
    pub organization: &'static str,
    pub period: &'static str,
    pub activities: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CertificationEntry {
    pub title: &'static str,
    pub date: &'static str,
    pub link: &'static str,
}

/// Icon shown above a skill card or next to a contact detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Code,
    Layout,
    Database,
    Server,
    Settings,
    Mail,
    Phone,
    MapPin,
    Github,
    Linkedin,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactInfoEntry {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

/// The whole resume in presentation order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Resume {
    pub cv_download_url: &'static str,
    pub education: &'static [EducationEntry],
    pub volunteer: &'static [VolunteerEntry],
    pub experience: &'static [ExperienceEntry],
    pub projects: &'static [ProjectEntry],
    pub certifications: &'static [CertificationEntry],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactDetails {
    pub info: &'static [ContactInfoEntry],
    pub social: &'static [SocialLink],
}
