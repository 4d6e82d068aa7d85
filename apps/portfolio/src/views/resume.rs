use crate::content::models::{
    CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry, VolunteerEntry,
};
use crate::content::Resume;
use crate::views::layout::escape;

fn bullet_list(items: &[&str]) -> String {
    let lis: String = items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();
    format!(r#"<ul class="muted">{lis}</ul>"#)
}

fn heading(step: u8, title: &str) -> String {
    format!(r#"<h3><span class="step">{step}</span>{title}</h3>"#)
}

fn education(entries: &[EducationEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            format!(
                r#"<div class="timeline-item"><h4>{degree}</h4><p class="accent">{institution}</p><p class="muted">{period}</p><p class="muted">{description}</p></div>"#,
                degree = escape(e.degree),
                institution = escape(e.institution),
                period = escape(e.period),
                description = escape(e.description),
            )
        })
        .collect()
}

fn volunteer(entries: &[VolunteerEntry]) -> String {
    entries
        .iter()
        .map(|v| {
            format!(
                r#"<div class="timeline-item"><h4>{organization}</h4><p class="muted">{period}</p>{activities}</div>"#,
                organization = escape(v.organization),
                period = escape(v.period),
                activities = bullet_list(v.activities),
            )
        })
        .collect()
}

fn experience(entries: &[ExperienceEntry]) -> String {
    entries
        .iter()
        .map(|x| {
            format!(
                r#"<div class="timeline-item"><h4>{title}</h4><p class="accent">{company}</p><p class="muted">{period}</p>{achievements}</div>"#,
                title = escape(x.title),
                company = escape(x.company),
                period = escape(x.period),
                achievements = bullet_list(x.achievements),
            )
        })
        .collect()
}

fn projects(entries: &[ProjectEntry]) -> String {
    entries
        .iter()
        .map(|p| {
            format!(
                r#"<div class="timeline-item"><h4>{title}</h4><p class="muted">{period}</p>{description}</div>"#,
                title = escape(p.title),
                period = escape(p.period),
                description = bullet_list(p.description),
            )
        })
        .collect()
}

fn certifications(entries: &[CertificationEntry]) -> String {
    entries
        .iter()
        .map(|c| {
            format!(
                r#"<div class="card cert"><div><h4>{title}</h4><p class="muted">{date}</p></div><a class="button" href="{link}" target="_blank" rel="noopener noreferrer">View Certificate</a></div>"#,
                title = escape(c.title),
                date = escape(c.date),
                link = escape(c.link),
            )
        })
        .collect()
}

/// Resume section. Order is fixed: Education, Volunteer Work, Work Experience,
/// Projects, Certifications, numbered 1 to 5.
pub fn render_resume(resume: &Resume) -> String {
    format!(
        r##"<section id="resume" class="section-container">
    <div class="section-header">
        <h2 class="section-title">Resume</h2>
        <a class="button" href="{cv}" download>Download CV</a>
    </div>
    <div class="grid">
        <div>
            {education_heading}{education}
            {volunteer_heading}{volunteer}
        </div>
        <div>
            {experience_heading}{experience}
            {projects_heading}{projects}
        </div>
    </div>
    <div>
        {certifications_heading}{certifications}
    </div>
</section>"##,
        cv = escape(resume.cv_download_url),
        education_heading = heading(1, "Education"),
        education = education(resume.education),
        volunteer_heading = heading(2, "Volunteer Work"),
        volunteer = volunteer(resume.volunteer),
        experience_heading = heading(3, "Work Experience"),
        experience = experience(resume.experience),
        projects_heading = heading(4, "Projects"),
        projects = projects(resume.projects),
        certifications_heading = heading(5, "Certifications"),
        certifications = certifications(resume.certifications),
    )
}
