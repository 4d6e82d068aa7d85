use crate::content::data::SKILLS_INTRO;
use crate::content::SkillCategory;
use crate::views::layout::{escape, icon};

/// Skills grid: one card per category, in the order given.
pub fn render_skills(categories: &[SkillCategory]) -> String {
    let cards: String = categories
        .iter()
        .map(|category| {
            let chips: String = category
                .skills
                .iter()
                .map(|skill| format!(r#"<span class="chip">{}</span>"#, escape(skill)))
                .collect();
            format!(
                r#"<div class="card skill-card"><div class="accent">{icon}</div><h3>{title}</h3><div>{chips}</div></div>"#,
                icon = icon(category.icon),
                title = escape(category.title),
            )
        })
        .collect();

    format!(
        r#"<section id="skills" class="section-container">
    <h2 class="section-title">My Skills</h2>
    <p class="section-intro">{intro}</p>
    <div class="grid">{cards}</div>
</section>"#,
        intro = escape(SKILLS_INTRO),
    )
}
