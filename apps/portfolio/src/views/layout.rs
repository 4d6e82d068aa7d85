use crate::contact::{Notification, NotificationVariant};
use crate::content::Icon;

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Small inline glyph standing in for the icon set.
pub fn icon(icon: Icon) -> &'static str {
    match icon {
        Icon::Code => "&lt;/&gt;",
        Icon::Layout => "&#9638;",
        Icon::Database => "&#9921;",
        Icon::Server => "&#9636;",
        Icon::Settings => "&#9881;",
        Icon::Mail => "&#9993;",
        Icon::Phone => "&#9742;",
        Icon::MapPin => "&#9906;",
        Icon::Github => "GH",
        Icon::Linkedin => "in",
    }
}

fn render_toasts(toasts: &[Notification]) -> String {
    if toasts.is_empty() {
        return String::new();
    }

    let items: String = toasts
        .iter()
        .map(|t| {
            let class = match t.variant {
                NotificationVariant::Default => "toast",
                NotificationVariant::Destructive => "toast toast-destructive",
            };
            format!(
                r#"<div class="{class}" role="status"><strong>{title}</strong><p>{description}</p></div>"#,
                title = escape(&t.title),
                description = escape(&t.description),
            )
        })
        .collect();

    format!(r#"<div class="toasts">{items}</div>"#)
}

/// Full page: Resume, Skills and Contact sections in that order, plus any
/// toasts raised while handling the request.
pub fn render_page(resume: &str, skills: &str, contact: &str, toasts: &[Notification]) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Portfolio</title>
    <style>
{css}
    </style>
</head>
<body>
    <nav>
        <a href="#resume">Resume</a>
        <a href="#skills">Skills</a>
        <a href="#contact">Contact</a>
    </nav>
    {toasts}
    <main>
{resume}
{skills}
{contact}
    </main>
</body>
</html>"##,
        css = CSS,
        toasts = render_toasts(toasts),
    )
}

const CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; background: #fff; }
nav { display: flex; gap: 1.5rem; padding: 1rem 2rem; border-bottom: 1px solid #e5e7eb; }
nav a { color: inherit; text-decoration: none; font-weight: 600; }
.section-container { max-width: 1100px; margin: 0 auto; padding: 3rem 1.5rem; }
.section-title { font-size: 2rem; margin: 0 0 1.5rem; }
.section-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 2rem; }
.section-intro { color: #6b7280; max-width: 48rem; margin: 0 auto 2.5rem; text-align: center; }
.timeline-item { border-left: 2px solid #c7d2fe; padding-left: 1.25rem; margin-bottom: 1.5rem; }
.muted { color: #6b7280; }
.accent { color: #4f46e5; font-weight: 500; }
.step { display: inline-flex; width: 2rem; height: 2rem; border-radius: 9999px; background: #e0e7ff;
        color: #4f46e5; align-items: center; justify-content: center; margin-right: .75rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.5rem; }
.card { border: 1px solid #e5e7eb; border-radius: .75rem; padding: 1.5rem; }
.skill-card { text-align: center; }
.chip { display: inline-block; background: #f3f4f6; border-radius: 9999px; padding: .25rem .75rem;
        margin: .25rem; font-size: .875rem; color: #6b7280; }
.cert { display: flex; justify-content: space-between; align-items: center; }
.button { display: inline-block; background: #4f46e5; color: #fff; border: 0; border-radius: 9999px;
          padding: .6rem 1.4rem; text-decoration: none; cursor: pointer; }
.button[disabled] { opacity: .6; cursor: default; }
.button-outline { background: transparent; color: #4f46e5; border: 1px solid #4f46e5; }
.contact-input { width: 100%; box-sizing: border-box; padding: .6rem; border: 1px solid #d1d5db; border-radius: .5rem; }
.form-error { color: #ef4444; font-size: .875rem; text-align: center; }
.thank-you { text-align: center; padding: 2rem; background: #eef2ff; border: 1px solid #4f46e5; border-radius: .75rem; }
.toasts { position: fixed; right: 1rem; bottom: 1rem; display: flex; flex-direction: column; gap: .5rem; }
.toast { background: #fff; border: 1px solid #e5e7eb; border-radius: .5rem; padding: .75rem 1rem; }
.toast-destructive { background: #ef4444; color: #fff; border-color: #ef4444; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_covers_markup_and_quotes() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_ampersand_first() {
        assert_eq!(escape("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_page_orders_sections_and_renders_toasts() {
        let toasts = vec![Notification {
            title: "Something went wrong".to_string(),
            description: "<oops>".to_string(),
            variant: NotificationVariant::Destructive,
        }];
        let html = render_page("<r/>", "<s/>", "<c/>", &toasts);

        let r = html.find("<r/>").unwrap();
        let s = html.find("<s/>").unwrap();
        let c = html.find("<c/>").unwrap();
        assert!(r < s && s < c);
        assert!(html.contains("toast toast-destructive"));
        assert!(html.contains("&lt;oops&gt;"));
    }

    #[test]
    fn test_page_without_toasts_has_no_toast_region() {
        let html = render_page("", "", "", &[]);
        assert!(!html.contains(r#"class="toasts""#));
    }
}
