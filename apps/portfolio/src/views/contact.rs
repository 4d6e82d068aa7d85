use crate::contact::{ContactFormController, ContactFormFields, FieldName, SubmissionState};
use crate::content::data::CONTACT_INTRO;
use crate::content::ContactDetails;
use crate::views::layout::{escape, icon};

fn input(field: FieldName, label: &str, placeholder: &str, input_type: &str, value: &str) -> String {
    format!(
        r#"<div><label for="{name}">{label}</label><input id="{name}" name="{name}" type="{input_type}" placeholder="{placeholder}" required value="{value}" class="contact-input"></div>"#,
        name = field.as_str(),
        value = escape(value),
    )
}

/// Disables the submit button and relabels it while the POST is in flight, so
/// a double click cannot send a second submission.
const DISABLE_ON_SUBMIT: &str = "var b=this.querySelector('button[type=submit]');b.disabled=true;b.textContent='Sending...';";

fn form(fields: &ContactFormFields, state: &SubmissionState, submitting: bool) -> String {
    let error = state
        .error_message()
        .map(|msg| format!(r#"<div class="form-error">{}</div>"#, escape(msg)))
        .unwrap_or_default();

    let button = if submitting {
        r#"<button type="submit" class="button" disabled>Sending...</button>"#
    } else {
        r#"<button type="submit" class="button">Send Message</button>"#
    };

    format!(
        r#"<div class="card"><form method="post" action="/contact#contact" onsubmit="{onsubmit}">
    {name}
    {email}
    {subject}
    <div><label for="message">Message</label><textarea id="message" name="message" rows="5" placeholder="Write your message here..." required class="contact-input">{message}</textarea></div>
    {error}
    {button}
</form></div>"#,
        name = input(FieldName::Name, "Your Name", "John Doe", "text", &fields.name),
        email = input(
            FieldName::Email,
            "Your Email",
            "johndoe@example.com",
            "email",
            &fields.email
        ),
        subject = input(
            FieldName::Subject,
            "Subject",
            "How can I help you?",
            "text",
            &fields.subject
        ),
        message = escape(&fields.message),
        onsubmit = DISABLE_ON_SUBMIT,
    )
}

fn thank_you() -> &'static str {
    r##"<div class="thank-you" role="alert">
    <h3>Thank You!</h3>
    <p>Your message has been sent successfully.</p>
    <p>I'll get back to you as soon as possible.</p>
    <a class="button button-outline" href="/#contact">Send Another Message</a>
</div>"##
}

fn details(contact: &ContactDetails) -> String {
    let info: String = contact
        .info
        .iter()
        .map(|entry| {
            format!(
                r#"<div><span class="step">{icon}</span><p class="muted">{label}</p><p>{value}</p></div>"#,
                icon = icon(entry.icon),
                label = escape(entry.label),
                value = escape(entry.value),
            )
        })
        .collect();

    let social: String = contact
        .social
        .iter()
        .map(|link| {
            // mailto links open the mail client in place
            let target = if link.href.starts_with("mailto:") {
                ""
            } else {
                r#" target="_blank" rel="noopener noreferrer""#
            };
            format!(
                r#"<a class="step" href="{href}"{target} aria-label="{label}">{icon}</a>"#,
                href = escape(link.href),
                label = escape(link.label),
                icon = icon(link.icon),
            )
        })
        .collect();

    format!(
        r#"<div class="card"><h3>Contact Information</h3>{info}<h4>Follow Me</h4><div>{social}</div></div>"#
    )
}

/// Contact section. Shows the "Thank You" panel instead of the form after a
/// successful submission, otherwise the form with its current values and any
/// error text.
pub fn render_contact(controller: &ContactFormController, contact: &ContactDetails) -> String {
    let panel = match controller.state() {
        SubmissionState::Succeeded => thank_you().to_string(),
        state => form(controller.fields(), state, controller.is_submitting()),
    };

    format!(
        r#"<section id="contact" class="section-container">
    <h2 class="section-title">Get In Touch</h2>
    <p class="section-intro">{intro}</p>
    <div class="grid">
        {panel}
        {details}
    </div>
</section>"#,
        intro = escape(CONTACT_INTRO),
        details = details(contact),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ToastQueue;
    use crate::content::CONTACT_DETAILS;
    use crate::relay_client::{FormRelay, RelayError, RelayResponse};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct FixedRelay(u16, &'static str);

    #[async_trait]
    impl FormRelay for FixedRelay {
        async fn send(&self, _: &ContactFormFields) -> Result<RelayResponse, RelayError> {
            Ok(RelayResponse {
                status: self.0,
                body: self.1.to_string(),
            })
        }
    }

    fn controller(status: u16, body: &'static str) -> ContactFormController {
        ContactFormController::new(
            Arc::new(FixedRelay(status, body)),
            Arc::new(ToastQueue::new()),
        )
    }

    #[test]
    fn test_idle_form_has_required_inputs_and_no_error() {
        let html = render_contact(&controller(200, ""), &CONTACT_DETAILS);
        assert_eq!(html.matches(" required").count(), 4);
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains("Send Message"));
        assert!(!html.contains(r#"<div class="form-error">"#));
        assert!(!html.contains("Thank You!"));
    }

    #[tokio::test]
    async fn test_submit_button_disables_itself_on_idle_and_failed_forms() {
        let mut c = controller(503, "");
        let idle = render_contact(&c, &CONTACT_DETAILS);

        c.update_field(FieldName::Name, "Jane Doe");
        c.submit().await;
        let failed = render_contact(&c, &CONTACT_DETAILS);
        assert!(failed.contains(r#"<div class="form-error">"#));

        for html in [idle, failed] {
            assert!(html.contains(&format!(r#"onsubmit="{DISABLE_ON_SUBMIT}""#)));
            assert!(html.contains("b.disabled=true"));
            assert!(html.contains("b.textContent='Sending...'"));
            assert!(html.contains(r#"<button type="submit" class="button">Send Message</button>"#));
        }
    }

    #[test]
    fn test_form_echoes_escaped_values() {
        let mut c = controller(200, "");
        c.update_field(FieldName::Name, r#"Jane "JD" Doe"#);
        c.update_field(FieldName::Message, "</textarea><b>hi</b>");

        let html = render_contact(&c, &CONTACT_DETAILS);
        assert!(html.contains(r#"value="Jane &quot;JD&quot; Doe""#));
        assert!(html.contains("&lt;/textarea&gt;&lt;b&gt;hi&lt;/b&gt;</textarea>"));
    }

    #[tokio::test]
    async fn test_failure_shows_error_text_and_keeps_values() {
        let mut c = controller(400, r#"{"error":"bad request"}"#);
        c.update_field(FieldName::Subject, "Hello");
        c.submit().await;

        let html = render_contact(&c, &CONTACT_DETAILS);
        assert!(html.contains(r#"<div class="form-error">bad request</div>"#));
        assert!(html.contains(r#"value="Hello""#));
    }

    #[tokio::test]
    async fn test_success_replaces_form_with_thank_you() {
        let mut c = controller(200, "");
        c.update_field(FieldName::Name, "Jane Doe");
        c.submit().await;

        let html = render_contact(&c, &CONTACT_DETAILS);
        assert_eq!(html.matches("Thank You!").count(), 1);
        assert!(!html.contains("<form"));
        assert!(!html.contains(r#"<div class="form-error">"#));

        c.reset_after_success();
        let html = render_contact(&c, &CONTACT_DETAILS);
        assert!(html.contains("<form"));
        assert!(html.contains(r#"name="name" type="text" placeholder="John Doe" required value="""#));
    }

    #[test]
    fn test_contact_details_render_links() {
        let html = render_contact(&controller(200, ""), &CONTACT_DETAILS);
        assert!(html.contains("+91-9356681781"));
        assert!(html.contains(r#"href="mailto:surajshedage45@gmail.com" aria-label="Email""#));
        assert!(html.contains(r#"href="https://github.com/" target="_blank""#));
    }
}
