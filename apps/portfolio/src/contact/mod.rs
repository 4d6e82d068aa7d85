//! Contact form: field state, submission lifecycle and toast feedback.

pub mod controller;
pub mod fields;
pub mod notify;
pub mod state;

pub use controller::ContactFormController;
pub use fields::{ContactFormFields, FieldName};
pub use notify::{Notification, NotificationSink, NotificationVariant, ToastQueue};
pub use state::SubmissionState;
