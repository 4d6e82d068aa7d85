//! Static portfolio content: resume, skills and contact details.
//!
//! Everything is compiled in as `const` data; there is no loading, caching or
//! mutation. Views and JSON handlers borrow straight from these tables.

pub mod data;
pub mod models;

pub use data::{CONTACT_DETAILS, RESUME, SKILL_CATEGORIES};
pub use models::{ContactDetails, Icon, Resume, SkillCategory};
