//! Server-rendered HTML for the portfolio page.
//!
//! Plain `format!` templates; every piece of interpolated text goes through
//! `layout::escape` first.

pub mod contact;
pub mod layout;
pub mod resume;
pub mod skills;

pub use layout::render_page;
