//! Landing page sections and their shared chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render static copy from `content`. The header toggle and the
//! decorative layers read theme and motion signals from Leptos context.

pub mod contact;
pub mod faq;
pub mod features;
pub mod floating_decor;
pub mod hero;
pub mod process;
pub mod site_footer;
pub mod site_header;
pub mod solutions;
pub mod testimonials;
pub mod theme_toggle;
