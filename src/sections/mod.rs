//! Feedback sections
//!
//! Each section reports on one aspect of the password. Sections run in a
//! fixed order and their items are concatenated, so display order matches
//! generation order.

mod length;
mod organization;
mod pattern;
mod variety;

pub use length::length_section;
pub use organization::organization_section;
pub use pattern::pattern_warning_section;
pub use variety::character_variety_section;

use crate::checks::PasswordChecks;
use crate::mode::Mode;
use crate::types::FeedbackItem;

/// Everything a section may look at.
#[derive(Debug, Clone, Copy)]
pub struct SectionInput<'a> {
    pub checks: &'a PasswordChecks,
    pub mode: Mode,
    pub score: u8,
}

/// Items produced by a section, possibly none.
pub type SectionResult = Vec<FeedbackItem>;

pub type Section = fn(&SectionInput<'_>) -> SectionResult;

/// Sections in display order.
pub const SECTIONS: &[(&str, Section)] = &[
    ("length", length_section),
    ("variety", character_variety_section),
    ("pattern", pattern_warning_section),
    ("organization", organization_section),
];
