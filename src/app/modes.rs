//! State machine types for variant selection and the lineage swap.
//!
//! # Variant sections
//!
//! Each variant section is either [`SectionSelection::NoVariantSelected`] or
//! [`SectionSelection::VariantSelected`]. The initial state is whatever the page
//! marked as selected; transitions happen only through explicit selection and
//! last until the page is torn down.
//!
//! # Lineage swap
//!
//! Replacing the build-argument list is a two-phase transition:
//!
//! ```text
//! Idle ──select──▶ Exiting { outgoing, incoming, timer } ──timer──▶ Idle (incoming shown)
//!                       │  ▲
//!                       └──┘ select again: cancel timer, replace incoming, new timer
//! ```

use super::timers::TimerId;
use crate::domain::BuildArg;
use serde::{Deserialize, Serialize};

/// Selection state of one variant section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionSelection {
    #[default]
    NoVariantSelected,
    VariantSelected(usize),
}

impl SectionSelection {
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::NoVariantSelected => None,
            Self::VariantSelected(i) => Some(i),
        }
    }
}

/// The variant currently mirrored into the page's display slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveVariant {
    pub section: usize,
    pub index: usize,
}

/// Phase of the build-argument list swap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineageSwap {
    #[default]
    Idle,
    /// Old items play their exit animation until `timer` fires.
    Exiting {
        outgoing: Vec<BuildArg>,
        incoming: Vec<BuildArg>,
        timer: TimerId,
    },
}
