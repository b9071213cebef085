//! Interaction dispatch table.
//!
//! Maps a `(Target, Input)` pair to the [`Event`] it triggers. Anything not in
//! the table is ignored, so unknown keys on known targets fall through
//! harmlessly.
//!
//! | Target            | Click | Enter / Space | Text   |
//! |-------------------|-------|---------------|--------|
//! | `VariantTag`      | yes   | yes           |        |
//! | `CardVariantTag`  | yes   | yes           |        |
//! | `ThemeToggle`     | yes   |               |        |
//! | `RegistryButton`  | yes   |               |        |
//! | `FilterButton`    | yes   |               |        |
//! | `CopyButton`      | yes   |               |        |
//! | `SearchInput`     |       |               | yes    |

use super::handler::Event;
use crate::domain::{Registry, StatusFilter};

/// Interactive element an input landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    VariantTag { section: usize, index: usize },
    CardVariantTag { container: String, index: usize },
    ThemeToggle,
    RegistryButton(Registry),
    FilterButton(StatusFilter),
    CopyButton { container: String },
    SearchInput,
}

/// Keyboard keys the table distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Tab,
    Other(char),
}

impl Key {
    const fn activates(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Click,
    Key(Key),
    /// New content of a text field.
    Text(String),
}

/// Looks up the event for an interaction.
///
/// ```
/// use imagedeck::app::dispatch::{dispatch, Input, Key, Target};
/// use imagedeck::app::Event;
///
/// let tag = Target::VariantTag { section: 0, index: 2 };
/// assert_eq!(
///     dispatch(&tag, &Input::Key(Key::Space)),
///     Some(Event::SelectVariant { section: 0, index: 2 })
/// );
/// assert_eq!(dispatch(&tag, &Input::Key(Key::Escape)), None);
/// assert_eq!(dispatch(&Target::ThemeToggle, &Input::Key(Key::Enter)), None);
/// ```
#[must_use]
pub fn dispatch(target: &Target, input: &Input) -> Option<Event> {
    let event = match (target, input) {
        (Target::VariantTag { section, index }, Input::Click) => Event::SelectVariant {
            section: *section,
            index: *index,
        },
        (Target::VariantTag { section, index }, Input::Key(key)) if key.activates() => {
            Event::SelectVariant {
                section: *section,
                index: *index,
            }
        }
        (Target::CardVariantTag { container, index }, Input::Click) => Event::SelectCardVariant {
            container: container.clone(),
            index: *index,
        },
        (Target::CardVariantTag { container, index }, Input::Key(key)) if key.activates() => {
            Event::SelectCardVariant {
                container: container.clone(),
                index: *index,
            }
        }
        (Target::ThemeToggle, Input::Click) => Event::ToggleTheme,
        (Target::RegistryButton(registry), Input::Click) => Event::SetRegistry {
            registry: *registry,
            persist: true,
        },
        (Target::FilterButton(filter), Input::Click) => Event::FilterStatus(*filter),
        (Target::CopyButton { container }, Input::Click) => Event::CopyPullCommand {
            container: container.clone(),
        },
        (Target::SearchInput, Input::Text(query)) => Event::Search(query.clone()),
        _ => {
            tracing::trace!(?target, ?input, "interaction not dispatched");
            return None;
        }
    };
    Some(event)
}
