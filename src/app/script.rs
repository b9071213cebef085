//! Line-oriented interaction scripts.
//!
//! Each non-empty line is one interaction or a clock advance. `#` starts a
//! comment.
//!
//! ```text
//! click variant <section> <index>
//! key variant <section> <index> <enter|space|escape|tab|CHAR>
//! click card-variant <container> <index>
//! key card-variant <container> <index> <key>
//! click theme
//! click registry <ghcr|dockerhub>
//! click filter <all|up-to-date|update-available|not-published>
//! click copy <container>
//! type search <text...>
//! advance <ms>
//! ```

use super::dispatch::{Input, Key, Target};
use crate::domain::error::{DashboardError, Result};
use crate::domain::{Registry, StatusFilter};

/// One script step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Interact(Target, Input),
    Advance(u64),
}

/// Parses a whole script.
///
/// # Errors
///
/// Returns [`DashboardError::Script`] for the first malformed line.
///
/// # Example
///
/// ```
/// use imagedeck::app::script::{parse_script, Step};
/// use imagedeck::app::{Input, Target};
///
/// let steps = parse_script("click theme\n# wait for animations\nadvance 250\n")?;
/// assert_eq!(steps, vec![
///     Step::Interact(Target::ThemeToggle, Input::Click),
///     Step::Advance(250),
/// ]);
/// # Ok::<(), imagedeck::DashboardError>(())
/// ```
pub fn parse_script(source: &str) -> Result<Vec<Step>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = line.split('#').next().unwrap_or_default().trim();
            (!line.is_empty()).then(|| {
                parse_line(line).map_err(|message| DashboardError::Script {
                    line: i + 1,
                    message,
                })
            })
        })
        .collect()
}

fn parse_line(line: &str) -> std::result::Result<Step, String> {
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        ["advance", ms] => ms
            .parse()
            .map(Step::Advance)
            .map_err(|_| format!("invalid duration: {ms}")),
        ["type", "search", ..] => {
            let text = line
                .split_once("search")
                .map(|(_, rest)| rest.trim_start())
                .unwrap_or_default();
            Ok(Step::Interact(Target::SearchInput, Input::Text(text.to_string())))
        }
        ["click", rest @ ..] => Ok(Step::Interact(parse_target(rest)?, Input::Click)),
        ["key", rest @ .., key] => Ok(Step::Interact(
            parse_target(rest)?,
            Input::Key(parse_key(key)?),
        )),
        _ => Err(format!("unrecognized step: {line}")),
    }
}

fn parse_index(raw: &str) -> std::result::Result<usize, String> {
    raw.parse().map_err(|_| format!("invalid index: {raw}"))
}

fn parse_target(words: &[&str]) -> std::result::Result<Target, String> {
    match words {
        ["variant", section, index] => Ok(Target::VariantTag {
            section: parse_index(section)?,
            index: parse_index(index)?,
        }),
        ["card-variant", container, index] => Ok(Target::CardVariantTag {
            container: (*container).to_string(),
            index: parse_index(index)?,
        }),
        ["theme"] => Ok(Target::ThemeToggle),
        ["registry", registry] => registry.parse::<Registry>().map(Target::RegistryButton),
        ["filter", filter] => filter.parse::<StatusFilter>().map(Target::FilterButton),
        ["copy", container] => Ok(Target::CopyButton {
            container: (*container).to_string(),
        }),
        ["search"] => Ok(Target::SearchInput),
        other => Err(format!("unknown target: {}", other.join(" "))),
    }
}

fn parse_key(raw: &str) -> std::result::Result<Key, String> {
    match raw {
        "enter" => Ok(Key::Enter),
        "space" => Ok(Key::Space),
        "escape" => Ok(Key::Escape),
        "tab" => Ok(Key::Tab),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Key::Other(c)),
                _ => Err(format!("unknown key: {other}")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CardStatus;

    #[test]
    fn parses_every_target() {
        let steps = parse_script(
            "click variant 0 2\n\
             key card-variant nginx 1 enter\n\
             click registry dockerhub\n\
             click filter update-available\n\
             click copy nginx\n\
             type search   My Image  \n",
        )
        .unwrap();

        assert_eq!(
            steps,
            vec![
                Step::Interact(Target::VariantTag { section: 0, index: 2 }, Input::Click),
                Step::Interact(
                    Target::CardVariantTag { container: "nginx".into(), index: 1 },
                    Input::Key(Key::Enter)
                ),
                Step::Interact(Target::RegistryButton(Registry::DockerHub), Input::Click),
                Step::Interact(
                    Target::FilterButton(StatusFilter::Only(CardStatus::UpdateAvailable)),
                    Input::Click
                ),
                Step::Interact(Target::CopyButton { container: "nginx".into() }, Input::Click),
                Step::Interact(Target::SearchInput, Input::Text("My Image".into())),
            ]
        );
    }

    #[test]
    fn reports_line_numbers() {
        let err = parse_script("click theme\n\nclick nowhere\n").unwrap_err();
        match err {
            DashboardError::Script { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("nowhere"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(parse_script("advance soon").is_err());
        assert!(parse_script("click variant a 0").is_err());
        assert!(parse_script("key variant 0 0 ctrl").is_err());
    }
}
