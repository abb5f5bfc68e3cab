//! In-text directives
//!
//! A normal paragraph whose raw text starts with the directive marker is a
//! directive line, e.g. `#images setup results`. The first token names the
//! directive, the remaining whitespace-separated tokens are its arguments.
//! Directive lines produce no markup.

use super::images::ImageCollector;
use std::fmt;

/// A parsed directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Names for the next images, consumed in order.
    Images(Vec<String>),
}

/// A directive line whose name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirective {
    pub name: String,
}

impl fmt::Display for UnknownDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown directive '{}'", self.name)
    }
}

impl Directive {
    /// Build a directive from its name and argument tokens.
    pub fn from_tokens<'s>(
        name: &str,
        args: impl Iterator<Item = &'s str>,
    ) -> Result<Self, UnknownDirective> {
        match name {
            "images" => Ok(Directive::Images(args.map(str::to_string).collect())),
            _ => Err(UnknownDirective {
                name: name.to_string(),
            }),
        }
    }

    /// Apply the directive's side effect.
    pub fn apply(self, images: &mut ImageCollector) {
        match self {
            Directive::Images(names) => {
                log::debug!("queued image names: {:?}", names);
                images.enqueue_names(names);
            }
        }
    }
}

/// Parse a paragraph's raw text as a directive line.
///
/// Returns `None` when the text does not start with `marker`.
pub fn parse_directive(text: &str, marker: char) -> Option<Result<Directive, UnknownDirective>> {
    let rest = text.strip_prefix(marker)?;
    let mut tokens = rest.split_whitespace();
    let name = tokens.next().unwrap_or("");
    Some(Directive::from_tokens(name, tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_directive() {
        let directive = parse_directive("#images  setup\tresults ", '#').unwrap().unwrap();
        assert_eq!(
            directive,
            Directive::Images(vec!["setup".to_string(), "results".to_string()])
        );

        let mut images = ImageCollector::new();
        directive.apply(&mut images);
        assert_eq!(images.pending_names().collect::<Vec<_>>(), vec!["setup", "results"]);
    }

    #[test]
    fn test_not_a_directive() {
        assert!(parse_directive("images a b", '#').is_none());
        assert!(parse_directive("", '#').is_none());
    }

    #[test]
    fn test_unknown_directive() {
        let err = parse_directive("#1 priority", '#').unwrap().unwrap_err();
        assert_eq!(err.name, "1");
        let err = parse_directive("#", '#').unwrap().unwrap_err();
        assert_eq!(err.name, "");
    }

    #[test]
    fn test_custom_marker() {
        assert!(matches!(
            parse_directive("!images a", '!'),
            Some(Ok(Directive::Images(_)))
        ));
    }
}
