//! Registry configuration for the resume tag vocabulary.

use super::handlers::{
    AuthorHandler, BadgeHandler, CardHandler, ContactCardHandler, ContactHandler,
    ContainerHandler, CurrentHandler, HeadingHandler, ImageHandler, LinkHandler, ProgressHandler,
    SubHeadingHandler, TextHandler,
};
use super::registry::HandlerRegistry;
use super::types::{ContactStyle, RenderOptions};

/// Default column count for unrecognized and generic container tags.
const DEFAULT_COLUMNS: usize = 1;

/// Default column counts for the group tags.
const JOBS_COLUMNS: usize = 2;
const MERITS_COLUMNS: usize = 3;
const SKILLS_COLUMNS: usize = 4;

/// Create a registry covering the resume tag vocabulary.
///
/// The contact tags registered depend on `options.contact_style`; the
/// rest of the vocabulary is identical in both variants.
#[must_use]
pub fn create_resume_registry(options: &RenderOptions) -> HandlerRegistry {
    let mut registry = HandlerRegistry::new(ContainerHandler::new(DEFAULT_COLUMNS));

    // Leaf handlers. text/time/date share one handler: all three are
    // trimmed text rendered as a paragraph.
    registry.register("text", TextHandler);
    registry.register("time", TextHandler);
    registry.register("date", TextHandler);
    registry.register("head", HeadingHandler);
    registry.register("subhead", SubHeadingHandler);
    registry.register("tag", BadgeHandler);
    registry.register("current", CurrentHandler);
    registry.register("link", LinkHandler);
    registry.register("progress", ProgressHandler);
    registry.register("image", ImageHandler);

    // Contact handlers, per format variant.
    match options.contact_style {
        ContactStyle::PerKind => {
            registry.register("number", ContactHandler::new("Number", Some("tel:")));
            registry.register("email", ContactHandler::new("Email", Some("mailto:")));
            registry.register("address", ContactHandler::new("Address", None));
        }
        ContactStyle::Unified => {
            registry.register("contact", ContactCardHandler);
        }
    }

    // Composite cards.
    registry.register("job", CardHandler);
    registry.register("merit", CardHandler);
    registry.register("skill", CardHandler);
    registry.register("card", CardHandler);
    registry.register("author", AuthorHandler);

    // Group containers with their default grid widths.
    registry.register("jobs", ContainerHandler::new(JOBS_COLUMNS));
    registry.register("merits", ContainerHandler::new(MERITS_COLUMNS));
    registry.register("skills", ContainerHandler::new(SKILLS_COLUMNS));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::types::HandlerKind;

    #[test]
    fn test_registry_covers_vocabulary() {
        let registry = create_resume_registry(&RenderOptions::new());

        for tag in [
            "text", "time", "date", "head", "subhead", "tag", "current", "link", "progress",
            "image", "job", "merit", "skill", "card", "author", "jobs", "merits", "skills",
        ] {
            assert!(registry.has_handler(tag), "missing handler for <{tag}>");
        }
    }

    #[test]
    fn test_per_kind_contact_tags() {
        let registry = create_resume_registry(&RenderOptions::new());

        assert!(registry.has_handler("number"));
        assert!(registry.has_handler("email"));
        assert!(registry.has_handler("address"));
        assert!(!registry.has_handler("contact"));
    }

    #[test]
    fn test_unified_contact_tag() {
        let options = RenderOptions {
            contact_style: ContactStyle::Unified,
            ..RenderOptions::new()
        };
        let registry = create_resume_registry(&options);

        assert!(registry.has_handler("contact"));
        assert!(!registry.has_handler("email"));
    }

    #[test]
    fn test_handler_kinds() {
        let registry = create_resume_registry(&RenderOptions::new());

        let kind = |tag: &str| registry.handler_for(tag).map(|handler| handler.kind());
        assert_eq!(kind("text"), Some(HandlerKind::Leaf));
        assert_eq!(kind("email"), Some(HandlerKind::Contact));
        assert_eq!(kind("job"), Some(HandlerKind::Card));
        assert_eq!(kind("jobs"), Some(HandlerKind::Container));
        assert_eq!(registry.fallback().kind(), HandlerKind::Container);
    }
}
