//! Catalog projection: status text and attributes on every card.

use vmc_core::status_of;
use vmc_model::{State, Status};

use crate::dom::{CARD_CLASS, Document, NodeId, STATUS_ATTR, STATUS_CLASS};

/// Project `state` onto every catalog card in `document`.
///
/// Cards without a slug or without a status display are skipped. Returns
/// the number of cards updated. Rendering the same state twice produces
/// the same document.
pub fn render_catalog(document: &mut Document, state: &State) -> usize {
    let mut rendered = 0;
    for card in document.select_class(CARD_CLASS) {
        let Some(slug) = document.get(&card).and_then(|e| e.slug()).map(str::to_owned) else {
            continue;
        };
        let Some(display) = document.find_within(&card, |e| e.has_class(STATUS_CLASS)) else {
            continue;
        };
        write_status(document, &display, status_of(state, &slug));
        rendered += 1;
    }
    tracing::trace!(rendered, "Rendered catalog statuses");
    rendered
}

/// Write the label and machine-readable status onto a status display.
pub(crate) fn write_status(document: &mut Document, display: &NodeId, status: Status) {
    if let Some(element) = document.get_mut(display) {
        element.set_text(status.label());
        element.set_attr(STATUS_ATTR, status.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, SLUG_ATTR};
    use chrono::NaiveDate;
    use vmc_model::Entry;

    fn card(slug: Option<&str>, with_status: bool) -> Element {
        let mut card = Element::new("article").with_class(CARD_CLASS);
        if let Some(slug) = slug {
            card = card.with_attr(SLUG_ATTR, slug);
        }
        if with_status {
            card = card.with_child(Element::new("p").with_class(STATUS_CLASS));
        }
        card
    }

    #[test]
    fn skips_cards_without_slug_or_display() {
        let mut doc = Document::new(
            Element::new("main")
                .with_child(card(Some("apple-iie"), true))
                .with_child(card(None, true))
                .with_child(card(Some(""), true))
                .with_child(card(Some("kim-1"), false)),
        );
        let mut state = State::new();
        let date = NaiveDate::from_ymd_opt(2024, 4, 4).unwrap();
        state.insert("apple-iie", Entry::new(Status::Repairing, date).unwrap());

        assert_eq!(render_catalog(&mut doc, &state), 1);
        let display = doc.get(&NodeId::root().child(0).child(0)).unwrap();
        assert_eq!(display.text(), "Repairing");
        assert_eq!(display.attr(STATUS_ATTR), Some("repairing"));
        let untouched = doc.get(&NodeId::root().child(1).child(0)).unwrap();
        assert_eq!(untouched.text(), "");
    }

    #[test]
    fn render_is_idempotent() {
        let mut doc = Document::new(Element::new("main").with_child(card(Some("pet-2001"), true)));
        let state = State::new();
        render_catalog(&mut doc, &state);
        let once = doc.clone();
        render_catalog(&mut doc, &state);
        assert_eq!(doc, once);
    }
}
