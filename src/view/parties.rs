//! Party list, party details, guest list and delete control

use minidom::Element;

use crate::intent::{DELETE_PARTY, INTENT_ATTR, PARTY_ID_ATTR, SELECT_PARTY};
use crate::party::Party;
use crate::state::AppState;
use super::{text_elem, NS};

const DELETE_BUTTON_STYLE: &str = "margin-top: 1rem; background-color: #ff4444; color: white; border: none; padding: 0.5rem 1rem; border-radius: 4px; cursor: pointer";

/// A clickable entry of the party list. The selected party is marked with the `selected` class
pub fn party_list_item(party: &Party, state: &AppState) -> Element {
    let mut builder = Element::builder("li", NS)
        .attr(INTENT_ATTR, SELECT_PARTY)
        .attr(PARTY_ID_ATTR, party.id().to_string());
    if state.is_selected(party) {
        builder = builder.attr("class", "selected");
    }

    builder
        .append(Element::builder("a", NS)
            .attr("href", "#selected")
            .append(party.name().to_string())
            .build())
        .build()
}

/// Every party in the state, in order
pub fn party_list(state: &AppState) -> Element {
    Element::builder("ul", NS)
        .attr("class", "parties")
        .append_all(state.all_parties().iter().map(|party| party_list_item(party, state)))
        .build()
}

/// The guests attending the selected party
pub fn guest_list(state: &AppState) -> Element {
    Element::builder("ul", NS)
        .attr("class", "guests")
        .append_all(state.attending_guests().into_iter().map(|guest| text_elem("li", guest.name())))
        .build()
}

pub fn delete_button() -> Element {
    Element::builder("button", NS)
        .attr("style", DELETE_BUTTON_STYLE)
        .attr(INTENT_ATTR, DELETE_PARTY)
        .append("Delete This Party")
        .build()
}

/// The details of the selected party, or a placeholder when no party is selected
pub fn party_details(state: &AppState) -> Element {
    let party = match state.current_party() {
        None => return text_elem("p", "Please select a party to learn more."),
        Some(party) => party,
    };

    Element::builder("section", NS)
        .append(text_elem("h3", format!("{} #{}", party.name(), party.id())))
        .append(Element::builder("time", NS)
            .attr("datetime", party.date())
            .append(party.calendar_date().to_string())
            .build())
        .append(text_elem("address", party.location()))
        .append(text_elem("p", party.description()))
        .append(guest_list(state))
        .append(delete_button())
        .build()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::guest::{Guest, Rsvp};
    use crate::utils::{find_elem, find_elems, has_class};

    fn party(id: i64, name: &str) -> Party {
        Party::new(id, name.into(), "Bring food".into(), "2025-06-01T17:00:00.000Z".into(), "Park".into())
    }

    fn state() -> AppState {
        let mut state = AppState::new();
        state.set_parties(vec![party(1, "Picnic"), party(2, "Gala")]);
        state.set_guests(vec![Guest::new(10, "Ann".into()), Guest::new(11, "Bob".into())]);
        state.set_rsvps(vec![Rsvp::new(11, 2)]);
        state
    }

    #[test]
    fn list_marks_selection() {
        let mut state = state();
        state.set_current_party(party(2, "Gala"));

        let list = party_list(&state);
        assert!(has_class(&list, "parties"));
        let items = find_elems(&list, "li");
        assert_eq!(items.len(), 2);
        assert!(has_class(items[0], "selected") == false);
        assert!(has_class(items[1], "selected"));
        assert_eq!(items[1].attr(PARTY_ID_ATTR), Some("2"));
        assert_eq!(items[1].attr(INTENT_ATTR), Some(SELECT_PARTY));
        assert_eq!(find_elem(items[0], "a").map(|a| a.text()), Some("Picnic".to_string()));
    }

    #[test]
    fn placeholder_without_selection() {
        let details = party_details(&state());
        assert_eq!(details.name(), "p");
        assert_eq!(details.text(), "Please select a party to learn more.");
    }

    #[test]
    fn details_of_the_selection() {
        let mut state = state();
        state.set_current_party(party(2, "Gala"));

        let details = party_details(&state);
        assert_eq!(details.name(), "section");
        assert_eq!(find_elem(&details, "h3").map(|h| h.text()), Some("Gala #2".to_string()));
        let time = find_elem(&details, "time").unwrap();
        assert_eq!(time.text(), "2025-06-01");
        assert_eq!(time.attr("datetime"), Some("2025-06-01T17:00:00.000Z"));
        assert_eq!(find_elem(&details, "address").map(|a| a.text()), Some("Park".to_string()));

        let guests = find_elem(&details, "ul").unwrap();
        let names: Vec<String> = guests.children().map(|li| li.text()).collect();
        assert_eq!(names, vec!["Bob".to_string()]);

        assert_eq!(find_elem(&details, "button").and_then(|b| b.attr(INTENT_ATTR)), Some(DELETE_PARTY));
    }

    #[test]
    fn empty_guest_list() {
        let mut state = state();
        state.set_current_party(party(1, "Picnic"));
        let guests = guest_list(&state);
        assert_eq!(guests.name(), "ul");
        assert_eq!(guests.children().count(), 0);
    }
}
