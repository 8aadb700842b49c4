//! Builds the element tree of the whole page from the application state
//!
//! There is no diffing: every call to [`render`] builds a brand new tree.

pub mod parties;
pub mod form;

use minidom::Element;

use crate::state::AppState;

/// The namespace every element is created in
pub const NS: &str = "http://www.w3.org/1999/xhtml";

/// Id of the region that holds the party list
pub const PARTY_LIST_CONTAINER: &str = "party-list-container";
/// Id of the region that holds the creation form
pub const FORM_CONTAINER: &str = "create-party-form-container";
/// Id of the region that holds the details of the selected party
pub const DETAILS_CONTAINER: &str = "party-details-container";

/// Shortcut to build an element with a single text child
pub(crate) fn text_elem<S: Into<String>>(name: &str, text: S) -> Element {
    let text: String = text.into();
    Element::builder(name, NS)
        .append(text)
        .build()
}

fn container(id: &str) -> Element {
    Element::builder("div", NS)
        .attr("id", id)
        .build()
}

/// The static part of the page, with empty regions
fn skeleton() -> Element {
    let parties_section = Element::builder("section", NS)
        .append(text_elem("h2", "Upcoming Parties"))
        .append(container(PARTY_LIST_CONTAINER))
        .append(container(FORM_CONTAINER))
        .build();

    let details_section = Element::builder("section", NS)
        .attr("id", "selected")
        .append(text_elem("h2", "Party Details"))
        .append(container(DETAILS_CONTAINER))
        .build();

    Element::builder("div", NS)
        .attr("id", "app")
        .append(text_elem("h1", crate::config::app_title()))
        .append(Element::builder("main", NS)
            .append(parties_section)
            .append(details_section)
            .build())
        .build()
}

fn attach(root: &mut Element, region: &str, fragment: Element) {
    match crate::utils::find_elem_by_id_mut(root, region) {
        Some(container) => { container.append_child(fragment); },
        None => log::warn!("No region #{} in the page skeleton", region),
    }
}

/// Build the whole page
pub fn render(state: &AppState) -> Element {
    let mut root = skeleton();
    attach(&mut root, PARTY_LIST_CONTAINER, parties::party_list(state));
    attach(&mut root, FORM_CONTAINER, form::party_form(state.form()));
    attach(&mut root, DETAILS_CONTAINER, parties::party_details(state));
    root
}
