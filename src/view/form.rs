//! The "add a new party" form

use minidom::Element;

use crate::form::PartyForm;
use crate::intent::{CREATE_PARTY, INTENT_ATTR};
use super::{text_elem, NS};

pub const FORM_ID: &str = "create-party-form";

fn labelled(label: &str, field: Element) -> Element {
    Element::builder("label", NS)
        .append(format!("{}:", label))
        .append(Element::builder("br", NS).build())
        .append(field)
        .build()
}

fn input(name: &str, kind: &str, value: &str) -> Element {
    Element::builder("input", NS)
        .attr("name", name)
        .attr("type", kind)
        .attr("value", value)
        .attr("required", "required")
        .build()
}

fn textarea(name: &str, value: &str) -> Element {
    Element::builder("textarea", NS)
        .attr("name", name)
        .attr("rows", "3")
        .attr("required", "required")
        .append(value.to_string())
        .build()
}

/// The creation form, pre-filled with the current draft
pub fn party_form(draft: &PartyForm) -> Element {
    Element::builder("form", NS)
        .attr("id", FORM_ID)
        .append(text_elem("h2", "Add a New Party"))
        .append(labelled("Name", input("name", "text", &draft.name)))
        .append(labelled("Description", textarea("description", &draft.description)))
        .append(labelled("Date", input("date", "date", &draft.date)))
        .append(labelled("Location", input("location", "text", &draft.location)))
        .append(Element::builder("button", NS)
            .attr("type", "submit")
            .attr(INTENT_ATTR, CREATE_PARTY)
            .append("Add Party")
            .build())
        .build()
}

/// Reads back the values of a rendered form, as a browser would when it is submitted
pub fn read_form(form: &Element) -> PartyForm {
    let mut draft = PartyForm::default();
    for field in crate::utils::find_elems(form, "input").into_iter().chain(crate::utils::find_elems(form, "textarea")) {
        let value = match field.name() {
            "textarea" => field.text(),
            _ => field.attr("value").unwrap_or("").to_string(),
        };
        match field.attr("name") {
            Some("name") => draft.name = value,
            Some("description") => draft.description = value,
            Some("date") => draft.date = value,
            Some("location") => draft.location = value,
            _ => continue,
        }
    }
    draft
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{find_elems, find_intent_elems};

    #[test]
    fn empty_form() {
        let form = party_form(&PartyForm::default());
        assert_eq!(form.attr("id"), Some(FORM_ID));
        assert_eq!(find_elems(&form, "input").len(), 3);
        assert_eq!(find_elems(&form, "textarea").len(), 1);
        assert_eq!(find_intent_elems(&form, CREATE_PARTY).len(), 1);
        assert_eq!(read_form(&form), PartyForm::default());
    }

    #[test]
    fn draft_is_displayed() {
        let draft = PartyForm::new("Picnic", "Bring food\non a blanket", "2025-06-01", "Park");
        let form = party_form(&draft);
        assert_eq!(read_form(&form), draft);
    }
}
