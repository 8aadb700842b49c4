//! What the user asks for when interacting with the page
//!
//! Interactive elements carry a `data-intent` attribute (and a `data-party-id` when relevant).
//! The host turns a click or a submission into an [`Intent`], and hands it to [`App::dispatch`](crate::app::App::dispatch).

use std::error::Error;
use std::fmt::{Display, Formatter};

use minidom::Element;

use crate::form::PartyForm;
use crate::party::PartyId;

pub const INTENT_ATTR: &str = "data-intent";
pub const PARTY_ID_ATTR: &str = "data-party-id";

pub const SELECT_PARTY: &str = "select-party";
pub const DELETE_PARTY: &str = "delete-party";
pub const CREATE_PARTY: &str = "create-party";

#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    /// Show the details of a party
    SelectParty(PartyId),
    /// Delete the selected party (after a confirmation)
    DeleteParty,
    /// Submit the creation form
    CreateParty(PartyForm),
}

impl Intent {
    /// Decode the intent carried by an element.
    ///
    /// `form` is what the user has typed in the creation form, it is only used by the submit button.
    pub fn from_element(element: &Element, form: &PartyForm) -> Result<Self, Box<dyn Error>> {
        match element.attr(INTENT_ATTR) {
            Some(SELECT_PARTY) => {
                let id = match element.attr(PARTY_ID_ATTR) {
                    None => return Err(format!("<{}> has no {} attribute", element.name(), PARTY_ID_ATTR).into()),
                    Some(id) => id.parse::<PartyId>()?,
                };
                Ok(Intent::SelectParty(id))
            },
            Some(DELETE_PARTY) => Ok(Intent::DeleteParty),
            Some(CREATE_PARTY) => Ok(Intent::CreateParty(form.clone())),
            Some(other) => Err(format!("Unknown intent {:?}", other).into()),
            None => Err(format!("<{}> is not interactive", element.name()).into()),
        }
    }
}

impl Display for Intent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::SelectParty(id) => write!(f, "select party #{}", id),
            Intent::DeleteParty => write!(f, "delete the selected party"),
            Intent::CreateParty(form) => write!(f, "create party {:?}", form.name),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::NS;

    fn elem(attrs: &[(&str, &str)]) -> Element {
        let mut builder = Element::builder("li", NS);
        for (name, value) in attrs {
            builder = builder.attr(*name, *value);
        }
        builder.build()
    }

    #[test]
    fn decode() {
        let form = PartyForm::new("a", "b", "c", "d");

        let select = elem(&[(INTENT_ATTR, SELECT_PARTY), (PARTY_ID_ATTR, "12")]);
        assert_eq!(Intent::from_element(&select, &form).unwrap(), Intent::SelectParty(12));

        let delete = elem(&[(INTENT_ATTR, DELETE_PARTY)]);
        assert_eq!(Intent::from_element(&delete, &form).unwrap(), Intent::DeleteParty);

        let create = elem(&[(INTENT_ATTR, CREATE_PARTY)]);
        assert_eq!(Intent::from_element(&create, &form).unwrap(), Intent::CreateParty(form.clone()));
    }

    #[test]
    fn invalid_elements() {
        let form = PartyForm::default();
        assert!(Intent::from_element(&elem(&[]), &form).is_err());
        assert!(Intent::from_element(&elem(&[(INTENT_ATTR, "dance")]), &form).is_err());
        assert!(Intent::from_element(&elem(&[(INTENT_ATTR, SELECT_PARTY)]), &form).is_err());
        assert!(Intent::from_element(&elem(&[(INTENT_ATTR, SELECT_PARTY), (PARTY_ID_ATTR, "abc")]), &form).is_err());
    }
}
