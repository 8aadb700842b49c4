//! Some utility functions

use std::error::Error;
use std::io::Write;

use minidom::Element;

/// Walks an element tree and returns every element that has the given name
pub fn find_elems<S: AsRef<str>>(root: &Element, searched_name: S) -> Vec<&Element> {
    let searched_name = searched_name.as_ref();
    let mut elems: Vec<&Element> = Vec::new();

    for el in root.children() {
        if el.name() == searched_name {
            elems.push(el);
        }
        elems.extend(find_elems(el, searched_name));
    }
    elems
}

/// Walks an element tree until it finds an element with the given name
pub fn find_elem<S: AsRef<str>>(root: &Element, searched_name: S) -> Option<&Element> {
    let searched_name = searched_name.as_ref();
    if root.name() == searched_name {
        return Some(root);
    }

    for el in root.children() {
        let ret = find_elem(el, searched_name);
        if ret.is_some() {
            return ret;
        }
    }
    None
}

/// Walks an element tree until it finds the element with the given `id` attribute
pub fn find_elem_by_id<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.attr("id") == Some(id) {
        return Some(root);
    }
    root.children().find_map(|el| find_elem_by_id(el, id))
}

/// Same as [`find_elem_by_id`], but returns a mutable reference
pub fn find_elem_by_id_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.attr("id") == Some(id) {
        return Some(root);
    }
    root.children_mut().find_map(|el| find_elem_by_id_mut(el, id))
}

/// Returns every element that carries the given `data-intent` attribute
pub fn find_intent_elems<'a>(root: &'a Element, intent: &str) -> Vec<&'a Element> {
    let mut elems = Vec::new();
    if root.attr("data-intent") == Some(intent) {
        elems.push(root);
    }
    for el in root.children() {
        elems.extend(find_intent_elems(el, intent));
    }
    elems
}

/// Whether an element has a given class in its `class` attribute
pub fn has_class(element: &Element, class: &str) -> bool {
    element.attr("class")
        .map(|classes| classes.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// Serializes an element tree to markup
pub fn to_markup(element: &Element) -> Result<String, Box<dyn Error>> {
    let mut buffer = Vec::new();
    element.write_to(&mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Pretty-prints an element tree as an indented text outline
pub fn print_outline<W: Write>(element: &Element, writer: &mut W) -> std::io::Result<()> {
    write_outline(element, writer, 0)
}

fn write_outline<W: Write>(element: &Element, writer: &mut W, depth: usize) -> std::io::Result<()> {
    let indent = "  ".repeat(depth);
    let text = element.text();
    let text = text.trim();

    let marker = match element.name() {
        "li" if has_class(element, "selected") => "*",
        "li" => "-",
        _ => "",
    };

    let mut line = format!("{}{}", indent, marker);
    if let Some(intent) = element.attr("data-intent") {
        let id = element.attr("data-party-id").map(|id| format!(" {}", id)).unwrap_or_default();
        line.push_str(&format!("[{}{}] ", intent, id));
    }
    if element.name() == "input" || element.name() == "textarea" {
        let name = element.attr("name").unwrap_or("?");
        let value = match element.name() {
            "input" => element.attr("value").unwrap_or("").to_string(),
            _ => text.to_string(),
        };
        line.push_str(&format!("{}: {}", name, value));
    } else {
        line.push_str(text);
    }

    let child_depth = if line.trim().is_empty() {
        depth
    } else {
        writeln!(writer, "{}", line)?;
        depth + 1
    };

    if element.name() == "textarea" {
        return Ok(());
    }
    for child in element.children() {
        write_outline(child, writer, child_depth)?;
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "http://www.w3.org/1999/xhtml";

    fn tree() -> Element {
        Element::builder("div", NS)
            .attr("id", "root")
            .append(Element::builder("ul", NS)
                .append(Element::builder("li", NS).attr("class", "selected big").append("one").build())
                .append(Element::builder("li", NS).attr("data-intent", "select-party").attr("data-party-id", "2").append("two").build())
                .build())
            .append(Element::builder("div", NS).attr("id", "slot").build())
            .build()
    }

    #[test]
    fn find() {
        let root = tree();
        assert_eq!(find_elems(&root, "li").len(), 2);
        assert_eq!(find_elem(&root, "ul").map(|ul| ul.children().count()), Some(2));
        assert!(find_elem(&root, "table").is_none());
        assert!(find_elem_by_id(&root, "slot").is_some());
        assert!(find_elem_by_id(&root, "nope").is_none());
        assert_eq!(find_intent_elems(&root, "select-party")[0].text(), "two");
    }

    #[test]
    fn mutate_by_id() {
        let mut root = tree();
        let slot = find_elem_by_id_mut(&mut root, "slot").unwrap();
        slot.append_child(Element::builder("p", NS).append("hello").build());

        let slot = find_elem_by_id(&root, "slot").unwrap();
        assert_eq!(slot.children().next().map(|p| p.text()), Some("hello".to_string()));
    }

    #[test]
    fn classes() {
        let root = tree();
        let first = find_elems(&root, "li")[0];
        assert!(has_class(first, "selected"));
        assert!(has_class(first, "big"));
        assert!(has_class(first, "sel") == false);
    }

    #[test]
    fn outline() {
        let mut out = Vec::new();
        print_outline(&tree(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("*one"));
        assert!(out.contains("-[select-party 2] two"));
    }

    #[test]
    fn markup() {
        let markup = to_markup(&tree()).unwrap();
        assert!(markup.contains("class=\"selected big\""));
        assert!(markup.contains(">one</li>"));
    }
}
