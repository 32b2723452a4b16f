//! Mapped JSON driver for the element tree.
//!
//! An element becomes a member named after the element. Attributes are
//! written as `@name` members and text as `$`; an element with neither
//! attributes nor children collapses to its text. Repeated children with the
//! same name are grouped into an array.
//!
//! ```text
//! <chartModel style="color: red"><title location="top">Sales</title></chartModel>
//! {"chartModel":{"@style":"color: red","title":{"$":"Sales","@location":"top"}}}
//! ```

use serde_json::{Map, Value};

use crate::error::{Error, Result};

use super::SerializerOptions;
use super::tree::Element;

const TEXT_KEY: &str = "$";
const ATTRIBUTE_PREFIX: char = '@';

/// Parses a mapped JSON document into its root element.
pub fn parse(input: &str) -> Result<Element> {
    let value: Value = serde_json::from_str(input)?;
    let Value::Object(members) = value else {
        return Err(Error::malformed("JSON document must be an object"));
    };
    let mut members = members.into_iter();
    match (members.next(), members.next()) {
        (Some((name, value)), None) => element_from_value(name, value),
        _ => Err(Error::malformed(
            "JSON document must have exactly one root member",
        )),
    }
}

/// Writes `root` as a mapped JSON document.
pub fn write(root: &Element, options: &SerializerOptions) -> Result<String> {
    let mut document = Map::new();
    document.insert(root.name().to_string(), element_to_value(root));
    let document = Value::Object(document);

    let text = if options.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(text)
}

fn element_to_value(element: &Element) -> Value {
    if !element.has_attributes() && element.children().is_empty() {
        return Value::String(element.text().to_string());
    }

    let mut members = Map::new();
    for (name, value) in element.attributes() {
        members.insert(format!("{ATTRIBUTE_PREFIX}{name}"), Value::String(value.to_string()));
    }
    if element.has_text() {
        members.insert(TEXT_KEY.to_string(), Value::String(element.text().to_string()));
    }

    for child in element.children() {
        let value = element_to_value(child);
        match members.get_mut(child.name()) {
            Some(Value::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = Value::Array(vec![first, value]);
            }
            None => {
                members.insert(child.name().to_string(), value);
            }
        }
    }
    Value::Object(members)
}

fn element_from_value(name: String, value: Value) -> Result<Element> {
    let mut element = Element::new(name);
    match value {
        Value::Null => {}
        Value::Object(members) => {
            for (key, value) in members {
                if key == TEXT_KEY {
                    let text = scalar_text(element.name(), &key, value)?;
                    element.set_text(text);
                } else if let Some(attribute) = key.strip_prefix(ATTRIBUTE_PREFIX) {
                    let text = scalar_text(element.name(), &key, value)?;
                    element.set_attribute(attribute, text);
                } else if let Value::Array(items) = value {
                    for item in items {
                        element.add_child(element_from_value(key.clone(), item)?);
                    }
                } else {
                    element.add_child(element_from_value(key, value)?);
                }
            }
        }
        Value::Array(_) => {
            return Err(Error::malformed(format!(
                "nested array in member '{}'",
                element.name()
            )));
        }
        scalar => {
            let text = scalar_text(element.name(), "", scalar)?;
            element.set_text(text);
        }
    }
    Ok(element)
}

fn scalar_text(element: &str, member: &str, value: Value) -> Result<String> {
    match value {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok(String::new()),
        Value::Array(_) | Value::Object(_) => Err(Error::malformed(format!(
            "member '{}' of '{}' must be a scalar",
            member, element
        ))),
    }
}
