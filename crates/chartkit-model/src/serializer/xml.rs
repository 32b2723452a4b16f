//! XML driver for the element tree.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Error, Result};

use super::SerializerOptions;
use super::tree::Element;

/// Parses an XML document into its root element.
///
/// Comments, processing instructions and the document type are skipped.
/// Whitespace-only text between elements is ignored.
pub fn parse(input: &str) -> Result<Element> {
    let mut reader = Reader::from_str(input);
    let mut root: Option<Element> = None;
    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event().map_err(Error::xml)? {
            Event::Eof => break,
            Event::Start(start) => stack.push(start_element(&start)?),
            Event::Empty(empty) => {
                let element = start_element(&empty)?;
                attach(element, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    attach(element, &mut stack, &mut root)?;
                }
            }
            Event::Text(text) => {
                let content = text.unescape().map_err(Error::xml)?;
                if content.trim().is_empty() {
                    continue;
                }
                match stack.last_mut() {
                    Some(parent) => parent.push_text(&content),
                    None => return Err(Error::malformed("text outside the root element")),
                }
            }
            Event::CData(cdata) => {
                let content = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.push_text(&content);
                }
            }
            Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_) => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(Error::malformed(format!("unclosed element <{}>", open.name())));
    }
    root.ok_or_else(|| Error::malformed("document has no root element"))
}

/// Writes `root` as an XML document.
pub fn write(root: &Element, options: &SerializerOptions) -> Result<String> {
    let bytes = if options.pretty {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        write_document(root, options, &mut writer)?;
        writer.into_inner()
    } else {
        let mut writer = Writer::new(Vec::new());
        write_document(root, options, &mut writer)?;
        writer.into_inner()
    };
    String::from_utf8(bytes).map_err(Error::xml)
}

fn write_document(
    root: &Element,
    options: &SerializerOptions,
    writer: &mut Writer<Vec<u8>>,
) -> Result<()> {
    if options.declaration {
        let decl = BytesDecl::new("1.0", Some("UTF-8"), None);
        writer.write_event(Event::Decl(decl)).map_err(Error::xml)?;
    }
    write_element(root, writer)
}

fn write_element(element: &Element, writer: &mut Writer<Vec<u8>>) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for attribute in element.attributes() {
        start.push_attribute(attribute);
    }

    if element.children().is_empty() && !element.has_text() {
        return writer.write_event(Event::Empty(start)).map_err(Error::xml);
    }

    writer.write_event(Event::Start(start)).map_err(Error::xml)?;
    if element.has_text() {
        writer
            .write_event(Event::Text(BytesText::new(element.text())))
            .map_err(Error::xml)?;
    }
    for child in element.children() {
        write_element(child, writer)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name())))
        .map_err(Error::xml)
}

fn start_element(start: &BytesStart<'_>) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(Error::xml)?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value().map_err(Error::xml)?;
        element.set_attribute(key, value.into_owned());
    }
    Ok(element)
}

fn attach(element: Element, stack: &mut [Element], root: &mut Option<Element>) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.add_child(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(Error::malformed(format!(
            "second root element <{}>",
            element.name()
        )));
    }
    *root = Some(element);
    Ok(())
}
