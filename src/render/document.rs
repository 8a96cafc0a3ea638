// SPDX-License-Identifier: MPL-2.0
//! SVG document loading.
//!
//! Input is treated as untrusted: the document type declaration (and any
//! internal entity subset it carries) is dropped by a streaming XML pass
//! before the markup reaches usvg. References to entities declared there
//! then fail to parse instead of being expanded.
//!
//! The same pass records the root `viewBox`. When it is usable, the root
//! `width`/`height` are removed so usvg sizes the tree to the view box
//! itself; a degenerate view box is kept as is and reported to the caller.

use crate::error::{Error, Result};
use crate::render::fit::ViewBox;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use resvg::usvg;
use std::io::Read;
use tiny_skia::{PixmapMut, Transform};

/// A parsed SVG document ready to be drawn.
pub struct SvgDocument {
    tree: usvg::Tree,
    view_box: Option<ViewBox>,
}

impl SvgDocument {
    /// Reads the whole stream and parses it.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_data(&data)
    }

    /// Parses UTF-8 SVG markup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Svg`] if the data is not UTF-8, is not well formed
    /// XML, or is rejected by usvg.
    pub fn from_data(data: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(data).map_err(|e| Error::Svg(e.to_string()))?;
        let markup = sanitize(text)?;
        let tree = usvg::Tree::from_str(&markup.text, &usvg::Options::default())?;
        Ok(Self {
            tree,
            view_box: markup.view_box,
        })
    }

    pub fn tree(&self) -> &usvg::Tree {
        &self.tree
    }

    /// Bounds of the document in user units.
    ///
    /// This is the root `viewBox` when one is declared, even a degenerate
    /// one, and `(0, 0, width, height)` otherwise.
    pub fn view_box(&self) -> ViewBox {
        self.view_box.unwrap_or_else(|| {
            let size = self.tree.size();
            ViewBox::new(0.0, 0.0, size.width(), size.height())
        })
    }

    /// Renders the document; `transform` maps view box coordinates to the
    /// target pixmap.
    pub fn render(&self, transform: Transform, pixmap: &mut PixmapMut<'_>) {
        // usvg already shifted the tree by the view box origin.
        let transform = match self.view_box {
            Some(view_box) if !view_box.is_degenerate() => {
                transform.pre_translate(view_box.x, view_box.y)
            }
            _ => transform,
        };
        resvg::render(&self.tree, transform, pixmap);
    }
}

/// Markup ready for usvg, with the root view box it declared.
#[derive(Debug, Clone, PartialEq)]
pub struct Markup {
    pub text: String,
    pub view_box: Option<ViewBox>,
}

/// Re-serializes `text` without its `<!DOCTYPE ...>` declaration and
/// extracts the root `viewBox`.
pub fn sanitize(text: &str) -> Result<Markup> {
    let mut reader = Reader::from_str(text);
    let mut writer = Writer::new(Vec::with_capacity(text.len()));
    let mut view_box = None;
    let mut root_seen = false;

    loop {
        match reader.read_event()? {
            Event::DocType(_) => log::debug!("Ignoring document type declaration"),
            Event::Eof => break,
            Event::Start(element) if !root_seen => {
                root_seen = true;
                let (element, found) = rewrite_root(element)?;
                view_box = found;
                writer.write_event(Event::Start(element))?;
            }
            Event::Empty(element) if !root_seen => {
                root_seen = true;
                let (element, found) = rewrite_root(element)?;
                view_box = found;
                writer.write_event(Event::Empty(element))?;
            }
            event => writer.write_event(event)?,
        }
    }

    let text = String::from_utf8(writer.into_inner()).map_err(|e| Error::Svg(e.to_string()))?;
    Ok(Markup { text, view_box })
}

/// Re-serializes `text` without its `<!DOCTYPE ...>` declaration.
pub fn strip_doctype(text: &str) -> Result<String> {
    sanitize(text).map(|markup| markup.text)
}

fn rewrite_root(element: BytesStart<'_>) -> Result<(BytesStart<'_>, Option<ViewBox>)> {
    if element.local_name().as_ref() != b"svg" {
        return Ok((element, None));
    }

    let (view_box, has_size) = {
        let attributes = element
            .attributes()
            .collect::<std::result::Result<Vec<Attribute<'_>>, _>>()
            .map_err(quick_xml::Error::from)?;
        let view_box = attributes
            .iter()
            .find(|attr| attr.key.as_ref() == b"viewBox")
            .and_then(|attr| parse_view_box(&String::from_utf8_lossy(&attr.value)));
        (view_box, attributes.iter().any(is_size))
    };

    // A degenerate view box is ignored by usvg, which then needs the size.
    if !has_size || !view_box.is_some_and(|vb| !vb.is_degenerate()) {
        return Ok((element, view_box));
    }

    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    let mut root = BytesStart::new(name);
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if !is_size(&attr) {
            root.push_attribute(attr);
        }
    }
    Ok((root.into_owned(), view_box))
}

fn is_size(attr: &Attribute<'_>) -> bool {
    matches!(attr.key.as_ref(), b"width" | b"height")
}

/// Parses `min-x min-y width height`, separated by whitespace or commas.
fn parse_view_box(value: &str) -> Option<ViewBox> {
    let numbers = svgtypes::NumberListParser::from(value)
        .map(|n| n.ok().map(|n| n as f32))
        .collect::<Option<Vec<f32>>>()?;

    match numbers.as_slice() {
        [x, y, width, height] => Some(ViewBox::new(*x, *y, *width, *height)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="red"/></svg>"#;

    #[test]
    fn parses_plain_svg() {
        let document = SvgDocument::from_data(SQUARE.as_bytes()).expect("svg should parse");
        let view_box = document.view_box();
        assert_eq!(view_box.width, 10.0);
        assert_eq!(view_box.height, 10.0);
    }

    #[test]
    fn view_box_attribute_defines_size_when_dimensions_missing() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 40 20"><circle cx="20" cy="10" r="5"/></svg>"#;
        let document = SvgDocument::from_data(svg.as_bytes()).expect("svg should parse");
        assert_eq!(document.view_box(), ViewBox::new(0.0, 0.0, 40.0, 20.0));
    }

    #[test]
    fn view_box_takes_precedence_over_size() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50" viewBox="0 0 10 10"><rect width="10" height="10"/></svg>"#;
        let markup = sanitize(svg).expect("markup should be well formed");
        assert_eq!(markup.view_box, Some(ViewBox::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!markup.text.contains("width=\"100\""));
        assert!(!markup.text.contains("height=\"50\""));
        assert!(markup.text.contains("<rect width=\"10\" height=\"10\"/>"));

        let document = SvgDocument::from_data(svg.as_bytes()).expect("svg should parse");
        assert_eq!(document.view_box(), ViewBox::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(document.tree().size().width(), 10.0);
    }

    #[test]
    fn view_box_origin_is_kept() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="8" viewBox="5,5 10,10"><rect x="5" y="5" width="10" height="10"/></svg>"#;
        let document = SvgDocument::from_data(svg.as_bytes()).expect("svg should parse");
        assert_eq!(document.view_box(), ViewBox::new(5.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn degenerate_view_box_is_reported() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10" viewBox="0 0 0 10"><rect width="10" height="10"/></svg>"#;
        let markup = sanitize(svg).expect("markup should be well formed");
        assert_eq!(markup.text, svg);

        let document = SvgDocument::from_data(svg.as_bytes()).expect("svg should parse");
        assert!(document.view_box().is_degenerate());
    }

    #[test]
    fn malformed_view_box_falls_back_to_size() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="12" height="6" viewBox="0 0 abc"/>"#;
        let document = SvgDocument::from_data(svg.as_bytes()).expect("svg should parse");
        assert_eq!(document.view_box(), ViewBox::new(0.0, 0.0, 12.0, 6.0));
    }

    #[test]
    fn doctype_is_removed() {
        let svg = r#"<?xml version="1.0"?><!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd"><svg xmlns="http://www.w3.org/2000/svg"/>"#;
        let stripped = strip_doctype(svg).expect("markup should be well formed");
        assert!(!stripped.contains("DOCTYPE"));
        assert!(stripped.starts_with("<?xml"));
        assert!(stripped.contains("<svg"));
    }

    #[test]
    fn internal_entities_are_not_expanded() {
        let svg = r#"<!DOCTYPE svg [<!ENTITY lol "lollollollol">]><svg xmlns="http://www.w3.org/2000/svg" width="4" height="4"><text>&lol;</text></svg>"#;
        let stripped = strip_doctype(svg).expect("markup should be well formed");
        assert!(!stripped.contains("ENTITY"));
        assert!(!stripped.contains("lollollollol"));
        assert!(SvgDocument::from_data(svg.as_bytes()).is_err());
    }

    #[test]
    fn document_without_doctype_is_preserved() {
        let stripped = strip_doctype(SQUARE).expect("markup should be well formed");
        assert_eq!(stripped, SQUARE);
    }

    #[test]
    fn invalid_markup_is_an_svg_error() {
        match SvgDocument::from_data(b"<svg>oops") {
            Err(Error::Svg(message)) => assert!(!message.is_empty()),
            Err(other) => panic!("expected Svg error, got {other:?}"),
            Ok(_) => panic!("expected Svg error"),
        }
    }

    #[test]
    fn non_utf8_input_is_rejected() {
        assert!(matches!(
            SvgDocument::from_data(&[0xff, 0xfe, 0x00]),
            Err(Error::Svg(_))
        ));
    }

    #[test]
    fn reads_from_stream() {
        let document =
            SvgDocument::from_reader(std::io::Cursor::new(SQUARE)).expect("svg should parse");
        assert_eq!(document.view_box().width, 10.0);
    }
}
