//! SVG document reader
//!
//! Pulls the raw path data out of an SVG document. Only `<path>` elements
//! are read; shapes are expected to have been converted to paths beforehand.

use fcmkit_core::InputError;
use roxmltree::{Document, Node, ParsingOptions};

/// Size information from the root `<svg>` element
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentMetrics {
    pub view_box: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

impl DocumentMetrics {
    /// `viewBox` as `[min_x, min_y, width, height]`
    pub fn view_box_rect(&self) -> Option<[f64; 4]> {
        let values: Vec<f64> = self
            .view_box
            .as_deref()?
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(str::parse::<f64>)
            .collect::<Result<_, _>>()
            .ok()?;
        values.try_into().ok()
    }
}

/// Path data collected from one top-level group
#[derive(Debug, Clone, PartialEq)]
pub struct PathGroup<'a> {
    /// The group's `id`, if it has one
    pub id: Option<&'a str>,
    pub path_data: Vec<&'a str>,
}

pub struct SvgDocument<'input> {
    document: Document<'input>,
}

impl<'input> SvgDocument<'input> {
    pub fn parse(text: &'input str) -> Result<Self, InputError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document =
            Document::parse_with_options(text, options).map_err(|e| InputError::Document {
                reason: e.to_string(),
            })?;

        if !document.root_element().has_tag_name("svg") {
            return Err(InputError::Document {
                reason: format!(
                    "root element is <{}>, expected <svg>",
                    document.root_element().tag_name().name()
                ),
            });
        }

        Ok(Self { document })
    }

    /// Every non-empty `d` attribute, in document order
    pub fn path_data(&self) -> Vec<&str> {
        collect_path_data(self.document.root_element())
    }

    pub fn metrics(&self) -> DocumentMetrics {
        let root = self.document.root_element();
        DocumentMetrics {
            view_box: root.attribute("viewBox").map(str::to_string),
            width: root.attribute("width").map(str::to_string),
            height: root.attribute("height").map(str::to_string),
        }
    }

    /// Path data split by top-level `<g>` element.
    ///
    /// Paths outside any top-level group form a leading group without an id.
    /// Groups without paths are skipped.
    pub fn pieces_by_group(&self) -> Vec<PathGroup<'_>> {
        let root = self.document.root_element();
        let mut loose = Vec::new();
        let mut groups = Vec::new();

        for child in root.children().filter(Node::is_element) {
            if child.has_tag_name("g") {
                groups.push(PathGroup {
                    id: child.attribute("id"),
                    path_data: collect_path_data(child),
                });
            } else {
                loose.extend(collect_path_data(child));
            }
        }

        if !loose.is_empty() {
            groups.insert(
                0,
                PathGroup {
                    id: None,
                    path_data: loose,
                },
            );
        }

        groups.retain(|group| !group.path_data.is_empty());
        groups
    }
}

fn collect_path_data<'a>(node: Node<'a, '_>) -> Vec<&'a str> {
    node.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "path")
        .filter_map(|n| n.attribute("d"))
        .filter(|d| !d.trim().is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="100mm" height="50mm" viewBox="0 0 100 50">
  <path d="M 0 0 L 1 1"/>
  <g id="star">
    <path d="M 10 10 L 20 10"/>
    <g><path d="M 30 30 Z"/></g>
  </g>
  <g id="empty"><rect width="1" height="1"/></g>
  <g><path d=" "/><path d="M 5 5 L 6 6"/></g>
</svg>"#;

    #[test]
    fn test_path_data_in_document_order() {
        let svg = SvgDocument::parse(DOCUMENT).unwrap();
        assert_eq!(
            svg.path_data(),
            vec!["M 0 0 L 1 1", "M 10 10 L 20 10", "M 30 30 Z", "M 5 5 L 6 6"]
        );
    }

    #[test]
    fn test_metrics() {
        let svg = SvgDocument::parse(DOCUMENT).unwrap();
        let metrics = svg.metrics();
        assert_eq!(metrics.width.as_deref(), Some("100mm"));
        assert_eq!(metrics.height.as_deref(), Some("50mm"));
        assert_eq!(metrics.view_box_rect(), Some([0.0, 0.0, 100.0, 50.0]));
    }

    #[test]
    fn test_groups() {
        let svg = SvgDocument::parse(DOCUMENT).unwrap();
        let groups = svg.pieces_by_group();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].id, None);
        assert_eq!(groups[0].path_data, vec!["M 0 0 L 1 1"]);
        assert_eq!(groups[1].id, Some("star"));
        assert_eq!(groups[1].path_data.len(), 2);
        assert_eq!(groups[2].id, None);
        assert_eq!(groups[2].path_data, vec!["M 5 5 L 6 6"]);
    }

    #[test]
    fn test_rejects_non_svg() {
        assert!(matches!(
            SvgDocument::parse("<html/>"),
            Err(InputError::Document { .. })
        ));
        assert!(matches!(
            SvgDocument::parse("<svg"),
            Err(InputError::Document { .. })
        ));
    }

    #[test]
    fn test_missing_view_box() {
        let svg = SvgDocument::parse("<svg xmlns=\"http://www.w3.org/2000/svg\"/>").unwrap();
        assert_eq!(svg.metrics(), DocumentMetrics::default());
        assert_eq!(svg.metrics().view_box_rect(), None);
        assert!(svg.path_data().is_empty());
    }
}
