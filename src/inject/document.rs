// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTML document capability and its `lol_html` implementation.
//!
//! ```text
//! HtmlDocument (trait)        StreamingDocument
//!   parse(text)        -->      scan pass: count bases in the head region
//!   base_count()       -->      counter
//!   remove_base()      -->      queued: drop every head-region <base>
//!   append_base(href)  -->      queued: <base href> first in the head
//!   serialize()        -->      single rewrite pass
//! ```
//!
//! `lol_html` does not build a tree, so the head is tracked as a region:
//! it runs from the start of the document up to the first element that
//! can't live in `<head>` (`<body>` included). That matches the implied
//! head an HTML parser builds when `<head>`, `</head>` or `<html>` are
//! left out.
//!
//! Scripts in the document are never executed.

use std::cell::Cell;

use lol_html::html_content::ContentType;
use lol_html::{RewriteStrSettings, element, errors::RewritingError, rewrite_str};

/// The operations the injector needs from an HTML document.
pub trait HtmlDocument: Sized {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Parses a complete document.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed.
    fn parse(text: &str) -> Result<Self, Self::Error>;

    /// Number of `<base>` elements in `<head>`.
    fn base_count(&self) -> usize;

    /// Removes the `<base>` elements from `<head>`.
    fn remove_base(&mut self);

    /// Adds a `<base>` element with `href` to `<head>`, creating the head
    /// if the document has none.
    fn append_base(&mut self, href: &str);

    /// Serializes the whole document, doctype included.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized.
    fn serialize(&self) -> Result<String, Self::Error>;
}

/// Elements an HTML parser keeps in the head; anything else starts the body.
const HEAD_CONTENT: [&str; 10] = [
    "html", "head", "base", "title", "meta", "link", "style", "script", "noscript", "template",
];

/// Tracks whether the elements seen so far, in document order, are still
/// in the head.
#[derive(Debug, Default)]
struct HeadRegion {
    closed: Cell<bool>,
}

impl HeadRegion {
    /// Feeds the next start tag; true if it belongs to the head.
    fn admits(&self, tag: &str) -> bool {
        if !self.closed.get() && !HEAD_CONTENT.iter().any(|n| tag.eq_ignore_ascii_case(n)) {
            self.closed.set(true);
        }
        !self.closed.get()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Scan {
    bases: usize,
    has_html: bool,
    has_element: bool,
}

/// Document backed by the `lol_html` streaming rewriter.
///
/// Mutations are queued and applied in a single rewrite pass on
/// [`serialize`](HtmlDocument::serialize); everything else is passed
/// through byte for byte.
#[derive(Debug, Clone)]
pub struct StreamingDocument {
    source: String,
    scan: Scan,
    remove_existing: bool,
    appended: Vec<String>,
}

impl HtmlDocument for StreamingDocument {
    type Error = RewritingError;

    fn parse(text: &str) -> Result<Self, Self::Error> {
        Ok(Self {
            scan: scan(text)?,
            source: text.to_string(),
            remove_existing: false,
            appended: Vec::new(),
        })
    }

    fn base_count(&self) -> usize {
        let kept = if self.remove_existing {
            0
        } else {
            self.scan.bases
        };
        kept + self.appended.len()
    }

    fn remove_base(&mut self) {
        self.remove_existing = true;
        self.appended.clear();
    }

    fn append_base(&mut self, href: &str) {
        self.appended.push(href.to_string());
    }

    fn serialize(&self) -> Result<String, Self::Error> {
        if !self.remove_existing && self.appended.is_empty() {
            return Ok(self.source.clone());
        }

        let markup = self.markup();
        let inserted = Cell::new(markup.is_empty());
        let region = HeadRegion::default();
        let mut handlers = vec![element!("*", |el| {
            let tag = el.tag_name();
            let in_head = region.admits(&tag);

            // The first element after <html> is either <head> or the first
            // child of the implied head.
            if !inserted.get() && !tag.eq_ignore_ascii_case("html") {
                if tag.eq_ignore_ascii_case("head") {
                    el.prepend(&markup, ContentType::Html);
                } else {
                    el.before(&markup, ContentType::Html);
                }
                inserted.set(true);
            }

            if self.remove_existing && in_head && tag.eq_ignore_ascii_case("base") {
                el.remove();
            }
            Ok(())
        })];

        if self.scan.has_html && !self.scan.has_element {
            handlers.push(element!("html", |el| {
                if !inserted.replace(true) {
                    el.prepend(&markup, ContentType::Html);
                }
                Ok(())
            }));
        }

        let output = rewrite_str(
            &self.source,
            RewriteStrSettings {
                element_content_handlers: handlers,
                strict: false,
                ..RewriteStrSettings::default()
            },
        )?;

        if inserted.get() {
            Ok(output)
        } else {
            // no elements at all, only a doctype, comments or text
            Ok(format!("{output}{markup}"))
        }
    }
}

impl StreamingDocument {
    fn markup(&self) -> String {
        self.appended
            .iter()
            .map(|href| format!(r#"<base href="{}">"#, escape_attribute(href)))
            .collect()
    }
}

fn scan(text: &str) -> Result<Scan, RewritingError> {
    let bases = Cell::new(0_usize);
    let has_html = Cell::new(false);
    let has_element = Cell::new(false);
    let region = HeadRegion::default();

    rewrite_str(
        text,
        RewriteStrSettings {
            element_content_handlers: vec![element!("*", |el| {
                let tag = el.tag_name();
                let in_head = region.admits(&tag);
                if tag.eq_ignore_ascii_case("html") {
                    has_html.set(true);
                } else {
                    has_element.set(true);
                }
                if in_head && tag.eq_ignore_ascii_case("base") {
                    bases.set(bases.get() + 1);
                }
                Ok(())
            })],
            strict: false,
            ..RewriteStrSettings::default()
        },
    )?;

    Ok(Scan {
        bases: bases.get(),
        has_html: has_html.get(),
        has_element: has_element.get(),
    })
}

/// Escapes a value for use inside a double-quoted attribute.
#[must_use]
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
