// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `<base>` element injection into the HTML entry point.
//!
//! # State Machine
//!
//! ```text
//!              remove_base()             append_base(href)
//!  HasBase  ---------------->  NoBase  ------------------->  HasBase (terminal)
//!                                ^
//!  (fresh document) -------------'
//! ```
//!
//! Every run ends with exactly one `<base href="{public path}">` in
//! `<head>`, whatever the document contained before.

pub mod document;


use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::error::InjectError;

pub use document::{HtmlDocument, StreamingDocument};

/// Mount path used as the `<base>` href.
///
/// Empty for root-relative serving, otherwise always ends with `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicPath(String);

impl PublicPath {
    /// Derives the href from the caller-supplied `PUBLIC_URL`.
    ///
    /// ```
    /// use spa_bootstrap::inject::PublicPath;
    ///
    /// assert_eq!(PublicPath::from_public_url(Some("/app")).as_str(), "/app/");
    /// assert_eq!(PublicPath::from_public_url(Some("")).as_str(), "");
    /// assert_eq!(PublicPath::from_public_url(None).as_str(), "");
    /// ```
    #[must_use]
    pub fn from_public_url(public_url: Option<&str>) -> Self {
        match public_url {
            None | Some("") => Self(String::new()),
            Some(url) if url.ends_with('/') => Self(url.to_string()),
            Some(url) => Self(format!("{url}/")),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for PublicPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a document currently has a `<base>` in its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseState {
    HasBase,
    NoBase,
}

impl BaseState {
    #[must_use]
    pub fn of<D: HtmlDocument>(document: &D) -> Self {
        if document.base_count() > 0 {
            Self::HasBase
        } else {
            Self::NoBase
        }
    }
}

/// Result of a successful injection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectOutcome {
    /// The rewritten document.
    pub path: PathBuf,
    /// Number of `<base>` elements that were replaced.
    pub replaced: usize,
}

/// Drives the `<base>` state machine on a parsed document.
///
/// Returns the number of `<base>` elements removed.
pub fn ensure_single_base<D: HtmlDocument>(document: &mut D, href: &PublicPath) -> usize {
    let mut removed = 0;
    if BaseState::of(document) == BaseState::HasBase {
        removed = document.base_count();
        document.remove_base();
    }
    debug_assert_eq!(BaseState::of(document), BaseState::NoBase);
    document.append_base(href.as_str());
    removed
}

/// Checks the precondition that the target document exists.
///
/// # Errors
///
/// Returns `InjectError::MissingFile` if nothing exists at `path`.
pub async fn ensure_document_exists(path: &Path) -> Result<(), InjectError> {
    match tokio::fs::try_exists(path).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(InjectError::MissingFile {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(InjectError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Rewrites an HTML document so its head holds exactly one `<base>`.
#[derive(Debug)]
pub struct BaseElementInjector<D = StreamingDocument> {
    _document: PhantomData<fn() -> D>,
}

impl<D> Default for BaseElementInjector<D> {
    fn default() -> Self {
        Self {
            _document: PhantomData,
        }
    }
}

impl BaseElementInjector {
    /// Creates an injector backed by [`StreamingDocument`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: HtmlDocument> BaseElementInjector<D> {
    /// Creates an injector for a specific document implementation.
    #[must_use]
    pub fn with_document() -> Self {
        Self::default()
    }

    /// Loads `path`, replaces its `<base>` with one pointing at
    /// `public_path`, and writes it back in place.
    ///
    /// The write is not atomic; a failed write may leave a truncated file.
    ///
    /// # Errors
    ///
    /// - `MissingFile` if the document does not exist.
    /// - `Read` / `Parse` if it cannot be loaded as UTF-8 HTML.
    /// - `Write` if the result cannot be written back.
    pub async fn inject(
        &self,
        path: &Path,
        public_path: &PublicPath,
    ) -> Result<InjectOutcome, InjectError> {
        ensure_document_exists(path).await?;

        tracing::info!("Creating base element!");
        let bytes = tokio::fs::read(path).await.map_err(|source| InjectError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|e| InjectError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut document = D::parse(&text).map_err(|e| InjectError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let replaced = ensure_single_base(&mut document, public_path);
        if !public_path.is_empty() {
            tracing::info!("Base element was set to {public_path}!");
        }

        let html = document.serialize().map_err(|e| InjectError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tokio::fs::write(path, html)
            .await
            .map_err(|source| InjectError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %path.display(), replaced, "base element written");
        tracing::info!("Done setting base element");
        Ok(InjectOutcome {
            path: path.to_path_buf(),
            replaced,
        })
    }
}
