//! # Domain Model: News Records and the Two-Slot Document
//!
//! This module defines the core data structures: [`NewsRecord`], [`Content`],
//! and [`NewsDocument`].
//!
//! ## Document Layout
//!
//! The whole collection lives in one JSON document with two storage slots:
//!
//! ```text
//! {
//!   "noticiaPrincipal": { ... },        <-- single featured record, optional
//!   "noticiasSecundarias": [ ... ]      <-- ordered list of everything else
//! }
//! ```
//!
//! IDs are plain integers, unique across both slots and immutable once
//! assigned. New records always land at the end of `noticiasSecundarias`;
//! the primary slot is only ever replaced, never created or deleted through
//! the service.
//!
//! ## Legacy Content
//!
//! A record body (`conteudo`) is an ordered list of [`ContentBlock`]s. Old
//! documents stored it as a bare string instead. [`Content`] is an untagged
//! sum over both shapes so the legacy form is recognized once, at the
//! deserialization boundary, and resolved by the startup migration in
//! [`crate::migrate`] rather than re-sniffed on every access.

use serde::{Deserialize, Serialize};

/// One typed unit of a record body (paragraph, image, subtitle, ...).
/// The tag is an open string; the store does not validate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub value: String,
}

impl ContentBlock {
    pub fn paragraph<S: Into<String>>(value: S) -> Self {
        Self {
            block_type: "paragraph".to_string(),
            value: value.into(),
        }
    }
}

/// Record body as found on disk: either the current structured list or the
/// legacy bare string. The two shapes are disjoint in JSON, so `untagged`
/// resolves them unambiguously.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Blocks(Vec<ContentBlock>),
    Legacy(String),
}

impl Default for Content {
    fn default() -> Self {
        Content::Blocks(Vec::new())
    }
}

impl Content {
    pub fn is_legacy(&self) -> bool {
        matches!(self, Content::Legacy(_))
    }

    /// Canonical structured form. A legacy string becomes a single
    /// paragraph block carrying the original text.
    pub fn into_blocks(self) -> Vec<ContentBlock> {
        match self {
            Content::Blocks(blocks) => blocks,
            Content::Legacy(text) => vec![ContentBlock::paragraph(text)],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRecord {
    pub id: u64,
    #[serde(default)]
    pub imagem: String,
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub subtitulo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assunto: Option<String>,
    #[serde(default)]
    pub conteudo: Content,
}

/// Caller-supplied record fields. Deliberately has no `id`: the service
/// assigns one on create and pins the original on update, so input JSON
/// carrying an `id` key is silently ignored by serde.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordInput {
    #[serde(default)]
    pub imagem: String,
    #[serde(default)]
    pub titulo: String,
    #[serde(default)]
    pub subtitulo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assunto: Option<String>,
    #[serde(default)]
    pub conteudo: Content,
}

impl RecordInput {
    pub fn into_record(self, id: u64) -> NewsRecord {
        NewsRecord {
            id,
            imagem: self.imagem,
            titulo: self.titulo,
            subtitulo: self.subtitulo,
            time: self.time,
            assunto: self.assunto,
            conteudo: self.conteudo,
        }
    }
}

/// Where a record lives inside the document. Routes updates and deletes
/// back to the slot the locator resolved, without a second scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Principal,
    Secundaria(usize),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsDocument {
    #[serde(
        rename = "noticiaPrincipal",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub principal: Option<NewsRecord>,
    #[serde(rename = "noticiasSecundarias", default)]
    pub secundarias: Vec<NewsRecord>,
}

impl NewsDocument {
    /// Locate a record by ID. The primary slot wins over the secondary
    /// list; the list is scanned in stored order. `None` means "no such
    /// record", which callers translate to a not-found outcome.
    pub fn find(&self, id: u64) -> Option<(&NewsRecord, Location)> {
        if let Some(principal) = &self.principal {
            if principal.id == id {
                return Some((principal, Location::Principal));
            }
        }
        self.secundarias
            .iter()
            .enumerate()
            .find(|(_, record)| record.id == id)
            .map(|(index, record)| (record, Location::Secundaria(index)))
    }

    /// Next unique ID across both slots: `max + 1`, or 1 when empty.
    pub fn next_id(&self) -> u64 {
        self.iter().map(|record| record.id).max().unwrap_or(0) + 1
    }

    /// All records in listing order: primary first (if present), then the
    /// secondary list in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &NewsRecord> {
        self.principal.iter().chain(self.secundarias.iter())
    }

    /// Put `record` into the slot `location` points at.
    pub fn replace(&mut self, location: Location, record: NewsRecord) {
        match location {
            Location::Principal => self.principal = Some(record),
            Location::Secundaria(index) => self.secundarias[index] = record,
        }
    }
}
