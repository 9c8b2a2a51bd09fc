use super::DocumentStore;
use crate::error::Result;
use crate::model::NewsDocument;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    doc: NewsDocument,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: NewsDocument) -> Self {
        Self { doc }
    }

    /// Direct look at the stored document, bypassing `load`.
    pub fn document(&self) -> &NewsDocument {
        &self.doc
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self) -> Result<NewsDocument> {
        Ok(self.doc.clone())
    }

    fn save(&mut self, doc: &NewsDocument) -> Result<()> {
        self.doc = doc.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Content, ContentBlock, NewsRecord};

    pub fn record(id: u64, titulo: &str) -> NewsRecord {
        NewsRecord {
            id,
            imagem: format!("imagem-{id}.png"),
            titulo: titulo.to_string(),
            subtitulo: format!("Subtitulo de {titulo}"),
            time: None,
            assunto: None,
            conteudo: Content::Blocks(vec![ContentBlock::paragraph(format!(
                "Corpo de {titulo}"
            ))]),
        }
    }

    pub fn legacy_record(id: u64, titulo: &str, body: &str) -> NewsRecord {
        NewsRecord {
            conteudo: Content::Legacy(body.to_string()),
            ..record(id, titulo)
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_principal(mut self, id: u64, titulo: &str) -> Self {
            self.store.doc.principal = Some(record(id, titulo));
            self
        }

        pub fn with_secundaria(mut self, id: u64, titulo: &str) -> Self {
            self.store.doc.secundarias.push(record(id, titulo));
            self
        }

        pub fn with_legacy_secundaria(mut self, id: u64, titulo: &str, body: &str) -> Self {
            self.store.doc.secundarias.push(legacy_record(id, titulo, body));
            self
        }
    }
}
