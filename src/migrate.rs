//! One-time migration of legacy record bodies.
//!
//! Old documents stored `conteudo` as a bare string. The current format is
//! an ordered list of content blocks. [`run`] rewrites every legacy body
//! into a single paragraph block and persists the result, once, at process
//! startup. Running it against an already-migrated document is a no-op.

use crate::error::Result;
use crate::model::{Content, NewsDocument};
use crate::store::DocumentStore;

/// Rewrite every legacy `conteudo` in place. Returns how many records were
/// rewritten; zero means the document was already in the current format.
pub fn normalize(doc: &mut NewsDocument) -> usize {
    let records = doc
        .principal
        .iter_mut()
        .chain(doc.secundarias.iter_mut());

    let mut migrated = 0;
    for record in records {
        if record.conteudo.is_legacy() {
            let blocks = std::mem::take(&mut record.conteudo).into_blocks();
            record.conteudo = Content::Blocks(blocks);
            migrated += 1;
        }
    }
    migrated
}

/// Load, normalize, save. The save is skipped when nothing changed, so the
/// startup scan costs one read on an up-to-date store.
pub fn run<S: DocumentStore>(store: &mut S) -> Result<usize> {
    let mut doc = store.load()?;
    let migrated = normalize(&mut doc);
    if migrated > 0 {
        store.save(&doc)?;
    }
    Ok(migrated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContentBlock;
    use crate::store::memory::fixtures::{legacy_record, record, StoreFixture};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn test_normalize_legacy_string_becomes_paragraph() {
        let mut doc = NewsDocument {
            principal: None,
            secundarias: vec![legacy_record(1, "Velha", "hello")],
        };

        let migrated = normalize(&mut doc);

        assert_eq!(migrated, 1);
        assert_eq!(
            doc.secundarias[0].conteudo,
            Content::Blocks(vec![ContentBlock::paragraph("hello")])
        );
    }

    #[test]
    fn test_normalize_covers_principal_slot() {
        let mut doc = NewsDocument {
            principal: Some(legacy_record(1, "Principal", "corpo")),
            secundarias: vec![record(2, "Nova")],
        };

        assert_eq!(normalize(&mut doc), 1);
        assert!(!doc.principal.as_ref().unwrap().conteudo.is_legacy());
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut doc = NewsDocument {
            principal: Some(legacy_record(1, "P", "a")),
            secundarias: vec![legacy_record(2, "S", "b")],
        };

        assert_eq!(normalize(&mut doc), 2);
        let once = doc.clone();
        assert_eq!(normalize(&mut doc), 0);
        assert_eq!(doc, once);
    }

    #[test]
    fn test_run_persists_migrated_document() {
        let fixture = StoreFixture::new().with_legacy_secundaria(1, "Velha", "texto antigo");
        let mut store = fixture.store;

        let migrated = run(&mut store).unwrap();

        assert_eq!(migrated, 1);
        assert_eq!(
            store.document().secundarias[0].conteudo,
            Content::Blocks(vec![ContentBlock::paragraph("texto antigo")])
        );
    }

    #[test]
    fn test_run_skips_save_when_clean() {
        let doc = NewsDocument {
            principal: Some(record(1, "P")),
            secundarias: vec![record(2, "S")],
        };
        let mut store = InMemoryStore::with_document(doc.clone());

        assert_eq!(run(&mut store).unwrap(), 0);
        assert_eq!(store.document(), &doc);
    }

    #[test]
    fn test_run_on_empty_store() {
        let mut store = InMemoryStore::new();
        assert_eq!(run(&mut store).unwrap(), 0);
    }
}
