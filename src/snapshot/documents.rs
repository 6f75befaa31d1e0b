use serde::{Deserialize, Serialize};

use super::{SnapshotStore, Subscription};

/// A document attached to a banking transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDoc {
    pub document_id: String,
    pub file_name: String,
}

/// State published by a [`DocumentList`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDocs {
    pub documents: Vec<TransactionDoc>,
    /// Attach analysed documents to the transaction without asking.
    pub always_attach: bool,
}

/// Documents attached to the current transaction.
///
/// Created and owned by the embedding application; every mutation publishes
/// a new [`TransactionDocs`] snapshot.
#[derive(Debug, Default)]
pub struct DocumentList {
    store: SnapshotStore<TransactionDocs>,
}

impl DocumentList {
    pub fn new(always_attach: bool) -> Self {
        Self {
            store: SnapshotStore::new(TransactionDocs {
                documents: Vec::new(),
                always_attach,
            }),
        }
    }

    /// Add a document, replacing one with the same id.
    pub fn add(&self, doc: TransactionDoc) -> u64 {
        self.store.update(|state| {
            match state
                .documents
                .iter_mut()
                .find(|d| d.document_id == doc.document_id)
            {
                Some(existing) => *existing = doc,
                None => state.documents.push(doc),
            }
        })
    }

    /// Remove a document by id. Returns whether it was present; nothing is
    /// published when it was not.
    pub fn remove(&self, document_id: &str) -> bool {
        self.store
            .update_if(|state| {
                let before = state.documents.len();
                state.documents.retain(|d| d.document_id != document_id);
                state.documents.len() != before
            })
            .is_some()
    }

    pub fn clear(&self) -> u64 {
        self.store.update(|state| state.documents.clear())
    }

    pub fn set_always_attach(&self, always_attach: bool) -> u64 {
        self.store.update(|state| state.always_attach = always_attach)
    }

    pub fn documents(&self) -> Vec<TransactionDoc> {
        self.store.current().value.documents
    }

    pub fn always_attach(&self) -> bool {
        self.store.current().value.always_attach
    }

    pub fn subscribe(&self) -> Subscription<TransactionDocs> {
        self.store.subscribe()
    }
}
