//! The store gateway: the five operations the views need from the database

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::firestore::{CollectionClient, Document, Value};
use crate::models::{Contact, ContactId, ContactRecord};

/// Contact persistence as seen by the views.
///
/// Every operation reports failure through [`Result`]; callers decide how a
/// failure degrades, none of them may drop it unseen.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Fetch every contact, in whatever order the store returns them
    async fn fetch_all(&self) -> Result<Vec<Contact>>;

    /// Fetch one contact; `Ok(None)` when it does not exist
    async fn fetch_one(&self, id: &ContactId) -> Result<Option<Contact>>;

    /// Persist a new contact and return the identifier the store assigned
    async fn insert(&self, record: &ContactRecord) -> Result<ContactId>;

    /// Replace all four fields of an existing contact
    async fn update_by_id(&self, id: &ContactId, record: &ContactRecord) -> Result<()>;

    /// Remove a contact
    async fn delete_by_id(&self, id: &ContactId) -> Result<()>;
}

const NAME: &str = "name";
const FULL_NAME: &str = "fullName";
const EMAIL: &str = "email";
const PHONE: &str = "phone";

/// Encode a record as document fields
pub fn record_to_fields(record: &ContactRecord) -> BTreeMap<String, Value> {
    [
        (NAME, &record.name),
        (FULL_NAME, &record.full_name),
        (EMAIL, &record.email),
        (PHONE, &record.phone),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), Value::StringValue(value.clone())))
    .collect()
}

/// Decode a document into a contact.
///
/// Missing fields read as empty text, so records written by other clients
/// still show up in the list.
pub fn document_to_contact(document: &Document) -> Result<Contact> {
    let id = document
        .id()
        .ok_or_else(|| Error::decode(format!("document name '{}' has no id", document.name)))?;

    let text = |key: &str| -> Result<String> {
        match document.fields.get(key) {
            None => Ok(String::new()),
            Some(value) => value
                .as_text()
                .ok_or_else(|| Error::decode(format!("field '{}' of {} is not text", key, id))),
        }
    };

    Ok(Contact {
        id: ContactId::new(id),
        record: ContactRecord {
            name: text(NAME)?,
            full_name: text(FULL_NAME)?,
            email: text(EMAIL)?,
            phone: text(PHONE)?,
        },
    })
}

#[async_trait]
impl ContactStore for CollectionClient {
    async fn fetch_all(&self) -> Result<Vec<Contact>> {
        self.list_documents()
            .await?
            .iter()
            .map(document_to_contact)
            .collect()
    }

    async fn fetch_one(&self, id: &ContactId) -> Result<Option<Contact>> {
        self.get_document(id.as_str())
            .await?
            .map(|document| document_to_contact(&document))
            .transpose()
    }

    async fn insert(&self, record: &ContactRecord) -> Result<ContactId> {
        let document = self.create_document(record_to_fields(record)).await?;
        document
            .id()
            .map(ContactId::new)
            .ok_or_else(|| Error::decode("created document carries no name"))
    }

    async fn update_by_id(&self, id: &ContactId, record: &ContactRecord) -> Result<()> {
        self.update_document(id.as_str(), record_to_fields(record))
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: &ContactId) -> Result<()> {
        self.delete_document(id.as_str()).await
    }
}
