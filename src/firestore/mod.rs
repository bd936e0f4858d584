//! Document operations through the Firestore REST API

mod types;

use log::debug;
use reqwest::Client;
use std::collections::BTreeMap;
use std::sync::Arc;
use url::Url;

use crate::config::{ClientOptions, FirebaseConfig};
use crate::error::{Error, Result};
use crate::fetch::{Fetch, FetchBuilder};

pub use types::*;

/// Client for the documents of one collection
#[derive(Clone)]
pub struct CollectionClient {
    config: Arc<FirebaseConfig>,
    options: Arc<ClientOptions>,
    collection: String,
    client: Client,
}

impl CollectionClient {
    /// Create a new CollectionClient
    pub(crate) fn new(
        config: Arc<FirebaseConfig>,
        options: Arc<ClientOptions>,
        collection: &str,
        client: Client,
    ) -> Self {
        Self {
            config,
            options,
            collection: collection.to_string(),
            client,
        }
    }

    /// Name of the collection this client addresses
    pub fn collection(&self) -> &str {
        &self.collection
    }

    fn collection_url(&self) -> Result<Url> {
        let path = format!("{}/{}", self.config.documents_path(), self.collection);
        Ok(self.config.base_url.join(&path)?)
    }

    fn document_url(&self, id: &str) -> Result<Url> {
        let mut url = self.collection_url()?;
        url.path_segments_mut()
            .map_err(|_| Error::config("base URL cannot carry a document path"))?
            .push(id);
        Ok(url)
    }

    /// Attach the api key and the client-wide request settings
    fn prepare<'a>(&self, fetch: FetchBuilder<'a>) -> FetchBuilder<'a> {
        fetch
            .header("User-Agent", &self.options.user_agent)
            .query("key", &self.config.api_key)
            .timeout(self.options.request_timeout)
    }

    /// List every document of the collection, following page tokens
    pub async fn list_documents(&self) -> Result<Vec<Document>> {
        let url = self.collection_url()?;
        let page_size = self.options.page_size.to_string();
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut fetch = self
                .prepare(Fetch::get(&self.client, url.clone()))
                .query("pageSize", &page_size);
            if let Some(token) = &page_token {
                fetch = fetch.query("pageToken", token);
            }

            let page = fetch.execute::<ListDocumentsResponse>().await?;
            documents.extend(page.documents);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        debug!(
            "listed {} documents from {}",
            documents.len(),
            self.collection
        );
        Ok(documents)
    }

    /// Fetch one document; a missing document is `Ok(None)`
    pub async fn get_document(&self, id: &str) -> Result<Option<Document>> {
        let url = self.document_url(id)?;
        match self
            .prepare(Fetch::get(&self.client, url))
            .execute::<Document>()
            .await
        {
            Ok(document) => Ok(Some(document)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Create a document with a store-assigned identifier
    pub async fn create_document(&self, fields: BTreeMap<String, Value>) -> Result<Document> {
        let body = Document {
            fields,
            ..Default::default()
        };
        let url = self.collection_url()?;
        self.prepare(Fetch::post(&self.client, url))
            .json(&body)?
            .execute::<Document>()
            .await
    }

    /// Overwrite the given fields of an existing document.
    ///
    /// The request is conditioned on the document existing, so updating a
    /// deleted contact fails instead of silently recreating it.
    pub async fn update_document(
        &self,
        id: &str,
        fields: BTreeMap<String, Value>,
    ) -> Result<Document> {
        let url = self.document_url(id)?;
        let mut fetch = self.prepare(Fetch::patch(&self.client, url));
        for field in fields.keys() {
            fetch = fetch.query("updateMask.fieldPaths", field);
        }
        let body = Document {
            fields,
            ..Default::default()
        };
        fetch
            .query("currentDocument.exists", "true")
            .json(&body)?
            .execute::<Document>()
            .await
    }

    /// Delete a document
    pub async fn delete_document(&self, id: &str) -> Result<()> {
        let url = self.document_url(id)?;
        self.prepare(Fetch::delete(&self.client, url))
            .execute::<serde_json::Value>()
            .await?;
        Ok(())
    }
}
