//! Configuration for the contact book client

use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/";
const DEFAULT_DATABASE_ID: &str = "(default)";

/// Connection parameters of the Firebase project backing the contact book
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    /// The Firebase project identifier
    pub project_id: String,

    /// The web API key of the project
    pub api_key: String,

    /// The Firestore database inside the project
    pub database_id: String,

    /// Root URL of the Firestore REST API
    pub base_url: Url,
}

impl FirebaseConfig {
    /// Creates a new configuration for the default database
    pub fn new(project_id: &str, api_key: &str) -> Result<Self> {
        if project_id.is_empty() {
            return Err(Error::config("project_id cannot be empty"));
        }
        if api_key.is_empty() {
            return Err(Error::config("api_key cannot be empty"));
        }
        Ok(Self {
            project_id: project_id.to_string(),
            api_key: api_key.to_string(),
            database_id: DEFAULT_DATABASE_ID.to_string(),
            base_url: Url::parse(DEFAULT_BASE_URL)?,
        })
    }

    /// Reads the configuration from environment variables.
    ///
    /// `FIREBASE_PROJECT_ID` and `FIREBASE_API_KEY` are required,
    /// `FIRESTORE_DATABASE_ID` and `FIRESTORE_BASE_URL` are optional.
    pub fn from_env() -> Result<Self> {
        let project_id = std::env::var("FIREBASE_PROJECT_ID")
            .map_err(|_| Error::config("FIREBASE_PROJECT_ID environment variable not found"))?;
        let api_key = std::env::var("FIREBASE_API_KEY")
            .map_err(|_| Error::config("FIREBASE_API_KEY environment variable not found"))?;

        let mut config = Self::new(&project_id, &api_key)?;
        if let Ok(database_id) = std::env::var("FIRESTORE_DATABASE_ID") {
            config = config.with_database_id(&database_id);
        }
        if let Ok(base_url) = std::env::var("FIRESTORE_BASE_URL") {
            config = config.with_base_url(&base_url)?;
        }
        Ok(config)
    }

    /// Point the client at another Firestore endpoint, e.g. the local emulator
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = url;
        Ok(self)
    }

    /// Set the database identifier
    pub fn with_database_id(mut self, database_id: &str) -> Self {
        self.database_id = database_id.to_string();
        self
    }

    /// Resource path of the documents root, relative to the API root
    pub(crate) fn documents_path(&self) -> String {
        format!(
            "v1/projects/{}/databases/{}/documents",
            self.project_id, self.database_id
        )
    }
}

/// Options that tune how the client talks to the store
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// The collection holding contact documents
    pub collection: String,

    /// The request timeout; `None` waits for the store indefinitely
    pub request_timeout: Option<Duration>,

    /// Documents requested per page when listing a collection
    pub page_size: u32,

    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            collection: "contacts".to_string(),
            request_timeout: None,
            page_size: 300,
            user_agent: format!("contact-book/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientOptions {
    /// Set the contacts collection name
    pub fn with_collection(mut self, value: &str) -> Self {
        self.collection = value.to_string();
        self
    }

    /// Set the request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }

    /// Set the listing page size
    pub fn with_page_size(mut self, value: u32) -> Self {
        self.page_size = value.max(1);
        self
    }
}
