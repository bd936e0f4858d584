//! Contact Book
//!
//! List, add, edit and delete contact records kept in a hosted Firestore
//! database, with client-side validation of the contact form.
//!
//! The two pages ([`views::ContactList`] and [`views::ContactForm`]) are plain
//! state holders. They receive the store handle explicitly and answer user
//! actions with a [`routes::Route`] to navigate to.

pub mod config;
pub mod error;
pub mod fetch;
pub mod firestore;
pub mod models;
pub mod routes;
pub mod store;
pub mod validation;
pub mod views;

use reqwest::Client;
use std::sync::Arc;

use crate::config::{ClientOptions, FirebaseConfig};
use crate::error::Result;
use crate::firestore::CollectionClient;
use crate::routes::FormMode;
use crate::views::{ContactForm, ContactList};

/// The main entry point: one handle per process, shared by every page
#[derive(Clone)]
pub struct ContactBook {
    config: Arc<FirebaseConfig>,
    options: Arc<ClientOptions>,
    store: Arc<CollectionClient>,
}

impl ContactBook {
    /// Create a new client with default options
    ///
    /// # Example
    ///
    /// ```
    /// use contact_book::{config::FirebaseConfig, ContactBook};
    ///
    /// let config = FirebaseConfig::new("your-project-id", "your-api-key").unwrap();
    /// let book = ContactBook::new(config);
    /// assert_eq!(book.store().collection(), "contacts");
    /// ```
    pub fn new(config: FirebaseConfig) -> Self {
        Self::new_with_options(config, ClientOptions::default())
    }

    /// Create a new client with custom options
    pub fn new_with_options(config: FirebaseConfig, options: ClientOptions) -> Self {
        let config = Arc::new(config);
        let options = Arc::new(options);
        let http_client = Client::new();
        let store = Arc::new(CollectionClient::new(
            config.clone(),
            options.clone(),
            &options.collection,
            http_client,
        ));

        Self {
            config,
            options,
            store,
        }
    }

    /// Build the client from `FIREBASE_*` / `FIRESTORE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(FirebaseConfig::from_env()?))
    }

    pub fn config(&self) -> &FirebaseConfig {
        &self.config
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// The contacts collection, which is the store gateway of both pages
    pub fn store(&self) -> Arc<CollectionClient> {
        self.store.clone()
    }

    /// A fresh contact list page
    pub fn contact_list(&self) -> ContactList<CollectionClient> {
        ContactList::new(self.store())
    }

    /// A fresh contact form page
    pub fn contact_form(&self, mode: FormMode) -> ContactForm<CollectionClient> {
        ContactForm::new(self.store(), mode)
    }
}

/// A convenience module for common imports
pub mod prelude {
    pub use crate::config::{ClientOptions, FirebaseConfig};
    pub use crate::error::Error;
    pub use crate::models::{Contact, ContactId, ContactRecord};
    pub use crate::routes::{FormMode, Route};
    pub use crate::store::ContactStore;
    pub use crate::validation::Field;
    pub use crate::views::{Confirm, ContactForm, ContactList, DeleteOutcome, SubmitOutcome};
    pub use crate::ContactBook;
}
