//! The contact list page

use log::{debug, warn};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::{Contact, ContactId};
use crate::routes::Route;
use crate::store::ContactStore;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this contact?";

/// Table headings, in column order
pub const COLUMNS: [&str; 5] = ["Name", "Full Name", "Email", "Phone", "Actions"];

/// Blocking confirmation dialog
pub trait Confirm {
    /// Ask the user; `true` means go ahead
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Load state of the list; a failed fetch puts it back to `Loading`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Loading,
    Loaded(Vec<Contact>),
}

/// What happened to a delete request
#[derive(Debug)]
pub enum DeleteOutcome {
    /// The user declined; nothing was sent
    Declined,
    /// The store removed the contact and so did the list
    Deleted,
    /// The store refused or could not be reached; the row stays
    Failed(Error),
}

/// All contacts, with per-row edit and delete actions
pub struct ContactList<S: ContactStore> {
    store: Arc<S>,
    state: ListState,
}

impl<S: ContactStore> ContactList<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            state: ListState::Loading,
        }
    }

    pub fn title(&self) -> &'static str {
        "Contact List"
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Rendered rows; empty while loading
    pub fn rows(&self) -> &[Contact] {
        match &self.state {
            ListState::Loading => &[],
            ListState::Loaded(contacts) => contacts,
        }
    }

    /// Fetch every contact once.
    ///
    /// On failure the list shows no rows, the same as an empty collection;
    /// the error is handed back for the caller to log.
    pub async fn activate(&mut self) -> Result<()> {
        match self.store.fetch_all().await {
            Ok(contacts) => {
                debug!("loaded {} contacts", contacts.len());
                self.state = ListState::Loaded(contacts);
                Ok(())
            }
            Err(err) => {
                warn!("failed to load contacts: {}", err);
                self.state = ListState::Loading;
                Err(err)
            }
        }
    }

    /// Route of the "Add Contact" link
    pub fn add_route(&self) -> Route {
        Route::AddContact
    }

    /// Route of a row's edit action
    pub fn edit(&self, id: &ContactId) -> Route {
        Route::EditContact(id.clone())
    }

    /// Delete a row after the user confirms.
    ///
    /// The row is removed only once the store reports success.
    pub async fn delete(&mut self, id: &ContactId, confirm: &impl Confirm) -> DeleteOutcome {
        if !confirm.confirm(DELETE_PROMPT) {
            return DeleteOutcome::Declined;
        }

        match self.store.delete_by_id(id).await {
            Ok(()) => {
                if let ListState::Loaded(contacts) = &mut self.state {
                    contacts.retain(|contact| &contact.id != id);
                }
                DeleteOutcome::Deleted
            }
            Err(err) => {
                warn!("failed to delete contact {}: {}", id, err);
                DeleteOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing::{contact, Call, FakeStore};

    fn loaded_store() -> Arc<FakeStore> {
        Arc::new(FakeStore::with_contacts(vec![
            contact("a", "Ada"),
            contact("b", "Bob"),
            contact("c", "Cy"),
        ]))
    }

    #[tokio::test]
    async fn activate_loads_rows_in_store_order() {
        let store = loaded_store();
        let mut list = ContactList::new(store.clone());
        assert!(list.rows().is_empty());

        list.activate().await.unwrap();
        let names: Vec<_> = list.rows().iter().map(|c| c.record.name.as_str()).collect();
        assert_eq!(names, ["Ada", "Bob", "Cy"]);
        assert_eq!(store.calls(), vec![Call::FetchAll]);
    }

    #[tokio::test]
    async fn failed_fetch_looks_like_an_empty_list() {
        let store = Arc::new(FakeStore::failing());
        let mut list = ContactList::new(store);
        assert!(list.activate().await.is_err());
        assert_eq!(list.state(), &ListState::Loading);
        assert!(list.rows().is_empty());
    }

    #[tokio::test]
    async fn failed_refetch_clears_previous_rows() {
        let store = loaded_store();
        let mut list = ContactList::new(store.clone());
        list.activate().await.unwrap();
        assert_eq!(list.rows().len(), 3);

        store.fail_reads();
        assert!(list.activate().await.is_err());
        assert_eq!(list.state(), &ListState::Loading);
        assert!(list.rows().is_empty());
        assert_eq!(store.calls(), vec![Call::FetchAll, Call::FetchAll]);
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let store = loaded_store();
        let mut list = ContactList::new(store.clone());
        list.activate().await.unwrap();

        let outcome = list.delete(&ContactId::new("b"), &|_: &str| false).await;
        assert!(matches!(outcome, DeleteOutcome::Declined));
        assert_eq!(list.rows().len(), 3);
        assert_eq!(store.calls(), vec![Call::FetchAll]);
    }

    #[tokio::test]
    async fn confirmed_delete_removes_only_the_target() {
        let store = loaded_store();
        let mut list = ContactList::new(store.clone());
        list.activate().await.unwrap();

        let outcome = list
            .delete(&ContactId::new("b"), &|message: &str| message == DELETE_PROMPT)
            .await;
        assert!(matches!(outcome, DeleteOutcome::Deleted));
        let ids: Vec<_> = list.rows().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(
            store.calls(),
            vec![Call::FetchAll, Call::Delete(ContactId::new("b"))]
        );
    }

    #[tokio::test]
    async fn failed_delete_keeps_the_row() {
        let store = loaded_store();
        let mut list = ContactList::new(store.clone());
        list.activate().await.unwrap();
        store.fail_writes();

        let outcome = list.delete(&ContactId::new("a"), &|_: &str| true).await;
        assert!(matches!(outcome, DeleteOutcome::Failed(_)));
        assert_eq!(list.rows().len(), 3);
    }

    #[test]
    fn edit_and_add_routes() {
        let list = ContactList::new(loaded_store());
        assert_eq!(list.edit(&ContactId::new("a")).path(), "/edit/a");
        assert_eq!(list.add_route(), Route::AddContact);
        assert_eq!(list.title(), "Contact List");
    }
}
