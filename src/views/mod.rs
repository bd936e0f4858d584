//! The two pages of the contact book, as state holders that talk to a
//! [`ContactStore`](crate::store::ContactStore) and answer with routes

mod form;
mod list;

pub use form::*;
pub use list::*;

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use crate::error::{ApiErrorDetails, Error, Result};
    use crate::models::{Contact, ContactId, ContactRecord};
    use crate::store::ContactStore;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        FetchAll,
        FetchOne(ContactId),
        Insert(ContactRecord),
        Update(ContactId, ContactRecord),
        Delete(ContactId),
    }

    /// In-memory store that records every call
    #[derive(Default)]
    pub struct FakeStore {
        contacts: Mutex<Vec<Contact>>,
        calls: Mutex<Vec<Call>>,
        fail_reads: AtomicBool,
        fail_writes: AtomicBool,
    }

    pub fn contact(id: &str, name: &str) -> Contact {
        Contact {
            id: ContactId::new(id),
            record: ContactRecord {
                name: name.to_string(),
                full_name: format!("{} Example", name),
                email: format!("{}@example.com", name.to_lowercase()),
                phone: "5551234".to_string(),
            },
        }
    }

    fn unavailable() -> Error {
        Error::Api {
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
            details: ApiErrorDetails::default(),
        }
    }

    impl FakeStore {
        pub fn with_contacts(contacts: Vec<Contact>) -> Self {
            Self {
                contacts: Mutex::new(contacts),
                ..Default::default()
            }
        }

        pub fn failing() -> Self {
            let store = Self::default();
            store.fail_reads.store(true, Ordering::SeqCst);
            store.fail_writes.store(true, Ordering::SeqCst);
            store
        }

        pub fn fail_reads(&self) {
            self.fail_reads.store(true, Ordering::SeqCst);
        }

        pub fn fail_writes(&self) {
            self.fail_writes.store(true, Ordering::SeqCst);
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn read(&self) -> Result<()> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(unavailable());
            }
            Ok(())
        }

        fn write(&self) -> Result<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(unavailable());
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ContactStore for FakeStore {
        async fn fetch_all(&self) -> Result<Vec<Contact>> {
            self.record(Call::FetchAll);
            self.read()?;
            Ok(self.contacts.lock().unwrap().clone())
        }

        async fn fetch_one(&self, id: &ContactId) -> Result<Option<Contact>> {
            self.record(Call::FetchOne(id.clone()));
            self.read()?;
            let contacts = self.contacts.lock().unwrap();
            Ok(contacts.iter().find(|c| &c.id == id).cloned())
        }

        async fn insert(&self, record: &ContactRecord) -> Result<ContactId> {
            self.record(Call::Insert(record.clone()));
            self.write()?;
            let mut contacts = self.contacts.lock().unwrap();
            let id = ContactId::new(format!("generated-{}", contacts.len() + 1));
            contacts.push(Contact {
                id: id.clone(),
                record: record.clone(),
            });
            Ok(id)
        }

        async fn update_by_id(&self, id: &ContactId, record: &ContactRecord) -> Result<()> {
            self.record(Call::Update(id.clone(), record.clone()));
            self.write()?;
            let mut contacts = self.contacts.lock().unwrap();
            match contacts.iter_mut().find(|c| &c.id == id) {
                Some(contact) => {
                    contact.record = record.clone();
                    Ok(())
                }
                None => Err(Error::Api {
                    status: reqwest::StatusCode::NOT_FOUND,
                    details: ApiErrorDetails::default(),
                }),
            }
        }

        async fn delete_by_id(&self, id: &ContactId) -> Result<()> {
            self.record(Call::Delete(id.clone()));
            self.write()?;
            self.contacts.lock().unwrap().retain(|c| &c.id != id);
            Ok(())
        }
    }
}
