//! The add / edit contact page

use log::{debug, warn};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::ContactRecord;
use crate::routes::{FormMode, Route};
use crate::store::ContactStore;
use crate::validation::{self, Field, FieldError, FieldErrors};

/// What a submit attempt led to
#[derive(Debug)]
pub enum SubmitOutcome {
    /// At least one field is invalid; the store was not called
    Invalid(FieldErrors),
    /// The write went through; go to the returned route
    Saved(Route),
    /// The write failed; the form stays where it is
    Failed(Error),
}

/// Dual-mode contact form
pub struct ContactForm<S: ContactStore> {
    store: Arc<S>,
    mode: FormMode,
    values: ContactRecord,
    errors: FieldErrors,
    submitted: bool,
}

impl<S: ContactStore> ContactForm<S> {
    /// An empty form; call [`activate`](Self::activate) to load an edited record
    pub fn new(store: Arc<S>, mode: FormMode) -> Self {
        Self {
            store,
            mode,
            values: ContactRecord::default(),
            errors: FieldErrors::new(),
            submitted: false,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Contact",
            FormMode::Edit(_) => "Edit Contact",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Contact",
            FormMode::Edit(_) => "Save",
        }
    }

    pub fn values(&self) -> &ContactRecord {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        field.get(&self.values)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Message shown beneath a field, if any
    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Pre-populate the form in edit mode.
    ///
    /// A missing record or a failed fetch leaves the form empty; the failure
    /// is handed back for the caller to log.
    pub async fn activate(&mut self) -> Result<()> {
        let FormMode::Edit(id) = &self.mode else {
            return Ok(());
        };

        match self.store.fetch_one(id).await {
            Ok(Some(contact)) => {
                self.values = contact.record;
                Ok(())
            }
            Ok(None) => {
                debug!("contact {} not found, form stays empty", id);
                self.values = ContactRecord::default();
                Ok(())
            }
            Err(err) => {
                warn!("failed to load contact {}: {}", id, err);
                self.values = ContactRecord::default();
                Err(err)
            }
        }
    }

    /// Edit one field.
    ///
    /// Phone input goes through the live filter. After the first submit
    /// attempt the edited field is re-validated on every change.
    pub fn set_field(&mut self, field: Field, input: &str) {
        let value = match field {
            Field::Phone => validation::filter_phone_input(input),
            _ => input.to_string(),
        };
        *field.get_mut(&mut self.values) = value;

        if self.submitted {
            match validation::validate_field(field, field.get(&self.values)) {
                Some(error) => self.errors.insert(field, error),
                None => self.errors.remove(&field),
            };
        }
    }

    /// Validate, then insert or update depending on the mode
    pub async fn submit(&mut self) -> SubmitOutcome {
        self.submitted = true;
        self.errors = validation::validate(&self.values);
        if !self.errors.is_empty() {
            return SubmitOutcome::Invalid(self.errors.clone());
        }

        let written = match &self.mode {
            FormMode::Create => self.store.insert(&self.values).await.map(|id| {
                debug!("created contact {}", id);
            }),
            FormMode::Edit(id) => self.store.update_by_id(id, &self.values).await,
        };

        match written {
            Ok(()) => SubmitOutcome::Saved(Route::ContactList),
            Err(err) => {
                warn!("failed to save contact: {}", err);
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Leave without saving
    pub fn cancel(&self) -> Route {
        Route::ContactList
    }
}
