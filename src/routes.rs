//! Navigation surface: the list route and the parameterized form route

use std::fmt;

use crate::models::ContactId;

/// Whether the contact form creates a new record or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ContactId),
}

/// A page the user can be sent to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Entry point, `/`
    ContactList,
    /// Form in create mode, `/add`
    AddContact,
    /// Form in edit mode, `/edit/{id}`
    EditContact(ContactId),
}

impl Route {
    /// Parse a path; unknown paths give `None`
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::ContactList),
            "/add" => Some(Route::AddContact),
            _ => {
                let id = trimmed.strip_prefix("/edit/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Some(Route::EditContact(ContactId::new(id)))
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::ContactList => "/".to_string(),
            Route::AddContact => "/add".to_string(),
            Route::EditContact(id) => format!("/edit/{}", id),
        }
    }

    /// Mode of the form page; `None` for the list
    pub fn form_mode(&self) -> Option<FormMode> {
        match self {
            Route::ContactList => None,
            Route::AddContact => Some(FormMode::Create),
            Route::EditContact(id) => Some(FormMode::Edit(id.clone())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
