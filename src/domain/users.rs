//! Account records as the panel edits them.

use busybee_api_types::{Privileges, UserId};

pub const NEW_USER_HEADER: &str = "New User";

/// Editable fields of one user row. An empty password leaves it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserFields {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub privileges: Privileges,
}

impl UserFields {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A user row is either a local draft or a record the server knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRecord {
    Unsaved { draft: UserFields },
    Persisted { id: UserId, fields: UserFields },
}

impl UserRecord {
    pub fn draft() -> Self {
        Self::Unsaved {
            draft: UserFields::default(),
        }
    }

    pub fn id(&self) -> Option<UserId> {
        match self {
            Self::Unsaved { .. } => None,
            Self::Persisted { id, .. } => Some(*id),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Unsaved { .. })
    }

    pub fn fields(&self) -> &UserFields {
        match self {
            Self::Unsaved { draft } => draft,
            Self::Persisted { fields, .. } => fields,
        }
    }

    pub fn fields_mut(&mut self) -> &mut UserFields {
        match self {
            Self::Unsaved { draft } => draft,
            Self::Persisted { fields, .. } => fields,
        }
    }

    /// Attach the identifier the server assigned on creation.
    pub fn persisted(self, id: UserId) -> Self {
        match self {
            Self::Unsaved { draft } => Self::Persisted { id, fields: draft },
            Self::Persisted { fields, .. } => Self::Persisted { id, fields },
        }
    }
}

/// The signed-in account's own settings form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsFields {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drafts_default_to_parent_privileges() {
        let record = UserRecord::draft();
        assert!(record.is_local());
        assert_eq!(record.id(), None);
        assert_eq!(record.fields().privileges, Privileges::Parent);
    }

    #[test]
    fn persisting_keeps_draft_fields() {
        let mut record = UserRecord::draft();
        record.fields_mut().first_name = "Ada".into();
        record.fields_mut().last_name = "Lovelace".into();

        let record = record.persisted(12);
        assert!(!record.is_local());
        assert_eq!(record.id(), Some(12));
        assert_eq!(record.fields().full_name(), "Ada Lovelace");
    }
}
