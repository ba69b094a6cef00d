//! Editable user list of the panel page.

use std::fmt;
use std::sync::Arc;

use busybee_api_types::{
    CreatedResponse, SuccessResponse, UserCreateRequest, UserDeleteRequest, UserId,
    UserUpdateRequest, paths,
};
use tracing::{debug, info};

use crate::application::context::PageContext;
use crate::application::error::PanelError;
use crate::application::notice::{Notice, NoticeBoard};
use crate::application::transport::{PanelTransport, post};
use crate::domain::users::{NEW_USER_HEADER, UserFields, UserRecord};

/// Local handle of a row; unsaved rows have no server id to address them by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(u64);

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct UserRow {
    key: RowKey,
    record: UserRecord,
    header: String,
}

impl UserRow {
    pub fn key(&self) -> RowKey {
        self.key
    }

    pub fn record(&self) -> &UserRecord {
        &self.record
    }

    /// Text of the collapsible header.
    pub fn header(&self) -> &str {
        &self.header
    }
}

pub struct UserListController {
    ctx: Arc<PageContext>,
    transport: Arc<dyn PanelTransport>,
    notices: NoticeBoard,
    rows: Vec<UserRow>,
    next_key: u64,
}

impl UserListController {
    pub fn new(
        ctx: Arc<PageContext>,
        transport: Arc<dyn PanelTransport>,
        users: impl IntoIterator<Item = (UserId, UserFields)>,
    ) -> Self {
        let mut controller = Self {
            ctx,
            transport,
            notices: NoticeBoard::new(),
            rows: Vec::new(),
            next_key: 0,
        };
        for (id, fields) in users {
            let header = fields.full_name();
            controller.push_row(UserRecord::Persisted { id, fields }, header);
        }
        controller
    }

    pub fn rows(&self) -> &[UserRow] {
        &self.rows
    }

    pub fn row(&self, key: RowKey) -> Option<&UserRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    pub fn fields_mut(&mut self, key: RowKey) -> Result<&mut UserFields, PanelError> {
        let index = self.index_of(key)?;
        Ok(self.rows[index].record.fields_mut())
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    /// Append an unsaved row; it reaches the server on its first update.
    pub fn add_user(&mut self) -> RowKey {
        let key = self.push_row(UserRecord::draft(), NEW_USER_HEADER.to_string());
        debug!(row = %key, "added local user row");
        key
    }

    /// Save a row. Unsaved rows are created instead of updated.
    pub async fn update_user(&mut self, key: RowKey) -> Result<UserId, PanelError> {
        let index = self.index_of(key)?;
        let UserRecord::Persisted { id, fields } = self.rows[index].record.clone() else {
            return self.create_user(index).await;
        };

        self.notices.push(Notice::info("Updating user."));
        let request = UserUpdateRequest {
            csrf_secret: self.ctx.security_token.clone(),
            id,
            email: fields.email,
            password: fields.password,
            fname: fields.first_name,
            lname: fields.last_name,
            privileges: fields.privileges,
        };
        let result = post::<_, SuccessResponse>(
            self.transport.as_ref(),
            paths::USER_UPDATE,
            &request,
        )
        .await;

        match super::settle(paths::USER_UPDATE, result) {
            Ok(_) => {
                let row = &mut self.rows[index];
                row.header = row.record.fields().full_name();
                self.notices
                    .replace(Notice::success("Successfully updated user."));
                info!(user_id = id, "updated user");
                Ok(id)
            }
            Err(error) => {
                self.notices.replace(Notice::error(
                    "Error updating user, refresh the page.",
                ));
                Err(error)
            }
        }
    }

    async fn create_user(&mut self, index: usize) -> Result<UserId, PanelError> {
        let fields = self.rows[index].record.fields().clone();

        self.notices.push(Notice::info("Adding new user."));
        let request = UserCreateRequest {
            csrf_secret: self.ctx.security_token.clone(),
            email: fields.email,
            password: fields.password,
            fname: fields.first_name,
            lname: fields.last_name,
            privileges: fields.privileges,
        };
        let result = post::<_, CreatedResponse<UserId>>(
            self.transport.as_ref(),
            paths::USER_NEW,
            &request,
        )
        .await;

        let created = super::settle(paths::USER_NEW, result)
            .and_then(|response| super::created_id(paths::USER_NEW, response));
        match created {
            Ok(id) => {
                let row = &mut self.rows[index];
                let record = std::mem::replace(&mut row.record, UserRecord::draft());
                row.record = record.persisted(id);
                row.header = row.record.fields().full_name();
                self.notices
                    .replace(Notice::success("Successfully added new user."));
                info!(user_id = id, "created user");
                Ok(id)
            }
            Err(error) => {
                self.notices.replace(Notice::error(
                    "Error adding new user, refresh the page.",
                ));
                Err(error)
            }
        }
    }

    /// Remove a row. Unsaved rows disappear without a request.
    pub async fn delete_user(&mut self, key: RowKey) -> Result<(), PanelError> {
        let index = self.index_of(key)?;
        self.notices.push(Notice::info("Deleting user."));

        let Some(id) = self.rows[index].record.id() else {
            self.rows.remove(index);
            self.notices
                .replace(Notice::success("Successfully deleted user."));
            debug!(row = %key, "dropped local user row");
            return Ok(());
        };

        let request = UserDeleteRequest {
            csrf_secret: self.ctx.security_token.clone(),
            id,
        };
        let result = post::<_, SuccessResponse>(
            self.transport.as_ref(),
            paths::USER_DELETE,
            &request,
        )
        .await;

        match super::settle(paths::USER_DELETE, result) {
            Ok(_) => {
                self.rows.remove(index);
                self.notices
                    .replace(Notice::success("Successfully deleted user."));
                info!(user_id = id, "deleted user");
                Ok(())
            }
            Err(error) => {
                self.notices.replace(Notice::error(
                    "Error deleting user, refresh the page.",
                ));
                Err(error)
            }
        }
    }

    fn push_row(&mut self, record: UserRecord, header: String) -> RowKey {
        let key = RowKey(self.next_key);
        self.next_key += 1;
        self.rows.push(UserRow {
            key,
            record,
            header,
        });
        key
    }

    fn index_of(&self, key: RowKey) -> Result<usize, PanelError> {
        self.rows
            .iter()
            .position(|row| row.key == key)
            .ok_or(PanelError::UnknownRow(key))
    }
}
