//! Model -> response mappers

use auth_db::UserModel;

use crate::responses::UserResponse;

/// Convert UserModel to the outbound user payload
///
/// Explicit field-by-field mapping: the password hash and any column added
/// later stay out of the response unless someone puts them here.
impl From<UserModel> for UserResponse {
    fn from(model: UserModel) -> Self {
        Self {
            id: model.id,
            email: model.email,
        }
    }
}
