//! User entity <-> model mapper

use eventboard_core::entities::{AuthProvider, User};
use eventboard_core::value_objects::Snowflake;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            provider: AuthProvider::from_str_lossy(&model.provider),
            google_id: model.google_id,
            created_at: model.created_at,
        }
    }
}
