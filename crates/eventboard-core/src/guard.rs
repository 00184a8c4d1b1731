//! Authorization predicates.
//!
//! Pure functions over ids; callers decide which error kind a failed check maps to.

use crate::entities::Event;
use crate::error::DomainError;
use crate::value_objects::Snowflake;

#[inline]
pub fn is_authenticated(user_id: Option<Snowflake>) -> bool {
    user_id.is_some_and(|id| id.into_inner() > 0)
}

#[inline]
pub fn is_creator(event: &Event, user_id: Snowflake) -> bool {
    event.creator_id == user_id
}

pub fn require_creator(event: &Event, user_id: Snowflake) -> Result<(), DomainError> {
    if is_creator(event, user_id) {
        Ok(())
    } else {
        Err(DomainError::NotEventCreator)
    }
}
