//! Event entity <-> model mapper

use eventboard_core::entities::{Event, EventStatus};
use eventboard_core::error::DomainError;
use eventboard_core::value_objects::Snowflake;

use crate::models::EventModel;
use crate::repositories::corrupt_value;

impl TryFrom<EventModel> for Event {
    type Error = DomainError;

    fn try_from(model: EventModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<EventStatus>()
            .map_err(|_| corrupt_value("events.status", &model.status))?;

        Ok(Event {
            id: Snowflake::new(model.id),
            name: model.name,
            description: model.description,
            location: model.location,
            virtual_link: model.virtual_link,
            is_virtual: model.is_virtual,
            start_date: model.start_date,
            end_date: model.end_date,
            capacity: model.capacity,
            requires_approval: model.requires_approval,
            status,
            creator_id: Snowflake::new(model.creator_id),
            version: model.version,
            is_deleted: model.is_deleted,
            deleted_at: model.deleted_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Convert a batch of rows, failing on the first unreadable one
pub fn events_from_models(models: Vec<EventModel>) -> Result<Vec<Event>, DomainError> {
    models.into_iter().map(Event::try_from).collect()
}
