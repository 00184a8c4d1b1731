//! Event application entity <-> model mapper

use eventboard_core::entities::{ApplicationStatus, EventApplication};
use eventboard_core::error::DomainError;
use eventboard_core::value_objects::Snowflake;

use crate::models::ApplicationModel;
use crate::repositories::corrupt_value;

impl TryFrom<ApplicationModel> for EventApplication {
    type Error = DomainError;

    fn try_from(model: ApplicationModel) -> Result<Self, Self::Error> {
        let status = model
            .status
            .parse::<ApplicationStatus>()
            .map_err(|_| corrupt_value("event_applications.status", &model.status))?;

        Ok(EventApplication {
            id: Snowflake::new(model.id),
            event_id: Snowflake::new(model.event_id),
            user_id: Snowflake::new(model.user_id),
            status,
            applied_at: model.applied_at,
            reviewed_at: model.reviewed_at,
            reviewed_by_id: model.reviewed_by_id.map(Snowflake::new),
        })
    }
}

pub fn applications_from_models(
    models: Vec<ApplicationModel>,
) -> Result<Vec<EventApplication>, DomainError> {
    models.into_iter().map(EventApplication::try_from).collect()
}
