use time::PrimitiveDateTime;

use crate::error::ApiError;
use crate::events::{datetime, dto::EventBody};

/// A validated, normalized event payload ready for persistence. The
/// owning user id is injected by the caller from the authenticated
/// request context, never taken from client input.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub start_time: PrimitiveDateTime,
    pub end_time: PrimitiveDateTime,
    pub reminder: bool,
    pub reminder_time: Option<PrimitiveDateTime>,
}

/// Field presence and temporal ordering checks, applied identically on
/// the create and update paths.
pub fn validate(body: EventBody) -> Result<NewEvent, ApiError> {
    let title = body.title.as_deref().unwrap_or("").trim();
    if title.is_empty() {
        return Err(ApiError::invalid("Title is required."));
    }

    let start_time = parse_required(body.start_time.as_deref());
    let end_time = parse_required(body.end_time.as_deref());
    let (Some(start_time), Some(end_time)) = (start_time, end_time) else {
        return Err(ApiError::invalid("Start time and end time are required."));
    };

    if start_time > end_time {
        return Err(ApiError::invalid("End time must be after start time."));
    }

    let reminder_time = match body.reminder_time.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            datetime::parse(raw)
                .map_err(|_| ApiError::invalid("Reminder time is not a valid time."))?,
        ),
    };

    let description = body
        .description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_owned);

    Ok(NewEvent {
        title: title.to_owned(),
        description,
        start_time,
        end_time,
        reminder: body.reminder.unwrap_or(false),
        reminder_time,
    })
}

fn parse_required(raw: Option<&str>) -> Option<PrimitiveDateTime> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| datetime::parse(s).ok())
}
