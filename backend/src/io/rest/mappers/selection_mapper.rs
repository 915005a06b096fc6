//! backend/src/io/rest/mappers/selection_mapper.rs
//!
//! Normalizes loosely formatted gesture payloads into domain selections before
//! the selector compares anything.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::domain::models::{PendingSelection, SlotValidationError};
use crate::domain::{SelectResult, SelectionSnapshot, SelectorState};
use shared::{
    PendingSelection as SharedPendingSelection, SelectSlotRequest, SelectSlotResponse,
    SelectionState, SelectionStateResponse,
};

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const ACCEPTED_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a wall-clock timestamp.
///
/// RFC 3339 values keep the local time at their own offset; the offset itself
/// is dropped because the calendar works in clinic-local time.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, SlotValidationError> {
    let value = value.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Ok(with_offset.naive_local());
    }
    ACCEPTED_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| SlotValidationError::InvalidTimestamp(value.to_string()))
}

/// Parse a `YYYY-MM-DD` date, or `YYYY-MM` meaning the first of that month
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d"))
        .ok()
}

pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

pub struct SelectionMapper;

impl SelectionMapper {
    /// Converts a gesture payload into a validated domain selection.
    pub fn to_domain(request: &SelectSlotRequest) -> Result<PendingSelection, SlotValidationError> {
        let start = parse_timestamp(&request.start)?;
        let end = parse_timestamp(&request.end)?;
        PendingSelection::new(start, end, request.resource_id)
    }

    pub fn to_dto(domain: &PendingSelection) -> SharedPendingSelection {
        SharedPendingSelection {
            start: format_timestamp(&domain.start),
            end: format_timestamp(&domain.end),
            resource_id: domain.resource_id,
        }
    }

    pub fn to_select_response(result: SelectResult) -> SelectSlotResponse {
        SelectSlotResponse {
            outcome: result.outcome,
            pending: Self::to_dto(&result.pending),
            dialog_open: result.dialog_open,
            summary: result.summary,
        }
    }

    pub fn to_state_response(snapshot: SelectionSnapshot) -> SelectionStateResponse {
        let (state, pending) = match snapshot.state {
            SelectorState::Idle => (SelectionState::Idle, None),
            SelectorState::Highlighted(pending) => {
                (SelectionState::Highlighted, Some(Self::to_dto(&pending)))
            }
            SelectorState::Confirmed(pending) => {
                (SelectionState::Confirmed, Some(Self::to_dto(&pending)))
            }
        };
        SelectionStateResponse {
            state,
            pending,
            dialog_open: snapshot.dialog_open,
            summary: snapshot.summary,
        }
    }
}
