use chrono::NaiveDateTime;

/// A time range on one room that the receptionist has clicked but not yet booked.
///
/// Construction goes through [`PendingSelection::new`] so every value held by the
/// selector already satisfies `start < end`. Equality is exact on all fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingSelection {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub resource_id: u32,
}

impl PendingSelection {
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        resource_id: u32,
    ) -> Result<Self, SlotValidationError> {
        if start >= end {
            return Err(SlotValidationError::EmptyTimeRange { start, end });
        }
        Ok(Self {
            start,
            end,
            resource_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotValidationError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("Slot must end after it starts ({start} - {end})")]
    EmptyTimeRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("Unknown consulting room: {0}")]
    UnknownRoom(u32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_range() {
        let result = PendingSelection::new(at(10), at(9), 1);
        assert_eq!(
            result,
            Err(SlotValidationError::EmptyTimeRange {
                start: at(10),
                end: at(9)
            })
        );
    }

    #[test]
    fn test_new_rejects_zero_length_range() {
        assert!(PendingSelection::new(at(9), at(9), 1).is_err());
    }
}
