//! Input types for a scheduling query: calendar events and the meeting
//! request itself. Both are read-only for the engine and live only for the
//! duration of one query call.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::timerange::TimeRange;

/// A calendar event: when it happens and who attends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub time_range: TimeRange,
    pub attendees: HashSet<String>,
}

impl Event {
    pub fn new<I, S>(time_range: TimeRange, attendees: I) -> Event
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Event {
            time_range,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }
}

/// A request to schedule one meeting: who must be there and for how long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingRequest {
    pub mandatory_attendees: HashSet<String>,
    /// Required meeting length in minutes.
    pub duration: i32,
}

impl MeetingRequest {
    pub fn new<I, S>(mandatory_attendees: I, duration: i32) -> MeetingRequest
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MeetingRequest {
            mandatory_attendees: mandatory_attendees.into_iter().map(Into::into).collect(),
            duration,
        }
    }
}
