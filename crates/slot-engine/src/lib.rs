//! # slot-engine
//!
//! Free-time finder for meeting scheduling. Given a day's worth of calendar
//! events (each a time range plus an attendee set) and a meeting request
//! (mandatory attendees plus a duration), compute every range in the day
//! during which the meeting could be held without conflicting with an event
//! any mandatory attendee is committed to.
//!
//! The computation is a pipeline of four pure stages, one module each:
//!
//! - [`conflict`] — filter events to those a mandatory attendee must attend
//! - [`normalize`] — sort and merge the conflicting ranges into a minimal
//!   non-overlapping busy schedule
//! - [`gaps`] — walk the busy schedule and emit the free ranges between
//!   conflicts and the day bounds
//! - [`query`] — run the whole pipeline and keep gaps long enough for the
//!   requested duration
//!
//! Supporting modules:
//!
//! - [`timerange`] — the `TimeRange` value type and its ordering
//! - [`event`] — `Event` and `MeetingRequest` inputs
//! - [`error`] — error types
//!
//! No stage mutates its input; each query allocates its own intermediate
//! sequences, so concurrent queries over a shared event slice need no
//! coordination. All times are whole minutes from the start of one abstract
//! day, `[0, 1440)` — there are no time zones here.

pub mod conflict;
pub mod error;
pub mod event;
pub mod gaps;
pub mod normalize;
pub mod query;
pub mod timerange;

pub use conflict::conflicting_ranges;
pub use error::SlotError;
pub use event::{Event, MeetingRequest};
pub use gaps::free_gaps;
pub use normalize::normalize;
pub use query::find_meeting_times;
pub use timerange::TimeRange;
