pub mod event;
pub mod program;
pub mod report;
pub mod user;

pub use event::{Batch, Event, EventStatus, PersistedEvent};
pub use program::{PeriodKind, Program};
pub use report::{ALL_ERROR_CODES, ErrorCode, ErrorReport, ValidationReport};
pub use user::{Authority, User};
