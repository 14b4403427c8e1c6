pub mod day;
pub mod sheet;
pub mod snapshot;

pub use day::{upcoming_week, DaySlot, SCHEDULE_DAYS};
pub use sheet::{ConstraintSheet, DayConstraint, ProductConstraint, ProductUpdate, SaveSink};
pub use snapshot::{ConstraintSnapshot, DayRecord, ProductRecord};
