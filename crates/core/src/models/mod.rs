pub mod availability;
pub mod day;
pub mod profile;
pub mod slot;
pub mod time;

pub use availability::SlotCandidate;
pub use day::DayOfWeek;
pub use slot::WeeklySlot;
pub use time::TimeOfDay;
