pub mod checkin;
pub mod habit;
pub mod prefs;
pub mod schedule;
pub mod windows;
