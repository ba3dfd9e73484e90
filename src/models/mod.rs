pub mod clock_event;
pub mod date_range;
pub mod day_record;
pub mod day_state;
pub mod week_bucket;
pub mod week_summary;
