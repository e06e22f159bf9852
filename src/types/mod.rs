pub mod record;
pub mod workout;
