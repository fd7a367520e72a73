pub mod clock;
pub mod date;
pub mod duration;
pub mod path;
pub mod time;
