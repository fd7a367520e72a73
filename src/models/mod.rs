pub mod event_kind;
pub mod record;
pub mod session;
