use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventKind {
    #[serde(rename = "TIME_IN")]
    TimeIn,
    #[serde(rename = "TIME_OUT")]
    TimeOut,
}

impl EventKind {
    /// Tag as stored in the `event` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::TimeIn => "TIME_IN",
            EventKind::TimeOut => "TIME_OUT",
        }
    }

    /// Tag from the `event` column. Matching is exact: the log is machine-written.
    pub fn from_log_str(s: &str) -> Option<Self> {
        match s {
            "TIME_IN" => Some(EventKind::TimeIn),
            "TIME_OUT" => Some(EventKind::TimeOut),
            _ => None,
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventKind::TimeIn)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, EventKind::TimeOut)
    }
}
