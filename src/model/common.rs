use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

record_id!(
    /// Identity of a [`Team`](super::Team), e.g. `t1`.
    TeamId
);
record_id!(
    /// Identity of a [`Player`](super::Player), e.g. `p-t1-1`.
    PlayerId
);
record_id!(
    /// Identity of an [`AttendanceRecord`](super::AttendanceRecord).
    AttendanceId
);
record_id!(
    /// Identity of a [`ScheduleEvent`](super::ScheduleEvent).
    EventId
);
record_id!(
    /// Identity of a [`User`](super::User).
    UserId
);
