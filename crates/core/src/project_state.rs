//! Project lifecycle states.
//!
//! Each variant's discriminant matches the seed data order (1-based) in the
//! `project_states` lookup table. The set is a label for a project's
//! regulatory phase only; no transition rules exist between states.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::LookupId;

macro_rules! define_lookup_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident = $val:literal, $code:literal, $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $( $variant = $val ),+
        }

        impl $name {
            /// Every variant in id order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Return the database lookup ID.
            pub fn id(self) -> LookupId {
                self as LookupId
            }

            /// Resolve a database lookup ID. Unknown IDs yield `None`.
            pub fn from_id(id: LookupId) -> Option<Self> {
                match id {
                    $( $val => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// Stable upper-case code, as stored in `project_states.code`.
            pub fn code(self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            /// Display name shown to users.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl From<$name> for LookupId {
            fn from(value: $name) -> Self {
                value as LookupId
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $code => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "Unknown {} code '{other}'",
                        stringify!($name)
                    ))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

define_lookup_enum! {
    /// Regulatory phase of a project.
    ProjectState {
        PotentialWork = 1, "POTENTIAL_WORK", "Potential Work",
        PreWork = 2, "PRE_WORK", "Pre-Work",
        UnderWork = 3, "UNDER_WORK", "Under Work",
        WorkPending = 4, "WORK_PENDING", "Work Pending",
        UnderDisputeResolution = 5, "UNDER_DISPUTE_RESOLUTION", "Under Dispute Resolution",
        OtherWork = 6, "OTHER_WORK", "Other Work",
        ProjectWithdrawn = 7, "PROJECT_WITHDRAWN", "Project Withdrawn",
        ProjectTerminated = 8, "PROJECT_TERMINATED", "Project Terminated",
        EacExpired = 9, "EAC_EXPIRED", "EAC Expired",
        EacOrOrderCancelled = 10, "EAC_OR_ORDER_CANCELLED", "EAC or Order Cancelled",
        EacOrOrderSuspended = 11, "EAC_OR_ORDER_SUSPENDED", "EAC or Order Suspended",
        Indeterminate = 12, "INDETERMINATE", "Indeterminate",
        Preconstruction = 13, "PRECONSTRUCTION", "Pre-Construction",
        Construction = 14, "CONSTRUCTION", "Construction",
        Operation = 15, "OPERATION", "Operation",
        CareAndMaintenance = 16, "CARE_AND_MAINTENANCE", "Care and Maintenance",
        Decommissioning = 17, "DECOMMISSIONING", "Decommissioning",
        Closed = 18, "CLOSED", "Closed",
    }
}
