// View Types
// Calendar view modes offered to the host

use serde::{Deserialize, Serialize};

/// Calendar view types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Month,
    Week,
}
