//! Default schedules of the background jobs.

use chrono_tz::Tz;

/// Weekly breach notification sweep
pub mod sweep {
    use super::*;

    /// Cron expression of the weekly breach notification sweep
    /// Runs every Sunday at 20:00
    pub const CRON_EXPRESSION: &str = "0 0 20 * * Sun";

    /// Timezone the sweep cron expression is evaluated in
    pub const TIMEZONE: Tz = chrono_tz::America::Sao_Paulo;
}
