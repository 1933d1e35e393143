use std::fmt;

use abi::{ReservationError, RoomId};
use chrono::{Duration, NaiveDate};
use reservation::Rsvp;

/// env var naming the config file when none is given on the command line
pub const CONFIG_ENV: &str = "RESERVATION_CONFIG";

const DEFAULT_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/config.yml");

/// First positional argument, then `RESERVATION_CONFIG`, then the bundled sample.
pub fn config_path(args: &[String], from_env: Option<String>) -> String {
    args.iter()
        .find(|a| !a.starts_with("--"))
        .cloned()
        .or(from_env)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string())
}

/// What the hotel looks like over the next `days` days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    /// room offered for a one-night stay starting tomorrow
    pub tomorrow: Option<RoomId>,
    pub fully_occupied: Vec<NaiveDate>,
}

pub async fn availability_report<M>(
    manager: &M,
    today: NaiveDate,
    days: i64,
) -> Result<AvailabilityReport, ReservationError>
where
    M: Rsvp + Sync,
{
    let from = today + Duration::days(1);
    let to = today + Duration::days(days.max(1));

    let tomorrow = manager.find_available_room(from, from).await?;
    let fully_occupied = manager.get_fully_occupied_dates(from, to).await?;

    Ok(AvailabilityReport {
        from,
        to,
        tomorrow,
        fully_occupied,
    })
}

impl fmt::Display for AvailabilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "availability {} .. {}", self.from, self.to)?;
        match self.tomorrow {
            Some(room) => writeln!(f, "  tomorrow: room {room}")?,
            None => writeln!(f, "  tomorrow: no room available")?,
        }
        if self.fully_occupied.is_empty() {
            write!(f, "  fully occupied: none")
        } else {
            let dates: Vec<String> = self.fully_occupied.iter().map(|d| d.to_string()).collect();
            write!(f, "  fully occupied: {}", dates.join(", "))
        }
    }
}
