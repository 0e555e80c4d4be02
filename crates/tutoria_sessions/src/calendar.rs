// --- File: crates/tutoria_sessions/src/calendar.rs ---
//! Bridges the session store into the cross-feature `SessionCalendar` seam
//! the availability engine consumes.

use chrono::NaiveDate;
use tracing::warn;
use tutoria_common::services::{BoxFuture, BoxedError, SessionCalendar};
use tutoria_db::SessionRepository;

/// Exposes a session repository's booked dates as a `SessionCalendar`.
pub struct SessionCalendarAdapter<R> {
    repo: R,
}

impl<R> SessionCalendarAdapter<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R> SessionCalendar for SessionCalendarAdapter<R>
where
    R: SessionRepository + Send + Sync,
{
    type Error = BoxedError;

    fn booked_dates(
        &self,
        tutor_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> BoxFuture<'_, Vec<NaiveDate>, Self::Error> {
        let tutor_id = tutor_id.to_string();
        let from = from.format("%Y-%m-%d").to_string();
        let to = to.format("%Y-%m-%d").to_string();
        Box::pin(async move {
            let raw = self
                .repo
                .booked_dates(&tutor_id, &from, &to)
                .await
                .map_err(|e| BoxedError(Box::new(e)))?;
            // Rows come from our own writes; anything unparsable is skipped
            // with a warning rather than poisoning the whole lookup.
            let dates = raw
                .iter()
                .filter_map(|value| match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
                    Ok(date) => Some(date),
                    Err(_) => {
                        warn!("Skipping unparsable booked date {value:?}");
                        None
                    }
                })
                .collect();
            Ok(dates)
        })
    }
}
