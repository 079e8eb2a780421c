//! Upcoming/past partitioning of shows
//!
//! A show is *upcoming* when it starts strictly after `now` and *past* when it
//! starts strictly before. A show starting exactly at `now` is in neither
//! bucket. Nothing here is cached: callers pass the read-time clock on every
//! call.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Anything with a show start time
pub trait Scheduled {
    fn start_time(&self) -> NaiveDateTime;
}

impl Scheduled for NaiveDateTime {
    fn start_time(&self) -> NaiveDateTime {
        *self
    }
}

impl<T: Scheduled> Scheduled for &T {
    fn start_time(&self) -> NaiveDateTime {
        (*self).start_time()
    }
}

/// Shows split into upcoming and past relative to one instant
#[derive(Debug, Clone, Serialize)]
pub struct ShowSchedule<T> {
    pub upcoming: Vec<T>,
    pub past: Vec<T>,
}

impl<T: Scheduled> ShowSchedule<T> {
    /// Partition `shows` against `now`, preserving input order in each bucket
    pub fn partition<I>(shows: I, now: NaiveDateTime) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut upcoming = Vec::new();
        let mut past = Vec::new();
        for show in shows {
            let start = show.start_time();
            if start > now {
                upcoming.push(show);
            } else if start < now {
                past.push(show);
            }
        }
        Self { upcoming, past }
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    pub fn past_count(&self) -> usize {
        self.past.len()
    }
}

/// Number of shows starting strictly after `now`
pub fn count_upcoming<I>(shows: I, now: NaiveDateTime) -> usize
where
    I: IntoIterator,
    I::Item: Scheduled,
{
    shows
        .into_iter()
        .filter(|show| show.start_time() > now)
        .count()
}
