/// Tracker session: the active month and the in-memory dataset
///
/// A session is the explicit context every UI event goes through. It owns the
/// persistence handle and the loaded dataset, knows which month is active,
/// and flushes the dataset after every successful mutation.

use chrono::{Datelike, Local, Month};

use crate::analytics::{year_summary, MonthDashboard, YearReport};
use crate::domain::{calendar, Dataset, DomainError, Habit, MonthRecord};
use crate::storage::{KeyValueStore, Persistence, StorageError};
use crate::TrackerError;

/// How to pick the month a session starts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Month to open when not resuming
    pub start: (i32, Month),
    /// Prefer the stored `currentMonth` pointer over `start` when it is valid
    pub resume: bool,
}

impl SessionOptions {
    /// Start on the current local month, without resuming
    pub fn today() -> Self {
        let now = Local::now().date_naive();
        let month = calendar::month_from_index(now.month0()).unwrap_or(Month::January);
        Self {
            start: (now.year(), month),
            resume: false,
        }
    }
}

pub struct Session<S: KeyValueStore> {
    persistence: Persistence<S>,
    dataset: Dataset,
    year: i32,
    month: Month,
    load_error: Option<StorageError>,
}

impl<S: KeyValueStore> Session<S> {
    /// Load the dataset and activate the starting month
    ///
    /// A malformed stored document does not prevent opening; the session
    /// starts empty and the error is kept for [`Session::load_error`].
    pub fn open(persistence: Persistence<S>, options: SessionOptions) -> Self {
        let loaded = persistence.load();
        let (year, month) = if options.resume {
            loaded.dataset.current().unwrap_or(options.start)
        } else {
            options.start
        };

        tracing::info!(
            "Opened session on {} with {} stored month(s)",
            calendar::month_key(year, month),
            loaded.dataset.months.len()
        );

        Self {
            persistence,
            dataset: loaded.dataset,
            year,
            month,
            load_error: loaded.error,
        }
    }

    /// Active year and month
    pub fn active(&self) -> (i32, Month) {
        (self.year, self.month)
    }

    /// Month key of the active month
    pub fn active_key(&self) -> String {
        calendar::month_key(self.year, self.month)
    }

    pub fn days_in_month(&self) -> u32 {
        calendar::days_in_month(self.year, self.month)
    }

    /// Record of the active month, if one has been created
    pub fn record(&self) -> Option<&MonthRecord> {
        self.dataset.month(self.year, self.month)
    }

    /// Habits of the active month; empty when the month has no record
    pub fn habits(&self) -> &[Habit] {
        self.record().map(|r| r.habits.as_slice()).unwrap_or(&[])
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Error recovered from during the most recent load, if any
    pub fn load_error(&self) -> Option<&StorageError> {
        self.load_error.as_ref()
    }

    /// Switch the active month
    ///
    /// The dataset is flushed with the pointer already on the new month, then
    /// reloaded from the store so nothing stale carries over. Nothing is
    /// written after the reload. If the reload fails, the dataset that was
    /// just flushed stays in memory.
    pub fn select_month(&mut self, year: i32, month: Month) -> Result<(), TrackerError> {
        let previous = (self.year, self.month);
        self.year = year;
        self.month = month;

        if let Err(e) = self.flush() {
            (self.year, self.month) = previous;
            self.dataset.set_current(self.year, self.month);
            return Err(e);
        }

        let loaded = self.persistence.load();
        match loaded.error {
            Some(e) => {
                tracing::warn!("Reload after month switch failed, keeping in-memory data: {}", e);
                self.load_error = Some(e);
            }
            None => {
                self.dataset = loaded.dataset;
                self.dataset.set_current(self.year, self.month);
                self.load_error = None;
            }
        }

        tracing::info!(
            "Switched to {} ({} habit(s))",
            self.active_key(),
            self.habits().len()
        );
        Ok(())
    }

    /// Add a goal to the active month, creating the month's record if needed
    ///
    /// Returns the index of the new habit.
    pub fn add_habit(&mut self, name: &str) -> Result<usize, TrackerError> {
        self.commit(|dataset, year, month| match dataset.month_mut(year, month) {
            Some(record) => Ok(record.add_habit(name)?),
            None => {
                let mut record = MonthRecord::new(year, month);
                let index = record.add_habit(name)?;
                dataset.insert(record);
                Ok(index)
            }
        })
    }

    /// Remove the goal at `index` from the active month
    pub fn remove_habit(&mut self, index: usize) -> Result<Habit, TrackerError> {
        self.commit(|dataset, year, month| {
            Ok(active_record_mut(dataset, year, month, index)?.remove_habit(index)?)
        })
    }

    /// Flip one day of one goal in the active month
    ///
    /// Returns whether the day is now completed.
    pub fn toggle_completion(&mut self, index: usize, day: u32) -> Result<bool, TrackerError> {
        self.commit(|dataset, year, month| {
            Ok(active_record_mut(dataset, year, month, index)?.toggle_completion(index, day)?)
        })
    }

    /// Rendering data for the active month
    pub fn dashboard(&self, top_limit: usize) -> MonthDashboard {
        MonthDashboard::build(self.year, self.month, self.habits(), top_limit)
    }

    /// Year report built from the stored dataset, independent of the active month
    pub fn year_report(&self, year: i32) -> YearReport {
        let loaded = self.persistence.load();
        year_summary(&loaded.dataset, year)
    }

    /// Write the whole dataset, pointing `currentMonth` at the active month
    pub fn flush(&mut self) -> Result<(), TrackerError> {
        self.dataset.set_current(self.year, self.month);
        self.persistence.save(&self.dataset)?;
        Ok(())
    }

    /// Apply `change` to the active month and flush
    ///
    /// When the flush fails the active month's record is put back as it was,
    /// so a failed operation leaves no trace in memory either.
    fn commit<T, F>(&mut self, change: F) -> Result<T, TrackerError>
    where
        F: FnOnce(&mut Dataset, i32, Month) -> Result<T, TrackerError>,
    {
        let (year, month) = (self.year, self.month);
        let snapshot = self.dataset.month(year, month).cloned();

        let value = change(&mut self.dataset, year, month)?;

        if let Err(e) = self.flush() {
            tracing::warn!("Save failed, reverting {}: {}", self.active_key(), e);
            match snapshot {
                Some(record) => self.dataset.insert(record),
                None => {
                    self.dataset.months.remove(&calendar::month_key(year, month));
                }
            }
            return Err(e);
        }

        Ok(value)
    }
}

/// Record of `month` for an operation on habit `index`
///
/// A month without a record has no habits, so any index is out of range.
fn active_record_mut(
    dataset: &mut Dataset,
    year: i32,
    month: Month,
    index: usize,
) -> Result<&mut MonthRecord, TrackerError> {
    dataset
        .month_mut(year, month)
        .ok_or(TrackerError::Domain(DomainError::IndexOutOfRange { index, len: 0 }))
}
