/// The full persisted dataset: every month ever touched
///
/// On disk this is a single JSON object whose keys are month keys
/// (`2024_March`) plus one advisory `currentMonth` entry.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Month;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::calendar::{self, MONTHS};
use crate::domain::MonthRecord;

/// Key of the advisory pointer entry inside the stored object
const CURRENT_MONTH_KEY: &str = "currentMonth";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    /// Month records keyed by their canonical month key
    pub months: BTreeMap<String, MonthRecord>,
    /// Most recently active month key; advisory only
    pub current_month: Option<String>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn month(&self, year: i32, month: Month) -> Option<&MonthRecord> {
        self.months.get(&calendar::month_key(year, month))
    }

    pub fn month_mut(&mut self, year: i32, month: Month) -> Option<&mut MonthRecord> {
        self.months.get_mut(&calendar::month_key(year, month))
    }

    /// Insert or replace a record under its own key
    pub fn insert(&mut self, record: MonthRecord) {
        self.months.insert(record.key(), record);
    }

    /// Point the advisory `currentMonth` entry at the given month
    pub fn set_current(&mut self, year: i32, month: Month) {
        self.current_month = Some(calendar::month_key(year, month));
    }

    /// The advisory pointer, if present and well formed
    pub fn current(&self) -> Option<(i32, Month)> {
        self.current_month
            .as_deref()
            .and_then(calendar::parse_month_key)
    }

    /// Records stored for `year` with the month their key names, in calendar order
    pub fn year_records(&self, year: i32) -> impl Iterator<Item = (Month, &MonthRecord)> + '_ {
        MONTHS
            .iter()
            .filter_map(move |month| self.month(year, *month).map(|record| (*month, record)))
    }
}

// Month records and the pointer share one flat JSON object, so both
// directions walk the map by hand instead of deriving.
impl Serialize for Dataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.months.len() + usize::from(self.current_month.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (key, record) in &self.months {
            map.serialize_entry(key, record)?;
        }
        if let Some(current) = &self.current_month {
            map.serialize_entry(CURRENT_MONTH_KEY, current)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DatasetVisitor;

        impl<'de> Visitor<'de> for DatasetVisitor {
            type Value = Dataset;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an object of month records keyed by month key")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Dataset, A::Error> {
                let mut dataset = Dataset::default();
                while let Some(key) = access.next_key::<String>()? {
                    if key == CURRENT_MONTH_KEY {
                        dataset.current_month = access.next_value::<Option<String>>()?;
                    } else {
                        let record = access.next_value::<MonthRecord>()?;
                        dataset.months.insert(key, record);
                    }
                }
                Ok(dataset)
            }
        }

        deserializer.deserialize_map(DatasetVisitor)
    }
}
