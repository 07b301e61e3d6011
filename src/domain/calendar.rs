/// Calendar arithmetic used by the habit grid
///
/// Everything here is a pure function of a year and a month. Weeks are fixed
/// seven-day buckets counted from the 1st of the month, not weekday aligned:
/// day 8 is always in week 2 no matter which weekday it falls on.

use chrono::Month;

/// Number of week buckets a month is split into
pub const WEEKS_PER_MONTH: usize = 5;

/// The twelve canonical months in calendar order
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of calendar days in the given month
pub fn days_in_month(year: i32, month: Month) -> u32 {
    match month {
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// Week bucket (1-5) a day of the month belongs to: `ceil(day / 7)`, clamped
pub fn week_of_month(day: u32) -> u32 {
    let week = (day + 6) / 7;
    week.clamp(1, WEEKS_PER_MONTH as u32)
}

/// Day numbers falling in each of the five week buckets
pub fn week_days(days_in_month: u32) -> [Vec<u32>; WEEKS_PER_MONTH] {
    let mut weeks: [Vec<u32>; WEEKS_PER_MONTH] = Default::default();
    for day in 1..=days_in_month {
        weeks[week_of_month(day) as usize - 1].push(day);
    }
    weeks
}

/// Month from its zero-based index (0 = January)
pub fn month_from_index(index: u32) -> Option<Month> {
    MONTHS.get(index as usize).copied()
}

/// Month from its canonical English name, matched exactly ("March", not "march")
pub fn month_from_name(name: &str) -> Option<Month> {
    MONTHS.iter().copied().find(|month| month.name() == name)
}

/// Canonical key a month's record is stored under, e.g. `2024_March`
///
/// Previously saved data is looked up by this exact string, so the format
/// must never change.
pub fn month_key(year: i32, month: Month) -> String {
    format!("{}_{}", year, month.name())
}

/// Inverse of [`month_key`]
pub fn parse_month_key(key: &str) -> Option<(i32, Month)> {
    let (year, name) = key.split_once('_')?;
    let year = year.parse::<i32>().ok()?;
    let month = month_from_name(name)?;
    Some((year, month))
}

/// Serde adapter storing a [`Month`] as its canonical name
pub(crate) mod month_name {
    use chrono::Month;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(month.name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Month, D::Error> {
        let name = String::deserialize(deserializer)?;
        super::month_from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown month name '{}'", name)))
    }
}
