use chrono::{Local, NaiveDate};


pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Source of "today" for every day-keyed record.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;

    fn today_key(&self) -> String {
        date_key(self.today())
    }
}

/// Local calendar day of the host.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}
