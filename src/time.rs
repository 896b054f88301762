use crate::error::ModelError;
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEPARTURE_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const BOOKING_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn parse_date(value: &str) -> Result<NaiveDate, ModelError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ModelError::InvalidDate(value.to_string()))
}

pub fn parse_departure(value: &str) -> Result<NaiveDateTime, ModelError> {
    NaiveDateTime::parse_from_str(value.trim(), DEPARTURE_FORMAT)
        .map_err(|_| ModelError::InvalidDateTime(value.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_departure(time: NaiveDateTime) -> String {
    time.format(DEPARTURE_FORMAT).to_string()
}

pub fn booking_timestamp() -> String {
    Local::now().format(BOOKING_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole years between `born` and `on`, counting the anniversary day itself.
pub fn years_between(born: NaiveDate, on: NaiveDate) -> i32 {
    let years = on.year() - born.year();
    if (on.month(), on.day()) < (born.month(), born.day()) {
        years - 1
    } else {
        years
    }
}
