//! Browser wall-clock access.

use chrono::NaiveDateTime;

/// Current local time, from the browser clock. `None` outside a browser,
/// where nothing time-sensitive renders anyway.
#[cfg(feature = "hydrate")]
pub fn now_local() -> Option<NaiveDateTime> {
    let date = js_sys::Date::new_0();
    let day = chrono::NaiveDate::from_ymd_opt(
        date.get_full_year() as i32,
        date.get_month() + 1,
        date.get_date(),
    )?;
    day.and_hms_opt(date.get_hours(), date.get_minutes(), date.get_seconds())
}

#[cfg(not(feature = "hydrate"))]
pub fn now_local() -> Option<NaiveDateTime> {
    None
}
