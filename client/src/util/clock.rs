//! Wall-clock helpers that work in the browser and during SSR.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current calendar year (UTC on the server, local time in the browser).
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        // `get_full_year` is a small positive integer; the cast cannot truncate.
        #[allow(clippy::cast_possible_wrap)]
        let year = js_sys::Date::new_0().get_full_year() as i32;
        year
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
