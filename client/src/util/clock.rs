//! Wall-clock year for the footer copyright line.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current calendar year. The server's UTC year is the one rendered; the
/// hydrating client claims that text as-is.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        browser_year()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_wrap)]
fn browser_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}
