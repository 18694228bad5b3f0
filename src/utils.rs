use anyhow::Context;
use chrono::{DateTime, NaiveDateTime};

pub fn parse_time_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveDateTime> {
    const TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";
    const TIME_FMT_SPECIAL: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

    let s = s.as_ref();
    if let Some('Z') = s.chars().last() {
        NaiveDateTime::parse_from_str(s, TIME_FMT_SPECIAL)
            .with_context(|| format!("Wrong time format '{}'", s))
    } else {
        DateTime::parse_from_str(s, TIME_FMT)
            .with_context(|| format!("Wrong time format '{}'", s))
            .map(|t| t.naive_utc())
    }
}

pub fn format_time_str(time: &NaiveDateTime) -> String {
    const TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S";

    format!("{}+00:00", time.format(TIME_FMT))
}
