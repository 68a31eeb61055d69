const MS_PER_DAY: i64 = 86_400_000;

/// Largest absolute time value a Date can hold (±100,000,000 days).
const MAX_TIME: f64 = 8.64e15;

/// Formats epoch milliseconds like `Date.prototype.toISOString`.
///
/// Returns `None` for an invalid date (non-finite or out of range).
pub fn iso_string(millis: f64) -> Option<String> {
    if !millis.is_finite() || millis.abs() > MAX_TIME {
        return None;
    }
    let millis = millis.trunc() as i64;
    let days = millis.div_euclid(MS_PER_DAY);
    let ms_of_day = millis.rem_euclid(MS_PER_DAY);
    let (year, month, day) = civil_from_days(days);

    let hours = ms_of_day / 3_600_000;
    let minutes = ms_of_day / 60_000 % 60;
    let seconds = ms_of_day / 1000 % 60;
    let ms = ms_of_day % 1000;

    let year = if (0..=9999).contains(&year) {
        format!("{:04}", year)
    } else {
        format!("{}{:06}", if year < 0 { '-' } else { '+' }, year.abs())
    };
    Some(format!(
        "{}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        year, month, day, hours, minutes, seconds, ms
    ))
}

/// Converts days since 1970-01-01 into a proleptic Gregorian (year, month, day).
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
