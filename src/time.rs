use hifitime::{Epoch, TimeScale};

use crate::constants::MJD;
use crate::flyby_errors::FlybyError;

/// Month number from the three-letter abbreviation used by the CAD API (`Jan`..`Dec`).
fn month_number(abbrev: &str) -> Option<u8> {
    match abbrev {
        "Jan" => Some(1),
        "Feb" => Some(2),
        "Mar" => Some(3),
        "Apr" => Some(4),
        "May" => Some(5),
        "Jun" => Some(6),
        "Jul" => Some(7),
        "Aug" => Some(8),
        "Sep" => Some(9),
        "Oct" => Some(10),
        "Nov" => Some(11),
        "Dec" => Some(12),
        _ => None,
    }
}

/// Transformation from a close-approach date in the format YYYY-Mon-DD HH:MM (UTC frame)
/// to modified julian date (MJD)
///
/// Argument
/// --------
/// * `date`: a string representing the date in the format YYYY-Mon-DD HH:MM, e.g. `"2029-Apr-13 21:46"`
///
/// Return
/// ------
/// * a float representing the input date in modified julian date (MJD), UTC frame
pub fn approach_date_to_mjd(date: &str) -> Result<MJD, FlybyError> {
    let invalid = || FlybyError::InvalidApproachDate(date.to_string());

    let parts: Vec<&str> = date.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(invalid());
    }

    let date_parts: Vec<&str> = parts[0].split('-').collect();
    if date_parts.len() != 3 {
        return Err(invalid());
    }

    let year: i32 = date_parts[0].parse().map_err(|_| invalid())?;
    let month = month_number(date_parts[1]).ok_or_else(invalid)?;
    let day: u8 = date_parts[2].parse().map_err(|_| invalid())?;
    if day == 0 || day > 31 {
        return Err(invalid());
    }

    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if time_parts.len() != 2 {
        return Err(invalid());
    }
    let hour: u8 = time_parts[0].parse().map_err(|_| invalid())?;
    let minute: u8 = time_parts[1].parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    let epoch = Epoch::maybe_from_gregorian(year, month, day, hour, minute, 0, 0, TimeScale::UTC)
        .map_err(|_| invalid())?;
    Ok(epoch.to_mjd_utc_days())
}

/// Transformation from modified julian date (UTC frame) to julian date in the TDB frame,
/// the time argument expected by the Horizons vector query.
pub fn mjd_utc_to_jd_tdb(mjd: MJD) -> f64 {
    Epoch::from_mjd_utc(mjd).to_jde_tdb_days()
}
