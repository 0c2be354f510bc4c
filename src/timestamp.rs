use chrono::{Datelike, Timelike};

use crate::common::layout::{declare, word_from_binary_str, Field, WordError};

/// Timestamp record: 32-bit fixed-length record for a calendar minute.
///
/// Layout (MSB to LSB):
/// | field    | bits | range                         |
/// |----------|------|-------------------------------|
/// | reserved |   1  | always 0                      |
/// | year     |   8  | 0-255, years from 1900        |
/// | month    |   4  | 1-12                          |
/// | day      |   5  | 1-31                          |
/// | hour     |   5  | 0-23                          |
/// | minute   |   6  | 0-59                          |
/// | weekday  |   3  | 0-6, 0 = Sunday               |
const LAYOUT: [Field; 7] = declare([
    ("reserved", 1),
    ("year", 8),
    ("month", 4),
    ("day", 5),
    ("hour", 5),
    ("minute", 6),
    ("weekday", 3),
]);

const YEAR: Field = LAYOUT[1];
const MONTH: Field = LAYOUT[2];
const DAY: Field = LAYOUT[3];
const HOUR: Field = LAYOUT[4];
const MINUTE: Field = LAYOUT[5];
const WEEKDAY: Field = LAYOUT[6];

/// A calendar minute packed into one word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(u32);

/// Decoded calendar fields of a [`Timestamp`], in layout order.
/// `year` is years since 1900.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeFields {
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub weekday: u8,
}

impl Timestamp {
    /// Packs calendar fields. `year` is the absolute calendar year,
    /// stored as `year - 1900` (calendar years 1900-2155).
    ///
    /// Unlike [`LinePointer::new`](crate::LinePointer::new), no range
    /// validation is performed: each value is truncated to its field
    /// width, and calendar sanity (day 31 in February, weekday matching
    /// the date) is the caller's responsibility.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_word::Timestamp;
    ///
    /// // 2018-05-12 15:53, a Saturday
    /// let ts = Timestamp::from_calendar(2018, 5, 12, 15, 53, 6);
    /// assert_eq!(ts.as_u32(), 992_681_902);
    /// ```
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        weekday: u32,
    ) -> Self {
        crate::fn_log!(
            "Timestamp",
            "from_calendar",
            &year.to_string(),
            &month.to_string(),
            &day.to_string()
        );
        let mut word = 0u32;
        word |= YEAR.pack_truncate(year.wrapping_sub(1900) as u32);
        word |= MONTH.pack_truncate(month);
        word |= DAY.pack_truncate(day);
        word |= HOUR.pack_truncate(hour);
        word |= MINUTE.pack_truncate(minute);
        word |= WEEKDAY.pack_truncate(weekday);
        Self(word)
    }

    /// Packs a chrono date-time value, the weekday counted as days from
    /// Sunday.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use packed_word::Timestamp;
    ///
    /// let dt = NaiveDate::from_ymd_opt(2018, 5, 12)
    ///     .unwrap()
    ///     .and_hms_opt(15, 53, 0)
    ///     .unwrap();
    /// assert_eq!(Timestamp::from_datetime(&dt).as_u32(), 992_681_902);
    /// ```
    pub fn from_datetime<T: Datelike + Timelike>(t: &T) -> Self {
        Self::from_calendar(
            t.year(),
            t.month(),
            t.day(),
            t.hour(),
            t.minute(),
            t.weekday().num_days_from_sunday(),
        )
    }

    /// Parses a timestamp from the 32-character binary rendering of its
    /// word, most-significant bit first.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_word::Timestamp;
    ///
    /// let ts = Timestamp::from_binary_str("00111011001010110001111110101110").unwrap();
    /// assert_eq!(ts.fields().year, 118);
    /// assert_eq!(ts.fields().minute, 53);
    ///
    /// assert!(Timestamp::from_binary_str("00101").is_err());
    /// ```
    pub fn from_binary_str(s: &str) -> Result<Self, WordError> {
        crate::fn_log!("Timestamp", "from_binary_str", s);
        Ok(Self(word_from_binary_str(s)?))
    }

    /// Decodes the word into its calendar fields. Total over all words:
    /// every bit pattern yields in-range values, whether or not it was
    /// produced by a constructor.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_word::{TimeFields, Timestamp};
    ///
    /// let ts = Timestamp::from_calendar(2018, 5, 12, 15, 53, 6);
    /// assert_eq!(
    ///     ts.fields(),
    ///     TimeFields { year: 118, month: 5, day: 12, hour: 15, minute: 53, weekday: 6 },
    /// );
    /// ```
    pub fn fields(self) -> TimeFields {
        TimeFields {
            year: YEAR.get(self.0) as u8,
            month: MONTH.get(self.0) as u8,
            day: DAY.get(self.0) as u8,
            hour: HOUR.get(self.0) as u8,
            minute: MINUTE.get(self.0) as u8,
            weekday: WEEKDAY.get(self.0) as u8,
        }
    }

    /// Years since 1900.
    pub fn year(self) -> u8 {
        YEAR.get(self.0) as u8
    }

    pub fn month(self) -> u8 {
        MONTH.get(self.0) as u8
    }

    pub fn day(self) -> u8 {
        DAY.get(self.0) as u8
    }

    pub fn hour(self) -> u8 {
        HOUR.get(self.0) as u8
    }

    pub fn minute(self) -> u8 {
        MINUTE.get(self.0) as u8
    }

    /// 0 = Sunday.
    pub fn weekday(self) -> u8 {
        WEEKDAY.get(self.0) as u8
    }

    /// The packed word itself.
    pub fn as_u32(self) -> u32 {
        self.0
    }
}
