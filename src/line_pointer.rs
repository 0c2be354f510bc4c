use std::fmt;

use crate::common::layout::{declare, Field, WordError};

/// Line pointer record: 32-bit fixed-length record, a recreation of
/// postgres' ItemIdData. The sum of the field widths is 32 bits, which
/// is an important cache alignment optimization.
///
/// Layout (MSB to LSB):
/// | field  | bits | range     |
/// |--------|------|-----------|
/// | offset |  15  | 0-32767   |
/// | state  |   2  | 0-3       |
/// | length |  15  | 0-32767   |
const LAYOUT: [Field; 3] = declare([("offset", 15), ("state", 2), ("length", 15)]);

const OFFSET: Field = LAYOUT[0];
const STATE: Field = LAYOUT[1];
const LENGTH: Field = LAYOUT[2];

/// A line pointer packed into one word. Immutable once constructed;
/// accessors re-derive each field from the word on every call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinePointer(u32);

impl LinePointer {
    /// Constructs a line pointer, validating each field against its
    /// width in declared order: offset, then state, then length.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_word::LinePointer;
    /// use packed_word::common::layout::WordError;
    ///
    /// let lp = LinePointer::new(1024, 1, 2048).unwrap();
    /// assert_eq!(lp.offset(), 1024);
    /// assert_eq!(lp.state(), 1);
    /// assert_eq!(lp.length(), 2048);
    ///
    /// assert_eq!(
    ///     LinePointer::new(0, 4, 0),
    ///     Err(WordError::FieldOverflow { field: "state", max: 3 }),
    /// );
    /// ```
    pub fn new(offset: u16, state: u8, length: u16) -> Result<Self, WordError> {
        crate::fn_log!(
            "LinePointer",
            "new",
            &offset.to_string(),
            &state.to_string(),
            &length.to_string()
        );
        let mut word = 0u32;
        word |= OFFSET.pack(offset as u32)?;
        word |= STATE.pack(state as u32)?;
        word |= LENGTH.pack(length as u32)?;
        Ok(Self(word))
    }

    /// Retrieves the leftmost 15 bits.
    pub fn offset(self) -> u16 {
        OFFSET.get(self.0) as u16
    }

    /// Retrieves the two bits in between the offset and length bits.
    pub fn state(self) -> u8 {
        STATE.get(self.0) as u8
    }

    /// Retrieves the rightmost 15 bits.
    pub fn length(self) -> u16 {
        LENGTH.get(self.0) as u16
    }

    /// The packed word itself.
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Renders each field as a zero-padded binary literal of its declared
/// width, separated by single spaces. A debugging aid, not a parser
/// target.
///
/// # Examples
///
/// ```
/// use packed_word::LinePointer;
///
/// let lp = LinePointer::new(1024, 1, 2048).unwrap();
/// assert_eq!(lp.to_string(), "000010000000000 01 000100000000000");
/// ```
impl fmt::Display for LinePointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for field in LAYOUT {
            write!(
                f,
                "{}{:0width$b}",
                sep,
                field.get(self.0),
                width = field.width() as usize
            )?;
            sep = " ";
        }
        Ok(())
    }
}
