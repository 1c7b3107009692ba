//! Utilities functions which do not linked to domain

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Strip the first or the last character
pub(crate) trait StripChar {
    /// Strip the character from the beginning
    fn strip_prefix_char(self, ch: char) -> Option<String>;
    /// Strip the character from the end
    fn strip_suffix_char(self, ch: char) -> Option<String>;
    /// Split into the first character and the rest of the string
    fn split_first(self) -> Option<(char, String)>;
    /// Split into the last character and the rest of the string
    fn split_last(self) -> Option<(String, char)>;
}

impl StripChar for &str {
    fn strip_prefix_char(self, ch: char) -> Option<String> {
        self.strip_prefix(ch).map(ToString::to_string)
    }

    fn strip_suffix_char(self, ch: char) -> Option<String> {
        self.strip_suffix(ch).map(ToString::to_string)
    }

    fn split_first(self) -> Option<(char, String)> {
        self.chars().next().and_then(|head| {
            self.strip_prefix_char(head)
                .map(|stripped| (head, stripped))
        })
    }

    fn split_last(self) -> Option<(String, char)> {
        self.chars().last().and_then(|tail| {
            self.strip_suffix_char(tail)
                .map(|stripped| (stripped, tail))
        })
    }
}

/// Round half up: `.5` always goes towards the positive infinity,
/// for the negative numbers too (`-2.5` becomes `-2`).
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round the value to the given number of decimal places.
///
/// Unlike [`f64::round`] the midpoint is never rounded away from zero
/// for negative values:
///
/// ```
/// # use geodistance::round_to_places;
/// assert_eq!(round_to_places(2.5, 0), 3.0);
/// assert_eq!(round_to_places(-2.5, 0), -2.0);
/// assert_eq!(round_to_places(117.497_361_1, 6), 117.497_361);
/// ```
pub fn round_to_places(value: f64, places: u8) -> f64 {
    let shift = 10_f64.powi(i32::from(places));
    round_half_up(value * shift) / shift
}
