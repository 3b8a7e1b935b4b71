use std::num::IntErrorKind;

use super::InvalidPage;

/// A value a requested page number can be coerced from.
///
/// Integers convert directly, strings are parsed after trimming and floats are
/// truncated toward zero. A missing value means the first page.
pub trait IntoPageNumber {
    /// Coerce `self` into a (not yet range-checked) page number.
    fn into_page_number(self) -> Result<i64, InvalidPage>;
}

macro_rules! impl_into_page_number {
    ($($ty:ty),*) => {
        $(
            impl IntoPageNumber for $ty {
                fn into_page_number(self) -> Result<i64, InvalidPage> {
                    // Anything past i64::MAX is past the last page anyway.
                    Ok(i64::try_from(self).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

impl_into_page_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoPageNumber for &str {
    fn into_page_number(self) -> Result<i64, InvalidPage> {
        match self.trim().parse::<i64>() {
            Ok(number) => Ok(number),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Ok(i64::MAX),
                IntErrorKind::NegOverflow => Ok(i64::MIN),
                _ => Err(InvalidPage::PageNotAnInteger),
            },
        }
    }
}

impl IntoPageNumber for &String {
    fn into_page_number(self) -> Result<i64, InvalidPage> {
        self.as_str().into_page_number()
    }
}

impl IntoPageNumber for String {
    fn into_page_number(self) -> Result<i64, InvalidPage> {
        self.as_str().into_page_number()
    }
}

impl IntoPageNumber for f64 {
    fn into_page_number(self) -> Result<i64, InvalidPage> {
        if self.is_finite() { Ok(self.trunc() as i64) } else { Err(InvalidPage::PageNotAnInteger) }
    }
}

impl IntoPageNumber for f32 {
    fn into_page_number(self) -> Result<i64, InvalidPage> {
        f64::from(self).into_page_number()
    }
}

impl<T: IntoPageNumber> IntoPageNumber for Option<T> {
    fn into_page_number(self) -> Result<i64, InvalidPage> {
        match self {
            Some(value) => value.into_page_number(),
            None => Ok(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(3_u8.into_page_number(), Ok(3));
        assert_eq!((-2_i32).into_page_number(), Ok(-2));
        assert_eq!(u64::MAX.into_page_number(), Ok(i64::MAX));
    }

    #[test]
    fn test_strings() {
        assert_eq!("7".into_page_number(), Ok(7));
        assert_eq!("  +4 ".into_page_number(), Ok(4));
        assert_eq!("-1".into_page_number(), Ok(-1));
        assert_eq!(String::from("12").into_page_number(), Ok(12));
        assert_eq!("99999999999999999999".into_page_number(), Ok(i64::MAX));
    }

    #[test]
    fn test_strings_not_integers() {
        for raw in ["x", "", "1.5", "two", "1 2"] {
            assert_eq!(raw.into_page_number(), Err(InvalidPage::PageNotAnInteger), "{raw:?}");
        }
    }

    #[test]
    fn test_floats_truncate() {
        assert_eq!(2.9_f64.into_page_number(), Ok(2));
        assert_eq!((-0.5_f32).into_page_number(), Ok(0));
        assert_eq!(f64::NAN.into_page_number(), Err(InvalidPage::PageNotAnInteger));
        assert_eq!(f64::INFINITY.into_page_number(), Err(InvalidPage::PageNotAnInteger));
    }

    #[test]
    fn test_missing_value_is_first_page() {
        assert_eq!(None::<&str>.into_page_number(), Ok(1));
        assert_eq!(Some("3").into_page_number(), Ok(3));
    }
}
