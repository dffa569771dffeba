//! Fixed-width numeric formatting for the status screen.
//!
//! Every field on the screen is drawn opaquely over the previous frame, so
//! all conversions are blank-padded to a constant width; a shrinking number
//! must still overwrite every glyph cell it used before. The formats mirror
//! the printer-firmware conversion family the screen was designed around:
//! right-justified integers with the sign hugging the digits, a 7-char
//! fixed-point form that trims trailing zeros to blanks, and a two-field
//! digital clock.
//!
//! All functions return owned `heapless::String`s sized exactly for their
//! field and never fail; out-of-range magnitudes truncate to the field
//! modulo its capacity rather than widening it.

use core::fmt::Write;

use heapless::String;

/// ASCII digit of `(n / f) % 10`.
const fn digimod(n: u32, f: u32) -> char {
    (b'0' + ((n / f) % 10) as u8) as char
}

/// Like [`digimod`], but blank while the value has no digit at that place.
const fn rjdigit(n: u32, f: u32) -> char {
    if n >= f { digimod(n, f) } else { ' ' }
}

/// 3-char right-justified signed integer: `123`, ` 50`, ` -5`.
///
/// The sign occupies the hundreds column, so -123 renders as `-23`.
pub fn int3(value: i16) -> String<3> {
    let neg = value < 0;
    let n = u32::from(value.unsigned_abs());
    let mut s = String::new();
    let _ = s.push(if neg { '-' } else { rjdigit(n, 100) });
    let _ = s.push(rjdigit(n, 10));
    let _ = s.push(digimod(n, 1));
    s
}

/// 3-char right-justified unsigned integer: `100`, ` 75`, `  0`.
pub fn uint3(value: u8) -> String<3> {
    let n = u32::from(value);
    let mut s = String::new();
    let _ = s.push(rjdigit(n, 100));
    let _ = s.push(rjdigit(n, 10));
    let _ = s.push(digimod(n, 1));
    s
}

/// 4-char right-justified signed integer of a truncated float:
/// `1234`, ` 123`, `-123`, ` -12`, `  -1`.
pub fn signed4(value: f32) -> String<4> {
    let i = value as i16;
    let neg = i < 0;
    let n = u32::from(i.unsigned_abs());
    let mut s = String::new();
    if i >= 1000 {
        let _ = s.push(digimod(n, 1000));
        let _ = s.push(digimod(n, 100));
        let _ = s.push(digimod(n, 10));
        let _ = s.push(digimod(n, 1));
    } else if n >= 100 {
        let _ = s.push(if neg { '-' } else { ' ' });
        let _ = s.push(digimod(n, 100));
        let _ = s.push(digimod(n, 10));
        let _ = s.push(digimod(n, 1));
    } else if n >= 10 {
        let _ = s.push(' ');
        let _ = s.push(if neg { '-' } else { ' ' });
        let _ = s.push(digimod(n, 10));
        let _ = s.push(digimod(n, 1));
    } else {
        let _ = s.push(' ');
        let _ = s.push(' ');
        let _ = s.push(if neg { '-' } else { ' ' });
        let _ = s.push(digimod(n, 1));
    }
    s
}

/// 7-char fixed-point with two decimals, trailing zeros trimmed to blanks:
/// ` 123.45`, `   3.5 `, `   0   `, `-123.45`.
///
/// Hundredths are rounded half away from zero.
pub fn fixed7(value: f32) -> String<7> {
    let scaled = (value * 100.0 + if value < 0.0 { -0.5 } else { 0.5 }) as i32;
    let neg = scaled < 0;
    let n = scaled.unsigned_abs();
    let mut s = String::new();
    let _ = s.push(if neg { '-' } else { ' ' });
    let _ = s.push(rjdigit(n, 10000));
    let _ = s.push(rjdigit(n, 1000));
    let _ = s.push(digimod(n, 100));

    let hundredths = n % 10;
    let tenths = (n / 10) % 10;
    if hundredths != 0 {
        let _ = s.push('.');
        let _ = s.push(digimod(n, 10));
        let _ = s.push(digimod(n, 1));
    } else if tenths != 0 {
        let _ = s.push('.');
        let _ = s.push(digimod(n, 10));
        let _ = s.push(' ');
    } else {
        let _ = s.push_str("   ");
    }
    s
}

/// 4-char percentage of a permyriad value: ` 100`, `23.4`, `3.45`, `0.00`.
pub fn permyriad4(value: u16) -> String<4> {
    let n = u32::from(value);
    let mut s = String::new();
    if n >= 10000 {
        let _ = s.push_str(" 100");
    } else if n >= 1000 {
        let _ = s.push(digimod(n, 1000));
        let _ = s.push(digimod(n, 100));
        let _ = s.push('.');
        let _ = s.push(digimod(n, 10));
    } else {
        let _ = s.push(digimod(n, 100));
        let _ = s.push('.');
        let _ = s.push(digimod(n, 10));
        let _ = s.push(digimod(n, 1));
    }
    s
}

/// Digital clock: `MM:SS` below one hour, `HH:MM` from there on.
///
/// Fields are two digits minimum; the hour field grows past 99 hours.
pub fn digital(seconds: u32) -> String<8> {
    let hours = (seconds / 3600) as u16;
    let minutes = (seconds / 60) % 60;
    let mut s = String::new();
    if hours == 0 {
        let _ = write!(s, "{minutes:02}:{:02}", seconds % 60);
    } else {
        let _ = write!(s, "{hours:02}:{minutes:02}");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int3_right_justified() {
        assert_eq!(int3(123).as_str(), "123");
        assert_eq!(int3(50).as_str(), " 50");
        assert_eq!(int3(5).as_str(), "  5");
        assert_eq!(int3(0).as_str(), "  0");
        assert_eq!(int3(-12).as_str(), "-12");
        assert_eq!(int3(-5).as_str(), "- 5");
    }

    #[test]
    fn test_int3_sign_takes_hundreds_column() {
        assert_eq!(int3(-123).as_str(), "-23");
    }

    #[test]
    fn test_uint3() {
        assert_eq!(uint3(100).as_str(), "100");
        assert_eq!(uint3(75).as_str(), " 75");
        assert_eq!(uint3(0).as_str(), "  0");
    }

    #[test]
    fn test_signed4_positive() {
        assert_eq!(signed4(1234.0).as_str(), "1234");
        assert_eq!(signed4(123.4).as_str(), " 123");
        assert_eq!(signed4(12.0).as_str(), "  12");
        assert_eq!(signed4(1.0).as_str(), "   1");
        assert_eq!(signed4(0.0).as_str(), "   0");
    }

    #[test]
    fn test_signed4_negative_sign_hugs_digits() {
        assert_eq!(signed4(-123.4).as_str(), "-123");
        assert_eq!(signed4(-12.0).as_str(), " -12");
        assert_eq!(signed4(-1.0).as_str(), "  -1");
    }

    #[test]
    fn test_signed4_truncates_toward_zero() {
        assert_eq!(signed4(99.9).as_str(), "  99");
        assert_eq!(signed4(-99.9).as_str(), " -99");
    }

    #[test]
    fn test_fixed7_full_precision() {
        assert_eq!(fixed7(123.45).as_str(), " 123.45");
        assert_eq!(fixed7(-123.45).as_str(), "-123.45");
    }

    #[test]
    fn test_fixed7_trims_trailing_zeros() {
        assert_eq!(fixed7(3.5).as_str(), "   3.5 ");
        assert_eq!(fixed7(120.0).as_str(), " 120   ");
        assert_eq!(fixed7(0.0).as_str(), "   0   ");
    }

    #[test]
    fn test_fixed7_rounds_half_away_from_zero() {
        // 0.125 * 100 = 12.5 -> 13 hundredths
        assert_eq!(fixed7(0.125).as_str(), "   0.13");
        assert_eq!(fixed7(-0.125).as_str(), "-  0.13");
    }

    #[test]
    fn test_fixed7_is_always_seven_chars() {
        for v in [-199.99f32, -3.5, -0.01, 0.0, 0.07, 9.9, 42.0, 199.99] {
            assert_eq!(fixed7(v).len(), 7, "width broken for {v}");
        }
    }

    #[test]
    fn test_permyriad4() {
        assert_eq!(permyriad4(10000).as_str(), " 100");
        assert_eq!(permyriad4(5000).as_str(), "50.0");
        assert_eq!(permyriad4(2345).as_str(), "23.4");
        assert_eq!(permyriad4(345).as_str(), "3.45");
        assert_eq!(permyriad4(0).as_str(), "0.00");
    }

    #[test]
    fn test_digital_minutes_seconds_below_one_hour() {
        assert_eq!(digital(0).as_str(), "00:00");
        assert_eq!(digital(59).as_str(), "00:59");
        assert_eq!(digital(754).as_str(), "12:34");
        assert_eq!(digital(3599).as_str(), "59:59");
    }

    #[test]
    fn test_digital_hours_minutes_from_one_hour() {
        assert_eq!(digital(3600).as_str(), "01:00");
        assert_eq!(digital(3660).as_str(), "01:01");
        assert_eq!(digital(86399).as_str(), "23:59");
        assert_eq!(digital(360000).as_str(), "100:00");
    }
}
