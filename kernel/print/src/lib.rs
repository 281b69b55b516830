#![cfg_attr(not(test), no_std)]

//!
//! Minimal formatted console output
//!
//! A printf in miniature: four conversions (`%%`, `%s`, `%d`, `%x`),
//! one byte of output at a time, no buffering and no allocation.
//! Arguments are passed as a tagged slice instead of C varargs, so
//! every call site stays type checked.
//!

use nocturne_sbi::legacy::console_putchar;

/// Something that accepts one byte of output at a time.
pub trait CharSink {
    fn putc(&mut self, ch: u8);
}

/// The firmware console, one SBI call per byte.
pub struct SbiConsole;

impl CharSink for SbiConsole {
    fn putc(&mut self, ch: u8) {
        console_putchar(ch);
    }
}

///
/// One formatting argument
///
/// `Str(None)` stands in for a C null pointer and renders as
/// `(null)`.
///
#[derive(Clone, Copy, Debug)]
pub enum FormatArg<'a> {
    Str(Option<&'a str>),
    Int(i32),
    Hex(u32),
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(s: &'a str) -> Self {
        FormatArg::Str(Some(s))
    }
}

impl<'a> From<Option<&'a str>> for FormatArg<'a> {
    fn from(s: Option<&'a str>) -> Self {
        FormatArg::Str(s)
    }
}

impl From<i32> for FormatArg<'_> {
    fn from(v: i32) -> Self {
        FormatArg::Int(v)
    }
}

impl From<u32> for FormatArg<'_> {
    fn from(v: u32) -> Self {
        FormatArg::Hex(v)
    }
}

/// What one scan step decided to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Directive {
    Literal(u8),
    Escape,
    Str,
    Decimal,
    Hex,
    Unknown(u8),
}

/// Resolve the directive starting at `at`. Returns the directive and
/// how many template bytes it covered.
fn scan(template: &[u8], at: usize) -> (Directive, usize) {
    if template[at] != b'%' {
        return (Directive::Literal(template[at]), 1);
    }

    match template.get(at + 1) {
        // A '%' as the very last byte prints itself; the scan must
        // not reach past the end of the template.
        None => (Directive::Escape, 1),
        Some(b'%') => (Directive::Escape, 2),
        Some(b's') => (Directive::Str, 2),
        Some(b'd') => (Directive::Decimal, 2),
        Some(b'x') => (Directive::Hex, 2),
        Some(&other) => (Directive::Unknown(other), 2),
    }
}

fn put_str(sink: &mut impl CharSink, s: &str) {
    for ch in s.bytes() {
        sink.putc(ch);
    }
}

/// Signed decimal, highest power-of-ten divisor first. The magnitude
/// is taken unsigned so `i32::MIN` negates without overflowing.
fn put_decimal(sink: &mut impl CharSink, value: i32) {
    if value == 0 {
        sink.putc(b'0');
        return;
    }
    if value < 0 {
        sink.putc(b'-');
    }

    let mut magnitude = value.unsigned_abs();
    let mut divisor = 1u32;
    while magnitude / divisor >= 10 {
        divisor *= 10;
    }

    while divisor > 0 {
        sink.putc(b'0' + (magnitude / divisor) as u8);
        magnitude %= divisor;
        divisor /= 10;
    }
}

/// Exactly 8 lowercase hex digits, zero padded, regardless of value.
fn put_hex(sink: &mut impl CharSink, value: u32) {
    let table = b"0123456789abcdef";
    for shift in (0..8).rev() {
        let nibble = (value >> (shift * 4)) & 0xf;
        sink.putc(table[nibble as usize]);
    }
}

///
/// Render `template` into `sink`
///
/// Arguments are consumed strictly left to right as their
/// conversions are met. A conversion with no argument left, or whose
/// argument has the wrong tag, prints itself verbatim and consumes
/// nothing, the same way an unknown conversion does.
///
pub fn format_to(sink: &mut impl CharSink, template: &str, args: &[FormatArg<'_>]) {
    let template = template.as_bytes();
    let mut pos = 0;
    let mut next_arg = 0;

    while pos < template.len() {
        let (directive, advance) = scan(template, pos);
        pos += advance;

        match directive {
            Directive::Literal(ch) => sink.putc(ch),
            Directive::Escape => sink.putc(b'%'),
            Directive::Str => match args.get(next_arg) {
                Some(FormatArg::Str(s)) => {
                    next_arg += 1;
                    put_str(sink, s.unwrap_or("(null)"));
                }
                _ => put_str(sink, "%s"),
            },
            Directive::Decimal => match args.get(next_arg) {
                Some(FormatArg::Int(v)) => {
                    next_arg += 1;
                    put_decimal(sink, *v);
                }
                _ => put_str(sink, "%d"),
            },
            Directive::Hex => match args.get(next_arg) {
                Some(FormatArg::Hex(v)) => {
                    next_arg += 1;
                    put_hex(sink, *v);
                }
                _ => put_str(sink, "%x"),
            },
            Directive::Unknown(ch) => {
                sink.putc(b'%');
                sink.putc(ch);
            }
        }
    }
}

/// `format_to` aimed at the firmware console.
pub fn printf(template: &str, args: &[FormatArg<'_>]) {
    format_to(&mut SbiConsole, template, args);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Capture(Vec<u8>);

    impl CharSink for Capture {
        fn putc(&mut self, ch: u8) {
            self.0.push(ch);
        }
    }

    fn fmt(template: &str, args: &[FormatArg<'_>]) -> String {
        let mut sink = Capture(Vec::new());
        format_to(&mut sink, template, args);
        String::from_utf8(sink.0).unwrap()
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(fmt("hello\n", &[]), "hello\n");
        assert_eq!(fmt("", &[]), "");
    }

    #[test]
    fn double_percent_prints_one() {
        assert_eq!(fmt("100%%\n", &[]), "100%\n");
        assert_eq!(fmt("%%%%", &[]), "%%");
    }

    #[test]
    fn dangling_percent_prints_itself() {
        assert_eq!(fmt("abc%", &[]), "abc%");
        assert_eq!(fmt("%", &[]), "%");
    }

    #[test]
    fn string_conversion() {
        assert_eq!(fmt("%s", &["hi".into()]), "hi");
        assert_eq!(fmt("%s", &["".into()]), "");
        assert_eq!(fmt("[%s]", &["mid".into()]), "[mid]");
    }

    #[test]
    fn null_string_renders_sentinel() {
        assert_eq!(fmt("%s", &[None.into()]), "(null)");
    }

    #[test]
    fn decimal_conversion() {
        assert_eq!(fmt("%d", &[0i32.into()]), "0");
        assert_eq!(fmt("%d", &[(-5i32).into()]), "-5");
        assert_eq!(fmt("%d", &[123i32.into()]), "123");
        assert_eq!(fmt("%d", &[i32::MAX.into()]), "2147483647");
        assert_eq!(fmt("%d", &[i32::MIN.into()]), "-2147483648");
    }

    #[test]
    fn decimal_has_no_leading_zeros() {
        assert_eq!(fmt("%d", &[10i32.into()]), "10");
        assert_eq!(fmt("%d", &[100i32.into()]), "100");
        assert_eq!(fmt("%d", &[(-1000i32).into()]), "-1000");
    }

    #[test]
    fn hex_is_fixed_width() {
        assert_eq!(fmt("%x", &[0u32.into()]), "00000000");
        assert_eq!(fmt("%x", &[255u32.into()]), "000000ff");
        assert_eq!(fmt("%x", &[0xdeadbeefu32.into()]), "deadbeef");
        assert_eq!(fmt("%x", &[u32::MAX.into()]), "ffffffff");
    }

    #[test]
    fn unknown_conversion_prints_verbatim() {
        assert_eq!(fmt("%q", &[]), "%q");
        // %q must not eat the argument meant for %d.
        assert_eq!(fmt("%q%d", &[7i32.into()]), "%q7");
    }

    #[test]
    fn missing_argument_prints_conversion_verbatim() {
        assert_eq!(fmt("%d and %s", &[]), "%d and %s");
        assert_eq!(fmt("%x", &[]), "%x");
    }

    #[test]
    fn mismatched_argument_is_not_consumed() {
        // %s refuses the Int, which %d then picks up.
        assert_eq!(fmt("%s=%d", &[41i32.into()]), "%s=41");
    }

    #[test]
    fn arguments_are_consumed_left_to_right() {
        assert_eq!(
            fmt("%d,%d,%d", &[1i32.into(), 2i32.into(), 3i32.into()]),
            "1,2,3"
        );
    }

    #[test]
    fn end_to_end_hello() {
        assert_eq!(
            fmt(
                "Hello, %s! You are %d years, id=%x\n",
                &["Ada".into(), 30i32.into(), 0xBEEFu32.into()]
            ),
            "Hello, Ada! You are 30 years, id=0000beef\n"
        );
    }
}
