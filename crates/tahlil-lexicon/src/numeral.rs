// Digits to Turkish number words.
//
// Numeral roots written in digits get their phonetics from the spelled-out
// text (`3'ü` harmonizes like `üçü`), so the parser needs the words, not
// the value.

const ONES: [&str; 10] = [
    "", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz",
];
const TENS: [&str; 10] = [
    "", "on", "yirmi", "otuz", "kırk", "elli", "altmış", "yetmiş", "seksen", "doksan",
];
const SCALES: [&str; 6] = ["", "bin", "milyon", "milyar", "trilyon", "katrilyon"];

const ZERO: &str = "sıfır";
const DECIMAL_SEPARATOR: &str = "virgül";

/// Largest value [`integer_to_text`] accepts.
pub const MAX_CONVERTIBLE: u64 = 999_999_999_999_999_999;

/// Spell out a non-negative integer. Returns `None` above
/// [`MAX_CONVERTIBLE`].
pub fn integer_to_text(n: u64) -> Option<String> {
    if n > MAX_CONVERTIBLE {
        return None;
    }
    if n == 0 {
        return Some(ZERO.to_string());
    }

    let mut groups = Vec::with_capacity(SCALES.len());
    let mut rest = n;
    while rest > 0 {
        groups.push((rest % 1000) as usize);
        rest /= 1000;
    }

    let mut words = Vec::new();
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        // "bin", never "bir bin"
        if !(scale == 1 && group == 1) {
            push_hundreds(group, &mut words);
        }
        if scale > 0 {
            words.push(SCALES[scale]);
        }
    }
    Some(words.join(" "))
}

fn push_hundreds(n: usize, words: &mut Vec<&'static str>) {
    let (hundreds, tens, ones) = (n / 100, n / 10 % 10, n % 10);
    if hundreds > 0 {
        if hundreds > 1 {
            words.push(ONES[hundreds]);
        }
        words.push("yüz");
    }
    if tens > 0 {
        words.push(TENS[tens]);
    }
    if ones > 0 {
        words.push(ONES[ones]);
    }
}

/// Spell out a digit string with an optional `,` decimal part: `3,05`
/// becomes `üç virgül sıfır beş`. Returns `None` for anything that is not
/// a plain digit string or is too large.
pub fn digits_to_text(digits: &str) -> Option<String> {
    let (integer, fraction) = match digits.split_once(',') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut text = integer_to_text(parse_digits(integer)?)?;

    if let Some(fraction) = fraction {
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        text.push(' ');
        text.push_str(DECIMAL_SEPARATOR);
        let significant = fraction.trim_start_matches('0');
        for _ in 0..fraction.len() - significant.len() {
            text.push(' ');
            text.push_str(ZERO);
        }
        if !significant.is_empty() {
            text.push(' ');
            text.push_str(&integer_to_text(parse_digits(significant)?)?);
        }
    }
    Some(text)
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let significant = s.trim_start_matches('0');
    if significant.len() > 18 {
        return None;
    }
    if significant.is_empty() {
        return Some(0);
    }
    significant.parse().ok()
}

/// Whether `s` is a digit string with at most one `,` followed by digits.
pub fn is_numeral(s: &str) -> bool {
    match s.split_once(',') {
        Some((i, f)) => is_digits(i) && is_digits(f),
        None => is_digits(s),
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
