// Turkish alphabet: per-letter linguistic properties and voicing maps.
//
// Every letter of the alphabet (plus the circumflexed vowels and the foreign
// letters q, w, x) has exactly one `TurkicLetter` descriptor. Lookup by
// character goes through a fixed-size table indexed by code point, built
// once on first use and never mutated afterwards.

use std::sync::LazyLock;

/// Immutable linguistic descriptor of a single letter.
///
/// Vowel-only flags (`frontal`, `rounded`) are never set on consonants and
/// consonant-only flags (`voiceless`, `continuant`) are never set on vowels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurkicLetter {
    pub char_value: char,
    pub upper_char: char,
    /// 1-based position in the alphabet.
    pub index: u8,
    pub vowel: bool,
    pub frontal: bool,
    pub rounded: bool,
    pub voiceless: bool,
    pub continuant: bool,
    pub in_ascii: bool,
    pub foreign: bool,
    pub ascii_equivalent: char,
}

impl TurkicLetter {
    const fn vowel(
        char_value: char,
        upper_char: char,
        index: u8,
        frontal: bool,
        rounded: bool,
        ascii_equivalent: char,
    ) -> Self {
        Self {
            char_value,
            upper_char,
            index,
            vowel: true,
            frontal,
            rounded,
            voiceless: false,
            continuant: false,
            in_ascii: char_value == ascii_equivalent,
            foreign: false,
            ascii_equivalent,
        }
    }

    const fn consonant(
        char_value: char,
        upper_char: char,
        index: u8,
        voiceless: bool,
        continuant: bool,
        ascii_equivalent: char,
    ) -> Self {
        Self {
            char_value,
            upper_char,
            index,
            vowel: false,
            frontal: false,
            rounded: false,
            voiceless,
            continuant,
            in_ascii: char_value == ascii_equivalent,
            foreign: false,
            ascii_equivalent,
        }
    }

    const fn foreign(mut self) -> Self {
        self.foreign = true;
        self
    }

    /// A voiceless consonant that is not a continuant: p, ç, t, k.
    pub fn is_voiceless_stop(&self) -> bool {
        self.voiceless && !self.continuant
    }

    pub fn is_consonant(&self) -> bool {
        !self.vowel && self.index > 0
    }

    /// Whether this is the placeholder used for digits, punctuation and
    /// any other character outside the alphabet.
    pub fn is_undefined(&self) -> bool {
        self.index == 0
    }
}

/// Placeholder letter for characters outside the alphabet. It is neither a
/// vowel nor a voiceless consonant.
pub static UNDEFINED: TurkicLetter = TurkicLetter {
    char_value: '\0',
    upper_char: '\0',
    index: 0,
    vowel: false,
    frontal: false,
    rounded: false,
    voiceless: false,
    continuant: false,
    in_ascii: false,
    foreign: false,
    ascii_equivalent: '\0',
};

// ---------------------------------------------------------------------------
// Letter table
// ---------------------------------------------------------------------------

pub const L_A: TurkicLetter = TurkicLetter::vowel('a', 'A', 1, false, false, 'a');
pub const L_AA: TurkicLetter = TurkicLetter::vowel('\u{00E2}', '\u{00C2}', 2, false, false, 'a');
pub const L_B: TurkicLetter = TurkicLetter::consonant('b', 'B', 3, false, false, 'b');
pub const L_C: TurkicLetter = TurkicLetter::consonant('c', 'C', 4, false, false, 'c');
pub const L_CC: TurkicLetter = TurkicLetter::consonant('\u{00E7}', '\u{00C7}', 5, true, false, 'c');
pub const L_D: TurkicLetter = TurkicLetter::consonant('d', 'D', 6, false, false, 'd');
pub const L_E: TurkicLetter = TurkicLetter::vowel('e', 'E', 7, true, false, 'e');
pub const L_F: TurkicLetter = TurkicLetter::consonant('f', 'F', 8, true, true, 'f');
pub const L_G: TurkicLetter = TurkicLetter::consonant('g', 'G', 9, false, false, 'g');
pub const L_GG: TurkicLetter =
    TurkicLetter::consonant('\u{011F}', '\u{011E}', 10, false, true, 'g');
pub const L_H: TurkicLetter = TurkicLetter::consonant('h', 'H', 11, true, true, 'h');
pub const L_I: TurkicLetter = TurkicLetter::vowel('\u{0131}', 'I', 12, false, false, 'i');
pub const L_II: TurkicLetter = TurkicLetter::vowel('i', '\u{0130}', 13, true, false, 'i');
pub const L_III: TurkicLetter = TurkicLetter::vowel('\u{00EE}', '\u{00CE}', 14, true, false, 'i');
pub const L_J: TurkicLetter = TurkicLetter::consonant('j', 'J', 15, false, true, 'j');
pub const L_K: TurkicLetter = TurkicLetter::consonant('k', 'K', 16, true, false, 'k');
pub const L_L: TurkicLetter = TurkicLetter::consonant('l', 'L', 17, false, true, 'l');
pub const L_M: TurkicLetter = TurkicLetter::consonant('m', 'M', 18, false, false, 'm');
pub const L_N: TurkicLetter = TurkicLetter::consonant('n', 'N', 19, false, false, 'n');
pub const L_O: TurkicLetter = TurkicLetter::vowel('o', 'O', 20, false, true, 'o');
pub const L_OO: TurkicLetter = TurkicLetter::vowel('\u{00F6}', '\u{00D6}', 21, true, true, 'o');
pub const L_P: TurkicLetter = TurkicLetter::consonant('p', 'P', 22, true, false, 'p');
pub const L_Q: TurkicLetter = TurkicLetter::consonant('q', 'Q', 23, false, false, 'q').foreign();
pub const L_R: TurkicLetter = TurkicLetter::consonant('r', 'R', 24, false, true, 'r');
pub const L_S: TurkicLetter = TurkicLetter::consonant('s', 'S', 25, true, true, 's');
pub const L_SS: TurkicLetter = TurkicLetter::consonant('\u{015F}', '\u{015E}', 26, true, true, 's');
pub const L_T: TurkicLetter = TurkicLetter::consonant('t', 'T', 27, true, false, 't');
pub const L_U: TurkicLetter = TurkicLetter::vowel('u', 'U', 28, false, true, 'u');
pub const L_UU: TurkicLetter = TurkicLetter::vowel('\u{00FB}', '\u{00DB}', 29, false, true, 'u');
pub const L_UUU: TurkicLetter = TurkicLetter::vowel('\u{00FC}', '\u{00DC}', 30, true, true, 'u');
pub const L_V: TurkicLetter = TurkicLetter::consonant('v', 'V', 31, false, true, 'v');
pub const L_W: TurkicLetter = TurkicLetter::consonant('w', 'W', 32, false, true, 'w').foreign();
pub const L_X: TurkicLetter = TurkicLetter::consonant('x', 'X', 33, true, true, 'x').foreign();
pub const L_Y: TurkicLetter = TurkicLetter::consonant('y', 'Y', 34, false, true, 'y');
pub const L_Z: TurkicLetter = TurkicLetter::consonant('z', 'Z', 35, false, true, 'z');

static LETTERS: [TurkicLetter; 35] = [
    L_A, L_AA, L_B, L_C, L_CC, L_D, L_E, L_F, L_G, L_GG, L_H, L_I, L_II, L_III, L_J, L_K, L_L,
    L_M, L_N, L_O, L_OO, L_P, L_Q, L_R, L_S, L_SS, L_T, L_U, L_UU, L_UUU, L_V, L_W, L_X, L_Y,
    L_Z,
];

/// One past the highest code point of any letter (upper or lower case).
const LOOKUP_SIZE: usize = 0x0160;

/// Code point indexed lookup table. Entries hold the position in `LETTERS`.
static LOOKUP: LazyLock<[Option<u8>; LOOKUP_SIZE]> = LazyLock::new(|| {
    let mut table = [None; LOOKUP_SIZE];
    for (i, letter) in LETTERS.iter().enumerate() {
        table[letter.char_value as usize] = Some(i as u8);
        table[letter.upper_char as usize] = Some(i as u8);
    }
    table
});

/// All letters of the alphabet in alphabetical order.
pub fn letters() -> &'static [TurkicLetter] {
    &LETTERS
}

/// Look up the letter for a character (either case).
pub fn letter(c: char) -> Option<&'static TurkicLetter> {
    let cp = c as usize;
    if cp >= LOOKUP_SIZE {
        return None;
    }
    LOOKUP[cp].map(|i| &LETTERS[i as usize])
}

/// Like [`letter`] but falls back to [`UNDEFINED`] for digits, punctuation
/// and characters outside the alphabet.
pub fn letter_or_undefined(c: char) -> &'static TurkicLetter {
    letter(c).unwrap_or(&UNDEFINED)
}

// ---------------------------------------------------------------------------
// Voicing / devoicing
// ---------------------------------------------------------------------------

const VOICING_MAP: [(char, char); 4] = [
    ('p', 'b'),
    ('\u{00E7}', 'c'),
    ('t', 'd'),
    ('k', '\u{011F}'),
];

/// Voiced counterpart of a voiceless stop (p→b, ç→c, t→d, k→ğ).
/// Returns `None` for every other letter.
pub fn voice(letter: &TurkicLetter) -> Option<&'static TurkicLetter> {
    VOICING_MAP
        .iter()
        .find(|(from, _)| *from == letter.char_value)
        .and_then(|(_, to)| self::letter(*to))
}

/// Devoiced counterpart (b→p, c→ç, d→t, ğ→k). Returns `None` for every
/// other letter.
pub fn devoice(letter: &TurkicLetter) -> Option<&'static TurkicLetter> {
    VOICING_MAP
        .iter()
        .find(|(_, to)| *to == letter.char_value)
        .and_then(|(from, _)| self::letter(*from))
}

/// Character-level [`voice`], preserving case.
pub fn voice_char(c: char) -> Option<char> {
    let l = letter(c)?;
    let voiced = voice(l)?;
    Some(if c == l.upper_char && c != l.char_value {
        voiced.upper_char
    } else {
        voiced.char_value
    })
}

/// Character-level [`devoice`], preserving case.
pub fn devoice_char(c: char) -> Option<char> {
    let l = letter(c)?;
    let devoiced = devoice(l)?;
    Some(if c == l.upper_char && c != l.char_value {
        devoiced.upper_char
    } else {
        devoiced.char_value
    })
}

// ---------------------------------------------------------------------------
// Case and circumflex handling
// ---------------------------------------------------------------------------

/// Lowercase a character with Turkish dotted/dotless i rules.
pub fn turkish_lower(c: char) -> char {
    match c {
        'I' => '\u{0131}',
        '\u{0130}' => 'i',
        _ => match letter(c) {
            Some(l) => l.char_value,
            None => c.to_lowercase().next().unwrap_or(c),
        },
    }
}

/// Lowercase a string with Turkish dotted/dotless i rules.
pub fn turkish_lower_str(s: &str) -> String {
    s.chars().map(turkish_lower).collect()
}

pub fn has_circumflex(c: char) -> bool {
    matches!(
        c,
        '\u{00E2}' | '\u{00EE}' | '\u{00FB}' | '\u{00C2}' | '\u{00CE}' | '\u{00DB}'
    )
}

/// Replace â, î, û (and their capitals) with the plain vowel.
pub fn remove_circumflex(c: char) -> char {
    match c {
        '\u{00E2}' => 'a',
        '\u{00EE}' => 'i',
        '\u{00FB}' => 'u',
        '\u{00C2}' => 'A',
        '\u{00CE}' => '\u{0130}',
        '\u{00DB}' => 'U',
        _ => c,
    }
}
