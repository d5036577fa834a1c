use static_assertions::const_assert_eq;

// The 19 leading consonants of the precomposed Hangul syllable block,
// in canonical Unicode phonetic order. The order is load-bearing:
// a syllable's leading index maps straight into this table.
pub const LEADING_CONSONANTS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ',
    'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

// Precomposed syllable range: '가' .. '힣' inclusive.
pub const SYLLABLE_BASE: u32 = 0xAC00;
pub const SYLLABLE_LAST: u32 = 0xD7A3;

const MEDIAL_COUNT: u32 = 21;
const FINAL_COUNT:  u32 = 28;   // 27 trailing consonants + "no trailing consonant".

const_assert_eq!(
    SYLLABLE_LAST - SYLLABLE_BASE + 1,
    19 * MEDIAL_COUNT * FINAL_COUNT
);

/// Maps a precomposed Hangul syllable to its leading consonant.
/// Any other character, bare jamo included, is returned unchanged.
pub fn leading_of(ch: char) -> char {
    let code = ch as u32;
    if !(SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code) {
        return ch;
    }

    let offset = code - SYLLABLE_BASE;
    let index = offset / (MEDIAL_COUNT * FINAL_COUNT);
    LEADING_CONSONANTS[index as usize]
}

/// Rewrites every Hangul syllable in `text` as its leading consonant,
/// e.g. "김현도" -> "ㄱㅎㄷ", "가나다 123" -> "ㄱㄴㄷ 123".
///
/// Character-preserving: the output has exactly one character per input
/// character, and non-Hangul characters pass through untouched.
pub fn chosung_of(text: &str) -> String {
    text.chars().map(leading_of).collect()
}

/// Whether `ch` is one of the 19 leading-consonant symbols.
pub fn is_leading_consonant(ch: char) -> bool {
    LEADING_CONSONANTS.contains(&ch)
}
