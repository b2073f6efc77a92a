/// What a codepoint range means for vocabulary extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeTag {
    /// Hiragana, katakana and kanji blocks.
    Word,
    /// Kana that carries meaning only inside a longer word (particles, sokuon).
    StandaloneKana,
    /// A mark that joins words but is empty on its own (katakana middle dot).
    LoneMark,
}

/// Closed codepoint interval with a semantic tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRange {
    pub start: char,
    pub end: char,
    pub tag: RangeTag,
}

impl ClassRange {
    const fn new(start: char, end: char, tag: RangeTag) -> Self {
        Self { start, end, tag }
    }

    pub fn contains(&self, c: char) -> bool {
        self.start <= c && c <= self.end
    }
}

/// Classification of a single codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Word constituent anywhere in a token.
    Valid,
    /// Word constituent inside a longer token, meaningless as a one-character token.
    StandaloneInvalid,
    /// Punctuation, symbols, latin, digits and everything else.
    Noise,
}

impl CharClass {
    pub fn is_word_constituent(self) -> bool {
        !matches!(self, CharClass::Noise)
    }
}

/// Word-constituent blocks, sorted and disjoint.
pub const WORD_RANGES: &[ClassRange] = &[
    // 々 kanji iteration mark
    ClassRange::new('\u{3005}', '\u{3005}', RangeTag::Word),
    ClassRange::new('\u{3040}', '\u{309F}', RangeTag::Word),
    ClassRange::new('\u{30A0}', '\u{30FF}', RangeTag::Word),
    ClassRange::new('\u{31F0}', '\u{31FF}', RangeTag::Word),
    ClassRange::new('\u{3400}', '\u{4DBF}', RangeTag::Word),
    ClassRange::new('\u{4E00}', '\u{9FFF}', RangeTag::Word),
    ClassRange::new('\u{F900}', '\u{FAFF}', RangeTag::Word),
    ClassRange::new('\u{20000}', '\u{2A6DF}', RangeTag::Word),
    ClassRange::new('\u{2A700}', '\u{2EBEF}', RangeTag::Word),
];

/// Codepoints that must not stand alone as a token. Every entry also lies
/// inside [`WORD_RANGES`].
pub const STANDALONE_RANGES: &[ClassRange] = &[
    ClassRange::new('\u{3040}', '\u{309F}', RangeTag::StandaloneKana),
    // ッ
    ClassRange::new('\u{30C3}', '\u{30C3}', RangeTag::StandaloneKana),
    // ・
    ClassRange::new('\u{30FB}', '\u{30FB}', RangeTag::LoneMark),
];

fn lookup(ranges: &[ClassRange], c: char) -> Option<&ClassRange> {
    ranges
        .binary_search_by(|range| {
            if range.contains(c) {
                std::cmp::Ordering::Equal
            } else if range.end < c {
                std::cmp::Ordering::Less
            } else {
                std::cmp::Ordering::Greater
            }
        })
        .ok()
        .map(|idx| &ranges[idx])
}

/// Tag of the narrowest range covering `c`, or `None` for noise.
pub fn range_tag(c: char) -> Option<RangeTag> {
    lookup(STANDALONE_RANGES, c)
        .or_else(|| lookup(WORD_RANGES, c))
        .map(|range| range.tag)
}

pub fn classify(c: char) -> CharClass {
    match range_tag(c) {
        Some(RangeTag::Word) => CharClass::Valid,
        Some(RangeTag::StandaloneKana) | Some(RangeTag::LoneMark) => CharClass::StandaloneInvalid,
        None => CharClass::Noise,
    }
}

pub fn is_word_constituent(c: char) -> bool {
    classify(c).is_word_constituent()
}

pub fn is_standalone_invalid(c: char) -> bool {
    classify(c) == CharClass::StandaloneInvalid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_disjoint(ranges: &[ClassRange]) {
        for pair in ranges.windows(2) {
            assert!(pair[0].start <= pair[0].end);
            assert!(
                pair[0].end < pair[1].start,
                "{:?} overlaps {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_range_tables_are_sorted_and_disjoint() {
        assert_sorted_disjoint(WORD_RANGES);
        assert_sorted_disjoint(STANDALONE_RANGES);
    }

    #[test]
    fn test_standalone_ranges_are_word_constituents() {
        for range in STANDALONE_RANGES {
            assert!(lookup(WORD_RANGES, range.start).is_some());
            assert!(lookup(WORD_RANGES, range.end).is_some());
        }
    }

    #[test]
    fn test_kanji_and_katakana_are_valid() {
        assert_eq!(classify('猫'), CharClass::Valid);
        assert_eq!(classify('愛'), CharClass::Valid);
        assert_eq!(classify('カ'), CharClass::Valid);
        assert_eq!(classify('ー'), CharClass::Valid);
        assert_eq!(classify('々'), CharClass::Valid);
        assert_eq!(classify('𠮷'), CharClass::Valid);
    }

    #[test]
    fn test_hiragana_is_standalone_invalid() {
        for c in ['の', 'は', 'を', 'ぁ', 'ゟ', 'っ'] {
            assert_eq!(classify(c), CharClass::StandaloneInvalid, "{}", c);
            assert!(is_word_constituent(c));
        }
    }

    #[test]
    fn test_middle_dot_and_small_tsu() {
        assert_eq!(range_tag('・'), Some(RangeTag::LoneMark));
        assert_eq!(range_tag('ッ'), Some(RangeTag::StandaloneKana));
        assert!(is_standalone_invalid('・'));
        assert!(is_standalone_invalid('ッ'));
        assert!(!is_standalone_invalid('ツ'));
    }

    #[test]
    fn test_punctuation_latin_and_digits_are_noise() {
        for c in ['a', 'Z', '1', '１', '！', '？', '「', '」', '。', '、', '♪', '…', ' ', '\u{3000}', 'ｯ', '\u{FFFD}'] {
            assert_eq!(classify(c), CharClass::Noise, "{:?}", c);
            assert!(!is_word_constituent(c));
        }
    }

    #[test]
    fn test_class_range_contains_is_inclusive() {
        let range = ClassRange::new('\u{3040}', '\u{309F}', RangeTag::StandaloneKana);
        assert!(range.contains('\u{3040}'));
        assert!(range.contains('\u{309F}'));
        assert!(!range.contains('\u{303F}'));
        assert!(!range.contains('\u{30A0}'));
    }

    #[test]
    fn test_range_boundaries() {
        assert_eq!(classify('\u{303F}'), CharClass::Noise);
        assert_eq!(classify('\u{3040}'), CharClass::StandaloneInvalid);
        assert_eq!(classify('\u{30A0}'), CharClass::Valid);
        assert_eq!(classify('\u{4DBF}'), CharClass::Valid);
        assert_eq!(classify('\u{4DC0}'), CharClass::Noise);
        assert_eq!(classify('\u{9FFF}'), CharClass::Valid);
        assert_eq!(classify('\u{A000}'), CharClass::Noise);
    }
}
