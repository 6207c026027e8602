//! Hebrew code points and transliteration units
//!
//! Keys are sequences of code points in clump order: base letter, then shin/sin dot, then
//! dagesh, then any other mark. They are joined into strings when the lookup tables are built.

// Cantillation marks occupy one contiguous block.
pub const CANTILLATION: std::ops::RangeInclusive<char> = '\u{0591}'..='\u{05AF}';

// Niqqud
pub const SHEVA: char = '\u{05B0}';
pub const HATAF_SEGOL: char = '\u{05B1}';
pub const HATAF_PATAH: char = '\u{05B2}';
pub const HATAF_QAMATS: char = '\u{05B3}';
pub const HIREQ: char = '\u{05B4}';
pub const TSERE: char = '\u{05B5}';
pub const SEGOL: char = '\u{05B6}';
pub const PATAH: char = '\u{05B7}';
pub const QAMATS: char = '\u{05B8}';
pub const HOLAM: char = '\u{05B9}';
pub const HOLAM_HASER: char = '\u{05BA}';
pub const QUBUTS: char = '\u{05BB}';
pub const DAGESH: char = '\u{05BC}';
pub const METEG: char = '\u{05BD}';
pub const RAFE: char = '\u{05BF}';
pub const SHIN_DOT: char = '\u{05C1}';
pub const SIN_DOT: char = '\u{05C2}';
pub const UPPER_DOT: char = '\u{05C4}';
pub const LOWER_DOT: char = '\u{05C5}';

pub const NIQQUD: &[char] = &[
    SHEVA,
    HATAF_SEGOL,
    HATAF_PATAH,
    HATAF_QAMATS,
    HIREQ,
    TSERE,
    SEGOL,
    PATAH,
    QAMATS,
    HOLAM,
    HOLAM_HASER,
    QUBUTS,
    DAGESH,
    METEG,
    RAFE,
    SHIN_DOT,
    SIN_DOT,
    UPPER_DOT,
    LOWER_DOT,
];

/// Marks dropped from clumps entirely.
pub const IGNORED: &[char] = &[METEG, RAFE, UPPER_DOT, LOWER_DOT];

// Punctuation
pub const MAQAF: char = '\u{05BE}';
pub const PASEQ: char = '\u{05C0}';
pub const SOF_PASUQ: char = '\u{05C3}';
pub const NUN_HAFUKHA: char = '\u{05C6}';

// Letters
pub const ALEPH: char = '\u{05D0}';
pub const BET: char = '\u{05D1}';
pub const GIMMEL: char = '\u{05D2}';
pub const DALET: char = '\u{05D3}';
pub const HEH: char = '\u{05D4}';
pub const VAV: char = '\u{05D5}';
pub const ZAYIN: char = '\u{05D6}';
pub const HET: char = '\u{05D7}';
pub const TET: char = '\u{05D8}';
pub const YUD: char = '\u{05D9}';
pub const FINAL_KAF: char = '\u{05DA}';
pub const KAF: char = '\u{05DB}';
pub const LAMED: char = '\u{05DC}';
pub const FINAL_MEM: char = '\u{05DD}';
pub const MEM: char = '\u{05DE}';
pub const FINAL_NUN: char = '\u{05DF}';
pub const NUN: char = '\u{05E0}';
pub const SAMEKH: char = '\u{05E1}';
pub const AYIN: char = '\u{05E2}';
pub const FINAL_PEH: char = '\u{05E3}';
pub const PEH: char = '\u{05E4}';
pub const FINAL_TSADI: char = '\u{05E5}';
pub const TSADI: char = '\u{05E6}';
pub const QOF: char = '\u{05E7}';
pub const RESH: char = '\u{05E8}';
pub const SHIN: char = '\u{05E9}';
pub const TAV: char = '\u{05EA}';

pub type UnitTable = &'static [(&'static [char], &'static str)];

pub const CONSONANTS: UnitTable = &[
    (&[ALEPH], "'"),
    (&[BET], "v"),
    (&[GIMMEL], "g"),
    (&[DALET], "d"),
    (&[HEH], "h"),
    (&[VAV], "w"),
    (&[ZAYIN], "z"),
    (&[HET], "ch"),
    (&[TET], "t"),
    (&[YUD], "y"),
    (&[KAF], "kh"),
    (&[LAMED], "l"),
    (&[MEM], "m"),
    (&[NUN], "n"),
    (&[SAMEKH], "s"),
    (&[AYIN], "."),
    (&[PEH], "ph"),
    (&[TSADI], "ts"),
    (&[QOF], "q"),
    (&[RESH], "r"),
    (&[SHIN, SHIN_DOT], "sh"),
    (&[SHIN, SIN_DOT], "s"),
    (&[TAV], "th"),
    // with dagesh
    (&[BET, DAGESH], "B"),
    (&[GIMMEL, DAGESH], "G"),
    (&[DALET, DAGESH], "D"),
    (&[HEH, DAGESH], "H"),
    (&[VAV, DAGESH], "u"),
    (&[ZAYIN, DAGESH], "Z"),
    (&[HET, DAGESH], "Ch"),
    (&[TET, DAGESH], "T"),
    (&[YUD, DAGESH], "Y"),
    (&[KAF, DAGESH], "K"),
    (&[LAMED, DAGESH], "L"),
    (&[MEM, DAGESH], "M"),
    (&[NUN, DAGESH], "N"),
    (&[SAMEKH, DAGESH], "S"),
    (&[AYIN, DAGESH], "."),
    (&[PEH, DAGESH], "P"),
    (&[TSADI, DAGESH], "Ts"),
    (&[QOF, DAGESH], "Q"),
    (&[RESH, DAGESH], "R"),
    (&[SHIN, SHIN_DOT, DAGESH], "Sh"),
    (&[SHIN, SIN_DOT, DAGESH], "S"),
    (&[TAV, DAGESH], "T"),
    // final forms
    (&[FINAL_KAF, DAGESH], "kh"),
    (&[FINAL_KAF], "kh"),
    (&[FINAL_MEM], "m"),
    (&[FINAL_NUN], "n"),
    (&[FINAL_PEH, DAGESH], "p"),
    (&[FINAL_PEH], "ph"),
    (&[FINAL_TSADI], "ts"),
];

pub const VOWELS: UnitTable = &[
    (&[SHEVA], "'"),
    (&[HATAF_SEGOL], "e"),
    (&[HATAF_PATAH], "a"),
    (&[HATAF_QAMATS], "o"),
    (&[HIREQ], "i"),
    (&[TSERE], "e"),
    (&[SEGOL], "e"),
    (&[PATAH], "a"),
    (&[QAMATS], "a"),
    (&[HOLAM], "o"),
    (&[HOLAM_HASER], "o"),
    (&[QUBUTS], "u"),
];

pub const PUNCTUATION: UnitTable = &[
    (&[MAQAF], "-"),
    (&[PASEQ], "|"),
    (&[SOF_PASUQ], ":"),
    (&[NUN_HAFUKHA], ""),
];

/// Substitutions applied in order to the joined units.
pub const TOUCH_UPS: &[(&str, &str)] = &[
    (r"''", "'"),
    (r" '", " "),
    (r"^'", ""),
    (r"iy", "i"),
    (r"iw ", "i "),
    (r"iw$", "i"),
    (r"ay ", "ai "),
    (r"ay$", "ai"),
    (r"cha ", "ach "),
    (r"cha$", "ach"),
    (r"cho ", "och "),
    (r"cho$", "och"),
    (r"wo", "o"),
];
