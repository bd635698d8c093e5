// crates/vnlocale-core/src/text.rs

//! Accent folding for Vietnamese text.
//!
//! Every accented letter of the Vietnamese alphabet maps to its unaccented
//! Latin base letter (`ắ` → `a`, `Ư` → `U`, `đ` → `d`), and stray combining
//! marks are dropped so that decomposed input (`a` + U+0306 + U+0301) folds
//! to the same result as the precomposed letter.
//!
//! Folding is one pass over the code points. Characters outside the table
//! pass through untouched, which makes the transform total and idempotent.

use std::borrow::Cow;

/// Casing policy applied while folding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// Keep the input's casing (`Hồ` → `Ho`).
    Preserve,
    /// Lowercase first, then fold (`Hồ` → `ho`).
    Lower,
}

/// Folds `s` under the given casing policy.
///
/// Returns [`Cow::Borrowed`] when the input needs no change, which is the
/// common case for the ASCII slug names of the dataset.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use vnlocale_core::text::{fold, Case};
///
/// assert_eq!(fold("Thành phố Hồ Chí Minh", Case::Preserve), "Thanh pho Ho Chi Minh");
/// assert_eq!(fold("Thành phố Hồ Chí Minh", Case::Lower), "thanh pho ho chi minh");
/// assert!(matches!(fold("quan 3", Case::Lower), Cow::Borrowed(_)));
/// ```
pub fn fold(s: &str, case: Case) -> Cow<'_, str> {
    let untouched = match case {
        Case::Preserve => s.is_ascii(),
        Case::Lower => s.is_ascii() && !s.bytes().any(|b| b.is_ascii_uppercase()),
    };
    if untouched {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    match case {
        Case::Preserve => s.chars().for_each(|ch| push_folded(&mut out, ch)),
        Case::Lower => s
            .chars()
            .flat_map(char::to_lowercase)
            .for_each(|ch| push_folded(&mut out, ch)),
    }
    Cow::Owned(out)
}

/// Strips Vietnamese diacritics and keeps the original casing.
///
/// ```
/// use vnlocale_core::remove_accents;
///
/// assert_eq!(remove_accents("Phường Bến Nghé"), "Phuong Ben Nghe");
/// assert_eq!(remove_accents("ĐÀ NẴNG"), "DA NANG");
/// ```
pub fn remove_accents(s: &str) -> String {
    fold(s, Case::Preserve).into_owned()
}

/// Lowercases, then strips Vietnamese diacritics.
///
/// This is the form used for search queries and for `Ward::raw_detail`.
///
/// ```
/// use vnlocale_core::to_lower_case_and_remove_accents;
///
/// assert_eq!(to_lower_case_and_remove_accents("Quận Hoàn Kiếm"), "quan hoan kiem");
/// ```
pub fn to_lower_case_and_remove_accents(s: &str) -> String {
    fold(s, Case::Lower).into_owned()
}

/// Short alias of [`to_lower_case_and_remove_accents`] for building index keys.
#[inline]
pub fn fold_key(s: &str) -> String {
    to_lower_case_and_remove_accents(s)
}

/// Compares two strings for equality after lowercasing and accent folding.
///
/// ```
/// use vnlocale_core::equals_folded;
///
/// assert!(equals_folded("Cần Thơ", "can tho"));
/// assert!(!equals_folded("Cần Thơ", "Can Thanh"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold(a, Case::Lower) == fold(b, Case::Lower)
}

/// Combining marks Vietnamese text may carry as separate code points.
///
/// Tone marks (huyền, sắc, hỏi, ngã, nặng plus the deprecated U+0340/U+0341
/// tone aliases) and the vowel modifiers (circumflex, breve, horn, and the
/// spacing circumflex U+02C6 some legacy encoders emit).
#[inline]
pub fn is_vietnamese_mark(ch: char) -> bool {
    matches!(
        ch,
        '\u{0300}'..='\u{0303}'
            | '\u{0306}'
            | '\u{0309}'
            | '\u{031B}'
            | '\u{0323}'
            | '\u{0340}'
            | '\u{0341}'
            | '\u{02C6}'
    )
}

/// Base letter of an accented Vietnamese letter, `None` for anything else.
#[inline]
pub fn base_letter(ch: char) -> Option<char> {
    let base = match ch {
        'à' | 'á' | 'ạ' | 'ả' | 'ã' | 'â' | 'ầ' | 'ấ' | 'ậ' | 'ẩ' | 'ẫ' | 'ă' | 'ằ' | 'ắ'
        | 'ặ' | 'ẳ' | 'ẵ' => 'a',
        'À' | 'Á' | 'Ạ' | 'Ả' | 'Ã' | 'Â' | 'Ầ' | 'Ấ' | 'Ậ' | 'Ẩ' | 'Ẫ' | 'Ă' | 'Ằ' | 'Ắ'
        | 'Ặ' | 'Ẳ' | 'Ẵ' => 'A',
        'è' | 'é' | 'ẹ' | 'ẻ' | 'ẽ' | 'ê' | 'ề' | 'ế' | 'ệ' | 'ể' | 'ễ' => 'e',
        'È' | 'É' | 'Ẹ' | 'Ẻ' | 'Ẽ' | 'Ê' | 'Ề' | 'Ế' | 'Ệ' | 'Ể' | 'Ễ' => 'E',
        'ì' | 'í' | 'ị' | 'ỉ' | 'ĩ' => 'i',
        'Ì' | 'Í' | 'Ị' | 'Ỉ' | 'Ĩ' => 'I',
        'ò' | 'ó' | 'ọ' | 'ỏ' | 'õ' | 'ô' | 'ồ' | 'ố' | 'ộ' | 'ổ' | 'ỗ' | 'ơ' | 'ờ' | 'ớ'
        | 'ợ' | 'ở' | 'ỡ' => 'o',
        'Ò' | 'Ó' | 'Ọ' | 'Ỏ' | 'Õ' | 'Ô' | 'Ồ' | 'Ố' | 'Ộ' | 'Ổ' | 'Ỗ' | 'Ơ' | 'Ờ' | 'Ớ'
        | 'Ợ' | 'Ở' | 'Ỡ' => 'O',
        'ù' | 'ú' | 'ụ' | 'ủ' | 'ũ' | 'ư' | 'ừ' | 'ứ' | 'ự' | 'ử' | 'ữ' => 'u',
        'Ù' | 'Ú' | 'Ụ' | 'Ủ' | 'Ũ' | 'Ư' | 'Ừ' | 'Ứ' | 'Ự' | 'Ử' | 'Ữ' => 'U',
        'ỳ' | 'ý' | 'ỵ' | 'ỷ' | 'ỹ' => 'y',
        'Ỳ' | 'Ý' | 'Ỵ' | 'Ỷ' | 'Ỹ' => 'Y',
        'đ' => 'd',
        'Đ' => 'D',
        _ => return None,
    };
    Some(base)
}

#[inline]
fn push_folded(out: &mut String, ch: char) {
    if is_vietnamese_mark(ch) {
        return;
    }
    out.push(base_letter(ch).unwrap_or(ch));
}
