use crate::hangul::chosung;

/// Whether every character of `query` is a leading-consonant symbol.
/// The empty query is not a chosung query; callers handle it first.
pub fn is_chosung_query(query: &str) -> bool {
    !query.is_empty() && query.chars().all(chosung::is_leading_consonant)
}

/// Decides whether a display name satisfies a search query.
///
/// - Empty query matches everything, empty names included.
/// - A chosung query must be a prefix of the name's chosung sequence:
///   "ㄱㅎ" matches "김현도", "ㅎㄷ" does not. Prefix semantics are kept
///   as-is for compatibility, substring would accept more.
/// - Any other query is a case-insensitive substring test on the name.
pub fn matches_name(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    if name.is_empty() {
        return false;
    }

    match is_chosung_query(query) {
        true => {
            let name_chosung = chosung::chosung_of(name);
            starts_with_ignore_case(&name_chosung, query)
        },
        false => contains_ignore_case(name, query),
    }
}

/// Overall contact match: the trimmed query against the name, OR-ed with
/// a plain case-insensitive substring test against the phone number.
/// The phone check applies to chosung queries too.
pub fn matches(name: &str, phone_number: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    matches_name(name, query) || contains_ignore_case(phone_number, query)
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.to_lowercase().starts_with(&prefix.to_lowercase())
}

fn contains_ignore_case(text: &str, part: &str) -> bool {
    text.to_lowercase().contains(&part.to_lowercase())
}
