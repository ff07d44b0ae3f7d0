/// Normalize a company name for prefix generation.
///
/// Uppercases the input, strips every character that is not an ASCII letter,
/// digit, or space, then trims leading and trailing whitespace. Interior runs
/// of spaces are preserved as-is. Pure and total.
pub fn normalize_company_name(raw: &str) -> String {
    let filtered: String = raw
        .to_uppercase()
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == ' ')
        .collect();
    filtered.trim().to_owned()
}
