/// Rewrites a score token with a decimal comma (`85,5`) to the standard
/// decimal point form.
pub(crate) fn normalize_decimal(value: &str) -> String {
    value.trim().replace(',', ".")
}

/// Collapses inner whitespace in a name part and strips stray BOM or
/// zero-width characters left over from spreadsheet exports.
pub(crate) fn normalize_token(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
