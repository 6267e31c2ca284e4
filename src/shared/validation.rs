use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating unit numbers on the strata roll and in requests.
    /// A unit number is a short alphanumeric token, optionally with a level
    /// prefix separated by a dot.
    /// - Valid: "101", "12B", "G03", "2.14"
    /// - Invalid: "", "unit 101", "101-", "10/1"
    pub static ref UNIT_NUMBER_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9]+(?:\.[A-Za-z0-9]+)?$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_number_regex_valid() {
        assert!(UNIT_NUMBER_REGEX.is_match("101"));
        assert!(UNIT_NUMBER_REGEX.is_match("12B"));
        assert!(UNIT_NUMBER_REGEX.is_match("G03"));
        assert!(UNIT_NUMBER_REGEX.is_match("2.14"));
    }

    #[test]
    fn test_unit_number_regex_invalid() {
        assert!(!UNIT_NUMBER_REGEX.is_match("")); // empty
        assert!(!UNIT_NUMBER_REGEX.is_match("unit 101")); // space
        assert!(!UNIT_NUMBER_REGEX.is_match("101-")); // trailing hyphen
        assert!(!UNIT_NUMBER_REGEX.is_match("10/1")); // slash
        assert!(!UNIT_NUMBER_REGEX.is_match("1..4")); // double dot
    }
}
