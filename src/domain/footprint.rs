use regex::Regex;

/// Strips every `fromService: True` / `fromService: False` flag from a raw
/// footprint attribute, consuming an optional comma on either side of each
/// occurrence, then trims the result. Matching is case-sensitive on
/// `True`/`False`.
pub fn remove_from_service_flags(footprint: &str) -> String {
    let flag_pattern = Regex::new(r",?\s*fromService:\s*(True|False)\s*,?").unwrap();
    flag_pattern.replace_all(footprint, "").trim().to_string()
}

/// Final slash-delimited segment of a footprint string ("" for empty input).
pub fn last_segment(footprint: &str) -> String {
    if footprint.is_empty() {
        return String::new();
    }
    footprint.split('/').next_back().unwrap_or_default().to_string()
}

/// Partner ID: the segment after the first slash, "" when the string has no
/// slash at all.
pub fn partner_id(footprint: &str) -> String {
    let parts: Vec<&str> = footprint.split('/').collect();
    match parts.len() > 1 {
        true => parts[1].to_string(),
        false => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{last_segment, partner_id, remove_from_service_flags};

    #[test]
    fn remove_flags_with_trailing_comma() {
        let result = remove_from_service_flags("123/abc/fromService: True,MSTealsHeader");
        assert_eq!(result, "123/abc/MSTealsHeader");
    }

    #[test]
    fn remove_flags_with_leading_comma() {
        let result = remove_from_service_flags("123/abc/MSTealsHeader, fromService: False");
        assert_eq!(result, "123/abc/MSTealsHeader");
    }

    #[test]
    fn remove_flags_removes_every_occurrence() {
        // Each match consumes the optional commas around it, so the comma
        // between the two flags is eaten by the first match.
        let result = remove_from_service_flags("a,fromService: True,fromService: False,b");
        assert_eq!(result, "ab");
    }

    #[test]
    fn remove_flags_is_idempotent() {
        let once = remove_from_service_flags("fromService: True,123/abc/MSTealsHeader");
        let twice = remove_from_service_flags(&once);
        assert_eq!(once, "123/abc/MSTealsHeader");
        assert_eq!(once, twice);
    }

    #[test]
    fn remove_flags_leaves_other_casing_alone() {
        let result = remove_from_service_flags("123/abc/fromservice: true,MSTealsHeader");
        assert_eq!(result, "123/abc/fromservice: true,MSTealsHeader");
    }

    #[test]
    fn remove_flags_empty_input() {
        assert_eq!(remove_from_service_flags(""), "");
    }

    #[test]
    fn last_segment_valid() {
        assert_eq!(last_segment("123/abc/MSTealsHeader"), "MSTealsHeader");
    }

    #[test]
    fn last_segment_no_slash() {
        assert_eq!(last_segment("MSTealsHeader"), "MSTealsHeader");
    }

    #[test]
    fn last_segment_empty() {
        assert_eq!(last_segment(""), "");
    }

    #[test]
    fn partner_id_valid() {
        assert_eq!(partner_id("123/abc/MSTealsHeader"), "abc");
    }

    #[test]
    fn partner_id_no_slash() {
        assert_eq!(partner_id("MSTealsHeader"), "");
    }

    #[test]
    fn partner_id_empty() {
        assert_eq!(partner_id(""), "");
    }
}
