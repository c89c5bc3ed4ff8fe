/// Utilities for date and time formatting
///
/// Wire timestamps stay ISO-8601 strings; these helpers cut out the parts
/// needed for display and fall back to the raw string on anything odd.

/// Format an ISO date string to DD/MM/YYYY.
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Extract the HH:MM:SS part of an ISO datetime string.
/// Example: "2024-03-15T14:02:26.123Z" -> "14:02:26"
pub fn format_time(datetime_str: &str) -> String {
    if let Some((_, time_part)) = datetime_str.split_once('T') {
        let time = time_part.split('.').next().unwrap_or(time_part);
        return time.trim_end_matches('Z').to_string();
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2024-03-15T14:02:26.123Z"), "14:02:26");
        assert_eq!(format_time("2024-12-31T23:59:59Z"), "23:59:59");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_time("invalid"), "");
    }
}
