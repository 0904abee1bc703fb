#[cfg(test)]
mod common_tests {
    use std::time::{Duration, SystemTime};
    use crate::common::common::{html_escape, parse_log_level, parse_query, system_time_to_secs};
    use crate::common::structs::custom_error::CustomError;

    #[test]
    fn test_parse_query_values() {
        let query = parse_query(Some(String::from("mtime=1&Name=a%2Eb&name=c")));
        assert_eq!(query.get("mtime"), Some(&vec![String::from("1")]));
        assert_eq!(query.get("name"), Some(&vec![String::from("a.b"), String::from("c")]));
    }

    #[test]
    fn test_parse_query_flag_without_value() {
        let query = parse_query(Some(String::from("mtime&&=skipped")));
        assert_eq!(query.get("mtime"), Some(&vec![String::new()]));
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn test_parse_query_none() {
        assert!(parse_query(None).is_empty());
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<a href=\"x\">&'</a>"), "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;&lt;/a&gt;");
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn test_system_time_to_secs() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_millis(1500);
        assert_eq!(system_time_to_secs(time), 1.5);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("warn"), Some(log::LevelFilter::Warn));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("could not bind");
        assert_eq!(error.to_string(), "could not bind");
        assert_eq!(error.message(), "could not bind");
    }
}
