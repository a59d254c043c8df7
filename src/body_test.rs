use super::*;
use serde_json::json;

mod read_body {
    use super::*;

    #[test]
    fn when_json_valid_should_parse_structured_value() {
        // Arrange & Act
        let result = read_body(Some(r#"{"foo": "bar"}"#), true);

        // Assert
        let payload = result.unwrap().unwrap();
        assert_eq!(payload.as_json(), Some(&json!({ "foo": "bar" })));
    }

    #[test]
    fn when_json_invalid_should_return_raw_body_unchanged() {
        // Arrange & Act
        let result = read_body(Some("brokenJson"), true);

        // Assert
        match result {
            Err((payload, _)) => assert_eq!(payload.as_raw(), Some("brokenJson")),
            Ok(other) => panic!("expected parse failure, got {:?}", other),
        }
    }

    #[test]
    fn when_not_json_should_keep_raw_body() {
        // Arrange & Act
        let result = read_body(Some("a=1&b=2"), false);

        // Assert
        assert_eq!(
            result.unwrap(),
            Some(Payload::Raw("a=1&b=2".to_string()))
        );
    }

    #[test]
    fn when_body_absent_or_empty_should_return_none() {
        assert_eq!(read_body(None, true).unwrap(), None);
        assert_eq!(read_body(Some(""), true).unwrap(), None);
        assert_eq!(read_body(None, false).unwrap(), None);
    }
}
