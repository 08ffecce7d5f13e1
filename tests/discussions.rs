#[cfg(test)]
mod tests {
    use prazo::api::discussions::{page_bounds, page_query, DISCUSSIONS_PER_PAGE};
    use prazo::libs::discussion::Discussion;

    #[test]
    fn test_page_size_is_five() {
        assert_eq!(DISCUSSIONS_PER_PAGE, 5);
    }

    #[test]
    fn test_first_page_bounds() {
        assert_eq!(page_bounds(1), (0, 4));
    }

    #[test]
    fn test_second_page_query() {
        assert_eq!(page_query(2, "7"), "_start=5&_end=9&authorId_ne=7");
    }

    #[test]
    fn test_page_zero_is_clamped_to_first_page() {
        assert_eq!(page_bounds(0), (0, 4));
    }

    #[test]
    fn test_discussion_wire_shape() {
        let discussion = Discussion::new("7", "Hello", "First post");
        let json = serde_json::to_value(&discussion).unwrap();

        // authorId is camelCase on the wire; id is omitted until assigned.
        assert_eq!(json["authorId"], "7");
        assert!(json.get("id").is_none());

        let created = serde_json::json!({
            "id": "42",
            "authorId": "7",
            "title": "Hello",
            "content": "First post"
        });
        let parsed: Discussion = serde_json::from_value(created).unwrap();
        assert_eq!(parsed.id.as_deref(), Some("42"));
        assert_eq!(parsed.author_id, "7");
    }
}
