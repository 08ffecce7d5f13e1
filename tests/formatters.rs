#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use prazo::libs::formatter::format_due;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
    }

    #[test]
    fn test_due_tomorrow_is_singular() {
        assert_eq!(format_due(today() + Duration::days(1), today()), "Vence em 1 dia");
    }

    #[test]
    fn test_due_in_five_days_is_plural() {
        assert_eq!(format_due(today() + Duration::days(5), today()), "Vence em 5 dias");
    }

    #[test]
    fn test_due_today() {
        assert_eq!(format_due(today(), today()), "Vence hoje");
    }

    #[test]
    fn test_past_term_is_overdue() {
        assert_eq!(format_due(today() - Duration::days(1), today()), "Venceu");
        assert_eq!(format_due(today() - Duration::days(30), today()), "Venceu");
    }

    #[test]
    fn test_due_across_month_boundary() {
        let term = NaiveDate::from_ymd_opt(2026, 9, 2).unwrap();
        assert_eq!(format_due(term, today()), "Vence em 4 dias");
    }
}
