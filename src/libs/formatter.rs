//! Due-date formatting for board cards.
//!
//! Produces the human-readable remaining-time string shown next to every
//! incomplete task. Both dates are plain calendar dates, so "today" is a
//! true date comparison rather than an instant comparison.
//!
//! - term after today: `Vence em N dia(s)`, singular when N is 1
//! - term equal to today: `Vence hoje`
//! - term before today: `Venceu`

use chrono::NaiveDate;

pub fn format_due(term: NaiveDate, today: NaiveDate) -> String {
    if today < term {
        let days = (term - today).num_days();
        let unit = if days == 1 { "dia" } else { "dias" };
        return format!("Vence em {} {}", days, unit);
    }

    if today == term {
        return "Vence hoje".to_string();
    }

    "Venceu".to_string()
}
