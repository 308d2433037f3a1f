//! Portuguese display formatting for dates, counts and click times.

use chrono::{DateTime, Datelike, Utc};

const MONTHS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Formats a date the way it is shown on the result page: `27 de Abril, 2025`.
pub fn format_long_date(at: DateTime<Utc>) -> String {
    format!(
        "{} de {}, {}",
        at.day(),
        MONTHS[at.month0() as usize],
        at.year()
    )
}

/// View counter with the noun agreeing: `1 visualização`, `142 visualizações`.
pub fn format_views(views: u64) -> String {
    if views == 1 {
        "1 visualização".to_string()
    } else {
        format!("{views} visualizações")
    }
}

/// Link lifetime in whole years when it divides evenly, otherwise in days.
pub fn format_lifetime(days: i64) -> String {
    match days {
        365 => "1 ano".to_string(),
        d if d > 0 && d % 365 == 0 => format!("{} anos", d / 365),
        1 => "1 dia".to_string(),
        d => format!("{d} dias"),
    }
}

/// Formats a click timestamp relative to `now`.
///
/// - same day: `Hoje, 14:32`
/// - previous day: `Ontem, 22:05`
/// - anything older: `25/04/2025 09:10`
pub fn format_click_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let day = at.date_naive();
    let today = now.date_naive();

    if day == today {
        format!("Hoje, {}", at.format("%H:%M"))
    } else if today.pred_opt() == Some(day) {
        format!("Ontem, {}", at.format("%H:%M"))
    } else {
        at.format("%d/%m/%Y %H:%M").to_string()
    }
}
