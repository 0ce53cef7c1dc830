//! Derived Statistics
//!
//! Summary cards computed from the current shelf. Pure and idempotent.

use serde::{Deserialize, Serialize};

use crate::domain::ManhuaItem;

/// One summary card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    pub label: String,
    pub value: String,
    pub trend: String,
}

impl StatItem {
    fn new(label: &str, value: String, trend: &str) -> Self {
        Self {
            label: label.to_string(),
            value,
            trend: trend.to_string(),
        }
    }
}

pub fn compute_stats(items: &[ManhuaItem]) -> Vec<StatItem> {
    let chapters_read: u64 = items.iter().map(|item| u64::from(item.current_chapter)).sum();
    let series_trend = if items.is_empty() {
        "Crie sua primeira estante"
    } else {
        "Atualizadas por você"
    };

    vec![
        StatItem::new("Capítulos lidos", format_grouped(chapters_read), "Registro manual"),
        StatItem::new("Séries ativas", format_grouped(items.len() as u64), series_trend),
        // Not derived yet: there is no release feed behind it
        StatItem::new("Lançamentos hoje", "4".to_string(), "2 favoritos"),
    ]
}

/// pt-BR digit grouping: 1248 -> "1.248"
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1248), "1.248");
        assert_eq!(format_grouped(1234567), "1.234.567");
    }

    #[test]
    fn test_stats_from_items() {
        let items = vec![
            ManhuaItem::new("a", "Moonlit Contract", 1200, 1000),
            ManhuaItem::new("b", "Lotus Noir", 300, 248),
        ];
        let stats = compute_stats(&items);

        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].value, "1.248");
        assert_eq!(stats[1].value, "2");
        assert_eq!(stats[1].trend, "Atualizadas por você");
        assert_eq!(compute_stats(&items), stats);
    }

    #[test]
    fn test_empty_shelf_prompt() {
        let stats = compute_stats(&[]);
        assert_eq!(stats[0].value, "0");
        assert_eq!(stats[1].value, "0");
        assert_eq!(stats[1].trend, "Crie sua primeira estante");
    }
}
