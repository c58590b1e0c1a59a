//! Shared UI helpers

use ratatui::prelude::*;

use crate::models::Network;

/// Network accent color; test networks render cyan, mainnets yellow
pub fn network_color(network: Network) -> Color {
    match network {
        Network::BaseSepolia => Color::Cyan,
        Network::BaseMainnet => Color::Yellow,
    }
}

/// Footer line of every paginated table
pub fn pagination_line(current: usize, total_pages: usize, total_items: usize, per_page: usize) -> String {
    format!(
        " Page {}/{} | {} items | {} per page (i:cycle) ",
        current, total_pages, total_items, per_page
    )
}

/// Clip `text` to `max` characters with an ellipsis
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut)
}

/// Input field paragraph used by the jump input and the transfer form
pub fn input_line<'a>(content: &'a str, editing: bool) -> Line<'a> {
    if editing {
        Line::from(vec![
            Span::raw(content),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ])
    } else if content.is_empty() {
        Line::from(Span::styled("<empty>", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::raw(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_keeps_short_text() {
        assert_eq!(truncate("eth", 10), "eth");
        assert_eq!(truncate("0x1234567890", 8), "0x12345…");
    }

    #[test]
    fn pagination_line_format() {
        assert_eq!(
            pagination_line(2, 3, 25, 10),
            " Page 2/3 | 25 items | 10 per page (i:cycle) "
        );
    }
}
