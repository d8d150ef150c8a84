use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '\u{2026}'; // …

/// Truncates `text` to at most `max_width` terminal columns, appending an
/// ellipsis when anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut truncated = String::new();
    let mut used = 0;

    for ch in text.chars() {
        let char_width = ch.width().unwrap_or(0);
        if used + char_width > budget {
            break;
        }
        truncated.push(ch);
        used += char_width;
    }
    truncated.push(ELLIPSIS);

    truncated
}

/// Computes a centered popup rectangle sized as a percentage of `area` with
/// minimum dimensions, clamped to fit.
pub fn overlay_area(
    area: Rect,
    width_percent: u16,
    height_percent: u16,
    min_width: u16,
    min_height: u16,
) -> Rect {
    let width = percent_of(area.width, width_percent)
        .max(min_width)
        .min(area.width);
    let height = percent_of(area.height, height_percent)
        .max(min_height)
        .min(area.height);

    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}

fn percent_of(dimension: u16, percent: u16) -> u16 {
    let scaled = u32::from(dimension) * u32::from(percent) / 100;

    u16::try_from(scaled).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_keeps_short_text() {
        // Arrange
        let text = "short";

        // Act
        let truncated = truncate_with_ellipsis(text, 10);

        // Assert
        assert_eq!(truncated, "short");
    }

    #[test]
    fn test_truncate_with_ellipsis_cuts_to_width() {
        // Arrange
        let text = "a longer session name";

        // Act
        let truncated = truncate_with_ellipsis(text, 8);

        // Assert
        assert_eq!(truncated.width(), 8);
        assert!(truncated.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_truncate_with_ellipsis_zero_width_is_empty() {
        // Arrange
        let text = "anything";

        // Act
        let truncated = truncate_with_ellipsis(text, 0);

        // Assert
        assert_eq!(truncated, "");
    }

    #[test]
    fn test_overlay_area_is_centered_and_clamped() {
        // Arrange
        let area = Rect::new(0, 0, 100, 30);

        // Act
        let popup = overlay_area(area, 40, 20, 30, 7);

        // Assert
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 7);
        assert_eq!(popup.x, 30);
    }
}
