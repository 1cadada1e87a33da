//! Custom widget components

mod confirm_dialog;
mod detail_panel;
mod employee_header;
pub mod modal_overlay;
mod nested_panel;
mod record_list;
mod status_bar;

pub use confirm_dialog::ConfirmDialog;
pub use detail_panel::DetailPanel;
pub use employee_header::{EmployeeHeader, Toolbar};
pub use nested_panel::NestedPanel;
pub use record_list::RecordList;
pub use status_bar::StatusBar;

// Re-export state types from app layer (these are used by render/)
pub use roster_app::confirm_dialog::ConfirmDialogState;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pad or truncate `text` to exactly `width` display columns
pub(crate) fn fit(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{}{}", text, " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::fit;

    #[test]
    fn test_fit_pads_short_text() {
        assert_eq!(fit("abc", 5), "abc  ");
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        assert_eq!(fit("Product Owner", 8), "Product…");
    }

    #[test]
    fn test_fit_exact_width() {
        assert_eq!(fit("abcd", 4), "abcd");
    }
}
