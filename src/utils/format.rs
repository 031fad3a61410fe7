//! Formatting utilities for card labels and style values.

/// Format a zero-based position as a 1-based, two-digit-minimum label
/// (e.g., "01", "12", "100").
pub fn format_index(position: usize) -> String {
    format!("{:02}", position + 1)
}

/// Format a delay for use in an inline style (e.g., "300ms").
pub fn format_ms(ms: u32) -> String {
    format!("{}ms", ms)
}

/// Format a pixel value for a CSS custom property (e.g., "12.5px").
pub fn format_px(px: f64) -> String {
    format!("{:.1}px", px)
}

/// Format an angle for a CSS custom property (e.g., "-1.25deg").
pub fn format_deg(deg: f64) -> String {
    format!("{:.2}deg", deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_index() {
        assert_eq!(format_index(0), "01");
        assert_eq!(format_index(8), "09");
        assert_eq!(format_index(11), "12");
        assert_eq!(format_index(99), "100");
    }

    #[test]
    fn test_format_style_values() {
        assert_eq!(format_ms(300), "300ms");
        assert_eq!(format_px(12.46), "12.5px");
        assert_eq!(format_deg(-1.254), "-1.25deg");
    }
}
