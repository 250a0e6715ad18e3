//! Card theme shared by the rendered fragments.

/// `<style>` block for every card class plus the expandable-card toggle script.
pub const THEME: &str = include_str!("../../assets/advice_theme.html");

/// Prefixes `body` with the theme so the fragment renders standalone.
pub fn themed(body: &str) -> String {
    format!("{THEME}\n{body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_styles_every_card_class() {
        for class in [
            ".skill-bars",
            ".project-card",
            ".role-card",
            ".learning-card",
            ".cert-card",
            ".expandable-card",
        ] {
            assert!(THEME.contains(class), "missing style for {class}");
        }
    }

    #[test]
    fn test_themed_keeps_body_after_theme() {
        let html = themed("<p>x</p>");
        assert!(html.starts_with("<style>"));
        assert!(html.ends_with("\n<p>x</p>"));
    }
}
