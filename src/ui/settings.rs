//! Settings dialog, theme toggle and language selector.

use super::components::{ButtonSize, ButtonVariant, Icon, button};

/// Colour theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value stored in `localStorage` and toggled on `<html>`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Languages offered by the selector, as `(code, label)`.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Español"),
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("ja", "日本語"),
];

/// Sun/moon toggle that flips the `dark` class on the document root.
pub fn theme_toggle() -> String {
    button(
        ButtonVariant::Outline,
        ButtonSize::Icon,
        "Toggle theme",
        &format!(
            r#"data-theme-toggle data-light="{}" data-dark="{}""#,
            Theme::Light.as_str(),
            Theme::Dark.as_str()
        ),
        &format!(
            "{}{}",
            Icon::Sun.svg("icon-sun"),
            Icon::Moon.svg("icon-moon")
        ),
    )
}

/// Dropdown of [`LANGUAGES`].
pub fn language_selector() -> String {
    let options: String = LANGUAGES
        .iter()
        .map(|(code, label)| format!(r#"<option value="{code}">{label}</option>"#))
        .collect();
    format!(r#"<select id="language-selector" class="select" aria-label="Language">{options}</select>"#)
}

/// The settings trigger button plus its modal dialog.
pub fn settings_dialog() -> String {
    let trigger = button(
        ButtonVariant::Outline,
        ButtonSize::Icon,
        "Settings",
        r#"data-open-dialog="settings-dialog""#,
        &Icon::Settings.svg(""),
    );
    format!(
        r#"{trigger}
<dialog id="settings-dialog" class="dialog">
    <form method="dialog">
        <header class="dialog-header">
            <h2 class="dialog-title">Settings</h2>
            <p class="dialog-description">Customize your chat experience</p>
        </header>
        <div class="dialog-body">
            <div class="setting-row"><span>Theme</span>{toggle}</div>
            <div class="setting-row"><span>Language</span>{languages}</div>
        </div>
        <footer class="dialog-footer">
            <button class="btn btn-primary btn-md" value="close">Close</button>
        </footer>
    </form>
</dialog>"#,
        toggle = theme_toggle(),
        languages = language_selector(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_contains_controls() {
        let html = settings_dialog();
        assert!(html.contains(r#"<dialog id="settings-dialog""#));
        assert!(html.contains("data-theme-toggle"));
        assert!(html.contains(r#"id="language-selector""#));
        for (code, _) in LANGUAGES {
            assert!(html.contains(&format!(r#"value="{code}""#)));
        }
    }

    #[test]
    fn test_theme_names() {
        assert_eq!(Theme::default().as_str(), "light");
        assert_eq!(Theme::Dark.as_str(), "dark");
    }
}
