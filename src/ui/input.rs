//! Message input: textarea, send, voice, image and emoji affordances.

use super::components::{ButtonSize, ButtonVariant, Icon, button};

/// Emoji palette offered by the picker.
pub const EMOJIS: [&str; 10] = ["😀", "😂", "😍", "🤔", "👍", "👎", "🎉", "🔥", "💡", "❤️"];

fn emoji_picker() -> String {
    let trigger = button(
        ButtonVariant::Outline,
        ButtonSize::Icon,
        "Insert emoji",
        r#"data-toggle="emoji-popover""#,
        &Icon::Smile.svg(""),
    );
    let choices: String = EMOJIS
        .iter()
        .map(|e| {
            button(
                ButtonVariant::Ghost,
                ButtonSize::Md,
                e,
                &format!(r#"data-emoji="{e}""#),
                e,
            )
        })
        .collect();
    format!(
        r#"<div class="popover-anchor">{trigger}<div id="emoji-popover" class="popover emoji-grid" hidden>{choices}</div></div>"#
    )
}

/// Render the input form.
pub fn message_input() -> String {
    let voice = button(
        ButtonVariant::Outline,
        ButtonSize::Icon,
        "Start voice input",
        "data-voice-input",
        &Icon::Mic.svg(""),
    );
    let image = button(
        ButtonVariant::Outline,
        ButtonSize::Icon,
        "Attach image",
        "data-image-upload",
        &Icon::Image.svg(""),
    );

    format!(
        r#"<form id="message-form" class="message-input">
    <textarea name="message" rows="3" placeholder="Type your message..." aria-label="Message"></textarea>
    <div class="input-actions">
        {voice}
        {image}
        <input type="file" id="image-file" accept="image/*" hidden>
        {emoji}
        <button type="submit" class="btn btn-primary btn-icon" aria-label="Send">{send}</button>
    </div>
</form>"#,
        emoji = emoji_picker(),
        send = Icon::Send.svg(""),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_has_all_affordances() {
        let html = message_input();
        assert!(html.contains(r#"name="message""#));
        assert!(html.contains("data-voice-input"));
        assert!(html.contains("data-image-upload"));
        assert!(html.contains(r#"accept="image/*""#));
        assert!(html.contains(r#"type="submit""#));
        for e in EMOJIS {
            assert!(html.contains(&format!(r#"data-emoji="{e}""#)));
        }
    }
}
