//! Message bubbles, code blocks and the message list.

use crate::session::{Message, Role};

use super::components::{ButtonSize, ButtonVariant, Icon, button};
use super::html::html_escape;

const FENCE: &str = "```";

/// A piece of message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Prose, rendered with whitespace preserved.
    Text(&'a str),
    /// A fenced code block.
    Code {
        lang: Option<&'a str>,
        code: &'a str,
    },
}

/// Split content on triple-backtick fences.
///
/// An unterminated fence is left as text. Whitespace-only text between
/// blocks is dropped.
pub fn split_segments(content: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut rest = content;

    while let Some(start) = rest.find(FENCE) {
        let after = &rest[start + FENCE.len()..];
        let Some(end) = after.find(FENCE) else {
            break;
        };
        push_text(&mut out, &rest[..start]);
        out.push(code_segment(&after[..end]));
        rest = &after[end + FENCE.len()..];
    }
    push_text(&mut out, rest);
    out
}

fn push_text<'a>(out: &mut Vec<Segment<'a>>, text: &'a str) {
    if !text.trim().is_empty() {
        out.push(Segment::Text(text));
    }
}

/// A first line that is a single bare word names the language.
fn code_segment(inner: &str) -> Segment<'_> {
    if let Some((first, body)) = inner.split_once('\n') {
        let first = first.trim();
        if !first.is_empty()
            && !first.contains(char::is_whitespace)
            && !body.trim().is_empty()
        {
            return Segment::Code {
                lang: Some(first),
                code: body.trim(),
            };
        }
    }
    Segment::Code {
        lang: None,
        code: inner.trim(),
    }
}

/// Render a code block with a copy button.
pub fn code_block(lang: Option<&str>, code: &str) -> String {
    let lang_attr = lang
        .map(|l| format!(r#" data-lang="{}""#, html_escape(l)))
        .unwrap_or_default();
    let copy = button(
        ButtonVariant::Outline,
        ButtonSize::Icon,
        "Copy code",
        "data-copy",
        &format!(
            "{}{}",
            Icon::Copy.svg("icon-copy"),
            Icon::Check.svg("icon-check")
        ),
    );
    format!(
        r#"<div class="code-block"{lang_attr}><pre><code>{}</code></pre>{copy}</div>"#,
        html_escape(code)
    )
}

/// Render a single chat message.
pub fn message_bubble(message: &Message) -> String {
    let (avatar, avatar_label) = match message.role() {
        Role::User => ("U", "User Avatar"),
        Role::Bot => ("B", "Bot Avatar"),
    };

    let body: String = split_segments(message.content())
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) => format!(r#"<p class="prose">{}</p>"#, html_escape(text)),
            Segment::Code { lang, code } => code_block(lang, code),
        })
        .collect();

    format!(
        r#"<div class="message message-{role}" data-message-id="{id}">
    <div class="avatar" role="img" aria-label="{avatar_label}">{avatar}</div>
    <div class="bubble">{body}</div>
</div>"#,
        role = message.role(),
        id = message.id(),
    )
}

/// Render the full message list fragment.
pub fn message_list(messages: &[Message]) -> String {
    if messages.is_empty() {
        return r#"<p class="empty-state">Say hello to start the conversation.</p>"#.to_owned();
    }
    messages.iter().map(message_bubble).collect()
}

/// Three bouncing dots shown while a reply is pending.
pub fn typing_indicator() -> &'static str {
    r#"<div id="typing-indicator" class="typing-indicator" hidden aria-label="Bot is typing">
    <span class="dot"></span><span class="dot"></span><span class="dot"></span>
</div>"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;

    #[test]
    fn test_plain_text_is_one_segment() {
        assert_eq!(split_segments("hello"), vec![Segment::Text("hello")]);
    }

    #[test]
    fn test_empty_content_has_no_segments() {
        assert!(split_segments("").is_empty());
    }

    #[test]
    fn test_code_between_text() {
        let segments = split_segments("Try this:\n```rust\nfn main() {}\n```\nDone.");
        assert_eq!(
            segments,
            vec![
                Segment::Text("Try this:\n"),
                Segment::Code {
                    lang: Some("rust"),
                    code: "fn main() {}"
                },
                Segment::Text("\nDone."),
            ]
        );
    }

    #[test]
    fn test_code_without_language() {
        let segments = split_segments("```\nls -la\n```");
        assert_eq!(
            segments,
            vec![Segment::Code {
                lang: None,
                code: "ls -la"
            }]
        );
    }

    #[test]
    fn test_single_line_code() {
        let segments = split_segments("```let x = 1;```");
        assert_eq!(
            segments,
            vec![Segment::Code {
                lang: None,
                code: "let x = 1;"
            }]
        );
    }

    #[test]
    fn test_unterminated_fence_stays_text() {
        let segments = split_segments("before ```code never closed");
        assert_eq!(segments, vec![Segment::Text("before ```code never closed")]);
    }

    #[test]
    fn test_two_blocks() {
        let segments = split_segments("```a```\n```b```");
        assert_eq!(segments.len(), 2);
        assert!(matches!(segments[1], Segment::Code { code: "b", .. }));
    }

    #[test]
    fn test_bubble_escapes_content() {
        let session = SessionStore::new().create();
        let msg = session.append_user("<img src=x onerror=alert(1)>");
        let html = message_bubble(&msg);
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(!html.contains("<img"));
        assert!(html.contains("message-user"));
        assert!(html.contains(">U</div>"));
    }

    #[test]
    fn test_bubble_renders_code_block() {
        let session = SessionStore::new().create();
        let msg = session.append_bot("Here:\n```html\n<b>x</b>\n```");
        let html = message_bubble(&msg);
        assert!(html.contains("message-bot"));
        assert!(html.contains(r#"data-lang="html""#));
        assert!(html.contains("<pre><code>&lt;b&gt;x&lt;/b&gt;</code></pre>"));
        assert!(html.contains("data-copy"));
    }

    #[test]
    fn test_list_preserves_order() {
        let session = SessionStore::new().create();
        session.append_user("first");
        session.append_bot("second");
        let html = message_list(&session.messages());
        let a = html.find("first").unwrap();
        let b = html.find("second").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_empty_list_placeholder() {
        assert!(message_list(&[]).contains("empty-state"));
    }
}
