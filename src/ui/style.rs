//! Inline stylesheet. Local only, no CDN.

pub const STYLES: &str = r##"
:root {
  --bg: #ffffff; --fg: #0f172a; --muted: #f1f5f9; --muted-fg: #64748b;
  --card: #ffffff; --border: #e2e8f0; --primary: #7c3aed; --primary-fg: #ffffff;
  --danger: #dc2626; --radius: 0.75rem;
}
html.dark {
  --bg: #0b0b12; --fg: #f8fafc; --muted: #1e1b2e; --muted-fg: #94a3b8;
  --card: #13111c; --border: #2a2640; --primary: #a78bfa; --primary-fg: #0b0b12;
}
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; background: var(--bg); color: var(--fg); }
.icon { width: 1rem; height: 1rem; }
.icon-lg { width: 2rem; height: 2rem; }
.btn { display: inline-flex; align-items: center; justify-content: center; gap: .5rem; border-radius: .5rem; border: 1px solid transparent; font: inherit; cursor: pointer; text-decoration: none; color: inherit; transition: background .2s, transform .1s; }
.btn:active { transform: scale(.96); }
.btn:disabled { opacity: .5; pointer-events: none; }
.btn-primary { background: var(--primary); color: var(--primary-fg); }
.btn-ghost { background: transparent; }
.btn-ghost:hover, .btn-outline:hover { background: var(--muted); }
.btn-outline { background: transparent; border-color: var(--border); }
.btn-gradient { background: linear-gradient(to right, #a855f7, #ec4899); color: #fff; }
.btn-md { height: 2.5rem; padding: 0 1rem; font-size: .875rem; }
.btn-lg { height: 3rem; padding: 0 1.5rem; font-size: 1rem; }
.btn-icon { height: 2.5rem; width: 2.5rem; }
.btn .icon-moon, html.dark .btn .icon-sun { display: none; }
html.dark .btn .icon-moon { display: inline; }
.btn .icon-check, .btn.copied .icon-copy { display: none; }
.btn.copied .icon-check { display: inline; color: #22c55e; }
.btn.listening { color: var(--danger); }

.chat-shell { display: flex; flex-direction: column; height: calc(100vh - 2rem); max-width: 42rem; margin: 1rem auto; padding: 0 1rem; }
.chat-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
.chat-title { font-size: 1.5rem; margin: 0; }
.toolbar { display: flex; gap: .5rem; }
.message-list { flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 1rem; padding: 1rem; border: 1px solid var(--border); border-radius: var(--radius); background: var(--card); }
.empty-state { color: var(--muted-fg); text-align: center; margin: auto; }
.message { display: flex; gap: .5rem; align-items: flex-start; max-width: 80%; animation: fade-up .3s ease-out; }
.message-user { align-self: flex-end; flex-direction: row-reverse; }
.message-bot { align-self: flex-start; }
.message.pending { opacity: .7; }
.avatar { flex: none; width: 2.5rem; height: 2.5rem; border-radius: 9999px; display: grid; place-items: center; background: var(--muted); font-weight: 600; }
.bubble { border-radius: .5rem; padding: .75rem; background: var(--muted); min-width: 0; }
.message-bot .bubble { background: var(--primary); color: var(--primary-fg); }
.prose { margin: 0; font-size: .875rem; white-space: pre-wrap; overflow-wrap: anywhere; }
.code-block { position: relative; margin: .5rem 0; }
.code-block pre { margin: 0; padding: 1rem; border-radius: .5rem; background: var(--bg); color: var(--fg); overflow-x: auto; }
.code-block [data-copy] { position: absolute; top: .5rem; right: .5rem; }
.typing-indicator { display: flex; gap: .5rem; padding: .5rem .75rem; margin-top: .5rem; width: fit-content; background: var(--primary); border-radius: 9999px; }
.typing-indicator[hidden] { display: none; }
.typing-indicator .dot { width: .5rem; height: .5rem; border-radius: 9999px; background: var(--primary-fg); animation: bounce .6s infinite; }
.typing-indicator .dot:nth-child(2) { animation-delay: .2s; }
.typing-indicator .dot:nth-child(3) { animation-delay: .4s; }
.message-input { display: flex; align-items: flex-end; gap: .5rem; margin-top: 1rem; }
.message-input textarea { flex: 1; resize: none; padding: .75rem; border-radius: .5rem; border: 1px solid var(--border); background: var(--bg); color: var(--fg); font: inherit; }
.input-actions { display: flex; flex-direction: column; gap: .5rem; }
.popover-anchor { position: relative; }
.popover { position: absolute; bottom: 110%; right: 0; width: 16rem; padding: .5rem; border: 1px solid var(--border); border-radius: .5rem; background: var(--card); z-index: 10; }
.emoji-grid { display: grid; grid-template-columns: repeat(5, 1fr); gap: .5rem; }
.emoji-grid[hidden] { display: none; }
.emoji-grid .btn { font-size: 1.5rem; padding: 0; }
.dialog { border: 1px solid var(--border); border-radius: var(--radius); background: var(--card); color: var(--fg); width: min(28rem, 90vw); }
.dialog::backdrop { background: rgb(0 0 0 / .5); }
.dialog-title { margin: 0; }
.dialog-description { color: var(--muted-fg); margin: .25rem 0 1rem; }
.setting-row { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem; }
.dialog-footer { display: flex; justify-content: flex-end; }
.select { height: 2.5rem; border-radius: .5rem; border: 1px solid var(--border); background: var(--bg); color: var(--fg); padding: 0 .5rem; }
.toaster { position: fixed; bottom: 1rem; right: 1rem; display: flex; flex-direction: column; gap: .5rem; z-index: 50; }
.toast { padding: .75rem 1rem; border-radius: .5rem; border: 1px solid var(--border); background: var(--card); box-shadow: 0 10px 20px rgb(0 0 0 / .15); animation: fade-up .2s ease-out; }
.toast p { margin: .25rem 0 0; font-size: .875rem; }
.toast-destructive { background: var(--danger); color: #fff; border-color: var(--danger); }

.scroll-progress { position: fixed; top: 0; left: 0; right: 0; height: 4px; background: linear-gradient(to right, #a855f7, #ec4899); transform-origin: left; transform: scaleX(0); z-index: 50; }
.backdrop { position: fixed; inset: 0; z-index: -1; overflow: hidden; background-image: linear-gradient(to right, #8080800a 1px, transparent 1px), linear-gradient(to bottom, #8080800a 1px, transparent 1px); background-size: 14px 24px; }
.glow { position: absolute; top: -10%; width: 1000px; height: 1000px; border-radius: 9999px; background: #a855f7; opacity: .1; filter: blur(100px); }
.particle { position: absolute; width: 4px; height: 4px; border-radius: 9999px; background: var(--primary); opacity: .4; animation: drift linear infinite alternate; }
.theme-corner { position: fixed; top: 1rem; right: 1rem; z-index: 40; }
.hero { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; padding: 1rem; position: relative; }
.hero-title { font-size: clamp(3rem, 8vw, 4.5rem); margin: 0 0 1.5rem; }
.hero-lead { font-size: 1.25rem; max-width: 42rem; margin: 0 0 2rem; }
.gradient-text { background: linear-gradient(to right, #a855f7, #ec4899); -webkit-background-clip: text; background-clip: text; color: transparent; }
.scroll-hint { position: absolute; bottom: 2.5rem; animation: bounce 1.5s infinite; }
.section { padding: 5rem 1rem; max-width: 72rem; margin: 0 auto; }
.section-title { font-size: 1.875rem; text-align: center; margin: 0 0 3rem; }
.grid-3 { display: grid; gap: 2rem; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); }
.card { border: 1px solid var(--border); border-radius: var(--radius); background: var(--card); padding: 1.5rem; transition: box-shadow .3s; }
.card:hover { box-shadow: 0 10px 25px rgb(0 0 0 / .1); }
.card-title { margin: 0 0 .25rem; font-size: 1.125rem; }
.card-description { margin: 0; color: var(--muted-fg); }
.feature-icon { width: 3rem; height: 3rem; border-radius: 9999px; display: grid; place-items: center; background: #f3e8ff; color: #a855f7; margin-bottom: 1rem; }
.testimonial-header { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
.quote { font-style: italic; margin: 0; }
.badges { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; }
.badge { padding: .5rem 1rem; border-radius: 9999px; background: var(--muted); font-size: 1.125rem; }
.site-footer { display: flex; justify-content: space-between; align-items: center; padding: 2rem 1rem; border-top: 1px solid var(--border); max-width: 72rem; margin: 0 auto; }
.social { display: flex; gap: .5rem; }
.reveal { opacity: 0; transform: translateY(50px); transition: opacity .5s, transform .5s; }
.reveal.visible { opacity: 1; transform: none; }
.fade-up { animation: fade-up .8s ease-out both; }
.delay-1 { animation-delay: .2s; }
.delay-2 { animation-delay: .4s; }

@keyframes fade-up { from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: none; } }
@keyframes bounce { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-50%); } }
@keyframes drift { from { transform: translate(0, 0); } to { transform: translate(40vw, 30vh); } }
"##;
