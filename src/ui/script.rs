//! Inline client scripts.
//!
//! The browser side is deliberately thin: it shows the optimistic user
//! bubble, calls the JSON API, and re-fetches the server-rendered message
//! list. The server's history is always the source of truth.

/// Applies the stored theme before first paint and wires every toggle.
pub const THEME_SCRIPT: &str = r##"
(() => {
  const root = document.documentElement;
  const stored = localStorage.getItem('theme');
  const prefersDark = window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches;
  root.classList.toggle('dark', stored ? stored === 'dark' : prefersDark);
  document.addEventListener('click', (event) => {
    const toggle = event.target.closest('[data-theme-toggle]');
    if (!toggle) return;
    const dark = !root.classList.contains('dark');
    root.classList.toggle('dark', dark);
    localStorage.setItem('theme', dark ? toggle.dataset.dark : toggle.dataset.light);
  });
})();
"##;

/// Chat page behaviour.
pub const CHAT_SCRIPT: &str = r##"
(() => {
  const shell = document.querySelector('[data-session-id]');
  if (!shell) return;
  const sessionId = shell.dataset.sessionId;
  const heartbeatMs = Number(shell.dataset.heartbeatMs) || 60000;
  const api = `/api/sessions/${encodeURIComponent(sessionId)}`;
  const list = document.getElementById('message-list');
  const typing = document.getElementById('typing-indicator');
  const form = document.getElementById('message-form');
  const input = form.querySelector('textarea[name=message]');
  const fileInput = document.getElementById('image-file');
  const toaster = document.getElementById('toaster');

  const toast = (title, description, destructive) => {
    const el = document.createElement('div');
    el.className = destructive ? 'toast toast-destructive' : 'toast';
    const t = document.createElement('strong');
    t.textContent = title;
    const d = document.createElement('p');
    d.textContent = description;
    el.append(t, d);
    toaster.append(el);
    setTimeout(() => el.remove(), 4000);
  };

  const scrollToEnd = () => { list.scrollTop = list.scrollHeight; };

  // The server evicted this session; start over on a fresh one.
  let expired = false;
  const checkExpired = (resp) => {
    if (resp.status !== 404) return false;
    if (!expired) {
      expired = true;
      toast('Session expired', 'Starting a new chat...', true);
      setTimeout(() => window.location.reload(), 1500);
    }
    return true;
  };

  const refresh = async () => {
    const resp = await fetch(`/chatbot/${encodeURIComponent(sessionId)}/messages`);
    if (checkExpired(resp)) return;
    if (resp.ok) {
      list.innerHTML = await resp.text();
      scrollToEnd();
    }
  };

  const optimistic = (text) => {
    list.querySelector('.empty-state')?.remove();
    const row = document.createElement('div');
    row.className = 'message message-user pending';
    const avatar = document.createElement('div');
    avatar.className = 'avatar';
    avatar.textContent = 'U';
    const bubble = document.createElement('div');
    bubble.className = 'bubble';
    const p = document.createElement('p');
    p.className = 'prose';
    p.textContent = text;
    bubble.append(p);
    row.append(avatar, bubble);
    list.append(row);
    scrollToEnd();
  };

  let inFlight = 0;
  const send = async (text) => {
    optimistic(text);
    inFlight += 1;
    typing.hidden = false;
    try {
      const resp = await fetch(`${api}/messages`, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ message: text }),
      });
      if (checkExpired(resp)) return;
      if (!resp.ok) throw new Error('Failed to get response from the bot');
    } catch (error) {
      console.error('Error in chat API:', error);
      toast('Error', 'Failed to get a response from the bot. Please try again.', true);
    } finally {
      inFlight -= 1;
      typing.hidden = inFlight === 0;
      await refresh();
    }
  };

  form.addEventListener('submit', (event) => {
    event.preventDefault();
    const text = input.value;
    if (!text.trim()) return;
    input.value = '';
    send(text);
  });

  input.addEventListener('keydown', (event) => {
    if (event.key === 'Enter' && !event.shiftKey) {
      event.preventDefault();
      form.requestSubmit();
    }
  });

  document.querySelector('[data-clear-chat]').addEventListener('click', async () => {
    const resp = await fetch(`${api}/messages`, { method: 'DELETE' });
    if (checkExpired(resp)) return;
    await refresh();
  });

  document.querySelectorAll('[data-open-dialog]').forEach((btn) => {
    btn.addEventListener('click', () => document.getElementById(btn.dataset.openDialog).showModal());
  });

  const voice = document.querySelector('[data-voice-input]');
  voice.addEventListener('click', () => {
    const Recognition = window.SpeechRecognition || window.webkitSpeechRecognition;
    if (!Recognition) {
      console.error('Speech recognition is not supported in this browser.');
      return;
    }
    const recognition = new Recognition();
    recognition.lang = 'en-US';
    recognition.interimResults = false;
    recognition.maxAlternatives = 1;
    voice.disabled = true;
    voice.classList.add('listening');
    voice.setAttribute('aria-label', 'Listening...');
    const done = () => {
      voice.disabled = false;
      voice.classList.remove('listening');
      voice.setAttribute('aria-label', 'Start voice input');
    };
    recognition.onresult = (event) => { input.value += event.results[0][0].transcript; };
    recognition.onend = done;
    recognition.onerror = (event) => { console.error('Speech recognition error', event.error); done(); };
    recognition.start();
  });

  document.querySelector('[data-image-upload]').addEventListener('click', () => fileInput.click());
  fileInput.addEventListener('change', () => {
    const file = fileInput.files && fileInput.files[0];
    if (!file) return;
    const reader = new FileReader();
    reader.onload = () => {
      input.value = `${input.value} ${reader.result}`;
      toast('Image uploaded', 'Your image has been successfully uploaded.', false);
    };
    reader.onerror = () => {
      toast('Upload failed', 'There was an error uploading your image. Please try again.', true);
    };
    reader.readAsDataURL(file);
    fileInput.value = '';
  });

  const popover = document.getElementById('emoji-popover');
  document.querySelector('[data-toggle=emoji-popover]').addEventListener('click', () => {
    popover.hidden = !popover.hidden;
  });
  popover.addEventListener('click', (event) => {
    const choice = event.target.closest('[data-emoji]');
    if (!choice) return;
    input.value += choice.dataset.emoji;
    popover.hidden = true;
    input.focus();
  });

  list.addEventListener('click', async (event) => {
    const copy = event.target.closest('[data-copy]');
    if (!copy) return;
    const code = copy.parentElement.querySelector('code').textContent;
    await navigator.clipboard.writeText(code);
    copy.classList.add('copied');
    setTimeout(() => copy.classList.remove('copied'), 2000);
  });

  setInterval(async () => {
    try {
      checkExpired(await fetch(`${api}/messages`));
    } catch (error) {
      console.error('Heartbeat failed:', error);
    }
  }, heartbeatMs);

  scrollToEnd();
})();
"##;

/// Landing page scroll effects.
pub const LANDING_SCRIPT: &str = r##"
(() => {
  const bar = document.getElementById('scroll-progress');
  const update = () => {
    const max = document.documentElement.scrollHeight - window.innerHeight;
    bar.style.transform = `scaleX(${max > 0 ? window.scrollY / max : 0})`;
  };
  window.addEventListener('scroll', update, { passive: true });
  update();
  const observer = new IntersectionObserver((entries) => {
    entries.forEach((entry) => {
      if (entry.isIntersecting) {
        entry.target.classList.add('visible');
        observer.unobserve(entry.target);
      }
    });
  });
  document.querySelectorAll('.reveal').forEach((el) => observer.observe(el));
})();
"##;
