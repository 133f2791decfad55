//! Marketing landing page.

use super::components::{ButtonSize, ButtonVariant, Icon};
use super::html::html_shell;
use super::script::LANDING_SCRIPT;
use super::settings::theme_toggle;

struct Feature {
    title: &'static str,
    description: &'static str,
    icon: Icon,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Responsive Design",
        description: "Looks great on any device",
        icon: Icon::Sun,
    },
    Feature {
        title: "Smooth Animations",
        description: "Buttery smooth transitions",
        icon: Icon::Moon,
    },
    Feature {
        title: "Customizable Themes",
        description: "Personalize your experience",
        icon: Icon::Github,
    },
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Alice Johnson",
        role: "Designer",
        quote: "The visual effects are mind-blowing!",
    },
    Testimonial {
        name: "Bob Smith",
        role: "Developer",
        quote: "Smooth animations make the experience delightful.",
    },
    Testimonial {
        name: "Charlie Brown",
        role: "Product Manager",
        quote: "Our users love the new interface!",
    },
];

const TECH_STACK: [&str; 6] = ["Rust", "Axum", "Tokio", "Reqwest", "Tracing", "Gemini"];

const PARTICLE_COUNT: usize = 50;

/// Fixed pseudo-random particle layout; no two loads need differ.
fn particles() -> String {
    (0..PARTICLE_COUNT)
        .map(|i| {
            let x = (i * 37 + 11) % 100;
            let y = (i * 61 + 23) % 100;
            let duration = 10 + (i * 7) % 20;
            format!(
                r#"<span class="particle" style="left:{x}%;top:{y}%;animation-duration:{duration}s"></span>"#
            )
        })
        .collect()
}

fn hero() -> String {
    format!(
        r#"<section class="hero">
    <h1 class="hero-title gradient-text fade-up">Welcome to Our Visual Wonderland</h1>
    <p class="hero-lead fade-up delay-1">Explore a world of stunning visuals and smooth animations. Scroll down to discover more!</p>
    <div class="fade-up delay-2">
        <a href="/chatbot" class="btn {} {}">Get Started</a>
    </div>
    <div class="scroll-hint">{}</div>
</section>"#,
        ButtonVariant::Gradient.classes(),
        ButtonSize::Lg.classes(),
        Icon::ArrowDown.svg("icon-lg"),
    )
}

fn features() -> String {
    let cards: String = FEATURES
        .iter()
        .enumerate()
        .map(|(i, f)| {
            format!(
                r#"<article class="card feature-card reveal" style="transition-delay:{delay}ms">
    <div class="feature-icon">{icon}</div>
    <h3 class="card-title">{title}</h3>
    <p class="card-description">{description}</p>
</article>"#,
                delay = i * 100,
                icon = f.icon.svg(""),
                title = f.title,
                description = f.description,
            )
        })
        .collect();
    format!(
        r#"<section class="section features"><h2 class="section-title">Amazing Features</h2><div class="grid-3">{cards}</div></section>"#
    )
}

fn testimonials() -> String {
    let cards: String = TESTIMONIALS
        .iter()
        .map(|t| {
            let initial = t.name.chars().next().unwrap_or('?');
            format!(
                r#"<article class="card testimonial reveal">
    <header class="testimonial-header">
        <div class="avatar">{initial}</div>
        <div><h3 class="card-title">{name}</h3><p class="card-description">{role}</p></div>
    </header>
    <p class="quote">&ldquo;{quote}&rdquo;</p>
</article>"#,
                name = t.name,
                role = t.role,
                quote = t.quote,
            )
        })
        .collect();
    format!(
        r#"<section class="section"><h2 class="section-title">What Our Users Say</h2><div class="grid-3">{cards}</div></section>"#
    )
}

fn tech_stack() -> String {
    let badges: String = TECH_STACK
        .iter()
        .map(|t| format!(r#"<span class="badge reveal">{t}</span>"#))
        .collect();
    format!(
        r#"<section class="section"><h2 class="section-title">Our Tech Stack</h2><div class="badges">{badges}</div></section>"#
    )
}

fn footer() -> String {
    let links = [
        (Icon::Github, "GitHub", "https://github.com"),
        (Icon::Twitter, "Twitter", "https://twitter.com"),
        (Icon::Linkedin, "LinkedIn", "https://linkedin.com"),
    ];
    let social: String = links
        .iter()
        .map(|(icon, label, href)| {
            format!(
                r#"<a class="btn btn-ghost btn-icon" href="{href}" aria-label="{label}" rel="noopener">{}</a>"#,
                icon.svg("")
            )
        })
        .collect();
    format!(
        r#"<footer class="site-footer">
    <p>Built with Rust. Chat powered by Gemini.</p>
    <nav class="social">{social}</nav>
</footer>"#
    )
}

/// Render the landing page.
pub fn landing_page() -> String {
    let content = format!(
        r#"<div id="scroll-progress" class="scroll-progress"></div>
<div class="backdrop"><div class="glow"></div>{particles}</div>
<div class="theme-corner">{toggle}</div>
{hero}
{features}
{testimonials}
{tech}
{footer}"#,
        particles = particles(),
        toggle = theme_toggle(),
        hero = hero(),
        features = features(),
        testimonials = testimonials(),
        tech = tech_stack(),
        footer = footer(),
    );
    html_shell("Visual Wonderland", &content, &[LANDING_SCRIPT])
}
