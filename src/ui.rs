use crate::config::SiteConfig;
use chrono::{Datelike, Local};

pub fn render_home(config: &SiteConfig) -> String {
    render_home_at(Local::now().year(), config)
}

pub fn render_about(config: &SiteConfig) -> String {
    render_about_at(Local::now().year(), config)
}

pub fn render_home_at(year: i32, config: &SiteConfig) -> String {
    let body = HOME_BODY.replace("{{TAGLINE}}", &config.tagline);
    render_page(year, config, &config.title, &body)
}

pub fn render_about_at(year: i32, config: &SiteConfig) -> String {
    let body = ABOUT_BODY.replace("{{ABOUT}}", &config.about);
    render_page(year, config, &format!("About · {}", config.title), &body)
}

// {{TITLE}} is substituted last so page bodies can use it too.
fn render_page(year: i32, config: &SiteConfig, page_title: &str, body: &str) -> String {
    LAYOUT_HTML
        .replace("{{BODY}}", body)
        .replace("{{PAGE_TITLE}}", page_title)
        .replace("{{TITLE}}", &config.title)
        .replace("{{YEAR}}", &year.to_string())
}

const HOME_BODY: &str = r#"<section class="hero">
      <h1>{{TITLE}}</h1>
      <p class="tagline">{{TAGLINE}}</p>
    </section>

    <section class="panel">
      <div class="card">
        <h2>Watchlist</h2>
        <p>Symbols I keep an eye on, collected in one place instead of a dozen
        browser tabs.</p>
      </div>
      <div class="card">
        <h2>Notes</h2>
        <p>Occasional write-ups on why a symbol made the list, and how it has
        behaved since.</p>
      </div>
    </section>"#;

const ABOUT_BODY: &str = r#"<section class="prose">
      <h1>About {{TITLE}}</h1>
      <p>{{TITLE}} is {{ABOUT}}.</p>
      <p>New symbols land on the watchlist as they catch my eye; the longer
      write-ups follow once there is something worth saying about them.</p>
    </section>"#;

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{PAGE_TITLE}}</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f4f6f3;
      --bg-2: #d9e8d5;
      --ink: #23302a;
      --accent: #1f8a4c;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e8f0e4 60%, #f3f6ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .site {
      width: min(820px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    nav {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    .brand {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: 1.3rem;
      color: var(--accent-2);
      text-decoration: none;
    }

    .links {
      display: flex;
      gap: 18px;
    }

    .links a {
      color: var(--accent-2);
      text-decoration: none;
      font-weight: 500;
    }

    .links a:hover {
      color: var(--accent);
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .tagline {
      margin: 8px 0 0;
      color: #5c685f;
      font-size: 1.05rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }

    .card {
      background: white;
      border-radius: 18px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .card h2 {
      margin: 0 0 8px;
      font-size: 1.1rem;
      color: var(--accent);
    }

    .card p,
    .prose p {
      margin: 0;
      line-height: 1.55;
      color: #45504a;
    }

    .prose {
      display: grid;
      gap: 14px;
    }

    footer {
      color: #7a847d;
      font-size: 0.85rem;
    }

    @media (max-width: 600px) {
      .site {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="site">
    <nav>
      <a class="brand" href="/">{{TITLE}}</a>
      <div class="links">
        <a href="/">Home</a>
        <a href="/about">About</a>
      </div>
    </nav>

    {{BODY}}

    <footer>&copy; {{YEAR}} {{TITLE}}</footer>
  </main>
</body>
</html>
"#;
