//! plainview terminal entry point.
//!
//! Loads the locator given as the first argument (or the configured home
//! locator), prints the visible part of the page, then reads commands from
//! stdin: Enter or `j` scrolls down, `k` up, `g` back to the top,
//! `o <url>` opens another locator and `q` quits.
//!
//! Set `PLAINVIEW_CONFIG` to a TOML file to override viewport and
//! transport settings.

mod input;
mod render;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

use input::InputEvent;
use plainview_browser::{Browser, BrowserConfig};
use plainview_net::RustlsTlsProvider;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::var_os("PLAINVIEW_CONFIG") {
        Some(path) => BrowserConfig::load(Path::new(&path))?,
        None => BrowserConfig::default(),
    };
    log::info!(
        "Starting plainview ({}x{}, {}x{} cells)",
        config.width,
        config.height,
        config.hstep,
        config.vstep,
    );

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.home_url.clone());

    let mut browser = Browser::new(config);
    browser.set_tls_provider(Box::new(RustlsTlsProvider::new()));
    browser
        .load(&url)
        .with_context(|| format!("failed to load {url}"))?;
    draw(&browser)?;

    for line in io::stdin().lock().lines() {
        match InputEvent::parse(&line?) {
            InputEvent::ScrollDown => browser.scroll_down(),
            InputEvent::ScrollUp => browser.scroll_up(),
            InputEvent::Top => browser.scroll_mut().scroll_to_top(),
            InputEvent::Open(url) => {
                if let Err(e) = browser.load(&url) {
                    log::error!("failed to load {url}: {e}");
                    continue;
                }
            },
            InputEvent::Quit => break,
            InputEvent::Unknown(cmd) => {
                log::warn!("unknown command {cmd:?} (Enter/j, k, g, o <url>, q)");
                continue;
            },
        }
        draw(&browser)?;
    }

    Ok(())
}

/// Print the visible part of the page followed by a status line.
fn draw(browser: &Browser) -> Result<()> {
    let frame = render::render_frame(browser.visible_entries(), &browser.config);
    let url = browser
        .current_url()
        .map(ToString::to_string)
        .unwrap_or_default();

    let mut out = io::stdout().lock();
    writeln!(out, "{frame}")?;
    writeln!(
        out,
        "-- {url} [{}/{}px] --",
        browser.scroll().offset,
        browser.content_height(),
    )?;
    out.flush()?;
    Ok(())
}
