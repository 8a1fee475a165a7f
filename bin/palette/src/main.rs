//! Derive a palette from a base color and print it to the terminal.

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    thread,
    time::{Duration, Instant},
};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use harmonia::{
    css_variables, hex_list, parse, text_color_for, Demo, Filter, Interaction, Present,
    RenderSession, SessionConfig, Swatch, TextColor,
};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser)]
#[command(name = "harmonia-palette")]
#[command(version, about = "Derive harmonious color palettes from a base color", long_about = None)]
struct Cli {
    /// Base color: #RGB, #RRGGBB, rgb(), rgba(), hsl() or hsla()
    #[arg(value_name = "COLOR")]
    color: Option<String>,

    /// Scheme to show next to the base color, or "all"
    #[arg(short, long, value_name = "FILTER")]
    filter: Option<Filter>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Swatches)]
    format: Format,

    /// Start from a random base color instead of COLOR
    #[arg(long, conflicts_with = "color")]
    random: bool,

    /// Cycle through the filters this many times after the first render.
    /// Pressing Enter stops the cycle.
    #[arg(long, value_name = "TICKS")]
    demo: Option<usize>,

    /// Session config file (JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Colored blocks with a readable label
    Swatches,
    /// CSS custom properties
    Css,
    /// Comma separated hex values
    Hex,
    /// JSON, one document per render
    Json,
}

#[derive(Serialize)]
struct JsonSwatch<'a> {
    #[serde(flatten)]
    swatch: &'a Swatch,
    text_color: TextColor,
}

#[derive(Serialize)]
struct JsonFrame<'a> {
    filter: Filter,
    swatches: Vec<JsonSwatch<'a>>,
}

/// Writes every rendered frame to stdout in the selected format. The first
/// write error is kept and reported by [`Terminal::finish`].
struct Terminal {
    format: Format,
    error: Option<anyhow::Error>,
}

impl Terminal {
    fn new(format: Format) -> Self {
        Self {
            format,
            error: None,
        }
    }

    fn write_frame(&self, filter: Filter, swatches: &[Swatch]) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        match self.format {
            Format::Swatches => {
                writeln!(out, "{filter}")?;
                for swatch in swatches {
                    write_swatch(&mut out, swatch)?;
                }
            }
            Format::Css => writeln!(out, "{}", css_variables(swatches))?,
            Format::Hex => writeln!(out, "{}", hex_list(swatches))?,
            Format::Json => {
                let frame = JsonFrame {
                    filter,
                    swatches: swatches
                        .iter()
                        .map(|swatch| JsonSwatch {
                            swatch,
                            text_color: text_color_for(&parse(&swatch.hex)),
                        })
                        .collect(),
                };
                serde_json::to_writer_pretty(&mut out, &frame)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn finish(self) -> anyhow::Result<()> {
        match self.error {
            Some(error) => Err(error.context("could not write palette")),
            None => Ok(()),
        }
    }
}

impl Present for Terminal {
    fn present(&mut self, filter: Filter, swatches: &[Swatch]) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.write_frame(filter, swatches) {
            self.error = Some(error);
        }
    }
}

fn write_swatch(out: &mut impl Write, swatch: &Swatch) -> io::Result<()> {
    let background = parse(&swatch.hex);
    let foreground = text_color_for(&background).to_rgb();
    writeln!(
        out,
        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m {:<9}{:<16}{:<14}\x1b[0m",
        background.red,
        background.green,
        background.blue,
        foreground.red,
        foreground.green,
        foreground.blue,
        swatch.hex,
        swatch.var_name,
        swatch.category,
    )
}

fn load_config(path: &Path) -> anyhow::Result<SessionConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read config file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("could not parse config file {}", path.display()))
}

/// Forward every byte read from stdin as a key press. The channel
/// disconnects when stdin closes.
fn spawn_key_reader() -> Receiver<()> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        for byte in io::stdin().lock().bytes() {
            if byte.is_err() || sender.send(()).is_err() {
                break;
            }
        }
    });
    receiver
}

/// Wait for `delay` or until a key arrives. Returns whether a key arrived.
fn wait_for_key(keys: &Receiver<()>, delay: Duration) -> bool {
    let deadline = Instant::now() + delay;
    match keys.recv_timeout(delay) {
        Ok(()) => true,
        Err(RecvTimeoutError::Timeout) => false,
        Err(RecvTimeoutError::Disconnected) => {
            thread::sleep(deadline.saturating_duration_since(Instant::now()));
            false
        }
    }
}

fn run_demo(
    demo: &mut Demo,
    session: &mut RenderSession,
    terminal: &mut Terminal,
    keys: &Receiver<()>,
    ticks: usize,
) {
    for tick in 0..ticks {
        let delay = if tick == 0 {
            demo.config().start_delay()
        } else {
            demo.config().interval()
        };
        if wait_for_key(keys, delay) && demo.interrupt(Interaction::KEY_DOWN, true) {
            tracing::info!(tick, "demo stopped by key press");
        }
        let Some(filter) = demo.tick(session, terminal) else {
            break;
        };
        tracing::debug!(%filter, tick, "demo advanced");
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SessionConfig::default(),
    };
    if let Some(filter) = cli.filter {
        config.filter = filter;
    }

    let mut session = RenderSession::new(config);
    if cli.random {
        let hex = session.randomize(&mut rand::thread_rng());
        tracing::info!(%hex, "random base color");
    } else if let Some(color) = &cli.color {
        session.set_base_text(color.as_str());
    }

    let mut terminal = Terminal::new(cli.format);
    session.render(&mut terminal);

    if let Some(ticks) = cli.demo {
        let mut demo = Demo::new(session.config().demo).stop_on(Interaction::KEY_DOWN);
        let keys = spawn_key_reader();
        run_demo(&mut demo, &mut session, &mut terminal, &keys, ticks);
    }

    terminal.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonia::DemoConfig;

    const QUICK: DemoConfig = DemoConfig {
        start_delay_ms: 0,
        interval_ms: 1,
    };

    #[test]
    fn key_press_stops_the_demo() {
        let (sender, keys) = mpsc::channel();
        let mut session = RenderSession::new(SessionConfig::default());
        sender.send(()).unwrap();

        let mut demo = Demo::new(QUICK).stop_on(Interaction::KEY_DOWN);
        let mut terminal = Terminal::new(Format::Hex);
        run_demo(&mut demo, &mut session, &mut terminal, &keys, 4);
        assert!(!demo.is_active());
        assert_eq!(session.filter(), Filter::Split);
    }

    #[test]
    fn demo_runs_without_keys() {
        let (sender, keys) = mpsc::channel::<()>();
        drop(sender);
        let mut session = RenderSession::new(SessionConfig::default());

        let mut demo = Demo::new(QUICK).stop_on(Interaction::KEY_DOWN);
        let mut terminal = Terminal::new(Format::Hex);
        run_demo(&mut demo, &mut session, &mut terminal, &keys, 2);
        assert!(demo.is_active());
        assert_eq!(session.filter(), Filter::Analogous);
        assert!(terminal.finish().is_ok());
    }

    #[test]
    fn wait_reports_keys() {
        let (sender, keys) = mpsc::channel();
        assert!(!wait_for_key(&keys, Duration::from_millis(1)));
        sender.send(()).unwrap();
        assert!(wait_for_key(&keys, Duration::from_secs(5)));
    }
}
