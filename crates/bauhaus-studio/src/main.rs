use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use bauhaus_clock::cities::{find_city, CitySelector, IanaZones, CITIES};
use bauhaus_clock::prelude::*;
use bauhaus_clock::swatches::swatch_svg;
use bauhaus_engine::logging::{init_logging, LoggingConfig};
use bauhaus_engine::render::write_png;

#[derive(Debug, Parser)]
#[command(name = "bauhaus", version, about = "Bauhaus analog clock renderer")]
struct Arguments {
    /// Log filter in env_logger syntax; overrides RUST_LOG.
    #[arg(long, global = true)]
    log: Option<String>,
    /// Prefix log lines with millisecond timestamps.
    #[arg(long, global = true)]
    log_timestamps: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render one frame.
    Render {
        #[command(flatten)]
        clock: ClockArgs,
        /// Render this time (HH:MM[:SS[.mmm]]) instead of the system clock.
        #[arg(long)]
        time: Option<TimeSample>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Keep a file updated with the live clock until interrupted.
    Live {
        #[command(flatten)]
        clock: ClockArgs,
        /// SVG file rewritten on every frame.
        #[arg(long)]
        out: PathBuf,
        /// Stop after this many frames.
        #[arg(long)]
        frames: Option<u64>,
    },
    /// Render the world-clock panel for one city or all of them.
    World {
        /// City name or zone id; all cities when omitted.
        #[arg(long)]
        city: Option<String>,
        /// Directory receiving one `<zone>.svg` per city.
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Render the night-mode swatch strip.
    Swatches {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Args)]
struct ClockArgs {
    #[arg(long, default_value_t = 300.0)]
    size: f32,
    #[arg(long, default_value_t = Theme::Light)]
    theme: Theme,
    #[arg(long, default_value_t = TickRate::Smooth)]
    tick_rate: TickRate,
    #[arg(long)]
    hide_numbers: bool,
    /// Class attribute for the root <svg>.
    #[arg(long = "class", default_value = "")]
    class_name: String,
}

impl ClockArgs {
    fn props(&self) -> Result<ClockProps> {
        if !(self.size > 0.0 && self.size.is_finite()) {
            bail!("--size must be a positive number, got {}", self.size);
        }
        Ok(ClockProps::new()
            .size(self.size)
            .theme(self.theme)
            .tick_rate(self.tick_rate)
            .hide_numbers(self.hide_numbers)
            .class_name(self.class_name.clone()))
    }
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// SVG destination; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Also rasterize to this PNG file.
    #[arg(long)]
    png: Option<PathBuf>,
}

impl OutputArgs {
    fn emit(&self, svg: &str) -> Result<()> {
        match &self.out {
            Some(path) => write_svg(path, svg)?,
            None => std::io::stdout()
                .write_all(svg.as_bytes())
                .context("failed to write SVG to stdout")?,
        }
        if let Some(png) = &self.png {
            write_png(svg, png)?;
            log::info!("wrote {}", png.display());
        }
        Ok(())
    }
}

fn write_svg(path: &Path, svg: &str) -> Result<()> {
    std::fs::write(path, svg).with_context(|| format!("failed to write {}", path.display()))
}

fn main() {
    let args = Arguments::parse();

    let mut logging = args.log.clone().map(LoggingConfig::with_filter).unwrap_or_default();
    logging.timestamps = args.log_timestamps;
    init_logging(logging);

    if let Err(err) = run(args.command) {
        eprintln!("error: {err}");
        err.chain().skip(1).for_each(|cause| eprintln!("because: {cause}"));
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render { clock, time, output } => {
            let props = clock.props()?.time(time);
            let renderer = ClockRenderer::new(props, SystemClock);
            log::info!("rendering {}", renderer.sample());
            output.emit(&renderer.svg())
        }
        Command::Live { clock, out, frames } => live(clock.props()?, &out, frames),
        Command::World { city, dir } => world(city.as_deref(), &dir),
        Command::Swatches { output } => output.emit(&swatch_svg()),
    }
}

fn live(props: ClockProps, out: &Path, frames: Option<u64>) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    {
        let running = Arc::clone(&running);
        ctrlc::set_handler(move || running.store(false, Ordering::Relaxed))
            .context("failed to install <CTRL-C> handler")?;
    }

    let mut clock = ClockRenderer::new(props, SystemClock);
    clock.mount(Instant::now());
    write_svg(out, &clock.svg())?;
    log::info!(
        "live clock -> {} every {:?}",
        out.display(),
        clock.scheduler().interval().unwrap_or_default()
    );

    let mut written = 1u64;
    while running.load(Ordering::Relaxed) && frames.is_none_or(|limit| written < limit) {
        let Some(deadline) = clock.scheduler().next_deadline() else { break };
        std::thread::sleep(deadline.saturating_duration_since(Instant::now()));

        if clock.tick(Instant::now()) {
            write_svg(out, &clock.svg())?;
            written += 1;
        }
    }

    clock.unmount();
    log::info!("stopped after {written} frames, {} timer fires", clock.scheduler().fired());
    Ok(())
}

fn world(city: Option<&str>, dir: &Path) -> Result<()> {
    let indices: Vec<usize> = match city {
        Some(query) => match find_city(query) {
            Some(i) => vec![i],
            None => bail!(
                "unknown city {query:?}; known: {}",
                CITIES.iter().map(|c| c.name).collect::<Vec<_>>().join(", ")
            ),
        },
        None => (0..CITIES.len()).collect(),
    };

    std::fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let now = Instant::now();
    let mut selector = CitySelector::new(IanaZones, now);
    for i in indices {
        selector.select(i, now);
        let city = selector.city();
        let file = dir.join(format!("{}.svg", city.timezone.replace('/', "_")));
        write_svg(&file, &selector.clock().svg())?;
        println!("{:<14} {:<20} {}  {}", city.name, city.timezone, selector.label(), file.display());
    }
    selector.unmount();
    Ok(())
}
