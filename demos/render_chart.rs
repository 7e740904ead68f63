//! Render a 3D scatter chart to SVG
//!
//! Reads x/y/z (and optionally color) columns from a delimited table, or
//! generates a random cloud, replays scripted interactions and writes the
//! resulting frame.
//!
//! ```text
//! render_chart data.csv --x lon --y lat --z depth --color mag --rotate 40,-25 -o quakes.svg
//! render_chart --points 2000 --view x --zoom -5
//! ```

use anyhow::{bail, Context, Result};
use chartxyz_core::{Table, Vector2};
use chartxyz_visualization::{
    save_chart_svg, ChartConfig, ChartItem, InteractiveChartXyz, KeyEvent, MouseButton,
    MouseEvent, Rect, SelectionLink,
};
use clap::Parser;
use env_logger::Env;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

/// Render an interactive 3D scatter chart to an SVG file
#[derive(Parser)]
#[command(name = "render_chart", version)]
struct Cli {
    /// Delimited table to plot (csv, tsv, xyz, txt). A random cloud is used
    /// when omitted.
    input: Option<PathBuf>,

    /// Column plotted along x
    #[arg(long, default_value = "x")]
    x: String,

    /// Column plotted along y
    #[arg(long, default_value = "y")]
    y: String,

    /// Column plotted along z
    #[arg(long, default_value = "z")]
    z: String,

    /// Column mapped to point color
    #[arg(long)]
    color: Option<String>,

    /// Chart config as JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Left-drag by DX,DY pixels; may be repeated
    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    rotate: Vec<(f32, f32)>,

    /// Wheel notches; ten notches double the zoom
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    zoom: i32,

    /// Canonical view key: x, X, y, Y, z or Z
    #[arg(long)]
    view: Option<char>,

    /// Row indices to highlight, comma separated
    #[arg(long, value_delimiter = ',')]
    select: Vec<usize>,

    /// Points in the random cloud
    #[arg(long, default_value_t = 500)]
    points: usize,

    /// Seed for the random cloud
    #[arg(long, default_value_t = 7)]
    seed: u64,

    #[arg(long, default_value_t = 800.0)]
    width: f32,

    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Output SVG
    #[arg(short, long, default_value = "chart.svg")]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn parse_pair(s: &str) -> std::result::Result<(f32, f32), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected DX,DY, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f32>()
            .map_err(|e| format!("invalid number '{v}': {e}"))
    };
    Ok((parse(a)?, parse(b)?))
}

/// A Gaussian-ish blob with a color column holding the distance from its center
fn random_table(n: usize, seed: u64) -> Result<Table> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut columns = [Vec::with_capacity(n), Vec::with_capacity(n), Vec::with_capacity(n)];
    let mut distance = Vec::with_capacity(n);
    for _ in 0..n {
        let p: [f64; 3] = std::array::from_fn(|_| (0..3).map(|_| rng.gen_range(-1.0..1.0)).sum());
        distance.push(p.iter().map(|v| v * v).sum::<f64>().sqrt());
        for (column, v) in columns.iter_mut().zip(p) {
            column.push(v);
        }
    }
    let [x, y, z] = columns;
    Ok(Table::new()
        .with_column("x", x)?
        .with_column("y", y)?
        .with_column("z", z)?
        .with_column("distance", distance)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let config = match &cli.config {
        Some(path) => ChartConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ChartConfig::default(),
    };

    let (table, color) = match &cli.input {
        Some(path) => {
            let table = chartxyz_io::read_table(path)
                .with_context(|| format!("reading {}", path.display()))?;
            (table, cli.color.clone())
        }
        None => {
            info!("no input given, generating {} random points", cli.points);
            let color = cli.color.clone().or_else(|| Some("distance".to_string()));
            (random_table(cli.points, cli.seed)?, color)
        }
    };
    info!(
        "table has {} rows, columns: {}",
        table.number_of_rows(),
        table.column_names().collect::<Vec<_>>().join(", ")
    );

    let mut chart = InteractiveChartXyz::with_config(config);
    chart.scene_mut().set_size(cli.width, cli.height);
    let margin = 0.2 * cli.width.min(cli.height);
    chart.set_geometry(Rect::new(
        margin,
        margin,
        cli.width - 2.0 * margin,
        cli.height - 2.0 * margin,
    ));

    match &color {
        Some(color) => {
            if table.column_by_name(color).is_none() {
                bail!("no color column named '{}'", color);
            }
            chart.set_input_with_colors(&table, &cli.x, &cli.y, &cli.z, color)?;
        }
        None => chart.set_input(&table, &cli.x, &cli.y, &cli.z)?,
    }

    if !cli.select.is_empty() {
        if let Some(&bad) = cli.select.iter().find(|&&i| i >= table.number_of_rows()) {
            bail!("selected row {} is past the last row", bad);
        }
        let link = SelectionLink::new();
        chart.set_link(Some(link.clone()));
        link.set_selection(cli.select.clone());
    }

    if let Some(key) = cli.view {
        if !chart.key_press_event(&KeyEvent::new(key)) {
            bail!("'{}' is not a view key", key);
        }
    }
    let center = Vector2::new(cli.width / 2.0, cli.height / 2.0);
    for &(dx, dy) in &cli.rotate {
        let drag = MouseEvent::drag(center, center + Vector2::new(dx, dy), MouseButton::Left);
        chart.mouse_move_event(&drag);
    }
    if cli.zoom != 0 {
        chart.mouse_wheel_event(&MouseEvent::new(center, MouseButton::None), cli.zoom);
    }

    save_chart_svg(&mut chart, &cli.output)?;
    info!(
        "wrote {} ({} of {} points visible)",
        cli.output.display(),
        chart.visible_set().len(),
        chart.points().len()
    );
    Ok(())
}
