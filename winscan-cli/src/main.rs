use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use winscan::io::load_gray_image;
use winscan::{
    Candidate, DummySelector, ExhaustiveConfig, ExhaustiveExplorer, Rect, ScanConfig, ScanReport,
    Scanner, Size, Template, ZnccConfig, ZnccEvaluator,
};

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Sliding-window scanner CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for per-scale diagnostics.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
struct RoiJson {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ExplorerJson {
    stride_x: f32,
    stride_y: f32,
}

impl Default for ExplorerJson {
    fn default() -> Self {
        let cfg = ExhaustiveConfig::default();
        Self {
            stride_x: cfg.stride_x,
            stride_y: cfg.stride_y,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct EvaluatorJson {
    min_score: f32,
    min_variance: f32,
}

impl Default for EvaluatorJson {
    fn default() -> Self {
        let cfg = ZnccConfig::default();
        Self {
            min_score: cfg.min_score,
            min_variance: cfg.min_variance,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    image_path: String,
    template_path: String,
    output_path: Option<String>,
    roi: Option<RoiJson>,
    /// Window sizes as multiples of the template size.
    scales: Vec<f32>,
    explorer: ExplorerJson,
    evaluator: EvaluatorJson,
    stop_at_first_detection: bool,
    verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_path: String::new(),
            template_path: String::new(),
            output_path: None,
            roi: None,
            scales: vec![1.0],
            explorer: ExplorerJson::default(),
            evaluator: EvaluatorJson::default(),
            stop_at_first_detection: false,
            verbose: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct DetectionRecord {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    score: f32,
    aux: Vec<f32>,
}

impl From<&Candidate> for DetectionRecord {
    fn from(value: &Candidate) -> Self {
        Self {
            x: value.window.x,
            y: value.window.y,
            width: value.window.width,
            height: value.window.height,
            score: value.score,
            aux: value.aux.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ScaleRecord {
    width: usize,
    height: usize,
    stride_x: usize,
    stride_y: usize,
    pruned: usize,
    scanned: usize,
    accepted: usize,
}

#[derive(Debug, Serialize)]
struct FailureRecord {
    width: usize,
    height: usize,
    error: String,
}

#[derive(Debug, Serialize)]
struct Output {
    pruned: usize,
    scanned: usize,
    accepted: usize,
    stopped_early: bool,
    scales: Vec<ScaleRecord>,
    failed: Vec<FailureRecord>,
    detections: Vec<DetectionRecord>,
}

impl Output {
    fn new(report: &ScanReport, detections: &[Candidate]) -> Self {
        Self {
            pruned: report.stats.pruned,
            scanned: report.stats.scanned,
            accepted: report.stats.accepted,
            stopped_early: report.stopped_early,
            scales: report
                .scales
                .iter()
                .map(|s| ScaleRecord {
                    width: s.size.width,
                    height: s.size.height,
                    stride_x: s.stride_x,
                    stride_y: s.stride_y,
                    pruned: s.stats.pruned,
                    scanned: s.stats.scanned,
                    accepted: s.stats.accepted,
                })
                .collect(),
            failed: report
                .failed
                .iter()
                .map(|f| FailureRecord {
                    width: f.size.width,
                    height: f.size.height,
                    error: f.error.to_string(),
                })
                .collect(),
            detections: detections.iter().map(DetectionRecord::from).collect(),
        }
    }
}

fn scaled_size(base: Size, factor: f32) -> Size {
    let scale = |dim: usize| (dim as f32 * factor).round().max(0.0) as usize;
    Size::new(scale(base.width), scale(base.height))
}

/// Filter directive for the subscriber: `--trace` adds per-scale debug
/// events, `verbose` alone shows the info-level scale summaries.
fn log_directive(trace: bool, verbose: bool) -> Option<&'static str> {
    if trace {
        Some("winscan=debug")
    } else if verbose {
        Some("winscan=info")
    } else {
        None
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;

    if let Some(directive) = log_directive(cli.trace, config.verbose) {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
            .with_target(false)
            .init();
    }
    if config.image_path.is_empty() || config.template_path.is_empty() {
        return Err("image_path and template_path must be set in the config".into());
    }
    if config.scales.is_empty() {
        return Err("scales must list at least one factor".into());
    }

    let image = load_gray_image(&config.image_path)?;
    let template = Template::from_image(load_gray_image(&config.template_path)?);
    let sizes: Vec<Size> = config
        .scales
        .iter()
        .map(|&factor| scaled_size(template.size(), factor))
        .collect();

    let roi = match &config.roi {
        Some(r) => Rect::new(r.x, r.y, r.width, r.height),
        None => Rect::full(image.size()),
    };

    let view = image.view();
    let mut evaluator = ZnccEvaluator::new(view, template).with_config(ZnccConfig {
        min_score: config.evaluator.min_score,
        min_variance: config.evaluator.min_variance,
    });
    let explorer = ExhaustiveExplorer::new(ExhaustiveConfig {
        stride_x: config.explorer.stride_x,
        stride_y: config.explorer.stride_y,
    });
    let mut scanner = Scanner::new(explorer, DummySelector::new()).with_config(ScanConfig {
        stop_at_first_detection: config.stop_at_first_detection,
        verbose: config.verbose,
    });

    let report = scanner.scan(view.size(), roi, &mut evaluator, &sizes)?;
    tracing::info!(
        pruned = report.stats.pruned,
        scanned = report.stats.scanned,
        accepted = report.stats.accepted,
        "scan finished"
    );

    let output = Output::new(&report, scanner.detections());
    let json = serde_json::to_string_pretty(&output)?;
    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{log_directive, scaled_size, Config};
    use winscan::Size;

    #[test]
    fn verbose_config_installs_info_subscriber() {
        assert_eq!(log_directive(false, false), None);
        assert_eq!(log_directive(false, true), Some("winscan=info"));
        assert_eq!(log_directive(true, false), Some("winscan=debug"));
        assert_eq!(log_directive(true, true), Some("winscan=debug"));
    }

    #[test]
    fn example_config_parses_and_enables_verbose() {
        let config: Config = serde_json::from_str(super::EXAMPLE_JSON).unwrap();
        assert!(config.verbose);
        assert_eq!(config.scales, vec![1.0, 1.5, 2.0]);
        assert_eq!(log_directive(false, config.verbose), Some("winscan=info"));
    }

    #[test]
    fn scale_factors_multiply_template_size() {
        assert_eq!(scaled_size(Size::new(10, 6), 1.5), Size::new(15, 9));
        assert_eq!(scaled_size(Size::new(10, 6), -1.0), Size::new(0, 0));
    }
}
