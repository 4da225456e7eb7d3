use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use odetect_core::detection::domain::detector_config::{is_valid_threshold, DetectorConfig};
use odetect_core::detection::domain::model_dnn_detector::ModelDnnDetector;
use odetect_core::detection::infrastructure::detector_registry::{self, DetectorKind};
use odetect_core::detection::infrastructure::model_files;
use odetect_core::pipeline::annotate_image_use_case::AnnotateImageUseCase;
use odetect_core::pipeline::annotate_raw_use_case::AnnotateRawUseCase;
use odetect_core::shared::caps::{OdCaps, PixelFormat};
use odetect_core::shared::constants::IMAGE_EXTENSIONS;
use odetect_core::video::infrastructure::image_file_reader::ImageFileReader;
use odetect_core::video::infrastructure::image_file_writer::ImageFileWriter;

/// Draws boxes around faces in images or raw frames.
#[derive(Parser)]
#[command(name = "odetect")]
struct Cli {
    /// Input image, or raw frame file when --raw is given.
    input: PathBuf,

    /// Output image, or raw BGR frame file when --raw is given.
    output: PathBuf,

    /// Directory holding deploy.onnx and its weights file.
    #[arg(long)]
    model_dir: Option<PathBuf>,

    /// Minimum confidence a face must exceed (0.0 exclusive to 1.0 inclusive).
    #[arg(long, default_value = "0.5")]
    threshold: f32,

    /// Detector implementation.
    #[arg(long, default_value = "resnet10-ssd")]
    detector: DetectorKind,

    /// Treat input as a headerless raw frame of this size, e.g. 640x480.
    #[arg(long, value_name = "WIDTHxHEIGHT")]
    raw: Option<String>,

    /// Pixel layout of the raw input frame.
    #[arg(long, default_value = "bgr24")]
    pixel_format: PixelFormat,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let model_dir = match cli.model_dir.clone() {
        Some(dir) => dir,
        None => model_files::default_model_dir()?,
    };
    log::info!("Using model directory {}", model_dir.display());
    let config = DetectorConfig::new(cli.threshold);

    let faces = if let Some(size) = &cli.raw {
        let (width, height) = parse_frame_size(size)?;
        let caps = OdCaps::new(width, height, cli.pixel_format)?;
        let detector = detector_registry::construct(cli.detector, &model_dir, caps, config)?;
        AnnotateRawUseCase::new(detector).execute(&cli.input, &cli.output)?
    } else {
        let kind = cli.detector;
        let factory = move |caps: OdCaps| -> Result<
            Box<dyn ModelDnnDetector>,
            Box<dyn std::error::Error>,
        > { Ok(detector_registry::construct(kind, &model_dir, caps, config)?) };
        let mut use_case = AnnotateImageUseCase::new(
            Box::new(ImageFileReader::new()),
            Box::new(ImageFileWriter::new()),
            Box::new(factory),
        );
        use_case.execute(&cli.input, &cli.output)?
    };

    println!("{faces} face(s) -> {}", cli.output.display());
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !is_valid_threshold(cli.threshold) {
        return Err(format!(
            "Threshold must be greater than 0.0 and at most 1.0, got {}",
            cli.threshold
        )
        .into());
    }
    if cli.raw.is_none() && !is_image(&cli.input) {
        return Err(format!(
            "Unsupported image type: {} (use --raw for raw frames)",
            cli.input.display()
        )
        .into());
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Parses `WIDTHxHEIGHT` (case-insensitive separator).
fn parse_frame_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(&['x', 'X'][..])
        .ok_or_else(|| format!("Frame size must look like 640x480, got '{s}'"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<u32>()
            .map_err(|_| format!("Invalid frame dimension '{v}' in '{s}'"))
    };
    Ok((parse(w)?, parse(h)?))
}
