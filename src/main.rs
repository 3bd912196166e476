//! # Termica CLI
//!
//! Command-line interface for printing images on network ESC/POS printers.
//!
//! ## Usage
//!
//! ```bash
//! # Print an image to a printer at the conventional raw port
//! termica print photo.png --host 192.168.1.240
//!
//! # Beiyang models use a wider calibration constant
//! termica print photo.png --host 192.168.1.240 --printer beiyang
//!
//! # Tune the binarization cutoff (lower = lighter print)
//! termica print photo.png --host 192.168.1.240 --threshold 100
//!
//! # Inspect the encoded frame without a printer
//! termica print photo.png --out frame.bin
//! ```

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use termica::{
    TermicaError,
    printer::PrinterConfig,
    protocol::bit_image,
    render::raster,
    transport::{self, TransportOptions, tcp},
};

/// Termica - ESC/POS network image printing utility
#[derive(Parser, Debug)]
#[command(name = "termica")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rasterize an image and send it to the printer
    Print {
        /// Path to the source image (PNG, JPEG, BMP, ...)
        image: PathBuf,

        /// Printer IP address or hostname
        #[arg(long, required_unless_present = "out")]
        host: Option<String>,

        /// Printer TCP port
        #[arg(long, default_value_t = tcp::DEFAULT_PORT)]
        port: u16,

        /// Printer model preset
        #[arg(long, default_value = "generic80", value_parser = parse_printer)]
        printer: PrinterConfig,

        /// Override the model's calibration width in dots
        #[arg(long)]
        calibration_width: Option<u16>,

        /// Override the luminance threshold (0-255, default 127)
        #[arg(long)]
        threshold: Option<u8>,

        /// Socket connect/send timeout in seconds
        #[arg(long, default_value_t = 5)]
        timeout: u64,

        /// Outer job deadline in minutes
        #[arg(long, default_value_t = 45)]
        deadline: u64,

        /// Write the encoded frame to a file instead of printing
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

/// Parse a printer preset name into its configuration.
fn parse_printer(s: &str) -> Result<PrinterConfig, String> {
    match s.to_lowercase().as_str() {
        "generic80" => Ok(PrinterConfig::GENERIC_80MM),
        "beiyang" => Ok(PrinterConfig::BEIYANG),
        other => Err(format!(
            "Unknown printer '{}'. Use 'generic80' or 'beiyang' \
             (or keep a preset and pass --calibration-width).",
            other
        )),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), TermicaError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            image,
            host,
            port,
            printer,
            calibration_width,
            threshold,
            timeout,
            deadline,
            out,
        } => {
            let mut config = printer;
            if let Some(dots) = calibration_width {
                config = config.with_calibration_width(dots);
            }
            if let Some(cutoff) = threshold {
                config = config.with_threshold(cutoff);
            }

            println!(
                "Rasterizing {} for {} ({} dots wide)...",
                image.display(),
                config.name,
                config.calibration_width
            );
            let bytes = std::fs::read(&image)?;
            let matrix = raster::rasterize_bytes(&bytes, &config)?;
            println!("Dot matrix: {}x{}", matrix.width(), matrix.height());

            let frame = bit_image::encode(&matrix)?;

            // Dump mode: write the frame and stop before any network I/O
            if let Some(path) = out {
                std::fs::write(&path, &frame)?;
                println!("Wrote {} bytes to {}", frame.len(), path.display());
                return Ok(());
            }

            // clap guarantees --host when --out is absent
            let host = host.unwrap();
            let addr = format!("{}:{}", host, port);
            let options = TransportOptions {
                connect_timeout: Duration::from_secs(timeout),
                io_timeout: Duration::from_secs(timeout),
                job_deadline: Duration::from_secs(deadline * 60),
            };

            println!("Printing to {} ({} bytes)...", addr, frame.len());
            transport::print(&addr, &frame, &options).await?;
            println!("Printed successfully!");
        }
    }

    Ok(())
}
