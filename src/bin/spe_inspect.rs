//! Print SPE header layouts and file summaries.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use winspec::logger::{self, error, info};
use winspec::{AxisCalibration, FieldSpec, Header, RoiInfo, SpeFile};

#[derive(Parser, Debug)]
#[command(
    name = "spe-inspect",
    about = "Print SPE header layouts and file summaries",
    version
)]
struct Args {
    /// Print name, offset and size of every header field
    #[arg(long)]
    layout: bool,

    /// Print each file's info as JSON instead of a text summary
    #[arg(long)]
    json: bool,

    /// SPE files to inspect
    #[arg(required_unless_present = "layout")]
    files: Vec<PathBuf>,
}

fn print_layout(title: &str, fields: &[FieldSpec]) {
    println!("\n{:30}[{:4}]\tsize", title, "offs");
    for field in fields {
        println!("{:30}[{:4}]\t{:4}", field.name, field.offset, field.size);
    }
}

fn inspect(path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let spe = SpeFile::open(path)?;
    info!("Opened {}", spe.path().display());

    if json {
        println!("{}", serde_json::to_string_pretty(&spe.info())?);
        return Ok(());
    }

    println!("{}", spe.summary());
    println!("\tADC: {}, {}", spe.adc(), spe.adc_rate());
    println!("\tGain: {}, readout time: {} ms", spe.gain(), spe.readout_time());
    println!(
        "\tAxes: '{}' x '{}'",
        spe.x_axis_label(),
        spe.y_axis_label()
    );
    for (i, roi) in spe.rois().iter().enumerate() {
        println!(
            "\tROI {}: x {}..{} /{}, y {}..{} /{}",
            i, roi.startx, roi.endx, roi.groupx, roi.starty, roi.endy, roi.groupy
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init();

    if args.layout {
        print_layout("Header", &Header::layout());
        print_layout("AxisCalibration", &AxisCalibration::layout());
        print_layout("RoiInfo", &RoiInfo::layout());
    }

    let mut status = ExitCode::SUCCESS;
    for path in &args.files {
        if let Err(e) = inspect(path, args.json) {
            error!("{}: {}", path.display(), e);
            status = ExitCode::FAILURE;
        }
    }
    status
}
