use std::path::{Path, PathBuf};

use argh::FromArgs;
use log::{error, info, warn};

use luma::image::{GrayImage, ImageError, ImageSize};
use luma::imgproc::enhance;
use luma::imgproc::interpolation::InterpolationMode;
use luma::imgproc::resize::resize;
use luma::io::{functional, pgm, raw};

/// Container formats handed to the generic decoder; everything else is
/// ignored during enumeration.
const CONTAINER_EXTENSIONS: [&str; 4] = ["bmp", "jpg", "jpeg", "png"];

/// Every resampling ladder starts from this base resolution.
const BASE_SIZE: ImageSize = ImageSize {
    width: 512,
    height: 512,
};

#[derive(FromArgs)]
/// Batch-load grayscale images, write enhanced variants and resampling ladders.
struct Args {
    /// directory holding the input images
    #[argh(option, default = "PathBuf::from(\"data\")")]
    data_dir: PathBuf,

    /// directory the results are written to
    #[argh(option, default = "PathBuf::from(\"results\")")]
    out_dir: PathBuf,

    /// gamma value for the gamma-corrected variant
    #[argh(option, default = "2.2")]
    gamma: f64,

    /// edge length of the square headerless raw dumps
    #[argh(option, default = "512")]
    raw_size: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    std::fs::create_dir_all(&args.out_dir)?;

    let (raw_paths, container_paths) = enumerate_inputs(&args.data_dir)?;
    info!(
        "found {} raw and {} container inputs in {}",
        raw_paths.len(),
        container_paths.len(),
        args.data_dir.display()
    );

    let raw_size = ImageSize {
        width: args.raw_size,
        height: args.raw_size,
    };

    let mut failures = 0usize;
    let inputs = raw_paths
        .iter()
        .map(|p| (p, true))
        .chain(container_paths.iter().map(|p| (p, false)));

    for (path, is_raw) in inputs {
        let decoded = if is_raw {
            raw::read_image_raw(path, raw_size)
        } else {
            functional::read_image_gray_any(path)
        };

        let image = match decoded {
            Ok(image) => image,
            Err(err) => {
                error!("failed to load {}: {err}", path.display());
                failures += 1;
                continue;
            }
        };

        let tag = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "input".to_string());

        match process_input(&image, &tag, &args.out_dir, args.gamma) {
            Ok(()) => info!("processed {} ({})", path.display(), image.size()),
            Err(err) => {
                error!("failed to process {}: {err}", path.display());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!("{failures} input(s) failed").into());
    }

    Ok(())
}

/// Collect raw dumps and container images from the data directory, sorted by
/// file name for a stable processing order.
fn enumerate_inputs(data_dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>), std::io::Error> {
    let mut raw_paths = Vec::new();
    let mut container_paths = Vec::new();

    for entry in std::fs::read_dir(data_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let path = entry.path();
        let Some(ext) = path.extension().map(|e| e.to_ascii_lowercase()) else {
            continue;
        };

        if ext == "raw" {
            raw_paths.push(path);
        } else if CONTAINER_EXTENSIONS.iter().any(|e| ext == *e) {
            container_paths.push(path);
        }
    }

    raw_paths.sort();
    container_paths.sort();

    Ok((raw_paths, container_paths))
}

/// Write the decoded image, its enhanced variants, the center window dump
/// and the resampling ladder for one input.
fn process_input(
    image: &GrayImage,
    tag: &str,
    out_dir: &Path,
    gamma: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    pgm::write_image_pgm(out_dir.join(format!("{tag}.pgm")), image)?;

    let mut negative = GrayImage::from_size_val(image.size(), 0)?;
    enhance::invert(image, &mut negative)?;
    pgm::write_image_pgm(out_dir.join(format!("{tag}_neg.pgm")), &negative)?;

    let mut compressed = GrayImage::from_size_val(image.size(), 0)?;
    enhance::log_compress(image, &mut compressed)?;
    pgm::write_image_pgm(out_dir.join(format!("{tag}_log.pgm")), &compressed)?;

    let mut corrected = GrayImage::from_size_val(image.size(), 0)?;
    enhance::gamma_correct(image, gamma, &mut corrected)?;
    pgm::write_image_pgm(out_dir.join(format!("{tag}_gamma.pgm")), &corrected)?;

    write_center_window(image, &out_dir.join(format!("{tag}_center10.csv")))?;

    write_resample_ladder(image, tag, out_dir)?;

    Ok(())
}

/// Dump the centered 10x10 intensity window as CSV rows.
fn write_center_window(image: &GrayImage, path: &Path) -> Result<(), std::io::Error> {
    if image.width() < 10 || image.height() < 10 {
        warn!(
            "image is smaller than the 10x10 center window, skipping {}",
            path.display()
        );
        return Ok(());
    }

    let (x0, y0) = (image.width() / 2 - 5, image.height() / 2 - 5);
    let mut csv = String::new();
    for y in y0..y0 + 10 {
        let row: Vec<String> = (x0..x0 + 10)
            .map(|x| image.get_pixel(x, y).unwrap_or_default().to_string())
            .collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    std::fs::write(path, csv)
}

/// Write the down/up sampling comparison ladder for both interpolation
/// policies: 512→128, 512→32, 32→512, 512→1024x512 and 128→256x512.
fn write_resample_ladder(
    image: &GrayImage,
    tag: &str,
    out_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    // normalize decoded sizes so every ladder starts from the same base
    let base = if image.size() == BASE_SIZE {
        image.clone()
    } else {
        resized(
            image,
            BASE_SIZE.width,
            BASE_SIZE.height,
            InterpolationMode::Bilinear,
        )?
    };

    for (mode, code) in [
        (InterpolationMode::Nearest, 'n'),
        (InterpolationMode::Bilinear, 'b'),
    ] {
        let down_128 = resized(&base, 128, 128, mode)?;
        pgm::write_image_pgm(out_dir.join(format!("{tag}_{code}_512to128.pgm")), &down_128)?;

        let down_32 = resized(&base, 32, 32, mode)?;
        pgm::write_image_pgm(out_dir.join(format!("{tag}_{code}_512to32.pgm")), &down_32)?;

        let up_512 = resized(&down_32, 512, 512, mode)?;
        pgm::write_image_pgm(out_dir.join(format!("{tag}_{code}_32to512.pgm")), &up_512)?;

        let wide = resized(&base, 1024, 512, mode)?;
        pgm::write_image_pgm(
            out_dir.join(format!("{tag}_{code}_512to1024x512.pgm")),
            &wide,
        )?;

        let tall = resized(&down_128, 256, 512, mode)?;
        pgm::write_image_pgm(
            out_dir.join(format!("{tag}_{code}_128to256x512.pgm")),
            &tall,
        )?;
    }

    Ok(())
}

fn resized(
    src: &GrayImage,
    width: usize,
    height: usize,
    mode: InterpolationMode,
) -> Result<GrayImage, ImageError> {
    let mut dst = GrayImage::from_size_val(ImageSize { width, height }, 0)?;
    resize(src, &mut dst, mode)?;
    Ok(dst)
}
