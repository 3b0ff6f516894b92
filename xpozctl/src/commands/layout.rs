use anyhow::{Result, bail};
use serde::Serialize;
use xpoz_config::Config;
use xpoz_core::carousel::Carousel;
use xpoz_core::gallery::GalleryList;
use xpoz_core::geometry::round_bounds;
use xpoz_model::asset::Asset;
use xpoz_model::geometry::{Bounds, Point};
use xpoz_model::ids::AssetUuid;

use super::Output;
use crate::cli::LayoutArgs;

const MAX_INDEX: usize = 10_000;

#[derive(Debug, Serialize)]
struct LayoutReport {
    width: f64,
    height: f64,
    top: f64,
    left: f64,
    ratio: f64,
    pos: usize,
    jumps: i64,
    x: f64,
    track_offset: f64,
    zoomed_scale: f64,
    zoomed_bounds: Bounds,
}

pub fn run(args: &LayoutArgs, config: &Config, output: Output) -> Result<()> {
    if args.index > MAX_INDEX {
        bail!("--index must be at most {MAX_INDEX}");
    }

    let (width, height) = (
        args.asset.width.round() as u32,
        args.asset.height.round() as u32,
    );
    if width == 0 || height == 0 {
        bail!("--asset must round to at least 1x1 pixels");
    }
    let assets = (0..=args.index)
        .map(|i| {
            AssetUuid::new(format!("asset-{i}"))
                .map(|uuid| Asset::photo(uuid, width, height))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let mut gallery = GalleryList::new();
    gallery.append(assets);

    let mut carousel = Carousel::new(config.carousel, args.viewport);
    carousel.show(args.index, &gallery);
    let slide = carousel.current_slide();

    let report = LayoutReport {
        width: slide.width,
        height: slide.height,
        top: slide.top,
        left: slide.left,
        ratio: slide.ratio,
        pos: slide.pos,
        jumps: slide.jumps,
        x: slide.x,
        track_offset: carousel.offset(),
        zoomed_scale: slide.zoomed_scale,
        zoomed_bounds: round_bounds(slide.zoomed_bounds_for_origin(Point::ORIGIN)),
    };

    output.emit(&report, || {
        println!(
            "fitted   {}x{} at top {} left {}",
            report.width, report.height, report.top, report.left
        );
        println!(
            "slot     pos {} jumps {} x {} (track offset {})",
            report.pos, report.jumps, report.x, report.track_offset
        );
        let b = report.zoomed_bounds;
        println!(
            "zoom {}x pan from ({}, {}) to ({}, {})",
            report.zoomed_scale, b.min.x, b.min.y, b.max.x, b.max.y
        );
    })
}
