//! Layout, draw and encode, strictly in input order.

use imgcat_common::Result;
use imgcat_layout::LayoutPlan;
use imgcat_render::{new_canvas, write_output, Compositor};
use tracing::{debug, info};

use crate::settings::{OutputTarget, Settings};

/// Compute the layout for the configured inputs.
pub fn plan(settings: &Settings) -> Result<LayoutPlan> {
    let plan = settings.engine.compute(settings.inputs.len())?;
    info!(
        images = plan.len(),
        layout = %settings.engine.config.mode().kind(),
        canvas = %plan.canvas,
        "computed layout"
    );
    Ok(plan)
}

/// Draw every input onto a fresh canvas and write it to `target`.
///
/// Stops at the first input that fails to decode; the output file is only
/// created once every draw and the encode succeeded.
pub fn render(settings: &Settings, plan: &LayoutPlan, target: &OutputTarget) -> Result<()> {
    let mut canvas = new_canvas(plan.canvas, settings.background)?;
    let compositor = Compositor::new(settings.composite);
    debug!(
        background = %settings.background.to_hex(),
        composite = %settings.composite,
        "drawing inputs"
    );

    for (placement, path) in plan.placements.iter().zip(&settings.inputs) {
        compositor.draw(&mut canvas, placement, path)?;
    }

    write_output(&canvas, &target.path, target.format)?;
    Ok(())
}

/// Plan and render; a dry run stops after planning.
pub fn run(settings: &Settings) -> Result<LayoutPlan> {
    let plan = plan(settings)?;
    if let Some(target) = &settings.output {
        render(settings, &plan, target)?;
    }
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;
    use image::{Rgba, RgbaImage};
    use imgcat_common::{ImgcatError, RenderError, Size};
    use imgcat_config::ImgcatConfig;
    use std::path::{Path, PathBuf};

    const COLORS: [Rgba<u8>; 5] = [
        Rgba([255, 0, 0, 255]),
        Rgba([0, 255, 0, 255]),
        Rgba([0, 0, 255, 255]),
        Rgba([255, 255, 0, 255]),
        Rgba([0, 255, 255, 255]),
    ];
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn write_inputs(dir: &Path, count: usize, size: u32) -> Vec<String> {
        (0..count)
            .map(|i| {
                let path = dir.join(format!("in{i}.png"));
                RgbaImage::from_pixel(size, size, COLORS[i]).save(&path).unwrap();
                path.to_string_lossy().into_owned()
            })
            .collect()
    }

    fn settings(flags: &[&str], inputs: &[String]) -> Settings {
        let mut argv: Vec<&str> = vec!["imgcat"];
        argv.extend_from_slice(flags);
        argv.extend(inputs.iter().map(String::as_str));
        let args = Args::try_parse_from(argv).unwrap();
        Settings::resolve(&args, &ImgcatConfig::default()).unwrap()
    }

    fn output_flag(dir: &Path, name: &str) -> (PathBuf, String) {
        let path = dir.join(name);
        let flag = path.to_string_lossy().into_owned();
        (path, flag)
    }

    #[test]
    fn vertical_stack_renders_each_input() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = write_inputs(dir.path(), 3, 10);
        let (out, out_flag) = output_flag(dir.path(), "out.png");

        let s = settings(&["--width", "10", "--height", "10", "-o", &out_flag], &inputs);
        let plan = run(&s).unwrap();
        assert_eq!(plan.canvas, Size::new(10, 30));

        let result = image::open(&out).unwrap().to_rgba8();
        assert_eq!(result.dimensions(), (10, 30));
        assert_eq!(*result.get_pixel(5, 5), COLORS[0]);
        assert_eq!(*result.get_pixel(5, 15), COLORS[1]);
        assert_eq!(*result.get_pixel(5, 25), COLORS[2]);
    }

    #[test]
    fn tiling_places_five_inputs_in_two_columns() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = write_inputs(dir.path(), 5, 4);
        let (out, out_flag) = output_flag(dir.path(), "tiles.png");

        let s = settings(
            &["--width", "4", "--height", "4", "-l", "tiling", "--columns", "2", "-o", &out_flag],
            &inputs,
        );
        run(&s).unwrap();

        let result = image::open(&out).unwrap().to_rgba8();
        assert_eq!(result.dimensions(), (8, 12));
        assert_eq!(*result.get_pixel(0, 0), COLORS[0]);
        assert_eq!(*result.get_pixel(4, 0), COLORS[1]);
        assert_eq!(*result.get_pixel(0, 4), COLORS[2]);
        assert_eq!(*result.get_pixel(4, 4), COLORS[3]);
        assert_eq!(*result.get_pixel(0, 8), COLORS[4]);
        // Unused trailing cell keeps the background.
        assert_eq!(*result.get_pixel(6, 10), WHITE);
    }

    #[test]
    fn gap_and_margin_show_background() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = write_inputs(dir.path(), 4, 5);
        let (out, out_flag) = output_flag(dir.path(), "grid.png");

        let s = settings(
            &[
                "--width", "5", "--height", "5", "-l", "horizontal", "--wrap", "2", "--gap", "2",
                "--margin", "1", "-o", &out_flag,
            ],
            &inputs,
        );
        run(&s).unwrap();

        let result = image::open(&out).unwrap().to_rgba8();
        assert_eq!(result.dimensions(), (14, 14));
        assert_eq!(*result.get_pixel(0, 0), WHITE);
        assert_eq!(*result.get_pixel(1, 1), COLORS[0]);
        assert_eq!(*result.get_pixel(6, 1), WHITE);
        assert_eq!(*result.get_pixel(8, 1), COLORS[1]);
        assert_eq!(*result.get_pixel(1, 8), COLORS[2]);
        assert_eq!(*result.get_pixel(12, 12), COLORS[3]);
        assert_eq!(*result.get_pixel(13, 13), WHITE);
    }

    #[test]
    fn crop_origin_applies_to_every_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut inputs = Vec::new();
        for i in 0..2 {
            let path = dir.path().join(format!("big{i}.png"));
            let mut img = RgbaImage::from_pixel(8, 8, WHITE);
            img.put_pixel(3, 2, COLORS[i]);
            img.save(&path).unwrap();
            inputs.push(path.to_string_lossy().into_owned());
        }
        let (out, out_flag) = output_flag(dir.path(), "crop.png");

        let s = settings(
            &["-x", "3", "-y", "2", "--width", "2", "--height", "2", "-l", "horizontal", "-o", &out_flag],
            &inputs,
        );
        run(&s).unwrap();

        let result = image::open(&out).unwrap().to_rgba8();
        assert_eq!(result.dimensions(), (4, 2));
        assert_eq!(*result.get_pixel(0, 0), COLORS[0]);
        assert_eq!(*result.get_pixel(2, 0), COLORS[1]);
        assert_eq!(*result.get_pixel(1, 1), WHITE);
    }

    #[test]
    fn identical_runs_produce_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = write_inputs(dir.path(), 3, 6);
        let (first, first_flag) = output_flag(dir.path(), "first.png");
        let (second, second_flag) = output_flag(dir.path(), "second.png");

        let flags = ["--width", "6", "--height", "6", "--wrap", "2", "--gap", "1"];
        let mut with_first = flags.to_vec();
        with_first.extend(["-o", first_flag.as_str()]);
        let mut with_second = flags.to_vec();
        with_second.extend(["-o", second_flag.as_str()]);

        run(&settings(&with_first, &inputs)).unwrap();
        run(&settings(&with_second, &inputs)).unwrap();

        assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
    }

    #[test]
    fn undecodable_input_aborts_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut inputs = write_inputs(dir.path(), 2, 4);
        let broken = dir.path().join("broken.png");
        std::fs::write(&broken, b"not an image").unwrap();
        inputs.insert(1, broken.to_string_lossy().into_owned());
        let (out, out_flag) = output_flag(dir.path(), "out.png");

        let s = settings(&["--width", "4", "--height", "4", "-o", &out_flag], &inputs);
        let err = run(&s).unwrap_err();
        assert!(matches!(err, ImgcatError::Render(RenderError::Decode { .. })));
        assert!(err.to_string().contains("broken.png"));
        assert!(!out.exists());
    }

    #[test]
    fn missing_input_aborts_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png").to_string_lossy().into_owned();
        let (out, out_flag) = output_flag(dir.path(), "out.png");

        let s = settings(&["--width", "4", "--height", "4", "-o", &out_flag], &[missing]);
        assert!(run(&s).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn dry_run_reads_no_images() {
        let inputs = vec!["/nonexistent/a.png".to_string(), "/nonexistent/b.png".to_string()];
        let s = settings(&["--width", "3", "--height", "2", "--dry-run", "-l", "horizontal"], &inputs);
        let plan = run(&s).unwrap();
        assert_eq!(plan.canvas, Size::new(6, 2));
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn dry_run_with_output_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (out, out_flag) = output_flag(dir.path(), "out.png");
        let inputs = vec!["/nonexistent/a.png".to_string()];

        let s = settings(&["--width", "3", "--height", "2", "--dry-run", "-o", &out_flag], &inputs);
        let plan = run(&s).unwrap();
        assert_eq!(plan.canvas, Size::new(3, 2));
        assert!(!out.exists());
    }

    #[test]
    fn oversized_canvas_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = write_inputs(dir.path(), 1, 4);
        let (out, out_flag) = output_flag(dir.path(), "huge.png");

        let s = settings(
            &["--width", "4000000000", "--height", "2000000000", "-o", &out_flag],
            &inputs,
        );
        let err = run(&s).unwrap_err();
        assert!(matches!(err, ImgcatError::Render(RenderError::CanvasTooLarge { .. })));
        assert!(!out.exists());
    }

    #[test]
    fn jpeg_output_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = write_inputs(dir.path(), 2, 8);
        let (out, out_flag) = output_flag(dir.path(), "out.jpg");

        let s = settings(&["--width", "8", "--height", "8", "-l", "horizontal", "-o", &out_flag], &inputs);
        run(&s).unwrap();

        let result = image::open(&out).unwrap();
        assert_eq!((result.width(), result.height()), (16, 8));
    }
}
