//! Tests for argument parsing, target collection and batch rendering

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgb, Rgba, RgbaImage};
    use pixblock::RenderError;
    use pixblock::RenderSettings;
    use pixblock::io::cli::{Cli, FileProcessor, is_supported_image, output_path};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn write_source(path: &Path) -> TestResult {
        let raster = RgbaImage::from_fn(40, 30, |x, y| {
            let v = ((x * 7 + y * 13) % 256) as u8;
            Rgba([v, 255 - v, v / 2, 255])
        });
        raster.save(path)?;
        Ok(())
    }

    fn quiet_cli(args: &[&str]) -> Result<Cli, clap::Error> {
        let mut full = vec!["pixblock", "--quiet", "--seed", "7"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full)
    }

    fn arg(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    // Tests defaults line up with the default settings
    #[test]
    fn test_default_arguments() -> TestResult {
        let cli = Cli::try_parse_from(["pixblock", "photo.jpg"])?;

        assert_eq!(cli.target, PathBuf::from("photo.jpg"));
        assert!(cli.output.is_none());
        assert!(cli.seed.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
        assert_eq!(cli.settings(), RenderSettings::default());
        Ok(())
    }

    // Tests every setting flag maps onto the settings
    #[test]
    fn test_all_arguments() -> TestResult {
        let cli = Cli::try_parse_from([
            "pixblock", "in.png", "-o", "out.png", "-b", "20", "-g", "30", "-l", "40", "-e",
            "5.5", "--variance", "12", "-m", "3", "--bias", "-15", "-i", "-c", "#0f0",
            "--background", "102030", "-s", "99", "-q", "-n", "-vv",
        ])?;

        let settings = cli.settings();
        assert_eq!(settings.block_size, 20);
        assert_eq!(settings.gap_percent, 30);
        assert_eq!(settings.local_percent, 40);
        assert!((settings.edge_boost - 5.5).abs() < f64::EPSILON);
        assert!((settings.variance_threshold - 12.0).abs() < f64::EPSILON);
        assert_eq!(settings.min_block_size, 3);
        assert!((settings.brightness_bias + 15.0).abs() < f64::EPSILON);
        assert!(settings.invert);
        assert_eq!(settings.foreground, Rgb([0, 255, 0]));
        assert_eq!(settings.background, Rgb([0x10, 0x20, 0x30]));

        assert_eq!(cli.output, Some(PathBuf::from("out.png")));
        assert_eq!(cli.seed, Some(99));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
        Ok(())
    }

    // Tests malformed colors are rejected at parse time
    #[test]
    fn test_invalid_color_argument() {
        assert!(Cli::try_parse_from(["pixblock", "in.png", "-c", "#12345"]).is_err());
        assert!(Cli::try_parse_from(["pixblock", "in.png", "--background", "blue"]).is_err());
    }

    // Tests output naming next to the input
    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("photos/cat.jpeg")),
            PathBuf::from("photos/cat_pixel.png")
        );
        assert_eq!(output_path(Path::new("pfp.png")), PathBuf::from("pfp_pixel.png"));
    }

    // Tests extension matching ignores case
    #[test]
    fn test_is_supported_image() {
        assert!(is_supported_image(Path::new("a.png")));
        assert!(is_supported_image(Path::new("a.JPG")));
        assert!(is_supported_image(Path::new("dir/a.TiFf")));
        assert!(!is_supported_image(Path::new("a.txt")));
        assert!(!is_supported_image(Path::new("png")));
    }

    // Tests a single file renders next to its source and is skipped on rerun
    #[test]
    fn test_single_file_and_skip() -> TestResult {
        let dir = TempDir::new()?;
        let source = dir.path().join("scene.png");
        write_source(&source)?;

        let written = FileProcessor::new(quiet_cli(&[&arg(&source)])?).process()?;
        let expected = dir.path().join("scene_pixel.png");
        assert_eq!(written, vec![expected.clone()]);
        assert_eq!(image::open(&expected)?.to_rgba8().dimensions(), (40, 30));

        let rerun = FileProcessor::new(quiet_cli(&[&arg(&source)])?).process()?;
        assert!(rerun.is_empty());

        let forced = FileProcessor::new(quiet_cli(&["-n", &arg(&source)])?).process()?;
        assert_eq!(forced, vec![expected]);
        Ok(())
    }

    // Tests an explicit output path is honoured for single files
    #[test]
    fn test_explicit_output() -> TestResult {
        let dir = TempDir::new()?;
        let source = dir.path().join("scene.png");
        let target = dir.path().join("renders").join("custom.png");
        write_source(&source)?;

        let written =
            FileProcessor::new(quiet_cli(&["-o", &arg(&target), &arg(&source)])?).process()?;

        assert_eq!(written, vec![target.clone()]);
        assert!(target.is_file());
        Ok(())
    }

    // Tests directory runs render supported images and ignore their own outputs
    #[test]
    fn test_directory_batch() -> TestResult {
        let dir = TempDir::new()?;
        write_source(&dir.path().join("b.png"))?;
        write_source(&dir.path().join("a.bmp"))?;
        fs::write(dir.path().join("notes.txt"), "skip me")?;

        let mut processor = FileProcessor::new(quiet_cli(&[&arg(dir.path())])?);
        assert_eq!(
            processor.collect_files()?,
            vec![dir.path().join("a.bmp"), dir.path().join("b.png")]
        );

        let written = processor.process()?;
        assert_eq!(
            written,
            vec![dir.path().join("a_pixel.png"), dir.path().join("b_pixel.png")]
        );

        let again = FileProcessor::new(quiet_cli(&["-n", &arg(dir.path())])?);
        assert_eq!(again.collect_files()?.len(), 2);
        Ok(())
    }

    // Tests an output path cannot be combined with a directory
    #[test]
    fn test_directory_with_output_rejected() -> TestResult {
        let dir = TempDir::new()?;
        let cli = quiet_cli(&["-o", "out.png", &arg(dir.path())])?;

        assert!(matches!(
            FileProcessor::new(cli).process(),
            Err(RenderError::InvalidParameter {
                parameter: "output",
                ..
            })
        ));
        Ok(())
    }

    // Tests unsupported and missing targets are rejected
    #[test]
    fn test_invalid_targets() -> TestResult {
        let dir = TempDir::new()?;
        let text = dir.path().join("readme.txt");
        fs::write(&text, "hello")?;

        let unsupported = FileProcessor::new(quiet_cli(&[&arg(&text)])?).process();
        assert!(matches!(unsupported, Err(RenderError::InvalidTarget { .. })));

        let missing =
            FileProcessor::new(quiet_cli(&[&arg(&dir.path().join("gone.png"))])?).process();
        assert!(matches!(missing, Err(RenderError::InvalidTarget { .. })));
        Ok(())
    }

    // Tests a corrupt image surfaces a load error
    #[test]
    fn test_corrupt_image() -> TestResult {
        let dir = TempDir::new()?;
        let broken = dir.path().join("broken.png");
        fs::write(&broken, "not really a png")?;

        let result = FileProcessor::new(quiet_cli(&[&arg(&broken)])?).process();
        assert!(matches!(result, Err(RenderError::ImageLoad { .. })));
        Ok(())
    }

    // Tests the same seed writes identical files
    #[test]
    fn test_seeded_runs_match() -> TestResult {
        let dir = TempDir::new()?;
        let source = dir.path().join("scene.png");
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");
        write_source(&source)?;

        FileProcessor::new(quiet_cli(&["-b", "40", "-o", &arg(&first), &arg(&source)])?)
            .process()?;
        FileProcessor::new(quiet_cli(&["-b", "40", "-o", &arg(&second), &arg(&source)])?)
            .process()?;

        assert_eq!(
            image::open(&first)?.to_rgba8(),
            image::open(&second)?.to_rgba8()
        );
        Ok(())
    }
}
