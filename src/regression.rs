
//! Draw an anti-diagonal with every pixel access method and verify the result.
//!
//! Each scenario fills an image with red, draws blue pixels from the bottom left
//! to the top right, and then compares checksums and pixels with the expected values.
//! Failed checks are collected in a `Report` instead of aborting the run.

use std::fmt::Debug;
use std::path::PathBuf;
use log::{debug, error, info};
use crate::checksum::{checksum, Checksum};
use crate::dump::save_dump;
use crate::error::{Error, Result, UnitResult};
use crate::format::PixelFormat;
use crate::image::{GetPixel, PackedImage, SetPixel, ViewMut};
use crate::math::Vec2;
use crate::pixel::{PixelValue, Rgb8};


/// The two colors of every scenario, converted once from 8-bit colors.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Palette {

    /// The background color.
    pub red: PixelValue,

    /// The color of the anti-diagonal.
    pub blue: PixelValue,
}

impl Palette {

    /// Convert pure red and pure blue into the pixel format.
    pub fn new(format: &PixelFormat) -> Self {
        Palette {
            red: format.convert_rgb8(Rgb8::new(255, 0, 0)),
            blue: format.convert_rgb8(Rgb8::new(0, 0, 255)),
        }
    }
}


/// How the anti-diagonal is drawn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum DrawMethod {

    /// Locator loop, incrementing the horizontal cursor before decrementing the vertical cursor.
    /// This is the order that used to address the wrong pixels with bit-aligned formats.
    LocatorLoopXFirst,

    /// Locator loop, decrementing the vertical cursor before incrementing the horizontal cursor.
    LocatorLoopYFirst,

    /// Locator moved with a single diagonal step per pixel.
    LocatorStep,

    /// Raster cursor writing every pixel of the expected image in row-major order.
    RasterCursor,

    /// Direct `(x, y)` indexing of every pixel of the expected image.
    DirectIndex,
}

impl DrawMethod {

    /// All methods, in the order they are run by default.
    pub const ALL: [DrawMethod; 5] = [
        DrawMethod::LocatorLoopXFirst,
        DrawMethod::LocatorLoopYFirst,
        DrawMethod::LocatorStep,
        DrawMethod::RasterCursor,
        DrawMethod::DirectIndex,
    ];

    /// The stable name used for log messages and dump files.
    pub fn case_name(self) -> &'static str {
        match self {
            DrawMethod::LocatorLoopXFirst => "xy_locator_loop_fail",
            DrawMethod::LocatorLoopYFirst => "xy_locator_loop_good",
            DrawMethod::LocatorStep => "xy_locator_step",
            DrawMethod::RasterCursor => "x_iterator",
            DrawMethod::DirectIndex => "xy_operator",
        }
    }

    /// Draw the blue anti-diagonal into a view which is already filled with red.
    pub fn draw(self, view: &mut ViewMut<'_>, palette: &Palette) -> UnitResult {
        let resolution = view.resolution();
        validate_resolution(resolution)?;

        match self {
            DrawMethod::LocatorLoopXFirst => {
                let mut locator = view.locator_at((0, resolution.height() - 1))?;

                for _ in 0 .. resolution.height() {
                    locator.set(&palette.blue);
                    locator.x_mut().increment();
                    locator.y_mut().decrement();
                }
            },

            DrawMethod::LocatorLoopYFirst => {
                let mut locator = view.locator_at((0, resolution.height() - 1))?;

                for _ in 0 .. resolution.height() {
                    locator.set(&palette.blue);
                    locator.y_mut().decrement();
                    locator.x_mut().increment();
                }
            },

            DrawMethod::LocatorStep => {
                let mut locator = view.locator_at((0, resolution.height() - 1))?;

                for _ in 0 .. resolution.height() {
                    locator.set(&palette.blue);
                    locator.step(Vec2(1, -1));
                }
            },

            DrawMethod::RasterCursor => {
                let mut cursor = view.raster_cursor();

                while !cursor.is_end() {
                    let expected = expected_pixel(resolution, cursor.position(), palette);
                    cursor.set(expected);
                    cursor.advance();
                }
            },

            DrawMethod::DirectIndex => {
                for y in 0 .. resolution.height() {
                    for x in 0 .. resolution.width() {
                        let position = Vec2(x, y);
                        view.set_pixel(position, expected_pixel(resolution, position, palette));
                    }
                }
            },
        }

        Ok(())
    }
}


/// Literal checksums recorded from known-good runs.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GoldenChecksums {

    /// Checksum of the image filled with red.
    pub filled: &'static str,

    /// Checksum after drawing the blue anti-diagonal.
    pub diagonal: &'static str,
}

impl GoldenChecksums {

    /// Golden values exist only for `bgr121` images of 3x3 pixels.
    pub fn for_image(format: &PixelFormat, resolution: Vec2<usize>) -> Option<Self> {
        if *format == PixelFormat::bgr121() && resolution == Vec2(3, 3) {
            Some(GoldenChecksums { filled: "23a6f403", diagonal: "2e4950b4" })
        }
        else {
            None
        }
    }
}


/// Blue on the anti-diagonal `x + y == height - 1`, red everywhere else.
pub fn expected_pixel<'p>(resolution: Vec2<usize>, position: Vec2<usize>, palette: &'p Palette) -> &'p PixelValue {
    if position.x() + position.y() + 1 == resolution.height() { &palette.blue } else { &palette.red }
}

/// The anti-diagonal can only be drawn if it fits into the image.
fn validate_resolution(resolution: Vec2<usize>) -> UnitResult {
    if resolution.height() == 0 {
        return Err(Error::invalid("image without rows"));
    }

    if resolution.width() < resolution.height() {
        return Err(Error::invalid("anti-diagonal requires an image at least as wide as it is high"));
    }

    Ok(())
}


/// Collects the outcome of all checks of a run.
/// A failed check never stops the run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    checks: usize,
    failures: Vec<String>,
}

impl Report {

    /// Record a check. Returns the condition.
    pub fn check(&mut self, condition: bool, description: impl Into<String>) -> bool {
        self.checks += 1;

        if !condition {
            let description = description.into();
            error!("check failed: {}", description);
            self.failures.push(description);
        }

        condition
    }

    /// Record a check comparing two values. Returns whether they are equal.
    pub fn check_eq<T: PartialEq + Debug>(&mut self, actual: T, expected: T, description: impl AsRef<str>) -> bool {
        let equal = actual == expected;

        self.check(equal, if equal { String::new() } else {
            format!("{}: expected {:?}, but got {:?}", description.as_ref(), expected, actual)
        })
    }

    /// Number of checks performed.
    pub fn checks(&self) -> usize {
        self.checks
    }

    /// Number of checks that failed.
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Descriptions of all failed checks, in the order they happened.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Whether no check failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}


/// Configures a regression run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RegressionOptions {

    /// The pixel format of every image.
    pub format: PixelFormat,

    /// Width and height of every image.
    pub resolution: Vec2<usize>,

    /// Where to write dump files. No dumps are written if absent.
    pub dump_directory: Option<PathBuf>,

    /// The draw methods to run, in this order.
    pub methods: Vec<DrawMethod>,
}

impl Default for RegressionOptions {
    fn default() -> Self {
        RegressionOptions {
            format: PixelFormat::bgr121(),
            resolution: Vec2(3, 3),
            dump_directory: None,
            methods: DrawMethod::ALL.to_vec(),
        }
    }
}

impl RegressionOptions {

    /// The default run, writing dump files into the directory.
    pub fn with_dumps(directory: impl Into<PathBuf>) -> Self {
        RegressionOptions { dump_directory: Some(directory.into()), .. Self::default() }
    }

    /// Check that the configured image can hold the anti-diagonal.
    pub fn validate(&self) -> UnitResult {
        validate_resolution(self.resolution)
    }

    fn dump(&self, case: &str, suffix: &str, view: &impl GetPixel, checksum: Checksum) -> UnitResult {
        if let Some(directory) = &self.dump_directory {
            save_dump(directory, &format!("{}_{}", case, suffix), view, checksum)?;
        }

        Ok(())
    }
}


/// Fill, draw, and verify one image with the specified method.
pub fn run_scenario(method: DrawMethod, options: &RegressionOptions, palette: &Palette, report: &mut Report) -> UnitResult {
    options.validate()?;

    let case = method.case_name();
    let resolution = options.resolution;
    let golden = GoldenChecksums::for_image(&options.format, resolution);
    debug!("running {} on {}x{}", case, resolution.width(), resolution.height());

    let mut image = PackedImage::new(options.format.clone(), resolution);
    image.fill(&palette.red);

    report.check(
        image.pixels().all(|pixel| pixel == palette.red),
        format!("{}: every pixel is red after filling", case)
    );

    let filled_checksum = checksum(&image);
    options.dump(case, "dump1", &image, filled_checksum)?;

    if let Some(golden) = golden {
        report.check_eq(filled_checksum.to_hex().as_str(), golden.filled, format!("{}: checksum after filling", case));
    }

    method.draw(&mut image.view_mut(), palette)?;

    let drawn_checksum = checksum(&image);
    options.dump(case, "dump2", &image, drawn_checksum)?;

    if let Some(golden) = golden {
        report.check_eq(drawn_checksum.to_hex().as_str(), golden.diagonal, format!("{}: checksum after drawing", case));
    }

    for (index, pixel) in image.pixels().enumerate() {
        let position = Vec2(index % resolution.width(), index / resolution.width());
        let expected = expected_pixel(resolution, position, palette);

        report.check_eq(
            &pixel, expected,
            format!("{}: pixel ({}, {})", case, position.x(), position.y())
        );
    }

    Ok(())
}

/// Run all configured methods and collect the results.
pub fn run_all(options: &RegressionOptions) -> Result<Report> {
    options.validate()?;

    let palette = Palette::new(&options.format);
    let mut report = Report::default();

    for &method in &options.methods {
        run_scenario(method, options, &palette, &mut report)?;
    }

    info!(
        "{} checks, {} failed, in {} scenarios",
        report.checks(), report.failure_count(), options.methods.len()
    );

    Ok(report)
}
