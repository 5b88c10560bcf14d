
//! Run the anti-diagonal scenarios end to end, including dump files.

extern crate bitpix;

use std::fs;
use bitpix::prelude::*;
use bitpix::dump::{dump_file_name, BuildTag};
use bitpix::regression::{run_scenario, GoldenChecksums};

#[test]
fn golden_checksums_for_every_method() {
    let options = RegressionOptions::default();
    let palette = Palette::new(&options.format);

    for &method in &DrawMethod::ALL {
        let mut report = Report::default();
        run_scenario(method, &options, &palette, &mut report).unwrap();
        assert!(report.is_success(), "{}: {:#?}", method.case_name(), report.failures());
    }
}

#[test]
fn every_method_draws_the_same_image() {
    let format = PixelFormat::bgr121();
    let palette = Palette::new(&format);

    for &resolution in &[Vec2(1, 1), Vec2(3, 3), Vec2(5, 2), Vec2(8, 8), Vec2(13, 6)] {
        let images: Vec<Vec<u8>> = DrawMethod::ALL.iter().map(|&method| {
            let mut image = PackedImage::new(format.clone(), resolution);
            image.fill(&palette.red);
            method.draw(&mut image.view_mut(), &palette).unwrap();
            image.bytes().to_vec()
        }).collect();

        for bytes in &images[1..] {
            assert_eq!(bytes, &images[0], "different bytes at {:?}", resolution);
        }
    }
}

#[test]
fn larger_images_pass_without_golden_values() {
    let options = RegressionOptions { resolution: Vec2(11, 7), .. RegressionOptions::default() };
    assert_eq!(GoldenChecksums::for_image(&options.format, options.resolution), None);

    let report = run_all(&options).unwrap();
    assert!(report.is_success(), "{:#?}", report.failures());

    // fill check and one check per pixel
    assert_eq!(report.checks(), DrawMethod::ALL.len() * (1 + 11 * 7));
}

#[test]
fn dumps_are_written_per_case() {
    let directory = tempfile::tempdir().unwrap();
    let options = RegressionOptions::with_dumps(directory.path());

    let report = run_all(&options).unwrap();
    assert!(report.is_success(), "{:#?}", report.failures());

    let tag = BuildTag::current();
    let mut file_count = 0;

    for &method in &DrawMethod::ALL {
        for &(suffix, golden) in &[("dump1", "23a6f403"), ("dump2", "2e4950b4")] {
            let case = format!("{}_{}", method.case_name(), suffix);
            let path = directory.path().join(dump_file_name(&case, Vec2(3, 3), tag));
            let text = fs::read_to_string(&path).unwrap();
            let lines: Vec<&str> = text.lines().collect();

            assert_eq!(lines.len(), 1 + 9, "{}", path.display());
            assert_eq!(lines[0], golden);

            if suffix == "dump1" {
                assert!(lines[1..].iter().all(|&line| line == "1\t0\t0"));
            }
            else {
                // the top right pixel is blue, its neighbour is red
                assert_eq!(lines[1 + 2], "0\t0\t1");
                assert_eq!(lines[1 + 1], "1\t0\t0");
            }

            file_count += 1;
        }
    }

    assert_eq!(fs::read_dir(directory.path()).unwrap().count(), file_count);
}

#[test]
fn missing_dump_directory_aborts() {
    let directory = tempfile::tempdir().unwrap();
    let options = RegressionOptions::with_dumps(directory.path().join("does").join("not").join("exist"));

    match run_all(&options) {
        Err(Error::Io(_)) => {},
        other => panic!("expected an io error, got {:?}", other),
    }
}

#[test]
fn subset_of_methods() {
    let options = RegressionOptions {
        methods: vec![ DrawMethod::LocatorLoopXFirst ],
        .. RegressionOptions::default()
    };

    let report = run_all(&options).unwrap();
    assert!(report.is_success());
    assert_eq!(report.checks(), 12);
}
