
//! Randomized checks that every access method addresses the same pixel.

extern crate bitpix;

use bitpix::prelude::*;
use bitpix::format::ChannelKind::*;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rayon::prelude::*;

fn formats() -> Vec<PixelFormat> {
    vec![
        PixelFormat::bgr121(),
        PixelFormat::new(vec![ Channel::new(Red, 1) ]).unwrap(),
        PixelFormat::new(vec![ Channel::new(Red, 2), Channel::new(Green, 3), Channel::new(Blue, 2) ]).unwrap(),
        PixelFormat::new(vec![ Channel::new(Red, 3), Channel::new(Green, 3), Channel::new(Blue, 2) ]).unwrap(),
    ]
}

fn random_pixel(format: &PixelFormat, random: &mut StdRng) -> PixelValue {
    format.channels().iter()
        .map(|channel| random.random_range(0 ..= channel.max_value()))
        .collect()
}

fn random_image(format: &PixelFormat, resolution: Vec2<usize>, random: &mut StdRng) -> PackedImage {
    let mut image = PackedImage::new(format.clone(), resolution);

    for y in 0 .. resolution.height() {
        for x in 0 .. resolution.width() {
            let pixel = random_pixel(format, random);
            image.set_pixel(Vec2(x, y), &pixel);
        }
    }

    image
}

#[test]
fn step_order_never_matters() {
    let mut random = StdRng::seed_from_u64(121);

    for format in formats() {
        let resolution = Vec2(random.random_range(1 .. 20), random.random_range(1 .. 20));
        let image = random_image(&format, resolution, &mut random);
        let view = image.view();

        for _ in 0 .. 200 {
            let start = Vec2(random.random_range(0 .. resolution.width()), random.random_range(0 .. resolution.height()));
            let target = Vec2(random.random_range(0 .. resolution.width()), random.random_range(0 .. resolution.height()));
            let delta = target.to_isize("target").unwrap() - start.to_isize("start").unwrap();

            let mut x_first = view.locator_at(start).unwrap();
            x_first.x_mut().step(delta.x());
            x_first.y_mut().step(delta.y());

            let mut y_first = view.locator_at(start).unwrap();
            y_first.y_mut().step(delta.y());
            y_first.x_mut().step(delta.x());

            let mut single_steps = view.locator_at(start).unwrap();
            for _ in 0 .. delta.x().abs() { single_steps.step_x(delta.x().signum()); }
            for _ in 0 .. delta.y().abs() { single_steps.step_y(delta.y().signum()); }

            let expected = view.get_pixel(target);
            assert_eq!(x_first.get(), expected);
            assert_eq!(y_first.get(), expected);
            assert_eq!(single_steps.get(), expected);
            assert_eq!(x_first.bit_position(), view.bit_position(target));
            assert_eq!(y_first.try_position(), Some(target));
        }
    }
}

#[test]
fn random_walks_end_where_they_sum_up() {
    let mut random = StdRng::seed_from_u64(4);
    let format = PixelFormat::bgr121();
    let image = random_image(&format, Vec2(9, 7), &mut random);
    let view = image.view();

    for _ in 0 .. 100 {
        let mut locator = view.locator_at((4, 3)).unwrap();
        let mut sum = Vec2(4_isize, 3_isize);

        // the walk may leave the view as long as nothing is dereferenced
        for _ in 0 .. 30 {
            let delta = Vec2(
                isize::from(random.random_range(-5_i16 ..= 5)),
                isize::from(random.random_range(-5_i16 ..= 5)),
            );
            locator.step(delta);
            sum = sum + delta;
        }

        locator.step(-sum + Vec2(4, 3));
        assert_eq!(locator.position(), Vec2(4, 3));
        assert_eq!(locator.get(), view.get_pixel(Vec2(4, 3)));
    }
}

#[test]
fn all_access_methods_agree() {
    let resolutions: Vec<Vec2<usize>> = (1 .. 12)
        .flat_map(|width| (1 .. 12).map(move |height| Vec2(width, height)))
        .collect();

    resolutions.into_par_iter().for_each(|resolution| {
        let mut random = StdRng::seed_from_u64((resolution.width() * 100 + resolution.height()) as u64);

        for format in formats() {
            let image = random_image(&format, resolution, &mut random);
            let view = image.view();

            let direct: Vec<PixelValue> = (0 .. resolution.area())
                .map(|index| view.get_pixel(Vec2(index % resolution.width(), index / resolution.width())))
                .collect();

            let iterated: Vec<PixelValue> = view.pixels().collect();
            assert_eq!(iterated, direct);

            let mut rastered = Vec::new();
            let mut cursor = view.raster_cursor();
            while !cursor.is_end() {
                rastered.push(cursor.get());
                cursor.advance();
            }
            assert_eq!(rastered, direct);

            let mut located = Vec::new();
            for y in 0 .. resolution.height() {
                let mut row = view.row_cursor(y);
                let mut locator = view.locator_at((0, y)).unwrap();

                while !row.is_end() {
                    assert_eq!(row.get(), locator.get());
                    located.push(locator.get());
                    row.advance();
                    locator.x_mut().increment();
                }
            }
            assert_eq!(located, direct);
        }
    });
}

#[test]
fn writes_leave_neighbours_untouched() {
    let mut random = StdRng::seed_from_u64(7);

    for format in formats() {
        let resolution = Vec2(5, 4);
        let mut image = random_image(&format, resolution, &mut random);

        for _ in 0 .. 100 {
            let before: Vec<PixelValue> = image.pixels().collect();
            let position = Vec2(random.random_range(0 .. 5), random.random_range(0 .. 4));
            let pixel = random_pixel(&format, &mut random);

            {
                let mut view = image.view_mut();
                let mut locator = view.locator_at(position).unwrap();
                locator.set(&pixel);
            }

            for (index, after) in image.pixels().enumerate() {
                let current = Vec2(index % 5, index / 5);

                if current == position { assert_eq!(after, pixel); }
                else { assert_eq!(after, before[index], "pixel {:?} changed", current); }
            }
        }
    }
}

#[test]
fn sub_view_locators_stay_inside_their_window() {
    let format = PixelFormat::bgr121();
    let blue = format.convert_rgb8(Rgb8::new(0, 0, 255));
    let red = format.convert_rgb8(Rgb8::new(255, 0, 0));

    let mut image = PackedImage::new(format, (7, 5));
    image.fill(&red);

    {
        let mut window = image.view_mut().sub_view_mut((2, 1), (3, 3)).unwrap();
        let mut locator = window.locator_at((0, 2)).unwrap();

        for _ in 0 .. 3 {
            locator.set(&blue);
            locator.step(Vec2(1, -1));
        }
    }

    let blue_positions: Vec<(usize, usize)> = image.pixels().enumerate()
        .filter(|(_, pixel)| pixel == &blue)
        .map(|(index, _)| (index % 7, index / 7))
        .collect();

    assert_eq!(blue_positions, vec![(4, 1), (3, 2), (2, 3)]);
}

#[test]
fn codec_round_trip() {
    use bitpix::bits::{read_pixel, write_pixel};
    let mut random = StdRng::seed_from_u64(0xB6);

    for format in formats() {
        let pixel_count = 37;
        let mut buffer = vec![0_u8; PackedImage::byte_count(&format, Vec2(pixel_count, 1))];
        let mut expected: Vec<PixelValue> = (0 .. pixel_count).map(|_| PixelValue::zero(&format)).collect();

        for _ in 0 .. 500 {
            let index = random.random_range(0 .. pixel_count);
            let pixel = random_pixel(&format, &mut random);

            write_pixel(&format, &mut buffer, index, &pixel);
            assert_eq!(read_pixel(&format, &buffer, index), pixel);
            expected[index] = pixel;
        }

        for (index, pixel) in expected.iter().enumerate() {
            assert_eq!(&read_pixel(&format, &buffer, index), pixel);
        }
    }
}
