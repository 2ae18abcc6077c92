//! Debug overlay: the range image with probe states and heads painted on.

use image::{Rgb, RgbImage};
use pylongrid::lowlevel::ProbeGrid;
use pylongrid::{Head, OwnedImage};

const BORDER: Rgb<u8> = Rgb([165, 42, 42]);
const HEAD: Rgb<u8> = Rgb([154, 205, 50]);
const TAIL: Rgb<u8> = Rgb([72, 61, 139]);

/// Paints every probe as one pixel and every head as a small cross.
pub fn render(range: &OwnedImage, grid: &ProbeGrid, heads: &[Head]) -> RgbImage {
    let width = range.width() as u32;
    let height = range.height() as u32;
    let data = range.data();
    let mut out = RgbImage::from_fn(width, height, |x, y| {
        let value = data[y as usize * range.width() + x as usize];
        Rgb([value, value, value])
    });

    for probe in grid.probes() {
        let color = if probe.is_border() {
            BORDER
        } else if probe.is_head() {
            HEAD
        } else {
            TAIL
        };
        out.put_pixel(probe.img_x() as u32, probe.img_y() as u32, color);
    }

    for head in heads {
        let (cx, cy) = (head.center_x as i64, head.center_y as i64);
        for (dx, dy) in [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)] {
            let (x, y) = (cx + dx, cy + dy);
            if x >= 0 && y >= 0 && x < i64::from(width) && y < i64::from(height) {
                out.put_pixel(x as u32, y as u32, HEAD);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{render, BORDER, HEAD, TAIL};
    use image::Rgb;
    use pylongrid::{Detector, DetectorConfig, Head, OwnedImage};

    /// 40x30 frame at range 100 with one deeper pixel at (25, 15).
    fn frame() -> OwnedImage {
        let mut data = vec![100u8; 40 * 30];
        data[15 * 40 + 25] = 10;
        OwnedImage::new(data, 40, 30).unwrap()
    }

    fn detector() -> Detector {
        let cfg = DetectorConfig {
            step: 10,
            filter: None,
        };
        Detector::new(40, 30, cfg).unwrap()
    }

    #[test]
    fn paints_probe_states_and_head_cross() {
        let image = frame();
        let mut detector = detector();
        let heads = detector.detect(image.view()).unwrap();
        assert_eq!(
            heads,
            vec![Head {
                range: 10,
                center_x: 25,
                center_y: 15,
            }]
        );

        let out = render(&image, detector.grid(), &heads);
        assert_eq!(out.dimensions(), (40, 30));
        assert_eq!(*out.get_pixel(5, 5), BORDER);
        assert_eq!(*out.get_pixel(35, 25), BORDER);
        assert_eq!(*out.get_pixel(15, 15), TAIL);
        for (x, y) in [(25, 15), (24, 15), (26, 15), (25, 14), (25, 16)] {
            assert_eq!(*out.get_pixel(x, y), HEAD, "cross pixel ({x}, {y})");
        }
        assert_eq!(*out.get_pixel(0, 0), Rgb([100, 100, 100]));
        assert_eq!(*out.get_pixel(20, 22), Rgb([100, 100, 100]));
    }

    #[test]
    fn crosses_are_clipped_at_image_edges() {
        let image = frame();
        let mut detector = detector();
        detector.detect(image.view()).unwrap();
        let corners = [
            Head {
                range: 0,
                center_x: 0,
                center_y: 0,
            },
            Head {
                range: 0,
                center_x: 39,
                center_y: 29,
            },
        ];

        let out = render(&image, detector.grid(), &corners);
        for (x, y) in [(0, 0), (1, 0), (0, 1), (39, 29), (38, 29), (39, 28)] {
            assert_eq!(*out.get_pixel(x, y), HEAD, "cross pixel ({x}, {y})");
        }
        assert_eq!(*out.get_pixel(1, 1), Rgb([100, 100, 100]));
    }
}
