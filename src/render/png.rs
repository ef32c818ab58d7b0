use std::io::Write;

use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage, codecs::png::PngEncoder};

use super::{Area, RenderError, drawn_walls};
use crate::maze::{Direction, Maze};

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const PATH: Rgb<u8> = Rgb([102, 102, 255]);
/// Largest image drawn, in pixels
const MAX_PIXELS: u64 = 1 << 28;

/// Image dimensions for `area`: one extra pixel each way for the closing walls.
pub(crate) fn image_size(area: Area) -> Result<(u32, u32), RenderError> {
    let too_large = RenderError::AreaTooLarge {
        horizontal: area.horizontal,
        vertical: area.vertical,
    };
    let (Some(width), Some(height)) = (area.horizontal.checked_add(1), area.vertical.checked_add(1))
    else {
        return Err(too_large);
    };
    if u64::from(width) * u64::from(height) > MAX_PIXELS {
        return Err(too_large);
    }
    Ok((width, height))
}

/// Fills the rectangle with corners `(x1, y1)` and `(x2, y2)`, both inclusive,
/// clipped to the image.
fn fill_rect(img: &mut RgbImage, (x1, y1): (i64, i64), (x2, y2): (i64, i64), color: Rgb<u8>) {
    let (width, height) = (img.width() as i64, img.height() as i64);
    let (left, right) = (x1.min(x2).max(0), x1.max(x2).min(width - 1));
    let (top, bottom) = (y1.min(y2).max(0), y1.max(y2).min(height - 1));
    for y in top..=bottom {
        for x in left..=right {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Horizontal and vertical lines are one pixel wide rectangles.
fn line(img: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
    fill_rect(img, from, to, color);
}

/// Draws the maze into an image one pixel larger than `area` in each direction.
pub fn draw(maze: &Maze, area: Area) -> Result<RgbImage, RenderError> {
    let (width, height) = image_size(area)?;
    let mut img = RgbImage::from_pixel(width, height, WHITE);
    let h_wid = (area.horizontal as usize / maze.cols()) as i64;
    let v_wid = (area.vertical as usize / maze.rows()) as i64;

    for col in 0..maze.cols() {
        if !maze.is_exit_edge((0, col), Direction::Up) {
            let x = col as i64 * h_wid;
            line(&mut img, (x, 0), (x + h_wid, 0), BLACK);
        }
    }
    for row in 0..maze.rows() {
        if !maze.is_exit_edge((row, 0), Direction::Left) {
            let y = row as i64 * v_wid;
            line(&mut img, (0, y), (0, y + v_wid), BLACK);
        }
    }

    for row in 0..maze.rows() {
        let v_base = row as i64 * v_wid;
        for col in 0..maze.cols() {
            let h_base = col as i64 * h_wid;
            let (right, bottom) = drawn_walls(maze, (row, col));
            if right {
                line(
                    &mut img,
                    (h_base + h_wid, v_base),
                    (h_base + h_wid, v_base + v_wid),
                    BLACK,
                );
            }
            if bottom {
                line(
                    &mut img,
                    (h_base, v_base + v_wid),
                    (h_base + h_wid, v_base + v_wid),
                    BLACK,
                );
            }

            let cell = &maze[(row, col)];
            if cell.visited {
                let (width, height) = match cell.marker {
                    Direction::Up | Direction::Down => (h_wid - 4, 2 * v_wid - 4),
                    Direction::Left | Direction::Right => (2 * h_wid - 4, v_wid - 4),
                };
                let (left, top) = match cell.marker {
                    Direction::Right | Direction::Down => (h_base + 2, v_base + 2),
                    Direction::Left => (h_base - h_wid + 2, v_base + 2),
                    Direction::Up => (h_base + 2, v_base - v_wid + 2),
                };
                // Cells too small for a marker are left bare
                if width >= 0 && height >= 0 {
                    fill_rect(&mut img, (left, top), (left + width, top + height), PATH);
                }
            }
        }
    }
    Ok(img)
}

/// Writes the maze as a PNG image of `area` pixels (plus the closing wall line).
pub fn write_png<W: Write>(maze: &Maze, area: Area, writer: &mut W) -> Result<(), RenderError> {
    let img = draw(maze, area)?;
    PngEncoder::new(writer).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(())
}
