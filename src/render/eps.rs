use std::io::Write;

use super::{Area, drawn_walls};
use crate::maze::{Direction, Maze};

/// Weight of walls
const LINE_WIDTH: f64 = 1.0;
/// Gray level of walls
const LINE_GREY: f64 = 0.0;
/// Gray level of solution markers
const SOLUTION_GREY: f64 = 0.7;
/// Gap between a solution marker and the walls, as a fraction of the cell size
const SOLUTION_GAP: f64 = 0.2;

/// Writes the maze as an Encapsulated PostScript figure spanning `area` points,
/// with a two point pad around the bounding box.
pub fn write_eps<W: Write>(maze: &Maze, area: Area, writer: &mut W) -> std::io::Result<()> {
    let h_res = area.horizontal as f64;
    let v_res = area.vertical as f64;
    let h_wid = h_res / maze.cols() as f64;
    let v_wid = v_res / maze.rows() as f64;

    write!(
        writer,
        "%!PS-Adobe-3.0 EPSF-3.0\n\
         %%BoundingBox: -2 -2 {} {}\n\
         %%DocumentData: Clean7Bit\n\n",
        u64::from(area.horizontal) + 2,
        u64::from(area.vertical) + 2
    )?;

    write!(
        writer,
        "/np  {{newpath}} bind def\n\
         /slw {{setlinewidth}} bind def\n\
         /sg  {{setgray}} bind def\n\
         /mt  {{moveto}} bind def\n\
         /rmt {{rmoveto}} bind def\n\
         /lt  {{lineto}} bind def\n\
         /rlt {{rlineto}} bind def\n\
         /stk {{stroke}} bind def\n\
         /sgrey {:.1} def\n\
         /lgrey {:.1} def\n\
         /lwid  {:.1} def\n\
         /dr {{lwid slw lgrey sg stk}} def\n\n",
        SOLUTION_GREY, LINE_GREY, LINE_WIDTH
    )?;

    // Exterior walls along the top, then down the left side
    write!(writer, "% Exterior walls\nnp\n0 {} mt\n", area.vertical)?;
    for col in 0..maze.cols() {
        let op = if maze.is_exit_edge((0, col), Direction::Up) {
            "rmt"
        } else {
            "rlt"
        };
        write!(writer, "{:.1} 0 {} ", h_wid, op)?;
    }
    write!(writer, "dr\nnp\n0 {} mt\n", area.vertical)?;
    for row in 0..maze.rows() {
        let op = if maze.is_exit_edge((row, 0), Direction::Left) {
            "rmt"
        } else {
            "rlt"
        };
        write!(writer, "0 {:.1} neg {} ", v_wid, op)?;
    }
    write!(writer, "dr\n\n")?;

    for row in 0..maze.rows() {
        let v_base = row as f64 * v_wid;
        for col in 0..maze.cols() {
            let h_base = col as f64 * h_wid;
            let (right, bottom) = drawn_walls(maze, (row, col));

            if right || bottom {
                write!(writer, "np ")?;
                if right {
                    write!(
                        writer,
                        "{:.1} {:.1} mt 0 {:.1} neg rlt ",
                        h_base + h_wid,
                        v_res - v_base,
                        v_wid
                    )?;
                }
                if bottom {
                    write!(
                        writer,
                        "{:.1} {:.1} mt {:.1} 0 rlt ",
                        h_base,
                        v_res - v_base - v_wid,
                        h_wid
                    )?;
                }
                writeln!(writer, "dr")?;
            }

            let cell = &maze[(row, col)];
            if cell.visited {
                // The marker stretches from this cell halfway into the next one on the path
                let (h_dis, v_dis) = match cell.marker {
                    Direction::Up | Direction::Down => (
                        (1.0 - 2.0 * SOLUTION_GAP) * h_wid,
                        (2.0 - 2.0 * SOLUTION_GAP) * v_wid,
                    ),
                    Direction::Left | Direction::Right => (
                        (2.0 - 2.0 * SOLUTION_GAP) * h_wid,
                        (1.0 - 2.0 * SOLUTION_GAP) * v_wid,
                    ),
                };
                let (hp, vp) = match cell.marker {
                    Direction::Up => (
                        h_base + SOLUTION_GAP * h_wid,
                        v_base - (1.0 - SOLUTION_GAP) * v_wid,
                    ),
                    Direction::Down | Direction::Right => (
                        h_base + SOLUTION_GAP * h_wid,
                        v_base + SOLUTION_GAP * v_wid,
                    ),
                    Direction::Left => (
                        h_base - (1.0 - SOLUTION_GAP) * h_wid,
                        v_base + SOLUTION_GAP * v_wid,
                    ),
                };
                write!(
                    writer,
                    "np {:.1} {:.1} mt {:.1} 0 rlt 0 {:.1} neg rlt {:.1} neg 0 rlt 0 {:.1} rlt ",
                    hp,
                    v_res - vp,
                    h_dis,
                    v_dis,
                    h_dis,
                    v_dis
                )?;
                writeln!(writer, "sgrey sg fill")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generators::generate_maze, maze::Exit, solvers::find_path};

    fn render(maze: &Maze, area: Area) -> String {
        let mut out = Vec::new();
        write_eps(maze, area, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_header_and_bounding_box() {
        let maze = Maze::new(2, 2).unwrap();
        let text = render(
            &maze,
            Area {
                horizontal: 100,
                vertical: 50,
            },
        );
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("%!PS-Adobe-3.0 EPSF-3.0"));
        assert_eq!(lines.next(), Some("%%BoundingBox: -2 -2 102 52"));
        assert_eq!(lines.next(), Some("%%DocumentData: Clean7Bit"));
        assert!(text.contains("/dr {lwid slw lgrey sg stk} def"));
        assert!(text.contains("/sgrey 0.7 def"));
    }

    #[test]
    fn test_exterior_walls() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.set_exits(Exit::new(Direction::Up, 1), Exit::new(Direction::Left, 0))
            .unwrap();
        let text = render(
            &maze,
            Area {
                horizontal: 100,
                vertical: 50,
            },
        );
        assert!(text.contains("np\n0 50 mt\n50.0 0 rlt 50.0 0 rmt dr\n"));
        assert!(text.contains("np\n0 50 mt\n0 25.0 neg rmt 0 25.0 neg rlt dr\n"));
    }

    #[test]
    fn test_blocked_cell_walls() {
        let maze = Maze::new(1, 1).unwrap();
        let text = render(
            &maze,
            Area {
                horizontal: 10,
                vertical: 10,
            },
        );
        // The right wall is the default exit, so only the bottom wall is drawn
        assert!(text.contains("np 0.0 0.0 mt 10.0 0 rlt dr\n"));
        assert!(!text.contains("fill"));
    }

    #[test]
    fn test_solution_markers() {
        let mut maze = Maze::new(5, 5).unwrap();
        generate_maze(&mut maze, Some(6)).unwrap();
        let len = find_path(&mut maze, (0, 0), (4, 4)).unwrap();
        let text = render(&maze, Area::default());
        assert_eq!(text.matches("sgrey sg fill").count(), len);
    }
}
