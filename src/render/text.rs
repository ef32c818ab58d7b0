use std::io::Write;

use crossterm::{queue, style};

use super::drawn_walls;
use crate::maze::{Cell, Direction, Maze};

/// Draws the maze row by row, calling `interior` for the three characters inside each cell.
fn draw<W: Write>(
    maze: &Maze,
    writer: &mut W,
    mut interior: impl FnMut(&mut W, &Cell) -> std::io::Result<()>,
) -> std::io::Result<()> {
    // Top border, with gaps at exits on the top side
    for col in 0..maze.cols() {
        if maze.is_exit_edge((0, col), Direction::Up) {
            write!(writer, "+   ")?;
        } else {
            write!(writer, "+---")?;
        }
    }
    writeln!(writer, "+")?;

    for row in 0..maze.rows() {
        // The left border is drawn as we go
        if maze.is_exit_edge((row, 0), Direction::Left) {
            write!(writer, " ")?;
        } else {
            write!(writer, "|")?;
        }
        for col in 0..maze.cols() {
            interior(writer, &maze[(row, col)])?;
            let (right, _) = drawn_walls(maze, (row, col));
            write!(writer, "{}", if right { '|' } else { ' ' })?;
        }
        writeln!(writer)?;

        write!(writer, "+")?;
        for col in 0..maze.cols() {
            let (_, bottom) = drawn_walls(maze, (row, col));
            write!(writer, "{}", if bottom { "---+" } else { "   +" })?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Plain ASCII drawing. Cells on the marked path show an `@`.
pub fn write_text<W: Write>(maze: &Maze, writer: &mut W) -> std::io::Result<()> {
    draw(maze, writer, |w, cell| {
        write!(w, "{}", if cell.visited { " @ " } else { "   " })
    })
}

/// Same drawing as [`write_text`], with the path highlighted for a terminal.
pub fn write_styled<W: Write>(maze: &Maze, writer: &mut W) -> std::io::Result<()> {
    draw(maze, writer, |w, cell| {
        queue!(w, style::PrintStyledContent(cell.styled_interior()))
    })?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Exit;

    fn corridor() -> Maze {
        // 2x3 maze:
        //   (0,0) - (0,1) - (0,2)
        //     |
        //   (1,0) - (1,1) - (1,2)
        let mut maze = Maze::new(2, 3).unwrap();
        maze.remove_wall((0, 0), Direction::Right);
        maze.remove_wall((0, 1), Direction::Right);
        maze.remove_wall((0, 0), Direction::Down);
        maze.remove_wall((1, 0), Direction::Right);
        maze.remove_wall((1, 1), Direction::Right);
        maze
    }

    fn render(maze: &Maze) -> String {
        let mut out = Vec::new();
        write_text(maze, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn lines(lines: &[&str]) -> String {
        lines.iter().map(|line| format!("{}\n", line)).collect()
    }

    #[test]
    fn test_default_exits() {
        let expected = lines(&[
            "+---+---+---+",
            "            |",
            "+   +---+---+",
            "|            ",
            "+---+---+---+",
        ]);
        assert_eq!(render(&corridor()), expected);
    }

    #[test]
    fn test_marked_path() {
        let mut maze = corridor();
        crate::solvers::find_path(&mut maze, (0, 2), (1, 2)).unwrap();
        let expected = lines(&[
            "+---+---+---+",
            "  @   @   @ |",
            "+   +---+---+",
            "| @   @   @  ",
            "+---+---+---+",
        ]);
        assert_eq!(render(&maze), expected);
    }

    #[test]
    fn test_top_and_bottom_exits() {
        let mut maze = corridor();
        maze.set_exits(Exit::new(Direction::Up, 1), Exit::new(Direction::Down, 2))
            .unwrap();
        let expected = lines(&[
            "+---+   +---+",
            "|           |",
            "+   +---+---+",
            "|           |",
            "+---+---+   +",
        ]);
        assert_eq!(render(&maze), expected);
    }

    #[test]
    fn test_single_cell() {
        let maze = Maze::new(1, 1).unwrap();
        assert_eq!(render(&maze), "+---+\n     \n+---+\n");
    }

    #[test]
    fn test_styled_output_contains_drawing() {
        let mut maze = corridor();
        crate::solvers::find_path(&mut maze, (0, 0), (0, 2)).unwrap();
        let mut out = Vec::new();
        write_styled(&maze, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("+---+---+---+\n"));
        assert_eq!(text.matches('@').count(), 3);
    }
}
