#![cfg(feature = "std")]

use std::io::{BufRead, Write};
use std::string::String;
use std::vec::Vec;

use crate::{
    ai::ScoreGrid,
    board::ProbeResult,
    discovery::DiscoveredPiece,
    edge::{valid_edge_labels, EdgeLabel},
    game::{Analysis, Progress, Session},
    setup::Solver,
    shape::{Orientation, PieceId, ShapeColor},
};

const HELP: &str = "\
setup:   size <h> <w> | add <colour> [h|v] | remove <id> | toggle <id> | pieces | start
playing: <cell, e.g. B3> | cancel | miss | hit [colour] [edge]
         board | scores | status | targets | json
always:  shapes | reset | help | quit";

/// Machine-readable view of a session, printed by the `json` command.
#[derive(Debug, serde::Serialize)]
pub struct Report {
    pub progress: Progress,
    pub discovered: Vec<DiscoveredPiece>,
    pub suggestion: Option<(usize, usize)>,
    pub scores: Vec<Vec<u64>>,
}

impl Report {
    pub fn new(session: &Session) -> Self {
        let analysis = session.analysis();
        Report {
            progress: session.progress(),
            suggestion: analysis.suggestion,
            scores: analysis.scores.to_rows(),
            discovered: analysis.discovery.into_discovered(),
        }
    }
}

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    std::format!("{}{}", col, r + 1)
}

pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

fn color_initial(color: Option<ShapeColor>) -> char {
    match color {
        Some(c) => c.as_str().chars().next().unwrap_or('X').to_ascii_uppercase(),
        None => 'X',
    }
}

fn print_header<W: Write>(out: &mut W, width: usize, cell_width: usize) -> std::io::Result<()> {
    write!(out, "   ")?;
    for c in 0..width {
        let ch = (b'A' + c as u8) as char;
        write!(out, " {:>w$}", ch, w = cell_width)?;
    }
    writeln!(out)
}

/// Render the board: colour initials for hits, `o` for misses, `?` for the
/// pending cell and `*` for the suggestion.
pub fn print_board<W: Write>(out: &mut W, session: &Session, analysis: &Analysis) -> std::io::Result<()> {
    let board = session.board();
    print_header(out, board.width(), 1)?;
    for r in 0..board.height() {
        write!(out, "{:2} ", r + 1)?;
        for c in 0..board.width() {
            let ch = match board.cell(r, c) {
                Some(cell) if cell.revealed && cell.is_hit => color_initial(cell.color),
                Some(cell) if cell.revealed => 'o',
                _ if session.pending() == Some((r, c)) => '?',
                _ if analysis.suggestion == Some((r, c)) => '*',
                _ => '.',
            };
            write!(out, " {}", ch)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Render the score grid; revealed cells show `-`.
pub fn print_score_board<W: Write>(out: &mut W, session: &Session, scores: &ScoreGrid) -> std::io::Result<()> {
    let board = session.board();
    writeln!(out, "Scores:")?;
    print_header(out, board.width(), 5)?;
    for r in 0..board.height() {
        write!(out, "{:2} ", r + 1)?;
        for c in 0..board.width() {
            if board.cell(r, c).is_some_and(|cell| cell.revealed) {
                write!(out, " {:>5}", "-")?;
            } else {
                write!(out, " {:>5}", scores.get(r, c))?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// List every shape with the edge labels it accepts in each orientation.
pub fn print_shapes<W: Write>(out: &mut W) -> std::io::Result<()> {
    for color in ShapeColor::ALL {
        let def = color.def();
        let orientations: &[Orientation] = if def.is_locked() {
            &[Orientation::Horizontal]
        } else {
            &[Orientation::Horizontal, Orientation::Vertical]
        };
        for &o in orientations {
            let (w, h) = def.dims(o);
            let labels: Vec<&str> = valid_edge_labels(w, h).iter().map(|l| l.as_str()).collect();
            writeln!(
                out,
                "{:<7} {:<15} {} {}x{}: {}",
                color.as_str(),
                def.name(),
                o,
                w,
                h,
                labels.join(", ")
            )?;
        }
    }
    Ok(())
}

/// List every configured piece with its anchor once found.
pub fn print_targets<W: Write>(out: &mut W, session: &Session, analysis: &Analysis) -> std::io::Result<()> {
    for piece in session.pieces() {
        let found = analysis
            .discovery
            .discovered()
            .iter()
            .find(|d| d.piece.id() == piece.id());
        let mark = match found {
            Some(d) => std::format!("found at {}", coord_to_string(d.row, d.col)),
            None => String::from("not found"),
        };
        writeln!(
            out,
            "{} {} {}: {}",
            piece.id(),
            piece.def().name(),
            piece.orientation(),
            mark
        )?;
    }
    Ok(())
}

fn print_status<W: Write>(out: &mut W, progress: Progress) -> std::io::Result<()> {
    writeln!(
        out,
        "{} / {} units found, {} attempts",
        progress.found, progress.total, progress.attempts
    )?;
    if progress.complete {
        writeln!(out, "All units found in {} attempts!", progress.attempts)?;
    }
    Ok(())
}

/// Line-oriented front end over a [`Solver`].
#[derive(Debug, Default)]
pub struct CliSession {
    solver: Solver,
}

impl CliSession {
    pub fn new(solver: Solver) -> Self {
        Self { solver }
    }

    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "{}", HELP)?;
        for line in input.lines() {
            if self.handle(&line?, out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Execute one command line. Rejected commands are reported on `out`.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<Flow> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };
        let result: anyhow::Result<()> = match cmd {
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => writeln!(out, "{}", HELP).map_err(Into::into),
            "shapes" => print_shapes(out).map_err(Into::into),
            "reset" => {
                self.solver.reset();
                writeln!(out, "Back to setup").map_err(Into::into)
            }
            _ if self.solver.is_playing() => self.handle_playing(cmd, args, out),
            _ => self.handle_setup(cmd, args, out),
        };
        if let Err(e) = result {
            if e.downcast_ref::<std::io::Error>().is_some() {
                return Err(e);
            }
            writeln!(out, "Error: {}", e)?;
        }
        Ok(Flow::Continue)
    }

    fn handle_setup<W: Write>(&mut self, cmd: &str, args: &[&str], out: &mut W) -> anyhow::Result<()> {
        let setup = self
            .solver
            .setup_mut()
            .ok_or_else(|| anyhow::anyhow!("not in setup"))?;
        match (cmd, args) {
            ("size", [h, w]) => {
                setup
                    .set_dimensions(h.parse()?, w.parse()?)
                    .map_err(|e| anyhow::anyhow!(e))?;
                writeln!(out, "Board {}x{}", setup.height(), setup.width())?;
            }
            ("add", [color, rest @ ..]) if rest.len() <= 1 => {
                let color: ShapeColor = color.parse().map_err(|e| anyhow::anyhow!("{}", e))?;
                let orientation = match rest.first() {
                    Some(o) => o.parse().map_err(|e| anyhow::anyhow!("{}", e))?,
                    None => Orientation::Horizontal,
                };
                let id = setup.add_piece_oriented(color, orientation);
                writeln!(out, "Added {} {}", color.def().name(), id)?;
            }
            ("remove", [id]) => {
                let piece = setup
                    .remove_piece(PieceId(id.trim_start_matches('#').parse()?))
                    .map_err(|e| anyhow::anyhow!(e))?;
                writeln!(out, "Removed {} {}", piece.def().name(), piece.id())?;
            }
            ("toggle", [id]) => {
                let o = setup
                    .toggle_orientation(PieceId(id.trim_start_matches('#').parse()?))
                    .map_err(|e| anyhow::anyhow!(e))?;
                writeln!(out, "Orientation {}", o)?;
            }
            ("pieces", []) => {
                writeln!(out, "Board {}x{}", setup.height(), setup.width())?;
                for p in setup.pieces() {
                    writeln!(out, "{} {} {}", p.id(), p.def().name(), p.orientation())?;
                }
            }
            ("start", []) => {
                let session = self.solver.start().map_err(|e| anyhow::anyhow!(e))?;
                let analysis = session.analysis();
                print_board(out, session, &analysis)?;
            }
            _ => anyhow::bail!("unknown setup command '{}' (try help)", cmd),
        }
        Ok(())
    }

    fn handle_playing<W: Write>(&mut self, cmd: &str, args: &[&str], out: &mut W) -> anyhow::Result<()> {
        let session = self.solver.session_mut().map_err(|e| anyhow::anyhow!(e))?;
        match (cmd, args) {
            ("miss", []) => {
                session
                    .record_result(ProbeResult::Miss)
                    .map_err(|e| anyhow::anyhow!(e))?;
                Self::show(session, out)?;
            }
            ("hit", rest) if rest.len() <= 2 => {
                let result = parse_hit(session, rest, out)?;
                session.record_result(result).map_err(|e| anyhow::anyhow!(e))?;
                Self::show(session, out)?;
            }
            ("board", []) => {
                let analysis = session.analysis();
                print_board(out, session, &analysis)?;
            }
            ("scores", []) => {
                let scores = session.score_grid();
                print_score_board(out, session, &scores)?;
            }
            ("status", []) => print_status(out, session.progress())?,
            ("targets", []) => {
                let analysis = session.analysis();
                print_targets(out, session, &analysis)?;
            }
            ("cancel", []) => match session.clear_selection() {
                Some((r, c)) => writeln!(out, "Cancelled {}", coord_to_string(r, c))?,
                None => writeln!(out, "Nothing selected")?,
            },
            ("json", []) => writeln!(out, "{}", serde_json::to_string(&Report::new(session))?)?,
            (coord, []) => {
                let (r, c) = parse_coord(coord)
                    .ok_or_else(|| anyhow::anyhow!("unknown command '{}' (try help)", coord))?;
                let outcome = session.select_cell(r, c).map_err(|e| anyhow::anyhow!(e))?;
                if outcome.has_update() {
                    writeln!(out, "Selected {}: report miss or hit", coord_to_string(r, c))?;
                } else {
                    writeln!(out, "{} is already revealed", coord_to_string(r, c))?;
                }
            }
            _ => anyhow::bail!("unknown command '{}' (try help)", cmd),
        }
        Ok(())
    }

    fn show<W: Write>(session: &Session, out: &mut W) -> anyhow::Result<()> {
        let analysis = session.analysis();
        print_board(out, session, &analysis)?;
        print_status(out, session.progress())?;
        if let Some((r, c)) = analysis.suggestion {
            writeln!(out, "Suggested: {}", coord_to_string(r, c))?;
        }
        Ok(())
    }
}

/// Parse `hit [colour] [edge]` arguments, warning when the label is not
/// offered for any configured piece of that colour.
fn parse_hit<W: Write>(session: &Session, args: &[&str], out: &mut W) -> anyhow::Result<ProbeResult> {
    let mut color = None;
    let mut edge = None;
    for arg in args {
        if let Ok(c) = arg.parse::<ShapeColor>() {
            if color.replace(c).is_some() {
                anyhow::bail!("colour given twice");
            }
        } else if let Ok(e) = arg.parse::<EdgeLabel>() {
            if edge.replace(e).is_some() {
                anyhow::bail!("edge label given twice");
            }
        } else {
            anyhow::bail!("'{}' is neither a colour nor an edge label", arg);
        }
    }
    if let (Some(color), Some(edge)) = (color, edge) {
        let offered = session
            .pieces()
            .iter()
            .filter(|p| p.color() == color)
            .any(|p| {
                let (w, h) = p.dims();
                valid_edge_labels(w, h).contains(&edge)
            });
        if !offered {
            writeln!(out, "Warning: '{}' is not a label of any {} piece", edge, color)?;
        }
    }
    Ok(ProbeResult::Hit { color, edge })
}
