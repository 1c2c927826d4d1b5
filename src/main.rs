use std::io;

use clap::{Parser, Subcommand};
use vault_solver::{
    init_logging,
    player_cli::{print_shapes, CliSession},
    Orientation, Setup, ShapeColor, Solver, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a board interactively, reporting each probe's outcome.
    Play {
        #[arg(long, default_value_t = DEFAULT_HEIGHT)]
        height: usize,
        #[arg(long, default_value_t = DEFAULT_WIDTH)]
        width: usize,
        /// Piece to locate as colour[:h|v], e.g. `--piece green:v`. Repeatable.
        #[arg(long = "piece", value_parser = parse_piece)]
        pieces: Vec<(ShapeColor, Orientation)>,
    },
    /// List the shape catalog and the edge labels each shape accepts.
    Shapes,
}

fn parse_piece(s: &str) -> Result<(ShapeColor, Orientation), String> {
    let (color, orientation) = match s.split_once(':') {
        Some((c, o)) => (c, Some(o)),
        None => (s, None),
    };
    let color = color.parse::<ShapeColor>().map_err(|e| e.to_string())?;
    let orientation = match orientation {
        Some(o) => o.parse::<Orientation>().map_err(|e| e.to_string())?,
        None => Orientation::Horizontal,
    };
    Ok((color, orientation))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            height,
            width,
            pieces,
        } => {
            let mut setup = Setup::default();
            setup
                .set_dimensions(height, width)
                .map_err(|e| anyhow::anyhow!(e))?;
            for (color, orientation) in pieces {
                setup.add_piece_oriented(color, orientation);
            }
            let mut solver = Solver::Setup(setup);
            if solver.setup_mut().is_some_and(|s| !s.pieces().is_empty()) {
                solver.start().map_err(|e| anyhow::anyhow!(e))?;
                println!("Session started, select a cell (e.g. A1)");
            }
            let mut cli = CliSession::new(solver);
            let stdin = io::stdin();
            cli.run(stdin.lock(), &mut io::stdout())?;
        }
        Commands::Shapes => print_shapes(&mut io::stdout())?,
    }
    Ok(())
}
