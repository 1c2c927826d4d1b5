use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use vault_solver::{autoplay, init_logging, HiddenLayout, Orientation, Setup, ShapeColor};

const USAGE: &str = "Usage: sim <seed> [games] [--no-edges]";

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let report_edges = !args.iter().any(|a| a == "--no-edges");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();
    if positional.is_empty() || positional.len() > 2 {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }
    let seed: u64 = positional[0].parse()?;
    let games: usize = match positional.get(1) {
        Some(g) => g.parse()?,
        None => 1,
    };

    let mut setup = Setup::new(8, 8);
    setup.add_piece(ShapeColor::Yellow);
    setup.add_piece_oriented(ShapeColor::Blue, Orientation::Vertical);
    setup.add_piece(ShapeColor::Green);
    setup.add_piece(ShapeColor::Orange);
    setup.add_piece(ShapeColor::Purple);

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut attempts = Vec::with_capacity(games);
    let mut unsolved = 0usize;
    for _ in 0..games {
        let layout = HiddenLayout::random(&mut rng, setup.height(), setup.width(), setup.pieces())
            .map_err(|e| anyhow::anyhow!(e))?;
        let mut session = setup.start().map_err(|e| anyhow::anyhow!(e))?;
        attempts.push(autoplay(&mut session, &layout, report_edges).map_err(|e| anyhow::anyhow!(e))?);
        if !session.progress().complete {
            unsolved += 1;
        }
    }

    let mean = attempts.iter().sum::<usize>() as f64 / games.max(1) as f64;
    let result = json!({
        "seed": seed,
        "games": games,
        "edges": report_edges,
        "attempts": attempts,
        "mean": mean,
        "unsolved": unsolved,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
