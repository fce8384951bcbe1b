use othello::{legal_moves, GameConfig, GameEngine, Move, Outcome, Player, Turn};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;

/// Play two random-move sides until neither can place, then report scores.
fn main() -> anyhow::Result<()> {
    othello::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 && args.len() != 4 {
        eprintln!("Usage: {} <seed> [rows cols]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut config = GameConfig::default();
    if args.len() == 4 {
        config.rows = args[2].parse()?;
        config.cols = args[3].parse()?;
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let players = [Player::default_for(0, None), Player::default_for(1, None)];
    let mut engine = GameEngine::from_config(&config, players, 0)?;

    let mut plies = 0usize;
    while !engine.is_blocked() {
        let side = engine.active_player().side();
        let moves = legal_moves(engine.board(), side);
        let mv = if moves.is_empty() {
            Move::Skip
        } else {
            let (row, col) = moves[rng.random_range(0..moves.len())];
            Move::Place { row, col }
        };
        if let Turn::Moved { .. } = engine.play(mv)? {
            plies += 1;
        }
    }
    engine.play(Move::Quit)?;

    let [black, white] = engine.scores();
    let winner = match engine.outcome() {
        Outcome::Winner(i) => Some(engine.players()[i].colour().to_string()),
        Outcome::Tie => None,
    };
    let result = json!({
        "black": black,
        "white": white,
        "winner": winner,
        "outcome": engine.outcome(),
        "plies": plies,
        "discs": engine.board().disc_count(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
