#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use othello::{
        Console, GameConfig, GameEngine, GameStatus, Move, Outcome, Player, SessionOptions,
    };
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn run_script(script: &str, options: SessionOptions) -> (Outcome, String) {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        let mut engine = console.setup(&options, &mut rng).unwrap();
        let outcome = console.run_game(&mut engine).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        (outcome, output)
    }

    #[test]
    fn test_scripted_game() {
        // names, first player, rows (default), columns, then moves
        let script = "\nAda\n1\n\n6\ncc\nzz\n\nquit\n";
        let (outcome, output) = run_script(script, SessionOptions::default());

        assert_eq!(outcome, Outcome::Winner(0));
        assert!(output.contains("Welcome to Othello!"));
        assert!(output.contains("Player Ada, the white disc (O)"));
        assert!(output.contains("Black goes first!"));
        assert!(output.contains("Black played CC, capturing 1."));
        assert!(output.contains("Input out of grid"));
        assert!(output.contains("Black score: 4 \t Ada score: 1"));
        assert!(output.contains("Black wins and Ada loses!"));
        assert!(output.contains("Have a great day!"));
        // six column headings
        assert!(output.contains("  A   B   C   D   E   F \n"));
    }

    #[test]
    fn test_bad_tokens_and_skip() {
        let options = SessionOptions {
            rows: Some(4),
            cols: Some(4),
            ..SessionOptions::default()
        };
        let script = "\n\n2\nabc\n\nskip\nQUIT\n";
        let (outcome, output) = run_script(script, options);
        assert_eq!(outcome, Outcome::Tie);
        assert!(output.contains("White goes first!"));
        assert!(output.contains("Input must be two letters"));
        assert!(output.contains("White passes."));
        assert!(output.contains("Both players tie!"));
    }

    #[test]
    fn test_invalid_size_falls_back_to_default() {
        let script = "\n\n1\n7\nmany\nquit\n";
        let (_, output) = run_script(script, SessionOptions::default());
        assert!(output.contains("'7' is not a valid number of rows, default of 8 is applied."));
        assert!(output.contains("'many' is not a valid number of columns"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let (outcome, output) = run_script("", SessionOptions::default());
        assert_eq!(outcome, Outcome::Tie);
        assert!(output.contains("GAME OVER"));
    }

    #[test]
    fn test_random_first_turn_is_reproducible() {
        let draw = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut console = Console::new(Cursor::new("\n".to_string()), Vec::new());
            let players = [Player::default_for(0, None), Player::default_for(1, None)];
            console.first_turn(&players, &mut rng).unwrap()
        };
        for seed in 0..8 {
            let first = draw(seed);
            assert!(first < 2);
            assert_eq!(first, draw(seed));
        }
    }

    #[test]
    fn test_move_tokens_in_either_case() {
        let options = SessionOptions {
            rows: Some(8),
            cols: Some(8),
            ..SessionOptions::default()
        };
        // black D-C (row 3, col 2), then white C-C (row 2, col 2)
        let script = "\n\n1\nDc\ncC\nquit\n";
        let (outcome, output) = run_script(script, options);
        assert!(output.contains("Black played DC, capturing 1."));
        assert!(output.contains("White played CC, capturing 1."));
        assert_eq!(outcome, Outcome::Tie);
    }

    #[test]
    fn test_finished_engine_goes_straight_to_results() {
        let players = [Player::default_for(0, None), Player::default_for(1, None)];
        let mut engine =
            GameEngine::from_config(&GameConfig::default(), players, 0).unwrap();
        engine.play(Move::Quit).unwrap();

        let mut console = Console::new(Cursor::new(String::new()), Vec::new());
        let outcome = console.run_game(&mut engine).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();

        assert_eq!(outcome, Outcome::Tie);
        assert_eq!(engine.status(), GameStatus::Over);
        assert!(output.contains("GAME OVER"));
        assert!(!output.contains("make a move"));
        assert!(!output.contains("already over"));
    }
}
