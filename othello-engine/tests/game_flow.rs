use othello_engine::{
    Board, Cell, Color, GameConfig, GameError, GameState, Outcome, Player, Position, Status, Turn,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

fn seat_players(game: &mut GameState) {
    game.register(Player::new("Wendy", Color::White));
    game.register(Player::new("Blake", Color::Black));
}

/// Play the first legal move (row-major) for whoever is on turn until the game
/// ends or the player on turn is stuck. Returns the number of moves made.
fn play_first_moves(game: &mut GameState) -> usize {
    let mut moves = 0;
    while !game.is_finished() {
        let color = game.current_color();
        let Some(mv) = game.legal_moves(color).next() else {
            break;
        };
        game.play(color, mv).unwrap();
        moves += 1;
    }
    moves
}

#[test]
fn opening_move_flips_one_and_passes_turn() {
    init_tracing();
    let mut game = GameState::new();

    let openings: Vec<Position> = game.legal_moves(Color::Black).collect();
    assert_eq!(openings.len(), 4);
    for opening in &openings {
        // Every opening touches the seed cluster.
        let (row, col) = opening.to_coords();
        assert!((2..=5).contains(&row) && (2..=5).contains(&col));
    }

    let turn = game.play(Color::Black, openings[0]).unwrap();
    assert_eq!(turn, Turn::Next(Color::White));
    assert_eq!(game.count_pieces(), (4, 1));
    assert_eq!(game.status(), Status::AwaitingMove(Color::White));
}

#[test]
fn white_cannot_open() {
    let mut game = GameState::new();
    let white_reply = game.legal_moves(Color::White).next().unwrap();
    assert!(matches!(
        game.play(Color::White, white_reply),
        Err(GameError::NotYourTurn { expected: Color::Black, .. })
    ));
    assert_eq!(game.turn(), 0);
}

#[test]
fn playing_twice_in_a_row_is_rejected() {
    let mut game = GameState::new();
    game.play(Color::Black, pos("D3")).unwrap();
    let err = game.play(Color::Black, pos("C4")).unwrap_err();
    assert_eq!(
        err,
        GameError::NotYourTurn {
            expected: Color::White,
            attempted: Color::Black,
        }
    );
}

#[test]
fn without_forced_pass_a_stuck_player_blocks_the_game() {
    init_tracing();
    let mut game = GameState::new();
    seat_players(&mut game);

    let moves = play_first_moves(&mut game);
    assert_eq!(moves, 18);
    assert!(!game.is_finished());
    assert_eq!(game.current_color(), Color::Black);
    assert_eq!(game.count_pieces(), (10, 12));
    assert!(game.legal_moves(Color::Black).is_empty());
    assert!(!game.legal_moves(Color::White).is_empty());

    let err = game.play(Color::Black, pos("A1")).unwrap_err();
    assert_eq!(err, GameError::NoLegalMoves(Color::Black));
    assert_eq!(err.legal_moves(), Some(Default::default()));
}

#[test]
fn forced_pass_game_runs_to_completion() {
    init_tracing();
    let mut game = GameState::with_config(GameConfig { forced_pass: true });
    seat_players(&mut game);

    let moves = play_first_moves(&mut game);
    assert_eq!(moves, 60);
    assert!(game.is_finished());

    let result = game.result().unwrap().clone();
    assert_eq!((result.black_count, result.white_count), (19, 45));
    assert_eq!(result.outcome, Outcome::Winner(Color::White));
    assert_eq!(game.winner(), result.outcome);
    assert_eq!(result.winner.as_ref().map(Player::name), Some("Wendy"));
    assert!(result.to_string().ends_with("Winner is white player: Wendy"));
    assert!(game.legal_moves(Color::Black).is_empty());
    assert!(game.legal_moves(Color::White).is_empty());
}

#[test]
fn equal_counts_end_in_a_draw() {
    let board: Board = "
        OOOOOOOO
        OOOOOOOO
        OOOOOOOO
        OOOOOOOO
        XXXXXXXX
        XXXXXXXX
        XXXXXXXX
        XXXXXXO."
        .parse()
        .unwrap();
    let mut game = GameState::from_position(board, Color::Black, GameConfig::default());
    seat_players(&mut game);
    assert_eq!(game.count_pieces(), (30, 33));

    let turn = game.play(Color::Black, pos("H8")).unwrap();
    let Turn::GameOver(result) = turn else {
        panic!("full board must end the game");
    };
    assert_eq!((result.black_count, result.white_count), (32, 32));
    assert_eq!(result.outcome, Outcome::Draw);
    assert_eq!(result.winner, None);
    assert!(result.to_string().ends_with("The game is a tie"));
    assert_eq!(game.board().count(Cell::Empty), 0);
}

#[test]
fn finished_position_is_over_from_the_start() {
    let board: Board = "X".repeat(64).parse().unwrap();
    let mut game = GameState::from_position(board, Color::White, GameConfig::default());
    assert!(game.is_finished());
    assert_eq!(game.winner(), Outcome::Winner(Color::Black));

    // Registering afterwards still resolves the winner's name.
    game.register(Player::new("Blake", Color::Black));
    let result = game.result().unwrap();
    assert_eq!(result.winner.as_ref().map(Player::name), Some("Blake"));
    assert_eq!(game.play(Color::White, pos("A1")), Err(GameError::GameOver));
}

#[test]
fn display_shows_board_and_turn() {
    let game = GameState::new();
    let rendered = game.to_string();
    assert!(rendered.starts_with("   A B C D E F G H"));
    assert!(rendered.ends_with("It's black's turn"));
}
