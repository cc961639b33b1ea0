use std::io::{self, Cursor};

use tictactoe::{
    CliPlayer, Console, GameLoop, GameStatus, InputError, Piece, ScriptedPlayer, MOVE_PROMPT,
};

type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn grid(cells: &str) -> String {
    let c: Vec<char> = cells.chars().collect();
    assert_eq!(c.len(), 9);
    format!(
        " {} | {} | {} \n---|---|---\n {} | {} | {} \n---|---|---\n {} | {} | {} \n",
        c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7], c[8]
    )
}

fn cli_game(input: &str) -> GameLoop<TestConsole> {
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    GameLoop::new(
        Box::new(CliPlayer::new(Piece::X)),
        Box::new(CliPlayer::new(Piece::O)),
        console,
    )
}

fn scripted_game(x: &[i64], o: &[i64]) -> (GameStatus, String) {
    let console = Console::new(io::empty(), Vec::new());
    let mut game = GameLoop::new(
        Box::new(ScriptedPlayer::new(Piece::X, x.to_vec())),
        Box::new(ScriptedPlayer::new(Piece::O, o.to_vec())),
        console,
    );
    let status = game.run().unwrap();
    let (_, output) = game.into_terminal().into_parts();
    (status, String::from_utf8(output).unwrap())
}

fn output_of(game: GameLoop<TestConsole>) -> String {
    let (_, output) = game.into_terminal().into_parts();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_full_console_transcript() {
    let mut game = cli_game("0\n3\n1\n4\n2\n");
    let status = game.run().unwrap();
    assert_eq!(status, GameStatus::Won(Piece::X));
    assert_eq!(game.turn(), 5);

    let mut expected = grid("         ");
    let plies = [
        ("X", "X        "),
        ("O", "X  O     "),
        ("X", "XX O     "),
        ("O", "XX OO    "),
        ("X", "XXXOO    "),
    ];
    for (player, board) in plies {
        expected.push_str(&format!("\nPLAYER {}\n{}", player, MOVE_PROMPT));
        expected.push('\n');
        expected.push_str(&grid(board));
    }
    expected.push_str("\nX wins!\n");

    assert_eq!(output_of(game), expected);
}

#[test]
fn test_x_wins_with_scripted_players() {
    let (status, output) = scripted_game(&[0, 2, 4, 6, 8], &[1, 3, 5, 7]);
    assert_eq!(status, GameStatus::Won(Piece::X));
    assert!(output.starts_with(&grid("         ")));
    assert!(output.contains(&grid("X        ")));
    assert!(output.ends_with(&format!("{}\nX wins!\n", grid("XOXOXOX  "))));
}

#[test]
fn test_draw_with_scripted_players() {
    let (status, output) = scripted_game(&[1, 2, 3, 4, 8], &[0, 5, 6, 7]);
    assert_eq!(status, GameStatus::Drawn);
    assert!(output.ends_with(&format!("{}\nDraw\n", grid("OXXXXOOOX"))));
}

#[test]
fn test_out_of_range_moves_are_retried() {
    let (status, output) = scripted_game(&[10, -2, 0, 1, 2], &[6, 7, 8]);
    assert_eq!(status, GameStatus::Won(Piece::X));
    assert_eq!(output.matches("Not a valid square!\n").count(), 2);
    assert!(output.contains(&grid("XXX   OO ")));
}

#[test]
fn test_taken_square_is_retried() {
    let (status, output) = scripted_game(&[0, 1, 2], &[0, 6, 7, 8]);
    assert_eq!(status, GameStatus::Won(Piece::X));
    assert_eq!(output.matches("That square is already taken!\n").count(), 1);
    assert!(output.contains(&grid("XXX   OO ")));
}

#[test]
fn test_rejected_move_keeps_the_same_player() {
    let mut game = cli_game("9\n0\n4\n");
    let square = game.play_turn().unwrap().unwrap();
    assert_eq!(square.index(), 0);
    assert_eq!(game.turn(), 1);
    assert_eq!(game.active_piece(), Piece::X);
    assert!(game.board().is_legal_move(0).is_err());

    let output = output_of(game);
    assert!(output.contains(&format!(
        "\nPLAYER X\n{p}Not a valid square!\n\nPLAYER X\n{p}",
        p = MOVE_PROMPT
    )));
    assert!(!output.contains("PLAYER O"));
}

#[test]
fn test_turn_parity() {
    type Loop = GameLoop<TestConsole>;
    assert_eq!(Loop::player_for_turn(1), 0);
    assert_eq!(Loop::player_for_turn(2), 1);
    assert_eq!(Loop::player_for_turn(3), 0);
    assert_eq!(Loop::player_for_turn(8), 1);
}

#[test]
fn test_no_turn_after_game_over() {
    let mut game = cli_game("0\n3\n1\n4\n2\n5\n");
    game.run().unwrap();
    let printed = game.terminal().output().len();
    assert_eq!(game.play_turn().unwrap(), None);
    assert_eq!(game.turn(), 5);
    assert_eq!(game.terminal().output().len(), printed);
}

#[test]
fn test_closed_input_aborts_game() {
    let mut game = cli_game("0\n3\n");
    match game.run() {
        Err(InputError::Closed) => {}
        other => panic!("expected closed input, got {:?}", other),
    }
    assert_eq!(game.board().status(), GameStatus::InProgress);
}

#[test]
fn test_scripted_player_counts_requests() {
    use tictactoe::Player;

    let mut player = ScriptedPlayer::new(Piece::O, [4, 5]);
    let mut console = Console::new(io::empty(), io::sink());
    assert_eq!(player.next_move(&mut console).unwrap(), 4);
    assert_eq!(player.next_move(&mut console).unwrap(), 5);
    assert!(matches!(player.next_move(&mut console), Err(InputError::Closed)));
    assert_eq!(player.requests(), 3);
    assert_eq!(player.remaining(), 0);
}
