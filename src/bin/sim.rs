use clap::Parser;
use serde::Serialize;
use tictactoe::{Console, GameLoop, GameStatus, InputError, Piece, ScriptedPlayer};

/// Play scripted moves through the game loop and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Squares for X, in order (e.g. 0,4,8).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    x: Vec<i64>,
    /// Squares for O, in order.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    o: Vec<i64>,
}

#[derive(Serialize)]
struct Summary {
    status: GameStatus,
    winner: Option<Piece>,
    turns: u32,
    moves: usize,
    board: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let console = Console::new(std::io::empty(), std::io::sink());
    let mut game = GameLoop::new(
        Box::new(ScriptedPlayer::new(Piece::X, args.x)),
        Box::new(ScriptedPlayer::new(Piece::O, args.o)),
        console,
    );
    let status = match game.run() {
        Ok(status) => status,
        // script ran out before the game ended
        Err(InputError::Closed) => game.board().status(),
        Err(e) => return Err(e.into()),
    };

    let summary = Summary {
        status,
        winner: status.winner(),
        turns: game.turn(),
        moves: game.board().squares().iter().filter(|sq| !sq.is_empty()).count(),
        board: game.board().squares().iter().map(|sq| sq.symbol()).collect(),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
