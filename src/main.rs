#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use tictactoe::{init_logging, CliPlayer, Console, GameLoop, Piece};

/// Two-player tic-tac-toe at the console. Squares are numbered 0 to 8,
/// left to right and top to bottom.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    init_logging();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());
    let mut game = GameLoop::new(
        Box::new(CliPlayer::new(Piece::X)),
        Box::new(CliPlayer::new(Piece::O)),
        console,
    );
    game.run()?;
    Ok(())
}
