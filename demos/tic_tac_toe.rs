extern crate tictactoe_engine;

use tictactoe_engine::config::SearchConfig;
use tictactoe_engine::game::Game;
use tictactoe_engine::random::{StandardRandomGenerator, random_move};
use tictactoe_engine::{GameState, Player};
use tracing::info;
use tracing_subscriber::EnvFilter;

const GAMES: usize = 10;

fn main() -> tictactoe_engine::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // An optional search config can be passed as the first argument.
    let config = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(content) => SearchConfig::from_toml_str(&content)?,
            Err(e) => {
                eprintln!("Failed to read {}: {}, using defaults", path, e);
                SearchConfig::default()
            }
        },
        None => SearchConfig::default(),
    };

    let mut rng = StandardRandomGenerator;
    let (mut draws, mut engine_wins) = (0, 0);

    for round in 1..=GAMES {
        let mut game = Game::with_config(&config);

        // A random human against the engine
        while game.current_state() == GameState::InProgress {
            let Some(human) = random_move(game.board(), &mut rng) else {
                break;
            };
            let outcome = game.submit_human_move(human.row, human.col);
            if outcome.state != GameState::InProgress {
                break;
            }

            let (reply, _) = game.request_automated_move()?;
            info!(round, row = reply.row, col = reply.col, "engine played");
        }

        println!("Round {}: {:?}\n{}\n", round, game.current_state(), game.board());
        match game.current_state() {
            GameState::Won(Player::PlayerTwo) => engine_wins += 1,
            GameState::Draw => draws += 1,
            state => panic!("the engine must never lose, got {:?}", state),
        }
    }

    println!("Engine won {} and drew {} of {} games", engine_wins, draws, GAMES);
    Ok(())
}
