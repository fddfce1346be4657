//! Terminal front end.
//!
//! ```text
//! memory [easy|medium|hard] [--seed N] [--auto random|recall]
//! ```

use std::io::{self, BufRead, Write};

use log::{error, info};
use memory_match::{
    play_out, BoardSize, CardView, CustomBoardBuilder, FlipPolicy, GameConfig, GameSession,
    IconPool, MemoryGame, RandomPolicy, RecallPolicy, SessionEvent,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AutoMode {
    Random,
    Recall,
}

#[derive(Debug)]
struct CliOptions {
    board_size: BoardSize,
    seed: Option<u64>,
    auto: Option<AutoMode>,
}

fn parse_cli_options(args: &[String]) -> Result<CliOptions, String> {
    let mut board_size = BoardSize::default();
    let mut seed = None;
    let mut auto = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--seed" => {
                let value = args.get(idx + 1).ok_or("--seed needs a value")?;
                seed = Some(value.parse::<u64>().map_err(|err| format!("bad seed: {err}"))?);
                idx += 1;
            }
            "--auto" => {
                auto = match args.get(idx + 1).map(String::as_str) {
                    Some("random") => Some(AutoMode::Random),
                    Some("recall") | None => Some(AutoMode::Recall),
                    Some(other) => return Err(format!("unknown autoplay mode '{other}'")),
                };
                idx += 1;
            }
            other => board_size = other.parse().map_err(|err| format!("{err}"))?,
        }
        idx += 1;
    }
    Ok(CliOptions {
        board_size,
        seed,
        auto,
    })
}

fn render(views: &[CardView], width: usize) -> String {
    let mut out = String::new();
    for (row, cells) in views.chunks(width).enumerate() {
        for (col, view) in cells.iter().enumerate() {
            let position = row * width + col;
            let label = match (&view.face, view.matched) {
                (_, true) => "  --  ".to_string(),
                (Some(face), false) => {
                    let name = face.to_string();
                    let short: String = name.trim_start_matches("ic_").chars().take(6).collect();
                    format!("{short:^6}")
                }
                (None, false) => format!("[{position:^4}]"),
            };
            out.push_str(&label);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn run_auto(options: &CliOptions, mode: AutoMode) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GameConfig::new(options.board_size);
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }
    let mut game = MemoryGame::from_config(&config, &IconPool::stock())?;
    let mut policy: Box<dyn FlipPolicy> = match mode {
        AutoMode::Random => Box::new(RandomPolicy::new(options.seed.unwrap_or_default())),
        AutoMode::Recall => Box::new(RecallPolicy::new()),
    };
    let max_flips = options.board_size.num_cards() * 100;
    let report = play_out(&mut game, policy.as_mut(), max_flips)?;

    print!("{}", render(&game.views(), options.board_size.width()));
    println!(
        "{:?}: {} moves, {} / {} pairs, won: {}",
        mode,
        report.moves,
        report.pairs_found,
        game.total_pairs(),
        report.won
    );
    Ok(())
}

fn run_interactive(options: &CliOptions) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GameConfig::new(options.board_size);
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }
    let mut session = GameSession::new(config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!(
        "commands: <position> | reset | size <easy|medium|hard> | custom <name> <image>... | quit"
    );
    loop {
        let status = session.status();
        print!("{}", render(&session.views(), session.board_size().width()));
        println!("{}    {}", status.moves_label, status.pairs_label);
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => continue,
            ["quit" | "q"] => break,
            ["reset" | "r"] => {
                if session.needs_quit_confirmation() {
                    println!("abandoning current game");
                }
                session.reset()?;
            }
            ["size" | "s", size] => match size.parse::<BoardSize>() {
                Ok(size) => session.change_size(size)?,
                Err(err) => println!("{err}"),
            },
            ["custom" | "c", name, images @ ..] => {
                let mut builder = CustomBoardBuilder::new(session.board_size());
                builder.add_images(images.iter().copied());
                builder.set_name(*name);
                println!("{}", builder.title());
                match builder.build() {
                    Ok(board) => session.start_custom(board)?,
                    Err(err) => println!("cannot create board: {err}"),
                }
            }
            [position] => {
                let Ok(position) = position.parse::<usize>() else {
                    println!("unknown command '{position}'");
                    continue;
                };
                match session.select(position) {
                    Ok(SessionEvent::AlreadyWon) => println!("You already won!"),
                    Ok(SessionEvent::InvalidMove) => println!("Invalid move!"),
                    Ok(SessionEvent::Flipped { won: true, .. }) => {
                        println!("You have won! Congratulations.")
                    }
                    Ok(SessionEvent::Flipped { matched: true, .. }) => println!("Match!"),
                    Ok(SessionEvent::Flipped { .. }) => {}
                    Err(err) => println!("{err}"),
                }
            }
            _ => println!("unknown command"),
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_cli_options(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: memory [easy|medium|hard] [--seed N] [--auto random|recall]");
            std::process::exit(2);
        }
    };
    info!("starting with {:?}", options);

    let result = match options.auto {
        Some(mode) => run_auto(&options, mode),
        None => run_interactive(&options),
    };
    if let Err(err) = result {
        error!("memory exited with error: {err}");
        std::process::exit(1);
    }
}
