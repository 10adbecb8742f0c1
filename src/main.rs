//! Loop League entry point
//!
//! The web build is driven from JavaScript through `loop_league::web`. The
//! native binary is a line-oriented console player for trying seeds.

#[cfg(not(target_arch = "wasm32"))]
mod console {
    use std::io::{self, BufRead, Write};
    use std::path::PathBuf;

    use loop_league::platform::now_ms;
    use loop_league::sim::{RoundSnapshot, RoundStatus};
    use loop_league::{Leaderboard, Round, RoundResult, Settings};

    const HELP: &str = "commands: start | tap X-Y | clear | reset [SEED] | show | scores | help | quit";

    /// Console command
    #[derive(Debug, PartialEq, Eq)]
    pub enum Command {
        Start,
        Tap(String),
        Clear,
        Reset(Option<String>),
        Show,
        Scores,
        Help,
        Quit,
        Unknown(String),
    }

    pub fn parse_command(line: &str) -> Option<Command> {
        let mut words = line.split_whitespace();
        let cmd = words.next()?;
        let arg = words.next().map(str::to_string);
        Some(match cmd.to_lowercase().as_str() {
            "start" | "s" => Command::Start,
            "tap" | "t" => match arg {
                Some(id) => Command::Tap(id),
                None => Command::Unknown(line.trim().to_string()),
            },
            "clear" | "c" => Command::Clear,
            "reset" | "r" => Command::Reset(arg),
            "show" => Command::Show,
            "scores" => Command::Scores,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        })
    }

    /// Board as letters; path nodes are lowercase, the path tip is bracketed
    pub fn render(snapshot: &RoundSnapshot) -> String {
        let grid = &snapshot.grid;
        let mut out = format!(
            "score {}  time {}s  combo {}x  [{:?}]\n",
            snapshot.score, snapshot.time_left, snapshot.combo, snapshot.status
        );
        out.push_str("   ");
        for x in 0..grid.size() {
            out.push_str(&format!(" {:>2} ", x));
        }
        out.push('\n');
        for y in 0..grid.size() {
            out.push_str(&format!("{:>2} ", y));
            for node in grid.nodes().iter().filter(|n| n.id.y == y) {
                let letter = node.color.letter();
                let cell = if snapshot.current_path.last() == Some(&node.id) {
                    format!(" [{}]", letter.to_ascii_lowercase())
                } else if snapshot.current_path.contains(&node.id) {
                    format!("  {} ", letter.to_ascii_lowercase())
                } else {
                    format!("  {} ", letter)
                };
                out.push_str(&cell);
            }
            out.push('\n');
        }
        out
    }

    fn record(result: &RoundResult, board: &mut Leaderboard, scores_path: Option<&PathBuf>) {
        println!("Time! Final score {} ({} loops)", result.score, result.loops);
        if let Some(rank) = board.record(result) {
            println!("New leaderboard rank #{}", rank);
            if let Some(path) = scores_path {
                if let Err(e) = board.save_to(path) {
                    log::warn!("Failed to save leaderboard to {}: {}", path.display(), e);
                }
            }
        }
    }

    pub fn run() -> io::Result<()> {
        let settings = std::env::var_os("LOOP_LEAGUE_SETTINGS")
            .map(|p| Settings::load_from(&PathBuf::from(p)))
            .unwrap_or_default();
        let scores_path = std::env::var_os("LOOP_LEAGUE_SCORES").map(PathBuf::from);
        let mut board = scores_path
            .as_deref()
            .map(Leaderboard::load_from)
            .unwrap_or_default();

        let seed = std::env::args()
            .nth(1)
            .unwrap_or_else(loop_league::random_seed);
        let mut round = Round::new(&seed, settings.round_config());
        println!("Loop League - seed {:?}, theme {}", seed, settings.theme().name);
        println!("{}", HELP);
        println!("{}", render(&round.snapshot()));

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        for line in stdin.lock().lines() {
            let line = line?;
            // The clock is polled before every command
            if let Some(result) = round.poll(now_ms()) {
                record(&result, &mut board, scores_path.as_ref());
            }
            let Some(command) = parse_command(&line) else {
                continue;
            };
            let snapshot = match command {
                Command::Start => round.start_round(now_ms()),
                Command::Tap(id) => round.tap_node(&id),
                Command::Clear => round.clear_path(),
                Command::Reset(seed) => {
                    let seed = seed.unwrap_or_else(loop_league::random_seed);
                    println!("New seed {:?}", seed);
                    round.reset_round(&seed)
                }
                Command::Show => round.snapshot(),
                Command::Scores => {
                    for (i, e) in board.entries.iter().enumerate() {
                        println!("{:>2}. {:>6}  seed {:?}", i + 1, e.score, e.seed);
                    }
                    if board.is_empty() {
                        println!("No scores yet");
                    }
                    continue;
                }
                Command::Help => {
                    println!("{}", HELP);
                    continue;
                }
                Command::Quit => break,
                Command::Unknown(text) => {
                    println!("Unknown command {:?}. {}", text, HELP);
                    continue;
                }
            };
            print!("{}", render(&snapshot));
            if snapshot.status == RoundStatus::Waiting && round.timer_epoch().is_none() {
                println!("Type `start` to begin");
            }
            stdout.flush()?;
        }
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    env_logger::init();
    log::info!("Loop League (native) starting...");
    console::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is loop_league::web::wasm_start
}
