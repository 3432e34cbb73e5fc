use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use clap::{value_parser, Arg, ArgAction, ArgGroup, ArgMatches, Command};
use log::debug;
use prettytable::{row, Table};

use sokoban_puzzle::config::{Config, Format};
use sokoban_puzzle::data::Dir;
use sokoban_puzzle::engine::{Blocked, MoveOutcome, Phase, PuzzleEngine};
use sokoban_puzzle::level::Level;
use sokoban_puzzle::moves::Moves;
use sokoban_puzzle::session::Session;
use sokoban_puzzle::LoadLevel;

fn main() {
    env_logger::init();

    let config = parse_args();
    debug!("{:?}", config);

    let levels: Vec<Level> = config
        .files
        .iter()
        .map(|path| {
            path.load_level_as(config.format_for(path))
                .unwrap_or_else(|err| {
                    eprintln!("Can't load level {}: {}", path.display(), err);
                    process::exit(1);
                })
        })
        .collect();

    if config.list {
        list(&config, &levels);
    } else if let Some(ref moves) = config.moves {
        println!("Playing {}...", config.files[0].display());
        replay(&levels[0], moves);
    } else {
        let session = Session::new(levels).unwrap_or_else(|err| {
            eprintln!("{}", err);
            process::exit(1);
        });
        play(session);
    }
}

fn parse_args() -> Config {
    let matches = Command::new("sokoban-puzzle")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Push all the boxes onto targets")
        .arg(
            Arg::new("xsb")
                .short('x')
                .long("xsb")
                .action(ArgAction::SetTrue)
                .help("parse as XSB format (default for unknown extensions)"),
        )
        .arg(
            Arg::new("codes")
                .short('c')
                .long("codes")
                .action(ArgAction::SetTrue)
                .help("parse as whitespace separated cell codes"),
        )
        .arg(
            Arg::new("json")
                .short('j')
                .long("json")
                .action(ArgAction::SetTrue)
                .help("parse as JSON level documents (default for .json)"),
        )
        .group(ArgGroup::new("format").args(["xsb", "codes", "json"]))
        .arg(
            Arg::new("moves")
                .short('m')
                .long("moves")
                .value_name("LURD")
                .value_parser(|s: &str| s.parse::<Moves>())
                .help("replay these moves on the first level instead of reading stdin"),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .action(ArgAction::SetTrue)
                .conflicts_with("moves")
                .help("print an overview of the levels and exit"),
        )
        .arg(
            Arg::new("files")
                .required(true)
                .num_args(1..)
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    config_from_matches(&matches)
}

fn config_from_matches(matches: &ArgMatches) -> Config {
    let format = if matches.get_flag("xsb") {
        Some(Format::Xsb)
    } else if matches.get_flag("codes") {
        Some(Format::Codes)
    } else if matches.get_flag("json") {
        Some(Format::Json)
    } else {
        None
    };
    Config {
        format,
        moves: matches.get_one::<Moves>("moves").cloned(),
        list: matches.get_flag("list"),
        files: matches
            .get_many::<PathBuf>("files")
            .map(|files| files.cloned().collect())
            .unwrap_or_default(),
    }
}

fn list(config: &Config, levels: &[Level]) {
    let mut table = Table::new();
    table.add_row(row!["#", "File", "Size", "Boxes", "Targets", "Solved"]);
    for (i, (path, level)) in config.files.iter().zip(levels).enumerate() {
        let solved = if PuzzleEngine::new(level).is_solved() {
            "yes"
        } else {
            "no"
        };
        table.add_row(row![
            i + 1,
            path.display(),
            format!("{}x{}", level.map.width(), level.map.height()),
            level.state.boxes.len(),
            level.map.targets().len(),
            solved
        ]);
    }
    table.printstd();
}

fn replay(level: &Level, moves: &Moves) {
    let mut engine = PuzzleEngine::new(level);
    println!("{}", engine);
    for mov in moves {
        match engine.attempt_move(mov.dir) {
            MoveOutcome::Accepted(_) => println!("{}", engine),
            MoveOutcome::Rejected(Blocked::Obstacle) => {
                println!("Blocked: {}", mov.dir);
                break;
            }
            MoveOutcome::Rejected(Blocked::AlreadyCompleted) => break,
        }
    }
    print_summary(&engine);
}

fn print_summary(engine: &PuzzleEngine) {
    println!("{}", engine.moves());
    println!("Moves: {}", engine.moves().move_cnt());
    println!("Pushes: {}", engine.moves().push_cnt());
    if engine.phase() == Phase::Completed {
        println!("LEVEL COMPLETE!");
    } else {
        println!("Not solved");
    }
}

fn print_level(session: &Session) {
    println!(
        "Level {}/{}",
        session.current_index() + 1,
        session.total_levels()
    );
    println!("{}", session.engine());
}

fn print_completion(session: &Session) {
    print_summary(session.engine());
    let next = session.current_index() + 1;
    if next < session.total_levels() {
        println!("Press n for level {}", next + 1);
    }
}

/// One command per character: wasd to move, r to restart, n for the next level, q to quit.
///
/// The board is printed after every line and as soon as a level is completed.
fn play(mut session: Session) {
    print_level(&session);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("Can't read input: {}", err);
                process::exit(1);
            }
        };

        let mut shown = false;
        let mut pending = false;
        for c in line.chars() {
            let dir = match c.to_ascii_lowercase() {
                'w' => Dir::Up,
                'a' => Dir::Left,
                's' => Dir::Down,
                'd' => Dir::Right,
                'r' => {
                    session.restart();
                    pending = true;
                    continue;
                }
                'n' => {
                    if !session.next_level() {
                        println!("No more levels");
                    }
                    pending = true;
                    continue;
                }
                'q' => {
                    println!("Bye!");
                    return;
                }
                _ => continue,
            };

            let was_playable = session.engine().phase() == Phase::Playable;
            session.attempt_move(dir);
            pending = true;
            if was_playable && session.engine().phase() == Phase::Completed {
                print_level(&session);
                print_completion(&session);
                shown = true;
                pending = false;
            }
        }

        if pending || !shown {
            print_level(&session);
        }
    }
}
