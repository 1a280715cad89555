/***************************************/
/*        3rd party libraries          */
/***************************************/
use clap::Parser;
use std::io::{self, BufRead, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use elevator_core::config::load_config;
use elevator_core::shared::Direction;
use elevator_core::Dispatcher;

/// Runs a hall-call dispatcher from a config file and a line-oriented command
/// stream on stdin. Each accepted line prints one result line to stdout;
/// anything else is logged and otherwise ignored.
#[derive(Parser, Debug)]
struct Args {
    /// Path to the TOML fleet configuration.
    #[clap(long, default_value = "config.toml")]
    config: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(&args.config);
    let mut dispatcher = Dispatcher::from_config(&config.fleet);
    log::info!("dispatcher started with {} cabins", config.fleet.n_elevators);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::warn!("failed to read command: {}", e);
                continue;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match run_command(&mut dispatcher, line) {
            Ok(Some(response)) => {
                let _ = writeln!(out, "{}", response);
            }
            Ok(None) => {}
            Err(message) => {
                let _ = writeln!(out, "error: {}", message);
            }
        }

        if line == "quit" {
            break;
        }
    }
}

fn run_command(dispatcher: &mut Dispatcher, line: &str) -> Result<Option<String>, String> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or("");

    match command {
        "pickup" => {
            let floor = parse_floor(words.next())?;
            let direction = parse_direction(words.next())?;
            dispatcher.pickup(floor, direction).map_err(|e| e.to_string())?;
            Ok(None)
        }
        "select" => {
            let cabin_id = parse_usize(words.next())?;
            let floor = parse_floor(words.next())?;
            dispatcher.select_floor(cabin_id, floor).map_err(|e| e.to_string())?;
            Ok(None)
        }
        "step" => {
            let n = match words.next() {
                Some(n) => parse_usize(Some(n))?,
                None => 1,
            };
            for _ in 0..n {
                dispatcher.step();
            }
            Ok(None)
        }
        "status" => {
            let statuses = dispatcher.status();
            serde_json::to_string(&statuses).map(Some).map_err(|e| e.to_string())
        }
        "tasks" => {
            let tasks = dispatcher.tasks();
            serde_json::to_string(&tasks).map(Some).map_err(|e| e.to_string())
        }
        "reset" => {
            let cabin_id = parse_usize(words.next())?;
            let floor = parse_floor(words.next())?;
            dispatcher.set_elevator(cabin_id, floor).map_err(|e| e.to_string())?;
            Ok(None)
        }
        "count" => {
            let n = parse_usize(words.next())?;
            dispatcher.set_elevator_count(n);
            Ok(None)
        }
        "limits" => match words.next() {
            Some("none") => {
                dispatcher.set_floor_limits(None);
                Ok(None)
            }
            Some(bottom) => {
                let bottom = parse_floor(Some(bottom))?;
                let top = parse_floor(words.next())?;
                let limits = elevator_core::shared::FloorLimits::try_new(bottom, top)?;
                dispatcher.set_floor_limits(Some(limits));
                Ok(None)
            }
            None => Err("usage: limits <bottom> <top> | limits none".to_string()),
        },
        "sole" => {
            let enabled = match words.next() {
                Some("true") => true,
                Some("false") => false,
                _ => return Err("usage: sole <true|false>".to_string()),
            };
            dispatcher.set_sole_elevator_mode(enabled);
            Ok(None)
        }
        "help" => Ok(Some(HELP_TEXT.to_string())),
        "quit" => Ok(None),
        other => Err(format!("unknown command: {}", other)),
    }
}

fn parse_floor(word: Option<&str>) -> Result<i32, String> {
    word.ok_or_else(|| "missing floor".to_string())?
        .parse::<i32>()
        .map_err(|_| "floor must be an integer".to_string())
}

fn parse_usize(word: Option<&str>) -> Result<usize, String> {
    word.ok_or_else(|| "missing number".to_string())?
        .parse::<usize>()
        .map_err(|_| "expected a non-negative integer".to_string())
}

fn parse_direction(word: Option<&str>) -> Result<Direction, String> {
    match word {
        Some("up") => Ok(Direction::Up),
        Some("down") => Ok(Direction::Down),
        _ => Err("direction must be 'up' or 'down'".to_string()),
    }
}

const HELP_TEXT: &str = "commands: pickup <floor> <up|down> | select <cabinId> <floor> | step [n] | status | tasks | reset <cabinId> <floor> | count <n> | limits <bottom> <top> | limits none | sole <true|false> | quit";
