//! Line-driven interactive session
//!
//! Reads one command per line and writes the affected view after each.
//! Command errors are reported inline and never end the session.

use crate::config::RenderConfig;
use crate::render::{render_matrix, render_result, render_step, Highlight};
use crate::session::{Session, View};
use lustep_core::LuError;
use rand::Rng;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  set <row> <col> <value>   edit a cell (1-based; value may be n/d)
  size <n>                  change matrix size (2-5), clears the matrix
  example                   load the example matrix
  random                    load a random integer matrix
  go                        decompose the matrix
  n | next                  next step
  p | prev                  previous step
  step <i>                  jump to step i (1-based)
  result                    show the verified result
  show                      redraw the current view
  r | reset                 discard the decomposition
  h | help                  this text
  q | quit                  exit";

/// A parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set { row: usize, col: usize, value: String },
    Size(usize),
    Example,
    Random,
    Go,
    Next,
    Prev,
    Step(usize),
    Result,
    Show,
    Reset,
    Help,
    Quit,
}

impl Command {
    /// Parse one line; `Err` carries the message shown to the user
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or_else(|| "empty command".to_string())?;
        let rest: Vec<&str> = words.collect();

        let index = |s: Option<&&str>, what: &str| -> Result<usize, String> {
            s.and_then(|s| s.parse::<usize>().ok())
                .filter(|&v| v > 0)
                .ok_or_else(|| format!("expected a positive {what}"))
        };

        match head {
            "set" => {
                let row = index(rest.first(), "row")?;
                let col = index(rest.get(1), "column")?;
                Ok(Command::Set {
                    row: row - 1,
                    col: col - 1,
                    value: rest.get(2..).map(|v| v.join(" ")).unwrap_or_default(),
                })
            }
            "size" => rest
                .first()
                .and_then(|s| s.parse().ok())
                .map(Command::Size)
                .ok_or_else(|| "expected a size".to_string()),
            "example" => Ok(Command::Example),
            "random" => Ok(Command::Random),
            "go" | "decompose" => Ok(Command::Go),
            "n" | "next" => Ok(Command::Next),
            "p" | "prev" => Ok(Command::Prev),
            "step" => index(rest.first(), "step").map(|i| Command::Step(i - 1)),
            "result" => Ok(Command::Result),
            "show" => Ok(Command::Show),
            "r" | "reset" => Ok(Command::Reset),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command `{other}`, try `help`")),
        }
    }
}

/// Render whatever the session's active view shows
pub fn render_view(session: &Session, config: &RenderConfig) -> String {
    match (session.view(), session.decomposition()) {
        (View::Visualization, Some(run)) => match session.current_step() {
            Some(step) => render_step(step, session.current_index().unwrap_or(0), run.len(), config),
            None => String::new(),
        },
        (View::Result, Some(run)) => render_result(run, config),
        _ => format!(
            "Matrix A ({n} × {n})\n{}",
            render_matrix(session.matrix(), Highlight::NONE, config),
            n = session.size()
        ),
    }
}

/// Apply one command; returns false when the session should end
pub fn apply<R: Rng + ?Sized>(
    session: &mut Session,
    command: Command,
    rng: &mut R,
) -> Result<bool, String> {
    match command {
        Command::Set { row, col, value } => {
            let changed = session.set_cell(row, col, &value).map_err(|e| e.to_string())?;
            if !changed {
                return Err(format!("`{value}` is not a number, cell unchanged"));
            }
        }
        Command::Size(n) => session.set_size(n).map_err(|e| e.to_string())?,
        Command::Example => session.use_example(),
        Command::Random => session.use_random(rng),
        Command::Go => {
            session.decompose();
        }
        Command::Next | Command::Prev if session.decomposition().is_none() => {
            return Err(LuError::NoDecomposition.to_string());
        }
        Command::Next => {
            if !session.next_step() {
                return Err("already at the last step".to_string());
            }
        }
        Command::Prev => {
            if !session.prev_step() {
                return Err("already at the first step".to_string());
            }
        }
        Command::Step(i) => {
            session.go_to(i).map_err(|e| e.to_string())?;
            session.select_view(View::Visualization).map_err(|e| e.to_string())?;
        }
        Command::Result => session.select_view(View::Result).map_err(|e| e.to_string())?,
        Command::Reset => session.reset(),
        Command::Show | Command::Help => {}
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Run the command loop until `quit` or end of input
pub fn run<B: BufRead, W: Write, R: Rng + ?Sized>(
    session: &mut Session,
    input: B,
    output: &mut W,
    rng: &mut R,
    config: &RenderConfig,
) -> io::Result<()> {
    writeln!(output, "{}\n", render_view(session, config))?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "> ")?;
            output.flush()?;
            continue;
        }

        match Command::parse(&line) {
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(command) => match apply(session, command, rng) {
                Ok(true) => writeln!(output, "{}", render_view(session, config))?,
                Ok(false) => return Ok(()),
                Err(message) => writeln!(output, "error: {message}")?,
            },
            Err(message) => writeln!(output, "error: {message}")?,
        }
        write!(output, "\n> ")?;
        output.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::rng_from_seed;
    use std::io::Cursor;

    fn run_script(script: &str) -> (Session, String) {
        let mut session = Session::new(2).unwrap();
        let mut out = Vec::new();
        run(
            &mut session,
            Cursor::new(script),
            &mut out,
            &mut rng_from_seed(Some(5)),
            &RenderConfig::default(),
        )
        .unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            Command::parse("set 1 2 3/2"),
            Ok(Command::Set {
                row: 0,
                col: 1,
                value: "3/2".to_string()
            })
        );
        assert_eq!(Command::parse("size 4"), Ok(Command::Size(4)));
        assert_eq!(Command::parse("n"), Ok(Command::Next));
        assert_eq!(Command::parse("step 3"), Ok(Command::Step(2)));
        assert!(Command::parse("set 0 1 2").is_err());
        assert!(Command::parse("step").is_err());
        assert!(Command::parse("frobnicate").is_err());
    }

    #[test]
    fn test_script_walkthrough() {
        let (session, out) = run_script("set 1 1 4\nset 1 2 3\nset 2 1 6\nset 2 2 3\ngo\nn\nn\nn\nresult\nq\n");
        assert!(out.contains("r2 → r2 - 3/2 × r1"));
        assert!(out.contains("Final result"));
        assert!(out.contains("The decomposition is correct! A = L × U"));
        assert_eq!(session.view(), View::Result);
        assert_eq!(session.current_index(), Some(3));
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let (session, out) = run_script("next\nset 1 1 abc\nsize 9\nexample\ngo\np\n");
        assert!(out.contains("error: No decomposition has been run yet"));
        assert!(out.contains("error: already at the first step"));
        assert!(out.contains("error: `abc` is not a number, cell unchanged"));
        assert!(out.contains("error: Matrix size 9 is outside the supported range 2..=5"));
        assert_eq!(session.total_steps(), 4);
    }

    #[test]
    fn test_reset_returns_to_input() {
        let (session, out) = run_script("example\ngo\nreset\n");
        assert!(out.contains("Matrix A (2 × 2)"));
        assert!(session.decomposition().is_none());
        assert_eq!(session.view(), View::Input);
    }
}
