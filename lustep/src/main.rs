use clap::{Parser, Subcommand};
use lustep::random::rng_from_seed;
use lustep::{
    decompose, example_matrix, format_value, parse_matrix, random_matrix, render_result,
    render_step, repl, validate_size, verify, Matrix, RenderConfig, Session,
};
use std::io::{self, IsTerminal};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "lustep - Step through LU decomposition of small square matrices")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Show decimals instead of fractions in step matrices
    #[arg(long, global = true)]
    decimals: bool,

    /// Do not mark the current row, pivot column and multiplier
    #[arg(long, global = true)]
    no_highlight: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decompose a matrix and print its steps
    Decompose {
        /// Matrix text, rows separated by ';' (e.g. "4 3; 6 3")
        matrix: Option<String>,

        /// Use the built-in example of this size
        #[arg(long, conflicts_with_all = ["matrix", "random"])]
        example: Option<usize>,

        /// Use a random integer matrix of this size
        #[arg(long, conflicts_with = "matrix")]
        random: Option<usize>,

        /// Seed for --random
        #[arg(long, requires = "random")]
        seed: Option<u64>,

        /// Print only this step (1-based)
        #[arg(long)]
        step: Option<usize>,

        /// Print the result only, without the steps
        #[arg(long, conflicts_with = "step")]
        result_only: bool,

        /// Print the run as JSON
        #[arg(long)]
        json: bool,
    },
    /// Format values the way matrix cells are displayed
    Format {
        /// Values to format
        #[arg(allow_negative_numbers = true, required = true)]
        values: Vec<f64>,
    },
    /// Check whether L × U reproduces A
    Verify {
        /// Original matrix A
        a: String,
        /// Lower factor L
        l: String,
        /// Upper factor U
        u: String,
    },
    /// Enter a matrix and step through its decomposition interactively
    Interactive {
        /// Initial matrix size (2-5)
        #[arg(long, default_value_t = lustep::constants::DEFAULT_SIZE)]
        size: usize,

        /// Seed for the `random` command
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = RenderConfig::default()
        .with_fractions(!cli.decimals)
        .with_highlight(!cli.no_highlight);

    match cli.command {
        Commands::Decompose {
            matrix,
            example,
            random,
            seed,
            step,
            result_only,
            json,
        } => {
            let a = input_matrix(matrix.as_deref(), example, random, seed)?;
            handle_decompose(&a, step, result_only, json, &config)?;
        }
        Commands::Format { values } => {
            for value in values {
                println!("{value} = {}", format_value(value));
            }
        }
        Commands::Verify { a, l, u } => {
            let (a, l, u) = (parse_matrix(&a)?, parse_matrix(&l)?, parse_matrix(&u)?);
            let verification = verify(&a, &l, &u);
            println!("{}", verification.message());
            let product = lustep::render_matrix(
                &verification.product,
                lustep::Highlight::NONE,
                &config.clone().with_fractions(false),
            );
            println!("\nProduct L × U\n{product}");
        }
        Commands::Interactive { size, seed } => {
            let mut session = Session::new(size)?;
            let mut rng = rng_from_seed(seed);
            let stdin = io::stdin();
            repl::run(&mut session, stdin.lock(), &mut io::stdout(), &mut rng, &config)?;
        }
    }

    Ok(())
}

fn input_matrix(
    text: Option<&str>,
    example: Option<usize>,
    random: Option<usize>,
    seed: Option<u64>,
) -> Result<Matrix, Box<dyn std::error::Error>> {
    if let Some(n) = example {
        return Ok(example_matrix(validate_size(n)?));
    }
    if let Some(n) = random {
        let a = random_matrix(validate_size(n)?, &mut rng_from_seed(seed));
        tracing::debug!(?a, "generated random matrix");
        return Ok(a);
    }
    match text {
        Some(text) => {
            let a = parse_matrix(text)?;
            validate_size(a.size())?;
            Ok(a)
        }
        None => Err("provide a matrix, --example N or --random N".into()),
    }
}

fn handle_decompose(
    a: &Matrix,
    step: Option<usize>,
    result_only: bool,
    json: bool,
    config: &RenderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let run = decompose(a);

    if json {
        match step {
            Some(number) => {
                let (_, step) = run.numbered_step(number)?;
                println!("{}", lustep::export::step_to_json(step, true)?);
            }
            None => println!("{}", lustep::to_json(&run, true)?),
        }
        return Ok(());
    }

    if let Some(number) = step {
        let (index, step) = run.numbered_step(number)?;
        println!("{}", render_step(step, index, run.len(), config));
        return Ok(());
    }

    if !result_only {
        for (index, step) in run.steps().iter().enumerate() {
            println!("{}\n", render_step(step, index, run.len(), config));
        }
    }
    println!("{}", render_result(&run, config));
    Ok(())
}
