use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an interactive decision session (default if no subcommand)
    Run,
    /// Create a config file through an interactive wizard
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "ahp-rank")]
#[command(about = "Pairwise-comparison decision ranking CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/ahp-rank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print the final ranking as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Disable colored output even on a terminal
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Run);
    let start_time = Instant::now();

    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init = command {
        if let Err(e) = ahp_rank::config::run_init_wizard(config_path) {
            eprintln!("Init error: {}", e);
            std::process::exit(EXIT_IO);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = match ahp_rank::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = ahp_rank::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!(
            "Depth limit {}, consistency threshold {}, group size {:?}",
            config.max_depth(),
            config.consistency_threshold(),
            config.group_bounds()
        );
    }

    let mut prompt = ahp_rank::prompt::ConsolePrompt::new(&config);
    let result = match ahp_rank::session::run(&config, &mut prompt) {
        Ok(r) => r,
        Err(e) => {
            if let Some(session_error) = e.downcast_ref::<ahp_rank::session::SessionError>() {
                eprintln!("{}", session_error);
                std::process::exit(EXIT_INPUT);
            }
            eprintln!("Session error: {}", e);
            std::process::exit(EXIT_IO);
        }
    };

    let use_colors = !cli.no_color && ahp_rank::output::should_use_colors();

    println!();
    println!("Hierarchy:");
    println!(
        "{}",
        ahp_rank::output::format_hierarchy(&result.hierarchy, use_colors)
    );

    println!();
    println!("Weights:");
    println!(
        "{}",
        ahp_rank::output::format_weighted_hierarchy(&result.hierarchy, use_colors)
    );

    println!();
    if cli.json {
        match ahp_rank::output::format_ranking_json(&result.ranking) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize ranking: {}", e);
                std::process::exit(EXIT_IO);
            }
        }
    } else {
        println!("Final ranking of the alternatives:");
        println!(
            "{}",
            ahp_rank::output::format_ranking(&result.ranking, use_colors)
        );
    }

    if cli.verbose {
        eprintln!();
        eprintln!(
            "Scored {} alternatives over {} leaf criteria in {:?}",
            result.ranking.len(),
            result.leaves.len(),
            start_time.elapsed()
        );
    }

    std::process::exit(EXIT_SUCCESS);
}
