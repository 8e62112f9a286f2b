use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::schema::{Config, GroupSizeConfig};
use super::{get_config_path, validate_config};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("ahp-rank configuration wizard");
    println!("=============================");
    println!();

    println!("The depth limit caps how far criteria can be refined into sub-criteria.");
    println!("It counts the goal as level 1, so a depth of 4 allows three criteria levels.");
    let max_depth: usize = loop {
        let input = prompt_with_default("Depth limit", "4")?;
        match input.parse::<usize>() {
            Ok(v) if v >= 2 => break v,
            Ok(_) => println!("  Invalid: must be at least 2. Try again."),
            Err(_) => println!("  Invalid: must be a whole number. Try again."),
        }
    };

    println!();
    println!("Judgments whose consistency ratio exceeds the threshold are rejected");
    println!("and must be re-entered. 0.1 is the conventional cutoff.");
    let consistency_threshold: f64 = loop {
        let input = prompt_with_default("Consistency threshold", "0.1")?;
        match input.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => break v,
            Ok(_) => println!("  Invalid: must be non-negative. Try again."),
            Err(_) => println!("  Invalid: must be a number. Try again."),
        }
    };

    println!();
    println!("Group size bounds how many criteria, sub-criteria, or alternatives a");
    println!("single comparison group may hold. Larger groups mean many more judgments.");
    let min: usize = loop {
        let input = prompt_with_default("Smallest group", "2")?;
        match input.parse::<usize>() {
            Ok(v) if v >= 2 => break v,
            Ok(_) => println!("  Invalid: pairwise comparison needs at least 2. Try again."),
            Err(_) => println!("  Invalid: must be a whole number. Try again."),
        }
    };
    let max: usize = loop {
        let input = prompt_with_default("Largest group", "3")?;
        match input.parse::<usize>() {
            Ok(v) if v >= min => break v,
            Ok(_) => println!("  Invalid: must be at least the smallest group. Try again."),
            Err(_) => println!("  Invalid: must be a whole number. Try again."),
        }
    };

    let config = Config {
        max_depth: Some(max_depth),
        consistency_threshold: Some(consistency_threshold),
        group_size: Some(GroupSizeConfig { min, max }),
    };
    if let Err(errors) = validate_config(&config) {
        for error in &errors {
            println!("  {}", error);
        }
        anyhow::bail!("Configuration did not validate");
    }

    // Config path
    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `ahp-rank` to start a decision session.");

    Ok(())
}
