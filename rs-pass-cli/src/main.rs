use std::process::ExitCode;

use clap::Parser;

use rs_pass_core::password::config::GenerationConfig;
use rs_pass_core::password::generator::PasswordGenerator;

/// Command-line front end over the password generation core.
///
/// All flags mutate one `GenerationConfig` snapshot, then exactly one
/// action runs: show config, validate, batch, or single generation
/// (the default).
#[derive(Parser)]
#[command(name = "rs-pass", version, about = "Secure password generator")]
struct Cli {
	/// Generate a single password (default action)
	#[arg(short, long)]
	generate: bool,

	/// Generate multiple passwords
	#[arg(short, long, value_name = "COUNT")]
	batch: Option<usize>,

	/// Set password length (8-128)
	#[arg(short, long, value_name = "N")]
	length: Option<usize>,

	/// Exclude lowercase characters
	#[arg(long)]
	no_lowercase: bool,

	/// Exclude uppercase characters
	#[arg(long)]
	no_uppercase: bool,

	/// Exclude digit characters
	#[arg(long)]
	no_digits: bool,

	/// Exclude symbol characters
	#[arg(long)]
	no_symbols: bool,

	/// Set custom symbol set (implies symbols enabled)
	#[arg(short, long, value_name = "CHARS")]
	symbols: Option<String>,

	/// Generate pronounceable passwords
	#[arg(short, long)]
	pronounceable: bool,

	/// Show current configuration
	#[arg(short, long)]
	config: bool,

	/// Validate a password against the configured policy
	#[arg(short = 'v', long, value_name = "PASSWORD")]
	validate: Option<String>,

	/// Suppress prompts and decorations
	#[arg(short, long)]
	quiet: bool,
}

fn main() -> ExitCode {
	env_logger::init();
	let cli = Cli::parse();
	ExitCode::from(run(&cli))
}

fn run(cli: &Cli) -> u8 {
	let mut config = GenerationConfig::default();

	if let Some(length) = cli.length {
		if let Err(e) = config.set_length(length) {
			eprintln!("Error: {e}");
			return 1;
		}
	}

	config.include_lowercase = !cli.no_lowercase;
	config.include_uppercase = !cli.no_uppercase;
	config.include_digits = !cli.no_digits;
	config.include_symbols = !cli.no_symbols;
	config.pronounceable = cli.pronounceable;

	if let Some(symbols) = &cli.symbols {
		config.set_symbols(symbols.clone());
		config.include_symbols = true;
	}

	if !config.pronounceable && !config.has_any_set() {
		eprintln!("Error: At least one character type must be enabled");
		return 1;
	}

	let mut generator = match PasswordGenerator::with_config(config) {
		Ok(generator) => generator,
		Err(e) => {
			eprintln!("Error: {e}");
			return 1;
		}
	};

	if cli.config {
		show_config(generator.config(), cli.quiet)
	} else if let Some(password) = &cli.validate {
		run_validate(&generator, password, cli.quiet)
	} else if let Some(count) = cli.batch {
		run_batch(&mut generator, count, cli.quiet)
	} else if cli.generate || (!cli.config && cli.validate.is_none()) {
		// Generating a single password is the default action.
		run_generate(&mut generator, cli.quiet)
	} else {
		0
	}
}

/// Theoretical character-space estimate shown next to a generated
/// password: length times log2 of the configured pool size. Distinct
/// from the core's empirical entropy score used in validation.
fn theoretical_entropy(config: &GenerationConfig, length: usize) -> Option<f64> {
	let mut char_space = 0usize;
	if config.include_lowercase {
		char_space += 26;
	}
	if config.include_uppercase {
		char_space += 26;
	}
	if config.include_digits {
		char_space += 10;
	}
	if config.include_symbols {
		char_space += config.symbols().chars().count();
	}

	if char_space == 0 {
		None
	} else {
		Some(length as f64 * (char_space as f64).log2())
	}
}

fn run_generate(generator: &mut PasswordGenerator, quiet: bool) -> u8 {
	let password = match generator.generate() {
		Ok(password) => password,
		Err(e) => {
			eprintln!("Error: {e}");
			return 1;
		}
	};

	if quiet {
		println!("{password}");
		return 0;
	}

	println!();
	println!("┌─ Generated Password ─────────────────┐");
	println!("│ {password:<36} │");
	println!("├──────────────────────────────────────┤");
	println!("│ Length: {:<28} │", format!("{} characters", password.chars().count()));
	if let Some(entropy) = theoretical_entropy(generator.config(), password.chars().count()) {
		println!("│ Entropy: {:<27} │", format!("{} bits", entropy as u64));
	}
	println!("└──────────────────────────────────────┘");
	0
}

fn run_batch(generator: &mut PasswordGenerator, count: usize, quiet: bool) -> u8 {
	let passwords = match generator.generate_batch(count) {
		Ok(passwords) => passwords,
		Err(e) => {
			eprintln!("Error: {e}");
			return 1;
		}
	};

	if quiet {
		for password in &passwords {
			println!("{password}");
		}
		return 0;
	}

	println!();
	println!("┌─ Generated {count} Passwords ────────────");
	for (i, password) in passwords.iter().enumerate() {
		println!("│ {:>3}. {:<30}", i + 1, password);
	}
	0
}

fn run_validate(generator: &PasswordGenerator, password: &str, quiet: bool) -> u8 {
	let outcome = generator.validate(password);

	if outcome.is_valid() {
		if quiet {
			println!("valid");
		} else {
			println!("✓ Password is valid!");
		}
		return 0;
	}

	if quiet {
		for error in outcome.errors() {
			println!("{error}");
		}
	} else {
		println!("✗ Password validation failed:");
		for error in outcome.errors() {
			println!("  - {error}");
		}
	}
	1
}

fn show_config(config: &GenerationConfig, quiet: bool) -> u8 {
	if quiet {
		match serde_json::to_string_pretty(config) {
			Ok(json) => {
				println!("{json}");
				0
			}
			Err(e) => {
				eprintln!("Error: {e}");
				1
			}
		}
	} else {
		let on_off = |enabled: bool| if enabled { "enabled" } else { "disabled" };
		println!();
		println!("┌─ Current Configuration ──────────────┐");
		println!("│ Length:        {:<21} │", config.length());
		println!("│ Lowercase:     {:<21} │", on_off(config.include_lowercase));
		println!("│ Uppercase:     {:<21} │", on_off(config.include_uppercase));
		println!("│ Digits:        {:<21} │", on_off(config.include_digits));
		println!("│ Symbols:       {:<21} │", on_off(config.include_symbols));
		println!("│ Symbol set:    {:<21} │", config.symbols());
		println!("│ Pronounceable: {:<21} │", on_off(config.pronounceable));
		println!("└──────────────────────────────────────┘");
		0
	}
}
