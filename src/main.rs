//! ALFA PassGen - CLI
//!
//! Command-line frontend: reads parameter, master secret and length,
//! prints the derived password to stdout.

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use alfa_passgen::{derive_password, policy, PassGenResult};

#[derive(Parser)]
#[command(name = "alfa-passgen")]
#[command(author = "Karen Tonoyan")]
#[command(version = alfa_passgen::VERSION)]
#[command(about = "ALFA PassGen - Deterministic password generator")]
struct Cli {
    /// Site parameter (e.g. "example.com")
    parameter: String,

    /// Password length
    #[arg(short, long, default_value_t = policy::DEFAULT_LENGTH)]
    length: usize,

    /// Master secret (prompted securely when omitted)
    #[arg(short, long)]
    secret: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> PassGenResult<()> {
    policy::validate_length(cli.length)?;

    let secret = match cli.secret {
        Some(s) => SecretString::from(s),
        None => SecretString::from(rpassword::prompt_password("🔑 Master password: ")?),
    };

    policy::validate_inputs(&cli.parameter, &secret)?;

    tracing::debug!(parameter = %cli.parameter, length = cli.length, "deriving password");

    let password = derive_password(&cli.parameter, &secret, cli.length);
    println!("{}", password);

    Ok(())
}
