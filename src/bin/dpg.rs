// src/bin/dpg.rs
//! dpg — derive a site password from memory
//!
//! Prompts for the master secret and secret key without echo, prints the
//! password on stdout and its strength label on stderr.

use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use deterministic_password_gen::consts::KDF_VERSION;
use deterministic_password_gen::{
    classify_strength, derive_password, load_config, CharClass, CharsetPolicy, SecretMaterial,
};
use rpassword::prompt_password;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "dpg", version, about = "Deterministic password generator")]
struct Args {
    /// Site URL or domain, e.g. https://www.example.com/login
    site: String,

    /// Account name, for several accounts on one site
    #[arg(short, long, default_value = "")]
    username: String,

    /// Password length (overrides the config file)
    #[arg(short, long)]
    length: Option<usize>,

    #[arg(long)]
    no_uppercase: bool,

    #[arg(long)]
    no_lowercase: bool,

    #[arg(long)]
    no_numbers: bool,

    #[arg(long)]
    no_special: bool,

    /// Do not print the strength label
    #[arg(long)]
    no_strength: bool,
}

impl Args {
    fn apply(&self, mut policy: CharsetPolicy) -> CharsetPolicy {
        if let Some(length) = self.length {
            policy.length = length;
        }
        let disabled = [
            (CharClass::Uppercase, self.no_uppercase),
            (CharClass::Lowercase, self.no_lowercase),
            (CharClass::Digit, self.no_numbers),
            (CharClass::Special, self.no_special),
        ];
        for (class, off) in disabled {
            if off {
                policy = policy.with_class(class, false);
            }
        }
        policy
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let conf = load_config().context("Failed to load dpg configuration")?;
    let policy = args.apply(conf.policy);
    policy.validate().context("Invalid password policy")?;

    if args.site.trim().is_empty() {
        bail!("site identifier must not be empty");
    }

    let master = prompt_password("Master secret: ")?;
    if master.chars().count() < conf.cli.min_master_secret_len {
        bail!(
            "master secret must be at least {} characters",
            conf.cli.min_master_secret_len
        );
    }
    let secret_key = prompt_password("Secret key: ")?;
    if secret_key.is_empty() {
        bail!("secret key must not be empty");
    }

    debug!(
        kdf = KDF_VERSION,
        length = policy.length,
        classes = policy.enabled_classes().len(),
        "deriving password"
    );

    // The core never trims; stray whitespace from the shell is ours to drop
    let material = SecretMaterial::new(master, args.site.trim(), secret_key)
        .with_username(args.username.as_str());
    let started = Instant::now();
    let password =
        derive_password(&material, &policy).context("Generation failed, try again")?;
    drop(material);
    info!(elapsed_ms = started.elapsed().as_millis() as u64, "derivation complete");

    println!("{}", password.expose_secret());
    if conf.cli.show_strength && !args.no_strength {
        eprintln!("Strength: {}", classify_strength(password.expose_secret()));
    }

    Ok(())
}
