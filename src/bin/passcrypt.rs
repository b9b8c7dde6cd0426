// src/bin/passcrypt.rs
//! Encrypt or decrypt a string from the command line

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use passcrypt::config::Config;
use passcrypt::consts::PASSPHRASE_ENV;
use passcrypt::aliases::Secret;
use passcrypt::{KeySpec, PassCrypt};
use rpassword::prompt_password;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "passcrypt", version, about = "Passphrase-keyed DES/AES-CBC for strings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encrypt UTF-8 text, print base64
    Encrypt(CryptArgs),
    /// Decrypt base64, print UTF-8 text
    Decrypt(CryptArgs),
}

#[derive(Debug, Args)]
struct CryptArgs {
    /// Key size: 64, 128, 192 or 256 (overrides the config file)
    #[arg(short, long)]
    bits: Option<u16>,

    /// String the IV is derived from (overrides the config file)
    #[arg(long)]
    iv: Option<String>,

    /// TOML config file (default: $PASSCRYPT_CONFIG, then ./passcrypt.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input text; read from stdin when omitted
    text: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (encrypting, args) = match cli.command {
        Command::Encrypt(args) => (true, args),
        Command::Decrypt(args) => (false, args),
    };

    // flags > PASSCRYPT_BITS / PASSCRYPT_IV > config file > defaults
    let mut config = Config::resolve(args.config.as_deref()).with_context(|| match &args.config {
        Some(path) => format!("failed to read config {}", path.display()),
        None => "failed to load configuration".to_string(),
    })?;
    if let Some(bits) = args.bits {
        config.cipher.bits = KeySpec::from_bits(bits)?;
    }
    if let Some(iv) = args.iv {
        config.cipher.iv = Some(iv);
    }

    let passphrase = Secret::new(read_passphrase()?);
    let crypt: PassCrypt = config.build(&passphrase);
    info!(spec = %crypt.key_spec(), cipher = %crypt.cipher_algorithm(), "context ready");

    let input = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf.trim_end_matches(['\r', '\n']).to_owned()
        }
    };

    let output = if encrypting {
        crypt.encrypt_str_to_base64(&input)?
    } else {
        crypt
            .decrypt_base64_to_string(input.trim())
            .context("decryption failed (wrong passphrase, IV or key size?)")?
    };
    println!("{output}");
    Ok(())
}

fn read_passphrase() -> Result<String> {
    if let Ok(passphrase) = std::env::var(PASSPHRASE_ENV) {
        return Ok(passphrase);
    }
    prompt_password("Passphrase: ").context("failed to read passphrase")
}
