//! Command-line interface for `shacal-rs`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use shacal_core::{decrypt_bytes, encrypt_bytes, ShacalKey, KEY_BYTES};
use shacal_store::KeyStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// SHA-1-derived block cipher CLI.
#[derive(Parser)]
#[command(
    name = "shacal",
    version,
    author,
    about = "File encryption with a SHA-1-derived 160-bit block cipher"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh random key and print it as hex.
    Keygen,
    /// Encrypt a file, generating a key unless one is supplied.
    Encrypt {
        /// Input file to encrypt.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Key as 32 hex characters; generated when omitted.
        #[arg(long, value_name = "HEX")]
        key_hex: Option<String>,
        /// Key store to record the key in, keyed by the input file name.
        #[arg(long, value_name = "FILE")]
        store: Option<PathBuf>,
    },
    /// Decrypt a file with an explicit key or one recorded in the store.
    ///
    /// Zero padding added at encryption time is not stripped.
    Decrypt {
        /// Input ciphertext (length must be a multiple of 20 bytes).
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: Option<String>,
        /// Key store to look the key up in, keyed by the input file name.
        #[arg(long, value_name = "FILE")]
        store: Option<PathBuf>,
    },
    /// Run a local demo: generate a key, encrypt random data, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Keygen => cmd_keygen(),
        Commands::Encrypt {
            input,
            output,
            key_hex,
            store,
        } => cmd_encrypt(&input, &output, key_hex.as_deref(), store.as_deref()),
        Commands::Decrypt {
            input,
            output,
            key_hex,
            store,
        } => cmd_decrypt(&input, &output, key_hex.as_deref(), store.as_deref()),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_keygen() -> Result<()> {
    let key = ShacalKey::generate().context("generate key")?;
    println!("{}", hex::encode(key.to_be_bytes()));
    Ok(())
}

fn cmd_encrypt(
    input: &Path,
    output: &Path,
    key_hex: Option<&str>,
    store_path: Option<&Path>,
) -> Result<()> {
    let (key, generated) = match key_hex {
        Some(hex_str) => (parse_key_hex(hex_str)?, false),
        None => (ShacalKey::generate().context("generate key")?, true),
    };

    let data = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let ciphertext = encrypt_bytes(&data, &key).context("encrypt")?;
    fs::write(output, ciphertext).with_context(|| format!("write {}", output.display()))?;
    info!(input = %input.display(), output = %output.display(), "file encrypted");

    if let Some(store_path) = store_path {
        let name = file_name(input)?;
        let mut store = KeyStore::load(store_path)
            .with_context(|| format!("load store {}", store_path.display()))?;
        store.insert(name, key);
        store
            .save(store_path)
            .with_context(|| format!("save store {}", store_path.display()))?;
    }

    if generated {
        println!("key: {}", hex::encode(key.to_be_bytes()));
    }
    Ok(())
}

fn cmd_decrypt(
    input: &Path,
    output: &Path,
    key_hex: Option<&str>,
    store_path: Option<&Path>,
) -> Result<()> {
    let key = match (key_hex, store_path) {
        (Some(hex_str), _) => parse_key_hex(hex_str)?,
        (None, Some(store_path)) => {
            let name = file_name(input)?;
            let store = KeyStore::load(store_path)
                .with_context(|| format!("load store {}", store_path.display()))?;
            store
                .lookup(name)
                .with_context(|| format!("look up key for {name}"))?
        }
        (None, None) => bail!("either --key-hex or --store is required to decrypt"),
    };

    let data = fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let plaintext = decrypt_bytes(&data, &key).context("decrypt")?;
    fs::write(output, plaintext).with_context(|| format!("write {}", output.display()))?;
    info!(input = %input.display(), output = %output.display(), "file decrypted");
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);

    let mut key_bytes = [0u8; KEY_BYTES];
    rng.fill_bytes(&mut key_bytes);
    let key = ShacalKey::from_be_bytes(&key_bytes);

    let mut message = vec![0u8; 47];
    rng.fill_bytes(&mut message);

    let ciphertext = encrypt_bytes(&message, &key).context("encrypt")?;
    let recovered = decrypt_bytes(&ciphertext, &key).context("decrypt")?;

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(&message));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", hex::encode(&recovered));
    if &recovered[..message.len()] != message.as_slice() {
        bail!("demo roundtrip failed");
    }
    println!(
        "roundtrip ok; {} zero pad bytes retained",
        recovered.len() - message.len()
    );
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<ShacalKey> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    if bytes.len() != KEY_BYTES {
        bail!("key must be 16 bytes (32 hex characters)");
    }
    let mut key = [0u8; KEY_BYTES];
    key.copy_from_slice(&bytes);
    Ok(ShacalKey::from_be_bytes(&key))
}

fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("{} has no usable file name", path.display()))
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
