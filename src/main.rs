use std::process::ExitCode;

use clap::Parser;

use duplexcrypt::cli::{Cli, Command};
use duplexcrypt::io;
use duplexcrypt::session::{decrypt_and_verify, Session};
use duplexcrypt::state::{Iv, Key};

fn parse_key_iv(key: &str, iv: &str) -> Result<(Key, Iv), duplexcrypt::Error> {
    let key_bytes = io::parse_hex(key)?;
    let iv_bytes = io::parse_hex(iv)?;

    let key: Key = key_bytes
        .try_into()
        .map_err(|_| duplexcrypt::Error::Malformed("key must be exactly 16 bytes"))?;
    let iv: Iv = iv_bytes
        .try_into()
        .map_err(|_| duplexcrypt::Error::Malformed("IV must be exactly 16 bytes"))?;

    Ok((key, iv))
}

fn run() -> Result<(), duplexcrypt::Error> {
    let cli = Cli::parse();

    match cli.command {
        Command::Encrypt {
            key,
            iv,
            ad,
            input,
            output,
        } => {
            let (key, iv) = parse_key_iv(&key, &iv)?;
            let ad = io::parse_hex(&ad)?;
            let plaintext = io::read_all(&input)?;

            let mut session = Session::new(key, iv);
            session.absorb_ad(&ad)?;
            let (ciphertext, _tag) = session.encrypt(&plaintext)?;

            std::fs::write(&output, &ciphertext)?;
            log::info!(
                "encrypted {} bytes from {:?} into {} bytes at {:?}",
                plaintext.len(),
                input,
                ciphertext.len(),
                output
            );
        }
        Command::Decrypt {
            key,
            iv,
            ad,
            input,
            output,
        } => {
            let (key, iv) = parse_key_iv(&key, &iv)?;
            let ad = io::parse_hex(&ad)?;
            let ciphertext = io::read_all(&input)?;

            let mut session = Session::new(key, iv);
            session.absorb_ad(&ad)?;
            let plaintext = decrypt_and_verify(session, &ciphertext)?;

            std::fs::write(&output, &plaintext)?;
            log::info!(
                "decrypted and verified {} bytes from {:?} into {:?}",
                ciphertext.len(),
                input,
                output
            );
        }
        #[cfg(feature = "rand")]
        Command::Keygen => {
            let key = duplexcrypt::state::random_key();
            let iv = duplexcrypt::state::random_iv();
            println!("key: {}", hex_string(&key));
            println!("iv:  {}", hex_string(&iv));
        }
    }

    Ok(())
}

fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
