//! `sigcookie` - signed cookie tool.
//!
//! SPDX-License-Identifier: MIT
//!
//! Loads the key ring from the environment, sets up logging, and encodes,
//! decodes or expires a single signed cookie.
//!
//! ```text
//! sigcookie encode <name> <json>
//! sigcookie decode <name> <cookie-header>
//! sigcookie expire <name>
//! ```

use serde_json::Value;
use sigcookie::{Config, CookieError, CookieHeader, CookieSource, Result, SignedCookies};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn parse_json_arg(json: &str) -> Result<Value> {
    serde_json::from_str(json)
        .map_err(|e| CookieError::Config(format!("invalid JSON argument: {e}")))
}

fn run(config: &Config, args: &[String]) -> Result<ExitCode> {
    let codec = SignedCookies::new(config.key_ring()?);
    let options = config.default_options();

    match args {
        [cmd, name, json] if cmd == "encode" => {
            let value = parse_json_arg(json)?;
            for header in codec.encode(name, &value, &options)?.headers() {
                println!("Set-Cookie: {header}");
            }
        }
        [cmd, name, header] if cmd == "decode" => {
            let source = CookieHeader::new(Some(header.as_str()));
            match codec.decode::<Value, _>(&source, name)? {
                Some(decoded) => {
                    info!(
                        cookie = %name,
                        key_index = decoded.index,
                        "Cookie verified"
                    );
                    println!("{}", decoded.value);
                    if decoded.needs_resign() {
                        let raw = source.get(name).unwrap_or_default();
                        let fresh = codec.resign(name, &raw, &options)?;
                        println!("Set-Cookie: {}", fresh.to_header());
                    }
                }
                None => {
                    info!(cookie = %name, "Cookie absent or signature invalid");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        [cmd, name] if cmd == "expire" => {
            for header in codec.expire(name, &options)?.headers() {
                println!("Set-Cookie: {header}");
            }
        }
        _ => {
            return Err(CookieError::Config(
                "usage: sigcookie <encode NAME JSON | decode NAME HEADER | expire NAME>"
                    .to_string(),
            ));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(non_blocking);

    if log_format.eq_ignore_ascii_case("pretty") {
        subscriber.init();
    } else {
        subscriber.json().init();
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    info!(
        keys = config.keys.len(),
        algorithm = ?config.algorithm,
        log_format = %config.log_format,
        "Configuration loaded"
    );

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&config, &args) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "Command failed");
            ExitCode::FAILURE
        }
    }
}
