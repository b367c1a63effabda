//! Host-side helper: `cargo run` builds the WASM site, starts a local HTTP
//! server for `static/`, and (with `--tunnel`) exposes it via ngrok.
//!
//! `cargo run -- --list` prints the dot-grid catalogue instead.

use std::process::{Command, Stdio};
use std::{thread, time::Duration};

use clap::Parser;
use craft_wasm::grid::SHOWCASES;
use craft_wasm::{logging, CraftError};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Build and serve the craft showcase site")]
struct Options {
    /// Port for the local HTTP server
    #[arg(short, long, default_value_t = 8000)]
    port: u16,

    /// Expose the server through an ngrok tunnel
    #[arg(long)]
    tunnel: bool,

    /// Print the dot-grid catalogue and exit
    #[arg(long)]
    list: bool,
}

fn print_catalogue() {
    for showcase in &SHOWCASES {
        let side = showcase.size.side();
        println!(
            "{side}x{side}  {:<18} {}",
            showcase.pattern.name(),
            showcase.label()
        );
    }
}

fn build_site() -> Result<(), CraftError> {
    log::info!("running cargo build …");
    let cargo_status = Command::new("cargo").args(["build", "--release"]).status()?;
    if !cargo_status.success() {
        return Err(CraftError::Failed("cargo build"));
    }

    log::info!("building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => Ok(()),
        Ok(_) => {
            log::error!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            Err(CraftError::Failed("wasm-pack build"))
        }
        Err(_) => {
            log::warn!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
            Ok(())
        }
    }
}

fn serve(options: &Options) -> Result<(), CraftError> {
    log::info!("launching local server at http://127.0.0.1:{} …", options.port);
    let _server = Command::new("python3")
        .args(["-m", "http.server", &options.port.to_string(), "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if options.tunnel {
        let ngrok = Command::new("ngrok")
            .args(["http", &options.port.to_string()])
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn();
        match ngrok {
            Ok(_) => log::info!("ngrok tunnel starting …"),
            Err(_) => log::warn!("ngrok not found. Install it to expose the site over the internet."),
        }
    }

    // Keep process alive
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}

fn run(options: Options) -> Result<(), CraftError> {
    if options.list {
        print_catalogue();
        return Ok(());
    }
    build_site()?;
    serve(&options)
}

fn main() {
    let options = Options::parse();
    logging::init(LevelFilter::Info);
    if let Err(err) = run(options) {
        log::error!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn defaults_serve_locally_on_8000() {
        let options = Options::try_parse_from(["craft_wasm"]).unwrap();
        assert_eq!(options.port, 8000);
        assert!(!options.tunnel && !options.list);
    }

    #[test]
    fn port_accepts_both_spellings() {
        assert_eq!(Options::try_parse_from(["craft_wasm", "--port=9000"]).unwrap().port, 9000);
        assert_eq!(Options::try_parse_from(["craft_wasm", "-p", "9001", "--tunnel"]).unwrap().port, 9001);
    }

    #[test]
    fn help_and_bad_input_stop_before_building() {
        let help = Options::try_parse_from(["craft_wasm", "--help"]).unwrap_err();
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);
        let bad = Options::try_parse_from(["craft_wasm", "--port", "http"]).unwrap_err();
        assert_eq!(bad.kind(), ErrorKind::ValueValidation);
        let unknown = Options::try_parse_from(["craft_wasm", "--serve"]).unwrap_err();
        assert_eq!(unknown.kind(), ErrorKind::UnknownArgument);
    }
}
