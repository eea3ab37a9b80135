use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use rawhttp_core::{ClientConfig, HttpClient, HttpResponse};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Send one GET or POST over a raw TCP socket and print the reply.
#[derive(Debug, Parser)]
#[command(name = "rawhttp", override_usage = "rawhttp [METHOD] URL [OPTIONS]")]
struct Cli {
    /// Optional method (POST posts, anything else is GET) followed by the URL
    #[arg(value_name = "[METHOD] URL", num_args = 1..=2, required = true)]
    target: Vec<String>,

    /// Form argument, sent in the query for GET and in the body for POST
    #[arg(short = 'd', long = "data", value_name = "KEY=VALUE", value_parser = parse_pair)]
    data: Vec<(String, String)>,

    /// Print the parsed response as JSON
    #[arg(long)]
    json: bool,

    #[arg(long, value_name = "MS")]
    connect_timeout_ms: Option<u64>,

    #[arg(long, value_name = "MS")]
    read_timeout_ms: Option<u64>,

    /// -v shows the request and raw response, -vv everything
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn method_and_url(&self) -> (&str, &str) {
        match self.target.as_slice() {
            [method, url] => (method.as_str(), url.as_str()),
            [url] => ("GET", url.as_str()),
            // clap enforces one or two values
            _ => ("GET", ""),
        }
    }

    fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(ms) = self.connect_timeout_ms.filter(|ms| *ms > 0) {
            config = config.with_connect_timeout(Duration::from_millis(ms));
        }
        if let Some(ms) = self.read_timeout_ms.filter(|ms| *ms > 0) {
            config = config.with_read_timeout(Duration::from_millis(ms));
        }
        config
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))
}

fn render_plain(response: &HttpResponse) -> String {
    format!("{}\n{}", response.status, response.body)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let (method, url) = cli.method_and_url();
    let client = HttpClient::new(cli.config());
    let args = (!cli.data.is_empty()).then_some(cli.data.as_slice());

    let response = client
        .command(url, method, args)
        .with_context(|| format!("{method} {url}"))?;

    if cli.json {
        let json = serde_json::to_string_pretty(&response).context("encoding response")?;
        println!("{json}");
    } else {
        println!("{}", render_plain(&response));
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("could not install logger: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
