// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use anyhow::Result;
use clap::{Parser, Subcommand};
use slog::{Drain, Logger};
use spark_admin_client::Client;
use std::io::stdout;
use std::net::{IpAddr, SocketAddr};

mod confirm;
mod neighbor;
mod restart;
mod spark;

#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    styles = get_styles(),
    infer_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Address of the routing daemon's admin interface.
    #[arg(short, long, env = "SPARKADM_ADDRESS", default_value = "::1")]
    address: IpAddr,

    /// TCP port of the routing daemon's admin interface.
    #[arg(short, long, env = "SPARKADM_PORT", default_value_t = 2018)]
    port: u16,

    /// Request timeout, e.g. "500ms" or "10s".
    #[arg(short, long, env = "SPARKADM_TIMEOUT", default_value = "10s")]
    timeout: humantime::Duration,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Neighbor discovery (spark) commands.
    #[command(subcommand)]
    Spark(spark::Commands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log = init_logger();

    let endpoint =
        format!("http://{}", SocketAddr::new(cli.address, cli.port));
    slog::debug!(log, "connecting to daemon";
        "endpoint" => &endpoint,
        "timeout" => %cli.timeout,
    );

    let client =
        Client::new_with_timeout(&endpoint, cli.timeout.into(), log.clone())?;

    match cli.command {
        Commands::Spark(command) => spark::commands(
            command,
            &client,
            &confirm::Prompt,
            &mut stdout().lock(),
        )?,
    }
    Ok(())
}

fn init_logger() -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_envlogger::new(drain).fuse();
    let drain = slog_async::Async::new(drain)
        .chan_size(0x2000)
        .build()
        .fuse();
    slog::Logger::root(drain, slog::o!())
}

pub fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(anstyle::Style::new().bold().underline().fg_color(Some(
            anstyle::Color::Rgb(anstyle::RgbColor(245, 207, 101)),
        )))
        .literal(anstyle::Style::new().bold().fg_color(Some(
            anstyle::Color::Rgb(anstyle::RgbColor(72, 213, 151)),
        )))
        .invalid(anstyle::Style::new().bold().fg_color(Some(
            anstyle::Color::Rgb(anstyle::RgbColor(72, 213, 151)),
        )))
        .valid(anstyle::Style::new().bold().fg_color(Some(
            anstyle::Color::Rgb(anstyle::RgbColor(72, 213, 151)),
        )))
        .usage(anstyle::Style::new().bold().fg_color(Some(
            anstyle::Color::Rgb(anstyle::RgbColor(245, 207, 101)),
        )))
        .error(anstyle::Style::new().bold().fg_color(Some(
            anstyle::Color::Rgb(anstyle::RgbColor(232, 104, 134)),
        )))
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["sparkadm", "spark", "neighbors"])
            .unwrap();
        assert_eq!(cli.address, "::1".parse::<IpAddr>().unwrap());
        assert_eq!(cli.port, 2018);
        assert_eq!(Duration::from(cli.timeout), Duration::from_secs(10));
        match cli.command {
            Commands::Spark(spark::Commands::Neighbors { json, detailed }) => {
                assert!(!json);
                assert!(!detailed);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from([
            "sparkadm",
            "-a",
            "10.0.0.1",
            "-t",
            "250ms",
            "spark",
            "graceful-restart",
            "--yes",
        ])
        .unwrap();
        assert_eq!(cli.address, "10.0.0.1".parse::<IpAddr>().unwrap());
        assert_eq!(Duration::from(cli.timeout), Duration::from_millis(250));
        assert!(matches!(
            cli.command,
            Commands::Spark(spark::Commands::GracefulRestart { yes: true })
        ));

        let cli = Cli::try_parse_from([
            "sparkadm",
            "spark",
            "neighbors",
            "--json",
            "--detailed",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Spark(spark::Commands::Neighbors {
                json: true,
                detailed: true
            })
        ));
    }
}
