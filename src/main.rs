#![allow(non_snake_case)]

mod app;
mod context;
mod pages;
mod theme;

use clap::{ArgAction, Parser};
use dioxus::desktop::{Config, WindowBuilder};

/// Govaim - sign in to the dataset analysis dashboard
#[derive(Parser, Debug)]
#[command(name = "govaim-desktop")]
#[command(about = "Govaim desktop client")]
struct Args {
    /// Window title
    #[arg(long, default_value = "Govaim")]
    title: String,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 480.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 720.0)]
    height: f64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    tracing::info!(
        title = %args.title,
        width = args.width,
        height = args.height,
        "Starting desktop client"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_defaults() {
        let args = Args::parse_from(["govaim-desktop"]);
        assert_eq!(args.title, "Govaim");
        assert_eq!(args.width, 480.0);
        assert_eq!(args.height, 720.0);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn args_overrides() {
        let args = Args::parse_from([
            "govaim-desktop",
            "--title",
            "Govaim - staging",
            "--width",
            "600",
            "-vv",
        ]);
        assert_eq!(args.title, "Govaim - staging");
        assert_eq!(args.width, 600.0);
        assert_eq!(args.verbose, 2);
    }
}
