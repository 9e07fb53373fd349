// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Daymark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Daymark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Daymark CLI entrypoint.
//!
//! Renders the built-in sample day as an ASCII preview to stdout, refreshing on half-minute
//! boundaries. `--once` renders a single frame and exits; real deployments swap the static
//! provider and ASCII rasterizer for calendar and panel drivers.

use std::error::Error;

use chrono::{Local, NaiveDate};
use tracing_subscriber::EnvFilter;

use daymark::app::App;
use daymark::calendar::StaticProvider;
use daymark::config::{load_env_file, AppConfig};
use daymark::display::{AsciiRasterizer, WriterSink};
use daymark::model::fixtures;
use daymark::schedule::Scheduler;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--once | --immediate] [--density] [--date <YYYY-MM-DD>]\n\nRenders the day view to stdout on every half-minute boundary.\n\n--once       render a single frame immediately and exit\n--immediate  render one frame before entering the timed loop\n--density    overlay the coverage sparkline\n--date       render the given date without a now marker (default: today)\n\n--once and --immediate are mutually exclusive."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    once: bool,
    immediate: bool,
    density: bool,
    date: Option<NaiveDate>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--once" => {
                if options.once {
                    return Err(());
                }
                options.once = true;
            }
            "--immediate" => {
                if options.immediate {
                    return Err(());
                }
                options.immediate = true;
            }
            "--density" => {
                if options.density {
                    return Err(());
                }
                options.density = true;
            }
            "--date" => {
                if options.date.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let date = raw.parse::<NaiveDate>().map_err(|_| ())?;
                options.date = Some(date);
            }
            _ => return Err(()),
        }
    }

    if options.once && options.immediate {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "daymark".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .init();

        load_env_file(None)?;
        let config = AppConfig::from_env()?;

        let mut scene_options = config.scene_options();
        if options.density {
            scene_options.show_density = true;
        }

        let mut app = App::new(
            StaticProvider::new(fixtures::sample_day()),
            AsciiRasterizer::default(),
            WriterSink::new(std::io::stdout()),
            config.window(),
            scene_options,
        );

        let fixed_date = options.date;
        let refresh = move || {
            let result = match fixed_date {
                Some(date) => app.refresh_once(date, None),
                None => app.refresh_at(Local::now().naive_local()),
            };
            if let Err(err) = result {
                tracing::error!(error = %err, "refresh failed");
            }
        };

        let mut scheduler = Scheduler::new(refresh);
        if options.once {
            scheduler.run(true, Some(1));
        } else {
            scheduler.run(options.immediate, None);
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("daymark: {err}");
        std::process::exit(1);
    }
}
