// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::Path;
use std::sync::Arc;

use employee_search::SearchClient;
use employee_search_elasticsearch::ElasticsearchClient;

use crate::config::{CLIConfig, ConfigService, ElasticsearchConfig};
use crate::error::CLIError;
use crate::{cli, cli_commands};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const BINARY_NAME: &str = "employee-search";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LOGGING_CONFIG: &str = "info";
const VERBOSE_LOGGING_CONFIG: &str = "debug";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn run(args: cli::Cli) -> Result<(), CLIError> {
    let verbosity_level = args.verbose;
    let guards = configure_logging(verbosity_level, args.log_file.as_deref())?;

    tracing::info!(
        version = VERSION,
        args = ?std::env::args().collect::<Vec<_>>(),
        "Initializing {BINARY_NAME}"
    );

    let config_svc = ConfigService::new(args.config);

    let result = match config_svc.load() {
        Ok(config) => {
            match cli_commands::get_command(args.command, config, configure_search_client) {
                Ok(mut command) => command.run().await,
                Err(e) => Err(e),
            }
        }
        Err(e) => Err(e),
    };

    match &result {
        Ok(()) => {
            tracing::info!("Command successful");
        }
        Err(err) => {
            tracing::error!(
                error_dbg = ?err,
                error = %err.pretty(true),
                "Command failed",
            );

            if verbosity_level == 0 {
                eprintln!("{}", err.pretty(false));
            }
        }
    }

    // Flush all logging sinks
    drop(guards);

    result
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Search
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn configure_search_client(config: &CLIConfig) -> Result<Arc<dyn SearchClient>, CLIError> {
    let client_config = config
        .search
        .as_ref()
        .and_then(|search| search.elasticsearch.as_ref())
        .map(ElasticsearchConfig::to_client_config)
        .unwrap_or_default();

    let client = ElasticsearchClient::init(&client_config).map_err(CLIError::usage_error_from)?;

    Ok(Arc::new(client))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Logging
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
pub struct Guards {
    pub appender: Option<tracing_appender::non_blocking::WorkerGuard>,
}

fn configure_logging(verbosity_level: u8, log_file: Option<&Path>) -> Result<Guards, CLIError> {
    use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
    use tracing_log::LogTracer;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::layer::SubscriberExt;

    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        prev_hook(info);
        eprintln!(
            "\n{}",
            console::style(format!(
                "Oh no, looks like {BINARY_NAME} has crashed!\n\
                 Re-run the command with -vv to see detailed logs."
            ))
            .bold()
        );
    }));

    // Logging may be already initialized when running under tests
    if tracing::dispatcher::has_been_set() {
        return Ok(Guards::default());
    }

    // Use configuration from RUST_LOG env var if provided
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match verbosity_level {
            0 | 1 => EnvFilter::new(DEFAULT_LOGGING_CONFIG),
            _ => EnvFilter::new(VERBOSE_LOGGING_CONFIG),
        },
    };

    if verbosity_level > 0 {
        // Log to STDERR
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .with_writer(std::io::stderr)
            .pretty()
            .init();

        return Ok(Guards::default());
    }

    let Some(log_path) = log_file else {
        // No log destination - discard logs
        return Ok(Guards::default());
    };

    // Log to file with JSON formatter
    let (appender, appender_guard) = {
        let file = std::fs::File::create(log_path).map_err(|e| {
            CLIError::usage_error(format!(
                "Failed to create log file at {}: {e}",
                log_path.display()
            ))
        })?;
        tracing_appender::non_blocking(file)
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(BINARY_NAME.to_owned(), appender));

    // Redirect all standard logging to tracing events
    LogTracer::init().map_err(CLIError::failure)?;

    tracing::subscriber::set_global_default(subscriber).map_err(CLIError::failure)?;

    Ok(Guards {
        appender: Some(appender_guard),
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
