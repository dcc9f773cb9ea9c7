// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;

use employee_search::EmployeeID;

use crate::cli_value_parser::*;
use crate::{BINARY_NAME, CONFIG_PATH_ENV_VAR, VERSION};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, clap::Parser)]
#[command(name = BINARY_NAME)]
#[command(version = VERSION)]
#[command(about = "Keeps an employee search index in sync and queries it")]
pub struct Cli {
    /// Sets the level of verbosity (repeat for more)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the configuration file
    #[arg(long, value_name = "PATH", env = CONFIG_PATH_ENV_VAR, global = true)]
    pub config: Option<PathBuf>,

    /// Write JSON logs into the specified file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    Health(Health),
    Index(Index),
    Unindex(Unindex),
    Get(Get),
    Find(Find),
    Buckets(Buckets),
    Histogram(Histogram),
    Config(Config),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Reports the health of the search cluster
#[derive(Debug, clap::Args)]
pub struct Health {}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Indexes employees read from a JSON file
///
/// The file holds either a single employee object or an array of them.
#[derive(Debug, clap::Args)]
pub struct Index {
    /// JSON file with employee records
    #[arg(long, value_name = "FILE")]
    pub file: PathBuf,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Removes an employee document from the index
#[derive(Debug, clap::Args)]
pub struct Unindex {
    /// Employee identifier
    #[arg(long, value_name = "ID")]
    pub id: EmployeeID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Shows the indexed document of an employee
#[derive(Debug, clap::Args)]
pub struct Get {
    /// Employee identifier
    #[arg(long, value_name = "ID")]
    pub id: EmployeeID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Finds employees whose field equals the given value
#[derive(Debug, clap::Args)]
pub struct Find {
    /// Field to filter on, e.g. `Designation`
    #[arg(long, value_name = "FIELD")]
    pub field: String,

    /// Value to match, parsed as JSON when possible
    #[arg(long, value_name = "VALUE", allow_hyphen_values = true, value_parser = value_parse_term_value)]
    pub value: serde_json::Value,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Counts employees per distinct value of a field
#[derive(Debug, clap::Args)]
pub struct Buckets {
    /// Field to aggregate on
    #[arg(long, value_name = "FIELD")]
    pub field: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Counts employees per numeric range of a field
#[derive(Debug, clap::Args)]
pub struct Histogram {
    /// Field to aggregate on, e.g. `Age`
    #[arg(long, value_name = "FIELD")]
    pub field: String,

    /// Lower bound of the first closed range
    #[arg(long, allow_hyphen_values = true)]
    pub start: i64,

    /// Upper bound of the last closed range
    #[arg(long, allow_hyphen_values = true)]
    pub end: i64,

    /// Width of every closed range
    #[arg(long, allow_hyphen_values = true)]
    pub step: i64,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Prints the effective configuration
#[derive(Debug, clap::Args)]
pub struct Config {
    /// Print secrets instead of masking them
    #[arg(long)]
    pub show_secrets: bool,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
