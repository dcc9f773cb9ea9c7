// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod buckets_command;
mod config_command;
mod find_command;
mod get_document_command;
mod health_command;
mod histogram_command;
mod index_command;
mod unindex_command;

pub use buckets_command::*;
pub use config_command::*;
pub use find_command::*;
pub use get_document_command::*;
pub use health_command::*;
pub use histogram_command::*;
pub use index_command::*;
pub use unindex_command::*;

pub use crate::error::CLIError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait(?Send)]
pub trait Command {
    async fn run(&mut self) -> Result<(), CLIError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CLIError> {
    let json = serde_json::to_string_pretty(value).map_err(CLIError::failure)?;
    println!("{json}");
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
