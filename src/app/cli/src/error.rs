// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;

use employee_search::{EmployeeSearchError, SearchClientError};
pub use messaging_outbox::BoxedError;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum CLIError {
    /// Invalid input or configuration provided by the user
    #[error("{source}")]
    UsageError { source: BoxedError },

    /// The command was valid but could not be carried out
    #[error("{source}")]
    Failure { source: BoxedError },
}

impl CLIError {
    pub fn usage_error(msg: impl Into<String>) -> Self {
        Self::UsageError {
            source: DescriptionError::new(msg).into(),
        }
    }

    pub fn usage_error_from(e: impl Into<BoxedError>) -> Self {
        Self::UsageError { source: e.into() }
    }

    pub fn failure(e: impl Into<BoxedError>) -> Self {
        Self::Failure { source: e.into() }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UsageError { .. } => 2,
            Self::Failure { .. } => 1,
        }
    }

    /// Renders the error along with its chain of causes
    pub fn pretty(&self, plain: bool) -> PrettyCLIError<'_> {
        PrettyCLIError { error: self, plain }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl From<EmployeeSearchError> for CLIError {
    fn from(e: EmployeeSearchError) -> Self {
        match e {
            EmployeeSearchError::Argument(_) | EmployeeSearchError::InvalidRange(_) => {
                Self::usage_error_from(e)
            }
            EmployeeSearchError::Client(_) => Self::failure(e),
        }
    }
}

impl From<SearchClientError> for CLIError {
    fn from(e: SearchClientError) -> Self {
        Self::failure(e)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct PrettyCLIError<'a> {
    error: &'a CLIError,
    plain: bool,
}

impl fmt::Display for PrettyCLIError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (label, source) = match self.error {
            CLIError::UsageError { source } => ("Usage Error:", source),
            CLIError::Failure { source } => ("Error:", source),
        };

        if self.plain {
            write!(f, "{label} {source}")?;
        } else {
            write!(f, "{} {source}", console::style(label).red().bold())?;
        }

        let mut cause = source.source();
        if cause.is_some() {
            writeln!(f)?;
            writeln!(f)?;
            if self.plain {
                write!(f, "Caused by:")?;
            } else {
                write!(f, "{}", console::style("Caused by:").bold())?;
            }
        }

        while let Some(err) = cause {
            write!(f, "\n  {err}")?;
            cause = err.source();
        }

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
#[error("{message}")]
pub struct DescriptionError {
    pub message: String,
}

impl DescriptionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
