// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use crate::{BoxedError, SearchResponse};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Connection handle to the search engine. Constructed once at startup and
/// shared by every component that talks to the index.
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    async fn health(&self) -> Result<serde_json::Value, SearchClientError>;

    /// Partial update of a document, `body` is sent as is
    async fn update_document(
        &self,
        index: &str,
        id: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, SearchClientError>;

    async fn delete_document(
        &self,
        index: &str,
        id: &str,
    ) -> Result<serde_json::Value, SearchClientError>;

    /// Returns `_source` of the document, if it exists
    async fn get_document(
        &self,
        index: &str,
        id: &str,
    ) -> Result<Option<serde_json::Value>, SearchClientError>;

    async fn search(
        &self,
        index: &str,
        body: serde_json::Value,
    ) -> Result<SearchResponse, SearchClientError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum SearchClientError {
    #[error("Document '{id}' not found in index '{index}'")]
    NotFound { index: String, id: String },

    #[error("Search engine rejected the request with status {status}: {reason}")]
    Rejected { status: u16, reason: String },

    #[error("Search engine transport failure")]
    Transport(#[source] BoxedError),
}

impl SearchClientError {
    pub fn not_found(index: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            index: index.into(),
            id: id.into(),
        }
    }

    pub fn transport(e: impl Into<BoxedError>) -> Self {
        Self::Transport(e.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
