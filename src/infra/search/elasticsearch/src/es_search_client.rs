// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::time::Duration;

use elasticsearch::auth::Credentials;
use elasticsearch::cluster::ClusterHealthParts;
use elasticsearch::http::response::Response;
use elasticsearch::http::transport::{MultiNodeConnectionPool, SingleNodeConnectionPool, TransportBuilder};
use elasticsearch::{DeleteParts, Elasticsearch, GetParts, SearchParts, UpdateParts};
use employee_search::{SearchClient, SearchClientError, SearchResponse};
use thiserror::Error;

use crate::ElasticsearchClientConfig;
use crate::es_client::{self, RequestTarget};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug)]
pub struct ElasticsearchClient {
    client: Elasticsearch,
}

impl ElasticsearchClient {
    pub fn init(config: &ElasticsearchClientConfig) -> Result<Self, ElasticsearchClientInitError> {
        let builder = match config.hosts.as_slice() {
            [] => return Err(ElasticsearchClientInitError::NoHosts),
            [host] => TransportBuilder::new(SingleNodeConnectionPool::new(host.clone())),
            hosts => {
                TransportBuilder::new(MultiNodeConnectionPool::round_robin(hosts.to_vec(), None))
            }
        };

        let mut builder = builder
            .timeout(Duration::from_secs(config.timeout_secs))
            .request_body_compression(config.enable_compression);

        match (&config.username, &config.password) {
            (Some(username), Some(password)) => {
                builder = builder.auth(Credentials::Basic(username.clone(), password.clone()));
            }
            (None, Some(password)) => {
                builder = builder.auth(Credentials::Basic("elastic".to_string(), password.clone()));
            }
            (Some(_), None) => return Err(ElasticsearchClientInitError::MissingPassword),
            (None, None) => {}
        }

        let transport = builder
            .build()
            .map_err(|e| ElasticsearchClientInitError::Transport(Box::new(e)))?;

        tracing::debug!(hosts = ?config.hosts, "Elasticsearch client initialized");

        Ok(Self {
            client: Elasticsearch::new(transport),
        })
    }

    async fn ensure_success(
        target: RequestTarget<'_>,
        response: Response,
    ) -> Result<Response, SearchClientError> {
        let status = response.status_code();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.map_err(SearchClientError::transport)?;
        Err(es_client::request_error(target, status.as_u16(), &body))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl SearchClient for ElasticsearchClient {
    #[tracing::instrument(level = "debug", name = "ElasticsearchClient::health", skip_all)]
    async fn health(&self) -> Result<serde_json::Value, SearchClientError> {
        let response = self
            .client
            .cluster()
            .health(ClusterHealthParts::None)
            .send()
            .await
            .map_err(SearchClientError::transport)?;

        Self::ensure_success(RequestTarget::Cluster, response)
            .await?
            .json()
            .await
            .map_err(SearchClientError::transport)
    }

    #[tracing::instrument(
        level = "debug",
        name = "ElasticsearchClient::update_document",
        skip_all,
        fields(%index, %id)
    )]
    async fn update_document(
        &self,
        index: &str,
        id: &str,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, SearchClientError> {
        let response = self
            .client
            .update(UpdateParts::IndexId(index, id))
            .body(body)
            .send()
            .await
            .map_err(SearchClientError::transport)?;

        Self::ensure_success(RequestTarget::Document { index, id }, response)
            .await?
            .json()
            .await
            .map_err(SearchClientError::transport)
    }

    #[tracing::instrument(
        level = "debug",
        name = "ElasticsearchClient::delete_document",
        skip_all,
        fields(%index, %id)
    )]
    async fn delete_document(
        &self,
        index: &str,
        id: &str,
    ) -> Result<serde_json::Value, SearchClientError> {
        let response = self
            .client
            .delete(DeleteParts::IndexId(index, id))
            .send()
            .await
            .map_err(SearchClientError::transport)?;

        Self::ensure_success(RequestTarget::Document { index, id }, response)
            .await?
            .json()
            .await
            .map_err(SearchClientError::transport)
    }

    #[tracing::instrument(
        level = "debug",
        name = "ElasticsearchClient::get_document",
        skip_all,
        fields(%index, %id)
    )]
    async fn get_document(
        &self,
        index: &str,
        id: &str,
    ) -> Result<Option<serde_json::Value>, SearchClientError> {
        let response = self
            .client
            .get(GetParts::IndexId(index, id))
            .send()
            .await
            .map_err(SearchClientError::transport)?;

        let Some(response) = es_client::missing_as_none(
            Self::ensure_success(RequestTarget::Document { index, id }, response).await,
        )?
        else {
            return Ok(None);
        };

        let document: es_client::GetDocumentByIdResponse = response
            .json()
            .await
            .map_err(SearchClientError::transport)?;

        Ok(document.into_source())
    }

    #[tracing::instrument(
        level = "debug",
        name = "ElasticsearchClient::search",
        skip_all,
        fields(%index)
    )]
    async fn search(
        &self,
        index: &str,
        body: serde_json::Value,
    ) -> Result<SearchResponse, SearchClientError> {
        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(body)
            .send()
            .await
            .map_err(SearchClientError::transport)?;

        let es_response: es_client::SearchResponse =
            Self::ensure_success(RequestTarget::Cluster, response)
                .await?
                .json()
                .await
                .map_err(SearchClientError::transport)?;

        Ok(es_response.into())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum ElasticsearchClientInitError {
    #[error("At least one Elasticsearch host must be configured")]
    NoHosts,

    #[error("Elasticsearch username is set without a password")]
    MissingPassword,

    #[error("Elasticsearch transport could not be built")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
