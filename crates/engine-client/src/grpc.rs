//! gRPC-backed recommender.
//!
//! Talks to the ranking service over a tonic channel. The channel is
//! established once in [`GrpcRecommender::connect`] and cloned per call,
//! which is cheap and keeps `recommend` callable through `&self`.

use std::sync::Arc;

use async_trait::async_trait;
use catalog::MovieCatalog;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;
use tracing::{debug, error, info};

use crate::error::{EngineError, Result};
use crate::proto::{RECOMMEND_PATH, RecommendRequest, RecommendResponse};
use crate::recommender::Recommender;
use crate::types::{PreferenceMode, RecommendationResult};

/// Client for the recommendation service.
pub struct GrpcRecommender {
    client: Grpc<Channel>,
    service_addr: String,
    catalog: Arc<MovieCatalog>,
}

impl GrpcRecommender {
    /// Connect to the recommendation service.
    ///
    /// # Arguments
    /// * `addr` - Address of the gRPC service (e.g., "http://localhost:50051")
    /// * `catalog` - Metadata catalog served alongside the engine's results
    pub async fn connect(addr: impl Into<String>, catalog: Arc<MovieCatalog>) -> Result<Self> {
        let addr = addr.into();
        info!("Connecting to recommendation engine at {}", addr);

        let channel = Channel::from_shared(addr.clone())
            .map_err(|e| EngineError::ConnectionError(format!("invalid address {addr}: {e}")))?
            .connect()
            .await
            .map_err(|e| {
                error!("Failed to connect to {}: {}", addr, e);
                EngineError::ConnectionError(e.to_string())
            })?;

        Ok(Self {
            client: Grpc::new(channel),
            service_addr: addr,
            catalog,
        })
    }

    /// Get the address of the service this client is connected to.
    pub fn service_address(&self) -> &str {
        &self.service_addr
    }
}

#[async_trait]
impl Recommender for GrpcRecommender {
    fn name(&self) -> &str {
        "grpc"
    }

    async fn recommend(
        &self,
        query: &str,
        mode: PreferenceMode,
        top_n: usize,
    ) -> Result<RecommendationResult> {
        debug!("Requesting {} results per track ({}) for {:?}", top_n, mode, query);

        let mut client = self.client.clone();
        client.ready().await.map_err(|e| {
            EngineError::ConnectionError(format!("service was not ready: {e}"))
        })?;

        let request = tonic::Request::new(RecommendRequest {
            query: query.to_string(),
            preference_mode: mode.as_str().to_string(),
            top_n: u32::try_from(top_n).unwrap_or(u32::MAX),
        });

        let response: tonic::Response<RecommendResponse> = client
            .unary(request, PathAndQuery::from_static(RECOMMEND_PATH), ProstCodec::default())
            .await
            .map_err(|status| {
                error!("gRPC error while requesting recommendations: {}", status);
                EngineError::RequestFailed(format!("{:?}: {}", status.code(), status.message()))
            })?;

        Ok(RecommendationResult::from(response.into_inner()))
    }

    fn movies(&self) -> &MovieCatalog {
        &self.catalog
    }
}
