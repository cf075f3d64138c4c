use crate::{
    call_data::{arb_owner_prepare_function_data_by_name, ArbOwnerCallData, Authority},
    chain::ParentChain,
    client::OrbitClient,
    error::Error,
    retryables::RetryablesFeesParams,
};
use alloy::{
    primitives::{Address, U256},
    rpc::types::TransactionRequest,
};
use jsonrpsee::{
    core::{async_trait, RpcResult},
    proc_macros::rpc,
    server::{Server, ServerHandle},
    types::{
        error::{INTERNAL_ERROR_CODE, INVALID_PARAMS_CODE},
        ErrorObjectOwned,
    },
};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArbOwnerCallRequest {
    pub function_name: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Set when chain ownership was handed to an upgrade executor.
    #[serde(default)]
    pub upgrade_executor: Option<Address>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArbOwnerTransactionRequest {
    #[serde(flatten)]
    pub call: ArbOwnerCallRequest,
    pub account: Address,
}

impl From<Error> for ErrorObjectOwned {
    fn from(error: Error) -> Self {
        let code = if error.is_local() {
            INVALID_PARAMS_CODE
        } else {
            INTERNAL_ERROR_CODE
        };
        ErrorObjectOwned::owned(code, error.to_string(), None::<String>)
    }
}

#[rpc(server)]
pub trait OrbitRpc {
    #[method(name = "orbit_arbOwnerFunctionData")]
    async fn arb_owner_function_data(
        &self,
        request: ArbOwnerCallRequest,
    ) -> RpcResult<ArbOwnerCallData>;

    #[method(name = "orbit_prepareArbOwnerTransaction")]
    async fn prepare_arb_owner_transaction(
        &self,
        request: ArbOwnerTransactionRequest,
    ) -> RpcResult<TransactionRequest>;

    #[method(name = "orbit_estimateRetryablesFees")]
    async fn estimate_retryables_fees(&self, params: RetryablesFeesParams) -> RpcResult<U256>;

    #[method(name = "orbit_estimateRetryablesFeesWithDefaults")]
    async fn estimate_retryables_fees_with_defaults(
        &self,
        params: RetryablesFeesParams,
    ) -> RpcResult<U256>;
}

pub struct OrbitRpcImpl<C> {
    client: Arc<OrbitClient<C>>,
}

impl<C> OrbitRpcImpl<C> {
    pub fn new(client: Arc<OrbitClient<C>>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: ParentChain + 'static> OrbitRpcServer for OrbitRpcImpl<C> {
    async fn arb_owner_function_data(
        &self,
        request: ArbOwnerCallRequest,
    ) -> RpcResult<ArbOwnerCallData> {
        Ok(arb_owner_prepare_function_data_by_name(
            &request.function_name,
            &request.args,
            Authority::from(request.upgrade_executor),
        )?)
    }

    async fn prepare_arb_owner_transaction(
        &self,
        request: ArbOwnerTransactionRequest,
    ) -> RpcResult<TransactionRequest> {
        // reject before encoding, the chain id is needed to sign anyway
        self.client.chain_id()?;
        let call_data = arb_owner_prepare_function_data_by_name(
            &request.call.function_name,
            &request.call.args,
            Authority::from(request.call.upgrade_executor),
        )?;
        match self
            .client
            .prepare_transaction_request(call_data, request.account)
            .await
        {
            Ok(tx) => Ok(tx),
            Err(e) => {
                warn!(error = %e, function = %request.call.function_name, "transaction preparation failed");
                Err(e.into())
            }
        }
    }

    async fn estimate_retryables_fees(&self, params: RetryablesFeesParams) -> RpcResult<U256> {
        Ok(self.client.create_rollup_get_retryables_fees(params).await?)
    }

    async fn estimate_retryables_fees_with_defaults(
        &self,
        params: RetryablesFeesParams,
    ) -> RpcResult<U256> {
        Ok(self
            .client
            .create_rollup_get_retryables_fees_with_defaults(params)
            .await)
    }
}

pub struct RpcServer {
    handle: ServerHandle,
    addr: SocketAddr,
}

impl RpcServer {
    pub async fn new<C: ParentChain + 'static>(
        bind_addr: SocketAddr,
        client: OrbitClient<C>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        // Setup CORS
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_headers(Any)
            .allow_methods(Any);

        let server = Server::builder()
            .set_http_middleware(tower::ServiceBuilder::new().layer(cors))
            .build(bind_addr)
            .await?;

        let addr = server.local_addr()?;
        let rpc_impl = OrbitRpcImpl::new(Arc::new(client));
        let handle = server.start(rpc_impl.into_rpc());
        Ok(Self { handle, addr })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub async fn stop(self) -> Result<(), Box<dyn std::error::Error>> {
        self.handle
            .stop()
            .map_err(|e| format!("Failed to stop server: {:?}", e))?;
        Ok(())
    }
}
