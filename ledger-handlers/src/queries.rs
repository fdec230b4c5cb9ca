//! Query handlers for read-only requests.
//!
//! Queries are served from a consistent snapshot and may run
//! concurrently with the handle phase of transactions; they never
//! observe partially committed mutations.

use ledger_state::{ReadableState, ReadableTokenStore};
use ledger_types::query::{
    LiveHashResponse, Query, QueryHeader, Response, ResponseHeader, TokenInfo, TokenInfoResponse,
};
use ledger_types::response_code::{Rejection, ResponseCode};

/// The four-operation contract of a query handler.
pub trait QueryHandler {
    /// Pure projection of the header embedded in the query payload.
    /// Must not inspect any state.
    fn extract_header<'a>(&self, query: &'a Query) -> &'a QueryHeader;

    /// Pure construction of a response shell carrying only the given
    /// header and no payload; used for error responses.
    fn create_empty_response(&self, header: ResponseHeader) -> Response;

    /// Whether the query is answerable. Retired query kinds always
    /// reject with `NOT_SUPPORTED` here, before any store access.
    fn validate(&self, query: &Query, state: &impl ReadableState) -> Result<(), Rejection>;

    /// Build the full response for an answerable query. For retired
    /// kinds this must never be reached; invoking it anyway is a
    /// contract violation and panics.
    fn find_response(
        &self,
        query: &Query,
        header: ResponseHeader,
        state: &impl ReadableState,
    ) -> Response;
}

/// Serve a query end to end: validate it, then build either the full
/// response or an empty shell carrying the rejection status.
pub fn answer_query(query: &Query, state: &impl ReadableState) -> Response {
    match query {
        Query::TokenInfo(_) => answer_with(&TokenInfoQueryHandler, query, state),
        Query::LiveHash(_) => answer_with(&LiveHashQueryHandler, query, state),
    }
}

fn answer_with(
    handler: &impl QueryHandler,
    query: &Query,
    state: &impl ReadableState,
) -> Response {
    let query_header = handler.extract_header(query);
    match handler.validate(query, state) {
        Ok(()) => {
            let header = ResponseHeader::with_status(query_header, ResponseCode::Ok);
            handler.find_response(query, header, state)
        }
        Err(rejection) => {
            let header = ResponseHeader::with_status(query_header, rejection.code());
            handler.create_empty_response(header)
        }
    }
}

/// Serves token-info queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenInfoQueryHandler;

impl QueryHandler for TokenInfoQueryHandler {
    fn extract_header<'a>(&self, query: &'a Query) -> &'a QueryHeader {
        match query {
            Query::TokenInfo(q) => &q.header,
            Query::LiveHash(_) => panic!("TokenInfoQueryHandler invoked with live-hash query"),
        }
    }

    fn create_empty_response(&self, header: ResponseHeader) -> Response {
        Response::TokenInfo(TokenInfoResponse { header, info: None })
    }

    fn validate(&self, query: &Query, state: &impl ReadableState) -> Result<(), Rejection> {
        let Query::TokenInfo(q) = query else {
            panic!("TokenInfoQueryHandler invoked with live-hash query");
        };
        // Deleted and paused tokens stay queryable; only absence rejects.
        let token_id = q.token.ok_or(Rejection(ResponseCode::InvalidTokenId))?;
        state
            .get_token(token_id)
            .ok_or(Rejection(ResponseCode::InvalidTokenId))?;
        Ok(())
    }

    fn find_response(
        &self,
        query: &Query,
        header: ResponseHeader,
        state: &impl ReadableState,
    ) -> Response {
        let Query::TokenInfo(q) = query else {
            panic!("TokenInfoQueryHandler invoked with live-hash query");
        };
        let info = q.token.and_then(|token_id| {
            state.get_token(token_id).map(|token| TokenInfo {
                token_id: token.token_id,
                treasury: token.treasury,
                total_supply: token.total_supply,
                decimals: token.decimals,
                deleted: token.deleted,
                paused: token.paused,
            })
        });
        match info {
            Some(info) => Response::TokenInfo(TokenInfoResponse {
                header,
                info: Some(info),
            }),
            // The snapshot is consistent, so this only happens when the
            // caller skipped validate; still answer deterministically.
            None => self.create_empty_response(ResponseHeader {
                status: ResponseCode::InvalidTokenId,
                ..header
            }),
        }
    }
}

/// Retired handler for live-hash queries. Header extraction and empty
/// responses still work so error responses can be produced, but the
/// query is never answerable.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveHashQueryHandler;

impl QueryHandler for LiveHashQueryHandler {
    fn extract_header<'a>(&self, query: &'a Query) -> &'a QueryHeader {
        match query {
            Query::LiveHash(q) => &q.header,
            Query::TokenInfo(_) => panic!("LiveHashQueryHandler invoked with token-info query"),
        }
    }

    fn create_empty_response(&self, header: ResponseHeader) -> Response {
        Response::LiveHash(LiveHashResponse { header, hash: None })
    }

    fn validate(&self, _query: &Query, _state: &impl ReadableState) -> Result<(), Rejection> {
        Err(Rejection(ResponseCode::NotSupported))
    }

    fn find_response(
        &self,
        _query: &Query,
        _header: ResponseHeader,
        _state: &impl ReadableState,
    ) -> Response {
        // validate rejects every live-hash query, so a correctly
        // functioning caller can never get here.
        panic!("live-hash queries are not supported; validate must reject first");
    }
}
