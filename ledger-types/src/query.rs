//! Read-only queries and their responses.
//!
//! Each query variant carries a header with payment and response-type
//! metadata plus operation-specific filter fields; each response variant
//! mirrors its query's kind with a response header and an optional
//! payload.

use crate::primitives::{AccountId, TokenAmount, TokenId};
use crate::response_code::ResponseCode;

/// Whether the client wants an answer, or only the cost of answering.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum ResponseType {
    #[default]
    AnswerOnly,
    CostAnswer,
}

/// Header common to every query.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct QueryHeader {
    /// The kind of response requested.
    pub response_type: ResponseType,
    /// Fee payment offered for serving the query, if any. Fee handling
    /// itself is an external collaborator.
    pub payment: Option<u64>,
}

/// Header common to every response.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResponseHeader {
    /// Outcome of serving the query.
    pub status: ResponseCode,
    /// Echo of the requested response type.
    pub response_type: ResponseType,
    /// Cost of serving the query.
    pub cost: u64,
}

impl ResponseHeader {
    /// A zero-cost header with the given status, echoing the query's
    /// response type.
    pub fn with_status(query_header: &QueryHeader, status: ResponseCode) -> Self {
        ResponseHeader {
            status,
            response_type: query_header.response_type,
            cost: 0,
        }
    }
}

/// Query for the state of a token.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TokenInfoQuery {
    pub header: QueryHeader,
    /// The queried token.
    pub token: Option<TokenId>,
}

/// Query for a live hash attached to an account. Retired.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LiveHashQuery {
    pub header: QueryHeader,
    /// The account the live hash is attached to.
    pub account: Option<AccountId>,
    /// The queried hash bytes.
    pub hash: Vec<u8>,
}

/// The tagged union of read-only requests, keyed by query kind.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Query {
    TokenInfo(TokenInfoQuery),
    LiveHash(LiveHashQuery),
}

/// Projection of a token's state returned by the token-info query.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TokenInfo {
    pub token_id: TokenId,
    pub treasury: AccountId,
    pub total_supply: TokenAmount,
    pub decimals: u8,
    pub deleted: bool,
    pub paused: bool,
}

/// Response to [`TokenInfoQuery`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TokenInfoResponse {
    pub header: ResponseHeader,
    /// The token projection; absent on error responses.
    pub info: Option<TokenInfo>,
}

/// Response to [`LiveHashQuery`]. The payload is always absent since the
/// operation is retired.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LiveHashResponse {
    pub header: ResponseHeader,
    /// Never populated by this node version.
    pub hash: Option<Vec<u8>>,
}

/// The tagged union of responses, mirroring [`Query`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Response {
    TokenInfo(TokenInfoResponse),
    LiveHash(LiveHashResponse),
}

impl Response {
    /// The response header, regardless of kind.
    pub fn header(&self) -> &ResponseHeader {
        match self {
            Response::TokenInfo(response) => &response.header,
            Response::LiveHash(response) => &response.header,
        }
    }
}
