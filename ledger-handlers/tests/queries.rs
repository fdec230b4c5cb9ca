//! Token-info query scenarios and the pure query-handler operations.

use ledger_handlers::queries::{answer_query, QueryHandler, TokenInfoQueryHandler};
use ledger_types::entities::Token;
use ledger_types::primitives::TokenAmount;
use ledger_types::query::{
    Query, QueryHeader, Response, ResponseHeader, ResponseType, TokenInfoQuery,
};
use ledger_types::response_code::ResponseCode;

use assert_matches::assert_matches;

use crate::utils::{state_with_token, token_with_all_keys, TOKEN, TREASURY};

mod utils;

fn info_query(header: QueryHeader) -> Query {
    Query::TokenInfo(TokenInfoQuery {
        header,
        token: Some(TOKEN),
    })
}

/// Header extraction is a pure projection: the extracted header equals
/// the one the query was built with, exactly.
#[test]
fn test_extract_header_is_pure_projection() {
    let header = QueryHeader {
        response_type: ResponseType::CostAnswer,
        payment: Some(55),
    };
    let query = info_query(header.clone());

    assert_eq!(TokenInfoQueryHandler.extract_header(&query), &header);
    // Repeated extraction yields the same header.
    assert_eq!(TokenInfoQueryHandler.extract_header(&query), &header);
}

/// The empty response carries exactly the given header and no payload.
#[test]
fn test_create_empty_response() {
    let header = ResponseHeader {
        status: ResponseCode::InvalidTokenId,
        response_type: ResponseType::AnswerOnly,
        cost: 0,
    };

    let response = TokenInfoQueryHandler.create_empty_response(header.clone());

    assert_matches!(response, Response::TokenInfo(r) => {
        assert_eq!(r.header, header);
        assert_eq!(r.info, None);
    });
}

/// A query for an existing token answers with its projection.
#[test]
fn test_token_info_found() {
    let state = state_with_token(500);
    let response = answer_query(&info_query(QueryHeader::default()), &state);

    assert_matches!(response, Response::TokenInfo(r) => {
        assert_eq!(r.header.status, ResponseCode::Ok);
        let info = r.info.expect("answerable query carries a payload");
        assert_eq!(info.token_id, TOKEN);
        assert_eq!(info.treasury, TREASURY);
        assert_eq!(info.total_supply, TokenAmount(500));
        assert!(!info.paused);
    });
}

/// A query for an unknown token answers with an empty shell carrying
/// `INVALID_TOKEN_ID`.
#[test]
fn test_token_info_unknown_token() {
    let state = utils::base_state();
    let response = answer_query(&info_query(QueryHeader::default()), &state);

    assert_matches!(response, Response::TokenInfo(r) => {
        assert_eq!(r.header.status, ResponseCode::InvalidTokenId);
        assert_eq!(r.info, None);
    });
}

/// Deleted and paused tokens remain queryable; their flags are simply
/// reported.
#[test]
fn test_token_info_reports_flags() {
    let token = Token {
        deleted: false,
        paused: true,
        ..token_with_all_keys(10)
    };
    let state = utils::base_state().with_token(token);

    let response = answer_query(&info_query(QueryHeader::default()), &state);

    assert_matches!(response, Response::TokenInfo(r) => {
        assert_eq!(r.header.status, ResponseCode::Ok);
        assert!(r.info.expect("payload present").paused);
    });
}
