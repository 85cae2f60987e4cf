mod helpers;

use axum::http::StatusCode;
use helpers::{NamingNode, OffchainServer};
use serde_json::{json, Value};
use stark_resolver_application::use_cases::{ResolveAddressUseCase, ResolveDomainUseCase};
use stark_resolver_domain::{
    encode_domain, Felt, ResolutionError, ResolutionSource, ResolutionSubject, RevertGrammar,
    RevertPayload, OFFCHAIN_RESOLVING,
};
use stark_resolver_infrastructure::offchain::HttpOffchainClient;
use stark_resolver_infrastructure::starknet::{get_selector_from_name, StarknetRpcGateway};
use std::sync::Arc;
use std::time::Duration;

const CONTRACT: &str = "0x6ac597f8116f886fa1c97a23fa4e08299975ecaf6b598873ca6792b9bbfb678";
const PARENT: &str = "notion.stark";

fn use_cases(node: &NamingNode) -> (ResolveDomainUseCase, ResolveAddressUseCase) {
    let gateway = Arc::new(StarknetRpcGateway::new(
        node.url(),
        Felt::parse(CONTRACT).unwrap(),
        Duration::from_secs(5),
    ));
    let offchain = Arc::new(HttpOffchainClient::new(
        Duration::from_secs(5),
        "stark-resolver-e2e",
    ));
    (
        ResolveDomainUseCase::new(gateway.clone(), offchain.clone()),
        ResolveAddressUseCase::new(gateway, offchain),
    )
}

fn offchain_revert(grammar: RevertGrammar, domain_slice: &str, uris: &[String]) -> Value {
    let payload = RevertPayload {
        error_kind: OFFCHAIN_RESOLVING.to_string(),
        domain_slice: domain_slice.to_string(),
        uris: uris.to_vec(),
        grammar,
    };
    NamingNode::contract_error(&grammar.render(&payload.to_tokens().unwrap()))
}

fn hint_json() -> Value {
    json!({"address": 1, "r": 2, "s": 3, "max_validity": 999})
}

fn hex_list(domain: &str) -> Vec<String> {
    let encoded = encode_domain(domain).unwrap();
    let mut span = vec![Felt::from(encoded.len() as u64).to_hex()];
    span.extend(encoded.iter().map(Felt::to_hex));
    span
}

// ── forward ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_direct_resolution_makes_no_offchain_queries() {
    let server = OffchainServer::with_hint(hint_json()).await;
    let node = NamingNode::start(
        NamingNode::result(&["0x2207abc"]),
        NamingNode::contract_error("unexpected hinted call"),
    )
    .await;
    let (resolve_domain, _) = use_cases(&node);

    let subject = ResolutionSubject::domain("test.notion.stark", PARENT).unwrap();
    let resolution = resolve_domain.execute(&subject.to_string()).await.unwrap();

    assert_eq!(resolution.value, "0x2207abc");
    assert_eq!(resolution.source, ResolutionSource::OnChain);
    assert_eq!(server.hits(), 0);

    let calls = node.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0]["contract_address"], CONTRACT);
    assert_eq!(
        calls[0]["entry_point_selector"],
        get_selector_from_name("domain_to_address").to_hex()
    );
    let mut expected = hex_list("test.notion.stark");
    expected.push("0x0".to_string());
    assert_eq!(calls[0]["calldata"], json!(expected));
}

#[tokio::test]
async fn test_fallback_skips_failing_server() {
    let server_a = OffchainServer::failing(StatusCode::INTERNAL_SERVER_ERROR, "").await;
    let server_b = OffchainServer::with_hint(hint_json()).await;
    let node = NamingNode::start(
        offchain_revert(
            RevertGrammar::Parenthesized,
            "sub",
            &[server_a.uri(), server_b.uri()],
        ),
        NamingNode::result(&["0x2a"]),
    )
    .await;
    let (resolve_domain, _) = use_cases(&node);

    let resolution = resolve_domain.execute("sub.notion.stark").await.unwrap();

    assert_eq!(resolution.value, "0x2a");
    assert_eq!(
        resolution.source,
        ResolutionSource::Offchain {
            uri: server_b.uri()
        }
    );
    assert_eq!(server_a.paths(), vec!["/sub"]);
    assert_eq!(server_b.paths(), vec!["/sub"]);

    let calls = node.calls();
    assert_eq!(calls.len(), 2);
    let mut expected = hex_list("sub.notion.stark");
    expected.extend(["0x4", "0x1", "0x2", "0x3", "0x3e7"].map(String::from));
    assert_eq!(calls[1]["calldata"], json!(expected));
}

#[tokio::test]
async fn test_fallback_with_bracketed_revert() {
    let server = OffchainServer::with_hint(hint_json()).await;
    let node = NamingNode::start(
        offchain_revert(RevertGrammar::Bracketed, "sub", &[server.uri()]),
        NamingNode::result(&["0x2a"]),
    )
    .await;
    let (resolve_domain, _) = use_cases(&node);

    let resolution = resolve_domain.execute("sub.notion.stark").await.unwrap();

    assert!(resolution.used_offchain());
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn test_query_string_uri() {
    let server = OffchainServer::with_hint(hint_json()).await;
    let uri = format!("{}resolve?domain=", server.uri());
    let node = NamingNode::start(
        offchain_revert(RevertGrammar::Parenthesized, "sub", &[uri]),
        NamingNode::result(&["0x2a"]),
    )
    .await;
    let (resolve_domain, _) = use_cases(&node);

    resolve_domain.execute("sub.notion.stark").await.unwrap();

    assert_eq!(server.paths(), vec!["/resolve?domain=sub"]);
}

#[tokio::test]
async fn test_rejected_hint_names_server() {
    let server_a = OffchainServer::with_hint(hint_json()).await;
    let server_b = OffchainServer::with_hint(hint_json()).await;
    let node = NamingNode::start(
        offchain_revert(
            RevertGrammar::Parenthesized,
            "sub",
            &[server_a.uri(), server_b.uri()],
        ),
        NamingNode::contract_error("Invalid signature"),
    )
    .await;
    let (resolve_domain, _) = use_cases(&node);

    let err = resolve_domain.execute("sub.notion.stark").await.unwrap_err();

    match err {
        ResolutionError::HintRejected { uri, reason } => {
            assert_eq!(uri, server_a.uri());
            assert!(reason.contains("Invalid signature"));
        }
        other => panic!("expected HintRejected, got {other:?}"),
    }
    assert_eq!(server_b.hits(), 0);
}

#[tokio::test]
async fn test_every_server_failing() {
    let server_a = OffchainServer::failing(StatusCode::NOT_FOUND, "unknown domain").await;
    let server_b = OffchainServer::with_hint(json!({"address": "0x1"})).await;
    let node = NamingNode::start(
        offchain_revert(
            RevertGrammar::Parenthesized,
            "sub",
            &[server_a.uri(), server_b.uri()],
        ),
        NamingNode::result(&["0x2a"]),
    )
    .await;
    let (resolve_domain, _) = use_cases(&node);

    let err = resolve_domain.execute("sub.notion.stark").await.unwrap_err();

    assert!(matches!(err, ResolutionError::Exhausted { last_error: Some(_) }));
    assert_eq!(node.calls().len(), 1);
}

#[tokio::test]
async fn test_plain_contract_error_is_passed_through() {
    let node = NamingNode::start(
        NamingNode::contract_error("Execution failed. Failure reason: (0x6e6f5f6f776e6572)."),
        NamingNode::result(&[]),
    )
    .await;
    let (resolve_domain, _) = use_cases(&node);

    let err = resolve_domain.execute("test.notion.stark").await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Contract error: Execution failed. Failure reason: (0x6e6f5f6f776e6572)."
    );
}

// ── reverse ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_reverse_resolution() {
    let span = hex_list("ben.notion.stark");
    let span: Vec<&str> = span.iter().map(String::as_str).collect();
    let node = NamingNode::start(NamingNode::result(&span), NamingNode::result(&[])).await;
    let (_, resolve_address) = use_cases(&node);

    let address = ResolutionSubject::parse_address("0x2207abc").unwrap();
    let resolution = resolve_address.execute(address).await.unwrap();

    assert_eq!(resolution.value, "ben.notion.stark");
    assert_eq!(
        node.calls()[0]["entry_point_selector"],
        get_selector_from_name("address_to_domain").to_hex()
    );
}

#[tokio::test]
async fn test_reverse_without_name() {
    let node = NamingNode::start(NamingNode::result(&["0x0"]), NamingNode::result(&[])).await;
    let (_, resolve_address) = use_cases(&node);

    let err = resolve_address.execute(Felt::from(1)).await.unwrap_err();
    assert_eq!(err.to_string(), "Could not get stark name");
}
