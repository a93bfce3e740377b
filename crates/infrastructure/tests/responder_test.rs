//! End-to-end responder tests over loopback UDP.
//!
//! The responder runs on whatever socket it is handed, so these tests use
//! ephemeral 127.0.0.1 sockets and need no multicast privileges: a client
//! socket plays the querier and the reply path is identical to the
//! multicast deployment (unicast back to the source endpoint).

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RData, RecordType as HickoryRecordType};
use mdns_pub_application::AnswerQueryUseCase;
use mdns_pub_domain::{HostName, NameRegistry};
use mdns_pub_infrastructure::dns::MdnsResponder;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

const ANSWER_ADDR: Ipv4Addr = Ipv4Addr::new(192, 0, 2, 5);
const REPLY_TIMEOUT: Duration = Duration::from_secs(2);
const SILENCE_TIMEOUT: Duration = Duration::from_millis(300);

struct TestResponder {
    addr: SocketAddr,
    shutdown: CancellationToken,
    handle: JoinHandle<Result<(), mdns_pub_domain::DomainError>>,
}

async fn spawn_responder(names: &[&str]) -> TestResponder {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    let registry =
        NameRegistry::new(names.iter().map(|n| HostName::parse(n).unwrap()).collect());
    let use_case = AnswerQueryUseCase::new(registry, ANSWER_ADDR);

    let shutdown = CancellationToken::new();
    let responder = MdnsResponder::new(socket, use_case, shutdown.clone());
    let handle = tokio::spawn(responder.run());

    TestResponder {
        addr,
        shutdown,
        handle,
    }
}

fn query_bytes(id: u16, questions: &[(&str, HickoryRecordType)]) -> Vec<u8> {
    let mut message = Message::new();
    message.set_id(id);
    message.set_message_type(MessageType::Query);
    message.set_op_code(OpCode::Query);
    for (name, record_type) in questions {
        let mut query = Query::new();
        query.set_name(Name::from_str(name).unwrap());
        query.set_query_type(*record_type);
        query.set_query_class(DNSClass::IN);
        message.add_query(query);
    }
    message.to_vec().unwrap()
}

async fn exchange(responder: SocketAddr, packet: &[u8]) -> Option<Vec<u8>> {
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client.send_to(packet, responder).await.unwrap();

    let mut buf = vec![0u8; 1500];
    match tokio::time::timeout(REPLY_TIMEOUT, client.recv_from(&mut buf)).await {
        Ok(Ok((len, _))) => Some(buf[..len].to_vec()),
        _ => None,
    }
}

async fn expect_silence(responder: SocketAddr, packet: &[u8]) {
    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client.send_to(packet, responder).await.unwrap();

    let mut buf = vec![0u8; 1500];
    let received = tokio::time::timeout(SILENCE_TIMEOUT, client.recv_from(&mut buf)).await;
    assert!(received.is_err(), "expected no reply");
}

#[tokio::test]
async fn test_registered_a_query_is_answered() {
    let responder = spawn_responder(&["printer.local."]).await;

    let query = query_bytes(0x7A7A, &[("printer.local.", HickoryRecordType::A)]);
    let reply = exchange(responder.addr, &query).await.expect("reply expected");

    let message = Message::from_vec(&reply).unwrap();
    assert_eq!(message.id(), 0x7A7A);
    assert_eq!(message.message_type(), MessageType::Response);
    assert_eq!(message.op_code(), OpCode::Query);
    assert!(message.authoritative());

    assert_eq!(message.answers().len(), 1);
    let answer = &message.answers()[0];
    assert_eq!(answer.name().to_utf8(), "printer.local.");
    assert_eq!(answer.record_type(), HickoryRecordType::A);
    assert_eq!(answer.dns_class(), DNSClass::IN);
    assert_eq!(answer.ttl(), 120);
    match answer.data() {
        RData::A(a) => assert_eq!(a.0, ANSWER_ADDR),
        other => panic!("expected A rdata, got {:?}", other),
    }

    responder.shutdown.cancel();
}

#[tokio::test]
async fn test_aaaa_query_goes_unanswered() {
    let responder = spawn_responder(&["printer.local."]).await;

    let query = query_bytes(1, &[("printer.local.", HickoryRecordType::AAAA)]);
    expect_silence(responder.addr, &query).await;

    responder.shutdown.cancel();
}

#[tokio::test]
async fn test_unregistered_name_goes_unanswered() {
    let responder = spawn_responder(&["printer.local."]).await;

    let query = query_bytes(2, &[("nas.local.", HickoryRecordType::A)]);
    expect_silence(responder.addr, &query).await;

    responder.shutdown.cancel();
}

#[tokio::test]
async fn test_two_questions_answered_in_order() {
    let responder = spawn_responder(&["printer.local.", "scanner.local."]).await;

    let query = query_bytes(
        3,
        &[
            ("scanner.local.", HickoryRecordType::A),
            ("printer.local.", HickoryRecordType::A),
        ],
    );
    let reply = exchange(responder.addr, &query).await.expect("reply expected");

    let message = Message::from_vec(&reply).unwrap();
    assert_eq!(message.answers().len(), 2);
    assert_eq!(message.answers()[0].name().to_utf8(), "scanner.local.");
    assert_eq!(message.answers()[1].name().to_utf8(), "printer.local.");

    responder.shutdown.cancel();
}

#[tokio::test]
async fn test_malformed_packet_does_not_kill_the_loop() {
    let responder = spawn_responder(&["printer.local."]).await;

    // Shorter than a DNS header; must be dropped without a reply.
    expect_silence(responder.addr, &[0xFF, 0x00, 0x01]).await;

    // The loop must still answer afterwards.
    let query = query_bytes(4, &[("printer.local.", HickoryRecordType::A)]);
    assert!(exchange(responder.addr, &query).await.is_some());

    responder.shutdown.cancel();
}

#[tokio::test]
async fn test_same_query_yields_byte_identical_replies() {
    let responder = spawn_responder(&["printer.local."]).await;

    let query = query_bytes(0x0909, &[("printer.local.", HickoryRecordType::A)]);
    let first = exchange(responder.addr, &query).await.expect("reply expected");
    let second = exchange(responder.addr, &query).await.expect("reply expected");

    assert_eq!(first, second);
    assert_eq!(u16::from_be_bytes([first[0], first[1]]), 0x0909);

    responder.shutdown.cancel();
}

#[tokio::test]
async fn test_cancellation_stops_the_loop() {
    let responder = spawn_responder(&["printer.local."]).await;

    responder.shutdown.cancel();

    let result = tokio::time::timeout(REPLY_TIMEOUT, responder.handle)
        .await
        .expect("responder did not stop after cancellation")
        .expect("responder task panicked");
    assert!(result.is_ok());
}
