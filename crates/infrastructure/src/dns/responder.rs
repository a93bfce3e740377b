//! The responder loop.
//!
//! One task, one socket: receive a datagram, decode it, match it against
//! the registry, and reply unicast to the sender. Every per-packet failure
//! is logged and the loop moves on; nothing spans iterations, so a hostile
//! or malformed packet can never corrupt state for the next one.

use super::{query_parser, response_builder};
use mdns_pub_application::AnswerQueryUseCase;
use mdns_pub_domain::DomainError;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

/// Worst-case UDP payload; the reusable receive buffer is sized to it.
const MAX_UDP_PAYLOAD: usize = 65536;

pub struct MdnsResponder {
    socket: UdpSocket,
    answer_query: AnswerQueryUseCase,
    shutdown: CancellationToken,
}

impl MdnsResponder {
    pub fn new(
        socket: UdpSocket,
        answer_query: AnswerQueryUseCase,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            socket,
            answer_query,
            shutdown,
        }
    }

    /// Runs until the shutdown token is cancelled.
    ///
    /// Cancellation is observed at loop-top: the `biased` select checks it
    /// before socket readiness, so an in-flight packet finishes but no new
    /// one is picked up. The socket closes when `self` drops on return.
    pub async fn run(self) -> Result<(), DomainError> {
        let mut buf = vec![0u8; MAX_UDP_PAYLOAD];

        loop {
            tokio::select! {
                biased;

                _ = self.shutdown.cancelled() => {
                    info!("shutdown requested, stopping responder");
                    return Ok(());
                }

                received = self.socket.recv_from(&mut buf) => {
                    let (len, from) = match received {
                        Ok(pair) => pair,
                        Err(e) => {
                            error!(error = %e, "failed to read datagram");
                            continue;
                        }
                    };

                    self.handle_packet(&buf[..len], from).await;
                }
            }
        }
    }

    async fn handle_packet(&self, bytes: &[u8], from: SocketAddr) {
        let query = match query_parser::parse_query(bytes) {
            Ok(query) => query,
            Err(e) => {
                error!(error = %e, %from, "failed to decode message");
                return;
            }
        };

        let answers = self.answer_query.execute(&query);
        if answers.is_empty() {
            return;
        }

        let reply = match response_builder::build_answer(query.id, &answers) {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, %from, "failed to encode answer");
                return;
            }
        };

        // Unicast back to the querier, not to the multicast group. Strict
        // RFC 6762 would sometimes multicast here; this responder always
        // takes the simpler unicast-to-sender path.
        match self.socket.send_to(&reply, from).await {
            Ok(sent) => debug!(%from, bytes = sent, answers = answers.len(), "answer sent"),
            Err(e) => error!(error = %e, %from, "failed to send answer"),
        }
    }
}
