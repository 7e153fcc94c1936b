#![allow(dead_code)]

use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};
use tokio::time::timeout;

pub const TYPE_AAAA: u16 = 28;
pub const TYPE_PTR: u16 = 12;
pub const TYPE_NS: u16 = 2;
pub const TYPE_SOA: u16 = 6;
pub const TYPE_MX: u16 = 15;

const IO_TIMEOUT: Duration = Duration::from_secs(5);

/// Encodes a single-question, recursion-desired query in wire format.
pub fn query_bytes(id: u16, name: &str, qtype: u16) -> Vec<u8> {
    multi_query_bytes(id, &[(name, qtype)])
}

/// Encodes a recursion-desired query carrying every question in order.
pub fn multi_query_bytes(id: u16, questions: &[(&str, u16)]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(512);
    bytes.extend_from_slice(&id.to_be_bytes());
    bytes.extend_from_slice(&[0x01, 0x00]);
    bytes.extend_from_slice(&(questions.len() as u16).to_be_bytes());
    bytes.extend_from_slice(&[0, 0, 0, 0, 0, 0]);
    for (name, qtype) in questions {
        for label in name.trim_end_matches('.').split('.') {
            bytes.push(label.len() as u8);
            bytes.extend_from_slice(label.as_bytes());
        }
        bytes.push(0);
        bytes.extend_from_slice(&qtype.to_be_bytes());
        bytes.extend_from_slice(&1u16.to_be_bytes());
    }
    bytes
}

pub async fn exchange_udp(server: SocketAddr, id: u16, name: &str, qtype: u16) -> Message {
    exchange_udp_bytes(server, &query_bytes(id, name, qtype)).await
}

pub async fn exchange_udp_bytes(server: SocketAddr, query: &[u8]) -> Message {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket.send_to(query, server).await.unwrap();

    let mut buf = vec![0u8; 4096];
    let (len, _) = timeout(IO_TIMEOUT, socket.recv_from(&mut buf))
        .await
        .expect("UDP response timed out")
        .unwrap();
    Message::from_vec(&buf[..len]).unwrap()
}

pub async fn exchange_tcp(server: SocketAddr, id: u16, name: &str, qtype: u16) -> Message {
    let mut stream = timeout(IO_TIMEOUT, TcpStream::connect(server))
        .await
        .expect("TCP connect timed out")
        .unwrap();

    let query = query_bytes(id, name, qtype);
    stream
        .write_all(&(query.len() as u16).to_be_bytes())
        .await
        .unwrap();
    stream.write_all(&query).await.unwrap();

    let mut len = [0u8; 2];
    timeout(IO_TIMEOUT, stream.read_exact(&mut len))
        .await
        .expect("TCP response timed out")
        .unwrap();
    let mut buf = vec![0u8; usize::from(u16::from_be_bytes(len))];
    stream.read_exact(&mut buf).await.unwrap();
    Message::from_vec(&buf).unwrap()
}
