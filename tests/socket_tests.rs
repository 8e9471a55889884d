use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use sxs_toolbox::sockets::{TcpClient, TcpServer, TcpServerCallback, UdpClient, UdpServer};

#[test]
fn test_udp_round_trip() {
    let mut server = UdpServer::new("127.0.0.1:0").unwrap();
    let addr = server.socket_bind().unwrap();
    assert_eq!(server.local_addr(), Some(addr));

    let client = UdpClient::new(addr).unwrap();
    assert_eq!(client.send_message("hello").unwrap(), 5);

    let (message, _from) = server.receive().unwrap();
    assert_eq!(message, "hello");
}

#[test]
fn test_udp_listen_stops_when_handler_says_so() {
    let mut server = UdpServer::new("127.0.0.1:0").unwrap();
    let addr = server.socket_bind().unwrap();
    let client = UdpClient::new(addr).unwrap();
    for message in ["one", "two", "stop", "never read"] {
        client.send_message(message).unwrap();
    }

    let mut received = Vec::new();
    server
        .listen(|message, _| {
            received.push(message.to_string());
            message != "stop"
        })
        .unwrap();
    assert_eq!(received, vec!["one", "two", "stop"]);
}

#[test]
fn test_udp_receive_before_bind_fails() {
    let server = UdpServer::new("127.0.0.1:0").unwrap();
    assert!(server.receive().is_err(), "Receiving on an unbound server should fail");
}

#[test]
fn test_tcp_request_reply() {
    let mut server = TcpServer::new("127.0.0.1:0").unwrap();
    let addr = server.bind().unwrap();

    let handle = thread::spawn(move || {
        let first = server.socket_bind().unwrap();
        server.reply(&format!("ack {}", first)).unwrap();
        first
    });

    let mut client = TcpClient::new(addr).unwrap();
    assert!(!client.is_connected());
    client.make_connection().unwrap();
    let reply = client.send_message("ping").unwrap();

    assert_eq!(handle.join().unwrap(), "ping");
    assert_eq!(reply, "ack ping");
}

#[test]
fn test_tcp_send_without_connection_fails() {
    let mut client = TcpClient::new("127.0.0.1:9").unwrap();
    assert!(client.send_message("x").is_err());
}

#[test]
fn test_callback_server_delivers_messages() {
    let (tx, rx) = mpsc::channel();
    let mut server = TcpServerCallback::new("127.0.0.1:0").unwrap();
    let addr = server
        .bind_callback(move |message| {
            let _ = tx.send(message.to_string());
        })
        .unwrap();
    assert!(server.is_running());
    assert_eq!(server.local_addr(), Some(addr));

    // The callback server never replies, so write through a raw stream.
    let mut stream = std::net::TcpStream::connect(addr).unwrap();
    std::io::Write::write_all(&mut stream, b"hello callback").unwrap();

    let got = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(got, "hello callback");

    drop(stream);
    server.close_socket();
    assert!(!server.is_running());
    server.close_socket();
}

#[test]
fn test_callback_server_closes_on_drop() {
    let mut server = TcpServerCallback::new("127.0.0.1:0").unwrap();
    server.bind_callback(|_| {}).unwrap();
    drop(server);
}

#[test]
fn test_callback_server_can_rebind_after_close() {
    let (tx, rx) = mpsc::channel();
    let mut server = TcpServerCallback::new("127.0.0.1:0").unwrap();
    server.bind_callback(|_| {}).unwrap();
    server.close_socket();
    assert!(!server.is_running());

    let addr = server
        .bind_callback(move |message| {
            let _ = tx.send(message.to_string());
        })
        .unwrap();
    assert!(server.is_running());

    let mut stream = std::net::TcpStream::connect(addr).unwrap();
    std::io::Write::write_all(&mut stream, b"second life").unwrap();
    let got = rx.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(got, "second life", "A rebound server should deliver messages again");

    drop(stream);
    server.close_socket();
}

#[test]
fn test_callback_server_rebind_while_running_replaces_worker() {
    let (tx, rx) = mpsc::channel();
    let mut server = TcpServerCallback::new("127.0.0.1:0").unwrap();
    server.bind_callback(|_| {}).unwrap();
    let second = server
        .bind_callback(move |message| {
            let _ = tx.send(message.to_string());
        })
        .unwrap();
    assert_eq!(server.local_addr(), Some(second));

    let mut stream = std::net::TcpStream::connect(second).unwrap();
    std::io::Write::write_all(&mut stream, b"replacement").unwrap();
    assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), "replacement");
    drop(stream);
}
