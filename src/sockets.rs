//! Small blocking UDP and TCP wrappers for quick message passing.
//!
//! Messages are plain UTF-8 strings. Servers read at most
//! [`SERVER_BUFFER_SIZE`] bytes per message and clients read replies of at
//! most [`CLIENT_REPLY_SIZE`] bytes; longer payloads are truncated.

use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs, UdpSocket};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{Result, ToolboxError};

pub const SERVER_BUFFER_SIZE: usize = 512;
pub const CLIENT_REPLY_SIZE: usize = 2000;

/// How often the callback server checks for shutdown while idle.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

fn resolve(addr: impl ToSocketAddrs) -> Result<SocketAddr> {
    addr.to_socket_addrs()
        .map_err(|e| ToolboxError::socket("resolve", e))?
        .next()
        .ok_or_else(|| {
            ToolboxError::socket(
                "resolve",
                io::Error::new(io::ErrorKind::InvalidInput, "address resolved to nothing"),
            )
        })
}

fn unspecified_for(addr: &SocketAddr) -> SocketAddr {
    if addr.is_ipv4() {
        SocketAddr::from(([0, 0, 0, 0], 0))
    } else {
        SocketAddr::from(([0u16; 8], 0))
    }
}

fn not_bound() -> ToolboxError {
    ToolboxError::socket(
        "bind",
        io::Error::new(io::ErrorKind::NotConnected, "socket is not bound"),
    )
}

fn read_message(stream: &mut TcpStream, capacity: usize) -> io::Result<Option<String>> {
    let mut buffer = vec![0u8; capacity];
    let n = stream.read(&mut buffer)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buffer[..n]).into_owned()))
}

/// Sends datagrams to one fixed destination.
#[derive(Debug)]
pub struct UdpClient {
    socket: UdpSocket,
    target: SocketAddr,
}

impl UdpClient {
    pub fn new(target: impl ToSocketAddrs) -> Result<Self> {
        let target = resolve(target)?;
        let socket =
            UdpSocket::bind(unspecified_for(&target)).map_err(|e| ToolboxError::socket("create", e))?;
        debug!(%target, "udp client created");
        Ok(Self { socket, target })
    }

    /// Sends one datagram, returning the number of bytes sent.
    pub fn send_message(&self, message: &str) -> Result<usize> {
        self.socket
            .send_to(message.as_bytes(), self.target)
            .map_err(|e| ToolboxError::socket("send", e))
    }
}

/// Receives datagrams on a local address.
#[derive(Debug)]
pub struct UdpServer {
    addr: SocketAddr,
    socket: Option<UdpSocket>,
}

impl UdpServer {
    /// Prepares a server for `addr`. Nothing is bound until
    /// [`socket_bind`](UdpServer::socket_bind).
    pub fn new(addr: impl ToSocketAddrs) -> Result<Self> {
        Ok(Self {
            addr: resolve(addr)?,
            socket: None,
        })
    }

    /// Binds the socket and returns the bound address.
    pub fn socket_bind(&mut self) -> Result<SocketAddr> {
        let socket = UdpSocket::bind(self.addr).map_err(|e| ToolboxError::socket("bind", e))?;
        let local = socket
            .local_addr()
            .map_err(|e| ToolboxError::socket("bind", e))?;
        debug!(%local, "udp server bound");
        self.socket = Some(socket);
        Ok(local)
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.as_ref().and_then(|s| s.local_addr().ok())
    }

    /// Blocks for the next datagram.
    pub fn receive(&self) -> Result<(String, SocketAddr)> {
        let socket = self.socket.as_ref().ok_or_else(not_bound)?;
        let mut buffer = [0u8; SERVER_BUFFER_SIZE];
        let (n, from) = socket
            .recv_from(&mut buffer)
            .map_err(|e| ToolboxError::socket("receive", e))?;
        let message = String::from_utf8_lossy(&buffer[..n]).into_owned();
        debug!(%from, bytes = n, "udp packet received");
        Ok((message, from))
    }

    /// Hands every datagram to `handler` until it returns `false`.
    pub fn listen<F>(&self, mut handler: F) -> Result<()>
    where
        F: FnMut(&str, SocketAddr) -> bool,
    {
        debug!("waiting for data");
        loop {
            let (message, from) = self.receive()?;
            if !handler(&message, from) {
                return Ok(());
            }
        }
    }
}

/// A connected TCP client that expects one reply per message.
///
/// ```no_run
/// # use sxs_toolbox::sockets::TcpClient;
/// let mut client = TcpClient::new("127.0.0.1:8000")?;
/// client.make_connection()?;
/// let reply = client.send_message("ping")?;
/// # Ok::<(), sxs_toolbox::ToolboxError>(())
/// ```
#[derive(Debug)]
pub struct TcpClient {
    target: SocketAddr,
    stream: Option<TcpStream>,
}

impl TcpClient {
    pub fn new(target: impl ToSocketAddrs) -> Result<Self> {
        let target = resolve(target)?;
        debug!(%target, "tcp client created");
        Ok(Self {
            target,
            stream: None,
        })
    }

    pub fn make_connection(&mut self) -> Result<()> {
        let stream =
            TcpStream::connect(self.target).map_err(|e| ToolboxError::socket("connect", e))?;
        debug!(target = %self.target, "connected");
        self.stream = Some(stream);
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    /// Sends `message` and waits for the reply. An empty string means the
    /// peer closed the connection without replying.
    pub fn send_message(&mut self, message: &str) -> Result<String> {
        let stream = self.stream.as_mut().ok_or_else(|| {
            ToolboxError::socket(
                "send",
                io::Error::new(io::ErrorKind::NotConnected, "make_connection was not called"),
            )
        })?;
        stream
            .write_all(message.as_bytes())
            .map_err(|e| ToolboxError::socket("send", e))?;
        debug!(bytes = message.len(), "data sent");
        let reply = read_message(stream, CLIENT_REPLY_SIZE)
            .map_err(|e| ToolboxError::socket("receive", e))?;
        Ok(reply.unwrap_or_default())
    }
}

/// A TCP server that serves one client at a time.
#[derive(Debug)]
pub struct TcpServer {
    addr: SocketAddr,
    listener: Option<TcpListener>,
    client: Option<TcpStream>,
}

impl TcpServer {
    pub fn new(addr: impl ToSocketAddrs) -> Result<Self> {
        Ok(Self {
            addr: resolve(addr)?,
            listener: None,
            client: None,
        })
    }

    /// Binds and starts listening without waiting for a client.
    pub fn bind(&mut self) -> Result<SocketAddr> {
        let listener = TcpListener::bind(self.addr).map_err(|e| ToolboxError::socket("bind", e))?;
        let local = listener
            .local_addr()
            .map_err(|e| ToolboxError::socket("bind", e))?;
        debug!(%local, "tcp server bound");
        self.listener = Some(listener);
        Ok(local)
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }

    /// Binds if needed, accepts one client and returns its first message.
    pub fn socket_bind(&mut self) -> Result<String> {
        if self.listener.is_none() {
            self.bind()?;
        }
        self.accept_new_client()?;
        self.receive_msg()
    }

    /// Blocks until a client connects; it replaces any previous client.
    pub fn accept_new_client(&mut self) -> Result<SocketAddr> {
        let listener = self.listener.as_ref().ok_or_else(not_bound)?;
        let (stream, peer) = listener
            .accept()
            .map_err(|e| ToolboxError::socket("accept", e))?;
        debug!(%peer, "connection accepted");
        self.client = Some(stream);
        Ok(peer)
    }

    /// Reads the next message from the connected client. An empty string
    /// means the client disconnected.
    pub fn receive_msg(&mut self) -> Result<String> {
        let stream = self.client.as_mut().ok_or_else(|| {
            ToolboxError::socket(
                "receive",
                io::Error::new(io::ErrorKind::NotConnected, "no client accepted"),
            )
        })?;
        let message = read_message(stream, SERVER_BUFFER_SIZE)
            .map_err(|e| ToolboxError::socket("receive", e))?;
        Ok(message.unwrap_or_default())
    }

    pub fn reply(&mut self, message: &str) -> Result<()> {
        let stream = self.client.as_mut().ok_or_else(|| {
            ToolboxError::socket(
                "send",
                io::Error::new(io::ErrorKind::NotConnected, "no client accepted"),
            )
        })?;
        stream
            .write_all(message.as_bytes())
            .map_err(|e| ToolboxError::socket("send", e))
    }
}

/// A TCP server that hands every received message to a callback on a
/// background thread.
///
/// The thread accepts a client, delivers its messages until it disconnects,
/// then goes back to accepting. [`close_socket`](TcpServerCallback::close_socket)
/// stops it and joins the thread; dropping the server does the same.
pub struct TcpServerCallback {
    addr: SocketAddr,
    local: Option<SocketAddr>,
    shutdown: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl TcpServerCallback {
    pub fn new(addr: impl ToSocketAddrs) -> Result<Self> {
        Ok(Self {
            addr: resolve(addr)?,
            local: None,
            shutdown: Arc::new(AtomicBool::new(false)),
            worker: None,
        })
    }

    /// Binds, then serves clients on a new thread. Returns the bound address.
    ///
    /// A server that is already running is closed first, so the server can be
    /// rebound after [`close_socket`](TcpServerCallback::close_socket).
    pub fn bind_callback<F>(&mut self, callback: F) -> Result<SocketAddr>
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.close_socket();
        self.shutdown.store(false, Ordering::SeqCst);

        let listener = TcpListener::bind(self.addr).map_err(|e| ToolboxError::socket("bind", e))?;
        listener
            .set_nonblocking(true)
            .map_err(|e| ToolboxError::socket("bind", e))?;
        let local = listener
            .local_addr()
            .map_err(|e| ToolboxError::socket("bind", e))?;
        debug!(%local, "tcp callback server bound");

        let shutdown = Arc::clone(&self.shutdown);
        let worker = thread::Builder::new()
            .name(format!("tcp-callback-{}", local.port()))
            .spawn(move || serve(listener, shutdown, callback))
            .map_err(|e| ToolboxError::socket("spawn", e))?;

        self.local = Some(local);
        self.worker = Some(worker);
        Ok(local)
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local
    }

    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Stops the server thread. Safe to call more than once.
    pub fn close_socket(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(worker) = self.worker.take() {
            debug!(addr = ?self.local, "closing socket");
            if worker.join().is_err() {
                warn!(addr = ?self.local, "tcp callback thread panicked");
            }
        }
    }
}

impl Drop for TcpServerCallback {
    fn drop(&mut self) {
        self.close_socket();
    }
}

fn serve<F>(listener: TcpListener, shutdown: Arc<AtomicBool>, mut callback: F)
where
    F: FnMut(&str),
{
    while !shutdown.load(Ordering::SeqCst) {
        match listener.accept() {
            Ok((stream, peer)) => {
                debug!(%peer, "connection accepted");
                if let Err(e) = serve_client(stream, &shutdown, &mut callback) {
                    warn!(%peer, error = %e, "client connection failed");
                }
            }
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                warn!(error = %e, "socket accept error");
                return;
            }
        }
    }
}

fn serve_client<F>(mut stream: TcpStream, shutdown: &AtomicBool, callback: &mut F) -> io::Result<()>
where
    F: FnMut(&str),
{
    stream.set_nonblocking(false)?;
    stream.set_read_timeout(Some(POLL_INTERVAL))?;
    while !shutdown.load(Ordering::SeqCst) {
        match read_message(&mut stream, SERVER_BUFFER_SIZE) {
            Ok(Some(message)) => callback(&message),
            Ok(None) => {
                debug!("client disconnected");
                return Ok(());
            }
            Err(e) if matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
