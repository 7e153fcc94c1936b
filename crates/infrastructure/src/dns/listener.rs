use super::errors::ServerError;
use super::server::DnsServerHandler;
use hickory_server::ServerFuture;
use nibbledns_domain::{Protocol, ServerConfig};
use socket2::{Domain, Protocol as SocketProtocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

const TCP_TIMEOUT: Duration = Duration::from_secs(10);
const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// UDP and/or TCP listeners serving one handler.
///
/// `start` binds the sockets and spawns the serve loop; `close` stops it and
/// waits (bounded) for in-flight requests to drain.
pub struct DnsServer {
    bind_addr: SocketAddr,
    protocol: Protocol,
    handler: DnsServerHandler,
    local_addr: Option<SocketAddr>,
    stop: Option<CancellationToken>,
    task: Option<JoinHandle<()>>,
}

impl DnsServer {
    pub fn new(bind_addr: SocketAddr, protocol: Protocol, handler: DnsServerHandler) -> Self {
        Self {
            bind_addr,
            protocol,
            handler,
            local_addr: None,
            stop: None,
            task: None,
        }
    }

    pub fn from_config(
        config: &ServerConfig,
        handler: DnsServerHandler,
    ) -> Result<Self, ServerError> {
        let listen = config.listen_address();
        let bind_addr: SocketAddr = listen
            .parse()
            .map_err(|_| ServerError::InvalidAddress(listen.clone()))?;
        Ok(Self::new(bind_addr, config.protocol, handler))
    }

    /// Address the listeners are bound to once started (resolves port 0).
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    /// Binds the configured listeners and starts serving in the background.
    ///
    /// A bind failure cancels `shutdown` before returning the error, and so
    /// does the serve loop ending on its own; callers waiting on the token
    /// are always released.
    pub fn start(&mut self, shutdown: CancellationToken) -> Result<SocketAddr, ServerError> {
        if self.task.is_some() {
            return Err(ServerError::AlreadyStarted);
        }

        let mut server = ServerFuture::new(self.handler.clone());
        let local_addr = match self.register_listeners(&mut server) {
            Ok(addr) => addr,
            Err(e) => {
                error!(error = %e, "DNS listener failed to start");
                shutdown.cancel();
                return Err(e);
            }
        };

        info!(
            bind_address = %local_addr,
            protocol = %self.protocol,
            "DNS server listening"
        );

        let stop = shutdown.child_token();
        let serve_stop = stop.clone();
        let task = tokio::spawn(async move {
            let finished = tokio::select! {
                result = server.block_until_done() => Some(result),
                _ = serve_stop.cancelled() => None,
            };

            let result = match finished {
                Some(result) => {
                    warn!("DNS listeners exited on their own");
                    shutdown.cancel();
                    result
                }
                None => server.shutdown_gracefully().await,
            };

            if let Err(e) = result {
                error!(error = %e, "DNS server terminated with error");
                shutdown.cancel();
            }
            info!("DNS server stopped");
        });

        self.local_addr = Some(local_addr);
        self.stop = Some(stop);
        self.task = Some(task);
        Ok(local_addr)
    }

    /// Stops accepting requests and waits for the serve loop to finish.
    pub async fn close(&mut self) {
        if let Some(stop) = self.stop.take() {
            stop.cancel();
        }

        let Some(task) = self.task.take() else {
            return;
        };

        match tokio::time::timeout(DRAIN_TIMEOUT, task).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!(error = %e, "DNS server task failed"),
            Err(_) => warn!(
                timeout_secs = DRAIN_TIMEOUT.as_secs(),
                "Timed out waiting for DNS server to drain"
            ),
        }
    }

    fn register_listeners(
        &self,
        server: &mut ServerFuture<DnsServerHandler>,
    ) -> Result<SocketAddr, ServerError> {
        let mut local_addr = self.bind_addr;

        if self.protocol.uses_udp() {
            let socket = create_udp_socket(local_addr).map_err(|source| ServerError::Bind {
                transport: "udp",
                addr: local_addr,
                source,
            })?;
            local_addr = socket.local_addr().map_err(|source| ServerError::Bind {
                transport: "udp",
                addr: local_addr,
                source,
            })?;
            server.register_socket(socket);
        }

        // With port 0, TCP follows whatever port UDP was given.
        if self.protocol.uses_tcp() {
            let listener = create_tcp_listener(local_addr).map_err(|source| ServerError::Bind {
                transport: "tcp",
                addr: local_addr,
                source,
            })?;
            local_addr = listener.local_addr().map_err(|source| ServerError::Bind {
                transport: "tcp",
                addr: local_addr,
                source,
            })?;
            server.register_listener(listener, TCP_TIMEOUT);
        }

        Ok(local_addr)
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> io::Result<UdpSocket> {
    let domain = Domain::for_address(socket_addr);
    let socket = Socket::new(domain, Type::DGRAM, Some(SocketProtocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}

fn create_tcp_listener(socket_addr: SocketAddr) -> io::Result<TcpListener> {
    let domain = Domain::for_address(socket_addr);
    let socket = Socket::new(domain, Type::STREAM, Some(SocketProtocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
