//! # Raw TCP Transport
//!
//! This module sends encoded frames to a network-attached printer over a
//! plain TCP socket. Most ESC/POS printers with an Ethernet or WiFi
//! interface accept raw command streams on port 9100.
//!
//! ## Timeout Contract
//!
//! Two distinct bounds govern a print job:
//!
//! - **Socket-level timeouts** (`connect_timeout`, `io_timeout`, default
//!   5 s each): normal failure detection. Each network operation is raced
//!   against a timer; whichever completes first wins, and on timeout the
//!   pending operation is dropped (abandoned, not force-killed).
//! - **Job deadline** (`job_deadline`, default 45 minutes): a last-resort
//!   cancellation guard wrapped around the entire connect+send sequence.
//!
//! Both knobs are configurable independently via [`TransportOptions`].
//!
//! ## Connection Lifetime
//!
//! One job, one connection: [`print`] opens the socket, writes the frame,
//! shuts the stream down, and drops it on every exit path including
//! timeout and error. There is no retry logic here — retry policy belongs
//! to the caller, as does serializing jobs that target the same printer.

use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::error::TermicaError;

/// Conventional raw-printing port for network ESC/POS printers.
pub const DEFAULT_PORT: u16 = 9100;

/// Default socket-level connect timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default socket-level write timeout.
const DEFAULT_IO_TIMEOUT: Duration = Duration::from_secs(5);

/// Default outer guard around a whole print job.
const DEFAULT_JOB_DEADLINE: Duration = Duration::from_secs(45 * 60);

/// Timeout bounds for a print job. See the module docs for how the
/// socket-level bounds and the job deadline interact.
#[derive(Debug, Clone, Copy)]
pub struct TransportOptions {
    /// Bound on establishing the TCP connection
    pub connect_timeout: Duration,

    /// Bound on each write/flush operation
    pub io_timeout: Duration,

    /// Last-resort bound on the entire connect+send sequence
    pub job_deadline: Duration,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            io_timeout: DEFAULT_IO_TIMEOUT,
            job_deadline: DEFAULT_JOB_DEADLINE,
        }
    }
}

/// # TCP Printer Transport
///
/// Owns one connection to a printer. Dropping the transport closes the
/// socket.
///
/// ## Example
///
/// ```no_run
/// use termica::transport::{TcpTransport, TransportOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), termica::TermicaError> {
///     let options = TransportOptions::default();
///     let mut transport = TcpTransport::connect("192.168.1.240:9100", &options).await?;
///     transport.send(&[0x1B, 0x40]).await?;
///     transport.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct TcpTransport {
    stream: TcpStream,
    io_timeout: Duration,
}

impl TcpTransport {
    /// Open a connection to the printer, bounded by
    /// [`TransportOptions::connect_timeout`].
    ///
    /// ## Errors
    ///
    /// - [`TermicaError::Timeout`] if the bound elapses first
    /// - [`TermicaError::Io`] for refused/unreachable targets
    pub async fn connect(addr: &str, options: &TransportOptions) -> Result<Self, TermicaError> {
        tracing::debug!(%addr, bound = ?options.connect_timeout, "Connecting to printer");

        let stream = timeout(options.connect_timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| TermicaError::Timeout {
                stage: "connect",
                bound: options.connect_timeout,
            })??;

        // Command frames are one-shot writes; don't let Nagle hold the tail.
        stream.set_nodelay(true)?;

        tracing::debug!(%addr, "Connected");
        Ok(Self {
            stream,
            io_timeout: options.io_timeout,
        })
    }

    /// Write a complete frame to the printer, each operation bounded by
    /// the I/O timeout.
    pub async fn send(&mut self, frame: &[u8]) -> Result<(), TermicaError> {
        timeout(self.io_timeout, self.stream.write_all(frame))
            .await
            .map_err(|_| TermicaError::Timeout {
                stage: "send",
                bound: self.io_timeout,
            })??;

        timeout(self.io_timeout, self.stream.flush())
            .await
            .map_err(|_| TermicaError::Timeout {
                stage: "send",
                bound: self.io_timeout,
            })??;

        tracing::debug!(bytes = frame.len(), "Frame sent");
        Ok(())
    }

    /// Cleanly shut down the write side and release the connection.
    pub async fn shutdown(mut self) -> Result<(), TermicaError> {
        self.stream.shutdown().await?;
        Ok(())
    }
}

/// Send one frame as a complete scoped job: connect, send, shut down.
///
/// The whole sequence is additionally raced against
/// [`TransportOptions::job_deadline`]; if that fires, the in-flight
/// operation is dropped and [`TermicaError::Timeout`] is returned. The
/// connection is released on every exit path.
pub async fn print(
    addr: &str,
    frame: &[u8],
    options: &TransportOptions,
) -> Result<(), TermicaError> {
    match timeout(options.job_deadline, print_job(addr, frame, options)).await {
        Ok(result) => result,
        Err(_) => Err(TermicaError::Timeout {
            stage: "print job",
            bound: options.job_deadline,
        }),
    }
}

async fn print_job(
    addr: &str,
    frame: &[u8],
    options: &TransportOptions,
) -> Result<(), TermicaError> {
    let mut transport = TcpTransport::connect(addr, options).await?;
    transport.send(frame).await?;
    transport.shutdown().await
}

// ============================================================================
// TESTS
// ============================================================================
