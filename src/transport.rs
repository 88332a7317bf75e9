//! A single request/response exchange with the peer.
//!
//! A [`Session`] owns one connection. It is opened for a single register operation and closed
//! right after, either explicitly through [`Session::close()`] or by being dropped, so a failed
//! exchange never leaks its connection into the next one.
//!
//! [`Session`]: ./struct.Session.html
//! [`Session::close()`]: ./struct.Session.html#method.close

use std::io;
use std::net::Shutdown;
use std::path::{Path, PathBuf};
use std::time::Duration;
use futures::Future;
use tokio_core::reactor::Core;
use tokio_io::io::{read_exact, write_all};
use tokio_timer::{timeout, Timeout};
use tokio_uds::UnixStream;
use errors::*;

/// An open connection to the peer.
pub struct Session {
    core: Core,
    stream: Option<UnixStream>,
    endpoint: PathBuf,
    timeout: Duration
}

impl Session {
    /// Connects to the peer listening on `endpoint`.
    ///
    /// Fails with [`ErrorKind::Connection`] if the socket is missing or the peer refuses it.
    ///
    /// [`ErrorKind::Connection`]: ../errors/enum.ErrorKind.html#variant.Connection
    pub fn open<P: AsRef<Path>> (endpoint: P, timeout: Duration) -> Result<Session> {
        let endpoint = endpoint.as_ref();
        let core = Core::new().chain_err (|| "unable to create the event loop")?;
        let stream = UnixStream::connect (endpoint, &core.handle())
            .chain_err (|| ErrorKind::Connection (endpoint.display().to_string()))?;
        debug!("connected to {}", endpoint.display());
        Ok(Session {
            core,
            stream: Some(stream),
            endpoint: endpoint.to_owned(),
            timeout
        })
    }

    /// Writes the whole `frame`, then waits for exactly `response_len` bytes.
    ///
    /// A peer hanging up early yields [`ErrorKind::ShortRead`], an exchange taking longer than
    /// the session timeout yields [`ErrorKind::TimedOut`]. After a failure the connection is
    /// unusable and further exchanges fail.
    ///
    /// [`ErrorKind::ShortRead`]: ../errors/enum.ErrorKind.html#variant.ShortRead
    /// [`ErrorKind::TimedOut`]: ../errors/enum.ErrorKind.html#variant.TimedOut
    pub fn exchange (&mut self, frame: &[u8], response_len: usize) -> Result<Vec<u8>> {
        let stream = match self.stream.take() {
            Some(stream) => stream,
            None => bail!("connection to {} is no longer usable", self.endpoint.display())
        };
        let task = write_all (stream, frame.to_vec())
            .and_then (move |(stream, _)| read_exact (stream, vec![0_u8; response_len]));
        let result = self.core.run (
            Timeout::new (task, self.timeout).map_err (timeout_to_io)
        );
        match result {
            Ok((stream, response)) => {
                self.stream = Some(stream);
                Ok(response)
            },
            Err(ref error) if error.kind() == io::ErrorKind::UnexpectedEof =>
                Err(ErrorKind::ShortRead (response_len).into()),
            Err(ref error) if error.kind() == io::ErrorKind::TimedOut =>
                Err(ErrorKind::TimedOut.into()),
            Err(error) => Err(error.into())
        }
    }

    /// Shuts the connection down. Dropping the session has the same effect.
    pub fn close (self) {
        drop (self)
    }
}

impl Drop for Session {
    fn drop (&mut self) {
        if let Some(stream) = self.stream.take() {
            // The peer may already be gone, nothing useful to do about it.
            let _ = stream.shutdown (Shutdown::Both);
        }
        debug!("closed connection to {}", self.endpoint.display());
    }
}

fn timeout_to_io (error: timeout::Error<io::Error>) -> io::Error {
    if error.is_elapsed() {
        return io::ErrorKind::TimedOut.into()
    }
    match error.into_inner() {
        Some(error) => error,
        None => io::Error::new (io::ErrorKind::Other, "timer failure")
    }
}
