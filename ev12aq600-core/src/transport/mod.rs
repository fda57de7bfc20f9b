mod error;

use std::time::Duration;

pub use error::TransportError;

/// A byte channel to the FPGA UART slave.
///
/// The driver assumes it is the only user of the channel. Request and response are matched by
/// position only, so a single transport must never be shared by concurrent sessions.
pub trait Transport: Send {
    /// Opens the transport.
    fn open(&mut self) -> Result<(), TransportError>;

    /// Closes the transport.
    fn close(&mut self) -> Result<(), TransportError>;

    /// Writes raw bytes to the device.
    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError>;

    /// Reads into `buf`, blocking until it is full or `timeout` elapses.
    ///
    /// Returns the number of bytes actually read, which may be less than `buf.len()`.
    fn read(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize, TransportError>;

    /// Returns the number of received bytes that have not been read yet.
    fn bytes_available(&mut self) -> Result<usize, TransportError>;

    /// Checks if the transport is open.
    #[must_use]
    fn is_open(&self) -> bool;

    /// Reads every byte that is currently buffered without waiting for more.
    fn drain(&mut self) -> Result<Vec<u8>, TransportError> {
        let available = self.bytes_available()?;
        if available == 0 {
            return Ok(Vec::new());
        }
        let mut buf = vec![0x00; available];
        let n = self.read(&mut buf, Duration::ZERO)?;
        buf.truncate(n);
        Ok(buf)
    }
}

impl Transport for Box<dyn Transport> {
    fn open(&mut self) -> Result<(), TransportError> {
        self.as_mut().open()
    }

    fn close(&mut self) -> Result<(), TransportError> {
        self.as_mut().close()
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.as_mut().write(bytes)
    }

    fn read(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize, TransportError> {
        self.as_mut().read(buf, timeout)
    }

    fn bytes_available(&mut self) -> Result<usize, TransportError> {
        self.as_mut().bytes_available()
    }

    fn is_open(&self) -> bool {
        self.as_ref().is_open()
    }

    fn drain(&mut self) -> Result<Vec<u8>, TransportError> {
        self.as_mut().drain()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    #[derive(Default)]
    struct Loopback {
        is_open: bool,
        queue: VecDeque<u8>,
    }

    impl Transport for Loopback {
        fn open(&mut self) -> Result<(), TransportError> {
            self.is_open = true;
            Ok(())
        }

        fn close(&mut self) -> Result<(), TransportError> {
            self.is_open = false;
            Ok(())
        }

        fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
            if !self.is_open {
                return Err(TransportError::closed());
            }
            self.queue.extend(bytes);
            Ok(())
        }

        fn read(&mut self, buf: &mut [u8], _: Duration) -> Result<usize, TransportError> {
            let n = buf.len().min(self.queue.len());
            buf.iter_mut()
                .zip(self.queue.drain(..n))
                .for_each(|(dst, src)| *dst = src);
            Ok(n)
        }

        fn bytes_available(&mut self) -> Result<usize, TransportError> {
            Ok(self.queue.len())
        }

        fn is_open(&self) -> bool {
            self.is_open
        }
    }

    #[test]
    fn drain_reads_everything_buffered() -> anyhow::Result<()> {
        let mut transport = Loopback::default();
        transport.open()?;
        transport.write(&[0x01, 0x02, 0xAC])?;

        assert_eq!(vec![0x01, 0x02, 0xAC], transport.drain()?);
        assert!(transport.drain()?.is_empty());
        Ok(())
    }

    #[test]
    fn boxed() -> anyhow::Result<()> {
        let mut transport: Box<dyn Transport> = Box::new(Loopback::default());
        assert!(!transport.is_open());
        assert_eq!(Err(TransportError::closed()), transport.write(&[0x00]));

        transport.open()?;
        assert!(transport.is_open());
        transport.write(&[0x12, 0x34])?;
        assert_eq!(2, transport.bytes_available()?);

        let mut buf = [0x00; 4];
        assert_eq!(2, transport.read(&mut buf, Duration::from_millis(1))?);
        assert_eq!([0x12, 0x34, 0x00, 0x00], buf);

        transport.close()?;
        assert!(!transport.is_open());
        Ok(())
    }
}
