use std::collections::VecDeque;

use ev12aq600_driver::firmware::{
    fpga::{ACK, REG_READ_MODE_ENABLE},
    frame::{READ_FRAME_LENGTH, WRITE_FRAME_LENGTH},
};

use crate::FPGAEmulator;

/// UART slave of the FPGA design.
///
/// Bytes written by the host are assembled into frames, which may arrive split over several
/// writes. Every complete frame is executed on the [`FPGAEmulator`] and its response is queued
/// for the host.
pub struct UartEmulator {
    fpga: FPGAEmulator,
    frame: Vec<u8>,
    tx: VecDeque<u8>,
    num_frames: usize,
    broken: bool,
}

impl UartEmulator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fpga: FPGAEmulator::new(),
            frame: Vec::with_capacity(WRITE_FRAME_LENGTH),
            tx: VecDeque::new(),
            num_frames: 0,
            broken: false,
        }
    }

    /// Stops answering. Received bytes are dropped until [`UartEmulator::repair`].
    pub fn break_down(&mut self) {
        self.broken = true;
    }

    pub fn repair(&mut self) {
        self.broken = false;
    }

    #[must_use]
    pub const fn is_broken(&self) -> bool {
        self.broken
    }

    #[must_use]
    pub const fn fpga(&self) -> &FPGAEmulator {
        &self.fpga
    }

    pub fn fpga_mut(&mut self) -> &mut FPGAEmulator {
        &mut self.fpga
    }

    #[must_use]
    pub const fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// Number of response bytes the host has not read yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tx.len()
    }

    /// Queues bytes for the host that do not belong to any frame.
    pub fn inject(&mut self, bytes: &[u8]) {
        self.tx.extend(bytes);
    }

    pub fn receive(&mut self, bytes: &[u8]) {
        if self.broken {
            self.frame.clear();
            return;
        }
        bytes.iter().for_each(|&b| {
            self.frame.push(b);
            if self.frame.len() == self.frame_length() {
                self.execute();
            }
        });
    }

    pub fn transmit(&mut self, buf: &mut [u8]) -> usize {
        let n = buf.len().min(self.tx.len());
        buf.iter_mut()
            .zip(self.tx.drain(..n))
            .for_each(|(dst, src)| *dst = src);
        n
    }

    fn frame_length(&self) -> usize {
        match self.frame.first() {
            Some(&b) if b & 0x80 != 0 => READ_FRAME_LENGTH,
            _ => WRITE_FRAME_LENGTH,
        }
    }

    fn execute(&mut self) {
        let addr = u16::from_be_bytes([self.frame[0], self.frame[1]]);
        if addr & REG_READ_MODE_ENABLE != 0 {
            let data = self.fpga.read(addr & !REG_READ_MODE_ENABLE);
            self.tx.extend(data.to_be_bytes());
        } else {
            let data = u32::from_be_bytes([
                self.frame[2],
                self.frame[3],
                self.frame[4],
                self.frame[5],
            ]);
            self.fpga.write(addr, data);
        }
        self.tx.push_back(ACK);
        self.frame.clear();
        self.num_frames += 1;
    }
}

impl Default for UartEmulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use ev12aq600_driver::firmware::frame::{encode_read, encode_write, RegisterAddress};

    use super::*;

    fn recv_all(uart: &mut UartEmulator) -> Vec<u8> {
        let mut buf = vec![0x00; uart.pending()];
        let n = uart.transmit(&mut buf);
        buf.truncate(n);
        buf
    }

    #[test]
    fn write_frame() -> anyhow::Result<()> {
        let mut uart = UartEmulator::new();

        uart.receive(&encode_write(RegisterAddress::new(15)?, 0x0000_1001));

        assert_eq!(vec![ACK], recv_all(&mut uart));
        assert_eq!(0x0000_1001, uart.fpga().peek(15));
        assert_eq!(1, uart.num_frames());
        Ok(())
    }

    #[test]
    fn read_frame() -> anyhow::Result<()> {
        let mut uart = UartEmulator::new();
        uart.fpga_mut().set_status(0x1234_5678);

        uart.receive(&encode_read(RegisterAddress::new(255)?));

        assert_eq!(vec![0x12, 0x34, 0x56, 0x78, ACK], recv_all(&mut uart));
        Ok(())
    }

    #[rstest::rstest]
    #[case(&[1, 5])]
    #[case(&[2, 2, 2])]
    #[case(&[1, 1, 1, 1, 1, 1])]
    fn split_frame(#[case] chunks: &[usize]) -> anyhow::Result<()> {
        let mut uart = UartEmulator::new();
        let frame = encode_write(RegisterAddress::new(2)?, 0x0000_0004);

        let mut rest = &frame[..];
        chunks.iter().for_each(|&n| {
            assert_eq!(0, uart.pending());
            let (head, tail) = rest.split_at(n);
            uart.receive(head);
            rest = tail;
        });

        assert_eq!(vec![ACK], recv_all(&mut uart));
        assert_eq!(0x0000_0004, uart.fpga().peek(2));
        Ok(())
    }

    #[test]
    fn back_to_back() -> anyhow::Result<()> {
        let mut uart = UartEmulator::new();
        let mut bytes = encode_write(RegisterAddress::new(0)?, 0x0000_0002).to_vec();
        bytes.extend(encode_read(RegisterAddress::new(0)?));

        uart.receive(&bytes);

        assert_eq!(
            vec![ACK, 0x00, 0x00, 0x00, 0x02, ACK],
            recv_all(&mut uart)
        );
        assert_eq!(2, uart.num_frames());
        Ok(())
    }

    #[test]
    fn broken() -> anyhow::Result<()> {
        let mut uart = UartEmulator::new();
        uart.break_down();
        assert!(uart.is_broken());

        uart.receive(&encode_write(RegisterAddress::new(2)?, 0x0000_0004));
        assert_eq!(0, uart.pending());
        assert_eq!(0x0000_0000, uart.fpga().peek(2));

        uart.repair();
        uart.receive(&encode_write(RegisterAddress::new(2)?, 0x0000_0004));
        assert_eq!(vec![ACK], recv_all(&mut uart));
        Ok(())
    }

    #[test]
    fn inject() {
        let mut uart = UartEmulator::new();
        uart.inject(&[0x12, 0x34]);
        assert_eq!(2, uart.pending());

        let mut buf = [0x00; 1];
        assert_eq!(1, uart.transmit(&mut buf));
        assert_eq!([0x12], buf);
        assert_eq!(1, uart.pending());
    }
}
