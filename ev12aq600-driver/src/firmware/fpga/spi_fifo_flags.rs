bitflags::bitflags! {
    /// Flags of the SPI master FIFOs, read from register 9.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SpiFifoFlags: u32 {
        /// The input FIFO is full.
        const INPUT_FULL = 1 << 0;
        /// The output FIFO is empty.
        const OUTPUT_EMPTY = 1 << 1;
    }
}

impl SpiFifoFlags {
    /// Checks if read-back data is waiting in the output FIFO.
    #[must_use]
    pub const fn has_output(&self) -> bool {
        !self.contains(SpiFifoFlags::OUTPUT_EMPTY)
    }
}
