//! LMX2592 programming tables.
//!
//! Each word is `addr[22:16] | data[15:0]` with bit 23 cleared for a write. The first word
//! resets the part and the last one starts the VCO calibration, so a table is always sent as
//! a whole in one SPI burst.

/// Output frequency of the external PLL, which clocks the ADC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PllPreset {
    /// 6.4 GHz ADC master clock.
    Clk6400MHz,
    /// 6.25 GHz ADC master clock.
    Clk6250MHz,
    /// 5 GHz ADC master clock.
    Clk5000MHz,
}

impl PllPreset {
    /// The words to queue, in order.
    #[must_use]
    pub const fn words(self) -> &'static [u32] {
        match self {
            PllPreset::Clk6400MHz => &LMX2592_6400,
            PllPreset::Clk6250MHz => &LMX2592_6250,
            PllPreset::Clk5000MHz => &LMX2592_5000,
        }
    }
}

const LMX2592_WORDS: usize = 44;

const LMX2592_6400: [u32; LMX2592_WORDS] = [
    0x00221E, 0x400077, 0x3E0000, 0x3D0001, 0x3B0000, 0x3003FC, 0x2F08CF, 0x2E17A3, 0x2D0000,
    0x2C0000, 0x2B0000, 0x2A0000, 0x2903E8, 0x280000, 0x278204, 0x260040, 0x254000, 0x240811,
    0x23021F, 0x22C3EA, 0x212A0A, 0x20210A, 0x1F0401, 0x1E0034, 0x1D0084, 0x1C2924, 0x190000,
    0x180509, 0x178842, 0x162300, 0x14012C, 0x130965, 0x0E018C, 0x0D4000, 0x0C7001, 0x0B0018,
    0x0A10D8, 0x090302, 0x081084, 0x0728B2, 0x041943, 0x020500, 0x010808, 0x00221C,
];

const LMX2592_6250: [u32; LMX2592_WORDS] = [
    0x00221E, 0x400077, 0x3E0000, 0x3D0001, 0x3B0000, 0x3003FC, 0x2F08CF, 0x2E17A3, 0x2D00FA,
    0x2C0000, 0x2B0000, 0x2A0000, 0x2903E8, 0x280000, 0x278204, 0x26003E, 0x254000, 0x240811,
    0x23021F, 0x22C3EA, 0x212A0A, 0x20210A, 0x1F0401, 0x1E0034, 0x1D0084, 0x1C2924, 0x190000,
    0x180509, 0x178842, 0x162300, 0x14012C, 0x130965, 0x0E018C, 0x0D4000, 0x0C7001, 0x0B0018,
    0x0A10D8, 0x090302, 0x081084, 0x0728B2, 0x041943, 0x020500, 0x010808, 0x00221C,
];

const LMX2592_5000: [u32; LMX2592_WORDS] = [
    0x00221E, 0x400077, 0x3E0000, 0x3D0001, 0x3B0000, 0x3003FC, 0x2F08CF, 0x2E17A3, 0x2D0000,
    0x2C0000, 0x2B0000, 0x2A0000, 0x2903E8, 0x280000, 0x278204, 0x260032, 0x254000, 0x240011,
    0x23021F, 0x22C3EA, 0x212A0A, 0x20210A, 0x1F0401, 0x1E0034, 0x1D0084, 0x1C2924, 0x190000,
    0x180509, 0x178842, 0x162300, 0x14012C, 0x130965, 0x0E018C, 0x0D4000, 0x0C7001, 0x0B0018,
    0x0A10D8, 0x090302, 0x081084, 0x0728B2, 0x041943, 0x020500, 0x010808, 0x00221C,
];

#[cfg(test)]
mod tests {
    use super::*;

    use crate::firmware::fpga::SPI_PLL_WORD_MASK;

    #[rstest::rstest]
    #[case(PllPreset::Clk6400MHz)]
    #[case(PllPreset::Clk6250MHz)]
    #[case(PllPreset::Clk5000MHz)]
    fn words(#[case] preset: PllPreset) {
        let words = preset.words();
        assert_eq!(LMX2592_WORDS, words.len());
        assert_eq!(Some(&0x00221E), words.first());
        assert_eq!(Some(&0x00221C), words.last());
        assert!(words.iter().all(|&w| w & !SPI_PLL_WORD_MASK == 0));
        assert!(words.iter().all(|&w| w & 0x80_0000 == 0));
    }

    #[test]
    fn presets_differ_only_in_divider_registers() {
        let diff = |a: PllPreset, b: PllPreset| {
            a.words()
                .iter()
                .zip(b.words())
                .filter(|(x, y)| x != y)
                .map(|(x, _)| x >> 16)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            vec![0x2D, 0x26],
            diff(PllPreset::Clk6400MHz, PllPreset::Clk6250MHz)
        );
        assert_eq!(
            vec![0x26, 0x24],
            diff(PllPreset::Clk6400MHz, PllPreset::Clk5000MHz)
        );
    }
}
