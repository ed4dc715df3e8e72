//! Index derivation from branch addresses.
//!
//! All schemes index their tables with bits taken from the word-aligned
//! branch address after truncation to 32 bits. The truncation is explicit
//! modular arithmetic so the behavior is identical on any native width.

use crate::history::HistoryRegister;

/// Mask selecting the low 32 bits of an address.
pub(crate) const ADDR_MASK: u64 = 0x0000_0000_FFFF_FFFF;

/// Derive a `bits`-wide table index from a branch address: drop the low two
/// bits (word alignment), keep the low 32 bits, then mask to `bits`.
pub fn pc_index(addr: u64, bits: u32) -> usize {
    let word = (addr >> 2) & ADDR_MASK;
    (word & ((1u64 << bits) - 1)) as usize
}

/// Derive a history-mixed index: the top `n` bits of the plain `bits`-wide
/// index are XORed with the `n`-bit global history value, and the low
/// `bits - n` index bits pass through unchanged. With an empty history
/// register this degenerates to [`pc_index`].
pub fn mixed_index(addr: u64, bits: u32, ghr: &HistoryRegister) -> usize {
    let pc = pc_index(addr, bits);
    let n = ghr.len() as u32;
    if n == 0 {
        return pc;
    }
    let low_bits = bits - n;
    let top = (pc >> low_bits) ^ ghr.value();
    let bottom = pc & ((1usize << low_bits) - 1);
    (top << low_bits) | bottom
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::branch::Outcome;

    #[test]
    fn low_two_bits_are_dropped() {
        assert_eq!(pc_index(0x1000, 12), 0x1000 >> 2);
        assert_eq!(pc_index(0x1001, 12), 0x1000 >> 2);
        assert_eq!(pc_index(0x1003, 12), 0x1000 >> 2);
    }

    #[test]
    fn address_is_truncated_to_32_bits() {
        // Bits above the low 32 never reach the index.
        assert_eq!(pc_index(0xDEAD_0000_0000_1000, 20), pc_index(0x1000, 20));
    }

    #[test]
    fn index_is_masked_to_width() {
        assert_eq!(pc_index(0xFFFF_FFFF, 4), (0xFFFF_FFFFu64 >> 2) as usize & 0xf);
        assert!(pc_index(u64::MAX, 10) < (1 << 10));
    }

    #[test]
    fn empty_history_degenerates_to_plain_index() {
        let ghr = HistoryRegister::new(0);
        for addr in [0x1000u64, 0xab12_0024, 0xffff_fffc] {
            assert_eq!(mixed_index(addr, 12, &ghr), pc_index(addr, 12));
        }
    }

    #[test]
    fn history_mixes_into_the_top_bits() {
        let mut ghr = HistoryRegister::new(2);
        ghr.record(Outcome::T);
        ghr.record(Outcome::T);
        assert_eq!(ghr.value(), 0b11);

        // addr >> 2 = 0b0100_0000, index bits 8: top 2 bits are 0b01.
        let addr = 0b0100_0000_00u64;
        let pc = pc_index(addr, 8);
        assert_eq!(pc, 0b0100_0000);
        let mixed = mixed_index(addr, 8, &ghr);
        assert_eq!(mixed, ((0b01 ^ 0b11) << 6) | (pc & 0b11_1111));
    }

    #[test]
    fn history_width_equal_to_index_width() {
        let mut ghr = HistoryRegister::new(4);
        ghr.record(Outcome::T);
        let addr = 0x34u64; // pc_index = 0xd
        assert_eq!(mixed_index(addr, 4, &ghr), 0xd ^ ghr.value());
    }
}
