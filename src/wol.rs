//! Wake-on-LAN manager
//!
//! Programs the WOL bank match registers from the attached interface's
//! hardware address and gates the wake-interrupt sources in the flat
//! interrupt mask register. Banked programming runs as one scoped
//! test-mode unit; the mask write happens afterwards, back in normal
//! register semantics.

use crate::error::Result;
use crate::mdio::MdioBus;
use crate::regs::{Bank, int_mask, reg, wol};
use crate::testmode::with_test_mode;

/// 6-byte hardware (MAC) address of the attached network interface
pub type MacAddr = [u8; 6];

/// Pack two address bytes into one big-endian match word
const fn match_word(hi: u8, lo: u8) -> u16 {
    ((hi as u16) << 8) | lo as u16
}

/// Arm address-match wake-up for `hw_addr`
///
/// Writes the three match words (low word first), enables all match
/// patterns, then unmasks the wake-interrupt sources. A failure aborts
/// the sequence without rollback; the caller decides whether to retry
/// the whole sequence.
pub fn enable<M: MdioBus>(mdio: &mut M, phy_addr: u8, hw_addr: &MacAddr) -> Result<()> {
    with_test_mode(mdio, phy_addr, |tm| {
        tm.write_banked(Bank::Wol, wol::MATCH_LO, match_word(hw_addr[4], hw_addr[5]))?;
        tm.write_banked(Bank::Wol, wol::MATCH_MID, match_word(hw_addr[2], hw_addr[3]))?;
        tm.write_banked(Bank::Wol, wol::MATCH_HI, match_word(hw_addr[0], hw_addr[1]))?;
        tm.write_banked(Bank::Wol, wol::MATCH_CTRL, wol::MATCH_ALL)
    })?;

    mdio.write(phy_addr, reg::INT_MASK, int_mask::WOL_SOURCES)
}

/// Disarm address-match wake-up
///
/// Clears the match-enable mask (cheaper than clearing the stored
/// address, which a zero mask makes irrelevant), then masks the
/// wake-interrupt sources. Idempotent.
pub fn disable<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
    with_test_mode(mdio, phy_addr, |tm| {
        tm.write_banked(Bank::Wol, wol::MATCH_CTRL, wol::MATCH_NONE)
    })?;

    mdio.write(phy_addr, reg::INT_MASK, int_mask::NONE)
}

// =============================================================================
// Unit Tests
// =============================================================================
