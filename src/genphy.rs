//! Generic IEEE 802.3 PHY helpers
//!
//! Standard Clause 22 register sequences the FEPHY driver layers on top
//! of: soft reset, auto-negotiation bring-up and the BMCR power-down
//! rail control used by suspend/resume. Chip-specific sequencing lives
//! in the rest of the crate; nothing here is Rockchip-specific.

use crate::error::Result;
use crate::mdio::MdioBus;

/// Maximum soft-reset polling iterations
const RESET_MAX_ATTEMPTS: u32 = 1000;

/// Standard PHY register addresses (IEEE 802.3 Clause 22)
pub mod phy_reg {
    /// Basic Mode Control Register
    pub const BMCR: u8 = 0;
    /// Basic Mode Status Register
    pub const BMSR: u8 = 1;
    /// PHY Identifier 1
    pub const PHYIDR1: u8 = 2;
    /// PHY Identifier 2
    pub const PHYIDR2: u8 = 3;
}

/// BMCR (Basic Mode Control Register) bits
pub mod bmcr {
    /// Soft reset
    pub const RESET: u16 = 1 << 15;
    /// Speed select (100 Mbps if set)
    pub const SPEED_100: u16 = 1 << 13;
    /// Auto-negotiation enable
    pub const AN_ENABLE: u16 = 1 << 12;
    /// Power down (analog front-end off)
    pub const POWER_DOWN: u16 = 1 << 11;
    /// Isolate
    pub const ISOLATE: u16 = 1 << 10;
    /// Restart auto-negotiation
    pub const AN_RESTART: u16 = 1 << 9;
    /// Duplex mode (full duplex if set)
    pub const DUPLEX_FULL: u16 = 1 << 8;
}

/// Perform a soft reset and wait for the RESET bit to self-clear
///
/// Polls up to a bounded number of iterations; a PHY that never clears
/// the bit is left as-is rather than reported as an error.
pub fn soft_reset<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
    mdio.write(phy_addr, phy_reg::BMCR, bmcr::RESET)?;

    for _ in 0..RESET_MAX_ATTEMPTS {
        let val = mdio.read(phy_addr, phy_reg::BMCR)?;
        if (val & bmcr::RESET) == 0 {
            break;
        }
        core::hint::spin_loop();
    }
    Ok(())
}

/// Enable and restart auto-negotiation
pub fn config_aneg<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
    let val = mdio.read(phy_addr, phy_reg::BMCR)?;
    mdio.write(
        phy_addr,
        phy_reg::BMCR,
        (val | bmcr::AN_ENABLE | bmcr::AN_RESTART) & !bmcr::ISOLATE,
    )
}

/// Power down the analog front-end (generic suspend)
pub fn suspend<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
    let val = mdio.read(phy_addr, phy_reg::BMCR)?;
    mdio.write(phy_addr, phy_reg::BMCR, val | bmcr::POWER_DOWN)
}

/// Re-power the analog front-end (generic resume)
pub fn resume<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<()> {
    let val = mdio.read(phy_addr, phy_reg::BMCR)?;
    mdio.write(phy_addr, phy_reg::BMCR, val & !bmcr::POWER_DOWN)
}

/// Read the PHY identifier
///
/// Returns a 32-bit value: `(PHYIDR1 << 16) | PHYIDR2`
pub fn read_phy_id<M: MdioBus>(mdio: &mut M, phy_addr: u8) -> Result<u32> {
    let id1 = mdio.read(phy_addr, phy_reg::PHYIDR1)? as u32;
    let id2 = mdio.read(phy_addr, phy_reg::PHYIDR2)? as u32;
    Ok((id1 << 16) | id2)
}

// =============================================================================
// Unit Tests
// =============================================================================
