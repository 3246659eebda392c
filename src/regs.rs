//! FEPHY register map
//!
//! The Rockchip integrated FEPHY is configured through a small set of
//! vendor registers in the flat MDIO address space plus five extended
//! register banks reachable only through the test-mode control/data
//! register pair. All addresses, bank indices and magic values live here
//! as a closed constant table so the protocol stays auditable and
//! testable in isolation.

/// FEPHY identifier read from PHYIDR1/PHYIDR2
///
/// Full ID: 0x06808101, matched exactly (no revision wildcard).
pub const FEPHY_ID: u32 = 0x0680_8101;
/// PHY ID mask (all bits significant)
pub const FEPHY_ID_MASK: u32 = 0xFFFF_FFFF;

// =============================================================================
// FEPHY Vendor-Specific Registers
// =============================================================================

/// FEPHY vendor-specific register addresses (flat MDIO space)
pub mod reg {
    /// Internal Control/Status Register
    pub const INTERNAL_CTRL_STATUS: u8 = 17;
    /// Test-mode control register (bank select / command)
    pub const TSTCNTL: u8 = 20;
    /// Test-mode read result register 1 (unused, banked reads not issued)
    pub const TSTREAD1: u8 = 21;
    /// Test-mode read result register 2 (unused, banked reads not issued)
    pub const TSTREAD2: u8 = 22;
    /// Test-mode write data register
    pub const TSTWRITE: u8 = 23;
    /// LED Control Register
    pub const LED_CTRL: u8 = 25;
    /// Interrupt Status Register (read to acknowledge)
    pub const INT_STATUS: u8 = 29;
    /// Interrupt Mask Register
    pub const INT_MASK: u8 = 30;
    /// Special Control/Status Register
    pub const SPECIAL_CTRL_STATUS: u8 = 31;
}

// =============================================================================
// Extended Register Banks
// =============================================================================

/// Extended register bank selector
///
/// Selected through the bank field of a TSTCNTL command word. Only
/// [`Bank::Dsp0`] and [`Bank::Wol`] are written by this driver; the other
/// banks exist architecturally but carry no sequencing here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Bank {
    /// DSP bank 0 (analog amplitude calibration)
    Dsp0 = 0,
    /// Wake-on-LAN match registers
    Wol = 1,
    /// Built-in self test
    Bist = 3,
    /// Analog front end
    Afe = 4,
    /// DSP bank 1
    Dsp1 = 5,
}

/// TSTCNTL (test-mode control register) encodings
pub mod tstcntl {
    use super::Bank;

    /// Enter test mode
    pub const ENABLE: u16 = 0x400;
    /// Leave test mode / idle command word
    pub const DISABLE: u16 = 0x0;

    /// Read command flag bits
    pub const RD: u16 = (1 << 15) | (1 << 10);
    /// Write command flag bits
    pub const WR: u16 = (1 << 14) | (1 << 10);

    /// Bank select field position
    pub const BANK_SHIFT: u16 = 11;
    /// Write-address field position
    pub const WRITE_ADDR_SHIFT: u16 = 0;
    /// Read-address field position
    pub const READ_ADDR_SHIFT: u16 = 5;

    /// Build the command word for a banked register write
    pub const fn write_cmd(bank: Bank, reg: u8) -> u16 {
        WR | ((bank as u16) << BANK_SHIFT) | ((reg as u16) << WRITE_ADDR_SHIFT)
    }

    /// Build the command word for a banked register read
    ///
    /// Defined for completeness of the command table; the driver issues
    /// no banked reads.
    pub const fn read_cmd(bank: Bank, reg: u8) -> u16 {
        RD | ((bank as u16) << BANK_SHIFT) | ((reg as u16) << READ_ADDR_SHIFT)
    }
}

// =============================================================================
// Banked register offsets and values
// =============================================================================

/// WOL bank ([`Bank::Wol`]) register offsets and values
pub mod wol {
    /// Match address bytes 5:4 (low word)
    pub const MATCH_LO: u8 = 0x0;
    /// Match address bytes 3:2 (middle word)
    pub const MATCH_MID: u8 = 0x1;
    /// Match address bytes 1:0 (high word)
    pub const MATCH_HI: u8 = 0x2;
    /// Match-enable control register
    pub const MATCH_CTRL: u8 = 0x3;

    /// All match patterns active
    pub const MATCH_ALL: u16 = 0xF;
    /// No match patterns active (stored addresses become irrelevant)
    pub const MATCH_NONE: u16 = 0x0;
}

/// DSP0 bank ([`Bank::Dsp0`]) register offsets and values
pub mod dsp0 {
    /// 100M amplitude control register (A7CFG)
    pub const A7CFG: u8 = 0x18;
    /// Amplitude calibration value applied at init
    pub const A7CFG_100M: u16 = 0xC;
}

// =============================================================================
// Flat register values
// =============================================================================

/// LED control values
pub mod led {
    /// LED configuration applied at init (hardware default is 0x7F)
    pub const CONFIG: u16 = 0x7AA;
}

/// Interrupt mask register values
pub mod int_mask {
    /// Wake-interrupt sources enabled
    pub const WOL_SOURCES: u16 = 0xE00;
    /// All interrupt sources disabled
    pub const NONE: u16 = 0x0;
}

// =============================================================================
// Unit Tests
// =============================================================================
