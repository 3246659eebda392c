//! Test-mode bank controller
//!
//! The extended register banks are not part of the flat MDIO address
//! space. They are reached by switching the PHY into test mode (which
//! changes the meaning of several flat registers) and issuing indirect
//! writes through the TSTWRITE/TSTCNTL register pair.
//!
//! Test mode is modeled as a capability token: [`TestMode`] can only be
//! obtained by entering test mode, and banked writes are only possible
//! through it. Prefer [`with_test_mode`], which guarantees the device is
//! returned to normal register semantics even when a banked write fails
//! mid-sequence.

use crate::error::Result;
use crate::mdio::MdioBus;
use crate::regs::{Bank, reg, tstcntl};

/// TSTCNTL pulse sequence latching the test-mode transition
///
/// The double disable/enable pulse is required by the hardware: a single
/// pulse may be ignored when the PHY is in an unknown prior state.
const ENTER_SEQUENCE: [u16; 4] = [
    tstcntl::DISABLE,
    tstcntl::ENABLE,
    tstcntl::DISABLE,
    tstcntl::ENABLE,
];

/// Capability token proving the PHY is in test mode
///
/// While the token is live, direct access to the flat registers whose
/// meaning changes under test mode must not be performed; the token
/// borrows the bus mutably for exactly that reason.
#[derive(Debug)]
pub struct TestMode<'a, M: MdioBus> {
    mdio: &'a mut M,
    phy_addr: u8,
}

impl<'a, M: MdioBus> TestMode<'a, M> {
    /// Switch the PHY into test mode
    ///
    /// Issues the four-write TSTCNTL pulse sequence. Any failed write
    /// aborts the sequence; the device is then in an undefined test-mode
    /// state and the caller must treat the whole operation as failed.
    pub fn enter(mdio: &'a mut M, phy_addr: u8) -> Result<Self> {
        for word in ENTER_SEQUENCE {
            mdio.write(phy_addr, reg::TSTCNTL, word)?;
        }
        Ok(Self { mdio, phy_addr })
    }

    /// Write a banked register
    ///
    /// Issues exactly two writes: the value to TSTWRITE, then the write
    /// command word (bank and offset) to TSTCNTL.
    pub fn write_banked(&mut self, bank: Bank, offset: u8, value: u16) -> Result<()> {
        self.mdio.write(self.phy_addr, reg::TSTWRITE, value)?;
        self.mdio
            .write(self.phy_addr, reg::TSTCNTL, tstcntl::write_cmd(bank, offset))
    }

    /// Return the PHY to normal register semantics
    pub fn exit(self) -> Result<()> {
        self.mdio
            .write(self.phy_addr, reg::TSTCNTL, tstcntl::DISABLE)
    }
}

/// Run `f` with the PHY in test mode, always attempting the exit write
///
/// Enters test mode, runs the banked-write body, then writes the
/// test-mode disable word regardless of whether the body succeeded. When
/// both the body and the exit write fail, the body's error is the one
/// reported.
pub fn with_test_mode<M, F>(mdio: &mut M, phy_addr: u8, f: F) -> Result<()>
where
    M: MdioBus,
    F: FnOnce(&mut TestMode<'_, M>) -> Result<()>,
{
    let mut tm = TestMode::enter(mdio, phy_addr)?;
    let body = f(&mut tm);
    let exit = tm.exit();
    body.and(exit)
}

// =============================================================================
// Unit Tests
// =============================================================================
