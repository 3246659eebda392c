//! MDIO (Management Data Input/Output) bus interface
//!
//! The FEPHY hangs off a narrow register-oriented management bus that
//! provides atomic 16-bit register reads and writes. This module defines
//! the trait the driver consumes; the transport itself (an MDIO/SMI
//! engine in the SoC's MAC) is an external collaborator and supplies the
//! implementation.

use crate::error::Result;

/// Maximum valid PHY address (5-bit field)
pub const MAX_PHY_ADDR: u8 = 31;

/// Maximum valid register address (5-bit field)
pub const MAX_REG_ADDR: u8 = 31;

/// Trait for MDIO bus operations
///
/// This trait can be implemented by different backends, allowing the
/// driver to work with various MDIO implementations (and with a mock bus
/// in host tests).
///
/// Implementations do not retry: a failed transaction is reported as a
/// [`BusError`](crate::error::BusError) and the driver propagates it
/// immediately to the caller of the running sequence.
pub trait MdioBus {
    /// Read a PHY register
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16>;

    /// Write a PHY register
    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()>;
}
