//! Testing utilities and mock implementations
//!
//! Mock implementations for exercising the driver on the host without
//! hardware access: a shareable MDIO bus with an ordered write log and
//! fault injection, a wake line that snapshots device state at each
//! controller call (for cross-device ordering assertions), and a
//! platform interrupt provider.
//!
//! Only available when running `cargo test`.

#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::string::{String, ToString};
use std::vec::Vec;

use crate::error::{BusError, ProbeError, ProbeResult, Result};
use crate::genphy::phy_reg;
use crate::mdio::MdioBus;
use crate::power::{WakeIrqProvider, WakeLine};
use crate::regs::reg;

// =============================================================================
// Mock MDIO Bus
// =============================================================================

#[derive(Debug, Default, PartialEq)]
struct MockMdioInner {
    /// Register values: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// Record of writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
    /// Record of reads: (phy_addr, reg_addr)
    read_log: RefCell<Vec<(u8, u8)>>,
    /// Write attempts so far (failed attempts count, but are not logged)
    write_attempts: RefCell<usize>,
    /// Fail the nth write attempt (0-based) with the given error
    fail_write: RefCell<Option<(usize, BusError)>>,
    /// Fail the nth read attempt (0-based) with the given error
    read_attempts: RefCell<usize>,
    fail_read: RefCell<Option<(usize, BusError)>>,
}

/// Mock MDIO bus for testing register sequences without hardware
///
/// Cloning produces another handle to the same bus, so a mock peripheral
/// (e.g. [`MockWakeLine`]) can observe register state while the driver
/// holds the `&mut` used for transactions.
///
/// # Example
///
/// ```ignore
/// let mut mdio = MockMdioBus::new();
/// wol::enable(&mut mdio, 0, &addr).unwrap();
/// assert_eq!(mdio.writes().last().unwrap().2, 0xE00);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MockMdioBus {
    inner: Rc<MockMdioInner>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.inner
            .registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
    }

    /// Get the current value of a register (for test verification)
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.inner
            .registers
            .borrow()
            .get(&(phy_addr, reg_addr))
            .copied()
    }

    /// Get all writes that have been made, in order
    pub fn writes(&self) -> Vec<(u8, u8, u16)> {
        self.inner.write_log.borrow().clone()
    }

    /// Get all reads that have been made, in order
    pub fn reads(&self) -> Vec<(u8, u8)> {
        self.inner.read_log.borrow().clone()
    }

    /// Clear the write log (the attempt counter keeps running)
    pub fn clear_writes(&self) {
        self.inner.write_log.borrow_mut().clear();
    }

    /// Fail the nth write attempt (0-based, counted from bus creation)
    pub fn fail_write_at(&self, attempt: usize, err: BusError) {
        *self.inner.fail_write.borrow_mut() = Some((attempt, err));
    }

    /// Fail the nth read attempt (0-based, counted from bus creation)
    pub fn fail_read_at(&self, attempt: usize, err: BusError) {
        *self.inner.fail_read.borrow_mut() = Some((attempt, err));
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        let attempt = {
            let mut counter = self.inner.read_attempts.borrow_mut();
            let n = *counter;
            *counter += 1;
            n
        };
        if let Some((fail_at, err)) = *self.inner.fail_read.borrow() {
            if attempt == fail_at {
                return Err(err.into());
            }
        }

        self.inner.read_log.borrow_mut().push((phy_addr, reg_addr));

        // Return from register map (default 0 if not set)
        Ok(self
            .inner
            .registers
            .borrow()
            .get(&(phy_addr, reg_addr))
            .copied()
            .unwrap_or(0))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        let attempt = {
            let mut counter = self.inner.write_attempts.borrow_mut();
            let n = *counter;
            *counter += 1;
            n
        };
        if let Some((fail_at, err)) = *self.inner.fail_write.borrow() {
            if attempt == fail_at {
                return Err(err.into());
            }
        }

        // Log the write
        self.inner
            .write_log
            .borrow_mut()
            .push((phy_addr, reg_addr, value));

        // Actually update the register
        self.inner
            .registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);

        Ok(())
    }
}

// =============================================================================
// Mock Wake Line
// =============================================================================

/// Interrupt-controller calls observed by [`MockWakeLine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeLineCall {
    Enable,
    Disable,
    SetWakeCapable(bool),
}

/// One recorded call with the device register state at call time
///
/// Snapshotting the interrupt mask and BMCR makes ordering between bus
/// sequences and interrupt-controller calls assertable: e.g. suspend
/// must have unmasked the wake sources (mask = 0xE00) before enabling
/// the line, but must not yet have powered the device down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeLineEvent {
    pub call: WakeLineCall,
    /// Interrupt mask register value when the call happened
    pub int_mask: u16,
    /// BMCR value when the call happened
    pub bmcr: u16,
}

/// Mock wake interrupt line recording controller calls
#[derive(Debug, Clone, PartialEq)]
pub struct MockWakeLine {
    bus: MockMdioBus,
    phy_addr: u8,
    events: Rc<RefCell<Vec<WakeLineEvent>>>,
}

impl MockWakeLine {
    /// Create a line observing the given bus handle
    pub fn new(bus: MockMdioBus, phy_addr: u8) -> Self {
        Self {
            bus,
            phy_addr,
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Shared handle to the event log (usable after the line is moved
    /// into the driver)
    pub fn events_handle(&self) -> Rc<RefCell<Vec<WakeLineEvent>>> {
        Rc::clone(&self.events)
    }

    fn record(&self, call: WakeLineCall) {
        let int_mask = self
            .bus
            .get_register(self.phy_addr, reg::INT_MASK)
            .unwrap_or(0);
        let bmcr = self
            .bus
            .get_register(self.phy_addr, phy_reg::BMCR)
            .unwrap_or(0);
        self.events.borrow_mut().push(WakeLineEvent {
            call,
            int_mask,
            bmcr,
        });
    }
}

impl WakeLine for MockWakeLine {
    fn enable(&mut self) {
        self.record(WakeLineCall::Enable);
    }

    fn disable(&mut self) {
        self.record(WakeLineCall::Disable);
    }

    fn set_wake_capable(&mut self, enabled: bool) {
        self.record(WakeLineCall::SetWakeCapable(enabled));
    }
}

// =============================================================================
// Mock IRQ Provider
// =============================================================================

/// Mock platform interrupt provider
#[derive(Debug, Default)]
pub struct MockIrqProvider {
    line: Option<MockWakeLine>,
    deferred: bool,
    request_failed: bool,
    /// Resource names that were requested, in order
    pub requested: Vec<String>,
}

impl MockIrqProvider {
    /// Platform with the wake line ready
    pub fn with_line(line: MockWakeLine) -> Self {
        Self {
            line: Some(line),
            ..Self::default()
        }
    }

    /// Platform without a wake resource configured
    pub fn without_line() -> Self {
        Self::default()
    }

    /// Platform whose wake resource is not yet available
    pub fn deferred() -> Self {
        Self {
            deferred: true,
            ..Self::default()
        }
    }

    /// Platform whose wake resource exists but cannot be requested
    pub fn request_failing() -> Self {
        Self {
            request_failed: true,
            ..Self::default()
        }
    }
}

impl WakeIrqProvider for MockIrqProvider {
    type Line = MockWakeLine;

    fn request(&mut self, name: &str) -> ProbeResult<Option<MockWakeLine>> {
        self.requested.push(name.to_string());
        if self.deferred {
            return Err(ProbeError::Deferred);
        }
        if self.request_failed {
            return Err(ProbeError::IrqRequestFailed);
        }
        Ok(self.line.take())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;

    #[test]
    fn mock_mdio_read_write() {
        let mut mdio = MockMdioBus::new();

        // Initially reads 0
        assert_eq!(mdio.read(0, 1).unwrap(), 0);

        // Set a value
        mdio.set_register(0, 1, 0x1234);
        assert_eq!(mdio.read(0, 1).unwrap(), 0x1234);

        // Write updates the value
        mdio.write(0, 1, 0x5678).unwrap();
        assert_eq!(mdio.read(0, 1).unwrap(), 0x5678);

        // Write is logged
        assert_eq!(mdio.writes(), vec![(0, 1, 0x5678)]);
    }

    #[test]
    fn mock_mdio_clone_shares_state() {
        let mut mdio = MockMdioBus::new();
        let observer = mdio.clone();

        mdio.write(0, reg::INT_MASK, 0xE00).unwrap();
        assert_eq!(observer.get_register(0, reg::INT_MASK), Some(0xE00));
        assert_eq!(observer.writes().len(), 1);
    }

    #[test]
    fn mock_mdio_fault_injection_counts_attempts() {
        let mut mdio = MockMdioBus::new();
        mdio.fail_write_at(1, BusError::Fault);

        assert!(mdio.write(0, 1, 0xA).is_ok());
        assert!(mdio.write(0, 1, 0xB).is_err());
        // A failed attempt still advances the counter, so the next write
        // goes through and only successful writes are logged.
        assert!(mdio.write(0, 1, 0xC).is_ok());
        assert_eq!(mdio.writes(), vec![(0, 1, 0xA), (0, 1, 0xC)]);
    }

    #[test]
    fn mock_wake_line_snapshots_registers() {
        let bus = MockMdioBus::new();
        bus.set_register(0, reg::INT_MASK, 0xE00);

        let mut line = MockWakeLine::new(bus, 0);
        let events = line.events_handle();

        line.enable();

        let recorded = events.borrow();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].call, WakeLineCall::Enable);
        assert_eq!(recorded[0].int_mask, 0xE00);
        assert_eq!(recorded[0].bmcr, 0);
    }

    #[test]
    fn mock_provider_defers() {
        let mut provider = MockIrqProvider::deferred();
        assert_eq!(provider.request("wol_irq"), Err(ProbeError::Deferred));
        assert_eq!(provider.requested, vec!["wol_irq".to_string()]);
    }

    #[test]
    fn mock_provider_hands_out_line_once() {
        let bus = MockMdioBus::new();
        let mut provider = MockIrqProvider::with_line(MockWakeLine::new(bus, 0));

        assert!(provider.request("wol_irq").unwrap().is_some());
        assert!(provider.request("wol_irq").unwrap().is_none());
    }
}
