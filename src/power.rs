//! Power-state lifecycle types and wake-interrupt dispatch
//!
//! The driver core is synchronous and externally serialized; the one
//! asynchronous event is the wake interrupt fired by the PHY while the
//! system is suspended. That edge is handled in two stages: a cheap top
//! half raises a [`WakeLatch`] from interrupt context, and a worker later
//! calls [`Fephy::service_wake`](crate::Fephy::service_wake) to drain the
//! latch and acknowledge the device over the bus (a transaction that may
//! block, so it must never run in raw interrupt context).

use core::cell::Cell;

use critical_section::Mutex;

use crate::error::ProbeResult;

/// Platform name of the FEPHY wake interrupt resource
pub const WOL_IRQ_NAME: &str = "wol_irq";

// =============================================================================
// Power State
// =============================================================================

/// Lifecycle state of a PHY instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Device powered and operating
    #[default]
    Active,
    /// Analog front-end powered down, wake path armed if a line is bound
    Suspended,
}

// =============================================================================
// Interrupt-Controller Seam
// =============================================================================

/// One wake-capable interrupt line at the interrupt controller
///
/// Implemented by the platform layer over whatever interrupt controller
/// the SoC provides. The line is owned by the PHY instance for its whole
/// lifetime; the driver keeps it disabled (masked) at all times except
/// while the device is suspended.
pub trait WakeLine {
    /// Unmask the line at the interrupt controller
    fn enable(&mut self);

    /// Mask the line at the interrupt controller
    ///
    /// Must take effect synchronously: resume relies on the line being
    /// masked before it reprograms the device.
    fn disable(&mut self);

    /// Mark whether the line may wake the system from suspend
    fn set_wake_capable(&mut self, enabled: bool);
}

/// Platform lookup of named interrupt resources
///
/// `Ok(None)` means the platform configuration names no such resource
/// (wake-up simply isn't wired);
/// [`ProbeError::Deferred`](crate::error::ProbeError::Deferred) means the
/// resource exists but is not yet available and probe must be retried
/// later.
pub trait WakeIrqProvider {
    /// Concrete interrupt line type handed out by this platform
    type Line: WakeLine;

    /// Request the interrupt line with the given platform name
    fn request(&mut self, name: &str) -> ProbeResult<Option<Self::Line>>;
}

// =============================================================================
// Wake Latch
// =============================================================================

/// Pending-wake flag shared between the ISR top half and the worker
///
/// Interrupt-safe on all targets via `critical-section`; suitable for a
/// `static`.
///
/// # Example
///
/// ```ignore
/// static WAKE: WakeLatch = WakeLatch::new();
///
/// // ISR top half (rising edge from the PHY):
/// WAKE.raise();
///
/// // Worker context, later:
/// phy.service_wake(&mut mdio, &WAKE)?;
/// ```
#[derive(Debug)]
pub struct WakeLatch {
    pending: Mutex<Cell<bool>>,
}

impl WakeLatch {
    /// Create a new latch (const, suitable for static initialization)
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(Cell::new(false)),
        }
    }

    /// Record a wake edge (top half, callable from interrupt context)
    pub fn raise(&self) {
        critical_section::with(|cs| self.pending.borrow(cs).set(true));
    }

    /// Drain the latch, returning whether an edge was pending
    pub fn take(&self) -> bool {
        critical_section::with(|cs| self.pending.borrow(cs).replace(false))
    }

    /// Check the latch without draining it
    pub fn is_pending(&self) -> bool {
        critical_section::with(|cs| self.pending.borrow(cs).get())
    }
}

impl Default for WakeLatch {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
