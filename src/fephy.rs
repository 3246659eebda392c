//! Rockchip integrated FEPHY driver
//!
//! One [`Fephy`] value represents one physical transceiver: it owns the
//! test-mode/bank sequencing state, the optional wake interrupt line and
//! the attached interface identity, and lives from probe to remove.
//!
//! All register sequences are synchronous and must be serialized per
//! device by the caller (the PHY management framework); the only
//! concurrent path is the wake interrupt, which is bridged into the
//! serialized world through a [`WakeLatch`] and [`Fephy::service_wake`].
//!
//! # Example
//!
//! ```ignore
//! use rockchip_fephy::{Fephy, WakeLatch};
//!
//! static WAKE: WakeLatch = WakeLatch::new();
//!
//! let mut phy = Fephy::probe(0, &mut platform)?;
//! phy.config_init(&mut mdio)?;
//! phy.attach(netif.hw_addr());
//!
//! // System suspend path:
//! phy.suspend(&mut mdio)?;
//! // ... wake edge fires, ISR calls WAKE.raise() ...
//! phy.service_wake(&mut mdio, &WAKE)?;
//! phy.resume(&mut mdio)?;
//! ```

use crate::error::{PowerError, ProbeResult, Result};
use crate::genphy;
use crate::mdio::MdioBus;
use crate::power::{PowerState, WOL_IRQ_NAME, WakeIrqProvider, WakeLatch, WakeLine};
use crate::regs::{Bank, FEPHY_ID, FEPHY_ID_MASK, dsp0, led, reg};
use crate::testmode::with_test_mode;
use crate::wol::{self, MacAddr};

/// One Rockchip FEPHY instance
///
/// Created by [`Fephy::probe`] (or [`Fephy::new`] when the platform has
/// no wake resource at all). Dropping the value releases everything;
/// [`Fephy::into_wake_line`] hands the bound line back first if the
/// platform wants to reuse it.
#[derive(Debug)]
pub struct Fephy<W: WakeLine> {
    /// PHY address on the management bus (0-31)
    phy_addr: u8,
    /// Wake interrupt line, bound for the lifetime of the instance
    wake_line: Option<W>,
    /// Hardware address of the attached network interface
    attached: Option<MacAddr>,
    /// Lifecycle state
    state: PowerState,
}

impl<W: WakeLine> Fephy<W> {
    /// Create an instance without a wake interrupt line
    pub const fn new(phy_addr: u8) -> Self {
        Self {
            phy_addr,
            wake_line: None,
            attached: None,
            state: PowerState::Active,
        }
    }

    /// Probe: allocate instance state and bind the platform wake line
    ///
    /// Requests the interrupt resource named `"wol_irq"`. A
    /// [`ProbeError::Deferred`](crate::error::ProbeError::Deferred) from
    /// the platform propagates verbatim so the framework can retry the
    /// probe later; nothing is bound in that case. When a line is handed
    /// out it is masked immediately and marked wake-capable: the line
    /// stays disabled at the controller until suspend arms it.
    pub fn probe<P>(phy_addr: u8, platform: &mut P) -> ProbeResult<Self>
    where
        P: WakeIrqProvider<Line = W>,
    {
        let mut wake_line = platform.request(WOL_IRQ_NAME)?;

        if let Some(line) = wake_line.as_mut() {
            line.disable();
            line.set_wake_capable(true);
        }

        Ok(Self {
            phy_addr,
            wake_line,
            attached: None,
            state: PowerState::Active,
        })
    }

    /// Get the PHY address (0-31)
    pub fn address(&self) -> u8 {
        self.phy_addr
    }

    /// Current lifecycle state
    pub fn power_state(&self) -> PowerState {
        self.state
    }

    /// Whether a wake interrupt line is bound
    pub fn has_wake_line(&self) -> bool {
        self.wake_line.is_some()
    }

    /// Bind the attached interface's hardware address
    ///
    /// Suspend derives the WOL match words from this identity.
    pub fn attach(&mut self, hw_addr: MacAddr) {
        self.attached = Some(hw_addr);
    }

    /// Unbind the attached interface
    pub fn detach(&mut self) {
        self.attached = None;
    }

    /// Consume the instance and return the bound wake line, if any
    pub fn into_wake_line(self) -> Option<W> {
        self.wake_line
    }

    /// Verify this is a Rockchip FEPHY by reading the PHY ID
    pub fn verify_id<M: MdioBus>(&self, mdio: &mut M) -> Result<bool> {
        let id = genphy::read_phy_id(mdio, self.phy_addr)?;
        Ok((id & FEPHY_ID_MASK) == FEPHY_ID)
    }

    /// Perform a soft reset
    pub fn soft_reset<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        genphy::soft_reset(mdio, self.phy_addr)
    }

    /// Configure auto-negotiation (generic behavior, no chip specifics)
    pub fn config_aneg<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        genphy::config_aneg(mdio, self.phy_addr)
    }

    /// Apply the chip operating configuration after attach
    ///
    /// Writes the LED configuration, then the 100M amplitude calibration
    /// in the DSP0 bank through a scoped test-mode unit. A failed step
    /// aborts the sequence; earlier writes are not rolled back.
    pub fn config_init<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        mdio.write(self.phy_addr, reg::LED_CTRL, led::CONFIG)?;

        with_test_mode(mdio, self.phy_addr, |tm| {
            tm.write_banked(Bank::Dsp0, dsp0::A7CFG, dsp0::A7CFG_100M)
        })
    }

    /// Transition Active -> Suspended
    ///
    /// With a bound wake line: arm WOL for the attached interface, then
    /// unmask the line at the interrupt controller, then power down the
    /// analog front-end. The order is load-bearing; see the lifecycle
    /// tests.
    pub fn suspend<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        if self.state == PowerState::Suspended {
            return Err(PowerError::InvalidState.into());
        }

        if let Some(line) = self.wake_line.as_mut() {
            let hw_addr = self.attached.ok_or(PowerError::NotAttached)?;
            wol::enable(mdio, self.phy_addr, &hw_addr)?;
            line.enable();
        }

        genphy::suspend(mdio, self.phy_addr)?;
        self.state = PowerState::Suspended;
        Ok(())
    }

    /// Transition Suspended -> Active (exact mirror of [`suspend`](Self::suspend))
    ///
    /// Disarm WOL, mask the wake line synchronously, then re-power the
    /// analog front-end.
    pub fn resume<M: MdioBus>(&mut self, mdio: &mut M) -> Result<()> {
        if self.state == PowerState::Active {
            return Err(PowerError::InvalidState.into());
        }

        if let Some(line) = self.wake_line.as_mut() {
            wol::disable(mdio, self.phy_addr)?;
            line.disable();
        }

        genphy::resume(mdio, self.phy_addr)?;
        self.state = PowerState::Active;
        Ok(())
    }

    /// Service a pending wake interrupt (worker context)
    ///
    /// Drains `latch` and, if an edge was recorded, reads the interrupt
    /// status register purely to acknowledge the pending condition; the
    /// value itself is discarded. Returns whether an edge was serviced.
    ///
    /// Runs a bus transaction that may block, so this must be called
    /// from the deferred/worker context, never from the ISR top half
    /// (the top half is just [`WakeLatch::raise`]).
    pub fn service_wake<M: MdioBus>(&mut self, mdio: &mut M, latch: &WakeLatch) -> Result<bool> {
        if !latch.take() {
            return Ok(false);
        }

        // Read status to ack the interrupt
        let _ = mdio.read(self.phy_addr, reg::INT_STATUS)?;
        Ok(true)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
