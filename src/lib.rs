//! Driver core for the Rockchip integrated fast-Ethernet PHY (FEPHY)
//!
//! The FEPHY is the 10/100 transceiver embedded in several Rockchip SoCs
//! (PHY ID `0x0680_8101`). Beyond the IEEE 802.3 flat register set it has
//! extended register banks (DSP, WOL, BIST, AFE) that are only reachable
//! through an indirect test-mode protocol, and a wake-on-LAN engine that
//! can wake the system on an address-match frame while the analog
//! front-end is powered down.
//!
//! This crate implements the device-side logic over two platform seams:
//!
//! - [`MdioBus`]: the management-bus primitive (one read, one write)
//! - [`WakeLine`] / [`WakeIrqProvider`]: the interrupt-controller side of
//!   the wake path
//!
//! Everything else is portable `no_std` code: the test-mode bank
//! controller ([`testmode`]), the WOL manager ([`wol`]), the generic PHY
//! sequences ([`genphy`]) and the per-device lifecycle driver
//! ([`Fephy`]).
//!
//! ## Features
//!
//! - `defmt`: derive `defmt::Format` on public types for structured
//!   logging on embedded targets

#![no_std]

pub mod error;
pub mod fephy;
pub mod genphy;
pub mod mdio;
pub mod power;
pub mod regs;
pub mod testmode;
pub mod wol;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{BusError, Error, PowerError, ProbeError, Result};
pub use fephy::Fephy;
pub use mdio::MdioBus;
pub use power::{PowerState, WOL_IRQ_NAME, WakeIrqProvider, WakeLatch, WakeLine};
pub use regs::{Bank, FEPHY_ID, FEPHY_ID_MASK};
pub use testmode::{TestMode, with_test_mode};
pub use wol::MacAddr;
