//! Error types for the FEPHY driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`BusError`]: management-bus register access failures
//! - [`ProbeError`]: device attach failures, including deferred probe
//! - [`PowerError`]: lifecycle misuse (suspend/resume sequencing)
//!
//! The unified [`Error`] enum wraps all domain errors and is returned
//! by most driver methods. Bus failures are never retried here; the bus
//! transport encapsulates its own retry policy.

// =============================================================================
// Bus Errors
// =============================================================================

/// Management-bus register access errors
///
/// Reported by the [`MdioBus`](crate::mdio::MdioBus) implementation and
/// propagated immediately to the caller of the failed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Bus transaction timed out
    Timeout,
    /// Bus fault (transport reported the transaction failed)
    Fault,
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BusError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BusError::Timeout => "bus transaction timed out",
            BusError::Fault => "bus fault",
        }
    }
}

// =============================================================================
// Probe Errors
// =============================================================================

/// Device attach (probe) errors
///
/// [`ProbeError::Deferred`] is a distinguished "retry probe later" signal,
/// not a fatal condition: the platform interrupt resource is not yet
/// available and the caller should re-run probe once it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProbeError {
    /// Interrupt resource not yet available, retry probe later
    Deferred,
    /// Instance state could not be allocated
    AllocationFailed,
    /// Wake interrupt line exists but could not be requested
    IrqRequestFailed,
}

impl core::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ProbeError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ProbeError::Deferred => "probe deferred",
            ProbeError::AllocationFailed => "allocation failed",
            ProbeError::IrqRequestFailed => "wake irq request failed",
        }
    }
}

// =============================================================================
// Power Errors
// =============================================================================

/// Lifecycle sequencing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerError {
    /// Wake line is bound but no attached interface identity is set
    NotAttached,
    /// Transition not valid from the current power state
    InvalidState,
}

impl core::fmt::Display for PowerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PowerError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            PowerError::NotAttached => "no attached interface",
            PowerError::InvalidState => "invalid state for transition",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Bus(BusError::Timeout)) => { /* ... */ }
///     Err(Error::Probe(ProbeError::Deferred)) => { /* re-probe later */ }
///     Err(Error::Power(PowerError::InvalidState)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Register access error
    Bus(BusError),
    /// Attach error
    Probe(ProbeError),
    /// Lifecycle error
    Power(PowerError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus: {}", e.as_str()),
            Error::Probe(e) => write!(f, "probe: {}", e.as_str()),
            Error::Power(e) => write!(f, "power: {}", e.as_str()),
        }
    }
}

// From impls for automatic conversion
impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Error::Bus(e)
    }
}

impl From<ProbeError> for Error {
    fn from(e: ProbeError) -> Self {
        Error::Probe(e)
    }
}

impl From<PowerError> for Error {
    fn from(e: PowerError) -> Self {
        Error::Power(e)
    }
}

/// Result type alias for driver operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for bus operations
pub type BusResult<T> = core::result::Result<T, BusError>;

/// Result type alias for probe operations
pub type ProbeResult<T> = core::result::Result<T, ProbeError>;

// =============================================================================
// Unit Tests
// =============================================================================
