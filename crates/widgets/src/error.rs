//! Mount failure reporting.
//!
//! Mounting a hidden native element is the only fallible public operation;
//! every derived computation downstream degrades to a per-frame no-op
//! instead of returning errors.

/// Why a native mount request was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// The host rejected the mount request.
    HostRefused { reason: String },
    /// A native element for this widget is already mounted.
    AlreadyMounted,
}

impl std::fmt::Display for MountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MountError::HostRefused { reason } => {
                write!(f, "native host refused the mount: {reason}")
            }
            MountError::AlreadyMounted => {
                write!(f, "native element is already mounted")
            }
        }
    }
}

impl std::error::Error for MountError {}
