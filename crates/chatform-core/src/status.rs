//! Backend reachability status

/// Result of the most recent health probe
///
/// `checking` is true strictly while a probe is in flight; `is_online` is
/// false during that window and otherwise reflects the last probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiStatus {
    pub is_online: bool,
    pub checking: bool,
}

/// Tri-state view of [`ApiStatus`] for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Checking,
    Online,
    Offline,
}

impl ApiStatus {
    /// A probe is outstanding
    pub const fn checking() -> Self {
        Self {
            is_online: false,
            checking: true,
        }
    }

    /// Last probe succeeded
    pub const fn online() -> Self {
        Self {
            is_online: true,
            checking: false,
        }
    }

    /// Last probe failed
    pub const fn offline() -> Self {
        Self {
            is_online: false,
            checking: false,
        }
    }

    /// Map a finished probe to a status
    pub const fn from_probe(ok: bool) -> Self {
        if ok {
            Self::online()
        } else {
            Self::offline()
        }
    }

    pub fn health(&self) -> Health {
        if self.checking {
            Health::Checking
        } else if self.is_online {
            Health::Online
        } else {
            Health::Offline
        }
    }

    /// Indicator text shown next to the status dot
    pub fn label(&self) -> &'static str {
        match self.health() {
            Health::Checking => "Checking API...",
            Health::Online => "API Online",
            Health::Offline => "API Offline",
        }
    }
}

// The page starts by probing, so the initial state is "checking".
impl Default for ApiStatus {
    fn default() -> Self {
        Self::checking()
    }
}
