//! Domain debug filter driven by the environment

use once_cell::sync::OnceCell;

/// Environment variable listing debug-enabled domains
///
/// A space-separated list of native domain names; the literal token `all`
/// enables every domain.
pub const MESSAGES_DEBUG_ENV: &str = "G_MESSAGES_DEBUG";

/// Process-wide filter, initialized on first use
static GLOBAL_FILTER: OnceCell<DomainDebugFilter> = OnceCell::new();

/// Name-matching predicate over debug-enabled log domains
///
/// Domain names from the environment have their hyphens translated to dots
/// so entries compare against runtime logger names directly. A listed name
/// enables itself and its children: `disk.io` enables `disk.io.scheduler`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DomainDebugFilter {
    all: bool,
    names: Vec<String>,
}

impl DomainDebugFilter {
    /// Parse a whitespace-separated domain list
    pub fn parse(spec: &str) -> Self {
        let mut all = false;
        let mut names = Vec::new();
        for token in spec.split_whitespace() {
            if token == "all" {
                all = true;
            } else {
                names.push(token.replace('-', "."));
            }
        }
        Self { all, names }
    }

    /// Read the filter from the environment
    pub fn from_env() -> Self {
        match std::env::var(MESSAGES_DEBUG_ENV) {
            Ok(spec) => Self::parse(&spec),
            Err(_) => Self::default(),
        }
    }

    /// The process-wide filter, read from the environment exactly once
    pub fn global() -> &'static DomainDebugFilter {
        GLOBAL_FILTER.get_or_init(DomainDebugFilter::from_env)
    }

    /// Whether debug output is enabled for a dotted name
    pub fn enables(&self, name: &str) -> bool {
        if self.all {
            return true;
        }
        self.names.iter().any(|entry| {
            name == entry
                || name
                    .strip_prefix(entry.as_str())
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }

    /// True when no domain is enabled
    pub fn is_empty(&self) -> bool {
        !self.all && self.names.is_empty()
    }
}
