//! Startup resource gate
//!
//! The frame loop must not start until every required resource has
//! resolved. The first failure is final: no retry, no partial start.

use std::fmt;

/// A required resource failed to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetError {
    pub resource: String,
    pub reason: String,
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to load {}: {}", self.resource, self.reason)
    }
}

impl std::error::Error for AssetError {}

/// Where startup currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateStatus {
    /// Still waiting on at least one resource
    Pending,
    /// Everything resolved; the frame loop may start
    Ready,
    /// A resource failed; startup is over
    Failed(AssetError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    loaded: bool,
}

/// Tracks completion of a fixed set of named resources
#[derive(Debug, Clone)]
pub struct AssetGate {
    entries: Vec<Entry>,
    failure: Option<AssetError>,
}

impl AssetGate {
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: required
                .into_iter()
                .map(|name| Entry {
                    name: name.into(),
                    loaded: false,
                })
                .collect(),
            failure: None,
        }
    }

    /// Mark `name` as loaded
    pub fn resolve(&mut self, name: &str) -> GateStatus {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.loaded = true;
                log::info!("Resource ready: {}", name);
            }
            None => log::warn!("Ignoring unknown resource: {}", name),
        }
        self.status()
    }

    /// Record that `name` failed to load
    pub fn fail(&mut self, name: &str, reason: impl Into<String>) -> GateStatus {
        let error = AssetError {
            resource: name.to_string(),
            reason: reason.into(),
        };
        if self.failure.is_none() {
            log::error!("{}", error);
            self.failure = Some(error);
        }
        self.status()
    }

    pub fn status(&self) -> GateStatus {
        if let Some(error) = &self.failure {
            GateStatus::Failed(error.clone())
        } else if self.entries.iter().all(|e| e.loaded) {
            GateStatus::Ready
        } else {
            GateStatus::Pending
        }
    }

    /// Names still outstanding
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| !e.loaded)
            .map(|e| e.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_after_all_resolve() {
        let mut gate = AssetGate::new(["surface", "adapter", "device"]);
        assert_eq!(gate.status(), GateStatus::Pending);

        gate.resolve("adapter");
        gate.resolve("surface");
        assert_eq!(gate.pending().collect::<Vec<_>>(), vec!["device"]);
        assert_eq!(gate.resolve("device"), GateStatus::Ready);
    }

    #[test]
    fn test_empty_gate_is_ready() {
        let gate = AssetGate::new(Vec::<String>::new());
        assert_eq!(gate.status(), GateStatus::Ready);
    }

    #[test]
    fn test_unknown_resource_ignored() {
        let mut gate = AssetGate::new(["device"]);
        assert_eq!(gate.resolve("sprites"), GateStatus::Pending);
    }

    #[test]
    fn test_first_failure_wins_and_sticks() {
        let mut gate = AssetGate::new(["surface", "device"]);
        gate.fail("surface", "no canvas");
        gate.fail("device", "lost");
        gate.resolve("surface");
        gate.resolve("device");

        let expected = AssetError {
            resource: "surface".to_string(),
            reason: "no canvas".to_string(),
        };
        assert_eq!(gate.status(), GateStatus::Failed(expected.clone()));
        assert_eq!(expected.to_string(), "failed to load surface: no canvas");
    }
}
