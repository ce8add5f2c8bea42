use log::{debug, info};

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        debug!("{}", message);
    }

    /// One line per node execution, tagged with the node name.
    pub fn record_invocation(&self, node: &str, detail: &str) {
        info!("{} -> {}", node, detail);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
