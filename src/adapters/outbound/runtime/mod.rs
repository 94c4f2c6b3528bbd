/// Runtime adapters for probing the monitored process
mod classpath_probe;

pub use classpath_probe::ClasspathProbe;
