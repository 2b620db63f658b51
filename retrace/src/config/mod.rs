mod retrace_config;

pub use retrace_config::RetraceConfig;
