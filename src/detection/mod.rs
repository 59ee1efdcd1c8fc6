pub mod build_agent;

pub use build_agent::{detect_build_agent, BuildAgent, Environment, ProcessEnvironment};
