//! Gossip Gen - benchmark instance generator for concurrent game solvers
//!
//! A gossip instance has N agents, each owning one proposition `g{i}`. The
//! global goal asks for all propositions to hold together from some point on.
//!
//! # Example
//!
//! ```rust
//! use gossip_gen::{generate, AgentCount};
//!
//! let json = generate(AgentCount::new(2).unwrap()).unwrap();
//! assert!(json.starts_with(r#"{"name": "gossip2""#));
//! ```

pub mod config;
pub mod error;
pub mod guard;
pub mod instance;
pub mod lint;
pub mod output;

pub use config::{ConfigError, GenerateConfig};
pub use error::{GenerateError, ParseError};
pub use instance::{build, AgentCount, Instance};
pub use lint::{LintCategory, LintConfig, LintWarning};
pub use output::{OutputConfig, OutputStyle};

/// Generate the instance for `count` agents in the default compact style
///
/// # Example
///
/// ```rust
/// use gossip_gen::{generate, AgentCount};
///
/// let count: AgentCount = "3".parse().unwrap();
/// let json = generate(count).unwrap();
/// assert!(json.contains(r#""goal": "F G (g1 & g2 & g3)""#));
/// ```
pub fn generate(count: AgentCount) -> Result<String, GenerateError> {
    generate_with_config(count, &GenerateConfig::default())
}

/// Generate the instance for `count` agents with custom configuration
///
/// Lint settings are ignored here; use [`generate_with_lint`] to get warnings.
pub fn generate_with_config(count: AgentCount, config: &GenerateConfig) -> Result<String, GenerateError> {
    let instance = build(count);
    serialize(&instance, config)
}

/// Generate the instance and run lint checks when enabled in the config
///
/// # Example
///
/// ```rust
/// use gossip_gen::{generate_with_lint, AgentCount, GenerateConfig};
///
/// let config = GenerateConfig::new().with_lint_enabled(true);
/// let (_, warnings) = generate_with_lint(AgentCount::new(1).unwrap(), &config).unwrap();
/// assert_eq!(warnings.len(), 2);
/// ```
pub fn generate_with_lint(
    count: AgentCount,
    config: &GenerateConfig,
) -> Result<(String, Vec<LintWarning>), GenerateError> {
    let instance = build(count);

    let warnings = if config.lint.enabled {
        lint::check(&instance, &config.lint)
    } else {
        Vec::new()
    };

    let json = serialize(&instance, config)?;
    Ok((json, warnings))
}

fn serialize(instance: &Instance, config: &GenerateConfig) -> Result<String, GenerateError> {
    let bytes = output::to_vec(instance, &config.output)?;
    log::debug!("serialized {} ({} bytes)", instance.name, bytes.len());
    Ok(String::from_utf8(bytes)?)
}
