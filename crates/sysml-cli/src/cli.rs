//! Command-line interface for the sysml utility
//!
//! Inspects the model schema: which element and relationship kinds exist,
//! how a key string is routed, and whether a relationship kind accepts a
//! given pair of endpoint kinds.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use sysml::core::logging::init_logging;
use sysml::{ElementKind, Key, RelationshipKind};

/// SysML - inspect the model schema and key conventions
#[derive(Parser)]
#[command(name = "sysml")]
#[command(about = "Inspect the SysML model schema and key conventions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List element kinds and relationship rules
    Types {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show how a key string is routed (element store, relationship store, or invalid)
    Key {
        /// Key such as `block-1` or `partProperty-42`
        key: String,
    },

    /// Check whether a relationship kind accepts a source/target pair
    Rule {
        /// Relationship kind, e.g. `partProperty`
        kind: String,
        /// Source element kind, e.g. `block`
        source: String,
        /// Target element kind, e.g. `requirement`
        target: String,
    },
}

/// Main CLI application
#[derive(Default)]
pub struct SysmlApp;

impl SysmlApp {
    pub fn new() -> Self {
        Self
    }

    /// Run the application with the given CLI arguments
    pub fn run(&self, cli: Cli) -> Result<()> {
        // environment variables take precedence over flags
        let log_level_str = std::env::var("SYSML_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| cli.log_level.as_str().to_string());

        let log_format_str = std::env::var("SYSML_LOG_FORMAT")
            .unwrap_or_else(|_| cli.log_format.as_str().to_string());

        if let Err(e) = init_logging(Some(&log_level_str), Some(&log_format_str)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("sysml v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Types { json } => {
                println!("{}", self.types_report(json)?);
                Ok(())
            }
            Commands::Key { key } => {
                let report = self.key_report(&key);
                println!("{}", report);
                match Key::parse(&key) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(e.into()),
                }
            }
            Commands::Rule {
                kind,
                source,
                target,
            } => {
                let allowed = self.check_rule(&kind, &source, &target)?;
                if allowed {
                    println!("✓ {} -{}-> {} is allowed", source, kind, target);
                    Ok(())
                } else {
                    println!("✗ {} -{}-> {} is not allowed", source, kind, target);
                    Err(anyhow!("schema violation"))
                }
            }
        }
    }

    /// Render the schema as text or pretty JSON
    pub fn types_report(&self, json: bool) -> Result<String> {
        debug!(json, "Listing schema");

        if json {
            let elements: Vec<_> = ElementKind::ALL
                .iter()
                .map(|k| serde_json::json!({ "name": k.name(), "type": k.type_name() }))
                .collect();
            let relationships: Vec<_> = RelationshipKind::ALL
                .iter()
                .map(|k| {
                    let rule = k.rule();
                    let names = |kinds: &[ElementKind]| -> Vec<&'static str> {
                        kinds.iter().map(|k| k.type_name()).collect()
                    };
                    serde_json::json!({
                        "name": k.name(),
                        "source": names(rule.sources),
                        "target": names(rule.targets),
                    })
                })
                .collect();
            let doc = serde_json::json!({
                "elements": elements,
                "relationships": relationships,
            });
            return Ok(serde_json::to_string_pretty(&doc)?);
        }

        let mut out = String::from("Element kinds:\n");
        for kind in ElementKind::ALL {
            out.push_str(&format!("  {:<18} -> {}\n", kind.name(), kind.type_name()));
        }
        out.push_str("\nRelationship kinds:\n");
        for kind in RelationshipKind::ALL {
            let rule = kind.rule();
            let join = |kinds: &[ElementKind]| {
                kinds
                    .iter()
                    .map(|k| k.type_name())
                    .collect::<Vec<_>>()
                    .join("|")
            };
            out.push_str(&format!(
                "  {:<18} {} -> {}\n",
                kind.name(),
                join(rule.sources),
                join(rule.targets)
            ));
        }
        Ok(out.trim_end().to_string())
    }

    /// Describe where a key would be stored
    pub fn key_report(&self, key: &str) -> String {
        match Key::parse(key) {
            Ok(Key::Element(k)) => format!(
                "{}: element key ({})",
                key,
                k.kind().map_or("Package", ElementKind::type_name)
            ),
            Ok(Key::Relationship(k)) => format!("{}: relationship key ({})", key, k.kind),
            Err(e) => format!("✗ {}", e),
        }
    }

    /// Whether `kind` accepts `source -> target`; unknown names are errors
    pub fn check_rule(&self, kind: &str, source: &str, target: &str) -> Result<bool> {
        let kind: RelationshipKind = kind.parse()?;
        let source: ElementKind = source.parse()?;
        let target: ElementKind = target.parse()?;
        Ok(kind.rule().allows(source, target))
    }
}
