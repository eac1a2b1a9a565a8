//! Route section rendering.
//!
//! # Responsibilities
//! - Render route patterns as `[[routes]]` array-of-tables blocks
//! - Nest non-production environments under `env.<name>.`
//! - Combine per-environment sections behind a generation banner
//!
//! # Design Decisions
//! - Empty pattern lists render nothing (no empty blocks)
//! - Blocks are separated by exactly one blank line, none trailing
//! - The banner timestamp is metadata; pin it via `generated_at` for stable output

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::schema::{DEVELOPMENT, PRODUCTION, STAGING};
use crate::emit::escape::{escape_toml_string, key_segment};
use crate::routing::RouteMappingResult;

/// Tool name written into the generation banner.
pub const GENERATOR_NAME: &str = "edge-routes";

/// Options for a single environment section.
#[derive(Debug, Clone)]
pub struct SectionOptions {
    /// Attach `zone_id` to every route.
    pub zone_id: Option<String>,
    /// Prepend a two-line comment naming the environment and domain.
    pub include_comments: bool,
    /// Domain named in the comment.
    pub domain: Option<String>,
}

impl Default for SectionOptions {
    fn default() -> Self {
        Self {
            zone_id: None,
            include_comments: true,
            domain: None,
        }
    }
}

/// Options for the combined configuration.
#[derive(Debug, Clone)]
pub struct ConfigOptions {
    pub zone_id: Option<String>,
    pub include_comments: bool,
    /// Domain per environment, for section comments.
    pub domains: BTreeMap<String, String>,
    /// Banner timestamp; the current time when unset.
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            zone_id: None,
            include_comments: true,
            domains: BTreeMap::new(),
            generated_at: None,
        }
    }
}

/// Route patterns for the three recognized environments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutesByEnvironment {
    pub production: Vec<String>,
    pub staging: Vec<String>,
    pub development: Vec<String>,
}

impl RoutesByEnvironment {
    /// Collect mapping results. Results for other environments are ignored.
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a RouteMappingResult>) -> Self {
        let mut routes = Self::default();
        for result in results {
            match result.environment.as_str() {
                PRODUCTION => routes.production = result.patterns.clone(),
                STAGING => routes.staging = result.patterns.clone(),
                DEVELOPMENT => routes.development = result.patterns.clone(),
                other => tracing::debug!(environment = other, "Skipping unrecognized environment"),
            }
        }
        routes
    }

    /// Pattern lists in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        [
            (PRODUCTION, self.production.as_slice()),
            (STAGING, self.staging.as_slice()),
            (DEVELOPMENT, self.development.as_slice()),
        ]
        .into_iter()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, patterns)| patterns.is_empty())
    }
}

/// Table path prefix for `environment`: empty for production.
pub fn table_prefix(environment: &str) -> String {
    if environment == PRODUCTION {
        String::new()
    } else {
        format!("env.{}.", key_segment(environment))
    }
}

/// Render one environment's patterns. Returns `""` when there are none.
pub fn build_routes_section<S: AsRef<str>>(
    patterns: &[S],
    environment: &str,
    options: &SectionOptions,
) -> String {
    if patterns.is_empty() {
        return String::new();
    }

    let header = format!("[[{}routes]]", table_prefix(environment));
    let zone_line = options
        .zone_id
        .as_deref()
        .map(|zone| format!("zone_id = \"{}\"", escape_toml_string(zone)));

    let blocks: Vec<String> = patterns
        .iter()
        .map(|pattern| {
            let mut block = format!(
                "{header}\npattern = \"{}\"",
                escape_toml_string(pattern.as_ref())
            );
            if let Some(zone_line) = &zone_line {
                block.push('\n');
                block.push_str(zone_line);
            }
            block
        })
        .collect();

    let body = blocks.join("\n\n");
    if !options.include_comments {
        return body;
    }

    let domain = options.domain.as_deref().map(comment_text);
    format!(
        "# Routes for {} environment\n# Domain: {}\n{body}",
        comment_text(environment),
        domain.as_deref().unwrap_or("not specified"),
    )
}

/// Render every non-empty environment, production first.
/// Returns `""` when all lists are empty.
pub fn build_complete_routes_config(routes: &RoutesByEnvironment, options: &ConfigOptions) -> String {
    let sections: Vec<String> = routes
        .iter()
        .filter(|(_, patterns)| !patterns.is_empty())
        .map(|(environment, patterns)| {
            let section_options = SectionOptions {
                zone_id: options.zone_id.clone(),
                include_comments: options.include_comments,
                domain: options.domains.get(environment).cloned(),
            };
            build_routes_section(patterns, environment, &section_options)
        })
        .collect();

    if sections.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    if options.include_comments {
        let generated_at = options.generated_at.unwrap_or_else(Utc::now);
        out.push_str("# Route configuration\n");
        out.push_str(&format!("# Generated by {GENERATOR_NAME}\n"));
        out.push_str(&format!(
            "# Generated at: {}\n\n",
            generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
    }
    out.push_str(&sections.join("\n\n"));
    out.push('\n');
    out
}

/// Comments end at a line break, so keep text on one line.
fn comment_text(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}
