//! Extraction engine.
//!
//! This module is the entry point for the task extraction pipeline. The work is
//! split into focused submodules under `src/engine/`, while the public paths
//! stay flat (`crate::engine::Extractor`, `crate::engine::CompiledTaxonomy`).
//!
//! ## How the parts work together
//!
//! ```text
//! Taxonomy (TOML) ──┐
//!                   │  CompiledTaxonomy::new         (compiled_taxonomy.rs)
//!                   └──────────────┬─────────────
//!                                  │
//! input ── segments ───────────────┼─ fragments       (segment.rs)
//!                                  │
//!                      per fragment, independent:
//!                        - CueScan::scan            (language.rs)
//!                        - CategoryClassifier       (classifier.rs)
//!                        - Attributes::extract      (attributes.rs)
//!                                  │
//!                                  v
//!                       Extractor::assemble          (extractor.rs)
//!                                  │
//!                                  v
//!                         Vec<ProcessedTask>
//! ```
//!
//! Every stage is a pure function of the fragment (plus the immutable
//! taxonomy), so the whole pipeline is deterministic and can be shared across
//! threads without coordination.
//!
//! ## Responsibilities by module
//!
//! - `compiled_taxonomy.rs`: turns a validated `Taxonomy` into one compiled
//!   regex per category and an id index.
//! - `fold.rs`: Romanian diacritic folding used before keyword matching.
//! - `segment.rs`: lazy sentence segmentation with the noise filter.
//! - `language.rs`: cue-word scan and the ro/en/mixed decision.
//! - `classifier.rs`: the `CategoryClassifier` seam and the keyword strategy.
//! - `attributes.rs`: time, deadline and priority extraction.
//! - `extractor.rs`: orchestration and assembly.
//! - `metrics.rs`: optional timing data for runs.
//!
//! ## Debugging
//!
//! The engine emits `tracing` events at `debug`/`trace` level. The CLI turns
//! them on when `TASKFLOW_DEBUG` is set.

#[path = "engine/attributes.rs"]
mod attributes;
#[path = "engine/classifier.rs"]
mod classifier;
#[path = "engine/compiled_taxonomy.rs"]
mod compiled_taxonomy;
#[path = "engine/extractor.rs"]
mod extractor;
#[path = "engine/fold.rs"]
mod fold;
#[path = "engine/language.rs"]
mod language;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/segment.rs"]
mod segment;

pub use classifier::{CategoryClassifier, KeywordClassifier};
pub use compiled_taxonomy::{CompiledCategory, CompiledTaxonomy};
pub use extractor::Extractor;
pub(crate) use metrics::Trace;
