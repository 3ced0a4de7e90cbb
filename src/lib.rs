//! # stock-meta
//!
//! Microstock metadata generator: derive titles, descriptions, keywords, and
//! AI-image prompts from filenames, then export them as platform-specific CSV
//! (Adobe Stock, Shutterstock, Freepik, Vecteezy, Pond5) or JSON.
//!
//! Generation is deterministic and needs no network access: the same filename
//! and settings always give the same output.
//!
//! ## Quick Start
//!
//! The pipeline module handles the full collect → generate → export flow:
//!
//! ```rust,no_run
//! use stock_meta::config::Config;
//! use stock_meta::export::{export_records, recommended_format, ExportFormat};
//! use stock_meta::pipeline::{collect_media, file_name_of, generate_batch, save_export};
//! use std::path::{Path, PathBuf};
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load config (generation settings, export options)
//!     let config = Config::load(Some("config.json".as_ref()))?;
//!
//!     // Collect supported media files from paths (files or directories)
//!     let files = collect_media(&[PathBuf::from("./uploads")]);
//!     let names: Vec<String> = files.iter().map(|p| file_name_of(p)).collect();
//!
//!     // Generate one record per file, in order
//!     let records = generate_batch(&names, &config.generation, true);
//!
//!     // Export in the format that suits the batch
//!     let format = ExportFormat::resolve(
//!         config.export.format,
//!         recommended_format(&names),
//!         config.generation.image_type,
//!     );
//!     let export = export_records(&records, format, config.generation.platform)?;
//!     save_export(&export, Path::new("./out"))?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Lower-Level Usage
//!
//! The generators and formatters are plain functions:
//!
//! ```rust
//! use stock_meta::generate::{generate_metadata, generate_prompt};
//! use stock_meta::settings::{GenerationSettings, ImageType, Platform};
//!
//! let settings = GenerationSettings {
//!     title_length: 30,
//!     keywords_count: 5,
//!     image_type: ImageType::Photo,
//!     platform: Platform::Adobe,
//!     negative_keywords_text: "beach".into(),
//!     ..Default::default()
//! };
//!
//! let meta = generate_metadata("sunset-beach_01.jpg", &settings);
//! assert_eq!(meta.title, "Sunset Beach 01");
//! assert!(!meta.keywords.contains(&"beach".to_string()));
//!
//! let prompt = generate_prompt("sunset-beach_01.jpg", &settings);
//! assert!(prompt.starts_with("Generate a photo of sunset beach 01"));
//! ```
//!
//! ## CSV Schemas
//!
//! | Platform | Columns |
//! |----------|---------|
//! | `adobe`, `shutterstock`, `freepik`, `vecteezy`, `pond5` | Filename, Title, Description, Keywords |
//! | `all` (and any unknown name) | Filename, Title, Description, Keywords, AI Prompt |
//!
//! ## Modules
//!
//! - [`config`] - Configuration types and loading/saving
//! - [`export`] - CSV and JSON export, format recommendation
//! - [`generate`] - Title, description, keyword, and prompt generation
//! - [`pipeline`] - Media collection and batch generation
//! - [`settings`] - Generation settings, image types, platforms
//! - [`text`] - Tokenizing and truncation helpers

pub mod config;
pub mod export;
pub mod generate;
pub mod pipeline;
pub mod settings;
pub mod text;
