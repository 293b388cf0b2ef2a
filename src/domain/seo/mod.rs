//! SEO Content Domain Module
//!
//! Pure, I/O-free building blocks of content generation.
//!
//! # Architecture
//!
//! - **Canned answers**: fixed question phrase -> long-form answer table
//! - **Classifier**: prompt -> set of intent tags by keyword matching
//! - **Extraction**: topic and business-type slots for templates
//! - **Templates**: deterministic markdown rendering per intent
//!
//! # Example
//!
//! ```
//! use aura_seo::domain::seo::{render_for_prompt, IntentClassifier, KeywordClassifier};
//!
//! let prompt = "generate seo keywords for bakery";
//! let intents = KeywordClassifier.classify(prompt);
//! let (_, content) = render_for_prompt(&intents, prompt);
//! assert!(content.contains("bakery"));
//! ```

pub mod canned;
pub mod classifier;
pub mod extract;
pub mod intent;
pub mod templates;

pub use canned::{CannedAnswer, CannedAnswers};
pub use classifier::{IntentClassifier, KeywordClassifier};
pub use extract::{extract_business_type, extract_topic, title_case};
pub use intent::{IntentSet, IntentTag};
pub use templates::{local_answer, render, render_for_prompt};
