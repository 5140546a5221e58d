//! pcert Extractor
//!
//! Turns text exports of research project participation certificates into
//! structured project and researcher records.
//!
//! # Overview
//!
//! An export holds one or more certificates, each introduced by the heading
//! `연구과제 참여확인서`. Every certificate carries two labeled blocks:
//!
//! - `■ 과제정보` (project info): tab-separated `label, value` cells
//! - `■ 연구원정보` (researcher info): a `성명:` / `주민번호:` line, a header line,
//!   then one tab-separated detail line per participation period
//!
//! # Architecture
//!
//! ```text
//! bytes → decode → segments → blocks → ProjectRecord / ResearcherRecord
//! ```
//!
//! Segments missing either block and detail lines with fewer than four cells
//! are dropped without an error. They are counted in [`ExtractionStats`] so a
//! caller can report them.
//!
//! # Example Usage
//!
//! ```
//! use pcert_extractor::{Extractor, ExtractorConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = Extractor::new(ExtractorConfig::default())?;
//!
//! let text = "연구과제 참여확인서\n\
//!     ■ 과제정보\n과제번호\tP001\t지원기관\tAgency A\n\
//!     ■ 연구원정보\n성명: Kim\t주민번호: 800101-1******\n\
//!     연구원구분\t과정구분\t소속\t참여기간\n\
//!     참여연구원\t석사과정\tLab\t2024-01-01 ~ 2024-01-10\n\
//!     -- 이하 여백 --\n";
//!
//! let result = extractor.extract_text(text);
//!
//! assert_eq!(result.projects.len(), 1);
//! assert_eq!(result.researchers[0].person_name, "Kim");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod config;
mod decode;
mod error;
mod extractor;
mod project_info;
mod researcher_info;
mod segment;
mod types;


pub use config::ExtractorConfig;
pub use decode::{decode_document, resolve_encoding};
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use researcher_info::ParticipationDetail;
pub use types::{DocumentExtraction, ExtractionStats};
