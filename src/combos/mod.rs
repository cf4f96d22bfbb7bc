//! Combo database: validation, indexing, and ranking against an anchor.
//!
//! ## Key Types
//!
//! - `RawComboRecord`: A record as fetched, untrusted
//! - `ComboIndex`: Validated combos indexed by card name
//! - `ComboRanker`: Rank-1 / rank-2 discovery and completion analysis
//! - `ComboBuckets`: Ranked combos by size, sorted by total cost

pub mod buckets;
pub mod completion;
pub mod index;
pub mod ranker;
pub mod record;

pub use buckets::{ComboBuckets, SizeBucket};
pub use completion::{completion_candidates, preselected_cards, CompletionCandidate};
pub use index::{ComboIndex, ComboRejection, IndexDiagnostics};
pub use ranker::{ComboRank, ComboRanker, ComboRanking, RankedCombo, RankedComboSet, RankingDiagnostics};
pub use record::{ComboCosts, ComboId, ComboRecord, ComboStatus, RawComboRecord};
