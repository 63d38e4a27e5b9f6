//! Property-based tests for rust_fanout_logger using proptest

use proptest::prelude::*;
use parking_lot::Mutex;
use rust_fanout_logger::core::format_text;
use rust_fanout_logger::prelude::*;
use std::sync::Arc;

fn any_rank() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::TRACE),
        Just(Level::DEBUG),
        Just(Level::INFO),
        Just(Level::WARNING),
        Just(Level::ERROR),
        Just(Level::FATAL),
    ]
}

fn any_mask() -> impl Strategy<Value = Level> {
    any::<u32>().prop_map(Level::from_bits)
}

fn named_mask() -> impl Strategy<Value = Level> {
    (0u32..64).prop_map(Level::from_bits)
}

// ============================================================================
// Level Mask Tests
// ============================================================================

proptest! {
    /// Matching is exactly a non-empty intersection
    #[test]
    fn test_matches_iff_intersection(a in any_mask(), b in any_mask()) {
        prop_assert_eq!(a.matches(b), a.bits() & b.bits() != 0);
        prop_assert_eq!(a.matches(b), b.matches(a));
        prop_assert_eq!(a.matches(b), !(a & b).is_empty());
    }

    /// ALL matches every rank, NONE matches nothing
    #[test]
    fn test_all_and_none(rank in any_rank(), mask in any_mask()) {
        prop_assert!(Level::ALL.matches(rank));
        prop_assert!(!Level::NONE.matches(mask));
        prop_assert!(Level::ALL.contains(mask));
    }

    /// A union matches each of its parts
    #[test]
    fn test_union_matches_parts(a in any_rank(), b in any_rank()) {
        let union = a | b;
        prop_assert!(union.matches(a));
        prop_assert!(union.matches(b));
        prop_assert!(union.contains(a) && union.contains(b));
    }

    /// Distinct ranks never match each other
    #[test]
    fn test_distinct_ranks_are_disjoint(a in any_rank(), b in any_rank()) {
        prop_assert_eq!(a.matches(b), a == b);
    }

    /// Masks of named ranks survive a Display/FromStr round trip
    #[test]
    fn test_named_mask_display_parses_back(mask in named_mask()) {
        let rendered = mask.to_string();
        let parsed: Level = rendered.parse().expect("rendered mask should parse");
        prop_assert_eq!(parsed, mask);
    }

    /// Parsing is case-insensitive
    #[test]
    fn test_parse_case_insensitive(rank in any_rank(), upper in any::<bool>()) {
        let name = rank.as_str().unwrap();
        let input = if upper { name.to_uppercase() } else { name.to_lowercase() };
        prop_assert_eq!(input.parse::<Level>().unwrap(), rank);
    }

    /// Unknown names are rejected rather than ignored
    #[test]
    fn test_parse_rejects_unknown(word in "[b-df-hj-np-z]{3,8}") {
        prop_assert!(word.parse::<Level>().is_err());
    }
}

// ============================================================================
// Dispatch Tests
// ============================================================================

proptest! {
    /// Each call yields one event per accepting appender with the call's rank
    /// and payload
    #[test]
    fn test_one_event_per_call(rank in any_rank(), message in ".*") {
        let memory = Arc::new(MemoryAppender::new());
        let logger = Logger::builder().appender(Arc::clone(&memory)).build();

        logger.log(rank, Some(Message::from(message.clone())), None);

        let events = memory.events();
        prop_assert_eq!(events.len(), 1);
        prop_assert_eq!(events[0].level, rank);
        prop_assert_eq!(events[0].message.clone(), Some(Message::Text(message)));
    }

    /// Under logger filtering an appender sees exactly the ranks its mask matches
    #[test]
    fn test_logger_filtering_follows_mask(
        mask in any_mask(),
        ranks in prop::collection::vec(any_rank(), 0..20)
    ) {
        let everything = Arc::new(MemoryAppender::new());
        let masked = Arc::new(MemoryAppender::new());
        let logger = Logger::builder()
            .appender(Arc::clone(&everything))
            .appender(Masked(Arc::clone(&masked), mask))
            .build();

        for rank in &ranks {
            logger.log(*rank, None, None);
        }

        let expected: Vec<Level> = ranks.iter().copied().filter(|r| mask.matches(*r)).collect();
        let received: Vec<Level> = masked.events().iter().map(|e| e.level).collect();
        prop_assert_eq!(received, expected);
        prop_assert_eq!(everything.len(), ranks.len());
    }

    /// Text payloads always render as a single line
    #[test]
    fn test_text_rendering_single_line(message in any::<String>(), rank in any_rank()) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let logger = Logger::builder()
            .appender(Rendering(Arc::clone(&lines)))
            .build();

        logger.log(rank, Some(Message::from(message)), None);

        let lines = lines.lock();
        prop_assert_eq!(lines.len(), 1);
        prop_assert!(!lines[0].chars().any(is_line_break));
    }
}

fn is_line_break(c: char) -> bool {
    c.is_control() || c == '\u{2028}' || c == '\u{2029}'
}

/// Declares a mask but accepts whatever it is handed, leaving the decision
/// to the logger.
struct Masked(Arc<MemoryAppender>, Level);

impl Appender for Masked {
    fn name(&self) -> &str {
        "masked"
    }

    fn levels(&self) -> Level {
        self.1
    }

    fn append(&self, event: &Event<'_>) {
        self.0.append(event)
    }
}

struct Rendering(Arc<Mutex<Vec<String>>>);

impl Appender for Rendering {
    fn name(&self) -> &str {
        "rendering"
    }

    fn levels(&self) -> Level {
        Level::ALL
    }

    fn append(&self, event: &Event<'_>) {
        let line = format_text(event, &TimestampFormat::default(), false);
        self.0.lock().push(line);
    }
}
