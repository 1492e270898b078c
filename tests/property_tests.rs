//! Property-based tests for safe_toolkit using proptest

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use safe_toolkit::prelude::*;
use std::collections::HashSet;

// ============================================================================
// OrderedMap Tests
// ============================================================================

#[derive(Debug, Clone)]
enum MapOp {
    Set(u8, u32),
    Delete(u8),
}

fn map_op() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        (0u8..16, any::<u32>()).prop_map(|(k, v)| MapOp::Set(k, v)),
        (0u8..16).prop_map(MapOp::Delete),
    ]
}

proptest! {
    /// Keys stay in first-insertion order, unique, and aligned with values
    #[test]
    fn test_ordered_map_matches_model(ops in prop::collection::vec(map_op(), 0..200)) {
        let map = OrderedMap::new();
        let mut model: Vec<(u8, u32)> = Vec::new();

        for op in ops {
            match op {
                MapOp::Set(k, v) => {
                    map.set(k, v);
                    match model.iter_mut().find(|(mk, _)| *mk == k) {
                        Some(entry) => entry.1 = v,
                        None => model.push((k, v)),
                    }
                }
                MapOp::Delete(k) => {
                    let expected = model.iter().position(|(mk, _)| *mk == k).map(|i| model.remove(i).1);
                    prop_assert_eq!(map.delete(&k), expected);
                }
            }
        }

        let keys = map.keys();
        let values = map.values();
        prop_assert_eq!(keys.len(), map.len());
        prop_assert_eq!(values.len(), map.len());
        prop_assert_eq!(keys.iter().collect::<HashSet<_>>().len(), keys.len());
        prop_assert_eq!(map.entries(), model.clone());
        for (k, v) in model {
            prop_assert_eq!(map.get(&k), Some(v));
        }
    }
}

// ============================================================================
// Slice Tests
// ============================================================================

#[derive(Debug, Clone)]
enum SliceOp {
    Append(i16),
    Remove(usize),
}

fn slice_op() -> impl Strategy<Value = SliceOp> {
    prop_oneof![
        any::<i16>().prop_map(SliceOp::Append),
        (0usize..40).prop_map(SliceOp::Remove),
    ]
}

proptest! {
    /// Size is appends minus successful removes; elements shift left on remove
    #[test]
    fn test_slice_matches_vec(ops in prop::collection::vec(slice_op(), 0..200)) {
        let slice = Slice::new();
        let mut model: Vec<i16> = Vec::new();
        let mut appends = 0usize;
        let mut removes = 0usize;

        for op in ops {
            match op {
                SliceOp::Append(v) => {
                    slice.append(v);
                    model.push(v);
                    appends += 1;
                }
                SliceOp::Remove(i) => {
                    let in_range = i < model.len();
                    prop_assert_eq!(slice.remove(i), in_range);
                    if in_range {
                        model.remove(i);
                        removes += 1;
                    }
                }
            }
        }

        prop_assert_eq!(slice.len(), appends - removes);
        for (i, v) in model.iter().enumerate() {
            prop_assert_eq!(slice.get(i), Some(*v));
        }
        prop_assert_eq!(slice.get(model.len()), None);
        prop_assert_eq!(slice.items(), model);
    }

    /// UniqueSlice never holds duplicates and keeps first-seen order
    #[test]
    fn test_unique_slice_dedups(values in prop::collection::vec(0u8..20, 0..100)) {
        let slice = UniqueSlice::new();
        let mut seen = HashSet::new();
        let mut model = Vec::new();

        for v in values {
            prop_assert_eq!(slice.append(v), seen.insert(v));
            if !model.contains(&v) {
                model.push(v);
            }
        }

        prop_assert_eq!(slice.items(), model);
        prop_assert_eq!(slice.len(), seen.len());
    }

    /// Appending a value twice leaves exactly one copy
    #[test]
    fn test_unique_slice_double_append(v in any::<String>()) {
        let slice = UniqueSlice::new();
        slice.append(v.clone());
        slice.append(v.clone());
        prop_assert_eq!(slice.len(), 1);
        prop_assert_eq!(slice.items(), vec![v]);
    }
}

// ============================================================================
// Line Format Tests
// ============================================================================

proptest! {
    /// A formatted entry is always one line with a fixed prefix layout
    #[test]
    fn test_formatted_entry_is_single_line(
        label in "[a-z]{0,12}",
        parts in prop::collection::vec(".*", 0..5),
        color in any::<bool>(),
        level in prop::sample::select(LogLevel::ALL.to_vec()),
    ) {
        let ts = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let boxed: Vec<MessagePart> = parts
            .into_iter()
            .map(|p| Box::new(p) as MessagePart)
            .collect();
        let entry = LogEntry::at(ts, level, label.clone(), boxed);
        let formatter = LineFormatter::new(color);
        let line = formatter.format(&entry);

        prop_assert!(!line.contains('\n'));
        prop_assert!(!line.contains('\r'));
        prop_assert_eq!(line.trim(), line.as_str());
        let expected_prefix = format!("2023/12/31 23:59:59 {} [{}]", formatter.level_tag(level), label);
        prop_assert!(line.starts_with(&expected_prefix), "{:?} vs {:?}", line, expected_prefix);
    }

    /// Lenient parsing agrees with strict parsing and defaults to Info
    #[test]
    fn test_parse_lenient(s in "\\PC{0,10}") {
        let lenient = LogLevel::parse_lenient(&s);
        match s.parse::<LogLevel>() {
            Ok(strict) => prop_assert_eq!(lenient, strict),
            Err(_) => prop_assert_eq!(lenient, LogLevel::Info),
        }
    }

    /// Level names parse case-insensitively
    #[test]
    fn test_level_case_insensitive(level in prop::sample::select(LogLevel::ALL.to_vec()), upper in any::<bool>()) {
        let name = if upper { level.to_str().to_uppercase() } else { level.to_str().to_string() };
        prop_assert_eq!(name.parse::<LogLevel>(), Ok(level));
    }
}
