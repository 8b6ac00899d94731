use crate::feature::{Feature, NUM_FIELDS};

const FIELD_VALUES: &[&str] = &["*", "", "NNG", "테스트", "이/VCP/*+ㅂ니다/EF/*", "T", "F"];

fn join_with(fill: &str, pos: usize, value: &str, num_fields: usize) -> String {
    (0..num_fields)
        .map(|i| if i == pos { value } else { fill })
        .collect::<Vec<_>>()
        .join(",")
}

#[test]
fn test_eight_fields_never_fail() {
    for pos in 0..NUM_FIELDS {
        for value in FIELD_VALUES {
            for fill in FIELD_VALUES {
                let raw = join_with(fill, pos, value, NUM_FIELDS);
                assert!(Feature::decode(&raw).is_ok(), "{raw}");
            }
        }
    }
}

#[test]
fn test_other_counts_fail() {
    for num_fields in (1..=16).filter(|&n| n != NUM_FIELDS) {
        let raw = join_with("*", 0, "NNG", num_fields);
        let e = Feature::decode(&raw).unwrap_err();
        assert_eq!(e.num_fields(), num_fields);
    }
}

#[test]
fn test_absent_in_each_position() {
    for pos in 0..NUM_FIELDS {
        let raw = join_with("x", pos, "*", NUM_FIELDS);
        let feature = Feature::decode(&raw).unwrap();
        let fields = [
            feature.pos(),
            feature.semantic(),
            feature.has_jongseong().map(|_| "x"),
            feature.reading(),
            feature.morpheme_type(),
            feature.start_pos(),
            feature.end_pos(),
            feature.expression(),
        ];
        assert_eq!(fields[pos], None, "{raw}");
        for (i, field) in fields.iter().enumerate() {
            if i != pos && i != 2 {
                assert_eq!(*field, Some("x"), "{raw}");
            }
        }
    }
}

#[test]
fn test_reencode_round_trip() {
    for pos in 0..NUM_FIELDS {
        for value in FIELD_VALUES {
            let raw = join_with("*", pos, value, NUM_FIELDS);
            let reencoded = Feature::decode(&raw).unwrap().to_string();
            if pos == 2 && !matches!(*value, "T" | "F") {
                assert_eq!(reencoded, join_with("*", 2, "*", NUM_FIELDS));
            } else {
                assert_eq!(reencoded, raw);
            }
        }
    }
}
