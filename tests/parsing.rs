use host_machine_uid::{Encoding, HostMachineUid, ParseError, StorageId, SystemId};

fn uid(raw: &str) -> HostMachineUid {
    HostMachineUid::parse(raw).unwrap()
}

#[test]
fn display_reproduces_raw_text() {
    let raw = "P57TL8GGQI69~PG796169S564N489~GBFUL623C0UIG";
    assert_eq!(uid(raw).to_string(), raw);
}

#[test]
fn valid_identifiers_round_trip_through_display() {
    let valid = [
        // Compact: no storage id, empty trailing slot, duplicate storage ids.
        "P57TL8GGQI69~",
        "P57TL8GGQI69~PG796169S564N489~",
        "P57TL8GGQI69~PG796169S564N489~PG796169S564N489",
        // Grouped equivalents.
        "SID=P57TL8GGQI69~",
        "SID=P57TL8GGQI69~PG796169S564N489 SID=P57TL8GGQI69~",
        "SID=P57TL8GGQI69~PG796169S564N489 SID=P57TL8GGQI69~PG796169S564N489",
    ];
    for raw in valid {
        assert_eq!(uid(raw).to_string(), raw, "round trip failed for '{raw}'");
    }
}

#[test]
fn invalid_identifiers_fail_with_typed_errors() {
    let invalid = [
        ("", ParseError::EmptyInput),
        // A bare token cannot be told apart from a lone system id.
        (
            "P57TL8GGQI69",
            ParseError::MalformedSegment {
                segment: "P57TL8GGQI69".into(),
            },
        ),
        (
            "P57TL8GGQI69~P57TL8GGQI69",
            ParseError::StorageEqualsSystem {
                value: "P57TL8GGQI69".into(),
            },
        ),
        (
            "P57TL8GGQI69~P57TL8GGQI69~PG796169S564N489",
            ParseError::StorageEqualsSystem {
                value: "P57TL8GGQI69".into(),
            },
        ),
        (
            "SID=",
            ParseError::MalformedSegment {
                segment: "SID=".into(),
            },
        ),
        (
            "SID=P57TL8GGQI69",
            ParseError::MalformedSegment {
                segment: "SID=P57TL8GGQI69".into(),
            },
        ),
        (
            "SID=P57TL8GGQI69~P57TL8GGQI69",
            ParseError::StorageEqualsSystem {
                value: "P57TL8GGQI69".into(),
            },
        ),
        (
            "SID=P57TL8GGQI69~P57TL8GGQI69 SID=P57TL8GGQI69~GBFUL623C0UIG",
            ParseError::StorageEqualsSystem {
                value: "P57TL8GGQI69".into(),
            },
        ),
        (
            "SID=P57TL8GGQI69~PG796169S564N489 SID=QZ7TL8GGQI69~GBFUL623C0UIG",
            ParseError::SystemIdMismatch {
                expected: "P57TL8GGQI69".into(),
                found: "QZ7TL8GGQI69".into(),
            },
        ),
    ];
    for (raw, expected) in invalid {
        assert_eq!(
            HostMachineUid::parse(raw).unwrap_err(),
            expected,
            "wrong error for '{raw}'"
        );
    }
}

#[test]
fn shape_violations_are_malformed_segments() {
    let malformed = [
        // Empty system id in either encoding.
        "~GBFUL623C0UIG",
        "SID=~GBFUL623C0UIG",
        // A group may carry exactly one delimiter.
        "SID=P57TL8GGQI69~A~B SID=P57TL8GGQI69~C",
        // Space-separated tokens must all carry the group prefix.
        "P57TL8GGQI69~A SID=P57TL8GGQI69~B",
        // Whitespace-only input yields no groups.
        " ",
    ];
    for raw in malformed {
        assert!(
            matches!(
                HostMachineUid::parse(raw),
                Err(ParseError::MalformedSegment { .. })
            ),
            "expected malformed segment for '{raw}'"
        );
    }
}

#[test]
fn source_encoding_is_detected() {
    assert_eq!(uid("SYS~A").source_encoding(), Encoding::Compact);
    assert_eq!(uid("SID=SYS~A").source_encoding(), Encoding::Grouped);
    // A single group carries no space but is still grouped input.
    assert_eq!(uid("SID=SYS~").source_encoding(), Encoding::Grouped);
    assert_eq!(
        uid("SID=SYS~A SID=SYS~B").source_encoding(),
        Encoding::Grouped
    );
}

#[test]
fn storage_slots_are_kept_in_encounter_order() {
    let parsed = uid("SYS~A~~B");
    assert_eq!(parsed.system_id(), &SystemId::parse("SYS").unwrap());
    assert_eq!(
        parsed.storage_ids(),
        &[
            StorageId::parse("A").unwrap(),
            StorageId::parse("").unwrap(),
            StorageId::parse("B").unwrap(),
        ]
    );
}

#[test]
fn single_trailing_delimiter_records_no_storage() {
    assert!(uid("SYS~").storage_ids().is_empty());
    // An explicitly recorded empty slot is different evidence.
    let grouped = uid("SID=SYS~");
    assert_eq!(grouped.storage_ids().len(), 1);
    assert!(grouped.storage_ids()[0].is_empty());
    // Two empty compact slots survive as two slots.
    assert_eq!(uid("SYS~~").storage_ids().len(), 2);
}

#[test]
fn parsing_is_deterministic() {
    let raw = "SID=SYS~A SID=SYS~B";
    assert_eq!(uid(raw), uid(raw));
}

#[test]
fn system_id_rejects_embedded_delimiter() {
    assert!(SystemId::parse("SYS").is_ok());
    assert!(SystemId::parse("").is_err());
    assert!(SystemId::parse("SY~S").is_err());
    // Storage ids may be empty but never carry the delimiter.
    assert!(StorageId::parse("").is_ok());
    assert!(StorageId::parse("A~B").is_err());
}

#[test]
fn serde_round_trips_as_raw_string() {
    let raw = "SID=SYS~A SID=SYS~B";
    let parsed = uid(raw);
    assert_eq!(
        serde_json::to_string(&parsed).unwrap(),
        format!("\"{raw}\"")
    );
    let restored: HostMachineUid = serde_json::from_str(&format!("\"{raw}\"")).unwrap();
    assert_eq!(restored, parsed);
}

#[test]
fn serde_rejects_malformed_payload_strings() {
    assert!(serde_json::from_str::<HostMachineUid>("\"SYS~SYS\"").is_err());
    assert!(serde_json::from_str::<HostMachineUid>("\"\"").is_err());
}
