use dmap_core::{
    DecodeError, Diagnostic, Node, SemanticType, TagCode, Value, convert, decode,
    decode_with_sink, encode, registry,
};

fn code(bytes: &[u8; 4]) -> TagCode {
    TagCode::new(*bytes)
}

fn tlv(tag: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + payload.len());
    out.extend_from_slice(tag);
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(payload);
    out
}

#[test]
fn round_trip_login_response() {
    let status = convert::encode_u32(200);
    let session = convert::encode_u32(42);
    let message = encode(
        code(b"mlog"),
        &[
            (code(b"mstt"), status.as_slice()),
            (code(b"mlid"), session.as_slice()),
        ],
    )
    .expect("encode");

    let root = decode(&message).expect("decode").expect("message");
    assert_eq!(root.code(), code(b"mlog"));
    let children = root.children().expect("container");
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].code(), code(b"mstt"));
    assert_eq!(children[0].value, Value::UInt32(200));
    assert_eq!(children[1].code(), code(b"mlid"));
    assert_eq!(children[1].value, Value::UInt32(42));
}

#[test]
fn round_trip_mixed_scalar_types() {
    let item_kind = convert::encode_u8(2);
    let year = convert::encode_u16(1997);
    let persistent_id = convert::encode_u64(0x0102_0304_0506_0708);
    let supports_update = convert::encode_bool(true);
    let added = convert::encode_date(1_262_454_438).expect("date in range");
    let protocol = convert::encode_version(2, 0, 10);
    let pairing_guid = convert::encode_hex("00000000deadbeef").expect("hex");

    let message = encode(
        code(b"mlit"),
        &[
            (code(b"mikd"), item_kind.as_slice()),
            (code(b"asyr"), year.as_slice()),
            (code(b"mper"), persistent_id.as_slice()),
            (code(b"msup"), supports_update.as_slice()),
            (code(b"asda"), added.as_slice()),
            (code(b"mpro"), protocol.as_slice()),
            (code(b"cmpg"), pairing_guid.as_slice()),
            (code(b"minm"), b"My Song"),
        ],
    )
    .expect("encode");

    let root = decode(&message).expect("decode").expect("message");
    let children = root.children().expect("container");
    assert_eq!(children[0].value, Value::Byte(2));
    assert_eq!(children[1].value, Value::UInt16(1997));
    assert_eq!(children[2].value, Value::UInt64(0x0102_0304_0506_0708));
    assert_eq!(children[3].value, Value::Bool(true));
    assert_eq!(children[4].value, Value::Date(1_262_454_438));
    assert_eq!(
        children[5].value,
        Value::Version {
            major: 2,
            minor: 0,
            patch: 10,
        }
    );
    assert_eq!(children[6].value, Value::Hex("00000000deadbeef".to_string()));
    assert_eq!(children[7].value, Value::Text("My Song".to_string()));
}

#[test]
fn inputs_shorter_than_header_decode_to_none() {
    let bytes = b"mlog\x00\x00\x00";
    for len in 0..bytes.len() + 1 {
        assert!(
            decode(&bytes[..len]).expect("soft failure").is_none(),
            "len {len} should not produce a node"
        );
    }
}

#[test]
fn nested_listing_decodes_in_order() {
    // Server-databases shape: status, then a listing with one item.
    let item = tlv(b"minm", b"Library");
    let listing = tlv(b"mlit", &item);
    let mut body = tlv(b"mstt", &convert::encode_u32(200));
    body.extend_from_slice(&tlv(b"mlcl", &listing));
    let message = tlv(b"avdb", &body);

    let root = decode(&message).expect("decode").expect("message");
    assert_eq!(root.definition.name, "daap.serverdatabases");
    let children = root.children().expect("container");
    assert_eq!(children.len(), 2);

    let listing = children[1].children().expect("listing");
    assert_eq!(listing.len(), 1);
    let item = listing[0].children().expect("listing item");
    assert_eq!(item[0].value, Value::Text("Library".to_string()));
}

#[test]
fn anomalies_degrade_but_surface() {
    let mut body = tlv(b"zzzz", b"abcd");
    body.extend_from_slice(&tlv(b"canp", &[0u8; 16]));
    body.extend_from_slice(&tlv(b"mstt", &[0x00, 0xc8]));
    let message = tlv(b"cmst", &body);

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let root = decode_with_sink(&message, &mut diagnostics)
        .expect("decode")
        .expect("message");

    let children = root.children().expect("container");
    assert_eq!(children[0].value, Value::Text("abcd".to_string()));
    assert_eq!(children[1].value, Value::Bytes(vec![0u8; 16]));
    assert_eq!(children[2].value, Value::Bytes(vec![0x00, 0xc8]));

    // The unregistered code is silent; the other two anomalies surface.
    let codes: Vec<String> = diagnostics
        .iter()
        .map(|diagnostic| diagnostic.code.to_string())
        .collect();
    assert_eq!(codes, ["canp", "mstt"]);
}

#[test]
fn overrun_aborts_with_structured_error() {
    let mut entry = tlv(b"minm", b"hi");
    entry[4..8].copy_from_slice(&100u32.to_be_bytes());
    let message = tlv(b"mlog", &entry);

    let err = decode(&message).expect_err("overrun");
    assert!(matches!(err, DecodeError::LengthOverrun { .. }));
    assert!(err.to_string().contains("minm"));
}

#[test]
fn every_registered_container_round_trips_empty() {
    for definition in registry::all() {
        if definition.kind != SemanticType::Container {
            continue;
        }
        let message = encode(definition.code, &[]).expect("encode");
        let root = decode(&message).expect("decode").expect("message");
        assert_eq!(root.definition, *definition);
        assert_eq!(root.value, Value::List(Vec::new()));
    }
}

#[test]
fn json_view_is_stable() {
    let status = convert::encode_u32(200);
    let name = convert::encode_text("Library");
    let message = encode(
        code(b"mlog"),
        &[
            (code(b"mstt"), status.as_slice()),
            (code(b"minm"), name.as_slice()),
        ],
    )
    .expect("encode");
    let root = decode(&message).expect("decode").expect("message");

    let json = serde_json::to_value(&root).expect("json view");
    assert_eq!(
        json,
        serde_json::json!({
            "code": "mlog",
            "type": "container",
            "name": "dmap.loginresponse",
            "value": [
                {
                    "code": "mstt",
                    "type": "uint32",
                    "name": "dmap.status",
                    "value": 200,
                },
                {
                    "code": "minm",
                    "type": "string",
                    "name": "dmap.itemname",
                    "value": "Library",
                },
            ],
        })
    );
}

#[test]
fn deep_nesting_decodes() {
    let mut message = tlv(b"miid", &convert::encode_u32(1));
    for _ in 0..64 {
        message = tlv(b"mcon", &message);
    }

    let root = decode(&message).expect("decode").expect("message");
    let mut node: &Node = &root;
    let mut depth = 0;
    while let Some(children) = node.children() {
        assert_eq!(children.len(), 1);
        node = &children[0];
        depth += 1;
    }
    assert_eq!(depth, 64);
    assert_eq!(node.value, Value::UInt32(1));
}
