use harvest_protocol::{
    ArcImsProtocol, AttributeMap, CswProtocol, DecodeError, Descriptor, Protocol, ProtocolBase,
    ProtocolRegistry, PropertyError,
};
use std::any::Any;
use std::sync::Arc;
use std::thread;

#[test]
fn decodes_full_csw_descriptor() {
    let registry = ProtocolRegistry::with_defaults();
    let protocol = registry
        .parse_descriptor(
            r#"<protocol type="CSW" flags="3" destinations="d1,d2"><host>http://example.org</host></protocol>"#,
        )
        .expect("decoded");

    assert_eq!(protocol.kind(), "CSW");
    assert_eq!(protocol.flags(), 3);
    assert_eq!(
        protocol.destinations(),
        Some(&["d1".to_string(), "d2".to_string()][..])
    );
    let expected: AttributeMap = [("host", "http://example.org")].into_iter().collect();
    assert_eq!(protocol.attributes(), &expected);
    assert!(protocol.downcast_ref::<CswProtocol>().is_some());
}

#[test]
fn family_name_is_case_insensitive() {
    let registry = ProtocolRegistry::with_defaults();
    for name in ["arcims", "ARCIMS", "ArcIms", " arcIMS "] {
        let text = format!(r#"<protocol type="{}"/>"#, name);
        let protocol = registry.parse_descriptor(&text).expect("decoded");
        assert_eq!(protocol.kind(), "ArcIms");
    }
}

#[test]
fn unknown_family_is_rejected() {
    let registry = ProtocolRegistry::with_defaults();
    let err = registry
        .parse_descriptor(r#"<protocol type="unknown"/>"#)
        .unwrap_err();
    assert!(matches!(err, DecodeError::UnsupportedProtocol(ref name) if name == "unknown"));
    assert_eq!(err.to_string(), "unsupported protocol: \"unknown\"");
}

#[test]
fn missing_type_attribute_is_unsupported_empty_name() {
    let registry = ProtocolRegistry::with_defaults();
    let err = registry
        .parse_descriptor("<protocol><host>x</host></protocol>")
        .unwrap_err();
    assert!(matches!(err, DecodeError::UnsupportedProtocol(ref name) if name.is_empty()));
}

#[test]
fn missing_protocol_element_is_unsupported_empty_name() {
    let registry = ProtocolRegistry::with_defaults();
    let err = registry
        .parse_descriptor(r#"<source type="CSW"><host>x</host></source>"#)
        .unwrap_err();
    assert!(matches!(err, DecodeError::UnsupportedProtocol(ref name) if name.is_empty()));
}

#[test]
fn malformed_markup_is_not_unsupported() {
    let registry = ProtocolRegistry::with_defaults();
    for text in [
        "",
        "<protocol type=\"unknown\">",
        "<protocol type=\"CSW\"><a>1</b></protocol>",
        "<protocol type='CSW' type='OAI'/>",
    ] {
        let err = registry.parse_descriptor(text).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedDescriptor(_)), "{text:?}");
    }
}

#[test]
fn unparsable_flags_default_to_zero() {
    let registry = ProtocolRegistry::with_defaults();
    let protocol = registry
        .parse_descriptor(r#"<protocol type="CSW" flags="notanumber"><a>1</a></protocol>"#)
        .expect("decoded");
    assert_eq!(protocol.flags(), 0);
    assert_eq!(protocol.attributes().get("a"), Some("1"));
}

#[test]
fn repeated_property_last_write_wins() {
    let registry = ProtocolRegistry::with_defaults();
    let protocol = registry
        .parse_descriptor(r#"<protocol type="CSW"><a>1</a><a>2</a></protocol>"#)
        .expect("decoded");
    let expected: AttributeMap = [("a", "2")].into_iter().collect();
    assert_eq!(protocol.attributes(), &expected);
}

#[test]
fn property_values_are_untrimmed() {
    let registry = ProtocolRegistry::with_defaults();
    let protocol = registry
        .parse_descriptor("<protocol type=\"RES\"><url>  http://a/b  </url><Url>x</Url></protocol>")
        .expect("decoded");
    assert_eq!(protocol.attributes().get("url"), Some("  http://a/b  "));
    assert_eq!(protocol.attributes().get("Url"), Some("x"));
}

#[test]
fn unset_destinations_keep_factory_default() {
    let registry = ProtocolRegistry::with_defaults();
    let protocol = registry
        .parse_descriptor(r#"<protocol type="WAF"/>"#)
        .expect("decoded");
    assert_eq!(protocol.destinations(), None);
    assert_eq!(protocol.summary().destinations, None);
}

#[test]
fn family_validation_error_propagates() {
    let registry = ProtocolRegistry::with_defaults();
    let err = registry
        .parse_descriptor(r#"<protocol type="ArcIms" flags="1"><port>abc</port></protocol>"#)
        .unwrap_err();
    match err {
        DecodeError::PropertyValidation(PropertyError {
            protocol, property, ..
        }) => {
            assert_eq!(protocol, "ArcIms");
            assert_eq!(property, "port");
        }
        other => panic!("unexpected error: {other}"),
    }

    let protocol = registry
        .parse_descriptor(r#"<protocol type="ArcIms"><port> 8080 </port></protocol>"#)
        .expect("decoded");
    let arcims = protocol.downcast_ref::<ArcImsProtocol>().expect("arcims");
    assert_eq!(arcims.port, 8080);
}

/// 自定义协议族：拒绝缺少 endpoint 的描述符，并带非空默认发布目标
#[derive(Debug)]
struct StrictProtocol {
    base: ProtocolBase,
}

impl Default for StrictProtocol {
    fn default() -> Self {
        Self {
            base: ProtocolBase {
                destinations: Some(vec!["default".to_string()]),
                ..ProtocolBase::default()
            },
        }
    }
}

impl Protocol for StrictProtocol {
    fn kind(&self) -> &'static str {
        "STRICT"
    }

    fn base(&self) -> &ProtocolBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ProtocolBase {
        &mut self.base
    }

    fn apply_attributes(&mut self, attributes: &AttributeMap) -> Result<(), PropertyError> {
        if attributes.non_empty("endpoint").is_none() {
            return Err(PropertyError::new("STRICT", "endpoint", "required"));
        }
        self.base.attributes = attributes.clone();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn custom_family_can_be_registered() {
    let mut registry = ProtocolRegistry::with_defaults();
    registry.register("Strict", || -> Box<dyn Protocol> {
        Box::new(StrictProtocol::default())
    });

    let protocol = registry
        .parse_descriptor(r#"<protocol type="strict"><endpoint>e</endpoint></protocol>"#)
        .expect("decoded");
    assert_eq!(protocol.kind(), "STRICT");
    assert_eq!(protocol.destinations(), Some(&["default".to_string()][..]));

    let protocol = registry
        .parse_descriptor(r#"<protocol type="strict" destinations="x"><endpoint>e</endpoint></protocol>"#)
        .expect("decoded");
    assert_eq!(protocol.destinations(), Some(&["x".to_string()][..]));

    let err = registry
        .parse_descriptor(r#"<protocol type="STRICT"/>"#)
        .unwrap_err();
    assert!(matches!(err, DecodeError::PropertyValidation(_)));
}

#[test]
fn descriptor_fields_feed_build() {
    let registry = ProtocolRegistry::with_defaults();
    let descriptor =
        Descriptor::parse(r#"<protocol type="agp" flags="4"><src-m>10</src-m></protocol>"#)
            .expect("parsed");
    assert_eq!(descriptor.family, "agp");

    let protocol = registry.build(descriptor).expect("built");
    assert_eq!(protocol.kind(), "AGP");
    assert_eq!(protocol.flags(), 4);
}

#[test]
fn concurrent_decoding_over_shared_registry() {
    let registry = Arc::new(ProtocolRegistry::with_defaults());
    let handles: Vec<_> = ["CSW", "OAI", "WAF", "THREDDS"]
        .into_iter()
        .enumerate()
        .map(|(i, family)| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for _ in 0..50 {
                    let text = format!(
                        r#"<protocol type="{}" flags="{}"><n>{}</n></protocol>"#,
                        family, i, i
                    );
                    let protocol = registry.parse_descriptor(&text).expect("decoded");
                    assert_eq!(protocol.kind(), family);
                    assert_eq!(protocol.flags(), i as i64);
                    assert_eq!(protocol.attributes().get("n"), Some(i.to_string().as_str()));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("decoder thread");
    }
}

#[test]
fn summary_reflects_decoded_fields() {
    let registry = ProtocolRegistry::with_defaults();
    let protocol = registry
        .parse_descriptor(r#"<protocol type="oai" destinations="a"><set>geo</set></protocol>"#)
        .expect("decoded");
    let summary = protocol.summary();
    assert_eq!(summary.kind, "OAI");
    assert_eq!(summary.destinations, Some(vec!["a".to_string()]));
    assert_eq!(summary.attributes.get("set"), Some("geo"));
}
