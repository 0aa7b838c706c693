//! Certificate and chain decoding across every accepted input shape

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hex_literal::hex;
use rulecrypt_x509::{parse_certificates, DecodeErrorKind};

const MAIL_GOOGLE_DER_B64: &str = include_str!("fixtures/mail_google_der.b64");
const THAWTE_CHAIN_DER_B64: &str = include_str!("fixtures/thawte_chain_der.b64");
const OPA_LEAF_PEM: &str = include_str!("fixtures/opa_leaf.pem");
const OPA_LEAF_PEM_B64: &str = include_str!("fixtures/opa_leaf_pem.b64");
const OPA_CHAIN_PEM: &str = include_str!("fixtures/opa_chain.pem");
const OPA_CHAIN_PEM_B64: &str = include_str!("fixtures/opa_chain_pem.b64");

fn common_names(input: &str) -> Vec<String> {
    parse_certificates(input)
        .expect("fixture parses")
        .iter()
        .map(|cert| cert.subject.common_name().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_single_der_certificate() {
    rulecrypt_common::Logging::init_test();
    let chain = parse_certificates(MAIL_GOOGLE_DER_B64).expect("valid DER");
    assert_eq!(chain.len(), 1);

    let cert = chain.leaf();
    assert_eq!(cert.raw.len(), 958);
    assert_eq!(cert.version, 3);
    assert_eq!(cert.serial_number, "1404354960355712309");
    assert_eq!(cert.subject.common_name(), Some("mail.google.com"));
    assert_eq!(cert.subject.organization(), Some("Google Inc"));
    assert_eq!(cert.subject.get("Locality"), Some("Mountain View"));
    assert_eq!(cert.subject.get("Province"), Some("California"));
    assert_eq!(cert.subject.country(), Some("US"));
    assert_eq!(
        cert.issuer.common_name(),
        Some("Google Internet Authority G2")
    );
    assert_eq!(cert.not_before, "2014-01-29T13:27:43Z");
    assert_eq!(cert.not_after, "2014-05-29T00:00:00Z");
    assert_eq!(cert.signature_algorithm, "SHA1-RSA");
}

#[test]
fn test_ecdsa_public_key() {
    let chain = parse_certificates(MAIL_GOOGLE_DER_B64).expect("valid DER");
    let cert = chain.leaf();

    assert_eq!(cert.public_key_algorithm, "ECDSA");
    assert_eq!(cert.public_key.curve.as_deref(), Some("P-256"));
    assert_eq!(cert.public_key.key_size, Some(256));
    assert!(cert.public_key.modulus.is_none());
    assert!(cert.public_key.exponent.is_none());
}

#[test]
fn test_well_known_extensions() {
    let chain = parse_certificates(MAIL_GOOGLE_DER_B64).expect("valid DER");
    let cert = chain.leaf();

    let ids: Vec<&str> = cert.extensions.iter().map(|ext| ext.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "2.5.29.37",
            "2.5.29.17",
            "2.5.29.15",
            "1.3.6.1.5.5.7.1.1",
            "2.5.29.14",
            "2.5.29.19",
            "2.5.29.35",
            "2.5.29.32",
            "2.5.29.31",
        ]
    );
    let critical: Vec<&str> = cert
        .extensions
        .iter()
        .filter(|ext| ext.critical)
        .map(|ext| ext.id.as_str())
        .collect();
    assert_eq!(critical, ["2.5.29.19"]);

    let details = &cert.details;
    assert_eq!(details.alt_names.dns_names, ["mail.google.com"]);
    assert!(details.basic_constraints_valid);
    assert!(!details.is_ca);
    assert_eq!(details.key_usage, ["DigitalSignature"]);
    assert_eq!(details.ext_key_usage, ["ServerAuth", "ClientAuth"]);
    assert_eq!(details.ocsp_server, ["http://clients1.google.com/ocsp"]);
    assert_eq!(
        details.issuing_certificate_url,
        ["http://pki.google.com/GIAG2.crt"]
    );
    assert_eq!(
        details.crl_distribution_points,
        ["http://pki.google.com/GIAG2.crl"]
    );
    assert_eq!(
        details.subject_key_id.as_deref(),
        Some(&hex!("889c6d8a602e4dfc1bf9a52d067e5460aade2af3")[..])
    );
    assert_eq!(
        details.authority_key_id.as_deref(),
        Some(&hex!("4add06161bbcf668b576f581b6bb621aba5a812f")[..])
    );
}

#[test]
fn test_der_chain_keeps_input_order() {
    assert_eq!(
        common_names(THAWTE_CHAIN_DER_B64),
        ["mail.google.com", "Thawte SGC CA"]
    );

    let chain = parse_certificates(THAWTE_CHAIN_DER_B64).expect("valid DER chain");
    let leaf = chain.leaf();
    assert_eq!(leaf.raw.len(), 806);
    assert_eq!(leaf.serial_number, "147373237180544303698448076873493199841");
    assert_eq!(leaf.public_key_algorithm, "RSA");
    assert_eq!(leaf.public_key.key_size, Some(1024));
}

#[test]
fn test_der_chain_raw_slices_reassemble_input() {
    let der = STANDARD
        .decode(THAWTE_CHAIN_DER_B64.trim())
        .expect("fixture is base64");
    let chain = parse_certificates(THAWTE_CHAIN_DER_B64).expect("valid DER chain");

    let joined: Vec<u8> = chain.iter().flat_map(|cert| cert.raw.clone()).collect();
    assert_eq!(joined, der);
}

#[test]
fn test_pem_literal_matches_base64_of_pem() {
    let literal = parse_certificates(OPA_LEAF_PEM).expect("PEM literal");
    let wrapped = parse_certificates(OPA_LEAF_PEM_B64).expect("base64 of PEM");
    assert_eq!(literal, wrapped);

    let cert = literal.leaf();
    assert_eq!(cert.subject.common_name(), Some("openpolicyagent.org"));
    assert_eq!(cert.signature_algorithm, "SHA256-RSA");
    assert_eq!(cert.public_key_algorithm, "RSA");
    assert_eq!(cert.public_key.key_size, Some(2048));
    assert_eq!(cert.public_key.exponent, Some(65537));
    assert!(cert
        .public_key
        .modulus
        .as_deref()
        .is_some_and(|n| n.starts_with("b2cbc1d95d54c9d934")));
    assert_eq!(
        cert.details.alt_names.dns_names,
        ["openpolicyagent.org", "www.openpolicyagent.org"]
    );
}

#[test]
fn test_pem_chain_in_both_shapes() {
    let expected = [
        "openpolicyagent.org",
        "Let's Encrypt Authority X3",
        "DST Root CA X3",
    ];
    assert_eq!(common_names(OPA_CHAIN_PEM), expected);
    assert_eq!(common_names(OPA_CHAIN_PEM_B64), expected);
}

#[test]
fn test_der_reencoded_as_pem_parses_identically() {
    let der = STANDARD
        .decode(THAWTE_CHAIN_DER_B64.trim())
        .expect("fixture is base64");
    let from_der = parse_certificates(THAWTE_CHAIN_DER_B64).expect("valid DER chain");

    let blocks: Vec<pem::Pem> = from_der
        .iter()
        .map(|cert| pem::Pem::new("CERTIFICATE", cert.raw.clone()))
        .collect();
    let pem_text = pem::encode_many(&blocks);
    let from_pem = parse_certificates(&pem_text).expect("re-encoded PEM");
    assert_eq!(from_der, from_pem);

    let pem_b64 = STANDARD.encode(pem_text.as_bytes());
    let from_pem_b64 = parse_certificates(&pem_b64).expect("base64 of re-encoded PEM");
    assert_eq!(from_der, from_pem_b64);
    assert_eq!(der.len(), from_der.iter().map(|c| c.raw.len()).sum::<usize>());
}

#[test]
fn test_wrapped_base64_lines() {
    let wrapped: String = MAIL_GOOGLE_DER_B64
        .trim()
        .as_bytes()
        .chunks(64)
        .map(|line| format!("{}\r\n", String::from_utf8_lossy(line)))
        .collect();
    assert_eq!(
        parse_certificates(&wrapped).expect("wrapped base64"),
        parse_certificates(MAIL_GOOGLE_DER_B64).expect("single line base64")
    );
}

#[test]
fn test_repeated_parse_is_deterministic() {
    let first = parse_certificates(OPA_CHAIN_PEM).expect("PEM chain");
    let second = parse_certificates(OPA_CHAIN_PEM).expect("PEM chain");
    assert_eq!(first, second);
}

#[test]
fn test_base64_of_non_certificate_is_structure_error() {
    let err = parse_certificates("YmFkc3RyaW5n").expect_err("badstring is not DER");
    assert_eq!(err.kind(), DecodeErrorKind::Structure);
    assert!(err.to_string().starts_with("asn1: structure error"));
}

#[test]
fn test_plain_text_is_base64_error() {
    let err = parse_certificates("foobar").expect_err("foobar is not base64");
    assert_eq!(err.kind(), DecodeErrorKind::Base64);
    assert!(err.to_string().starts_with("illegal base64 data"));
}

#[test]
fn test_empty_input_fails() {
    assert!(parse_certificates("").is_err());
}

#[test]
fn test_trailing_garbage_after_der_fails() {
    let mut der = STANDARD
        .decode(MAIL_GOOGLE_DER_B64.trim())
        .expect("fixture is base64");
    der.extend_from_slice(b"trailing");
    let err = parse_certificates(&STANDARD.encode(der)).expect_err("garbage remainder");
    assert_eq!(err.kind(), DecodeErrorKind::Structure);
}

#[test]
fn test_dangling_pem_block_fails_whole_chain() {
    let input = format!("{OPA_LEAF_PEM}\n-----BEGIN CERTIFICATE-----\nMIIB\n");
    let err = parse_certificates(&input).expect_err("trailing block has no END marker");
    assert_eq!(err.kind(), DecodeErrorKind::Base64);
    assert!(err.to_string().starts_with("illegal base64 data: unterminated PEM block"));

    let wrapped = STANDARD.encode(input.as_bytes());
    let err = parse_certificates(&wrapped).expect_err("same block inside base64");
    assert_eq!(err.kind(), DecodeErrorKind::Base64);
}

#[test]
fn test_corrupt_pem_body_is_base64_error() {
    let corrupt = "-----BEGIN CERTIFICATE-----\n@@@@\n-----END CERTIFICATE-----\n";
    let err = parse_certificates(corrupt).expect_err("body is not base64");
    assert_eq!(err.kind(), DecodeErrorKind::Base64);
}

#[test]
fn test_serialized_field_names() {
    let chain = parse_certificates(MAIL_GOOGLE_DER_B64).expect("valid DER");
    let value = serde_json::to_value(&chain).expect("serializable");

    let cert = &value[0];
    assert_eq!(cert["Subject"]["CommonName"], "mail.google.com");
    assert_eq!(cert["Issuer"]["Organization"], "Google Inc");
    assert_eq!(cert["SerialNumber"], "1404354960355712309");
    assert_eq!(cert["NotAfter"], "2014-05-29T00:00:00Z");
    assert_eq!(cert["DNSNames"][0], "mail.google.com");
    assert_eq!(cert["IsCA"], false);
    assert_eq!(cert["OCSPServer"][0], "http://clients1.google.com/ocsp");
    assert_eq!(cert["PublicKey"]["Curve"], "P-256");
    assert_eq!(cert["Extensions"][5]["Critical"], true);
    assert_eq!(
        cert["Raw"],
        serde_json::Value::String(MAIL_GOOGLE_DER_B64.trim().to_string())
    );
}
