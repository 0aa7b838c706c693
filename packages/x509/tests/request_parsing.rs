//! Certificate signing request decoding

use rulecrypt_x509::{parse_certificate_request, parse_certificates, DecodeErrorKind};

const CSR_PEM: &str = include_str!("fixtures/example_csr.pem");
const CSR_PEM_B64: &str = include_str!("fixtures/example_csr_pem.b64");
const CSR_DER_B64: &str = include_str!("fixtures/example_csr_der.b64");
const OPA_LEAF_PEM: &str = include_str!("fixtures/opa_leaf.pem");

#[test]
fn test_request_fields() {
    let csr = parse_certificate_request(CSR_PEM_B64).expect("base64 of PEM");

    assert_eq!(csr.version, 0);
    assert_eq!(csr.subject.common_name(), Some("example.com"));
    assert_eq!(csr.subject.country(), Some("US"));
    assert_eq!(csr.subject.organization(), Some(" "));
    assert_eq!(csr.subject.get("OrganizationalUnit"), Some(" "));
    assert_eq!(csr.subject.get("Locality"), Some(" "));
    assert_eq!(csr.subject.get("Province"), Some(" "));
    assert_eq!(csr.signature_algorithm, "SHA256-RSA");
    assert_eq!(csr.public_key_algorithm, "RSA");
    assert_eq!(csr.public_key.key_size, Some(2048));
    assert!(csr.attributes.is_empty());
    assert!(csr.extensions.is_empty());
    assert!(csr.alt_names.dns_names.is_empty());
}

#[test]
fn test_all_shapes_agree() {
    let from_pem_b64 = parse_certificate_request(CSR_PEM_B64).expect("base64 of PEM");
    let from_pem = parse_certificate_request(CSR_PEM).expect("PEM literal");
    let from_der = parse_certificate_request(CSR_DER_B64).expect("base64 of DER");

    assert_eq!(from_pem_b64, from_pem);
    assert_eq!(from_pem, from_der);
    assert_eq!(
        serde_json::to_value(&from_der).expect("serializable")["Raw"],
        serde_json::Value::String(CSR_DER_B64.trim().to_string())
    );
}

#[test]
fn test_trailing_bytes_after_request_are_ignored() {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let mut der = STANDARD.decode(CSR_DER_B64.trim()).expect("fixture is base64");
    let expected = parse_certificate_request(CSR_DER_B64).expect("base64 of DER");
    der.extend_from_slice(b"trailing");

    let csr = parse_certificate_request(&STANDARD.encode(&der)).expect("first request wins");
    assert_eq!(csr, expected);
}

#[test]
fn test_first_pem_block_is_the_request() {
    let expected = parse_certificate_request(CSR_PEM).expect("PEM literal");

    let request_first = format!("{CSR_PEM}\n{OPA_LEAF_PEM}");
    assert_eq!(
        parse_certificate_request(&request_first).expect("later blocks ignored"),
        expected
    );

    let certificate_first = format!("{OPA_LEAF_PEM}\n{CSR_PEM}");
    let err = parse_certificate_request(&certificate_first).expect_err("first block is a certificate");
    assert_eq!(err.kind(), DecodeErrorKind::Structure);
}

#[test]
fn test_request_is_not_a_certificate() {
    let err = parse_certificates(CSR_PEM).expect_err("CSR is not a certificate");
    assert_eq!(err.kind(), DecodeErrorKind::Structure);
}

#[test]
fn test_request_error_kinds() {
    let err = parse_certificate_request("YmFkc3RyaW5n").expect_err("badstring is not DER");
    assert_eq!(err.kind(), DecodeErrorKind::Structure);

    let err = parse_certificate_request("foobar").expect_err("foobar is not base64");
    assert_eq!(err.kind(), DecodeErrorKind::Base64);
}

#[test]
fn test_serialized_field_names() {
    let csr = parse_certificate_request(CSR_PEM).expect("PEM literal");
    let value = serde_json::to_value(&csr).expect("serializable");

    assert_eq!(value["Subject"]["CommonName"], "example.com");
    assert_eq!(value["SignatureAlgorithm"], "SHA256-RSA");
    assert_eq!(value["PublicKey"]["E"], 65537);
    assert_eq!(value["Attributes"], serde_json::json!([]));
}
