//! Structural walking of DER blobs
//!
//! Certificate mode keeps parsing from the first unconsumed byte until the
//! blob is exhausted, so concatenated DER yields a chain. A remainder that
//! does not parse fails the call rather than truncating the chain. Request
//! mode parses one structure and ignores anything after it.

use time::format_description::well_known::Rfc3339;
use x509_parser::certificate::X509Certificate;
use x509_parser::certification_request::X509CertificationRequest;
use x509_parser::cri_attributes::ParsedCriAttribute;
use x509_parser::prelude::FromDer;
use x509_parser::time::ASN1Time;

use crate::error::{Result, X509Error};
use crate::types::{Attribute, Certificate, CertificateChain, CertificateRequest};

use super::details_extraction::{extract_alt_names, extract_certificate_details, raw_extensions};
use super::key_extraction::{extract_public_key, public_key_algorithm_name, signature_algorithm_name};
use super::name_extraction::extract_name_attributes;

fn format_time(time: &ASN1Time) -> Result<String> {
    time.to_datetime()
        .format(&Rfc3339)
        .map_err(|e| X509Error::structure(format!("validity time out of range: {e}")))
}

/// Project one parsed certificate; `raw` is exactly the bytes it was parsed from
pub fn parse_x509_certificate(cert: &X509Certificate<'_>, raw: &[u8]) -> Result<Certificate> {
    let tbs = &cert.tbs_certificate;
    let extensions = tbs.extensions();

    Ok(Certificate {
        raw: raw.to_vec(),
        version: tbs.version.0 + 1,
        serial_number: tbs.serial.to_string(),
        subject: extract_name_attributes(&tbs.subject),
        issuer: extract_name_attributes(&tbs.issuer),
        not_before: format_time(&tbs.validity.not_before)?,
        not_after: format_time(&tbs.validity.not_after)?,
        signature_algorithm: signature_algorithm_name(
            &cert.signature_algorithm.algorithm.to_id_string(),
        ),
        signature: cert.signature_value.data.to_vec(),
        public_key_algorithm: public_key_algorithm_name(
            &tbs.subject_pki.algorithm.algorithm.to_id_string(),
        ),
        public_key: extract_public_key(&tbs.subject_pki),
        extensions: raw_extensions(extensions),
        details: extract_certificate_details(extensions),
    })
}

/// Parse every certificate in `blob`, appending to `out` in order
fn walk_blob(blob: &[u8], out: &mut Vec<Certificate>) -> Result<()> {
    let mut remaining = blob;
    loop {
        let (rest, cert) = X509Certificate::from_der(remaining).map_err(|e| {
            let offset = blob.len() - remaining.len();
            X509Error::structure(format!("certificate at byte {offset}: {e}"))
        })?;
        let consumed = remaining.len() - rest.len();
        out.push(parse_x509_certificate(&cert, &remaining[..consumed])?);

        if rest.is_empty() {
            return Ok(());
        }
        remaining = rest;
    }
}

/// Parse the certificates of every blob, concatenated in blob order
pub fn walk_certificates(blobs: &[Vec<u8>]) -> Result<CertificateChain> {
    let mut certificates = Vec::with_capacity(blobs.len());
    for blob in blobs {
        walk_blob(blob, &mut certificates)?;
    }
    tracing::debug!(
        blobs = blobs.len(),
        certificates = certificates.len(),
        "walked certificate structures"
    );
    CertificateChain::new(certificates)
}

/// Parse one certificate signing request from the start of `blob`
pub fn walk_request(blob: &[u8]) -> Result<CertificateRequest> {
    let (rest, csr) = X509CertificationRequest::from_der(blob)
        .map_err(|e| X509Error::structure(format!("certificate request: {e}")))?;
    if !rest.is_empty() {
        tracing::debug!(trailing = rest.len(), "ignoring bytes after certificate request");
    }

    let info = &csr.certification_request_info;
    let mut attributes = Vec::new();
    let mut requested = Vec::new();
    for attr in info.attributes() {
        attributes.push(Attribute {
            id: attr.oid.to_id_string(),
            value: attr.value.to_vec(),
        });
        if let ParsedCriAttribute::ExtensionRequest(req) = attr.parsed_attribute() {
            requested.extend(req.extensions.iter().cloned());
        }
    }

    Ok(CertificateRequest {
        raw: blob[..blob.len() - rest.len()].to_vec(),
        version: info.version.0,
        subject: extract_name_attributes(&info.subject),
        signature_algorithm: signature_algorithm_name(
            &csr.signature_algorithm.algorithm.to_id_string(),
        ),
        signature: csr.signature_value.data.to_vec(),
        public_key_algorithm: public_key_algorithm_name(
            &info.subject_pki.algorithm.algorithm.to_id_string(),
        ),
        public_key: extract_public_key(&info.subject_pki),
        attributes,
        extensions: raw_extensions(&requested),
        alt_names: extract_alt_names(&requested),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeErrorKind;

    #[test]
    fn test_garbage_blob_is_structure_error() {
        let err = walk_certificates(&[b"badstring".to_vec()]).expect_err("not DER");
        assert_eq!(err.kind(), DecodeErrorKind::Structure);
        assert!(err.to_string().starts_with("asn1: structure error"));
    }

    #[test]
    fn test_empty_blob_is_structure_error() {
        let err = walk_certificates(&[Vec::new()]).expect_err("nothing to parse");
        assert_eq!(err.kind(), DecodeErrorKind::Structure);
    }

    #[test]
    fn test_empty_request_is_structure_error() {
        let err = walk_request(&[]).expect_err("nothing to parse");
        assert_eq!(err.kind(), DecodeErrorKind::Structure);
    }
}
