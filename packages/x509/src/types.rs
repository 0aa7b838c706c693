//! Object model exposed to policy rules
//!
//! Values serialize with PascalCase keys. Byte fields are rendered as padded
//! standard base64, timestamps as RFC 3339 UTC, serial numbers as decimal
//! strings. Every collection is ordered so output is stable across calls.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

use crate::error::{Result, X509Error};

fn serialize_base64<T, S>(bytes: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: AsRef<[u8]>,
    S: Serializer,
{
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    serializer.serialize_str(&STANDARD.encode(bytes.as_ref()))
}

fn serialize_base64_option<S: Serializer>(
    bytes: &Option<Vec<u8>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match bytes {
        Some(bytes) => serialize_base64(bytes, serializer),
        None => serializer.serialize_none(),
    }
}

/// Distinguished name attributes keyed by attribute name
///
/// Keys are present only when encoded. A repeated attribute keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DistinguishedName(BTreeMap<String, String>);

impl DistinguishedName {
    /// Set `key`, replacing any earlier value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up an attribute by name (`CommonName`, `Organization`, ...)
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// `CommonName` attribute
    #[must_use]
    pub fn common_name(&self) -> Option<&str> {
        self.get("CommonName")
    }

    /// `Organization` attribute
    #[must_use]
    pub fn organization(&self) -> Option<&str> {
        self.get("Organization")
    }

    /// `Country` attribute
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.get("Country")
    }

    /// Attributes in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no attribute was encoded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One certificate extension, undecoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Extension {
    /// Dotted extension OID
    pub id: String,
    /// Whether the extension is marked critical
    pub critical: bool,
    /// Raw extnValue contents
    #[serde(serialize_with = "serialize_base64")]
    pub value: Vec<u8>,
}

/// Request attribute, undecoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attribute {
    /// Dotted attribute OID
    pub id: String,
    /// Raw DER of the attribute value set
    #[serde(serialize_with = "serialize_base64")]
    pub value: Vec<u8>,
}

/// Subject public key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublicKey {
    /// Key size in bits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_size: Option<u32>,
    /// Named curve for EC keys (`P-256`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
    /// RSA modulus, lowercase hex without leading zeros
    #[serde(rename = "N", skip_serializing_if = "Option::is_none")]
    pub modulus: Option<String>,
    /// RSA public exponent
    #[serde(rename = "E", skip_serializing_if = "Option::is_none")]
    pub exponent: Option<u64>,
    /// DER SubjectPublicKeyInfo
    #[serde(serialize_with = "serialize_base64")]
    pub raw: Vec<u8>,
}

/// Names from a subjectAltName extension
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubjectAltNames {
    /// dNSName entries
    #[serde(rename = "DNSNames")]
    pub dns_names: Vec<String>,
    /// rfc822Name entries
    #[serde(rename = "EmailAddresses")]
    pub email_addresses: Vec<String>,
    /// iPAddress entries in textual form
    #[serde(rename = "IPAddresses")]
    pub ip_addresses: Vec<String>,
    /// uniformResourceIdentifier entries
    #[serde(rename = "URIs")]
    pub uris: Vec<String>,
}

/// Decoded values of the well-known certificate extensions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtensionDetails {
    /// Subject Alternative Names
    #[serde(flatten)]
    pub alt_names: SubjectAltNames,
    /// A BasicConstraints extension was present
    pub basic_constraints_valid: bool,
    /// BasicConstraints cA flag
    #[serde(rename = "IsCA")]
    pub is_ca: bool,
    /// BasicConstraints pathLenConstraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_path_len: Option<u32>,
    /// KeyUsage bits that are set, by name
    pub key_usage: Vec<String>,
    /// ExtendedKeyUsage purposes; unknown ones as dotted OIDs
    pub ext_key_usage: Vec<String>,
    /// SubjectKeyIdentifier
    #[serde(serialize_with = "serialize_base64_option")]
    pub subject_key_id: Option<Vec<u8>>,
    /// AuthorityKeyIdentifier keyIdentifier
    #[serde(serialize_with = "serialize_base64_option")]
    pub authority_key_id: Option<Vec<u8>>,
    /// OCSP responder URLs from Authority Information Access
    #[serde(rename = "OCSPServer")]
    pub ocsp_server: Vec<String>,
    /// caIssuers URLs from Authority Information Access
    #[serde(rename = "IssuingCertificateURL")]
    pub issuing_certificate_url: Vec<String>,
    /// Full-name URIs of the CRL distribution points
    #[serde(rename = "CRLDistributionPoints")]
    pub crl_distribution_points: Vec<String>,
}

/// A parsed X.509 certificate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Certificate {
    /// Complete DER encoding of this certificate
    #[serde(serialize_with = "serialize_base64")]
    pub raw: Vec<u8>,
    /// 1-based X.509 version
    pub version: u32,
    /// Decimal serial number
    pub serial_number: String,
    /// Subject distinguished name
    pub subject: DistinguishedName,
    /// Issuer distinguished name
    pub issuer: DistinguishedName,
    /// RFC 3339, UTC
    pub not_before: String,
    /// RFC 3339, UTC
    pub not_after: String,
    /// Signature algorithm name, or dotted OID when unnamed
    pub signature_algorithm: String,
    /// Signature bits
    #[serde(serialize_with = "serialize_base64")]
    pub signature: Vec<u8>,
    /// Public key algorithm name, or dotted OID when unnamed
    pub public_key_algorithm: String,
    /// Subject public key details
    pub public_key: PublicKey,
    /// All extensions in encoded order
    pub extensions: Vec<Extension>,
    /// Decoded well-known extensions
    #[serde(flatten)]
    pub details: ExtensionDetails,
}

/// Certificates recovered from one input, in encounter order
///
/// Never empty. Order is not rearranged by issuer relationships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CertificateChain(Vec<Certificate>);

impl CertificateChain {
    /// Build a chain; an empty list is a structure failure
    pub fn new(certificates: Vec<Certificate>) -> Result<Self> {
        if certificates.is_empty() {
            return Err(X509Error::structure("no certificates in input"));
        }
        Ok(Self(certificates))
    }

    /// First certificate encountered
    #[must_use]
    pub fn leaf(&self) -> &Certificate {
        &self.0[0]
    }

    /// Certificates in encounter order
    pub fn iter(&self) -> std::slice::Iter<'_, Certificate> {
        self.0.iter()
    }

    /// Number of certificates
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed chain
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Certificate] {
        &self.0
    }

    /// Take the certificates
    #[must_use]
    pub fn into_vec(self) -> Vec<Certificate> {
        self.0
    }
}

impl<'a> IntoIterator for &'a CertificateChain {
    type Item = &'a Certificate;
    type IntoIter = std::slice::Iter<'a, Certificate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for CertificateChain {
    type Item = Certificate;
    type IntoIter = std::vec::IntoIter<Certificate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A parsed PKCS#10 certificate signing request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CertificateRequest {
    /// DER encoding of the request
    #[serde(serialize_with = "serialize_base64")]
    pub raw: Vec<u8>,
    /// Version field as encoded (0 for PKCS#10 v1)
    pub version: u32,
    /// Subject distinguished name
    pub subject: DistinguishedName,
    /// Signature algorithm name, or dotted OID when unnamed
    pub signature_algorithm: String,
    /// Signature bits
    #[serde(serialize_with = "serialize_base64")]
    pub signature: Vec<u8>,
    /// Public key algorithm name, or dotted OID when unnamed
    pub public_key_algorithm: String,
    /// Subject public key details
    pub public_key: PublicKey,
    /// Request attributes in encoded order
    pub attributes: Vec<Attribute>,
    /// Extensions carried in the extensionRequest attribute
    pub extensions: Vec<Extension>,
    /// Subject Alternative Names from the requested extensions
    #[serde(flatten)]
    pub alt_names: SubjectAltNames,
}
