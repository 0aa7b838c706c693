//! Algorithm naming and public key projection

use x509_parser::public_key::PublicKey as ParsedPublicKey;
use x509_parser::x509::SubjectPublicKeyInfo;

use crate::types::PublicKey;

const RSA_ENCRYPTION_OID: &str = "1.2.840.113549.1.1.1";
const DSA_OID: &str = "1.2.840.10040.4.1";
const EC_PUBLIC_KEY_OID: &str = "1.2.840.10045.2.1";
const X25519_OID: &str = "1.3.101.110";
const X448_OID: &str = "1.3.101.111";
const ED25519_OID: &str = "1.3.101.112";
const ED448_OID: &str = "1.3.101.113";

/// Public key algorithm name for a SubjectPublicKeyInfo algorithm OID
#[must_use]
pub fn public_key_algorithm_name(oid: &str) -> String {
    match oid {
        RSA_ENCRYPTION_OID => "RSA",
        DSA_OID => "DSA",
        EC_PUBLIC_KEY_OID => "ECDSA",
        X25519_OID => "X25519",
        X448_OID => "X448",
        ED25519_OID => "Ed25519",
        ED448_OID => "Ed448",
        other => return other.to_string(),
    }
    .to_string()
}

/// Signature algorithm name for an AlgorithmIdentifier OID
#[must_use]
pub fn signature_algorithm_name(oid: &str) -> String {
    match oid {
        "1.2.840.113549.1.1.2" => "MD2-RSA",
        "1.2.840.113549.1.1.4" => "MD5-RSA",
        "1.2.840.113549.1.1.5" => "SHA1-RSA",
        "1.2.840.113549.1.1.11" => "SHA256-RSA",
        "1.2.840.113549.1.1.12" => "SHA384-RSA",
        "1.2.840.113549.1.1.13" => "SHA512-RSA",
        "1.2.840.113549.1.1.10" => "RSASSA-PSS",
        "1.2.840.10040.4.3" => "DSA-SHA1",
        "2.16.840.1.101.3.4.3.2" => "DSA-SHA256",
        "1.2.840.10045.4.1" => "ECDSA-SHA1",
        "1.2.840.10045.4.3.2" => "ECDSA-SHA256",
        "1.2.840.10045.4.3.3" => "ECDSA-SHA384",
        "1.2.840.10045.4.3.4" => "ECDSA-SHA512",
        ED25519_OID => "Ed25519",
        ED448_OID => "Ed448",
        other => return other.to_string(),
    }
    .to_string()
}

/// Named curve and its size for an EC parameters OID
fn named_curve(oid: &str) -> Option<(&'static str, u32)> {
    match oid {
        "1.2.840.10045.3.1.1" => Some(("P-192", 192)),
        "1.3.132.0.33" => Some(("P-224", 224)),
        "1.2.840.10045.3.1.7" => Some(("P-256", 256)),
        "1.3.132.0.34" => Some(("P-384", 384)),
        "1.3.132.0.35" => Some(("P-521", 521)),
        "1.3.132.0.10" => Some(("secp256k1", 256)),
        _ => None,
    }
}

/// Bit length of a big-endian unsigned integer
fn compute_bit_length(bytes: &[u8]) -> Option<u32> {
    let start = bytes.iter().position(|&b| b != 0)?;
    let effective = &bytes[start..];
    let high_bits = 8 - effective[0].leading_zeros();
    let rest_bits = u32::try_from((effective.len() - 1) * 8).ok()?;
    Some(high_bits + rest_bits)
}

fn strip_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    &bytes[start..]
}

/// Big-endian integer that fits in a `u64`
fn small_integer(bytes: &[u8]) -> Option<u64> {
    let bytes = strip_leading_zeros(bytes);
    if bytes.len() > 8 {
        return None;
    }
    Some(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
}

/// Project a SubjectPublicKeyInfo into the rule-facing key object
#[must_use]
pub fn extract_public_key(spki: &SubjectPublicKeyInfo<'_>) -> PublicKey {
    let algorithm_oid = spki.algorithm.algorithm.to_id_string();
    let mut key = PublicKey {
        raw: spki.raw.to_vec(),
        ..PublicKey::default()
    };

    match algorithm_oid.as_str() {
        RSA_ENCRYPTION_OID => match spki.parsed() {
            Ok(ParsedPublicKey::RSA(rsa)) => {
                key.key_size = compute_bit_length(rsa.modulus);
                key.modulus = Some(hex::encode(strip_leading_zeros(rsa.modulus)));
                key.exponent = small_integer(rsa.exponent);
            }
            Ok(_) => {}
            Err(e) => tracing::debug!("RSA public key not decoded: {e}"),
        },
        EC_PUBLIC_KEY_OID => {
            let curve = spki
                .algorithm
                .parameters
                .as_ref()
                .and_then(|params| params.as_oid().ok())
                .map(|oid| oid.to_id_string());
            match curve.as_deref().and_then(named_curve) {
                Some((name, bits)) => {
                    key.curve = Some(name.to_string());
                    key.key_size = Some(bits);
                }
                None => key.curve = curve,
            }
        }
        X25519_OID | ED25519_OID => key.key_size = Some(256),
        X448_OID => key.key_size = Some(448),
        ED448_OID => key.key_size = Some(456),
        _ => {}
    }

    key
}
