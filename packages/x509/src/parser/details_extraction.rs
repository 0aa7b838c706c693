//! Decoding of the well-known certificate extensions
//!
//! Subject Alternative Names, BasicConstraints, KeyUsage, ExtendedKeyUsage,
//! key identifiers, Authority Information Access and CRL distribution points.
//! Unrecognised or malformed extensions are left to the raw extension list.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use x509_parser::extensions::{
    DistributionPointName, ExtendedKeyUsage, GeneralName, KeyUsage, ParsedExtension,
    X509Extension,
};

use crate::types::{Extension, ExtensionDetails, SubjectAltNames};

const OID_AIA_OCSP: &str = "1.3.6.1.5.5.7.48.1";
const OID_AIA_CA_ISSUERS: &str = "1.3.6.1.5.5.7.48.2";

/// Raw projection of every extension, in encoded order
#[must_use]
pub fn raw_extensions(extensions: &[X509Extension<'_>]) -> Vec<Extension> {
    extensions
        .iter()
        .map(|ext| Extension {
            id: ext.oid.to_id_string(),
            critical: ext.critical,
            value: ext.value.to_vec(),
        })
        .collect()
}

fn ip_address_string(bytes: &[u8]) -> Option<String> {
    let ip: IpAddr = match bytes.len() {
        4 => Ipv4Addr::new(bytes[0], bytes[1], bytes[2], bytes[3]).into(),
        16 => {
            let octets: [u8; 16] = bytes.try_into().ok()?;
            Ipv6Addr::from(octets).into()
        }
        _ => return None,
    };
    Some(ip.to_string())
}

fn push_alt_name(names: &mut SubjectAltNames, name: &GeneralName<'_>) {
    match name {
        GeneralName::DNSName(dns) => names.dns_names.push((*dns).to_string()),
        GeneralName::RFC822Name(email) => names.email_addresses.push((*email).to_string()),
        GeneralName::URI(uri) => names.uris.push((*uri).to_string()),
        GeneralName::IPAddress(bytes) => match ip_address_string(bytes) {
            Some(ip) => names.ip_addresses.push(ip),
            None => tracing::debug!(len = bytes.len(), "skipping malformed SAN IP address"),
        },
        _ => {}
    }
}

fn key_usage_names(ku: &KeyUsage) -> Vec<String> {
    let flags = [
        (ku.digital_signature(), "DigitalSignature"),
        (ku.non_repudiation(), "ContentCommitment"),
        (ku.key_encipherment(), "KeyEncipherment"),
        (ku.data_encipherment(), "DataEncipherment"),
        (ku.key_agreement(), "KeyAgreement"),
        (ku.key_cert_sign(), "CertSign"),
        (ku.crl_sign(), "CRLSign"),
        (ku.encipher_only(), "EncipherOnly"),
        (ku.decipher_only(), "DecipherOnly"),
    ];
    flags
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, name)| (*name).to_string())
        .collect()
}

fn ext_key_usage_names(eku: &ExtendedKeyUsage<'_>) -> Vec<String> {
    let flags = [
        (eku.any, "Any"),
        (eku.server_auth, "ServerAuth"),
        (eku.client_auth, "ClientAuth"),
        (eku.code_signing, "CodeSigning"),
        (eku.email_protection, "EmailProtection"),
        (eku.time_stamping, "TimeStamping"),
        (eku.ocsp_signing, "OCSPSigning"),
    ];
    let mut names: Vec<String> = flags
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, name)| (*name).to_string())
        .collect();
    names.extend(eku.other.iter().map(|oid| oid.to_id_string()));
    names
}

/// Subject Alternative Names only, for certificate requests
#[must_use]
pub fn extract_alt_names(extensions: &[X509Extension<'_>]) -> SubjectAltNames {
    let mut names = SubjectAltNames::default();
    for ext in extensions {
        if let ParsedExtension::SubjectAlternativeName(san) = ext.parsed_extension() {
            for name in &san.general_names {
                push_alt_name(&mut names, name);
            }
        }
    }
    names
}

/// Decode the well-known extensions of a certificate
#[must_use]
pub fn extract_certificate_details(extensions: &[X509Extension<'_>]) -> ExtensionDetails {
    let mut details = ExtensionDetails::default();

    for ext in extensions {
        match ext.parsed_extension() {
            ParsedExtension::SubjectAlternativeName(san) => {
                for name in &san.general_names {
                    push_alt_name(&mut details.alt_names, name);
                }
            }
            ParsedExtension::BasicConstraints(bc) => {
                details.basic_constraints_valid = true;
                details.is_ca = bc.ca;
                details.max_path_len = bc.path_len_constraint;
            }
            ParsedExtension::KeyUsage(ku) => details.key_usage = key_usage_names(ku),
            ParsedExtension::ExtendedKeyUsage(eku) => {
                details.ext_key_usage = ext_key_usage_names(eku);
            }
            ParsedExtension::SubjectKeyIdentifier(ski) => {
                details.subject_key_id = Some(ski.0.to_vec());
            }
            ParsedExtension::AuthorityKeyIdentifier(aki) => {
                details.authority_key_id = aki.key_identifier.as_ref().map(|id| id.0.to_vec());
            }
            ParsedExtension::AuthorityInfoAccess(aia) => {
                for desc in &aia.accessdescs {
                    let GeneralName::URI(uri) = &desc.access_location else {
                        continue;
                    };
                    match desc.access_method.to_id_string().as_str() {
                        OID_AIA_OCSP => details.ocsp_server.push((*uri).to_string()),
                        OID_AIA_CA_ISSUERS => {
                            details.issuing_certificate_url.push((*uri).to_string());
                        }
                        _ => {}
                    }
                }
            }
            ParsedExtension::CRLDistributionPoints(crl) => {
                for point in &crl.points {
                    if let Some(DistributionPointName::FullName(names)) = &point.distribution_point
                    {
                        for name in names {
                            if let GeneralName::URI(uri) = name {
                                details.crl_distribution_points.push((*uri).to_string());
                            }
                        }
                    }
                }
            }
            _ => {}
        }
    }

    details
}
