//! Distinguished name attribute extraction
//!
//! Attributes are keyed by name; anything without a well-known name is kept
//! under its dotted OID so no attribute is silently dropped.

use x509_parser::x509::{AttributeTypeAndValue, X509Name};

use crate::types::DistinguishedName;

/// Map a dotted attribute OID to the key policy rules use
fn attribute_key(oid: &str) -> Option<&'static str> {
    match oid {
        "2.5.4.3" => Some("CommonName"),
        "2.5.4.5" => Some("SerialNumber"),
        "2.5.4.6" => Some("Country"),
        "2.5.4.7" => Some("Locality"),
        "2.5.4.8" => Some("Province"),
        "2.5.4.9" => Some("StreetAddress"),
        "2.5.4.10" => Some("Organization"),
        "2.5.4.11" => Some("OrganizationalUnit"),
        "2.5.4.17" => Some("PostalCode"),
        "1.2.840.113549.1.9.1" => Some("EmailAddress"),
        _ => None,
    }
}

/// Render an attribute value as text. Non-string values become `#` + hex of
/// their content octets.
fn attribute_value(atv: &AttributeTypeAndValue<'_>) -> String {
    if let Ok(value) = atv.as_str() {
        return value.to_string();
    }
    let raw = atv.attr_value().as_bytes();
    match std::str::from_utf8(raw) {
        Ok(value) => value.to_string(),
        Err(_) => format!("#{}", hex::encode(raw)),
    }
}

/// Extract every attribute of `name`, in encoded order, so that later
/// occurrences overwrite earlier ones.
pub fn extract_name_attributes(name: &X509Name<'_>) -> DistinguishedName {
    let mut attrs = DistinguishedName::default();

    for rdn in name.iter() {
        for atv in rdn.iter() {
            let oid = atv.attr_type().to_id_string();
            let value = attribute_value(atv);
            match attribute_key(&oid) {
                Some(key) => attrs.insert(key, value),
                None => attrs.insert(oid, value),
            }
        }
    }

    attrs
}

#[cfg(test)]
mod tests {
    use super::{attribute_key, extract_name_attributes};
    use hex_literal::hex;
    use x509_parser::prelude::FromDer;
    use x509_parser::x509::X509Name;

    #[test]
    fn test_repeated_attribute_keeps_last_value() {
        // SEQUENCE { SET { CN "a" }, SET { CN "b" }, SET { 0.9.2342.19200300.100.1.25 "c" } }
        let der = hex!(
            "30 2b"
            "31 0a 30 08 06 03 55 04 03 0c 01 61"
            "31 0a 30 08 06 03 55 04 03 0c 01 62"
            "31 11 30 0f 06 0a 09 92 26 89 93 f2 2c 64 01 19 16 01 63"
        );
        let (rest, name) = X509Name::from_der(&der).expect("valid name");
        assert!(rest.is_empty());

        let attrs = extract_name_attributes(&name);
        assert_eq!(attrs.common_name(), Some("b"));
        assert_eq!(attrs.get("0.9.2342.19200300.100.1.25"), Some("c"));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_well_known_keys() {
        assert_eq!(attribute_key("2.5.4.3"), Some("CommonName"));
        assert_eq!(attribute_key("2.5.4.8"), Some("Province"));
        assert_eq!(attribute_key("0.9.2342.19200300.100.1.25"), None);
    }
}
