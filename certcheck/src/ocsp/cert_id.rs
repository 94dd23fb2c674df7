//! Preparation of CertID values identifying a certificate in an OCSP request

use alloc::vec::Vec;

use der::asn1::OctetString;
use der::Encode;
use sha1::{Digest, Sha1};
use spki::AlgorithmIdentifierOwned;
use x509_cert::Certificate;
use x509_ocsp::CertId;

use crate::util::error::*;
use crate::util::pdv_alg_oids::PKIXALG_SHA1;

/// `get_key_hash` returns the SHA-1 hash of the subject public key of the given certificate (excluding
/// the tag, length and number of unused bits).
pub fn get_key_hash(cert: &Certificate) -> Result<Vec<u8>> {
    Ok(Sha1::digest(
        cert.tbs_certificate
            .subject_public_key_info
            .subject_public_key
            .raw_bytes(),
    )
    .to_vec())
}

/// `get_subject_name_hash` returns the SHA-1 hash of the DER encoding of the subject name of the
/// given certificate.
pub fn get_subject_name_hash(cert: &Certificate) -> Result<Vec<u8>> {
    let enc_subject = cert.tbs_certificate.subject.to_der()?;
    Ok(Sha1::digest(enc_subject.as_slice()).to_vec())
}

/// `cert_id_for` prepares a SHA-1 based [`CertId`] for `target_cert` using the name and key of
/// `issuers_cert`. The hash algorithm identifier is encoded with absent parameters.
pub fn cert_id_for(target_cert: &Certificate, issuers_cert: &Certificate) -> Result<CertId> {
    let hash_algorithm = AlgorithmIdentifierOwned {
        oid: PKIXALG_SHA1,
        parameters: None,
    };
    let issuer_name_hash = OctetString::new(get_subject_name_hash(issuers_cert)?)?;
    let issuer_key_hash = OctetString::new(get_key_hash(issuers_cert)?)?;

    Ok(CertId {
        hash_algorithm,
        issuer_name_hash,
        issuer_key_hash,
        serial_number: target_cert.tbs_certificate.serial_number.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use der::Decode;
    use hex_literal::hex;

    #[test]
    fn cert_id_for_server_cert() {
        let ca = Certificate::from_der(include_bytes!("../../tests/examples/TestRoot.der")).unwrap();
        let ee =
            Certificate::from_der(include_bytes!("../../tests/examples/ServerCert.der")).unwrap();

        let cert_id = cert_id_for(&ee, &ca).unwrap();
        assert_eq!(PKIXALG_SHA1, cert_id.hash_algorithm.oid);
        assert!(cert_id.hash_algorithm.parameters.is_none());
        assert_eq!(
            &hex!("03808F5B1C71275AED175B2093CD9649C4E42621"),
            cert_id.issuer_name_hash.as_bytes()
        );
        assert_eq!(
            &hex!("59DFFC7602638720F9CB523D5FB78F97B1A0C83A"),
            cert_id.issuer_key_hash.as_bytes()
        );
        assert_eq!(&[0x2a], cert_id.serial_number.as_bytes());
    }
}
